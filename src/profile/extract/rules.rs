//! Declarative extraction table: which source keys feed which profile field, and which
//! nested containers are worth descending into.

use crate::profile::model::ExtractedFields;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Field {
    Username,
    DisplayName,
    AvatarUrl,
}

impl Field {
    pub(crate) fn slot(self, fields: &mut ExtractedFields) -> &mut Option<String> {
        match self {
            Field::Username => &mut fields.username,
            Field::DisplayName => &mut fields.display_name,
            Field::AvatarUrl => &mut fields.avatar_url,
        }
    }
}

pub(crate) struct FieldRule {
    pub(crate) field: Field,
    /// Accepted synonyms, highest priority first.
    pub(crate) keys: &'static [&'static str],
}

pub(crate) const FIELD_RULES: &[FieldRule] = &[
    FieldRule {
        field: Field::Username,
        keys: &["username"],
    },
    FieldRule {
        field: Field::DisplayName,
        keys: &["fullName", "full_name", "displayName", "display_name", "name"],
    },
    FieldRule {
        field: Field::AvatarUrl,
        keys: &[
            "profilePicUrlHD",
            "profile_pic_url_hd",
            "profilePicUrl",
            "profile_pic_url",
            "avatar",
            "picture",
        ],
    },
];

/// Nested locations searched when the current level has no profile fields, in order.
/// Each entry is a key path; every hop must be an object key.
pub(crate) const CONTAINER_PATHS: &[&[&str]] = &[
    &["owner"],
    &["user"],
    &["graphql", "user"],
    &["data"],
    &["profile"],
    &["userInfo"],
    // generic list-or-object wrappers
    &["items"],
    &["results"],
    &["profiles"],
    &["users"],
    &["posts"],
];

/// A non-empty list under this key confirms the profile exists without carrying its data.
pub(crate) const EXISTENCE_KEY: &str = "urlsFromSearch";
