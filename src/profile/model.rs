use serde::{Deserialize, Serialize};

/// A resolved display profile.
///
/// `exists == false` is the hard-failure sentinel: the lookup pipeline itself failed, and
/// `avatar_url` is empty with no `display_name`. A profile that was found but has no image
/// still has `exists == true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Canonical username, never empty and never prefixed with `@`.
    pub username: String,
    pub display_name: Option<String>,
    /// High-resolution avatar URL. Empty means "no image available".
    pub avatar_url: String,
    pub exists: bool,
}

impl Profile {
    /// The sentinel returned when every lookup attempt failed.
    pub fn failed(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            display_name: None,
            avatar_url: String::new(),
            exists: false,
        }
    }

    pub(crate) fn placeholder(username: &str, avatar_url: String) -> Self {
        Self {
            username: username.to_string(),
            display_name: Some(username.to_string()),
            avatar_url,
            exists: true,
        }
    }

    pub fn has_avatar(&self) -> bool {
        !self.avatar_url.is_empty()
    }
}

/// Profile fields recovered from one scraper document, before defaulting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedFields {
    pub username: Option<String>,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
}

impl ExtractedFields {
    /// Promote to a full [`Profile`], filling gaps from the requested username.
    pub fn into_profile(self, requested: &str) -> Profile {
        let username = self.username.unwrap_or_else(|| requested.to_string());
        let display_name = self.display_name.unwrap_or_else(|| username.clone());
        Profile {
            username,
            display_name: Some(display_name),
            avatar_url: self.avatar_url.unwrap_or_default(),
            exists: true,
        }
    }
}
