//! Best-effort profile extraction over scraper output of unknown shape.
//!
//! The search order is:
//! 1. profile keys on the current object (see `rules::FIELD_RULES`);
//! 2. the fixed nested containers in `rules::CONTAINER_PATHS`, recursively;
//! 3. for arrays, each element in order through steps 1-2;
//! 4. an existence-only answer when the document lists `urlsFromSearch`.
//!
//! Only the fixed key set is followed, so the walk always terminates on a JSON tree.

mod rules;

use rules::{CONTAINER_PATHS, EXISTENCE_KEY, FIELD_RULES};
use serde_json::{Map, Value};

use crate::profile::model::ExtractedFields;

/// Searches `document` for profile fields. `username` is only used for the
/// existence-only fallback; fields found in the document always win.
///
/// Returns `None` when the document carries no profile signal at all.
pub fn extract(document: &Value, username: &str) -> Option<ExtractedFields> {
    if let Some(found) = search(document) {
        tracing::trace!(?found, "profile fields extracted");
        return Some(found);
    }

    if confirms_existence(document) {
        tracing::trace!("only {EXISTENCE_KEY} present; profile exists without details");
        return Some(ExtractedFields {
            username: Some(username.to_string()),
            display_name: Some(username.to_string()),
            avatar_url: None,
        });
    }

    None
}

fn search(value: &Value) -> Option<ExtractedFields> {
    match value {
        Value::Object(map) => direct_fields(map).or_else(|| {
            CONTAINER_PATHS
                .iter()
                .find_map(|path| lookup(map, path).and_then(search))
        }),
        Value::Array(items) => items.iter().find_map(search),
        _ => None,
    }
}

/// Profile fields on this object only. A level counts as a hit when it yields a
/// username or an avatar; a bare display name is not enough.
fn direct_fields(map: &Map<String, Value>) -> Option<ExtractedFields> {
    let mut fields = ExtractedFields::default();
    for rule in FIELD_RULES {
        *rule.field.slot(&mut fields) = first_non_empty(map, rule.keys);
    }

    if fields.username.is_some() || fields.avatar_url.is_some() {
        Some(fields)
    } else {
        None
    }
}

fn first_non_empty(map: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|k| map.get(*k).and_then(Value::as_str))
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

fn lookup<'a>(map: &'a Map<String, Value>, path: &[&str]) -> Option<&'a Value> {
    let (first, rest) = path.split_first()?;
    rest.iter()
        .try_fold(map.get(*first)?, |cur, key| cur.as_object()?.get(*key))
}

fn confirms_existence(document: &Value) -> bool {
    let listed = |v: &Value| {
        v.get(EXISTENCE_KEY)
            .and_then(Value::as_array)
            .is_some_and(|urls| !urls.is_empty())
    };
    match document {
        Value::Array(items) => items.iter().any(listed),
        other => listed(other),
    }
}
