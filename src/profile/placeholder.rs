//! Locally synthesized avatar URLs for profiles without a recovered image.

use url::Url;

/// Generates deterministic avatar-service URLs keyed by username.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarPlaceholder {
    base: Url,
}

impl AvatarPlaceholder {
    pub fn new(base: Url) -> Self {
        Self { base }
    }

    /// The placeholder image URL for `username`.
    pub fn url_for(&self, username: &str) -> String {
        // component-style encoding: a space is `%20`, never `+`
        let query = format!(
            "name={}&size=400&background=fb923c&color=ffffff&bold=true",
            urlencoding::encode(username)
        );
        let mut url = self.base.clone();
        url.set_query(Some(&query));
        url.into()
    }

    /// True when `url` points at the placeholder service.
    ///
    /// Only the host and path prefix are compared, so a URL rendered for any username, over
    /// either scheme or with different styling, still counts.
    pub fn matches(&self, url: &str) -> bool {
        let Ok(candidate) = Url::parse(url) else {
            return false;
        };
        candidate.host_str().is_some()
            && candidate.host_str() == self.base.host_str()
            && candidate.path().starts_with(self.base.path())
    }
}
