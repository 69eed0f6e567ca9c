//! Ordered request shapes sent to the scraping task.

use serde::Serialize;

/// Profile page base; the username and a trailing slash are appended.
const PROFILE_URL_BASE: &str = "https://www.instagram.com/";

const DIRECT_PROFILE_OUTPUT: &str = "async ({ data, item, page, request, customData }) => {
  return { ...data, directProfileData: true };
}";

const SEARCH_OUTPUT: &str = "async ({ data, item, page, request, customData }) => {
  const profileData = data || item || {};
  return { ...profileData, searchBasedData: true };
}";

/// Which lookup strategy a configuration encodes. Used for logging only; never sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Scrape the profile page URL directly.
    DirectUrl,
    /// Search by bare username.
    UsernameSearch,
    /// Fetch one post and recover its owner metadata.
    PostOwner,
}

impl Strategy {
    pub fn slug(self) -> &'static str {
        match self {
            Strategy::DirectUrl => "direct_url",
            Strategy::UsernameSearch => "username_search",
            Strategy::PostOwner => "post_owner",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    User,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultsType {
    Details,
    Posts,
}

/// Egress pool the scraper should route through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProxyGroup {
    Residential,
    Datacenter,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyConfig {
    pub use_apify_proxy: bool,
    pub apify_proxy_groups: Vec<ProxyGroup>,
}

impl ProxyConfig {
    fn pool(group: ProxyGroup) -> Self {
        Self {
            use_apify_proxy: true,
            apify_proxy_groups: vec![group],
        }
    }
}

/// One request payload for the scraping task.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestConfiguration {
    #[serde(skip)]
    pub strategy: Strategy,
    /// Profile URL or bare username.
    pub search: String,
    pub search_type: SearchType,
    pub search_limit: u32,
    pub results_type: ResultsType,
    pub results_limit: u32,
    pub add_parent_data: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enhance_user_search_with_facebook_page: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_has_stories: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_has_highlights: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_recent_posts: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extend_output_function: Option<String>,
    pub proxy: ProxyConfig,
}

impl RequestConfiguration {
    /// The username this configuration asks about, whether `search` is a URL or bare.
    pub fn username(&self) -> &str {
        self.search
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or(&self.search)
    }
}

/// Builds the ordered configuration sequence for `username` (already stripped of `@`).
///
/// Most specific first: direct profile URL, then username search, then a single post whose
/// owner block carries the profile. Pure and deterministic.
pub fn configurations(username: &str) -> Vec<RequestConfiguration> {
    vec![
        RequestConfiguration {
            strategy: Strategy::DirectUrl,
            search: format!("{PROFILE_URL_BASE}{username}/"),
            search_type: SearchType::User,
            search_limit: 3,
            results_type: ResultsType::Details,
            results_limit: 3,
            add_parent_data: true,
            enhance_user_search_with_facebook_page: Some(true),
            include_has_stories: Some(true),
            include_has_highlights: Some(true),
            include_recent_posts: Some(true),
            extend_output_function: Some(DIRECT_PROFILE_OUTPUT.to_string()),
            proxy: ProxyConfig::pool(ProxyGroup::Residential),
        },
        RequestConfiguration {
            strategy: Strategy::UsernameSearch,
            search: username.to_string(),
            search_type: SearchType::User,
            search_limit: 5,
            results_type: ResultsType::Details,
            results_limit: 5,
            add_parent_data: true,
            enhance_user_search_with_facebook_page: Some(false),
            include_has_stories: Some(true),
            include_has_highlights: Some(true),
            include_recent_posts: Some(true),
            extend_output_function: Some(SEARCH_OUTPUT.to_string()),
            proxy: ProxyConfig::pool(ProxyGroup::Residential),
        },
        RequestConfiguration {
            strategy: Strategy::PostOwner,
            search: username.to_string(),
            search_type: SearchType::User,
            search_limit: 1,
            results_type: ResultsType::Posts,
            results_limit: 1,
            add_parent_data: true,
            enhance_user_search_with_facebook_page: None,
            include_has_stories: None,
            include_has_highlights: None,
            include_recent_posts: None,
            extend_output_function: None,
            proxy: ProxyConfig::pool(ProxyGroup::Datacenter),
        },
    ]
}
