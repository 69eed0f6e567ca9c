//! Centralized constants for default endpoints, environment keys and UA.

/// Default desktop UA to avoid trivial bot blocking.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// Apify actor-task API base (task id + `/run-sync` is appended).
pub(crate) const DEFAULT_API_BASE: &str = "https://api.apify.com/v2/actor-tasks/";

/// Path suffix of a synchronous task run, relative to the task.
pub(crate) const RUN_SYNC_SUFFIX: &str = "run-sync";

/// Avatar rendering service used for synthesized placeholder images.
pub(crate) const DEFAULT_AVATAR_BASE: &str = "https://ui-avatars.com/api/";

/// Full run URL of the scraping task. Wins over `ENV_TASK`.
pub(crate) const ENV_ENDPOINT: &str = "IG_SCRAPER_ENDPOINT";

/// Scraping task id, e.g. `user~instagram-scraper-task`.
pub(crate) const ENV_TASK: &str = "IG_SCRAPER_TASK";

/// API token appended to the run URL.
pub(crate) const ENV_TOKEN: &str = "IG_SCRAPER_TOKEN";

/// Override for the placeholder avatar service.
pub(crate) const ENV_AVATAR_BASE: &str = "IG_AVATAR_BASE";
