//! Public client surface + builder.
//! Defaults and environment keys live in `constants`.

mod constants;

use crate::core::IgError;
use crate::profile::placeholder::AvatarPlaceholder;
use constants::{
    DEFAULT_API_BASE, DEFAULT_AVATAR_BASE, ENV_AVATAR_BASE, ENV_ENDPOINT, ENV_TASK, ENV_TOKEN,
    RUN_SYNC_SUFFIX, USER_AGENT,
};
use reqwest::Client;
use std::fmt;
use std::time::Duration;
use url::{Position, Url};

/// Thin wrapper that holds a configured HTTP client, the scraper endpoint and the
/// placeholder avatar generator.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Clone)]
pub struct IgClient {
    http: Client,
    endpoint: Url,
    placeholder: AvatarPlaceholder,
}

impl IgClient {
    /// Create a new builder.
    pub fn builder() -> IgClientBuilder {
        IgClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// The placeholder generator this client falls back to.
    pub fn placeholder(&self) -> &AvatarPlaceholder {
        &self.placeholder
    }

    /// The scraper endpoint without its query string, safe to log.
    pub fn endpoint_redacted(&self) -> String {
        self.endpoint[..Position::AfterPath].to_string()
    }

    /// Whether `url` was synthesized by this client's placeholder generator.
    pub fn is_placeholder_avatar(&self, url: &str) -> bool {
        self.placeholder.matches(url)
    }
}

impl fmt::Debug for IgClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IgClient")
            .field("endpoint", &self.endpoint_redacted())
            .field("placeholder", &self.placeholder)
            .finish_non_exhaustive()
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct IgClientBuilder {
    user_agent: Option<String>,
    endpoint: Option<Url>,
    api_base: Option<Url>,
    task: Option<String>,
    token: Option<String>,
    avatar_base: Option<Url>,

    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl fmt::Debug for IgClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IgClientBuilder")
            .field("endpoint", &self.endpoint.as_ref().map(|u| &u[..Position::AfterPath]))
            .field("api_base", &self.api_base.as_ref().map(Url::as_str))
            .field("task", &self.task)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("avatar_base", &self.avatar_base.as_ref().map(Url::as_str))
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .finish_non_exhaustive()
    }
}

impl IgClientBuilder {
    /// Seed a builder from the process environment.
    ///
    /// Reads `IG_SCRAPER_ENDPOINT`, `IG_SCRAPER_TASK`, `IG_SCRAPER_TOKEN` and `IG_AVATAR_BASE`.
    /// Unset variables are left to the builder defaults; explicit setters called afterwards win.
    ///
    /// # Errors
    ///
    /// Returns `IgError::Url` if `IG_SCRAPER_ENDPOINT` or `IG_AVATAR_BASE` is not a valid URL.
    pub fn from_env() -> Result<Self, IgError> {
        let mut b = Self::default();
        if let Some(raw) = non_empty_var(ENV_ENDPOINT) {
            b.endpoint = Some(Url::parse(&raw)?);
        }
        if let Some(raw) = non_empty_var(ENV_AVATAR_BASE) {
            b.avatar_base = Some(Url::parse(&raw)?);
        }
        b.task = non_empty_var(ENV_TASK);
        b.token = non_empty_var(ENV_TOKEN);
        Ok(b)
    }

    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Full run URL of the scraping task. Takes precedence over [`Self::task`].
    pub fn endpoint(mut self, url: Url) -> Self {
        self.endpoint = Some(url);
        self
    }

    /// Override the actor-task API base (e.g., `https://api.apify.com/v2/actor-tasks/`).
    pub fn api_base(mut self, url: Url) -> Self {
        self.api_base = Some(url);
        self
    }

    /// Scraping task id; the endpoint becomes `<api_base><task>/run-sync`.
    pub fn task(mut self, task: impl Into<String>) -> Self {
        self.task = Some(task.into());
        self
    }

    /// API token, sent as the `token` query parameter.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Override the placeholder avatar service (e.g., `https://ui-avatars.com/api/`).
    pub fn avatar_base(mut self, url: Url) -> Self {
        self.avatar_base = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns `IgError::Config` if neither an endpoint nor a task was provided,
    /// `IgError::Url` if a URL cannot be composed, or `IgError::Http` if the HTTP client
    /// cannot be constructed.
    pub fn build(self) -> Result<IgClient, IgError> {
        let mut endpoint = match (self.endpoint, self.task) {
            (Some(url), _) => url,
            (None, Some(task)) => {
                let base = self.api_base.unwrap_or(Url::parse(DEFAULT_API_BASE)?);
                base.join(&format!("{task}/{RUN_SYNC_SUFFIX}"))?
            }
            (None, None) => {
                return Err(IgError::Config(
                    "no scraper endpoint or task configured".into(),
                ));
            }
        };
        if let Some(token) = self.token.as_deref() {
            endpoint.query_pairs_mut().append_pair("token", token);
        }

        let avatar_base = self
            .avatar_base
            .unwrap_or(Url::parse(DEFAULT_AVATAR_BASE)?);

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(IgClient {
            http,
            endpoint,
            placeholder: AvatarPlaceholder::new(avatar_base),
        })
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
