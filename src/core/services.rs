use futures::future::BoxFuture;
use serde_json::Value;

use crate::core::{IgClient, IgError, net};
use crate::profile::config::RequestConfiguration;

/// A trait for transports that can run one scraper configuration.
///
/// This decouples the fallback loop in [`crate::profile::resolve_with`] from HTTP, so the
/// orchestration can be driven by a stub in tests. It is implemented by [`IgClient`].
pub trait ScraperService: Send + Sync {
    /// Issues `config` to the upstream scraper and returns the decoded JSON document.
    ///
    /// # Errors
    ///
    /// Returns `IgError::Http` on transport failure, `IgError::Status` on a non-success
    /// status and `IgError::Json` if the body cannot be decoded.
    fn run_configuration<'a>(
        &'a self,
        config: &'a RequestConfiguration,
    ) -> BoxFuture<'a, Result<Value, IgError>>;
}

impl ScraperService for IgClient {
    fn run_configuration<'a>(
        &'a self,
        config: &'a RequestConfiguration,
    ) -> BoxFuture<'a, Result<Value, IgError>> {
        Box::pin(async move {
            // reqwest errors render the request URL, which carries the token
            let resp = self
                .http()
                .post(self.endpoint().clone())
                .json(config)
                .send()
                .await
                .map_err(reqwest::Error::without_url)?;

            let status = resp.status();
            if !status.is_success() {
                let body = resp.text().await.unwrap_or_default();
                tracing::debug!(status = status.as_u16(), body = %truncate(&body, 200), "scraper error body");
                return Err(IgError::Status {
                    status: status.as_u16(),
                    url: self.endpoint_redacted(),
                });
            }

            let body = net::read_body(resp, config)
                .await
                .map_err(reqwest::Error::without_url)?;
            Ok(serde_json::from_str(&body)?)
        })
    }
}

fn truncate(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
