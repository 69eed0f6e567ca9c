use crate::profile::config::RequestConfiguration;

/// Reads a successful scraper response body.
///
/// With the `test-mode` feature and `IG_RECORD=1`, the body is also saved as the fixture for
/// `config`; a failed save is logged and does not affect the returned body.
pub(crate) async fn read_body(
    resp: reqwest::Response,
    config: &RequestConfiguration,
) -> Result<String, reqwest::Error> {
    let body = resp.text().await?;

    #[cfg(feature = "test-mode")]
    {
        if std::env::var("IG_RECORD").is_ok_and(|v| v == "1")
            && let Err(e) = crate::core::fixtures::record_response(
                config.strategy.slug(),
                config.username(),
                &body,
            )
        {
            tracing::warn!(strategy = ?config.strategy, error = %e, "IG_RECORD: could not save scraper response");
        }
    }
    #[cfg(not(feature = "test-mode"))]
    let _ = config;

    Ok(body)
}
