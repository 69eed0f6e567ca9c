use thiserror::Error;

/// The error type for fallible operations inside this crate.
///
/// Profile resolution itself never surfaces these to callers; they are folded into the
/// `exists == false` sentinel by [`crate::get_profile`]. Building an [`crate::IgClient`]
/// is the only public operation that returns one.
#[derive(Debug, Error)]
pub enum IgError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The response body was not valid JSON.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// The scraper returned an unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The endpoint that returned the error, with its query string stripped.
        url: String,
    },

    /// The client was built without enough information to reach the scraper.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// None of the request configurations produced a decodable response.
    #[error("all {attempts} scraper configurations failed")]
    AllAttemptsFailed {
        /// How many configurations were issued.
        attempts: usize,
    },
}
