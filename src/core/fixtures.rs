//! Saves raw scraper responses under `tests/fixtures` (or `IG_FIXDIR`) so they can be replayed
//! by the httpmock scenarios. Compiled only with the `test-mode` feature.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

fn fixture_dir() -> PathBuf {
    std::env::var("IG_FIXDIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"))
}

/// `scraper_<strategy>_<username>.json`, with anything outside `[A-Za-z0-9._-]` replaced by `_`
/// so a raw username can never leave the fixture directory.
pub(crate) fn fixture_file_name(strategy: &str, username: &str) -> String {
    format!("scraper_{}_{}.json", sanitize(strategy), sanitize(username))
}

fn sanitize(part: &str) -> String {
    part.chars()
        .map(|c| match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '.' | '_' | '-' => c,
            _ => '_',
        })
        .collect()
}

/// Writes `body` as the fixture for one `(strategy, username)` response.
pub(crate) fn record_response(
    strategy: &str,
    username: &str,
    body: &str,
) -> std::io::Result<PathBuf> {
    let dir = fixture_dir();
    fs::create_dir_all(&dir)?;
    let path = dir.join(fixture_file_name(strategy, username));

    fs::File::create(&path)?.write_all(body.as_bytes())?;
    tracing::debug!(path = %path.display(), "IG_RECORD: saved scraper response");
    Ok(path)
}
