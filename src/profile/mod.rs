//! Public profile types + resolution strategy (ordered scraper configurations, then placeholder).
//!
//! Internals are split into:
//! - `config`:      the ordered request shapes sent to the scraper
//! - `extract`:     best-effort field search over the returned JSON
//! - `placeholder`: locally synthesized avatar URLs

pub mod config;
pub mod extract;
pub mod placeholder;

mod model;
pub use model::{ExtractedFields, Profile};

use crate::core::{IgClient, IgError, ScraperService};
use config::configurations;
use extract::extract;
use placeholder::AvatarPlaceholder;

/// Strips surrounding whitespace and one leading `@`.
pub fn canonical_username(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed.strip_prefix('@').unwrap_or(trimmed)
}

/// Whether `profile` is good enough to stop trying further configurations: it exists and
/// carries a real avatar, not one synthesized by `placeholder`.
pub fn accepts(profile: &Profile, placeholder: &AvatarPlaceholder) -> bool {
    profile.exists && profile.has_avatar() && !placeholder.matches(&profile.avatar_url)
}

/// Resolves `username` into a display profile.
///
/// Configurations are issued one at a time, in order, and the first response that
/// [`accepts`] wins. Otherwise the best existence-confirmed candidate is returned, or a
/// placeholder profile when responses arrived but none carried profile data. If no
/// configuration produced a decodable response, the `exists == false` sentinel is returned.
///
/// This never fails; all errors are folded into the returned [`Profile`].
#[tracing::instrument(skip(client))]
pub async fn get_profile(client: &IgClient, username: &str) -> Profile {
    resolve_with(client, client.placeholder(), username).await
}

/// Same as [`get_profile`], over any [`ScraperService`].
///
/// Input with nothing left after stripping `@` (e.g. `"@"`) is not looked up; the sentinel
/// keeps the trimmed input as its username. Blank input is the only case that yields an
/// empty `username`.
pub async fn resolve_with<S>(service: &S, placeholder: &AvatarPlaceholder, raw: &str) -> Profile
where
    S: ScraperService + ?Sized,
{
    let username = canonical_username(raw);
    if username.is_empty() {
        tracing::warn!(raw, "no username left after stripping; nothing to look up");
        return Profile::failed(raw.trim());
    }

    match try_resolve(service, placeholder, username).await {
        Ok(profile) => profile,
        Err(e) => {
            tracing::warn!(username, error = %e, "profile lookup failed");
            Profile::failed(username)
        }
    }
}

async fn try_resolve<S>(
    service: &S,
    placeholder: &AvatarPlaceholder,
    username: &str,
) -> Result<Profile, IgError>
where
    S: ScraperService + ?Sized,
{
    let configs = configurations(username);
    let mut answered = 0usize;
    let mut best: Option<Profile> = None;

    for (i, config) in configs.iter().enumerate() {
        let attempt = i + 1;
        tracing::debug!(attempt, strategy = ?config.strategy, "trying scraper configuration");

        let document = match service.run_configuration(config).await {
            Ok(doc) => doc,
            Err(e) => {
                tracing::warn!(attempt, strategy = ?config.strategy, error = %e, "configuration failed");
                continue;
            }
        };
        answered += 1;

        let Some(candidate) = extract(&document, username).map(|f| f.into_profile(username)) else {
            tracing::debug!(attempt, "no profile data in response");
            continue;
        };

        if accepts(&candidate, placeholder) {
            tracing::info!(attempt, username = %candidate.username, "profile resolved with avatar");
            return Ok(candidate);
        }

        tracing::debug!(attempt, "profile found without usable avatar; continuing");
        let upgrade = best
            .as_ref()
            .is_none_or(|kept| !kept.has_avatar() && candidate.has_avatar());
        if upgrade {
            best = Some(candidate);
        }
    }

    if answered == 0 {
        return Err(IgError::AllAttemptsFailed {
            attempts: configs.len(),
        });
    }

    Ok(best.unwrap_or_else(|| {
        tracing::info!(username, "no profile data found; using placeholder avatar");
        Profile::placeholder(username, placeholder.url_for(username))
    }))
}

impl Profile {
    /// Loads the profile for a given username. See [`get_profile`].
    pub async fn load(client: &IgClient, username: &str) -> Profile {
        get_profile(client, username).await
    }
}
