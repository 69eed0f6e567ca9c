//! igprofile-rs: resolve Instagram usernames into display profiles through an Apify
//! scraping task.
//!
//! The scraper is asked several differently shaped questions in turn (direct profile URL,
//! username search, post owner) and whatever JSON comes back is searched for profile
//! fields. Lookups never fail from the caller's point of view: see [`get_profile`].
//!
//! ```rust,no_run
//! # async fn run() -> Result<(), igprofile_rs::IgError> {
//! let client = igprofile_rs::IgClient::builder()
//!     .task("someone~instagram-scraper-task")
//!     .token(std::env::var("IG_SCRAPER_TOKEN").unwrap_or_default())
//!     .build()?;
//!
//! let profile = igprofile_rs::get_profile(&client, "@natgeo").await;
//! if profile.exists {
//!     println!("{} -> {}", profile.username, profile.avatar_url);
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod profile;

pub use crate::core::{IgClient, IgClientBuilder, IgError, ScraperService};
pub use profile::config::{RequestConfiguration, Strategy, configurations};
pub use profile::extract::extract;
pub use profile::placeholder::AvatarPlaceholder;
pub use profile::{
    ExtractedFields, Profile, accepts, canonical_username, get_profile, resolve_with,
};

/// Install a `fmt` subscriber filtered by `RUST_LOG`. Safe to call more than once.
#[cfg(feature = "tracing-subscriber")]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
