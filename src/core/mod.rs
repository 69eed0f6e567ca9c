//! Core components of the `igprofile-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`IgClient`] and its builder.
//! - The primary [`IgError`] type.
//! - The [`ScraperService`] transport seam.

/// The main client (`IgClient`), builder, and configuration.
pub mod client;
/// The primary error type (`IgError`) for the crate.
pub mod error;
/// Service traits for abstracting the scraper transport.
pub mod services;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::IgClient`
pub use client::{IgClient, IgClientBuilder};
pub use error::IgError;
pub use services::ScraperService;
