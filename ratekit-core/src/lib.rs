//! Ratekit Core - Core library for the in-app review bridge
//!
//! This crate decides whether a native review prompt can be requested
//! from the host platform's review service, pre-fetches and caches the
//! single-use review-session token, launches the review flow, and
//! falls back to opening the platform store listing.

pub mod availability;
pub mod bridge;
pub mod config;
pub mod error;
pub mod host;
pub mod orchestrator;
pub mod protocol;
pub mod session;
pub mod store;

pub use availability::AvailabilityChecker;
pub use bridge::ReviewBridge;
pub use config::Config;
pub use error::{Error, Result};
pub use host::{ForegroundSurface, HostBinding, HostContext, ReviewService, ServiceFailure};
pub use orchestrator::{ReviewOrchestrator, ReviewOutcome};
pub use session::{ReviewSessionCache, ReviewSessionToken};
pub use store::{StoreNavigator, StoreNavigationResult};
