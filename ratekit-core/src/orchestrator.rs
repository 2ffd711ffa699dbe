//! Review-request orchestration
//!
//! This module owns the decision sequence behind a review request:
//! availability probe, token pre-fetch and caching, flow launch, and
//! outcome classification. All host-service calls are asynchronous and
//! single-attempt; "no review this time" is a normal business outcome
//! here, not a fault.

use std::sync::Arc;

use crate::availability::AvailabilityChecker;
use crate::config::AvailabilityConfig;
use crate::host::{HostBinding, ReviewService, ServiceFailure};
use crate::session::ReviewSessionCache;
use crate::{Error, Result};

/// Result of an attempted review flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewOutcome {
    /// The flow call ran to completion
    ///
    /// The host service gives no visibility signal, so this carries no
    /// guarantee that the user actually saw or acted on a prompt.
    Completed,
    /// The flow could not be attempted: the service returned no usable
    /// token without reporting an explicit error
    Unavailable,
    /// The service reported an explicit error
    Failed(ServiceFailure),
}

impl ReviewOutcome {
    /// Check whether the flow call completed
    pub fn is_completed(&self) -> bool {
        matches!(self, ReviewOutcome::Completed)
    }

    /// Get the service failure if the flow failed
    pub fn failure(&self) -> Option<&ServiceFailure> {
        match self {
            ReviewOutcome::Failed(failure) => Some(failure),
            _ => None,
        }
    }
}

/// State machine for requesting the native review flow
///
/// Holds the single-slot session cache and the attach/detach host
/// binding shared with the rest of the bridge. One instance serves the
/// whole component lifecycle.
pub struct ReviewOrchestrator {
    service: Arc<dyn ReviewService>,
    binding: Arc<HostBinding>,
    checker: AvailabilityChecker,
    cache: ReviewSessionCache,
}

impl ReviewOrchestrator {
    /// Create an orchestrator over the given service and host binding
    pub fn new(
        service: Arc<dyn ReviewService>,
        binding: Arc<HostBinding>,
        config: AvailabilityConfig,
    ) -> Self {
        let checker = AvailabilityChecker::new(binding.clone(), config);
        Self {
            service,
            binding,
            checker,
            cache: ReviewSessionCache::new(),
        }
    }

    /// The session cache, exposed for inspection
    pub fn cache(&self) -> &ReviewSessionCache {
        &self.cache
    }

    /// Probe whether the native review dialog is currently usable,
    /// pre-fetching a session token on the way
    ///
    /// Returns `false` on an unavailable verdict, a declined fetch, or
    /// a service error. Callers never learn error detail from this
    /// probe: unavailability is an expected outcome, not a fault. No
    /// service call is made when the availability verdict is already
    /// negative.
    pub async fn prepare_session(&self) -> bool {
        if !self.checker.check() {
            return false;
        }

        match self.service.request_flow().await {
            Ok(Some(token)) => {
                self.cache.set(token);
                true
            }
            Ok(None) => false,
            Err(failure) => {
                tracing::debug!(%failure, "session pre-fetch declined by review service");
                false
            }
        }
    }

    /// Request the native review flow
    ///
    /// Uses the cached session token when one is present, otherwise
    /// fetches a fresh one. The cache is cleared unconditionally after
    /// any launch attempt: tokens are single-use, success or failure.
    ///
    /// # Errors
    /// `Error::ContextUnavailable` if no application context is
    /// attached, `Error::ActivityUnavailable` if no foreground surface
    /// is attached. Service-side problems are values, not errors: they
    /// classify into `ReviewOutcome::Failed` (explicit service error)
    /// or `ReviewOutcome::Unavailable` (no result, no error).
    pub async fn request_review(&self) -> Result<ReviewOutcome> {
        if self.binding.context().is_none() {
            return Err(Error::ContextUnavailable);
        }
        let Some(surface) = self.binding.foreground() else {
            return Err(Error::ActivityUnavailable);
        };

        // Claim the cached token atomically: of two requests racing on
        // arbitrary-thread completions, only one may launch it.
        let token = match self.cache.take() {
            Some(token) => token,
            None => match self.service.request_flow().await {
                Ok(Some(token)) => token,
                Ok(None) => return Ok(ReviewOutcome::Unavailable),
                Err(failure) => {
                    tracing::warn!(%failure, "review service refused to issue a session token");
                    return Ok(ReviewOutcome::Failed(failure));
                }
            },
        };

        let launched = self.service.launch_flow(surface.as_ref(), token).await;
        // The token is consumed by the launch attempt either way.
        self.cache.clear();

        match launched {
            Ok(()) => Ok(ReviewOutcome::Completed),
            Err(failure) => {
                tracing::warn!(%failure, "review flow launch failed");
                Ok(ReviewOutcome::Failed(failure))
            }
        }
    }
}

impl std::fmt::Debug for ReviewOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReviewOrchestrator")
            .field("binding", &self.binding)
            .field("cache", &self.cache)
            .finish()
    }
}
