//! Bridge facade wiring the orchestrator and navigator to a dispatcher

use std::sync::Arc;

use crate::config::Config;
use crate::host::{ForegroundSurface, HostBinding, HostContext, ReviewService};
use crate::orchestrator::ReviewOrchestrator;
use crate::protocol::{Command, Response};
use crate::store::StoreNavigator;

/// One bridge instance per host attachment
///
/// Owns the shared host binding, the review orchestrator, and the
/// store navigator, and maps the dispatcher's command surface onto
/// them. The dispatcher transport is out of scope; anything that can
/// deliver a [`Command`] and return a [`Response`] can drive this.
pub struct ReviewBridge {
    binding: Arc<HostBinding>,
    orchestrator: ReviewOrchestrator,
    navigator: StoreNavigator,
}

impl ReviewBridge {
    /// Create a bridge over the given review service
    pub fn new(service: Arc<dyn ReviewService>, config: Config) -> Self {
        let binding = Arc::new(HostBinding::new());
        let orchestrator =
            ReviewOrchestrator::new(service, binding.clone(), config.availability);
        let navigator = StoreNavigator::new(binding.clone(), config.store);
        Self {
            binding,
            orchestrator,
            navigator,
        }
    }

    /// Attach the application context (host engine attached)
    pub fn attach_context(&self, context: Arc<dyn HostContext>) {
        self.binding.attach_context(context);
    }

    /// Detach the application context (host engine detached)
    pub fn detach_context(&self) {
        self.binding.detach_context();
    }

    /// Attach the foreground surface (activity attached)
    pub fn attach_foreground(&self, foreground: Arc<dyn ForegroundSurface>) {
        self.binding.attach_foreground(foreground);
    }

    /// Detach the foreground surface (activity detached)
    pub fn detach_foreground(&self) {
        self.binding.detach_foreground();
    }

    /// The review orchestrator
    pub fn orchestrator(&self) -> &ReviewOrchestrator {
        &self.orchestrator
    }

    /// The store navigator
    pub fn navigator(&self) -> &StoreNavigator {
        &self.navigator
    }

    /// Handle one command and produce its wire response
    pub async fn handle(&self, command: Command) -> Response {
        tracing::debug!(?command, "handling bridge command");
        match command {
            Command::IsNativeDialogSupported => {
                Response::success(self.orchestrator.prepare_session().await)
            }
            Command::LaunchNativeReviewDialog => match self.orchestrator.request_review().await {
                Ok(outcome) => Response::from_review_outcome(&outcome),
                Err(error) => Response::from_error(&error),
            },
            Command::LaunchStore { app_id } => {
                Response::from_store_result(self.navigator.open_store_listing(app_id.as_deref()))
            }
        }
    }
}

impl std::fmt::Debug for ReviewBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReviewBridge")
            .field("binding", &self.binding)
            .finish()
    }
}
