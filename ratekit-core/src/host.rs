//! Host-platform seams for the review bridge
//!
//! The bridge core never talks to the platform directly. Embedders
//! implement these traits over the real host glue (JNI bindings,
//! method-channel plumbing, a simulator); the core only sees the
//! traits. All service calls are asynchronous and run to completion;
//! there is no cancellation surface.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use url::Url;

use crate::session::ReviewSessionToken;

/// Process-wide host application context
pub trait HostContext: Send + Sync {
    /// Platform version of the device the application runs on
    fn platform_version(&self) -> u32;

    /// Whether a package with the given identifier is installed
    fn is_package_installed(&self, package_id: &str) -> bool;

    /// Package identifier of the current application
    fn package_name(&self) -> String;
}

/// Interactive foreground surface, required to display any UI
pub trait ForegroundSurface: Send + Sync {
    /// Whether the platform can resolve a handler for the URI
    fn can_resolve(&self, uri: &Url) -> bool;

    /// Hand the URI to the platform's handler
    ///
    /// Returns whether the handoff was accepted. The platform gives no
    /// signal beyond that, so callers treat this as best-effort.
    fn open(&self, uri: &Url) -> bool;
}

/// Error reported by the host review service, carrying the service's
/// own exception identity and localized message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceFailure {
    /// Exception class name or equivalent identity
    pub name: String,
    /// Human-readable message
    pub message: String,
}

impl ServiceFailure {
    /// Create a new service failure
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ServiceFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.message)
    }
}

/// The host platform's review service
///
/// `request_flow` resolves to `Ok(None)` when the service produces no
/// usable result without reporting an explicit error; the two cases
/// are surfaced differently to callers.
#[async_trait]
pub trait ReviewService: Send + Sync {
    /// Request a review-session token ahead of a launch
    async fn request_flow(&self) -> Result<Option<ReviewSessionToken>, ServiceFailure>;

    /// Launch the review flow with a previously obtained token
    ///
    /// Completion means the flow call finished; the service does not
    /// guarantee a prompt was actually shown to the user.
    async fn launch_flow(
        &self,
        surface: &dyn ForegroundSurface,
        token: ReviewSessionToken,
    ) -> Result<(), ServiceFailure>;
}

#[derive(Default)]
struct BindingState {
    context: Option<Arc<dyn HostContext>>,
    foreground: Option<Arc<dyn ForegroundSurface>>,
}

/// Lifecycle-bound references to the host context and foreground surface
///
/// The host attaches and detaches these as the application moves
/// through its lifecycle; a configuration change is a detach followed
/// by a fresh attach. Slots are mutex-guarded because the host may
/// deliver lifecycle callbacks from arbitrary threads.
#[derive(Default)]
pub struct HostBinding {
    state: Mutex<BindingState>,
}

impl HostBinding {
    /// Create an empty binding with nothing attached
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, BindingState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Attach the application context
    pub fn attach_context(&self, context: Arc<dyn HostContext>) {
        self.state().context = Some(context);
    }

    /// Detach the application context
    pub fn detach_context(&self) {
        self.state().context = None;
    }

    /// Attach the interactive foreground surface
    pub fn attach_foreground(&self, foreground: Arc<dyn ForegroundSurface>) {
        self.state().foreground = Some(foreground);
    }

    /// Detach the interactive foreground surface
    pub fn detach_foreground(&self) {
        self.state().foreground = None;
    }

    /// Currently attached application context, if any
    pub fn context(&self) -> Option<Arc<dyn HostContext>> {
        self.state().context.clone()
    }

    /// Currently attached foreground surface, if any
    pub fn foreground(&self) -> Option<Arc<dyn ForegroundSurface>> {
        self.state().foreground.clone()
    }
}

impl std::fmt::Debug for HostBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state();
        f.debug_struct("HostBinding")
            .field("context", &state.context.is_some())
            .field("foreground", &state.foreground.is_some())
            .finish()
    }
}
