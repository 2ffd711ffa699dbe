//! Native review flow availability check

use std::sync::Arc;

use crate::config::AvailabilityConfig;
use crate::host::HostBinding;

/// Decides whether a native review flow is worth attempting
///
/// The verdict is `true` iff the platform version meets the minimum the
/// native review capability supports and the platform's official store
/// application is installed. The check never fails: any uncertainty,
/// including a detached context, is a `false` verdict. It reads host
/// state only and is safe to call with no foreground surface attached.
#[derive(Debug, Clone)]
pub struct AvailabilityChecker {
    binding: Arc<HostBinding>,
    config: AvailabilityConfig,
}

impl AvailabilityChecker {
    /// Create a checker over the given host binding
    pub fn new(binding: Arc<HostBinding>, config: AvailabilityConfig) -> Self {
        Self { binding, config }
    }

    /// Compute the availability verdict from current host state
    pub fn check(&self) -> bool {
        let Some(context) = self.binding.context() else {
            return false;
        };

        let version = context.platform_version();
        if version < self.config.min_platform_version {
            tracing::debug!(
                version,
                minimum = self.config.min_platform_version,
                "platform below minimum for native review flow"
            );
            return false;
        }

        context.is_package_installed(&self.config.store_package)
    }
}
