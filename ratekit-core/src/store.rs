//! Store listing navigation fallback
//!
//! When the native review flow is unavailable, the application falls
//! back to sending the user to its store listing. The navigator
//! prefers the native store application's deep link and degrades to
//! the public web listing; there is no retry and no persisted state.

use std::sync::Arc;

use url::Url;

use crate::config::StoreConfig;
use crate::host::HostBinding;

/// Result of a store navigation attempt, one of three terminal states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreNavigationResult {
    /// The native store application was opened
    OpenedNativeApp,
    /// The web listing page was opened instead
    OpenedWebFallback,
    /// Neither target could be resolved
    Failed,
}

/// Opens the platform store listing for an application
#[derive(Debug, Clone)]
pub struct StoreNavigator {
    binding: Arc<HostBinding>,
    config: StoreConfig,
}

impl StoreNavigator {
    /// Create a navigator over the given host binding
    pub fn new(binding: Arc<HostBinding>, config: StoreConfig) -> Self {
        Self { binding, config }
    }

    /// Open the store listing for `app_id`, defaulting to the current
    /// application's own identifier
    ///
    /// Best-effort decision tree: foreground surface required, native
    /// deep link preferred, web listing as fallback. Resolution decides
    /// the result; the platform gives no signal once a handler accepts
    /// the URI.
    pub fn open_store_listing(&self, app_id: Option<&str>) -> StoreNavigationResult {
        let Some(surface) = self.binding.foreground() else {
            return StoreNavigationResult::Failed;
        };

        let app_id = match app_id {
            Some(id) => id.to_string(),
            None => match self.binding.context() {
                Some(context) => context.package_name(),
                None => return StoreNavigationResult::Failed,
            },
        };

        if let Some(uri) = listing_uri(&self.config.native_uri, &app_id) {
            if surface.can_resolve(&uri) {
                if !surface.open(&uri) {
                    tracing::debug!(%uri, "native store handler did not accept the listing URI");
                }
                return StoreNavigationResult::OpenedNativeApp;
            }
        }

        if let Some(uri) = listing_uri(&self.config.web_uri, &app_id) {
            if surface.can_resolve(&uri) {
                if !surface.open(&uri) {
                    tracing::debug!(%uri, "web handler did not accept the listing URI");
                }
                return StoreNavigationResult::OpenedWebFallback;
            }
        }

        StoreNavigationResult::Failed
    }
}

fn listing_uri(base: &str, app_id: &str) -> Option<Url> {
    match Url::parse_with_params(base, &[("id", app_id)]) {
        Ok(uri) => Some(uri),
        Err(error) => {
            tracing::warn!(base, %error, "configured listing URI base does not parse");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{ForegroundSurface, HostContext};
    use std::sync::Mutex;

    struct FakeContext;

    impl HostContext for FakeContext {
        fn platform_version(&self) -> u32 {
            33
        }

        fn is_package_installed(&self, _package_id: &str) -> bool {
            true
        }

        fn package_name(&self) -> String {
            "com.example.self".to_string()
        }
    }

    struct SchemeSurface {
        resolvable: Vec<&'static str>,
        opened: Mutex<Vec<Url>>,
    }

    impl SchemeSurface {
        fn new(resolvable: Vec<&'static str>) -> Self {
            Self {
                resolvable,
                opened: Mutex::new(Vec::new()),
            }
        }
    }

    impl ForegroundSurface for SchemeSurface {
        fn can_resolve(&self, uri: &Url) -> bool {
            self.resolvable.contains(&uri.scheme())
        }

        fn open(&self, uri: &Url) -> bool {
            self.opened.lock().unwrap().push(uri.clone());
            true
        }
    }

    fn navigator_with(surface: Arc<SchemeSurface>) -> StoreNavigator {
        let binding = Arc::new(HostBinding::new());
        binding.attach_context(Arc::new(FakeContext));
        binding.attach_foreground(surface);
        StoreNavigator::new(binding, StoreConfig::default())
    }

    #[test]
    fn test_prefers_native_store_app() {
        let surface = Arc::new(SchemeSurface::new(vec!["market", "https"]));
        let navigator = navigator_with(surface.clone());

        let result = navigator.open_store_listing(Some("com.example.app"));
        assert_eq!(result, StoreNavigationResult::OpenedNativeApp);

        let opened = surface.opened.lock().unwrap();
        assert_eq!(opened.len(), 1);
        assert_eq!(opened[0].as_str(), "market://details?id=com.example.app");
    }

    #[test]
    fn test_falls_back_to_web_listing() {
        let surface = Arc::new(SchemeSurface::new(vec!["https"]));
        let navigator = navigator_with(surface.clone());

        let result = navigator.open_store_listing(Some("com.example.app"));
        assert_eq!(result, StoreNavigationResult::OpenedWebFallback);

        let opened = surface.opened.lock().unwrap();
        assert_eq!(
            opened[0].as_str(),
            "https://play.google.com/store/apps/details?id=com.example.app"
        );
    }

    #[test]
    fn test_fails_when_nothing_resolves() {
        let surface = Arc::new(SchemeSurface::new(vec![]));
        let navigator = navigator_with(surface.clone());

        let result = navigator.open_store_listing(Some("com.example.app"));
        assert_eq!(result, StoreNavigationResult::Failed);
        assert!(surface.opened.lock().unwrap().is_empty());
    }

    #[test]
    fn test_fails_without_foreground_surface() {
        let binding = Arc::new(HostBinding::new());
        binding.attach_context(Arc::new(FakeContext));
        let navigator = StoreNavigator::new(binding, StoreConfig::default());

        let result = navigator.open_store_listing(Some("com.example.app"));
        assert_eq!(result, StoreNavigationResult::Failed);
    }

    #[test]
    fn test_defaults_to_own_package_name() {
        let surface = Arc::new(SchemeSurface::new(vec!["market"]));
        let navigator = navigator_with(surface.clone());

        let result = navigator.open_store_listing(None);
        assert_eq!(result, StoreNavigationResult::OpenedNativeApp);

        let opened = surface.opened.lock().unwrap();
        assert_eq!(opened[0].as_str(), "market://details?id=com.example.self");
    }

    #[test]
    fn test_unparseable_native_base_degrades_to_web() {
        let surface = Arc::new(SchemeSurface::new(vec!["market", "https"]));
        let binding = Arc::new(HostBinding::new());
        binding.attach_context(Arc::new(FakeContext));
        binding.attach_foreground(surface.clone());
        let config = StoreConfig {
            native_uri: "not a uri".to_string(),
            ..StoreConfig::default()
        };
        let navigator = StoreNavigator::new(binding, config);

        let result = navigator.open_store_listing(Some("com.example.app"));
        assert_eq!(result, StoreNavigationResult::OpenedWebFallback);
    }

    #[test]
    fn test_repeat_navigation_is_idempotent() {
        let surface = Arc::new(SchemeSurface::new(vec!["market", "https"]));
        let navigator = navigator_with(surface);

        let first = navigator.open_store_listing(Some("com.example.app"));
        let second = navigator.open_store_listing(Some("com.example.app"));
        assert_eq!(first, second);
    }
}
