//! Simulated host platform backing the CLI commands
//!
//! One `SimulatedHost` instance plays all three host roles: the
//! application context, the foreground surface, and the review
//! service. Flags on the subcommands shape its behavior so every
//! branch of the bridge's decision tree can be reached from a
//! terminal.

use std::sync::Arc;

use async_trait::async_trait;
use clap::Args;
use ratekit_core::{
    Config, ForegroundSurface, HostContext, ReviewBridge, ReviewService, ReviewSessionToken,
    ServiceFailure,
};
use url::Url;

/// Flags shaping the simulated host platform
#[derive(Args, Debug, Clone)]
pub struct SimArgs {
    /// Simulated platform version
    #[arg(long, default_value_t = 33)]
    pub platform_version: u32,

    /// Simulate the store application being absent
    #[arg(long)]
    pub no_store: bool,

    /// Package identifier of the simulated application
    #[arg(long, default_value = "com.example.app")]
    pub package: String,

    /// Detach the foreground surface before dispatching
    #[arg(long)]
    pub background: bool,

    /// Make the review service return no token, without an error
    #[arg(long)]
    pub deny_token: bool,

    /// Make the review service report an explicit error with this message
    #[arg(long)]
    pub service_error: Option<String>,

    /// URI schemes the simulated platform can resolve
    #[arg(long, value_delimiter = ',', default_value = "market,https")]
    pub resolvable: Vec<String>,
}

/// In-process stand-in for the host platform
pub struct SimulatedHost {
    platform_version: u32,
    store_installed: bool,
    store_package: String,
    package: String,
    resolvable: Vec<String>,
    deny_token: bool,
    service_error: Option<String>,
}

impl SimulatedHost {
    /// Build a host from the simulation flags and effective config
    pub fn new(args: &SimArgs, config: &Config) -> Self {
        Self {
            platform_version: args.platform_version,
            store_installed: !args.no_store,
            store_package: config.availability.store_package.clone(),
            package: args.package.clone(),
            resolvable: args.resolvable.clone(),
            deny_token: args.deny_token,
            service_error: args.service_error.clone(),
        }
    }
}

impl HostContext for SimulatedHost {
    fn platform_version(&self) -> u32 {
        self.platform_version
    }

    fn is_package_installed(&self, package_id: &str) -> bool {
        package_id == self.store_package && self.store_installed
    }

    fn package_name(&self) -> String {
        self.package.clone()
    }
}

impl ForegroundSurface for SimulatedHost {
    fn can_resolve(&self, uri: &Url) -> bool {
        self.resolvable.iter().any(|s| s == uri.scheme())
    }

    fn open(&self, uri: &Url) -> bool {
        println!("opening {}", uri);
        true
    }
}

#[async_trait]
impl ReviewService for SimulatedHost {
    async fn request_flow(&self) -> Result<Option<ReviewSessionToken>, ServiceFailure> {
        if let Some(message) = &self.service_error {
            return Err(ServiceFailure::new("SimulatedServiceException", message));
        }
        if self.deny_token {
            return Ok(None);
        }
        Ok(Some(ReviewSessionToken::new("simulated-session")))
    }

    async fn launch_flow(
        &self,
        _surface: &dyn ForegroundSurface,
        token: ReviewSessionToken,
    ) -> Result<(), ServiceFailure> {
        tracing::info!(token = token.payload(), "simulated review flow completed");
        Ok(())
    }
}

/// Build an attached bridge over a simulated host
pub fn build_bridge(config: Config, args: &SimArgs) -> ReviewBridge {
    let host = Arc::new(SimulatedHost::new(args, &config));
    let bridge = ReviewBridge::new(host.clone(), config);
    bridge.attach_context(host.clone());
    if !args.background {
        bridge.attach_foreground(host);
    }
    bridge
}
