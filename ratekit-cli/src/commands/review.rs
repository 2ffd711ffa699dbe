//! Review commands - probe and launch the native review dialog

use clap::Args;
use ratekit_core::protocol::Command;
use ratekit_core::Config;

use crate::sim::{build_bridge, SimArgs};

/// Probe whether the native review dialog is currently usable
#[derive(Args, Debug)]
pub struct SupportedArgs {
    #[command(flatten)]
    sim: SimArgs,
}

impl SupportedArgs {
    /// Execute the supported command
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let bridge = build_bridge(config.clone(), &self.sim);
        let response = bridge.handle(Command::IsNativeDialogSupported).await;
        println!("{}", serde_json::to_string_pretty(&response)?);
        Ok(())
    }
}

/// Attempt the native review flow
#[derive(Args, Debug)]
pub struct ReviewArgs {
    /// Pre-fetch a session token before requesting the review
    #[arg(long)]
    prepare: bool,

    #[command(flatten)]
    sim: SimArgs,
}

impl ReviewArgs {
    /// Execute the review command
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let bridge = build_bridge(config.clone(), &self.sim);

        if self.prepare {
            let prepared = bridge.orchestrator().prepare_session().await;
            tracing::info!(prepared, "session pre-fetch finished");
        }

        let response = bridge.handle(Command::LaunchNativeReviewDialog).await;
        println!("{}", serde_json::to_string_pretty(&response)?);
        Ok(())
    }
}
