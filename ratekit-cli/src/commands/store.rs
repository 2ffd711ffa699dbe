//! Store command - open the platform store listing

use clap::Args;
use ratekit_core::protocol::Command;
use ratekit_core::Config;

use crate::sim::{build_bridge, SimArgs};

/// Open the store listing, preferring the native store application
#[derive(Args, Debug)]
pub struct StoreArgs {
    /// Application identifier to open; defaults to the simulated
    /// application's own identifier
    app_id: Option<String>,

    #[command(flatten)]
    sim: SimArgs,
}

impl StoreArgs {
    /// Execute the store command
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let bridge = build_bridge(config.clone(), &self.sim);
        let response = bridge
            .handle(Command::LaunchStore {
                app_id: self.app_id.clone(),
            })
            .await;
        println!("{}", serde_json::to_string_pretty(&response)?);
        Ok(())
    }
}
