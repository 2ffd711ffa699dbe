//! CLI command implementations

pub mod review;
pub mod store;

pub use review::{ReviewArgs, SupportedArgs};
pub use store::StoreArgs;
