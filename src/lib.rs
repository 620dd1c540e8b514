pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::Settings;

pub use adapters::electrum::ElectrumGateway;
pub use adapters::mock::MockLookupClient;
pub use app::{RealmsViewFlow, SearchRealmFlow};
pub use core::store::{AttemptId, QuerySnapshot, QueryStore};
pub use domain::model::{FailureReason, LookupOutcome, RealmRecord};
pub use domain::ports::{ConfigProvider, LookupClient};
pub use utils::error::{LookupError, Result};
