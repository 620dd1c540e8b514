pub mod classifier;
pub mod store;
pub mod supervisor;
pub mod workflow;

pub use crate::domain::model::{FailureReason, LookupOutcome, RealmRecord};
pub use crate::domain::ports::{ConfigProvider, LookupClient};
pub use crate::utils::error::Result;
