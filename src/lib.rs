pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::config::profile::SessionProfile;
pub use crate::core::actions::{FeedbackAction, PurchaseAction, PAYMENT_METHOD};
pub use crate::core::dispatch::ActionDispatcher;
pub use crate::domain::model::{
    ActionEvent, Item, OptimalCondition, Person, Veto, VETO_SCHEMA_VERSION,
};
pub use crate::domain::ports::{ActionHandler, Conditions, Customer};
pub use crate::utils::error::{Result, StoreError};
