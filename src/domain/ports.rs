use crate::domain::model::{ActionEvent, Item};
use crate::utils::error::Result;

/// Contract of the external customer entity. Implemented by the host
/// application, never by this crate.
pub trait Customer {
    fn make_payment(&mut self, item: &Item, payment_method: &str) -> Result<()>;
    fn provide_feedback(&mut self, item: &Item, comment: &str, liked: bool) -> Result<()>;
}

/// Capability shared by condition records.
pub trait Conditions {
    /// Provision whatever backing this condition kind needs. Deliberately
    /// has no default body: every condition kind states its own, even when
    /// that is a no-op.
    fn create(&mut self) -> Result<()>;
}

/// Common capability of UI action handlers. Handlers run on the host's
/// event-dispatch thread and must stay invocable any number of times.
pub trait ActionHandler {
    fn handle(&self, event: &ActionEvent) -> Result<()>;
}
