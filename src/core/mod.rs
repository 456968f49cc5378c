pub mod actions;
pub mod dispatch;

pub use crate::domain::model::{ActionEvent, Item, OptimalCondition, Person, Veto};
pub use crate::domain::ports::{ActionHandler, Conditions, Customer};
pub use crate::utils::error::Result;
