pub mod bank;
pub mod coins;
pub mod contract;
mod error;
pub mod keeper;
pub mod msg;
pub mod router;
pub mod state;

pub use crate::error::ContractError;
pub use crate::keeper::Keeper;
pub use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg, Transition};
pub use crate::state::Record;
