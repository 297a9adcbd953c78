//! Manage a single CKB account: gather its live cells and build transfer
//! transactions from them.

pub mod account;
pub mod builder;
pub mod client;
pub mod error;
pub mod identity;
pub mod rpc;
pub mod selector;
pub mod types;

#[cfg(test)]
pub(crate) mod test_util;

pub use account::{Account, MIN_CELL_CAPACITY};
pub use builder::TransactionBuilder;
pub use identity::{Identity, KeyMaterial};
pub use rpc::CkbRpc;
pub use selector::{CellSelector, Selection};
