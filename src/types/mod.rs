mod account;
mod capacity;
mod number;
mod script;
mod transaction;

pub use account::*;
pub use capacity::*;
pub use number::*;
pub use script::*;
pub use transaction::*;
