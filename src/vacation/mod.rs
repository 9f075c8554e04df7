mod balance;
pub use balance::*;
mod ledger;
pub use ledger::*;
mod mark;
pub use mark::*;
