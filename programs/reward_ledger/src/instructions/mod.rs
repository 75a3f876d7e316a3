// reward_ledger/instructions/mod.rs

pub mod admin;
pub mod open;
pub mod operator;

pub use admin::*;
pub use open::*;
pub use operator::*;
