// reward_ledger/utils/mod.rs

pub mod accounts;
pub mod text;
