// common/constants.rs

pub const ANCHOR_DISCRIMINATOR_SIZE: usize = 8;

// Balances are stored as milli-USDT (3 decimals)
pub const USDT_DECIMALS: u32 = 3;
pub const ONE_USDT: u64 = 1_000; // 1e3

pub const ONE_HUNDRED_PERCENT: u64 = 100_00; // 1e4

pub const SECONDS_PER_DAY: i64 = 86_400;
