// reward_ledger/constants.rs

pub use common::constants::*;

// Default settings written by `initialize`. All amounts are milli-USDT.

pub const DEFAULT_AD_REWARD: u64 = 5; // 0.005 USDT per manual ad view
pub const DEFAULT_REFERRAL_BONUS: u64 = 50; // flat 0.050 USDT per referred user
pub const DEFAULT_MIN_TASK_CPC: u64 = 5; // 0.005 USDT per completion
pub const DEFAULT_MIN_TASK_BUDGET: u64 = ONE_USDT; // 1.000 USDT
pub const DEFAULT_REQUIRED_REFERRALS: u32 = 5;
pub const DEFAULT_CONVERSION_FEE_BPS: u64 = 10_00; // 10%
pub const DEFAULT_TASK_ADMIN_FEE_BPS: u64 = 10_00; // 10%
pub const DEFAULT_DAILY_AD_LIMIT: u16 = 50;
pub const DEFAULT_DAILY_SPIN_LIMIT: u16 = 3;
pub const DEFAULT_MAX_SPIN_REWARD: u64 = 100; // 0.100 USDT

// Text limits for stored strings
pub const MAX_DISPLAY_NAME_LEN: usize = 64;
pub const MAX_USERNAME_LEN: usize = 32;
pub const MAX_TASK_TITLE_LEN: usize = 64;
pub const MAX_TASK_URL_LEN: usize = 200;
pub const MAX_ADDRESS_LEN: usize = 128;
pub const MAX_METHOD_NAME_LEN: usize = 32;
pub const MAX_CHANNEL_NAME_LEN: usize = 64;
