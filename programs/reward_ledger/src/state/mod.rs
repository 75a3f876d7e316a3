// reward_ledger/state/mod.rs

pub mod channel;
pub mod deposit;
pub mod payment_method;
pub mod referral;
pub mod request;
pub mod settings;
pub mod task;
pub mod task_completion;
pub mod user_account;
pub mod withdrawal;

pub use channel::*;
pub use deposit::*;
pub use payment_method::*;
pub use referral::*;
pub use request::*;
pub use settings::*;
pub use task::*;
pub use task_completion::*;
pub use user_account::*;
pub use withdrawal::*;
