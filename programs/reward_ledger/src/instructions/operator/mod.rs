// reward_ledger/instructions/operator/mod.rs

// Instructions signed by the backend operator on behalf of a verified user.

pub mod complete_task;
pub mod convert;
pub mod create_task;
pub mod record_spin;
pub mod resolve_account;
pub mod set_channels_joined;
pub mod submit_deposit;
pub mod submit_withdrawal;
pub mod watch_ad;

pub use complete_task::CompleteTask;
pub(crate) use complete_task::__client_accounts_complete_task;
pub use convert::Convert;
pub(crate) use convert::__client_accounts_convert;
pub use create_task::CreateTask;
pub(crate) use create_task::__client_accounts_create_task;
pub use record_spin::RecordSpin;
pub(crate) use record_spin::__client_accounts_record_spin;
pub use resolve_account::ResolveAccount;
pub(crate) use resolve_account::__client_accounts_resolve_account;
pub use set_channels_joined::SetChannelsJoined;
pub(crate) use set_channels_joined::__client_accounts_set_channels_joined;
pub use submit_deposit::SubmitDeposit;
pub(crate) use submit_deposit::__client_accounts_submit_deposit;
pub use submit_withdrawal::SubmitWithdrawal;
pub(crate) use submit_withdrawal::__client_accounts_submit_withdrawal;
pub use watch_ad::WatchAd;
pub(crate) use watch_ad::__client_accounts_watch_ad;

cfg_if::cfg_if! {
    if #[cfg(feature = "cpi")] {
        pub(crate) use complete_task::__cpi_client_accounts_complete_task;
        pub(crate) use convert::__cpi_client_accounts_convert;
        pub(crate) use create_task::__cpi_client_accounts_create_task;
        pub(crate) use record_spin::__cpi_client_accounts_record_spin;
        pub(crate) use resolve_account::__cpi_client_accounts_resolve_account;
        pub(crate) use set_channels_joined::__cpi_client_accounts_set_channels_joined;
        pub(crate) use submit_deposit::__cpi_client_accounts_submit_deposit;
        pub(crate) use submit_withdrawal::__cpi_client_accounts_submit_withdrawal;
        pub(crate) use watch_ad::__cpi_client_accounts_watch_ad;
    }
}
