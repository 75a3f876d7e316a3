// reward_ledger/instructions/admin/mod.rs

use anchor_lang::prelude::*;

pub mod adjust_balance;
pub mod configure_channel;
pub mod configure_payment_method;
pub mod create_admin_task;
pub mod initialize;
pub mod resolve_deposit;
pub mod resolve_withdrawal;
pub mod set_operator;
pub mod set_pause;
pub mod set_task_status;
pub mod transfer_admin;
pub mod update_settings;

pub use adjust_balance::AdjustBalance;
pub(crate) use adjust_balance::__client_accounts_adjust_balance;
pub use configure_channel::ConfigureChannel;
pub(crate) use configure_channel::__client_accounts_configure_channel;
pub use configure_payment_method::ConfigurePaymentMethod;
pub(crate) use configure_payment_method::__client_accounts_configure_payment_method;
pub use create_admin_task::CreateAdminTask;
pub(crate) use create_admin_task::__client_accounts_create_admin_task;
pub use initialize::Initialize;
pub(crate) use initialize::__client_accounts_initialize;
pub use resolve_deposit::ResolveDeposit;
pub(crate) use resolve_deposit::__client_accounts_resolve_deposit;
pub use resolve_withdrawal::ResolveWithdrawal;
pub(crate) use resolve_withdrawal::__client_accounts_resolve_withdrawal;
pub use set_task_status::SetTaskStatus;
pub(crate) use set_task_status::__client_accounts_set_task_status;

use crate::{
    errors::LedgerError,
    state::{Settings, SETTINGS_SEED},
};

cfg_if::cfg_if! {
    if #[cfg(feature = "cpi")] {
        pub(crate) use adjust_balance::__cpi_client_accounts_adjust_balance;
        pub(crate) use configure_channel::__cpi_client_accounts_configure_channel;
        pub(crate) use configure_payment_method::__cpi_client_accounts_configure_payment_method;
        pub(crate) use create_admin_task::__cpi_client_accounts_create_admin_task;
        pub(crate) use initialize::__cpi_client_accounts_initialize;
        pub(crate) use resolve_deposit::__cpi_client_accounts_resolve_deposit;
        pub(crate) use resolve_withdrawal::__cpi_client_accounts_resolve_withdrawal;
        pub(crate) use set_task_status::__cpi_client_accounts_set_task_status;
    }
}

#[derive(Accounts)]
pub struct AdminAction<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [SETTINGS_SEED],
        has_one = admin @ LedgerError::NotAuthorized,
        bump = settings.bump,
    )]
    pub settings: Account<'info, Settings>,
}
