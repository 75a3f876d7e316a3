// reward_ledger/lib.rs - top-level program file

pub mod constants;
pub mod conversion;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod ledger;
pub mod queue;
pub mod state;
pub mod utils;
pub mod views;

#[cfg(test)]
mod tests;

use anchor_lang::prelude::*;

use conversion::ConversionResult;
use instructions::*;
use state::{
    BalanceKind, ChannelArgs, Decision, PaymentMethodArgs, Profile, SettingsUpdate, TaskAction,
    TaskSizing,
};
use views::{Balances, TaskBudgetView};

#[cfg(not(feature = "no-entrypoint"))]
solana_security_txt::security_txt! {
    // Required fields
    name: "Reward Ledger Program",
    project_url: "https://github.com/reward-ledger/reward-ledger",
    contacts: "email:security@reward-ledger.app",
    // Optional Fields
    preferred_languages: "en",
    source_code: "https://github.com/reward-ledger/reward-ledger/tree/main/programs/reward_ledger"
}

declare_id!("RwdLdg1r5cmT4A8c6XLGhiGpRzV9vU2KkFzq8yvZ2dH");

#[program]
pub mod reward_ledger {
    use super::*;

    // Admin instructions

    pub fn initialize(ctx: Context<Initialize>, operator: Pubkey) -> Result<()> {
        instructions::admin::initialize::handler(ctx, operator)
    }

    pub fn update_settings(ctx: Context<AdminAction>, update: SettingsUpdate) -> Result<()> {
        instructions::admin::update_settings::handler(ctx, update)
    }

    pub fn set_operator(ctx: Context<AdminAction>, new_operator: Pubkey) -> Result<()> {
        instructions::admin::set_operator::handler(ctx, new_operator)
    }

    pub fn transfer_admin(ctx: Context<AdminAction>, new_admin: Pubkey) -> Result<()> {
        instructions::admin::transfer_admin::handler(ctx, new_admin)
    }

    pub fn set_pause(ctx: Context<AdminAction>, paused: bool) -> Result<()> {
        instructions::admin::set_pause::handler(ctx, paused)
    }

    pub fn adjust_balance(
        ctx: Context<AdjustBalance>,
        kind: BalanceKind,
        delta: i64,
    ) -> Result<()> {
        instructions::admin::adjust_balance::handler(ctx, kind, delta)
    }

    pub fn create_admin_task(
        ctx: Context<CreateAdminTask>,
        title: String,
        task_url: String,
        reward_amount: u64,
        sizing: TaskSizing,
    ) -> Result<()> {
        instructions::admin::create_admin_task::handler(ctx, title, task_url, reward_amount, sizing)
    }

    pub fn set_task_status(ctx: Context<SetTaskStatus>, action: TaskAction) -> Result<()> {
        instructions::admin::set_task_status::handler(ctx, action)
    }

    pub fn resolve_withdrawal(ctx: Context<ResolveWithdrawal>, decision: Decision) -> Result<()> {
        instructions::admin::resolve_withdrawal::handler(ctx, decision)
    }

    pub fn resolve_deposit(ctx: Context<ResolveDeposit>, decision: Decision) -> Result<()> {
        instructions::admin::resolve_deposit::handler(ctx, decision)
    }

    pub fn configure_payment_method(
        ctx: Context<ConfigurePaymentMethod>,
        method_id: u32,
        args: PaymentMethodArgs,
    ) -> Result<()> {
        instructions::admin::configure_payment_method::handler(ctx, method_id, args)
    }

    pub fn configure_channel(
        ctx: Context<ConfigureChannel>,
        channel_id: u32,
        args: ChannelArgs,
    ) -> Result<()> {
        instructions::admin::configure_channel::handler(ctx, channel_id, args)
    }

    // Operator instructions

    pub fn resolve_account(
        ctx: Context<ResolveAccount>,
        external_id: u64,
        profile: Profile,
        referral_token: Option<u64>,
    ) -> Result<()> {
        instructions::operator::resolve_account::handler(ctx, external_id, profile, referral_token)
    }

    pub fn set_channels_joined(ctx: Context<SetChannelsJoined>, joined: bool) -> Result<()> {
        instructions::operator::set_channels_joined::handler(ctx, joined)
    }

    pub fn watch_ad(ctx: Context<WatchAd>, manual: bool) -> Result<()> {
        instructions::operator::watch_ad::handler(ctx, manual)
    }

    pub fn record_spin(ctx: Context<RecordSpin>, amount: u64) -> Result<()> {
        instructions::operator::record_spin::handler(ctx, amount)
    }

    pub fn convert(ctx: Context<Convert>, amount: u64) -> Result<ConversionResult> {
        instructions::operator::convert::handler(ctx, amount)
    }

    pub fn create_task(
        ctx: Context<CreateTask>,
        title: String,
        task_url: String,
        reward_amount: u64,
        sizing: TaskSizing,
    ) -> Result<()> {
        instructions::operator::create_task::handler(ctx, title, task_url, reward_amount, sizing)
    }

    pub fn complete_task(ctx: Context<CompleteTask>) -> Result<u64> {
        instructions::operator::complete_task::handler(ctx)
    }

    pub fn submit_withdrawal(
        ctx: Context<SubmitWithdrawal>,
        method_id: u32,
        amount: u64,
        destination: String,
    ) -> Result<()> {
        instructions::operator::submit_withdrawal::handler(ctx, method_id, amount, destination)
    }

    pub fn submit_deposit(
        ctx: Context<SubmitDeposit>,
        method_id: u32,
        amount: u64,
        transaction_id: String,
    ) -> Result<()> {
        instructions::operator::submit_deposit::handler(ctx, method_id, amount, transaction_id)
    }

    // Open instructions

    pub fn get_balance(ctx: Context<GetBalance>) -> Result<Balances> {
        instructions::open::get_balance::handler(ctx)
    }

    pub fn get_task_budget(ctx: Context<GetTaskBudget>) -> Result<TaskBudgetView> {
        instructions::open::get_task_budget::handler(ctx)
    }
}
