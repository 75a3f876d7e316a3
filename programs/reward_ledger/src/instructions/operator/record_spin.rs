// reward_ledger/instructions/operator/record_spin.rs

// external dependencies
use anchor_lang::prelude::*;
use common::calendar;

// local dependencies
use crate::{
    errors::LedgerError,
    ledger::{record_earn, Activity},
    state::{Settings, UserAccount, SETTINGS_SEED, USER_SEED},
};

#[derive(Accounts)]
pub struct RecordSpin<'info> {
    pub operator: Signer<'info>,

    #[account(
        seeds = [SETTINGS_SEED],
        has_one = operator @ LedgerError::NotAuthorized,
        constraint = !settings.paused @ LedgerError::Paused,
        bump = settings.bump,
    )]
    pub settings: Account<'info, Settings>,

    #[account(
        mut,
        seeds = [USER_SEED, &user_account.external_id.to_le_bytes()],
        bump = user_account.bump,
    )]
    pub user_account: Account<'info, UserAccount>,
}

/// The wheel is spun off-chain. A zero amount is a losing spin and still uses
/// one of the day's spins.
pub fn handler(ctx: Context<RecordSpin>, amount: u64) -> Result<()> {
    let settings = &ctx.accounts.settings;
    let user = &mut ctx.accounts.user_account;

    if amount > settings.max_spin_reward {
        return err!(LedgerError::OutOfRange);
    }

    let (_, today) = calendar::now()?;

    user.count_spin(today, settings.daily_spin_limit)?;
    let entry = record_earn(user, Activity::SpinWin, amount, today)?;

    emit!(entry);

    Ok(())
}
