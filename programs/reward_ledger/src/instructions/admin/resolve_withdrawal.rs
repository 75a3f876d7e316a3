// reward_ledger/instructions/admin/resolve_withdrawal.rs

// external dependencies
use anchor_lang::prelude::*;
use common::calendar;

// local dependencies
use crate::{
    errors::LedgerError,
    events::WithdrawalResolved,
    queue::apply_withdrawal_decision,
    state::{
        Decision, Settings, UserAccount, WithdrawalRequest, SETTINGS_SEED, USER_SEED,
        WITHDRAWAL_SEED,
    },
};

#[derive(Accounts)]
pub struct ResolveWithdrawal<'info> {
    pub admin: Signer<'info>,

    #[account(
        seeds = [SETTINGS_SEED],
        has_one = admin @ LedgerError::NotAuthorized,
        bump = settings.bump,
    )]
    pub settings: Account<'info, Settings>,

    #[account(
        mut,
        seeds = [WITHDRAWAL_SEED, &withdrawal.id.to_le_bytes()],
        bump = withdrawal.bump,
    )]
    pub withdrawal: Account<'info, WithdrawalRequest>,

    #[account(
        mut,
        seeds = [USER_SEED, &withdrawal.user_id.to_le_bytes()],
        bump = user_account.bump,
    )]
    pub user_account: Account<'info, UserAccount>,
}

/// Approval fails with InsufficientFunds if the user spent the deposit in the
/// meantime. The request then stays pending.
pub fn handler(ctx: Context<ResolveWithdrawal>, decision: Decision) -> Result<()> {
    let (now, _) = calendar::now()?;
    let request = &mut ctx.accounts.withdrawal;

    apply_withdrawal_decision(request, &mut ctx.accounts.user_account, decision, now)?;

    emit!(WithdrawalResolved {
        request_id: request.id,
        external_id: request.user_id,
        amount: request.amount,
        status: request.status,
    });

    Ok(())
}
