// reward_ledger/instructions/admin/resolve_deposit.rs

// external dependencies
use anchor_lang::prelude::*;
use common::calendar;

// local dependencies
use crate::{
    errors::LedgerError,
    events::DepositResolved,
    queue::apply_deposit_decision,
    state::{
        Decision, DepositRequest, Settings, UserAccount, DEPOSIT_SEED, SETTINGS_SEED, USER_SEED,
    },
};

#[derive(Accounts)]
pub struct ResolveDeposit<'info> {
    pub admin: Signer<'info>,

    #[account(
        seeds = [SETTINGS_SEED],
        has_one = admin @ LedgerError::NotAuthorized,
        bump = settings.bump,
    )]
    pub settings: Account<'info, Settings>,

    #[account(
        mut,
        seeds = [DEPOSIT_SEED, &deposit.id.to_le_bytes()],
        bump = deposit.bump,
    )]
    pub deposit: Account<'info, DepositRequest>,

    #[account(
        mut,
        seeds = [USER_SEED, &deposit.user_id.to_le_bytes()],
        bump = user_account.bump,
    )]
    pub user_account: Account<'info, UserAccount>,
}

pub fn handler(ctx: Context<ResolveDeposit>, decision: Decision) -> Result<()> {
    let (now, _) = calendar::now()?;
    let request = &mut ctx.accounts.deposit;

    apply_deposit_decision(request, &mut ctx.accounts.user_account, decision, now)?;

    emit!(DepositResolved {
        request_id: request.id,
        external_id: request.user_id,
        amount: request.amount,
        status: request.status,
    });

    Ok(())
}
