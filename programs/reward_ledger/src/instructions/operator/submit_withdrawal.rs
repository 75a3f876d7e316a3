// reward_ledger/instructions/operator/submit_withdrawal.rs

// external dependencies
use anchor_lang::prelude::*;
use common::calendar;

// local dependencies
use crate::{
    constants::{ANCHOR_DISCRIMINATOR_SIZE, MAX_ADDRESS_LEN},
    errors::LedgerError,
    events::WithdrawalSubmitted,
    queue::admit_withdrawal,
    state::{
        PaymentMethod, RequestStatus, Settings, UserAccount, WithdrawalRequest,
        PAYMENT_METHOD_SEED, SETTINGS_SEED, USER_SEED, WITHDRAWAL_SEED,
    },
    utils::text::ensure_fits,
};

#[derive(Accounts)]
#[instruction(method_id: u32)]
pub struct SubmitWithdrawal<'info> {
    #[account(mut)]
    pub operator: Signer<'info>,

    #[account(
        mut,
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

    #[account(
        seeds = [PAYMENT_METHOD_SEED, &method_id.to_le_bytes()],
        bump = payment_method.bump,
    )]
    pub payment_method: Account<'info, PaymentMethod>,

    #[account(
        init,
        payer = operator,
        space = ANCHOR_DISCRIMINATOR_SIZE + WithdrawalRequest::INIT_SPACE,
        seeds = [WITHDRAWAL_SEED, &settings.withdrawal_count.to_le_bytes()],
        bump
    )]
    pub withdrawal: Account<'info, WithdrawalRequest>,

    pub system_program: Program<'info, System>,
}

/// Queues a withdrawal for the admin. The deposit balance is debited only on approval.
pub fn handler(
    ctx: Context<SubmitWithdrawal>,
    method_id: u32,
    amount: u64,
    destination: String,
) -> Result<()> {
    ensure_fits(&destination, MAX_ADDRESS_LEN)?;

    let settings = &mut ctx.accounts.settings;
    let user = &mut ctx.accounts.user_account;

    let reserved = admit_withdrawal(settings, user, &ctx.accounts.payment_method, amount)?;

    let id = settings.next_withdrawal_id()?;
    let (now, _) = calendar::now()?;

    ctx.accounts.withdrawal.set_inner(WithdrawalRequest {
        id,
        user_id: user.external_id,
        amount,
        method_id,
        destination,
        status: RequestStatus::Pending,
        reserved,
        created_at: now,
        resolved_at: 0,
        bump: ctx.bumps.withdrawal,
    });

    emit!(WithdrawalSubmitted {
        request_id: id,
        external_id: user.external_id,
        amount,
        method_id,
        reserved,
    });

    Ok(())
}
