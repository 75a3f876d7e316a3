// reward_ledger/instructions/operator/submit_deposit.rs

// external dependencies
use anchor_lang::prelude::*;
use common::calendar;

// local dependencies
use crate::{
    constants::{ANCHOR_DISCRIMINATOR_SIZE, MAX_ADDRESS_LEN},
    errors::LedgerError,
    events::DepositSubmitted,
    queue::admit_deposit,
    state::{
        DepositRequest, PaymentMethod, RequestStatus, Settings, UserAccount, DEPOSIT_SEED,
        PAYMENT_METHOD_SEED, SETTINGS_SEED, USER_SEED,
    },
    utils::text::ensure_fits,
};

#[derive(Accounts)]
#[instruction(method_id: u32)]
pub struct SubmitDeposit<'info> {
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
        space = ANCHOR_DISCRIMINATOR_SIZE + DepositRequest::INIT_SPACE,
        seeds = [DEPOSIT_SEED, &settings.deposit_count.to_le_bytes()],
        bump
    )]
    pub deposit: Account<'info, DepositRequest>,

    pub system_program: Program<'info, System>,
}

/// Records an external payment the user reports. Nothing is credited until the admin approves it.
pub fn handler(
    ctx: Context<SubmitDeposit>,
    method_id: u32,
    amount: u64,
    transaction_id: String,
) -> Result<()> {
    ensure_fits(&transaction_id, MAX_ADDRESS_LEN)?;
    admit_deposit(&ctx.accounts.payment_method, amount)?;

    let id = ctx.accounts.settings.next_deposit_id()?;
    let external_id = ctx.accounts.user_account.external_id;
    let (now, _) = calendar::now()?;

    ctx.accounts.deposit.set_inner(DepositRequest {
        id,
        user_id: external_id,
        amount,
        method_id,
        transaction_id,
        status: RequestStatus::Pending,
        created_at: now,
        resolved_at: 0,
        bump: ctx.bumps.deposit,
    });

    emit!(DepositSubmitted {
        request_id: id,
        external_id,
        amount,
        method_id,
    });

    Ok(())
}
