// reward_ledger/instructions/admin/configure_payment_method.rs

// external dependencies
use anchor_lang::prelude::*;

// local dependencies
use crate::{
    constants::ANCHOR_DISCRIMINATOR_SIZE,
    errors::LedgerError,
    state::{PaymentMethod, PaymentMethodArgs, Settings, PAYMENT_METHOD_SEED, SETTINGS_SEED},
};

#[derive(Accounts)]
#[instruction(method_id: u32)]
pub struct ConfigurePaymentMethod<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        seeds = [SETTINGS_SEED],
        has_one = admin @ LedgerError::NotAuthorized,
        bump = settings.bump,
    )]
    pub settings: Account<'info, Settings>,

    #[account(
        init_if_needed,
        payer = admin,
        space = ANCHOR_DISCRIMINATOR_SIZE + PaymentMethod::INIT_SPACE,
        seeds = [PAYMENT_METHOD_SEED, &method_id.to_le_bytes()],
        bump
    )]
    pub payment_method: Account<'info, PaymentMethod>,

    pub system_program: Program<'info, System>,
}

/// Creates or replaces a payment method. Methods are deactivated, never closed,
/// so pending requests keep pointing at a live account.
pub fn handler(
    ctx: Context<ConfigurePaymentMethod>,
    method_id: u32,
    args: PaymentMethodArgs,
) -> Result<()> {
    args.validate()?;

    ctx.accounts.payment_method.set_inner(PaymentMethod {
        id: method_id,
        name: args.name,
        min_amount: args.min_amount,
        max_amount: args.max_amount,
        supports_withdrawal: args.supports_withdrawal,
        supports_deposit: args.supports_deposit,
        is_active: args.is_active,
        bump: ctx.bumps.payment_method,
    });

    Ok(())
}
