// reward_ledger/instructions/admin/initialize.rs

// external dependencies
use anchor_lang::prelude::*;

// local dependencies
use crate::{
    constants::ANCHOR_DISCRIMINATOR_SIZE,
    errors::LedgerError,
    state::{Settings, SETTINGS_SEED},
};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        space = ANCHOR_DISCRIMINATOR_SIZE + Settings::INIT_SPACE,
        seeds = [SETTINGS_SEED],
        bump
    )]
    pub settings: Account<'info, Settings>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>, operator: Pubkey) -> Result<()> {
    if operator == Pubkey::default() {
        return err!(LedgerError::InvalidParam);
    }

    // Every tunable starts at its default and is changed later with update_settings
    ctx.accounts.settings.set_inner(Settings::new(
        ctx.accounts.admin.key(),
        operator,
        ctx.bumps.settings,
    ));

    msg!("Ledger initialized, operator {}", operator);

    Ok(())
}
