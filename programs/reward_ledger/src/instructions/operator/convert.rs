// reward_ledger/instructions/operator/convert.rs

// external dependencies
use anchor_lang::prelude::*;
use common::math::format_usdt;

// local dependencies
use crate::{
    conversion::{convert_earnings, ConversionResult},
    errors::LedgerError,
    events::Converted,
    state::{Settings, UserAccount, SETTINGS_SEED, USER_SEED},
};

#[derive(Accounts)]
pub struct Convert<'info> {
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

pub fn handler(ctx: Context<Convert>, amount: u64) -> Result<ConversionResult> {
    let fee_bps = ctx.accounts.settings.conversion_fee_bps;
    let user = &mut ctx.accounts.user_account;

    let result = convert_earnings(user, amount, fee_bps)?;

    msg!(
        "Converted {} USDT for {}, fee {} USDT",
        format_usdt(amount),
        user.external_id,
        format_usdt(result.fee_charged)
    );

    emit!(Converted {
        external_id: user.external_id,
        amount,
        fee: result.fee_charged,
        credited: result.credited_to_deposit,
    });

    Ok(result)
}
