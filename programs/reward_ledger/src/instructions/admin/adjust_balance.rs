// reward_ledger/instructions/admin/adjust_balance.rs

// external dependencies
use anchor_lang::prelude::*;
use common::math::format_usdt;

// local dependencies
use crate::{
    errors::LedgerError,
    events::BalanceAdjusted,
    state::{BalanceKind, Settings, UserAccount, SETTINGS_SEED, USER_SEED},
};

#[derive(Accounts)]
pub struct AdjustBalance<'info> {
    pub admin: Signer<'info>,

    #[account(
        seeds = [SETTINGS_SEED],
        has_one = admin @ LedgerError::NotAuthorized,
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

pub fn handler(ctx: Context<AdjustBalance>, kind: BalanceKind, delta: i64) -> Result<()> {
    if delta == 0 {
        return err!(LedgerError::InvalidAmount);
    }

    let user = &mut ctx.accounts.user_account;
    let balance = user.adjust(kind, delta)?;

    msg!(
        "Adjusted {:?} of {} by {}, now {} USDT",
        kind,
        user.external_id,
        delta,
        format_usdt(balance)
    );

    emit!(BalanceAdjusted {
        external_id: user.external_id,
        kind,
        delta,
        balance,
    });

    Ok(())
}
