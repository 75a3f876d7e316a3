// reward_ledger/instructions/operator/set_channels_joined.rs

// external dependencies
use anchor_lang::prelude::*;

// local dependencies
use crate::{
    errors::LedgerError,
    events::ChannelsJoinedSet,
    state::{Settings, UserAccount, SETTINGS_SEED, USER_SEED},
};

#[derive(Accounts)]
pub struct SetChannelsJoined<'info> {
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

/// Records the result of the off-chain channel membership check.
pub fn handler(ctx: Context<SetChannelsJoined>, joined: bool) -> Result<()> {
    let user = &mut ctx.accounts.user_account;
    user.channels_joined = joined;

    emit!(ChannelsJoinedSet {
        external_id: user.external_id,
        joined,
    });

    Ok(())
}
