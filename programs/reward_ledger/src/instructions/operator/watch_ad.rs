// reward_ledger/instructions/operator/watch_ad.rs

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
pub struct WatchAd<'info> {
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

/// Manual views count toward the daily limit and pay `ad_reward`.
/// Automatic impressions are only logged.
pub fn handler(ctx: Context<WatchAd>, manual: bool) -> Result<()> {
    let settings = &ctx.accounts.settings;
    let user = &mut ctx.accounts.user_account;
    let (_, today) = calendar::now()?;

    let entry = if manual {
        user.count_ad_view(today, settings.daily_ad_limit)?;
        record_earn(user, Activity::AdWatched, settings.ad_reward, today)?
    } else {
        user.roll_day(today);
        record_earn(user, Activity::AutomaticAdWatched, 0, today)?
    };

    emit!(entry);

    Ok(())
}
