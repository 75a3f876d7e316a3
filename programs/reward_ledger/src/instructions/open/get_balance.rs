// reward_ledger/instructions/open/get_balance.rs

// external dependencies
use anchor_lang::prelude::*;

// local dependencies
use crate::{
    state::{UserAccount, USER_SEED},
    views::Balances,
};

#[derive(Accounts)]
pub struct GetBalance<'info> {
    #[account(
        seeds = [USER_SEED, &user_account.external_id.to_le_bytes()],
        bump = user_account.bump,
    )]
    pub user_account: Account<'info, UserAccount>,
}

pub fn handler(ctx: Context<GetBalance>) -> Result<Balances> {
    Ok(Balances::from(&*ctx.accounts.user_account))
}
