// reward_ledger/instructions/admin/configure_channel.rs

// external dependencies
use anchor_lang::prelude::*;

// local dependencies
use crate::{
    constants::ANCHOR_DISCRIMINATOR_SIZE,
    errors::LedgerError,
    state::{Channel, ChannelArgs, Settings, CHANNEL_SEED, SETTINGS_SEED},
};

#[derive(Accounts)]
#[instruction(channel_id: u32)]
pub struct ConfigureChannel<'info> {
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
        space = ANCHOR_DISCRIMINATOR_SIZE + Channel::INIT_SPACE,
        seeds = [CHANNEL_SEED, &channel_id.to_le_bytes()],
        bump
    )]
    pub channel: Account<'info, Channel>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<ConfigureChannel>, channel_id: u32, args: ChannelArgs) -> Result<()> {
    args.validate()?;

    ctx.accounts.channel.set_inner(Channel {
        id: channel_id,
        name: args.name,
        username: args.username,
        is_active: args.is_active,
        bump: ctx.bumps.channel,
    });

    Ok(())
}
