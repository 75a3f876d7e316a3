// reward_ledger/state/channel.rs

use anchor_lang::prelude::*;

use crate::{
    constants::{MAX_CHANNEL_NAME_LEN, MAX_USERNAME_LEN},
    utils::text::ensure_fits,
};

#[constant]
pub const CHANNEL_SEED: &[u8] = b"channel";

/// Promotional channel users are asked to join. Membership is verified
/// off-chain and recorded with `set_channels_joined`.
#[account]
#[derive(InitSpace, Debug)]
pub struct Channel {
    pub id: u32,
    #[max_len(64)]
    pub name: String,
    #[max_len(32)]
    pub username: String,
    pub is_active: bool,
    pub bump: u8,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct ChannelArgs {
    pub name: String,
    pub username: String,
    pub is_active: bool,
}

impl ChannelArgs {
    pub fn validate(&self) -> Result<()> {
        ensure_fits(&self.name, MAX_CHANNEL_NAME_LEN)?;
        ensure_fits(&self.username, MAX_USERNAME_LEN)
    }
}
