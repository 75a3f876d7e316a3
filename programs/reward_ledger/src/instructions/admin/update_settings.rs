// reward_ledger/instructions/admin/update_settings.rs

// external dependencies
use anchor_lang::prelude::*;

// local dependencies
use crate::{events::SettingsUpdated, instructions::admin::AdminAction, state::SettingsUpdate};

pub fn handler(ctx: Context<AdminAction>, update: SettingsUpdate) -> Result<()> {
    ctx.accounts.settings.apply(&update)?;

    emit!(SettingsUpdated {
        admin: ctx.accounts.admin.key(),
    });

    Ok(())
}
