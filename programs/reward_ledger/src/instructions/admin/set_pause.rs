// reward_ledger/instructions/admin/set_pause.rs

// external dependencies
use anchor_lang::prelude::*;

// local dependencies
use crate::{events::PauseChanged, instructions::admin::AdminAction};

/// Pausing blocks operator instructions only. Admin reconciliation keeps working.
pub fn handler(ctx: Context<AdminAction>, paused: bool) -> Result<()> {
    ctx.accounts.settings.paused = paused;

    emit!(PauseChanged { paused });

    Ok(())
}
