// reward_ledger/instructions/admin/transfer_admin.rs

// external dependencies
use anchor_lang::prelude::*;

// local dependencies
use crate::{errors::LedgerError, events::AdminTransferred, instructions::admin::AdminAction};

pub fn handler(ctx: Context<AdminAction>, new_admin: Pubkey) -> Result<()> {
    // The default key has no private key, so this would lock the ledger forever
    if new_admin == Pubkey::default() {
        return err!(LedgerError::InvalidParam);
    }

    let old_admin = ctx.accounts.settings.admin;
    ctx.accounts.settings.admin = new_admin;

    emit!(AdminTransferred {
        old_admin,
        new_admin,
    });

    Ok(())
}
