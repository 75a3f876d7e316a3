// reward_ledger/instructions/admin/set_operator.rs

// external dependencies
use anchor_lang::prelude::*;

// local dependencies
use crate::{errors::LedgerError, events::OperatorChanged, instructions::admin::AdminAction};

pub fn handler(ctx: Context<AdminAction>, new_operator: Pubkey) -> Result<()> {
    if new_operator == Pubkey::default() {
        return err!(LedgerError::InvalidParam);
    }

    let old_operator = ctx.accounts.settings.operator;
    ctx.accounts.settings.operator = new_operator;

    emit!(OperatorChanged {
        old_operator,
        new_operator,
    });

    Ok(())
}
