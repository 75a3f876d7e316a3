// reward_ledger/instructions/admin/set_task_status.rs

// external dependencies
use anchor_lang::prelude::*;

// local dependencies
use crate::{
    errors::LedgerError,
    events::TaskStatusChanged,
    state::{Settings, Task, TaskAction, UserAccount, SETTINGS_SEED, TASK_SEED, USER_SEED},
};

#[derive(Accounts)]
pub struct SetTaskStatus<'info> {
    pub admin: Signer<'info>,

    #[account(
        seeds = [SETTINGS_SEED],
        has_one = admin @ LedgerError::NotAuthorized,
        bump = settings.bump,
    )]
    pub settings: Account<'info, Settings>,

    #[account(
        mut,
        seeds = [TASK_SEED, &task.id.to_le_bytes()],
        bump = task.bump,
    )]
    pub task: Account<'info, Task>,

    // Required when a user-funded task is cancelled or rejected
    #[account(
        mut,
        seeds = [USER_SEED, &owner_account.external_id.to_le_bytes()],
        bump = owner_account.bump,
    )]
    pub owner_account: Option<Account<'info, UserAccount>>,
}

pub fn handler(ctx: Context<SetTaskStatus>, action: TaskAction) -> Result<()> {
    let task = &mut ctx.accounts.task;

    let from = task.status;
    let to = task.apply(action)?;

    // Unspent budget goes back to the owner's deposit balance, the fee does not
    let refunded = task.refund_to(ctx.accounts.owner_account.as_deref_mut())?;

    emit!(TaskStatusChanged {
        task_id: task.id,
        from,
        to,
        refunded,
    });

    Ok(())
}
