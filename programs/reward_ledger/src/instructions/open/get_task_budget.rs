// reward_ledger/instructions/open/get_task_budget.rs

// external dependencies
use anchor_lang::prelude::*;

// local dependencies
use crate::{
    state::{Task, TASK_SEED},
    views::TaskBudgetView,
};

#[derive(Accounts)]
pub struct GetTaskBudget<'info> {
    #[account(
        seeds = [TASK_SEED, &task.id.to_le_bytes()],
        bump = task.bump,
    )]
    pub task: Account<'info, Task>,
}

pub fn handler(ctx: Context<GetTaskBudget>) -> Result<TaskBudgetView> {
    Ok(TaskBudgetView::from(&*ctx.accounts.task))
}
