// reward_ledger/instructions/operator/complete_task.rs

// external dependencies
use anchor_lang::prelude::*;
use common::calendar;

// local dependencies
use crate::{
    constants::ANCHOR_DISCRIMINATOR_SIZE,
    errors::LedgerError,
    events::TaskCompleted,
    ledger::settle_completion,
    state::{
        Settings, Task, TaskCompletion, UserAccount, COMPLETION_SEED, SETTINGS_SEED, TASK_SEED,
        USER_SEED,
    },
};

#[derive(Accounts)]
pub struct CompleteTask<'info> {
    #[account(mut)]
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

    #[account(
        mut,
        seeds = [TASK_SEED, &task.id.to_le_bytes()],
        bump = task.bump,
    )]
    pub task: Account<'info, Task>,

    // init_if_needed so that a repeated completion reaches the handler and
    // fails with AlreadyCompleted instead of an allocation error
    #[account(
        init_if_needed,
        payer = operator,
        space = ANCHOR_DISCRIMINATOR_SIZE + TaskCompletion::INIT_SPACE,
        seeds = [COMPLETION_SEED, &task.id.to_le_bytes(), &user_account.external_id.to_le_bytes()],
        bump
    )]
    pub completion: Account<'info, TaskCompletion>,

    pub system_program: Program<'info, System>,
}

/// Returns the reward paid.
pub fn handler(ctx: Context<CompleteTask>) -> Result<u64> {
    let (now, today) = calendar::now()?;

    let task = &mut ctx.accounts.task;
    let user = &mut ctx.accounts.user_account;
    let completion = &mut ctx.accounts.completion;

    let entry = settle_completion(task, user, completion, now, today)?;
    completion.bump = ctx.bumps.completion;

    emit!(entry);
    emit!(TaskCompleted {
        task_id: task.id,
        external_id: user.external_id,
        reward: completion.reward_earned,
        completions: task.current_completions,
        status: task.status,
    });

    Ok(completion.reward_earned)
}
