// reward_ledger/instructions/operator/create_task.rs

// external dependencies
use anchor_lang::prelude::*;
use common::calendar;

// local dependencies
use crate::{
    constants::ANCHOR_DISCRIMINATOR_SIZE,
    errors::LedgerError,
    events::TaskCreated,
    state::{
        Settings, Task, TaskQuote, TaskSizing, UserAccount, SETTINGS_SEED, TASK_SEED, USER_SEED,
    },
};

#[derive(Accounts)]
pub struct CreateTask<'info> {
    #[account(mut)]
    pub operator: Signer<'info>,

    #[account(
        mut,
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
        init,
        payer = operator,
        space = ANCHOR_DISCRIMINATOR_SIZE + Task::INIT_SPACE,
        seeds = [TASK_SEED, &settings.task_count.to_le_bytes()],
        bump
    )]
    pub task: Account<'info, Task>,

    pub system_program: Program<'info, System>,
}

/// A user-funded task. The budget plus the admin fee is taken from the
/// owner's deposit balance up front and the task waits for admin approval.
pub fn handler(
    ctx: Context<CreateTask>,
    title: String,
    task_url: String,
    reward_amount: u64,
    sizing: TaskSizing,
) -> Result<()> {
    let settings = &mut ctx.accounts.settings;
    let user = &mut ctx.accounts.user_account;

    let quote = TaskQuote::new(settings, reward_amount, sizing, true)?;
    user.debit_deposit(quote.total_cost())?;

    let id = settings.next_task_id()?;
    let (now, _) = calendar::now()?;

    let task = Task::new(
        id,
        title,
        task_url,
        &quote,
        Some(user.external_id),
        now,
        ctx.bumps.task,
    )?;

    emit!(TaskCreated {
        task_id: id,
        owner: task.created_by_user,
        reward_amount: task.reward_amount,
        max_completions: task.max_completions,
        total_budget: task.total_budget,
        admin_fee: task.admin_fee,
        status: task.status,
    });

    ctx.accounts.task.set_inner(task);

    Ok(())
}
