// reward_ledger/instructions/admin/create_admin_task.rs

// external dependencies
use anchor_lang::prelude::*;
use common::calendar;

// local dependencies
use crate::{
    constants::ANCHOR_DISCRIMINATOR_SIZE,
    errors::LedgerError,
    events::TaskCreated,
    state::{Settings, Task, TaskQuote, TaskSizing, SETTINGS_SEED, TASK_SEED},
};

#[derive(Accounts)]
pub struct CreateAdminTask<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [SETTINGS_SEED],
        has_one = admin @ LedgerError::NotAuthorized,
        bump = settings.bump,
    )]
    pub settings: Account<'info, Settings>,

    #[account(
        init,
        payer = admin,
        space = ANCHOR_DISCRIMINATOR_SIZE + Task::INIT_SPACE,
        seeds = [TASK_SEED, &settings.task_count.to_le_bytes()],
        bump
    )]
    pub task: Account<'info, Task>,

    pub system_program: Program<'info, System>,
}

/// Admin tasks are funded off-ledger: no deposit is debited and no fee is charged.
pub fn handler(
    ctx: Context<CreateAdminTask>,
    title: String,
    task_url: String,
    reward_amount: u64,
    sizing: TaskSizing,
) -> Result<()> {
    let settings = &mut ctx.accounts.settings;

    let quote = TaskQuote::new(settings, reward_amount, sizing, false)?;
    let id = settings.next_task_id()?;
    let (now, _) = calendar::now()?;

    ctx.accounts.task.set_inner(Task::new(
        id,
        title,
        task_url,
        &quote,
        None,
        now,
        ctx.bumps.task,
    )?);

    emit!(TaskCreated {
        task_id: id,
        owner: None,
        reward_amount: quote.reward_amount,
        max_completions: quote.max_completions,
        total_budget: quote.total_budget,
        admin_fee: 0,
        status: ctx.accounts.task.status,
    });

    Ok(())
}
