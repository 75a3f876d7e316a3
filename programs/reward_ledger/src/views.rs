// reward_ledger/views.rs

// Read-only snapshots returned by the view instructions. The mini app calls
// these after every event it receives instead of keeping its own copy.

use anchor_lang::prelude::*;

use crate::state::{Task, TaskStatus, UserAccount};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct Balances {
    pub earnings: u64,
    pub deposit: u64,
    pub reserved: u64,  // held by pending withdrawals
    pub available: u64, // deposit not held by pending withdrawals
}

impl From<&UserAccount> for Balances {
    fn from(account: &UserAccount) -> Self {
        Self {
            earnings: account.balance,
            deposit: account.deposit_balance,
            reserved: account.reserved_withdrawals,
            available: account.available_deposit(),
        }
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct TaskBudgetView {
    pub task_id: u64,
    pub status: TaskStatus,
    pub reward_amount: u64,
    pub max_completions: u32,
    pub current_completions: u32,
    pub total_budget: u64,
    pub spent: u64,
    pub remaining_budget: u64,
}

impl From<&Task> for TaskBudgetView {
    fn from(task: &Task) -> Self {
        Self {
            task_id: task.id,
            status: task.status,
            reward_amount: task.reward_amount,
            max_completions: task.max_completions,
            current_completions: task.current_completions,
            total_budget: task.total_budget,
            spent: task.spent(),
            remaining_budget: task.remaining_budget(),
        }
    }
}
