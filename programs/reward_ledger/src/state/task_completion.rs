// reward_ledger/state/task_completion.rs

use anchor_lang::prelude::*;

#[constant]
pub const COMPLETION_SEED: &[u8] = b"completion";

/// Proof that a user completed a task. One PDA per (task, user) pair, so the
/// record doubles as the idempotency key for retried completions.
#[account]
#[derive(InitSpace, Debug)]
pub struct TaskCompletion {
    pub task_id: u64,
    pub user_id: u64, // 0 until the completion is recorded
    pub completed_at: i64,
    pub reward_earned: u64,
    pub bump: u8,
}

impl TaskCompletion {
    pub fn is_recorded(&self) -> bool {
        self.user_id != 0
    }
}
