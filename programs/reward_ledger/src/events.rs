// reward_ledger/events.rs

// The activity log. Every ledger change emits one of these; indexers and the
// mini app subscribe to program logs instead of polling accounts.

use anchor_lang::prelude::*;

use crate::{
    ledger::Activity,
    state::{BalanceKind, RequestStatus, TaskStatus},
};

#[event]
pub struct AccountCreated {
    pub external_id: u64,
    pub referred_by: Option<u64>,
    pub ts: i64,
}

#[event]
pub struct ReferralAttributed {
    pub referrer_id: u64,
    pub referred_id: u64,
    pub bonus: u64,
    pub ts: i64,
}

#[event]
#[derive(Debug)]
pub struct ActivityRecorded {
    pub external_id: u64,
    pub activity: Activity,
    pub amount: u64,
    pub day: u32,
    pub balance: u64, // earnings after the entry
}

#[event]
pub struct ChannelsJoinedSet {
    pub external_id: u64,
    pub joined: bool,
}

#[event]
pub struct BalanceAdjusted {
    pub external_id: u64,
    pub kind: BalanceKind,
    pub delta: i64,
    pub balance: u64,
}

#[event]
pub struct Converted {
    pub external_id: u64,
    pub amount: u64,
    pub fee: u64,
    pub credited: u64,
}

#[event]
pub struct TaskCreated {
    pub task_id: u64,
    pub owner: Option<u64>,
    pub reward_amount: u64,
    pub max_completions: u32,
    pub total_budget: u64,
    pub admin_fee: u64,
    pub status: TaskStatus,
}

#[event]
pub struct TaskCompleted {
    pub task_id: u64,
    pub external_id: u64,
    pub reward: u64,
    pub completions: u32,
    pub status: TaskStatus,
}

#[event]
pub struct TaskStatusChanged {
    pub task_id: u64,
    pub from: TaskStatus,
    pub to: TaskStatus,
    pub refunded: u64,
}

#[event]
pub struct WithdrawalSubmitted {
    pub request_id: u64,
    pub external_id: u64,
    pub amount: u64,
    pub method_id: u32,
    pub reserved: bool,
}

#[event]
pub struct WithdrawalResolved {
    pub request_id: u64,
    pub external_id: u64,
    pub amount: u64,
    pub status: RequestStatus,
}

#[event]
pub struct DepositSubmitted {
    pub request_id: u64,
    pub external_id: u64,
    pub amount: u64,
    pub method_id: u32,
}

#[event]
pub struct DepositResolved {
    pub request_id: u64,
    pub external_id: u64,
    pub amount: u64,
    pub status: RequestStatus,
}

#[event]
pub struct SettingsUpdated {
    pub admin: Pubkey,
}

#[event]
pub struct OperatorChanged {
    pub old_operator: Pubkey,
    pub new_operator: Pubkey,
}

#[event]
pub struct AdminTransferred {
    pub old_admin: Pubkey,
    pub new_admin: Pubkey,
}

#[event]
pub struct PauseChanged {
    pub paused: bool,
}
