// reward_ledger/state/deposit.rs

use anchor_lang::prelude::*;

use crate::state::RequestStatus;

#[constant]
pub const DEPOSIT_SEED: &[u8] = b"deposit";

/// External funding reported by a user and reconciled by the admin.
#[account]
#[derive(InitSpace, Debug)]
pub struct DepositRequest {
    pub id: u64,
    pub user_id: u64,
    pub amount: u64,
    pub method_id: u32,
    #[max_len(128)]
    pub transaction_id: String,
    pub status: RequestStatus,
    pub created_at: i64,
    pub resolved_at: i64,
    pub bump: u8,
}
