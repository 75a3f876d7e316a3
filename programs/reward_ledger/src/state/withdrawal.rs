// reward_ledger/state/withdrawal.rs

use anchor_lang::prelude::*;

use crate::state::RequestStatus;

#[constant]
pub const WITHDRAWAL_SEED: &[u8] = b"withdrawal";

#[account]
#[derive(InitSpace, Debug)]
pub struct WithdrawalRequest {
    pub id: u64,
    pub user_id: u64,
    pub amount: u64,
    pub method_id: u32,
    #[max_len(128)]
    pub destination: String,
    pub status: RequestStatus,
    pub reserved: bool, // amount is held in the user's reserved_withdrawals
    pub created_at: i64,
    pub resolved_at: i64,
    pub bump: u8,
}
