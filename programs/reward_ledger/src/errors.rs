// reward_ledger/errors.rs

use anchor_lang::prelude::*;

#[error_code]
pub enum LedgerError {
    #[msg("Insufficient funds.")]
    InsufficientFunds,
    #[msg("Amount must be greater than zero.")]
    InvalidAmount,
    #[msg("Value is below the configured minimum.")]
    BelowMinimum,
    #[msg("Not enough referrals to withdraw.")]
    NotEligible,
    #[msg("Task already completed by this user.")]
    AlreadyCompleted,
    #[msg("Task is not active.")]
    TaskInactive,
    #[msg("Amount is outside the allowed range.")]
    OutOfRange,
    #[msg("Account not found.")]
    NotFound,
    #[msg("Referral already attributed.")]
    AlreadyAttributed,
    #[msg("Invalid signer.")]
    NotAuthorized,
    #[msg("Invalid parameter.")]
    InvalidParam,
    #[msg("Math overflow.")]
    MathOverflow,
    #[msg("Daily limit reached.")]
    DailyLimitReached,
    #[msg("Request is already resolved.")]
    RequestAlreadyResolved,
    #[msg("Payment method is not available.")]
    MethodInactive,
    #[msg("Cannot complete your own task.")]
    OwnTask,
    #[msg("Ledger is paused.")]
    Paused,
    #[msg("Status transition is not allowed.")]
    InvalidTransition,
    #[msg("Account does not match the expected key.")]
    InvalidAccount,
    #[msg("Text is too long.")]
    TextTooLong,
}
