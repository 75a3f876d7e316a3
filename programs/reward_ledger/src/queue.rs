// reward_ledger/queue.rs

// Withdrawal gate and the two request queues. Submission never moves money;
// the admin decision does.

use anchor_lang::prelude::*;

use crate::{
    errors::LedgerError,
    state::{Decision, DepositRequest, PaymentMethod, Settings, UserAccount, WithdrawalRequest},
};

/// Admits a withdrawal request. Returns true if the amount is now reserved
/// against the user's deposit balance.
pub fn admit_withdrawal(
    settings: &Settings,
    user: &mut UserAccount,
    method: &PaymentMethod,
    amount: u64,
) -> Result<bool> {
    if amount == 0 {
        return err!(LedgerError::InvalidAmount);
    }

    settings.check_withdrawal_eligibility(user.referral_count)?;

    let spendable = if settings.reserve_withdrawals {
        user.available_deposit()
    } else {
        user.deposit_balance
    };

    if amount > spendable {
        return err!(LedgerError::InsufficientFunds);
    }

    method.ensure_withdrawals()?;
    method.check_amount(amount)?;

    if settings.reserve_withdrawals {
        user.reserve_withdrawal(amount)?;
    }

    Ok(settings.reserve_withdrawals)
}

/// Approval debits the deposit balance, rejection only releases a reservation.
pub fn apply_withdrawal_decision(
    request: &mut WithdrawalRequest,
    user: &mut UserAccount,
    decision: Decision,
    now: i64,
) -> Result<()> {
    let status = request.status.resolve(decision)?;

    match decision {
        Decision::Approve => user.settle_withdrawal(request.amount, request.reserved)?,
        Decision::Reject if request.reserved => user.release_withdrawal(request.amount)?,
        Decision::Reject => {}
    }

    request.status = status;
    request.resolved_at = now;

    Ok(())
}

pub fn admit_deposit(method: &PaymentMethod, amount: u64) -> Result<()> {
    if amount == 0 {
        return err!(LedgerError::InvalidAmount);
    }

    method.ensure_deposits()?;
    method.check_amount(amount)
}

pub fn apply_deposit_decision(
    request: &mut DepositRequest,
    user: &mut UserAccount,
    decision: Decision,
    now: i64,
) -> Result<()> {
    let status = request.status.resolve(decision)?;

    if decision == Decision::Approve {
        user.credit_deposit(request.amount)?;
    }

    request.status = status;
    request.resolved_at = now;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        state::RequestStatus,
        tests::helpers::{assert_ledger_err, payment_method, settings, user},
    };

    fn withdrawal(user_id: u64, amount: u64, reserved: bool) -> WithdrawalRequest {
        WithdrawalRequest {
            id: 0,
            user_id,
            amount,
            method_id: 1,
            destination: "TXYZ".to_string(),
            status: RequestStatus::Pending,
            reserved,
            created_at: 0,
            resolved_at: 0,
            bump: 255,
        }
    }

    fn deposit(user_id: u64, amount: u64) -> DepositRequest {
        DepositRequest {
            id: 0,
            user_id,
            amount,
            method_id: 1,
            transaction_id: "0xabc".to_string(),
            status: RequestStatus::Pending,
            created_at: 0,
            resolved_at: 0,
            bump: 255,
        }
    }

    mod withdrawals {
        use super::*;

        #[test]
        fn gate_blocks_below_required_referrals() {
            let settings = settings();
            let method = payment_method(0, 0);
            let mut account = user(1, 0, 5_000);
            account.referral_count = settings.required_referrals - 1;

            assert_ledger_err(
                admit_withdrawal(&settings, &mut account, &method, 1_000),
                LedgerError::NotEligible,
            );

            account.referral_count = settings.required_referrals;
            assert!(!admit_withdrawal(&settings, &mut account, &method, 1_000).unwrap());
            assert_eq!(account.deposit_balance, 5_000);
        }

        #[test]
        fn validation_order() {
            let settings = settings();
            let mut method = payment_method(2_000, 3_000);
            let mut account = user(1, 0, 5_000);
            account.referral_count = 10;

            assert_ledger_err(
                admit_withdrawal(&settings, &mut account, &method, 0),
                LedgerError::InvalidAmount,
            );
            assert_ledger_err(
                admit_withdrawal(&settings, &mut account, &method, 6_000),
                LedgerError::InsufficientFunds,
            );
            assert_ledger_err(
                admit_withdrawal(&settings, &mut account, &method, 4_000),
                LedgerError::OutOfRange,
            );

            method.is_active = false;
            assert_ledger_err(
                admit_withdrawal(&settings, &mut account, &method, 2_500),
                LedgerError::MethodInactive,
            );
        }

        #[test]
        fn earnings_are_not_withdrawable() {
            let settings = settings();
            let method = payment_method(0, 0);
            let mut account = user(1, 10_000, 0);
            account.referral_count = 10;

            assert_ledger_err(
                admit_withdrawal(&settings, &mut account, &method, 1),
                LedgerError::InsufficientFunds,
            );
        }

        #[test]
        fn optimistic_requests_may_overcommit() {
            let settings = settings();
            let method = payment_method(0, 0);
            let mut account = user(1, 0, 1_000);
            account.referral_count = 10;

            assert!(!admit_withdrawal(&settings, &mut account, &method, 1_000).unwrap());
            assert!(!admit_withdrawal(&settings, &mut account, &method, 1_000).unwrap());

            let mut first = withdrawal(1, 1_000, false);
            let mut second = withdrawal(1, 1_000, false);

            apply_withdrawal_decision(&mut first, &mut account, Decision::Approve, 10).unwrap();
            assert_ledger_err(
                apply_withdrawal_decision(&mut second, &mut account, Decision::Approve, 10),
                LedgerError::InsufficientFunds,
            );

            assert_eq!(account.deposit_balance, 0);
            assert_eq!(second.status, RequestStatus::Pending);
        }

        #[test]
        fn reservation_holds_funds_until_resolved() {
            let mut settings = settings();
            settings.reserve_withdrawals = true;
            let method = payment_method(0, 0);
            let mut account = user(1, 0, 1_500);
            account.referral_count = 10;

            assert!(admit_withdrawal(&settings, &mut account, &method, 1_000).unwrap());
            assert_ledger_err(
                admit_withdrawal(&settings, &mut account, &method, 1_000),
                LedgerError::InsufficientFunds,
            );
            assert_eq!(account.reserved_withdrawals, 1_000);

            let mut request = withdrawal(1, 1_000, true);
            apply_withdrawal_decision(&mut request, &mut account, Decision::Reject, 10).unwrap();

            assert_eq!(request.status, RequestStatus::Rejected);
            assert_eq!(account.reserved_withdrawals, 0);
            assert_eq!(account.deposit_balance, 1_500);
        }

        #[test]
        fn approval_debits_once() {
            let mut account = user(1, 0, 2_000);
            let mut request = withdrawal(1, 1_200, false);

            apply_withdrawal_decision(&mut request, &mut account, Decision::Approve, 77).unwrap();
            assert_eq!(request.status, RequestStatus::Completed);
            assert_eq!(request.resolved_at, 77);
            assert_eq!(account.deposit_balance, 800);

            for decision in [Decision::Approve, Decision::Reject] {
                assert_ledger_err(
                    apply_withdrawal_decision(&mut request, &mut account, decision, 78),
                    LedgerError::RequestAlreadyResolved,
                );
            }
            assert_eq!(account.deposit_balance, 800);
            assert_eq!(account.total_withdrawn, 1_200);
        }
    }

    mod deposits {
        use super::*;

        #[test]
        fn admission_checks_method() {
            let mut method = payment_method(1_000, 0);

            assert_ledger_err(admit_deposit(&method, 0), LedgerError::InvalidAmount);
            assert_ledger_err(admit_deposit(&method, 999), LedgerError::OutOfRange);
            assert!(admit_deposit(&method, 1_000).is_ok());

            method.supports_deposit = false;
            assert_ledger_err(admit_deposit(&method, 1_000), LedgerError::MethodInactive);
        }

        #[test]
        fn approval_credits_deposit_balance() {
            let mut account = user(1, 50, 0);
            let mut request = deposit(1, 5_000);

            apply_deposit_decision(&mut request, &mut account, Decision::Approve, 9).unwrap();

            assert_eq!(request.status, RequestStatus::Completed);
            assert_eq!(account.deposit_balance, 5_000);
            assert_eq!(account.balance, 50);
        }

        #[test]
        fn rejection_moves_nothing() {
            let mut account = user(1, 0, 0);
            let mut request = deposit(1, 5_000);

            apply_deposit_decision(&mut request, &mut account, Decision::Reject, 9).unwrap();
            assert_eq!(request.status, RequestStatus::Rejected);
            assert_eq!(account.deposit_balance, 0);

            assert_ledger_err(
                apply_deposit_decision(&mut request, &mut account, Decision::Approve, 10),
                LedgerError::RequestAlreadyResolved,
            );
            assert_eq!(account.deposit_balance, 0);
        }
    }
}
