// reward_ledger/tests.rs

// Cross-module tests for the accounting core. Each module keeps its own unit
// tests next to the code; this file holds the shared fixtures and the
// end-to-end flows that touch several accounts at once.
// Run with: cargo test --lib

pub(crate) mod helpers {
    use std::fmt::Debug;

    use anchor_lang::{error::Error, prelude::*};

    use crate::{
        errors::LedgerError,
        state::{PaymentMethod, Profile, Settings, Task, TaskCompletion, TaskStatus, UserAccount},
    };

    /// Asserts that `result` failed with exactly `expected`.
    pub fn assert_ledger_err<T: Debug>(result: Result<T>, expected: LedgerError) {
        match result {
            Err(Error::AnchorError(error)) => {
                assert_eq!(error.error_code_number, u32::from(expected), "{}", error)
            }
            other => panic!("expected {:?}, got {:?}", expected, other),
        }
    }

    pub fn settings() -> Settings {
        Settings::new(Pubkey::new_unique(), Pubkey::new_unique(), 255)
    }

    pub fn user(external_id: u64, balance: u64, deposit_balance: u64) -> UserAccount {
        let mut account = UserAccount::new(external_id, Profile::default(), 0, 0, 255);
        account.balance = balance;
        account.deposit_balance = deposit_balance;
        account
    }

    pub fn task(status: TaskStatus, reward_amount: u64, max_completions: u32) -> Task {
        Task {
            id: 0,
            title: "Join the channel".to_string(),
            task_url: "https://t.me/example".to_string(),
            reward_amount,
            total_budget: reward_amount * u64::from(max_completions),
            max_completions,
            current_completions: 0,
            admin_fee: 0,
            status,
            created_by_user: None,
            created_at: 0,
            bump: 255,
        }
    }

    pub fn completion() -> TaskCompletion {
        TaskCompletion {
            task_id: 0,
            user_id: 0,
            completed_at: 0,
            reward_earned: 0,
            bump: 255,
        }
    }

    pub fn payment_method(min_amount: u64, max_amount: u64) -> PaymentMethod {
        PaymentMethod {
            id: 1,
            name: "USDT TRC20".to_string(),
            min_amount,
            max_amount,
            supports_withdrawal: true,
            supports_deposit: true,
            is_active: true,
            bump: 255,
        }
    }
}

mod referrals {
    use anchor_lang::{prelude::*, system_program};

    use super::helpers::*;
    use crate::{errors::LedgerError, state::attribute_referral};

    #[test]
    fn referral_accounts_are_sent_writable() {
        let referrer = Pubkey::new_unique();
        let record = Pubkey::new_unique();

        let metas = crate::accounts::ResolveAccount {
            operator: Pubkey::new_unique(),
            settings: Pubkey::new_unique(),
            user_account: Pubkey::new_unique(),
            referrer_account: Some(referrer),
            referral_record: Some(record),
            system_program: system_program::ID,
        }
        .to_account_metas(None);

        for key in [referrer, record] {
            let meta = metas.iter().find(|meta| meta.pubkey == key).unwrap();
            assert!(meta.is_writable);
            assert!(!meta.is_signer);
        }
    }

    #[test]
    fn referrer_is_credited_exactly_once() {
        let settings = settings();
        let mut referrer = user(100, 0, 0);
        let mut referred = user(200, 0, 0);

        for _ in 0..3 {
            let _ = attribute_referral(&mut referred, &mut referrer, settings.referral_bonus, 1);
        }

        assert_eq!(referrer.referral_count, 1);
        assert_eq!(referrer.balance, settings.referral_bonus);
        assert_eq!(referred.referred_by, Some(100));
    }

    #[test]
    fn referral_count_unlocks_withdrawals() {
        let settings = settings();
        let mut referrer = user(1, 0, 0);

        for referred_id in 2..(2 + u64::from(settings.required_referrals)) {
            assert_ledger_err(
                settings.check_withdrawal_eligibility(referrer.referral_count),
                LedgerError::NotEligible,
            );

            let mut referred = user(referred_id, 0, 0);
            attribute_referral(&mut referred, &mut referrer, settings.referral_bonus, 1).unwrap();
        }

        assert_eq!(referrer.referral_count, settings.required_referrals);
        assert!(settings
            .check_withdrawal_eligibility(referrer.referral_count)
            .is_ok());
    }
}

mod tasks {
    use super::helpers::*;
    use crate::{
        errors::LedgerError,
        ledger::settle_completion,
        state::{TaskAction, TaskQuote, TaskSizing, TaskStatus},
    };

    #[test]
    fn budget_never_oversold_across_users() {
        let mut task = task(TaskStatus::Active, 25, 4);
        let mut paid = 0;

        for external_id in 1..=10 {
            let mut account = user(external_id, 0, 0);
            if settle_completion(&mut task, &mut account, &mut completion(), 0, 0).is_ok() {
                paid += account.balance;
            }
        }

        assert_eq!(paid, 100);
        assert_eq!(task.current_completions, 4);
        assert_eq!(task.status, TaskStatus::Completed);
    }

    #[test]
    fn cancelled_user_task_refunds_unspent_budget() {
        let settings = settings();
        let mut owner = user(1, 0, 2_000);

        let quote = TaskQuote::new(&settings, 10, TaskSizing::Completions(100), true).unwrap();
        owner.debit_deposit(quote.total_cost()).unwrap();
        assert_eq!(owner.deposit_balance, 900);

        let mut task = task(TaskStatus::Pending, 10, 100);
        task.created_by_user = Some(1);
        task.admin_fee = quote.admin_fee;
        task.apply(TaskAction::Approve).unwrap();

        for external_id in 2..=4 {
            settle_completion(&mut task, &mut user(external_id, 0, 0), &mut completion(), 0, 0)
                .unwrap();
        }

        task.apply(TaskAction::Cancel).unwrap();
        owner.credit_deposit(task.refund_due()).unwrap();

        // 30 paid out, 100 kept as fee
        assert_eq!(owner.deposit_balance, 900 + 970);
        assert_ledger_err(task.apply(TaskAction::Cancel), LedgerError::InvalidTransition);
    }

    #[test]
    fn task_creation_fails_without_funds() {
        let settings = settings();
        let mut owner = user(1, 0, 1_099);

        let quote = TaskQuote::new(&settings, 10, TaskSizing::Completions(100), true).unwrap();

        assert_ledger_err(
            owner.debit_deposit(quote.total_cost()),
            LedgerError::InsufficientFunds,
        );
        assert_eq!(owner.deposit_balance, 1_099);
    }
}

mod scenarios {
    use super::helpers::*;
    use crate::{
        conversion::convert_earnings,
        ledger::settle_completion,
        queue::{admit_withdrawal, apply_withdrawal_decision},
        state::{
            Decision, RequestStatus, TaskAction, TaskQuote, TaskSizing, TaskStatus,
            WithdrawalRequest,
        },
    };

    #[test]
    fn user_funded_task_with_nine_completions() {
        let settings = settings();
        let mut owner = user(1, 0, 5_000);

        // 0.010 USDT per completion, 100 completions
        let quote = TaskQuote::new(&settings, 10, TaskSizing::Completions(100), true).unwrap();
        assert_eq!(quote.total_budget, 1_000);
        assert_eq!(quote.admin_fee, 100);

        owner.debit_deposit(quote.total_cost()).unwrap();
        assert_eq!(owner.deposit_balance, 3_900);

        let mut task = task(TaskStatus::Pending, 10, 100);
        task.created_by_user = Some(owner.external_id);
        task.admin_fee = quote.admin_fee;
        task.apply(TaskAction::Approve).unwrap();

        for external_id in 2..=10 {
            let mut completer = user(external_id, 0, 0);
            settle_completion(&mut task, &mut completer, &mut completion(), 0, 0).unwrap();
            assert_eq!(completer.balance, 10);
        }

        assert_eq!(task.current_completions, 9);
        assert_eq!(task.status, TaskStatus::Active);
        assert_eq!(task.remaining_budget(), 910);
    }

    #[test]
    fn conversion_at_ten_percent() {
        let settings = settings();
        let mut account = user(2, 1_000, 0);

        let result = convert_earnings(&mut account, 500, settings.conversion_fee_bps).unwrap();

        assert_eq!(account.balance, 500);
        assert_eq!(account.deposit_balance, 450);
        assert_eq!(result.fee_charged, 50);
        assert_eq!(result.credited_to_deposit, 450);
    }

    #[test]
    fn rejected_withdrawal_keeps_balance() {
        let settings = settings();
        let method = payment_method(0, 0);
        let mut account = user(3, 0, 2_000);
        account.referral_count = settings.required_referrals;

        let reserved = admit_withdrawal(&settings, &mut account, &method, 2_000).unwrap();
        let mut request = WithdrawalRequest {
            id: 0,
            user_id: 3,
            amount: 2_000,
            method_id: method.id,
            destination: "TXYZ".to_string(),
            status: RequestStatus::Pending,
            reserved,
            created_at: 0,
            resolved_at: 0,
            bump: 255,
        };

        apply_withdrawal_decision(&mut request, &mut account, Decision::Reject, 1).unwrap();

        assert_eq!(account.deposit_balance, 2_000);
        assert_eq!(request.status, RequestStatus::Rejected);
    }
}
