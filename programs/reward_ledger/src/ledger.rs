// reward_ledger/ledger.rs

use anchor_lang::prelude::*;

use crate::{
    errors::LedgerError,
    events::ActivityRecorded,
    state::{Task, TaskCompletion, UserAccount},
};

/// Kinds of earn events written to the activity log.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Activity {
    AdWatched,
    AutomaticAdWatched, // tracked for analytics, never paid
    TaskCompleted,
    SpinWin,
    ReferralBonus,
}

/// Credits `amount` to the user's earnings and returns the log entry to emit.
///
/// The caller emits the event once its own writes are done, so a failed
/// instruction never leaves a log entry behind.
pub fn record_earn(
    user: &mut UserAccount,
    activity: Activity,
    amount: u64,
    day: u32,
) -> Result<ActivityRecorded> {
    if activity == Activity::AutomaticAdWatched && amount != 0 {
        return err!(LedgerError::InvalidParam);
    }

    user.credit_earnings(amount)?;

    Ok(ActivityRecorded {
        external_id: user.external_id,
        activity,
        amount,
        day,
        balance: user.balance,
    })
}

/// Pays one task completion and fills in the completion record.
///
/// `completion` is the (task, user) record; a recorded one means the user was
/// already paid for this task.
pub fn settle_completion(
    task: &mut Task,
    user: &mut UserAccount,
    completion: &mut TaskCompletion,
    now: i64,
    day: u32,
) -> Result<ActivityRecorded> {
    if completion.is_recorded() {
        return err!(LedgerError::AlreadyCompleted);
    }

    if task.created_by_user == Some(user.external_id) {
        return err!(LedgerError::OwnTask);
    }

    let tasks_completed = user
        .tasks_completed
        .checked_add(1)
        .ok_or(LedgerError::MathOverflow)?;

    let reward = task.record_completion()?;
    let entry = record_earn(user, Activity::TaskCompleted, reward, day)?;
    user.tasks_completed = tasks_completed;

    completion.task_id = task.id;
    completion.user_id = user.external_id;
    completion.completed_at = now;
    completion.reward_earned = reward;

    Ok(entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        state::TaskStatus,
        tests::helpers::{assert_ledger_err, completion, task, user},
    };

    #[test]
    fn earn_credits_and_logs() {
        let mut account = user(5, 100, 0);

        let entry = record_earn(&mut account, Activity::SpinWin, 25, 19_000).unwrap();

        assert_eq!(account.balance, 125);
        assert_eq!(entry.external_id, 5);
        assert_eq!(entry.activity, Activity::SpinWin);
        assert_eq!(entry.amount, 25);
        assert_eq!(entry.day, 19_000);
        assert_eq!(entry.balance, 125);
    }

    #[test]
    fn automatic_ads_never_pay() {
        let mut account = user(5, 100, 0);

        let entry = record_earn(&mut account, Activity::AutomaticAdWatched, 0, 1).unwrap();
        assert_eq!(entry.amount, 0);
        assert_eq!(account.balance, 100);

        assert_ledger_err(
            record_earn(&mut account, Activity::AutomaticAdWatched, 5, 1),
            LedgerError::InvalidParam,
        );
        assert_eq!(account.balance, 100);
    }

    #[test]
    fn completion_pays_once() {
        let mut task = task(TaskStatus::Active, 10, 5);
        let mut account = user(9, 0, 0);
        let mut record = completion();

        let entry = settle_completion(&mut task, &mut account, &mut record, 500, 3).unwrap();

        assert_eq!(entry.activity, Activity::TaskCompleted);
        assert_eq!(entry.amount, 10);
        assert_eq!(account.balance, 10);
        assert_eq!(account.tasks_completed, 1);
        assert_eq!(record.user_id, 9);
        assert_eq!(record.reward_earned, 10);
        assert_eq!(record.completed_at, 500);

        assert_ledger_err(
            settle_completion(&mut task, &mut account, &mut record, 501, 3),
            LedgerError::AlreadyCompleted,
        );
        assert_eq!(task.current_completions, 1);
        assert_eq!(account.balance, 10);
    }

    #[test]
    fn owner_cannot_complete_own_task() {
        let mut task = task(TaskStatus::Active, 10, 5);
        task.created_by_user = Some(9);
        let mut account = user(9, 0, 0);

        assert_ledger_err(
            settle_completion(&mut task, &mut account, &mut completion(), 0, 0),
            LedgerError::OwnTask,
        );
        assert_eq!(task.current_completions, 0);
    }

    #[test]
    fn inactive_task_pays_nothing() {
        let mut task = task(TaskStatus::Paused, 10, 5);
        let mut account = user(9, 0, 0);
        let mut record = completion();

        assert_ledger_err(
            settle_completion(&mut task, &mut account, &mut record, 0, 0),
            LedgerError::TaskInactive,
        );
        assert!(!record.is_recorded());
        assert_eq!(account.balance, 0);
        assert_eq!(account.tasks_completed, 0);
    }
}
