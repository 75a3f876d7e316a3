// reward_ledger/state/task.rs

use anchor_lang::prelude::*;
use common::math::{bps_of, budget_for_completions, completions_for_budget};

use crate::{
    constants::{MAX_TASK_TITLE_LEN, MAX_TASK_URL_LEN},
    errors::LedgerError,
    state::{Settings, UserAccount},
    utils::text::ensure_fits,
};

#[constant]
pub const TASK_SEED: &[u8] = b"task";

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub enum TaskStatus {
    Pending,   // user-created, waiting for admin approval
    Active,    // accepting completions
    Paused,    // temporarily closed by the admin
    Completed, // budget exhausted
    Cancelled,
    Rejected,
}

impl TaskStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled | Self::Rejected)
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum TaskAction {
    Approve,
    Pause,
    Resume,
    Cancel,
    Reject,
}

/// How the size of a new task is expressed by its creator.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum TaskSizing {
    Completions(u32),
    Budget(u64),
}

/// Price of a task, computed before anything is written.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TaskQuote {
    pub reward_amount: u64,
    pub max_completions: u32,
    pub total_budget: u64, // reward_amount * max_completions
    pub admin_fee: u64,
}

impl TaskQuote {
    /// Prices a task against the current settings.
    ///
    /// The minimum budget applies to what the creator asked for. The charged
    /// budget is always a whole number of completions; a remainder that
    /// cannot pay a full reward is never charged. The admin fee is added on
    /// top of the budget and only applies to user-funded tasks.
    pub fn new(
        settings: &Settings,
        reward_amount: u64,
        sizing: TaskSizing,
        charge_fee: bool,
    ) -> Result<Self> {
        if reward_amount == 0 {
            return err!(LedgerError::InvalidAmount);
        }

        if reward_amount < settings.min_task_cpc {
            return err!(LedgerError::BelowMinimum);
        }

        let max_completions: u32 = match sizing {
            TaskSizing::Completions(completions) => {
                if completions == 0 {
                    return err!(LedgerError::InvalidAmount);
                }
                let requested = budget_for_completions(reward_amount, completions.into())
                    .ok_or(LedgerError::MathOverflow)?;
                if requested < settings.min_task_budget {
                    return err!(LedgerError::BelowMinimum);
                }
                completions
            }
            TaskSizing::Budget(budget) => {
                if budget < settings.min_task_budget {
                    return err!(LedgerError::BelowMinimum);
                }
                completions_for_budget(budget, reward_amount)
                    .ok_or(LedgerError::InvalidAmount)?
                    .try_into()
                    .map_err(|_| LedgerError::OutOfRange)?
            }
        };

        if max_completions == 0 {
            return err!(LedgerError::InvalidAmount);
        }

        let total_budget = budget_for_completions(reward_amount, max_completions.into())
            .ok_or(LedgerError::MathOverflow)?;

        let admin_fee = if charge_fee {
            bps_of(total_budget, settings.task_admin_fee_bps).ok_or(LedgerError::MathOverflow)?
        } else {
            0
        };

        // Make sure the full cost is representable before anyone is charged
        total_budget
            .checked_add(admin_fee)
            .ok_or(LedgerError::MathOverflow)?;

        Ok(Self {
            reward_amount,
            max_completions,
            total_budget,
            admin_fee,
        })
    }

    /// Amount debited from the owner's deposit balance.
    pub fn total_cost(&self) -> u64 {
        self.total_budget + self.admin_fee // checked in `new`
    }
}

#[account]
#[derive(InitSpace, Debug)]
pub struct Task {
    pub id: u64,
    #[max_len(64)]
    pub title: String,
    #[max_len(200)]
    pub task_url: String,
    pub reward_amount: u64,
    pub total_budget: u64,
    pub max_completions: u32,
    pub current_completions: u32,
    pub admin_fee: u64,
    pub status: TaskStatus,
    pub created_by_user: Option<u64>, // None for admin-created tasks
    pub created_at: i64,
    pub bump: u8,
}

impl Task {
    /// Builds a task from an accepted quote. User-funded tasks wait for admin
    /// approval, admin tasks go live immediately.
    pub fn new(
        id: u64,
        title: String,
        task_url: String,
        quote: &TaskQuote,
        owner: Option<u64>,
        now: i64,
        bump: u8,
    ) -> Result<Self> {
        ensure_fits(&title, MAX_TASK_TITLE_LEN)?;
        ensure_fits(&task_url, MAX_TASK_URL_LEN)?;

        Ok(Self {
            id,
            title,
            task_url,
            reward_amount: quote.reward_amount,
            total_budget: quote.total_budget,
            max_completions: quote.max_completions,
            current_completions: 0,
            admin_fee: quote.admin_fee,
            status: match owner {
                Some(_) => TaskStatus::Pending,
                None => TaskStatus::Active,
            },
            created_by_user: owner,
            created_at: now,
            bump,
        })
    }

    pub fn spent(&self) -> u64 {
        // current_completions <= max_completions, so this is bounded by total_budget
        self.reward_amount * u64::from(self.current_completions)
    }

    pub fn remaining_budget(&self) -> u64 {
        self.total_budget.saturating_sub(self.spent())
    }

    pub fn is_exhausted(&self) -> bool {
        self.current_completions >= self.max_completions
            || self.remaining_budget() < self.reward_amount
    }

    /// Takes one completion slot and returns the reward to pay.
    ///
    /// Exhaustion is re-checked after the slot is taken so the completion that
    /// spends the last reward also closes the task.
    pub fn record_completion(&mut self) -> Result<u64> {
        if self.status != TaskStatus::Active || self.is_exhausted() {
            return err!(LedgerError::TaskInactive);
        }

        self.current_completions += 1; // bounded by max_completions

        if self.is_exhausted() {
            self.status = TaskStatus::Completed;
        }

        Ok(self.reward_amount)
    }

    /// Applies an admin lifecycle action and returns the new status.
    pub fn apply(&mut self, action: TaskAction) -> Result<TaskStatus> {
        use TaskStatus::*;

        if self.status.is_terminal() {
            return err!(LedgerError::InvalidTransition);
        }

        let next = match (self.status, action) {
            (Pending, TaskAction::Approve) => Active,
            (Pending, TaskAction::Reject) => Rejected,
            (Active, TaskAction::Pause) => Paused,
            (Paused, TaskAction::Resume) => Active,
            (Pending | Active | Paused, TaskAction::Cancel) => Cancelled,
            _ => return err!(LedgerError::InvalidTransition),
        };

        // A task approved or resumed with nothing left to pay closes immediately
        self.status = if next == Active && self.is_exhausted() {
            Completed
        } else {
            next
        };

        Ok(self.status)
    }

    /// Unspent budget returned to the owner when a user-funded task is closed early.
    /// The admin fee is kept.
    pub fn refund_due(&self) -> u64 {
        match (self.created_by_user, self.status) {
            (Some(_), TaskStatus::Cancelled | TaskStatus::Rejected) => self.remaining_budget(),
            _ => 0,
        }
    }

    /// Credits the refund due to the task owner's deposit balance and returns it.
    /// The owner account is only required when something is owed.
    pub fn refund_to(&self, owner: Option<&mut UserAccount>) -> Result<u64> {
        let refunded = self.refund_due();
        if refunded == 0 {
            return Ok(0);
        }

        let owner = owner.ok_or(LedgerError::NotFound)?;
        if self.created_by_user != Some(owner.external_id) {
            return err!(LedgerError::InvalidAccount);
        }

        owner.credit_deposit(refunded)?;

        Ok(refunded)
    }
}
