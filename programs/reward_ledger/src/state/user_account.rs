// reward_ledger/state/user_account.rs

use anchor_lang::prelude::*;
use common::math::apply_delta;

use crate::{
    constants::{MAX_DISPLAY_NAME_LEN, MAX_USERNAME_LEN},
    errors::LedgerError,
    utils::text::ensure_fits,
};

#[constant]
pub const USER_SEED: &[u8] = b"user";

/// Which of the two balances an adjustment targets.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum BalanceKind {
    Earnings,
    Deposit,
}

/// Mutable profile fields supplied by the identity provider.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Default, Debug)]
pub struct Profile {
    pub display_name: String,
    pub username: String,
}

impl Profile {
    pub fn validate(&self) -> Result<()> {
        ensure_fits(&self.display_name, MAX_DISPLAY_NAME_LEN)?;
        ensure_fits(&self.username, MAX_USERNAME_LEN)
    }
}

#[account]
#[derive(InitSpace, Debug)]
pub struct UserAccount {
    pub external_id: u64, // Telegram user id, 0 until the account is created
    #[max_len(64)]
    pub display_name: String,
    #[max_len(32)]
    pub username: String,
    pub balance: u64,              // earnings
    pub deposit_balance: u64,      // funding, the only withdrawable balance
    pub reserved_withdrawals: u64, // held by pending withdrawals when reservation is enabled
    pub referral_count: u32,
    pub referred_by: Option<u64>, // set at most once
    pub channels_joined: bool,
    pub ads_watched_today: u16,
    pub spins_used_today: u16,
    pub last_activity_day: u32, // UTC day index the daily counters belong to
    pub total_earned: u64,
    pub total_withdrawn: u64,
    pub tasks_completed: u32,
    pub created_at: i64,
    pub bump: u8,
}

impl UserAccount {
    pub fn new(external_id: u64, profile: Profile, now: i64, today: u32, bump: u8) -> Self {
        Self {
            external_id,
            display_name: profile.display_name,
            username: profile.username,
            balance: 0,
            deposit_balance: 0,
            reserved_withdrawals: 0,
            referral_count: 0,
            referred_by: None,
            channels_joined: false,
            ads_watched_today: 0,
            spins_used_today: 0,
            last_activity_day: today,
            total_earned: 0,
            total_withdrawn: 0,
            tasks_completed: 0,
            created_at: now,
            bump,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.external_id != 0
    }

    /// Only the profile changes for a returning user. Balances and referral state stay as they are.
    pub fn update_profile(&mut self, profile: Profile) {
        self.display_name = profile.display_name;
        self.username = profile.username;
    }

    /// Deposit balance not held by pending withdrawals.
    pub fn available_deposit(&self) -> u64 {
        self.deposit_balance.saturating_sub(self.reserved_withdrawals)
    }

    // Balance mutations. Each computes the new value first and writes only on success.

    pub fn credit_earnings(&mut self, amount: u64) -> Result<()> {
        let balance = self
            .balance
            .checked_add(amount)
            .ok_or(LedgerError::MathOverflow)?;
        let total_earned = self
            .total_earned
            .checked_add(amount)
            .ok_or(LedgerError::MathOverflow)?;

        self.balance = balance;
        self.total_earned = total_earned;
        Ok(())
    }

    pub fn debit_earnings(&mut self, amount: u64) -> Result<()> {
        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(LedgerError::InsufficientFunds)?;
        Ok(())
    }

    pub fn credit_deposit(&mut self, amount: u64) -> Result<()> {
        self.deposit_balance = self
            .deposit_balance
            .checked_add(amount)
            .ok_or(LedgerError::MathOverflow)?;
        Ok(())
    }

    /// Spends from the deposit balance. Reserved funds cannot be spent.
    pub fn debit_deposit(&mut self, amount: u64) -> Result<()> {
        if amount > self.available_deposit() {
            return err!(LedgerError::InsufficientFunds);
        }

        self.deposit_balance -= amount;
        Ok(())
    }

    /// Signed admin adjustment. Returns the new balance.
    pub fn adjust(&mut self, kind: BalanceKind, delta: i64) -> Result<u64> {
        let (current, floor) = match kind {
            BalanceKind::Earnings => (self.balance, 0),
            BalanceKind::Deposit => (self.deposit_balance, self.reserved_withdrawals),
        };

        let updated = apply_delta(current, delta).ok_or(if delta < 0 {
            LedgerError::InsufficientFunds
        } else {
            LedgerError::MathOverflow
        })?;

        // A negative adjustment must not release funds held by pending withdrawals
        if delta < 0 && updated < floor {
            return err!(LedgerError::InsufficientFunds);
        }

        match kind {
            BalanceKind::Earnings => self.balance = updated,
            BalanceKind::Deposit => self.deposit_balance = updated,
        }

        Ok(updated)
    }

    /// Holds `amount` for a pending withdrawal.
    pub fn reserve_withdrawal(&mut self, amount: u64) -> Result<()> {
        if amount > self.available_deposit() {
            return err!(LedgerError::InsufficientFunds);
        }

        self.reserved_withdrawals += amount; // cannot overflow, bounded by deposit_balance
        Ok(())
    }

    pub fn release_withdrawal(&mut self, amount: u64) -> Result<()> {
        self.reserved_withdrawals = self
            .reserved_withdrawals
            .checked_sub(amount)
            .ok_or(LedgerError::MathOverflow)?;
        Ok(())
    }

    /// Final debit of an approved withdrawal.
    pub fn settle_withdrawal(&mut self, amount: u64, reserved: bool) -> Result<()> {
        let reserved_after = if reserved {
            self.reserved_withdrawals
                .checked_sub(amount)
                .ok_or(LedgerError::MathOverflow)?
        } else {
            self.reserved_withdrawals
        };

        let deposit_after = self
            .deposit_balance
            .checked_sub(amount)
            .filter(|remaining| *remaining >= reserved_after)
            .ok_or(LedgerError::InsufficientFunds)?;

        let total_withdrawn = self
            .total_withdrawn
            .checked_add(amount)
            .ok_or(LedgerError::MathOverflow)?;

        self.reserved_withdrawals = reserved_after;
        self.deposit_balance = deposit_after;
        self.total_withdrawn = total_withdrawn;
        Ok(())
    }

    // Daily counters. There is no scheduled reset: the first activity of a new UTC day
    // clears every counter that belongs to the previous day.

    pub fn roll_day(&mut self, today: u32) {
        if self.last_activity_day != today {
            self.ads_watched_today = 0;
            self.spins_used_today = 0;
            self.last_activity_day = today;
        }
    }

    pub fn count_ad_view(&mut self, today: u32, daily_limit: u16) -> Result<()> {
        self.roll_day(today);
        self.ads_watched_today = bump_counter(self.ads_watched_today, daily_limit)?;
        Ok(())
    }

    pub fn count_spin(&mut self, today: u32, daily_limit: u16) -> Result<()> {
        self.roll_day(today);
        self.spins_used_today = bump_counter(self.spins_used_today, daily_limit)?;
        Ok(())
    }
}

fn bump_counter(count: u16, limit: u16) -> Result<u16> {
    if limit != 0 && count >= limit {
        return err!(LedgerError::DailyLimitReached);
    }

    count.checked_add(1).ok_or(error!(LedgerError::MathOverflow))
}
