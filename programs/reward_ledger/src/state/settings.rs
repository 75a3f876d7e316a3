// reward_ledger/state/settings.rs

use anchor_lang::prelude::*;

use crate::{constants::*, errors::LedgerError};

#[constant]
pub const SETTINGS_SEED: &[u8] = b"settings";

#[account]
#[derive(InitSpace, Debug)]
pub struct Settings {
    pub admin: Pubkey,    // can update settings and resolve requests
    pub operator: Pubkey, // backend key that relays verified user actions
    pub paused: bool,
    pub ad_reward: u64,          // paid per manual ad view
    pub referral_bonus: u64,     // flat amount credited to the referrer
    pub min_task_cpc: u64,       // minimum reward per task completion
    pub min_task_budget: u64,    // minimum task budget, fee excluded
    pub required_referrals: u32, // referrals needed before a withdrawal
    pub withdrawal_gate_enabled: bool,
    pub reserve_withdrawals: bool, // hold pending withdrawal amounts against the deposit balance
    pub conversion_fee_bps: u64,
    pub task_admin_fee_bps: u64,
    pub daily_ad_limit: u16, // 0 disables the limit
    pub daily_spin_limit: u16,
    pub max_spin_reward: u64,
    pub task_count: u64, // next task id
    pub withdrawal_count: u64,
    pub deposit_count: u64,
    pub bump: u8,
}

/// Partial update applied by `update_settings`. `None` keeps the current value.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Default, Debug)]
pub struct SettingsUpdate {
    pub ad_reward: Option<u64>,
    pub referral_bonus: Option<u64>,
    pub min_task_cpc: Option<u64>,
    pub min_task_budget: Option<u64>,
    pub required_referrals: Option<u32>,
    pub withdrawal_gate_enabled: Option<bool>,
    pub reserve_withdrawals: Option<bool>,
    pub conversion_fee_bps: Option<u64>,
    pub task_admin_fee_bps: Option<u64>,
    pub daily_ad_limit: Option<u16>,
    pub daily_spin_limit: Option<u16>,
    pub max_spin_reward: Option<u64>,
}

impl Settings {
    pub fn new(admin: Pubkey, operator: Pubkey, bump: u8) -> Self {
        Self {
            admin,
            operator,
            paused: false,
            ad_reward: DEFAULT_AD_REWARD,
            referral_bonus: DEFAULT_REFERRAL_BONUS,
            min_task_cpc: DEFAULT_MIN_TASK_CPC,
            min_task_budget: DEFAULT_MIN_TASK_BUDGET,
            required_referrals: DEFAULT_REQUIRED_REFERRALS,
            withdrawal_gate_enabled: true,
            reserve_withdrawals: false,
            conversion_fee_bps: DEFAULT_CONVERSION_FEE_BPS,
            task_admin_fee_bps: DEFAULT_TASK_ADMIN_FEE_BPS,
            daily_ad_limit: DEFAULT_DAILY_AD_LIMIT,
            daily_spin_limit: DEFAULT_DAILY_SPIN_LIMIT,
            max_spin_reward: DEFAULT_MAX_SPIN_REWARD,
            task_count: 0,
            withdrawal_count: 0,
            deposit_count: 0,
            bump,
        }
    }

    /// Validates the whole update before writing any field.
    pub fn apply(&mut self, update: &SettingsUpdate) -> Result<()> {
        for bps in [update.conversion_fee_bps, update.task_admin_fee_bps]
            .into_iter()
            .flatten()
        {
            if bps > ONE_HUNDRED_PERCENT {
                return err!(LedgerError::InvalidParam);
            }
        }

        if update.min_task_cpc == Some(0) {
            return err!(LedgerError::InvalidParam);
        }

        if let Some(value) = update.ad_reward {
            self.ad_reward = value;
        }
        if let Some(value) = update.referral_bonus {
            self.referral_bonus = value;
        }
        if let Some(value) = update.min_task_cpc {
            self.min_task_cpc = value;
        }
        if let Some(value) = update.min_task_budget {
            self.min_task_budget = value;
        }
        if let Some(value) = update.required_referrals {
            self.required_referrals = value;
        }
        if let Some(value) = update.withdrawal_gate_enabled {
            self.withdrawal_gate_enabled = value;
        }
        if let Some(value) = update.reserve_withdrawals {
            self.reserve_withdrawals = value;
        }
        if let Some(value) = update.conversion_fee_bps {
            self.conversion_fee_bps = value;
        }
        if let Some(value) = update.task_admin_fee_bps {
            self.task_admin_fee_bps = value;
        }
        if let Some(value) = update.daily_ad_limit {
            self.daily_ad_limit = value;
        }
        if let Some(value) = update.daily_spin_limit {
            self.daily_spin_limit = value;
        }
        if let Some(value) = update.max_spin_reward {
            self.max_spin_reward = value;
        }

        Ok(())
    }

    /// Withdrawal gate. Skipped entirely when disabled by the admin.
    pub fn check_withdrawal_eligibility(&self, referral_count: u32) -> Result<()> {
        if self.withdrawal_gate_enabled && referral_count < self.required_referrals {
            return err!(LedgerError::NotEligible);
        }

        Ok(())
    }

    pub fn next_task_id(&mut self) -> Result<u64> {
        next_id(&mut self.task_count)
    }

    pub fn next_withdrawal_id(&mut self) -> Result<u64> {
        next_id(&mut self.withdrawal_count)
    }

    pub fn next_deposit_id(&mut self) -> Result<u64> {
        next_id(&mut self.deposit_count)
    }
}

fn next_id(counter: &mut u64) -> Result<u64> {
    let id = *counter;
    *counter = id.checked_add(1).ok_or(LedgerError::MathOverflow)?;
    Ok(id)
}
