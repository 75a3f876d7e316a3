// reward_ledger/state/referral.rs

use anchor_lang::prelude::*;

use crate::{
    errors::LedgerError,
    events::ActivityRecorded,
    ledger::{record_earn, Activity},
    state::{UserAccount, USER_SEED},
    utils::accounts::{is_vacant, load_program_account},
};

#[constant]
pub const REFERRAL_SEED: &[u8] = b"referral";

/// One record per referred user. The PDA is keyed by the referred id only, so a
/// second attribution for the same user cannot allocate it again.
#[account]
#[derive(InitSpace, Debug)]
pub struct Referral {
    pub referrer_id: u64,
    pub referred_id: u64,
    pub earnings: u64, // bonus credited to the referrer
    pub created_at: i64,
    pub bump: u8,
}

/// Why a referral token was dropped while creating an account.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ReferralSkip {
    SelfReferral,
    MissingAccounts,
    ReferrerMismatch, // not the user PDA for the token
    ReferrerNotFound,
    RecordMismatch, // not the referral PDA for the referred user
    AlreadyRecorded,
}

/// Validates the accounts passed for a referral before anything is written.
/// Returns the loaded referrer and the referral record bump.
pub fn check_referral_accounts(
    program_id: &Pubkey,
    referred_id: u64,
    referrer_id: u64,
    referrer: Option<&AccountInfo>,
    record: Option<&AccountInfo>,
) -> std::result::Result<(UserAccount, u8), ReferralSkip> {
    if referrer_id == referred_id {
        return Err(ReferralSkip::SelfReferral);
    }

    let (referrer_info, record_info) = match (referrer, record) {
        (Some(referrer), Some(record)) => (referrer, record),
        _ => return Err(ReferralSkip::MissingAccounts),
    };

    let (expected_referrer, _) =
        Pubkey::find_program_address(&[USER_SEED, &referrer_id.to_le_bytes()], program_id);
    if referrer_info.key != &expected_referrer {
        return Err(ReferralSkip::ReferrerMismatch);
    }

    let referrer = load_program_account::<UserAccount>(referrer_info)
        .ok_or(ReferralSkip::ReferrerNotFound)?;

    let (expected_record, record_bump) =
        Pubkey::find_program_address(&[REFERRAL_SEED, &referred_id.to_le_bytes()], program_id);
    if record_info.key != &expected_record {
        return Err(ReferralSkip::RecordMismatch);
    }

    if !is_vacant(record_info) {
        return Err(ReferralSkip::AlreadyRecorded);
    }

    Ok((referrer, record_bump))
}

/// Links `referred` to `referrer` and credits the referrer. Returns the
/// referrer's `ReferralBonus` log entry.
///
/// Everything is checked before either account is written, so an error leaves
/// both accounts untouched and the caller can drop the referral safely.
pub fn attribute_referral(
    referred: &mut UserAccount,
    referrer: &mut UserAccount,
    bonus: u64,
    day: u32,
) -> Result<ActivityRecorded> {
    if referred.referred_by.is_some() {
        return err!(LedgerError::AlreadyAttributed);
    }

    if referrer.external_id == referred.external_id || !referrer.is_initialized() {
        return err!(LedgerError::InvalidAccount);
    }

    let referral_count = referrer
        .referral_count
        .checked_add(1)
        .ok_or(LedgerError::MathOverflow)?;

    let mut credited = referrer.clone();
    credited.referral_count = referral_count;
    let entry = record_earn(&mut credited, Activity::ReferralBonus, bonus, day)?;

    *referrer = credited;
    referred.referred_by = Some(referrer.external_id);

    Ok(entry)
}
