// reward_ledger/instructions/operator/resolve_account.rs

// external dependencies
use anchor_lang::prelude::*;
use common::calendar;

// local dependencies
use crate::{
    constants::ANCHOR_DISCRIMINATOR_SIZE,
    errors::LedgerError,
    events::{AccountCreated, ReferralAttributed},
    state::{
        attribute_referral, check_referral_accounts, Profile, Referral, Settings, UserAccount,
        REFERRAL_SEED, SETTINGS_SEED, USER_SEED,
    },
    utils::accounts::{create_program_account, store_program_account},
};

#[derive(Accounts)]
#[instruction(external_id: u64)]
pub struct ResolveAccount<'info> {
    #[account(mut)]
    pub operator: Signer<'info>,

    #[account(
        seeds = [SETTINGS_SEED],
        has_one = operator @ LedgerError::NotAuthorized,
        constraint = !settings.paused @ LedgerError::Paused,
        bump = settings.bump,
    )]
    pub settings: Account<'info, Settings>,

    #[account(
        init_if_needed,
        payer = operator,
        space = ANCHOR_DISCRIMINATOR_SIZE + UserAccount::INIT_SPACE,
        seeds = [USER_SEED, &external_id.to_le_bytes()],
        bump
    )]
    pub user_account: Account<'info, UserAccount>,

    /// CHECK: validated in the handler. A referrer that does not check out is skipped.
    #[account(mut)]
    pub referrer_account: Option<UncheckedAccount<'info>>,

    /// CHECK: validated in the handler and created there once the referrer checks out
    #[account(mut)]
    pub referral_record: Option<UncheckedAccount<'info>>,

    pub system_program: Program<'info, System>,
}

/// Creates the user on first contact, otherwise refreshes the profile.
///
/// `referral_token` is the referrer's external id from the start parameter.
/// It is only looked at when the account is new, and a bad token never fails
/// the instruction.
pub fn handler(
    ctx: Context<ResolveAccount>,
    external_id: u64,
    profile: Profile,
    referral_token: Option<u64>,
) -> Result<()> {
    if external_id == 0 {
        return err!(LedgerError::InvalidParam);
    }

    profile.validate()?;

    if ctx.accounts.user_account.is_initialized() {
        ctx.accounts.user_account.update_profile(profile);
        return Ok(());
    }

    let (now, today) = calendar::now()?;

    ctx.accounts.user_account.set_inner(UserAccount::new(
        external_id,
        profile,
        now,
        today,
        ctx.bumps.user_account,
    ));

    if let Some(referrer_id) = referral_token {
        try_attribute(ctx.accounts, ctx.program_id, referrer_id, now, today)?;
    }

    emit!(AccountCreated {
        external_id,
        referred_by: ctx.accounts.user_account.referred_by,
        ts: now,
    });

    Ok(())
}

// Runs referral attribution for a new account. Every reason to skip is logged
// and returns Ok; only failures while writing already-validated accounts abort.
fn try_attribute<'info>(
    accounts: &mut ResolveAccount<'info>,
    program_id: &Pubkey,
    referrer_id: u64,
    now: i64,
    today: u32,
) -> Result<()> {
    let external_id = accounts.user_account.external_id;
    let referrer_info = accounts.referrer_account.as_ref().map(|a| a.to_account_info());
    let record_info = accounts.referral_record.as_ref().map(|a| a.to_account_info());

    // 1. The referrer and record must be the PDAs for the token and the new user
    let (mut referrer, record_bump) = match check_referral_accounts(
        program_id,
        external_id,
        referrer_id,
        referrer_info.as_ref(),
        record_info.as_ref(),
    ) {
        Ok(checked) => checked,
        Err(skip) => {
            msg!("Referral skipped: {:?}", skip);
            return Ok(());
        }
    };

    let (referrer_info, record_info) = match (referrer_info, record_info) {
        (Some(referrer), Some(record)) => (referrer, record),
        _ => return Ok(()), // checked above
    };
    let id_bytes = external_id.to_le_bytes();

    // 2. Link both users and credit the referrer
    let bonus = accounts.settings.referral_bonus;
    let entry = match attribute_referral(&mut accounts.user_account, &mut referrer, bonus, today)
    {
        Ok(entry) => entry,
        Err(error) => {
            msg!("Referral skipped: {}", error);
            return Ok(());
        }
    };

    // 3. Persist the record and the referrer
    create_program_account(
        &accounts.operator.to_account_info(),
        &record_info,
        ANCHOR_DISCRIMINATOR_SIZE + Referral::INIT_SPACE,
        &[REFERRAL_SEED, &id_bytes, &[record_bump]],
        &accounts.system_program,
        program_id,
    )?;

    store_program_account(
        &record_info,
        &Referral {
            referrer_id,
            referred_id: external_id,
            earnings: bonus,
            created_at: now,
            bump: record_bump,
        },
    )?;

    store_program_account(&referrer_info, &referrer)?;

    emit!(ReferralAttributed {
        referrer_id,
        referred_id: external_id,
        bonus,
        ts: now,
    });
    emit!(entry);

    Ok(())
}
