// common/math.rs

// local dependencies
use crate::constants::{ONE_HUNDRED_PERCENT, ONE_USDT, USDT_DECIMALS};

// Fee and budget arithmetic on milli-USDT amounts.
// Every helper returns None on overflow so callers can map it to their own error.
// Rounding always favours the ledger: fees round down, derived counts round down.

/// Returns `bps` basis points of `amount`, rounded down.
pub fn bps_of(amount: u64, bps: u64) -> Option<u64> {
    // Cast to u128 for multiplication to avoid overflows
    let value = (amount as u128)
        .checked_mul(bps.into())?
        .checked_div(ONE_HUNDRED_PERCENT.into())?;

    value.try_into().ok()
}

/// Splits `amount` into `(fee, net)` where `fee + net == amount`.
pub fn split_fee(amount: u64, fee_bps: u64) -> Option<(u64, u64)> {
    if fee_bps > ONE_HUNDRED_PERCENT {
        return None;
    }

    let fee = bps_of(amount, fee_bps)?;
    Some((fee, amount - fee)) // fee <= amount because fee_bps <= 100%
}

/// Number of whole completions a budget pays for.
pub fn completions_for_budget(total_budget: u64, reward_amount: u64) -> Option<u64> {
    total_budget.checked_div(reward_amount)
}

/// Budget needed to pay `completions` rewards of `reward_amount` each.
pub fn budget_for_completions(reward_amount: u64, completions: u64) -> Option<u64> {
    reward_amount.checked_mul(completions)
}

/// Applies a signed delta to a balance, refusing to go below zero.
pub fn apply_delta(balance: u64, delta: i64) -> Option<u64> {
    if delta >= 0 {
        balance.checked_add(delta.unsigned_abs())
    } else {
        balance.checked_sub(delta.unsigned_abs())
    }
}

/// Renders a milli-USDT amount for program logs, e.g. `1250` -> `"1.250"`.
pub fn format_usdt(amount: u64) -> String {
    format!(
        "{}.{:0width$}",
        amount / ONE_USDT,
        amount % ONE_USDT,
        width = USDT_DECIMALS as usize
    )
}
