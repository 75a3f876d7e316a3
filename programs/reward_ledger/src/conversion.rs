// reward_ledger/conversion.rs

use anchor_lang::prelude::*;
use common::math::split_fee;

use crate::{errors::LedgerError, state::UserAccount};

/// Returned by `convert`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct ConversionResult {
    pub fee_charged: u64,
    pub credited_to_deposit: u64,
}

/// Moves `amount` out of earnings and credits it to the deposit balance minus
/// the conversion fee. The fee leaves the ledger.
pub fn convert_earnings(
    user: &mut UserAccount,
    amount: u64,
    fee_bps: u64,
) -> Result<ConversionResult> {
    if amount == 0 {
        return err!(LedgerError::InvalidAmount);
    }

    if amount > user.balance {
        return err!(LedgerError::InsufficientFunds);
    }

    let (fee, credited) = split_fee(amount, fee_bps).ok_or(LedgerError::InvalidParam)?;

    let deposit_balance = user
        .deposit_balance
        .checked_add(credited)
        .ok_or(LedgerError::MathOverflow)?;

    user.balance -= amount; // checked above
    user.deposit_balance = deposit_balance;

    Ok(ConversionResult {
        fee_charged: fee,
        credited_to_deposit: credited,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        constants::DEFAULT_CONVERSION_FEE_BPS,
        tests::helpers::{assert_ledger_err, user},
    };

    #[test]
    fn conversion_is_conserved() {
        for (balance, amount) in [(2_000, 2_000), (2_000, 1_005), (50, 9), (7_777, 1)] {
            let mut account = user(1, balance, 300);

            let result =
                convert_earnings(&mut account, amount, DEFAULT_CONVERSION_FEE_BPS).unwrap();

            assert_eq!(account.balance, balance - amount);
            assert_eq!(account.deposit_balance, 300 + result.credited_to_deposit);
            assert_eq!(result.fee_charged + result.credited_to_deposit, amount);
        }
    }

    #[test]
    fn fee_rounds_down() {
        let mut account = user(1, 10_000, 0);

        let result = convert_earnings(&mut account, 1_005, 10_00).unwrap();
        assert_eq!(result.fee_charged, 100);
        assert_eq!(result.credited_to_deposit, 905);

        let result = convert_earnings(&mut account, 9, 10_00).unwrap();
        assert_eq!(result.fee_charged, 0);
        assert_eq!(result.credited_to_deposit, 9);
    }

    #[test]
    fn rejects_zero_and_overdraw() {
        let mut account = user(1, 500, 0);

        assert_ledger_err(
            convert_earnings(&mut account, 0, 10_00),
            LedgerError::InvalidAmount,
        );
        assert_ledger_err(
            convert_earnings(&mut account, 501, 10_00),
            LedgerError::InsufficientFunds,
        );
        assert_eq!(account.balance, 500);
        assert_eq!(account.deposit_balance, 0);
    }
}
