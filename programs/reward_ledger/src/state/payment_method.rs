// reward_ledger/state/payment_method.rs

use anchor_lang::prelude::*;

use crate::{constants::MAX_METHOD_NAME_LEN, errors::LedgerError, utils::text::ensure_fits};

#[constant]
pub const PAYMENT_METHOD_SEED: &[u8] = b"payment-method";

#[account]
#[derive(InitSpace, Debug)]
pub struct PaymentMethod {
    pub id: u32,
    #[max_len(32)]
    pub name: String,
    pub min_amount: u64,
    pub max_amount: u64, // 0 means no upper bound
    pub supports_withdrawal: bool,
    pub supports_deposit: bool,
    pub is_active: bool,
    pub bump: u8,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct PaymentMethodArgs {
    pub name: String,
    pub min_amount: u64,
    pub max_amount: u64,
    pub supports_withdrawal: bool,
    pub supports_deposit: bool,
    pub is_active: bool,
}

impl PaymentMethodArgs {
    pub fn validate(&self) -> Result<()> {
        ensure_fits(&self.name, MAX_METHOD_NAME_LEN)?;

        if self.max_amount != 0 && self.max_amount < self.min_amount {
            return err!(LedgerError::InvalidParam);
        }

        Ok(())
    }
}

impl PaymentMethod {
    pub fn check_amount(&self, amount: u64) -> Result<()> {
        if amount < self.min_amount || (self.max_amount != 0 && amount > self.max_amount) {
            return err!(LedgerError::OutOfRange);
        }

        Ok(())
    }

    pub fn ensure_withdrawals(&self) -> Result<()> {
        require!(
            self.is_active && self.supports_withdrawal,
            LedgerError::MethodInactive
        );
        Ok(())
    }

    pub fn ensure_deposits(&self) -> Result<()> {
        require!(
            self.is_active && self.supports_deposit,
            LedgerError::MethodInactive
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::helpers::{assert_ledger_err, payment_method};

    #[test]
    fn amount_range_is_inclusive() {
        let method = payment_method(1_000, 5_000);

        assert_ledger_err(method.check_amount(999), LedgerError::OutOfRange);
        assert!(method.check_amount(1_000).is_ok());
        assert!(method.check_amount(5_000).is_ok());
        assert_ledger_err(method.check_amount(5_001), LedgerError::OutOfRange);
    }

    #[test]
    fn zero_max_is_unbounded() {
        let method = payment_method(1_000, 0);

        assert!(method.check_amount(u64::MAX).is_ok());
    }

    #[test]
    fn inactive_method_is_unavailable() {
        let mut method = payment_method(0, 0);
        method.supports_deposit = false;

        assert!(method.ensure_withdrawals().is_ok());
        assert_ledger_err(method.ensure_deposits(), LedgerError::MethodInactive);

        method.is_active = false;
        assert_ledger_err(method.ensure_withdrawals(), LedgerError::MethodInactive);
    }

    #[test]
    fn args_reject_inverted_range() {
        let args = PaymentMethodArgs {
            name: "USDT TRC20".to_string(),
            min_amount: 5_000,
            max_amount: 1_000,
            supports_withdrawal: true,
            supports_deposit: true,
            is_active: true,
        };

        assert_ledger_err(args.validate(), LedgerError::InvalidParam);
    }
}
