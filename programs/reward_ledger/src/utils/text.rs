// reward_ledger/utils/text.rs

use anchor_lang::prelude::*;

use crate::errors::LedgerError;

/// Stored strings are allocated with a fixed capacity, so longer input is rejected up front.
pub fn ensure_fits(value: &str, max_len: usize) -> Result<()> {
    require!(value.len() <= max_len, LedgerError::TextTooLong);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_is_measured_in_bytes() {
        assert!(ensure_fits("", 0).is_ok());
        assert!(ensure_fits("abcd", 4).is_ok());
        assert!(ensure_fits("abcde", 4).is_err());
        // 2 characters, 4 bytes
        assert!(ensure_fits("жж", 3).is_err());
    }
}
