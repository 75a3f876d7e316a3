// reward_ledger/state/request.rs

use anchor_lang::prelude::*;

use crate::errors::LedgerError;

/// Shared state machine for withdrawal and deposit requests:
/// Pending -> Completed | Rejected, both terminal.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub enum RequestStatus {
    Pending,
    Completed,
    Rejected,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Decision {
    Approve,
    Reject,
}

impl RequestStatus {
    /// Status a pending request moves to under `decision`.
    pub fn resolve(self, decision: Decision) -> Result<Self> {
        if self != Self::Pending {
            return err!(LedgerError::RequestAlreadyResolved);
        }

        Ok(match decision {
            Decision::Approve => Self::Completed,
            Decision::Reject => Self::Rejected,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::helpers::assert_ledger_err;

    #[test]
    fn pending_resolves_once() {
        assert_eq!(
            RequestStatus::Pending.resolve(Decision::Approve).unwrap(),
            RequestStatus::Completed
        );
        assert_eq!(
            RequestStatus::Pending.resolve(Decision::Reject).unwrap(),
            RequestStatus::Rejected
        );

        for status in [RequestStatus::Completed, RequestStatus::Rejected] {
            for decision in [Decision::Approve, Decision::Reject] {
                assert_ledger_err(status.resolve(decision), LedgerError::RequestAlreadyResolved);
            }
        }
    }
}
