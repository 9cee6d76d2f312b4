// Ledger Errors
//
// One domain error type for the whole crate. `InsufficientFunds` is the
// only failure the account operations themselves can produce; the bank
// adds `AccountNotFound` for lookups over its own collection.

use thiserror::Error;

/// Errors produced by account and bank operations.
///
/// The `InsufficientFunds` display text is a fixed literal that callers
/// (and tests) match against verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// A debit was requested for more than the current balance.
    #[error("Insufficient funds")]
    InsufficientFunds,

    /// A bank-side transfer named an owner with no registered account.
    #[error("Account not found: {owner}")]
    AccountNotFound { owner: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_funds_message_is_fixed() {
        assert_eq!(LedgerError::InsufficientFunds.to_string(), "Insufficient funds");
    }

    #[test]
    fn test_account_not_found_names_owner() {
        let err = LedgerError::AccountNotFound {
            owner: "Ghost".to_string(),
        };
        assert_eq!(err.to_string(), "Account not found: Ghost");
    }
}
