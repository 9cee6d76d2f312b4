// 💳 Account Entity - Owner + exact-decimal balance
//
// "Account owner and balance are VALUES; two accounts holding the same
//  values are the same account for comparison purposes"
//
// Problem solved:
// - Balances are exact decimals (rust_decimal), never binary floats,
//   so "1000.00" minus "100" renders as exactly "900.00"
// - A debit can never drive the balance negative; the check lives on
//   the operation, not on the field
// - The account knows which bank registered it via bank_id (foreign
//   key to Bank), but the bank's collection owns membership

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

// ============================================================================
// ACCOUNT ENTITY
// ============================================================================

/// A named holder of a monetary balance.
///
/// Values: owner (set at construction), balance (mutated by debit and
/// credit). Relationship: bank_id → Bank entity (foreign key, stamped
/// once when the bank registers the account).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Account holder (e.g., "Empresa")
    owner: String,

    /// Current balance, exact decimal arithmetic throughout
    balance: Decimal,

    /// Bank ID (foreign key to Bank entity), None until registered
    bank_id: Option<String>,
}

impl Account {
    /// Create a new account with no bank association.
    pub fn new(owner: impl Into<String>, balance: Decimal) -> Self {
        Account {
            owner: owner.into(),
            balance,
            bank_id: None,
        }
    }

    /// Account holder.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Current balance as an exact decimal.
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Replace the balance outright.
    ///
    /// No validation; the non-negativity rule is enforced by `debit`,
    /// not by the field. Data-driven tests use this to reset state
    /// between cases.
    pub fn set_balance(&mut self, balance: Decimal) {
        self.balance = balance;
    }

    /// Current balance rendered with exactly two decimal places.
    ///
    /// Example: a balance of `900` renders as `"900.00"`.
    pub fn balance_display(&self) -> String {
        format!("{:.2}", self.balance)
    }

    /// ID of the bank this account is registered with, if any.
    pub fn bank_id(&self) -> Option<&str> {
        self.bank_id.as_deref()
    }

    /// Stamp the owning bank's ID. Called once, by `Bank::add_account`.
    pub(crate) fn set_bank_id(&mut self, bank_id: String) {
        self.bank_id = Some(bank_id);
    }

    /// Subtract `amount` from the balance.
    ///
    /// Fails with `LedgerError::InsufficientFunds` when `amount`
    /// exceeds the current balance; the balance is left untouched on
    /// failure.
    pub fn debit(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        if self.balance < amount {
            return Err(LedgerError::InsufficientFunds);
        }
        self.balance -= amount;
        Ok(())
    }

    /// Add `amount` to the balance. Never fails; no upper bound.
    pub fn credit(&mut self, amount: Decimal) {
        self.balance += amount;
    }
}

/// Value equality over (owner, balance).
///
/// Two independently constructed accounts with the same owner and the
/// same balance compare equal. The bank back-reference is excluded so
/// registering an account with a bank does not change its value.
impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner && self.balance == other.balance
    }
}

impl Eq for Account {}

// ============================================================================
// TESTS
// ============================================================================
