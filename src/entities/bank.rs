// 🏦 Bank Entity - Stable identity + account collection
//
// "Bank name is a VALUE (can change), Bank UUID is IDENTITY (never changes)"
//
// Problem solved:
// - The bank's Vec<Account> is the single source of truth for
//   membership; the account's bank_id is only a navigational shortcut
// - Renaming the bank doesn't disturb registered accounts
// - Transfer is debit-then-credit: a failed debit returns before the
//   credit runs, so a rejected transfer changes nothing

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entities::Account;
use crate::error::LedgerError;

// ============================================================================
// BANK ENTITY
// ============================================================================

/// A named owner of a collection of accounts, able to transfer funds
/// between two of them.
///
/// Identity: UUID (never changes). Values: name, account collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bank {
    /// Stable identity (UUID) - accounts point back at this
    id: String,

    /// Display label, empty until set
    name: String,

    /// Registered accounts, insertion order preserved
    accounts: Vec<Account>,
}

impl Bank {
    /// Create a new bank with no name and no accounts.
    pub fn new() -> Self {
        Bank {
            id: uuid::Uuid::new_v4().to_string(),
            name: String::new(),
            accounts: Vec::new(),
        }
    }

    /// Stable identity (UUID).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the bank.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Register an account: take it into the collection and stamp its
    /// bank back-reference with this bank's ID.
    ///
    /// No duplicate detection; registering twice stores two entries.
    pub fn add_account(&mut self, mut account: Account) {
        account.set_bank_id(self.id.clone());
        self.accounts.push(account);
    }

    /// Registered accounts, in insertion order.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Number of registered accounts.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// First registered account with the given owner.
    pub fn find_account(&self, owner: &str) -> Option<&Account> {
        self.accounts.iter().find(|account| account.owner() == owner)
    }

    /// Mutable variant of [`find_account`](Self::find_account).
    pub fn find_account_mut(&mut self, owner: &str) -> Option<&mut Account> {
        self.accounts
            .iter_mut()
            .find(|account| account.owner() == owner)
    }

    /// Move `amount` from `origin` to `destination`.
    ///
    /// Debits the origin, then credits the destination. An
    /// insufficient-funds failure propagates unchanged and aborts
    /// before the credit, leaving both balances as they were. The
    /// bank's own name and collection are not touched.
    pub fn transfer(
        &self,
        origin: &mut Account,
        destination: &mut Account,
        amount: Decimal,
    ) -> Result<(), LedgerError> {
        origin.debit(amount)?;
        destination.credit(amount);
        Ok(())
    }

    /// Move `amount` between two accounts registered with this bank,
    /// looked up by owner.
    ///
    /// Fails with `LedgerError::AccountNotFound` if either owner has no
    /// registered account; both lookups are resolved before any balance
    /// changes.
    pub fn transfer_between(
        &mut self,
        origin_owner: &str,
        destination_owner: &str,
        amount: Decimal,
    ) -> Result<(), LedgerError> {
        let origin_idx = self.position_of(origin_owner)?;
        let destination_idx = self.position_of(destination_owner)?;

        self.accounts[origin_idx].debit(amount)?;
        self.accounts[destination_idx].credit(amount);
        Ok(())
    }

    fn position_of(&self, owner: &str) -> Result<usize, LedgerError> {
        self.accounts
            .iter()
            .position(|account| account.owner() == owner)
            .ok_or_else(|| LedgerError::AccountNotFound {
                owner: owner.to_string(),
            })
    }
}

impl Default for Bank {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
