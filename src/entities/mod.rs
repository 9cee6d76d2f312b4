// Entity Models
//
// Two entities:
// - Account: a value (owner + balance) with a bank_id back-reference
// - Bank: a stable identity (UUID) owning the account collection
//
// Ownership flows bank → accounts; the account's bank_id is a
// navigational shortcut, never a second owner.

pub mod account;
pub mod bank;

pub use account::Account;
pub use bank::Bank;
