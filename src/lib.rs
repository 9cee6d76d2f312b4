// Bank Ledger - Core Library
// Exposes the domain model for use in the demo binary and tests

pub mod entities;
pub mod error;

// Re-export commonly used types
pub use entities::{Account, Bank};
pub use error::LedgerError;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
