//! Domain module
//!
//! Banking vocabularies and domain errors.

pub mod enums;
pub mod error;

pub use enums::{AccountType, ParseEnumError, TransactionStatus, TransactionType, UserRole};
pub use error::BankingError;
