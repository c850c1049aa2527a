//! bank-backoffice Library
//!
//! Domain vocabularies, account number generation, contact validation and
//! the mapping from banking errors to HTTP responses.

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod util;

pub use config::Config;
pub use domain::{AccountType, BankingError, TransactionStatus, TransactionType, UserRole};
pub use error::{map_banking_error, AppError, AppResult, ErrorResponse};
