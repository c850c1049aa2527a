//! Utility module
//!
//! Stateless helpers consumed by the domain layer.

pub mod account_number;
pub mod validation;

pub use account_number::{
    generate_account_number, generate_unique_account_number, random_account_number,
    ACCOUNT_NUMBER_LENGTH,
};
pub use validation::{is_valid_email, is_valid_phone_number, validate_contact};
