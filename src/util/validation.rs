//! Contact validation
//!
//! Shape checks for email addresses and phone numbers. Both predicates are
//! total: malformed input is rejected with `false`, never a panic.

use regex::Regex;
use std::sync::LazyLock;

use crate::domain::BankingError;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+$").expect("Invalid email regex pattern")
});

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10,15}$").expect("Invalid phone regex pattern"));

/// Check that `value` looks like `local@domain`.
///
/// The whole string must match; a valid address embedded in other text is
/// rejected.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Check that `value` is 10 to 15 ASCII digits.
pub fn is_valid_phone_number(value: &str) -> bool {
    PHONE_PATTERN.is_match(value)
}

/// Validate a customer's contact details.
///
/// # Errors
/// `BankingError::ValidationFailure` naming the first field that fails.
pub fn validate_contact(email: &str, phone_number: &str) -> Result<(), BankingError> {
    if !is_valid_email(email) {
        return Err(BankingError::ValidationFailure(format!(
            "Invalid email address: {}",
            email
        )));
    }

    if !is_valid_phone_number(phone_number) {
        return Err(BankingError::ValidationFailure(format!(
            "Invalid phone number: {}",
            phone_number
        )));
    }

    Ok(())
}
