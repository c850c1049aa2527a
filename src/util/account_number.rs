//! Account number generation
//!
//! Account numbers are 12 decimal digits, each drawn independently, so
//! leading zeros are allowed. The generator is not cryptographically secure
//! and must not be used for secrets or tokens.

use rand::Rng;

use crate::domain::BankingError;

/// Number of digits in an account number
pub const ACCOUNT_NUMBER_LENGTH: usize = 12;

/// Generate an account number from the given random source.
///
/// Uniqueness is not guaranteed; see [`generate_unique_account_number`].
pub fn generate_account_number<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..ACCOUNT_NUMBER_LENGTH)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}

/// Generate an account number from the calling thread's RNG.
pub fn random_account_number() -> String {
    generate_account_number(&mut rand::thread_rng())
}

/// Generate an account number not already in use.
///
/// Draws candidates until `is_taken` reports a free one.
///
/// # Errors
/// `BankingError::ResourceConflict` after `max_attempts` consecutive
/// collisions (immediately when `max_attempts` is 0).
pub fn generate_unique_account_number<R, F>(
    rng: &mut R,
    mut is_taken: F,
    max_attempts: u32,
) -> Result<String, BankingError>
where
    R: Rng + ?Sized,
    F: FnMut(&str) -> bool,
{
    for attempt in 1..=max_attempts {
        let candidate = generate_account_number(rng);
        if !is_taken(&candidate) {
            return Ok(candidate);
        }
        tracing::debug!(attempt, "Account number collision, regenerating");
    }

    Err(BankingError::ResourceConflict(format!(
        "Could not allocate a unique account number after {} attempts",
        max_attempts
    )))
}
