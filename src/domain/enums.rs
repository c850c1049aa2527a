//! Domain vocabularies
//!
//! Closed sets attached to accounts, transactions and users. Wire names are
//! SCREAMING_SNAKE_CASE in JSON, `Display` and `FromStr`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::BankingError;

/// Error returned when a wire name matches no variant
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {kind}: {value}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

/// Implements the wire-name plumbing shared by every vocabulary.
macro_rules! wire_enum {
    ($name:ident, $label:literal, { $($variant:ident => $wire:literal),+ $(,)? }) => {
        impl $name {
            /// All variants in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire name of this variant
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(s))
                    .ok_or_else(|| ParseEnumError {
                        kind: $label,
                        value: s.to_string(),
                    })
            }
        }
    };
}

/// Kind of bank account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    Savings,
    Current,
    FixedDeposit,
    Loan,
}

wire_enum!(AccountType, "account type", {
    Savings => "SAVINGS",
    Current => "CURRENT",
    FixedDeposit => "FIXED_DEPOSIT",
    Loan => "LOAN",
});

/// Kind of money movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Deposit,
    Withdrawal,
    Transfer,
    Payment,
}

wire_enum!(TransactionType, "transaction type", {
    Deposit => "DEPOSIT",
    Withdrawal => "WITHDRAWAL",
    Transfer => "TRANSFER",
    Payment => "PAYMENT",
});

/// Transaction lifecycle state
///
/// `Pending` is the only non-terminal state; it may move to any of the
/// three terminal states exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
    Cancelled,
}

wire_enum!(TransactionStatus, "transaction status", {
    Pending => "PENDING",
    Completed => "COMPLETED",
    Failed => "FAILED",
    Cancelled => "CANCELLED",
});

impl TransactionStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TransactionStatus::Pending)
    }

    /// Check whether moving from `self` to `next` is a legal lifecycle step
    pub fn can_transition_to(&self, next: TransactionStatus) -> bool {
        matches!(self, TransactionStatus::Pending) && next.is_terminal()
    }

    /// Apply a lifecycle step.
    ///
    /// # Errors
    /// `BankingError::InvalidTransaction` if the step is not allowed.
    pub fn transition_to(self, next: TransactionStatus) -> Result<TransactionStatus, BankingError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(BankingError::InvalidTransaction(format!(
                "Cannot move transaction from {} to {}",
                self, next
            )))
        }
    }
}

/// Role used for authorization decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Customer,
    Employee,
    Admin,
}

wire_enum!(UserRole, "user role", {
    Customer => "CUSTOMER",
    Employee => "EMPLOYEE",
    Admin => "ADMIN",
});

impl UserRole {
    /// Bank staff (employees and admins)
    pub fn is_staff(&self) -> bool {
        matches!(self, UserRole::Employee | UserRole::Admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_match_serde() {
        for account_type in AccountType::ALL {
            let json = serde_json::to_string(account_type).unwrap();
            assert_eq!(json, format!("\"{}\"", account_type));
        }
        assert_eq!(
            serde_json::to_string(&AccountType::FixedDeposit).unwrap(),
            "\"FIXED_DEPOSIT\""
        );
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("fixed_deposit".parse::<AccountType>(), Ok(AccountType::FixedDeposit));
        assert_eq!("Withdrawal".parse::<TransactionType>(), Ok(TransactionType::Withdrawal));
        assert_eq!("ADMIN".parse::<UserRole>(), Ok(UserRole::Admin));
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "OVERDRAFT".parse::<AccountType>().unwrap_err();
        assert_eq!(err.kind, "account type");
        assert_eq!(err.to_string(), "Unknown account type: OVERDRAFT");
    }

    #[test]
    fn test_status_lifecycle() {
        use TransactionStatus::*;

        assert!(!Pending.is_terminal());
        for terminal in [Completed, Failed, Cancelled] {
            assert!(terminal.is_terminal());
            assert!(Pending.can_transition_to(terminal));
            for next in TransactionStatus::ALL {
                assert!(!terminal.can_transition_to(*next));
            }
        }
        assert!(!Pending.can_transition_to(Pending));
    }

    #[test]
    fn test_transition_to_rejects_illegal_step() {
        assert_eq!(
            TransactionStatus::Pending.transition_to(TransactionStatus::Completed),
            Ok(TransactionStatus::Completed)
        );

        let err = TransactionStatus::Failed
            .transition_to(TransactionStatus::Completed)
            .unwrap_err();
        assert_eq!(
            err,
            BankingError::InvalidTransaction(
                "Cannot move transaction from FAILED to COMPLETED".to_string()
            )
        );
    }

    #[test]
    fn test_staff_roles() {
        assert!(!UserRole::Customer.is_staff());
        assert!(UserRole::Employee.is_staff());
        assert!(UserRole::Admin.is_staff());
    }
}
