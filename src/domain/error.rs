//! Domain Error Types
//!
//! Pure banking errors that don't depend on the web layer.

use thiserror::Error;

/// Banking domain errors
///
/// Every variant carries the human-readable message raised by the domain
/// layer. The HTTP boundary classifies them in [`crate::error::map_banking_error`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BankingError {
    #[error("{0}")]
    AccountNotFound(String),

    #[error("{0}")]
    CustomerNotFound(String),

    #[error("{0}")]
    RoleNotFound(String),

    #[error("{0}")]
    UserNotFound(String),

    /// Scheduled transfer failure; lookups that miss say "not found" in the message
    #[error("{0}")]
    ScheduledTransfer(String),

    #[error("{0}")]
    InsufficientFunds(String),

    #[error("{0}")]
    InvalidTransaction(String),

    #[error("{0}")]
    ValidationFailure(String),

    /// Duplicate or otherwise conflicting resource state
    #[error("{0}")]
    ResourceConflict(String),

    #[error("{0}")]
    UnauthorizedAccess(String),

    #[error("{0}")]
    TransactionTimeout(String),

    #[error("{0}")]
    AccountLocked(String),

    /// Any banking failure without a dedicated category
    #[error("{0}")]
    Unclassified(String),
}

impl BankingError {
    /// The message exactly as raised
    pub fn message(&self) -> &str {
        match self {
            Self::AccountNotFound(msg)
            | Self::CustomerNotFound(msg)
            | Self::RoleNotFound(msg)
            | Self::UserNotFound(msg)
            | Self::ScheduledTransfer(msg)
            | Self::InsufficientFunds(msg)
            | Self::InvalidTransaction(msg)
            | Self::ValidationFailure(msg)
            | Self::ResourceConflict(msg)
            | Self::UnauthorizedAccess(msg)
            | Self::TransactionTimeout(msg)
            | Self::AccountLocked(msg)
            | Self::Unclassified(msg) => msg,
        }
    }

    /// Variant name, used as a structured log field
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AccountNotFound(_) => "AccountNotFound",
            Self::CustomerNotFound(_) => "CustomerNotFound",
            Self::RoleNotFound(_) => "RoleNotFound",
            Self::UserNotFound(_) => "UserNotFound",
            Self::ScheduledTransfer(_) => "ScheduledTransfer",
            Self::InsufficientFunds(_) => "InsufficientFunds",
            Self::InvalidTransaction(_) => "InvalidTransaction",
            Self::ValidationFailure(_) => "ValidationFailure",
            Self::ResourceConflict(_) => "ResourceConflict",
            Self::UnauthorizedAccess(_) => "UnauthorizedAccess",
            Self::TransactionTimeout(_) => "TransactionTimeout",
            Self::AccountLocked(_) => "AccountLocked",
            Self::Unclassified(_) => "Unclassified",
        }
    }

    /// Check if this is a lookup miss (reported as 404)
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::AccountNotFound(_)
            | Self::CustomerNotFound(_)
            | Self::RoleNotFound(_)
            | Self::UserNotFound(_) => true,
            Self::ScheduledTransfer(msg) => msg.contains("not found"),
            _ => false,
        }
    }

    /// Check if this is a client error, bad input or a business rule (reported as 400)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InsufficientFunds(_) | Self::InvalidTransaction(_) | Self::ValidationFailure(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_message_verbatim() {
        let err = BankingError::InsufficientFunds("Balance 10.00 below 25.00".to_string());

        assert_eq!(err.to_string(), "Balance 10.00 below 25.00");
        assert_eq!(err.message(), "Balance 10.00 below 25.00");
        assert_eq!(err.kind(), "InsufficientFunds");
    }

    #[test]
    fn test_not_found_family() {
        assert!(BankingError::AccountNotFound("x".into()).is_not_found());
        assert!(BankingError::RoleNotFound("x".into()).is_not_found());
        assert!(BankingError::ScheduledTransfer("transfer not found".into()).is_not_found());
        assert!(!BankingError::ScheduledTransfer("transfer failed".into()).is_not_found());
        assert!(!BankingError::ValidationFailure("not found".into()).is_not_found());
    }

    #[test]
    fn test_client_errors() {
        assert!(BankingError::ValidationFailure("bad".into()).is_client_error());
        assert!(!BankingError::AccountLocked("locked".into()).is_client_error());
        assert!(!BankingError::Unclassified("boom".into()).is_client_error());
    }
}
