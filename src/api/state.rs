//! Shared router state

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use crate::config::{Config, DEFAULT_REGISTRY_CAPACITY};
use crate::domain::BankingError;
use crate::error::{AppError, AppResult};
use crate::util::generate_unique_account_number;

/// State shared by all API handlers
#[derive(Debug, Clone)]
pub struct AppState {
    account_number_max_attempts: u32,
    registry_capacity: usize,
    issued_account_numbers: Arc<Mutex<HashSet<String>>>,
}

impl AppState {
    pub fn new(account_number_max_attempts: u32) -> Self {
        Self {
            account_number_max_attempts,
            registry_capacity: DEFAULT_REGISTRY_CAPACITY,
            issued_account_numbers: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    /// Limit how many issued numbers the registry may hold
    pub fn with_registry_capacity(mut self, capacity: usize) -> Self {
        self.registry_capacity = capacity;
        self
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.account_number_max_attempts)
            .with_registry_capacity(config.account_number_registry_capacity)
    }

    /// Allocate an account number not previously issued by this process.
    ///
    /// Stands in for the uniqueness constraint a persistent store would
    /// enforce. Entries are never evicted, so once `registry_capacity`
    /// numbers are issued every further allocation is a conflict.
    pub fn allocate_account_number(&self) -> AppResult<String> {
        let mut issued = self
            .issued_account_numbers
            .lock()
            .map_err(|_| AppError::Internal("account number registry poisoned".to_string()))?;

        if issued.len() >= self.registry_capacity {
            tracing::warn!(
                capacity = self.registry_capacity,
                "Account number registry is full"
            );
            return Err(BankingError::ResourceConflict(
                "Account number registry is full".to_string(),
            )
            .into());
        }

        let number = generate_unique_account_number(
            &mut rand::thread_rng(),
            |candidate| issued.contains(candidate),
            self.account_number_max_attempts,
        )?;

        issued.insert(number.clone());
        Ok(number)
    }
}
