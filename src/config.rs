//! Configuration for an exchange instance.

use crate::domain::AccountId;
use crate::error::{ExchangeError, Result};

/// Immutable construction parameters for an [`Exchange`](crate::exchange::Exchange).
///
/// The exchange is bound to its ledger account for its entire lifetime;
/// the binding cannot change after construction.
///
/// # Validation
///
/// The account must not be the all-zero sentinel — the exchange needs a
/// real ledger identity to hold reserves under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExchangeConfig {
    account: AccountId,
}

impl ExchangeConfig {
    /// Creates a new `ExchangeConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::InvalidConfig`] if `account` is the
    /// all-zero sentinel.
    pub fn new(account: AccountId) -> Result<Self> {
        let config = Self { account };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::InvalidConfig`] if the account is the
    /// all-zero sentinel.
    pub fn validate(&self) -> Result<()> {
        if self.account.is_zero() {
            return Err(ExchangeError::InvalidConfig(
                "exchange account must not be the zero sentinel",
            ));
        }
        Ok(())
    }

    /// Returns the ledger account the exchange holds reserves under.
    #[must_use]
    pub const fn account(&self) -> AccountId {
        self.account
    }
}
