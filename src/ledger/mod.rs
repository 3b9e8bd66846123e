//! The fungible-asset ledger seam.
//!
//! The exchange never stores balances of its own. Every asset it holds
//! — the paired token *and* the native coin — lives in a ledger reached
//! through the narrow [`FungibleLedger`] capability: balance query,
//! direct transfer, and allowance-backed delegated transfer. Reading
//! the coin through the same interface as the token keeps "balance is
//! ground truth" a single invariant instead of two.
//!
//! # Capability Contract
//!
//! Implementations must uphold:
//!
//! - **Conservation** — a successful transfer debits `from` and credits
//!   `to` by exactly the same amount; a failed transfer changes nothing.
//! - **Allowance gating** — [`FungibleLedger::transfer_from`] succeeds
//!   only up to the allowance `owner` previously granted `spender`, and
//!   consumes what it moves.
//! - **Zero tolerance** — zero-amount transfers always succeed without
//!   touching state, so zero-amount exchange operations stay no-ops.
//!
//! [`InMemoryLedger`] is the reference implementation shipped with the
//! crate; production integrations supply their own.

mod memory;

pub use memory::InMemoryLedger;

use thiserror::Error;

use crate::domain::{AccountId, Amount};

/// Failure of a ledger operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// The debited account holds less than the transferred amount.
    #[error("insufficient balance: required {required}, available {available}")]
    InsufficientBalance {
        /// Amount the transfer tried to move.
        required: Amount,
        /// Balance actually held by the debited account.
        available: Amount,
    },

    /// The spender's allowance from the owner is below the transferred
    /// amount.
    #[error("insufficient allowance: required {required}, available {available}")]
    InsufficientAllowance {
        /// Amount the delegated transfer tried to move.
        required: Amount,
        /// Allowance actually granted to the spender.
        available: Amount,
    },

    /// Crediting the recipient would overflow its balance.
    #[error("balance overflow on credit")]
    BalanceOverflow,
}

/// Narrow capability over a fungible-asset ledger.
///
/// This is the entire surface the exchange consumes; anything else a
/// concrete ledger offers (minting, approvals, metadata) is outside the
/// seam and reached by callers directly.
///
/// # Errors
///
/// All mutating methods return [`LedgerError`] and must leave the
/// ledger untouched on failure.
pub trait FungibleLedger {
    /// Returns the balance held by `account`.
    ///
    /// Accounts that never received value hold zero. Never fails.
    #[must_use]
    fn balance_of(&self, account: AccountId) -> Amount;

    /// Moves `amount` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::InsufficientBalance`] if `from` holds less than
    ///   `amount`.
    /// - [`LedgerError::BalanceOverflow`] if crediting `to` overflows.
    fn transfer(&mut self, from: AccountId, to: AccountId, amount: Amount)
        -> Result<(), LedgerError>;

    /// Moves `amount` from `owner` to `to` on behalf of `spender`,
    /// consuming `spender`'s allowance from `owner`.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::InsufficientAllowance`] if `owner` granted
    ///   `spender` less than `amount`.
    /// - [`LedgerError::InsufficientBalance`] if `owner` holds less than
    ///   `amount`.
    /// - [`LedgerError::BalanceOverflow`] if crediting `to` overflows.
    fn transfer_from(
        &mut self,
        spender: AccountId,
        owner: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError>;
}
