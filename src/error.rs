//! Unified error types for the exchange engine.
//!
//! All fallible operations across the crate return [`ExchangeError`] as
//! their error type. Every failure is total: an operation that returns
//! `Err` has moved no value and mutated no reserve.

use thiserror::Error;

use crate::domain::Amount;
use crate::ledger::LedgerError;

/// Crate-wide error enum.
///
/// Callers are expected to inspect the variant and decide whether to
/// retry with adjusted parameters (for example a looser output minimum).
/// The engine itself never retries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExchangeError {
    /// A pricing computation was attempted with a zero reserve on either
    /// side. Division by zero is not representable, so the computation is
    /// rejected before it starts.
    #[error("pricing requires positive reserves on both sides")]
    InvalidReserves,

    /// A swap's computed output is zero, or below the caller-specified
    /// minimum. Zero-output swaps are rejected even when the requested
    /// minimum is zero.
    #[error("swap output {computed} is below the required minimum {minimum}")]
    InsufficientOutput {
        /// Output the pricing formula produced.
        computed: Amount,
        /// Minimum the caller demanded.
        minimum: Amount,
    },

    /// A non-bootstrap deposit supplied a token amount that does not match
    /// the current reserve ratio.
    #[error("deposit of {supplied} tokens does not match the reserve ratio, expected {required}")]
    ImbalancedDeposit {
        /// Token amount the caller offered.
        supplied: Amount,
        /// Token amount the reserve ratio requires for the coin sent.
        required: Amount,
    },

    /// Construction-time validation failed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),

    /// A ledger transfer did not succeed. The underlying cause is
    /// propagated as-is, never silently ignored.
    #[error("ledger transfer failed")]
    TransferFailed(#[from] LedgerError),

    /// An intermediate computation exceeded the representable range.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),
}

/// Convenience alias used by every fallible operation in the crate.
pub type Result<T> = core::result::Result<T, ExchangeError>;
