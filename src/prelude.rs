//! Convenience re-exports for common types and traits.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use tidepool::prelude::*;
//! ```

pub use crate::config::ExchangeConfig;
pub use crate::domain::{AccountId, Amount, Rounding, ScaledPrice};
pub use crate::error::{ExchangeError, Result};
pub use crate::exchange::Exchange;
pub use crate::ledger::{FungibleLedger, InMemoryLedger, LedgerError};
pub use crate::math::{mul_div, output_amount};
