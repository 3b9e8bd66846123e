//! Fundamental domain value types used throughout the exchange engine.
//!
//! This module contains the core value types that model the domain:
//! amounts, ledger accounts, price quotes, and rounding directions.
//! All types use newtypes with validated constructors to enforce
//! invariants.

mod account;
mod amount;
mod quote;
mod rounding;

pub use account::AccountId;
pub use amount::Amount;
pub use quote::ScaledPrice;
pub use rounding::Rounding;
