//! # Tidepool
//!
//! Single-pair constant-product exchange engine with pluggable
//! fungible-asset ledgers.
//!
//! An [`Exchange`](exchange::Exchange) pairs a native coin with a
//! fungible token and lets any party deposit liquidity or swap one
//! asset for the other at a price set purely by the current reserve
//! ratio (`x × y = k`). All pricing is exact integer arithmetic with
//! 256-bit intermediates — no floating point, no silent truncation in
//! the caller's favor.
//!
//! The engine holds no balances of its own: each reserve **is** the
//! exchange's balance on a ledger reached through the narrow
//! [`FungibleLedger`](ledger::FungibleLedger) capability. The crate
//! ships [`InMemoryLedger`](ledger::InMemoryLedger) as the reference
//! implementation; integrations supply their own.
//!
//! # Quick Start
//!
//! ```rust
//! use tidepool::config::ExchangeConfig;
//! use tidepool::domain::{AccountId, Amount, ScaledPrice};
//! use tidepool::exchange::Exchange;
//! use tidepool::ledger::InMemoryLedger;
//!
//! let pool = AccountId::from_bytes([9u8; 32]);
//! let alice = AccountId::from_bytes([1u8; 32]);
//!
//! // 1. Fund the depositor on both ledgers and grant the pool an
//! //    allowance for the token side.
//! let mut coin = InMemoryLedger::new();
//! let mut token = InMemoryLedger::new();
//! coin.mint(alice, Amount::new(1_010)).expect("fresh ledger");
//! token.mint(alice, Amount::new(2_000)).expect("fresh ledger");
//! token.approve(alice, pool, Amount::new(2_000));
//!
//! // 2. Build the exchange bound to its ledger account.
//! let config = ExchangeConfig::new(pool).expect("valid config");
//! let mut exchange = Exchange::new(&config, coin, token).expect("valid config");
//!
//! // 3. Bootstrap 1000 coin / 2000 token; the first deposit fixes the
//! //    initial price ratio.
//! exchange
//!     .add_liquidity(alice, Amount::new(2_000), Amount::new(1_000))
//!     .expect("bootstrap deposit");
//!
//! // 4. Quote the reserve-ratio price (scaled by 1000).
//! let price = ScaledPrice::from_reserves(exchange.coin_reserve(), exchange.token_reserve())
//!     .expect("live pool");
//! assert_eq!(price.get(), 500); // 0.5 coin per token
//!
//! // 5. Sell 10 coin for tokens with slippage protection.
//! let bought = exchange
//!     .coin_to_token_swap(alice, Amount::new(10), Amount::new(19))
//!     .expect("within slippage");
//! assert_eq!(bought, Amount::new(19));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Caller     │  funds accounts, grants allowances
//! └──────┬──────┘
//!        │ add_liquidity / coin_to_token_swap / token_to_coin_swap
//!        ▼
//! ┌─────────────┐
//! │   Exchange   │  frozen-reserve quotes, atomic draft-commit transitions
//! └──────┬──────┘
//!        │ balance_of / transfer / transfer_from
//!        ▼
//! ┌─────────────┐
//! │   Ledgers    │  native coin + fungible token (FungibleLedger seam)
//! └─────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`AccountId`](domain::AccountId), [`ScaledPrice`](domain::ScaledPrice), [`Rounding`](domain::Rounding) |
//! | [`ledger`] | The [`FungibleLedger`](ledger::FungibleLedger) seam and the in-memory reference ledger |
//! | [`config`] | Validated construction parameters: [`ExchangeConfig`](config::ExchangeConfig) |
//! | [`exchange`] | The reserve-accounting and swap engine |
//! | [`math`] | Wide `mul_div` and the constant-product formula |
//! | [`error`] | [`ExchangeError`](error::ExchangeError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types |

pub mod config;
pub mod domain;
pub mod error;
pub mod exchange;
pub mod ledger;
pub mod math;
pub mod prelude;

#[cfg(test)]
mod proptest_properties;
