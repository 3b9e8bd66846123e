//! The constant-product exchange core.
//!
//! An [`Exchange`] pairs a native coin with a fungible token and prices
//! swaps purely off the ratio of its two reserves. Reserves are never
//! stored: each one **is** the exchange's balance on the corresponding
//! ledger, so they cannot drift from ground truth.
//!
//! # Swap Algorithm (coin → token)
//!
//! 1. Read both reserves as they stand before any value moves.
//! 2. `tokens_bought = coin_sold × token_reserve / (coin_reserve + coin_sold)`
//!    (floor division, see [`crate::math::output_amount`]).
//! 3. Require `tokens_bought > 0` and `tokens_bought ≥ min_tokens_out`.
//! 4. Pull the coin in, pay the tokens out, commit both together.
//!
//! The token → coin direction is symmetric with the reserves swapped.
//!
//! # Invariant
//!
//! After every swap, `k_after ≥ k_before` for
//! `k = coin_reserve × token_reserve`: the floor-biased output removes
//! slightly less from the output side than the proportional share the
//! input would buy on the real-valued curve.
//!
//! # Atomicity
//!
//! Every operation either completes fully or changes nothing. All
//! validation happens against frozen pre-call reserves; ledger
//! mutations are staged on cloned drafts and committed in one step only
//! after every transfer has succeeded.

use tracing::{debug, trace};

use crate::config::ExchangeConfig;
use crate::domain::{AccountId, Amount, Rounding};
use crate::error::{ExchangeError, Result};
use crate::ledger::FungibleLedger;
use crate::math::{mul_div, output_amount};

/// A single-pair constant-product exchange.
///
/// Holds one ledger per asset — `coin` for the native coin, `token` for
/// the paired token — and a fixed [`AccountId`] identifying itself on
/// both. The binding is immutable for the exchange's lifetime.
///
/// # State
///
/// - `coin_reserve()` — the exchange's own balance on the coin ledger
/// - `token_reserve()` — the exchange's own balance on the token ledger
///
/// Both start at zero; the first [`Exchange::add_liquidity`] call
/// bootstraps them and fixes the initial price ratio.
///
/// # Example
///
/// ```
/// use tidepool::config::ExchangeConfig;
/// use tidepool::domain::{AccountId, Amount};
/// use tidepool::exchange::Exchange;
/// use tidepool::ledger::InMemoryLedger;
///
/// let pool = AccountId::from_bytes([9u8; 32]);
/// let alice = AccountId::from_bytes([1u8; 32]);
///
/// let mut coin = InMemoryLedger::new();
/// let mut token = InMemoryLedger::new();
/// coin.mint(alice, Amount::new(1_000)).expect("fresh ledger");
/// token.mint(alice, Amount::new(2_000)).expect("fresh ledger");
/// token.approve(alice, pool, Amount::new(2_000));
///
/// let config = ExchangeConfig::new(pool).expect("valid config");
/// let mut exchange = Exchange::new(&config, coin, token).expect("valid config");
///
/// exchange
///     .add_liquidity(alice, Amount::new(2_000), Amount::new(1_000))
///     .expect("bootstrap deposit");
/// assert_eq!(exchange.coin_reserve(), Amount::new(1_000));
/// assert_eq!(exchange.token_reserve(), Amount::new(2_000));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Exchange<L> {
    account: AccountId,
    coin: L,
    token: L,
}

impl<L: FungibleLedger + Clone> Exchange<L> {
    /// Creates an exchange bound to `config`'s account, owning the two
    /// asset ledgers.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`ExchangeConfig::validate`].
    pub fn new(config: &ExchangeConfig, coin: L, token: L) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            account: config.account(),
            coin,
            token,
        })
    }

    /// Returns the exchange's own ledger account.
    #[must_use]
    pub const fn account(&self) -> AccountId {
        self.account
    }

    /// Returns the native-coin reserve: the exchange's balance on the
    /// coin ledger. Never fails.
    #[must_use]
    pub fn coin_reserve(&self) -> Amount {
        self.coin.balance_of(self.account)
    }

    /// Returns the token reserve: the exchange's balance on the token
    /// ledger. Never fails.
    #[must_use]
    pub fn token_reserve(&self) -> Amount {
        self.token.balance_of(self.account)
    }

    /// Shared access to the coin ledger.
    #[must_use]
    pub const fn coin_ledger(&self) -> &L {
        &self.coin
    }

    /// Shared access to the token ledger.
    #[must_use]
    pub const fn token_ledger(&self) -> &L {
        &self.token
    }

    /// Exclusive access to the coin ledger, for funding accounts outside
    /// exchange operations.
    pub fn coin_ledger_mut(&mut self) -> &mut L {
        &mut self.coin
    }

    /// Exclusive access to the token ledger, for funding and approvals
    /// outside exchange operations.
    pub fn token_ledger_mut(&mut self) -> &mut L {
        &mut self.token
    }

    /// Quotes the tokens received for selling `coin_sold` coin at the
    /// current reserves, including the trade's own price impact.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::InvalidReserves`] before any liquidity
    /// exists.
    pub fn token_output_amount(&self, coin_sold: Amount) -> Result<Amount> {
        let quoted = output_amount(coin_sold, self.coin_reserve(), self.token_reserve())?;
        trace!(coin_sold = %coin_sold, tokens = %quoted, "quoted coin to token");
        Ok(quoted)
    }

    /// Quotes the coin received for selling `token_sold` tokens at the
    /// current reserves, including the trade's own price impact.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::InvalidReserves`] before any liquidity
    /// exists.
    pub fn coin_output_amount(&self, token_sold: Amount) -> Result<Amount> {
        let quoted = output_amount(token_sold, self.token_reserve(), self.coin_reserve())?;
        trace!(token_sold = %token_sold, coin = %quoted, "quoted token to coin");
        Ok(quoted)
    }

    /// Deposits liquidity: `coin_amount` native coin sent by `caller`
    /// alongside `token_amount` tokens pulled from `caller`'s prior
    /// approval.
    ///
    /// While the token reserve is empty (bootstrap), both amounts are
    /// accepted unconditionally and fix the initial price ratio — the
    /// caller bears full responsibility for choosing it. Afterwards the
    /// token amount must equal the ratio implied by the coin sent,
    /// rounded up in the pool's favor; zero/zero deposits are valid
    /// no-ops in either state.
    ///
    /// # Errors
    ///
    /// - [`ExchangeError::ImbalancedDeposit`] if a non-bootstrap deposit
    ///   is off the reserve ratio.
    /// - [`ExchangeError::InvalidReserves`] if the token reserve is
    ///   positive while the coin reserve is zero (no ratio exists).
    /// - [`ExchangeError::TransferFailed`] if either transfer fails; no
    ///   value moves.
    pub fn add_liquidity(
        &mut self,
        caller: AccountId,
        token_amount: Amount,
        coin_amount: Amount,
    ) -> Result<()> {
        let coin_reserve = self.coin_reserve();
        let token_reserve = self.token_reserve();

        let bootstrap = token_reserve.is_zero();
        if !bootstrap {
            if coin_reserve.is_zero() {
                return Err(ExchangeError::InvalidReserves);
            }
            let required = mul_div(
                coin_amount.get(),
                token_reserve.get(),
                coin_reserve.get(),
                Rounding::Up,
            )
            .map(Amount::new)
            .ok_or(ExchangeError::Overflow("required token deposit exceeds u128"))?;
            if token_amount != required {
                return Err(ExchangeError::ImbalancedDeposit {
                    supplied: token_amount,
                    required,
                });
            }
        }

        let mut coin = self.coin.clone();
        let mut token = self.token.clone();
        coin.transfer(caller, self.account, coin_amount)?;
        token.transfer_from(self.account, caller, self.account, token_amount)?;
        self.coin = coin;
        self.token = token;

        debug!(
            coin = %coin_amount,
            token = %token_amount,
            bootstrap,
            "liquidity added"
        );
        Ok(())
    }

    /// Sells `coin_sold` native coin for tokens, failing unless the
    /// output is positive and at least `min_tokens_out`.
    ///
    /// The quote is computed from the reserves as they stood before this
    /// call's coin is added.
    ///
    /// # Errors
    ///
    /// - [`ExchangeError::InvalidReserves`] before any liquidity exists.
    /// - [`ExchangeError::InsufficientOutput`] if the computed output is
    ///   zero or below `min_tokens_out`.
    /// - [`ExchangeError::TransferFailed`] if either transfer fails.
    ///
    /// On any error, every balance is left exactly as before the call.
    pub fn coin_to_token_swap(
        &mut self,
        caller: AccountId,
        coin_sold: Amount,
        min_tokens_out: Amount,
    ) -> Result<Amount> {
        let tokens_bought = output_amount(coin_sold, self.coin_reserve(), self.token_reserve())?;
        if tokens_bought.is_zero() || tokens_bought < min_tokens_out {
            return Err(ExchangeError::InsufficientOutput {
                computed: tokens_bought,
                minimum: min_tokens_out,
            });
        }

        let mut coin = self.coin.clone();
        let mut token = self.token.clone();
        coin.transfer(caller, self.account, coin_sold)?;
        token.transfer(self.account, caller, tokens_bought)?;
        self.coin = coin;
        self.token = token;

        debug!(
            coin_sold = %coin_sold,
            tokens_bought = %tokens_bought,
            "coin to token swap executed"
        );
        Ok(tokens_bought)
    }

    /// Sells `token_sold` tokens (pulled from `caller`'s prior approval)
    /// for native coin, failing unless the output is positive and at
    /// least `min_coin_out`.
    ///
    /// The quote is computed from the reserves as they stood before this
    /// call's tokens are pulled in.
    ///
    /// # Errors
    ///
    /// - [`ExchangeError::InvalidReserves`] before any liquidity exists.
    /// - [`ExchangeError::InsufficientOutput`] if the computed output is
    ///   zero or below `min_coin_out`.
    /// - [`ExchangeError::TransferFailed`] if either transfer fails.
    ///
    /// On any error, every balance is left exactly as before the call.
    pub fn token_to_coin_swap(
        &mut self,
        caller: AccountId,
        token_sold: Amount,
        min_coin_out: Amount,
    ) -> Result<Amount> {
        let coin_bought = output_amount(token_sold, self.token_reserve(), self.coin_reserve())?;
        if coin_bought.is_zero() || coin_bought < min_coin_out {
            return Err(ExchangeError::InsufficientOutput {
                computed: coin_bought,
                minimum: min_coin_out,
            });
        }

        let mut coin = self.coin.clone();
        let mut token = self.token.clone();
        token.transfer_from(self.account, caller, self.account, token_sold)?;
        coin.transfer(self.account, caller, coin_bought)?;
        self.coin = coin;
        self.token = token;

        debug!(
            token_sold = %token_sold,
            coin_bought = %coin_bought,
            "token to coin swap executed"
        );
        Ok(coin_bought)
    }
}
