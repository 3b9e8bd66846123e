//! Property-based tests using `proptest` for engine invariant validation.
//!
//! Covers the engine's testable properties:
//!
//! 1. **Exact floor pricing** — `output_amount` equals the floor of the
//!    exact rational value, never rounded up.
//! 2. **Reserve containment** — a swap can never drain the output side.
//! 3. **Invariant preservation** — `k` non-decreasing after swaps.
//! 4. **Round-trip loss** — swapping there and back never profits.
//! 5. **Atomic failure** — a rejected swap leaves the exchange
//!    bit-identical.
//! 6. **Balance mirroring** — reserves equal the pool's ledger balances
//!    after every operation.
//! 7. **Deposit ratio preservation** — proportional deposits never move
//!    the price against the pool.

use proptest::prelude::*;

use crate::config::ExchangeConfig;
use crate::domain::{AccountId, Amount, Rounding, ScaledPrice};
use crate::error::ExchangeError;
use crate::exchange::Exchange;
use crate::ledger::{FungibleLedger, InMemoryLedger};
use crate::math::{mul_div, output_amount, U256};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn pool() -> AccountId {
    AccountId::from_bytes([9u8; 32])
}

fn provider() -> AccountId {
    AccountId::from_bytes([1u8; 32])
}

fn trader() -> AccountId {
    AccountId::from_bytes([2u8; 32])
}

fn make_exchange(coin_reserve: u128, token_reserve: u128) -> Exchange<InMemoryLedger> {
    let Ok(config) = ExchangeConfig::new(pool()) else {
        panic!("valid config");
    };
    let Ok(mut exchange) = Exchange::new(&config, InMemoryLedger::new(), InMemoryLedger::new())
    else {
        panic!("valid exchange");
    };
    fund(&mut exchange, provider(), coin_reserve, token_reserve);
    let Ok(()) = exchange.add_liquidity(
        provider(),
        Amount::new(token_reserve),
        Amount::new(coin_reserve),
    ) else {
        panic!("bootstrap deposit");
    };
    exchange
}

fn fund(exchange: &mut Exchange<InMemoryLedger>, account: AccountId, coin: u128, token: u128) {
    let Ok(()) = exchange.coin_ledger_mut().mint(account, Amount::new(coin)) else {
        panic!("mint coin");
    };
    let Ok(()) = exchange.token_ledger_mut().mint(account, Amount::new(token)) else {
        panic!("mint token");
    };
    exchange
        .token_ledger_mut()
        .approve(account, pool(), Amount::new(token));
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in range [10_000, 10_000_000] to avoid extremes.
fn reserve_strategy() -> impl Strategy<Value = u128> {
    10_000u128..=10_000_000u128
}

/// 18-decimal-scale values for formula-only properties.
fn wide_strategy() -> impl Strategy<Value = u128> {
    1u128..=1_000_000_000_000_000_000_000_000_000_000u128
}

// ---------------------------------------------------------------------------
// Property 1: Exact Floor Pricing
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_output_is_exact_floor(
        input in wide_strategy(),
        reserve_in in wide_strategy(),
        reserve_out in wide_strategy(),
    ) {
        let Ok(out) = output_amount(
            Amount::new(input),
            Amount::new(reserve_in),
            Amount::new(reserve_out),
        ) else {
            return Ok(());
        };
        let numerator = U256::from(input) * U256::from(reserve_out);
        let denominator = U256::from(reserve_in) + U256::from(input);
        prop_assert!(U256::from(out.get()) * denominator <= numerator);
        prop_assert!((U256::from(out.get()) + U256::one()) * denominator > numerator);
    }

    #[test]
    fn prop_mul_div_directions_bracket_exact_value(
        a in wide_strategy(),
        b in wide_strategy(),
        d in wide_strategy(),
    ) {
        let (Some(down), Some(up)) = (
            mul_div(a, b, d, Rounding::Down),
            mul_div(a, b, d, Rounding::Up),
        ) else {
            return Ok(());
        };
        prop_assert!(down <= up);
        prop_assert!(up - down <= 1);
        let product = U256::from(a) * U256::from(b);
        prop_assert!(U256::from(down) * U256::from(d) <= product);
        prop_assert!(U256::from(up) * U256::from(d) >= product);
    }
}

// ---------------------------------------------------------------------------
// Property 2: Reserve Containment
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_output_never_drains_reserve(
        input in wide_strategy(),
        reserve_in in wide_strategy(),
        reserve_out in wide_strategy(),
    ) {
        let Ok(out) = output_amount(
            Amount::new(input),
            Amount::new(reserve_in),
            Amount::new(reserve_out),
        ) else {
            return Ok(());
        };
        prop_assert!(out.get() < reserve_out);
    }
}

// ---------------------------------------------------------------------------
// Property 3: Invariant Preservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_product_never_decreases(
        coin_reserve in reserve_strategy(),
        token_reserve in reserve_strategy(),
        coin_sold in 1u128..=100_000u128,
    ) {
        let mut exchange = make_exchange(coin_reserve, token_reserve);
        fund(&mut exchange, trader(), coin_sold, 0);

        let k_before = exchange.coin_reserve().get() * exchange.token_reserve().get();
        let Ok(_) = exchange.coin_to_token_swap(trader(), Amount::new(coin_sold), Amount::ZERO)
        else {
            return Ok(());
        };
        let k_after = exchange.coin_reserve().get() * exchange.token_reserve().get();
        prop_assert!(
            k_after >= k_before,
            "k decreased: {k_after} < {k_before}"
        );
    }
}

// ---------------------------------------------------------------------------
// Property 4: Round-Trip Loss
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_round_trip_never_profits(
        coin_reserve in reserve_strategy(),
        token_reserve in reserve_strategy(),
        coin_sold in 1u128..=10_000u128,
    ) {
        let mut exchange = make_exchange(coin_reserve, token_reserve);
        fund(&mut exchange, trader(), coin_sold, 0);

        let Ok(tokens) =
            exchange.coin_to_token_swap(trader(), Amount::new(coin_sold), Amount::ZERO)
        else {
            return Ok(());
        };
        // Sell the proceeds straight back.
        exchange
            .token_ledger_mut()
            .approve(trader(), pool(), tokens);
        let Ok(coin_back) = exchange.token_to_coin_swap(trader(), tokens, Amount::ZERO) else {
            return Ok(());
        };
        prop_assert!(
            coin_back.get() <= coin_sold,
            "round trip profited: {coin_back} > {coin_sold}"
        );
    }
}

// ---------------------------------------------------------------------------
// Property 5: Atomic Failure
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_rejected_swap_leaves_state_untouched(
        coin_reserve in reserve_strategy(),
        token_reserve in reserve_strategy(),
        coin_sold in 1u128..=100_000u128,
    ) {
        let mut exchange = make_exchange(coin_reserve, token_reserve);
        fund(&mut exchange, trader(), coin_sold, 0);

        let Ok(quoted) = exchange.token_output_amount(Amount::new(coin_sold)) else {
            return Ok(());
        };
        let Some(minimum) = quoted.checked_add(&Amount::new(1)) else {
            return Ok(());
        };

        let snapshot = exchange.clone();
        let result = exchange.coin_to_token_swap(trader(), Amount::new(coin_sold), minimum);
        let matched = matches!(
            result,
            Err(ExchangeError::InsufficientOutput { .. })
        );
        prop_assert!(matched);
        prop_assert_eq!(exchange, snapshot);
    }
}

// ---------------------------------------------------------------------------
// Property 6: Balance Mirroring
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_reserves_mirror_ledger_balances(
        coin_reserve in reserve_strategy(),
        token_reserve in reserve_strategy(),
        coin_sold in 1u128..=50_000u128,
        token_sold in 1u128..=50_000u128,
    ) {
        let mut exchange = make_exchange(coin_reserve, token_reserve);
        fund(&mut exchange, trader(), coin_sold, token_sold);

        let _ = exchange.coin_to_token_swap(trader(), Amount::new(coin_sold), Amount::ZERO);
        let _ = exchange.token_to_coin_swap(trader(), Amount::new(token_sold), Amount::ZERO);

        prop_assert_eq!(
            exchange.coin_reserve(),
            exchange.coin_ledger().balance_of(pool())
        );
        prop_assert_eq!(
            exchange.token_reserve(),
            exchange.token_ledger().balance_of(pool())
        );
    }
}

// ---------------------------------------------------------------------------
// Property 7: Deposit Ratio Preservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_proportional_deposit_never_cheapens_tokens(
        coin_reserve in reserve_strategy(),
        token_reserve in reserve_strategy(),
        coin_added in 1u128..=100_000u128,
    ) {
        let mut exchange = make_exchange(coin_reserve, token_reserve);

        let Some(required) = mul_div(
            coin_added,
            token_reserve,
            coin_reserve,
            Rounding::Up,
        ) else {
            return Ok(());
        };
        fund(&mut exchange, trader(), coin_added, required);
        let Ok(()) =
            exchange.add_liquidity(trader(), Amount::new(required), Amount::new(coin_added))
        else {
            return Ok(());
        };

        // The ceil-rounded requirement can only push the token-per-coin
        // ratio up, never down: new_token × old_coin ≥ old_token × new_coin.
        let lhs = U256::from(exchange.token_reserve().get()) * U256::from(coin_reserve);
        let rhs = U256::from(token_reserve) * U256::from(exchange.coin_reserve().get());
        prop_assert!(lhs >= rhs);
    }

    #[test]
    fn prop_scaled_price_round_trip(
        a in 1u128..=1_000_000_000_000u128,
        b in 1u128..=1_000_000_000_000u128,
    ) {
        let Ok(price) = ScaledPrice::from_reserves(Amount::new(a), Amount::new(b)) else {
            return Ok(());
        };
        let recovered = price.get() * b / ScaledPrice::SCALE;
        prop_assert!(recovered <= a);
        prop_assert!(a - recovered <= b / ScaledPrice::SCALE + 1);
    }
}
