//! The constant-product pricing formula.
//!
//! The swap invariant is `x × y = k` where `x` and `y` are the two
//! reserves. Solving the curve for the output given an input added to
//! one side yields
//!
//! ```text
//! output = input × output_reserve / (input_reserve + input)
//! ```
//!
//! The denominator growth by `input` is what produces diminishing
//! returns (price impact) as trade size grows relative to reserve
//! depth. There is no separate fee term. Truncating division is
//! mandatory: the output is value leaving the reserve, so it rounds
//! down, never up, and the post-trade product `k` never decreases.

use crate::domain::{Amount, Rounding};
use crate::error::{ExchangeError, Result};
use crate::math::mul_div;

/// Computes the output side of a swap on the constant-product curve.
///
/// Used identically for both swap directions; callers pass the reserves
/// in the order matching the trade. A zero `input_amount` yields a zero
/// output — rejecting that is swap-execution policy, not a property of
/// the curve.
///
/// # Errors
///
/// - [`ExchangeError::InvalidReserves`] if either reserve is zero.
/// - [`ExchangeError::Overflow`] if `input_reserve + input_amount`
///   exceeds `u128`.
pub fn output_amount(
    input_amount: Amount,
    input_reserve: Amount,
    output_reserve: Amount,
) -> Result<Amount> {
    if input_reserve.is_zero() || output_reserve.is_zero() {
        return Err(ExchangeError::InvalidReserves);
    }
    let denominator = input_reserve
        .checked_add(&input_amount)
        .ok_or(ExchangeError::Overflow("swap denominator exceeds u128"))?;
    // output < output_reserve always holds, so the quotient fits u128.
    let output = mul_div(
        input_amount.get(),
        output_reserve.get(),
        denominator.get(),
        Rounding::Down,
    )
    .ok_or(ExchangeError::Overflow("swap output exceeds u128"))?;
    Ok(Amount::new(output))
}
