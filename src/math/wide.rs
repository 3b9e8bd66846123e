//! 256-bit intermediates for multiply-then-divide arithmetic.
//!
//! Reserves and trade sizes are `u128` values that routinely carry 18
//! fractional decimals, so the product of two of them does not fit in
//! `u128`. Every `a × b / d` in the engine goes through [`mul_div`],
//! which widens the product to 256 bits and only narrows back after the
//! division.

use uint::construct_uint;

use crate::domain::Rounding;

construct_uint! {
    /// 256-bit unsigned integer used for intermediate products.
    pub(crate) struct U256(4);
}

/// Computes `a × b / divisor` exactly, with an explicit rounding
/// direction.
///
/// The intermediate product is 256 bits wide and cannot overflow.
/// Returns `None` if `divisor` is zero or if the quotient does not fit
/// in `u128`.
///
/// # Examples
///
/// ```
/// use tidepool::domain::Rounding;
/// use tidepool::math::mul_div;
///
/// assert_eq!(mul_div(10, 10, 3, Rounding::Down), Some(33));
/// assert_eq!(mul_div(10, 10, 3, Rounding::Up), Some(34));
/// assert_eq!(mul_div(10, 10, 0, Rounding::Down), None);
/// ```
#[must_use]
pub fn mul_div(a: u128, b: u128, divisor: u128, rounding: Rounding) -> Option<u128> {
    if divisor == 0 {
        return None;
    }
    let (quotient, remainder) = (U256::from(a) * U256::from(b)).div_mod(U256::from(divisor));
    let quotient = match rounding {
        Rounding::Down => quotient,
        Rounding::Up if remainder.is_zero() => quotient,
        Rounding::Up => quotient + U256::one(),
    };
    if quotient > U256::from(u128::MAX) {
        return None;
    }
    Some(quotient.as_u128())
}
