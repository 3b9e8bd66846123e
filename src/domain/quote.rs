//! Informational price quote derived from a pair of reserves.

use core::fmt;

use super::{Amount, Rounding};
use crate::error::{ExchangeError, Result};
use crate::math;

/// A reserve-ratio price scaled by [`ScaledPrice::SCALE`].
///
/// The ×1000 scaling exists purely so a sub-unit price ratio is
/// representable as an integer rather than lost to truncation; callers
/// divide by [`ScaledPrice::SCALE`] to recover a human-readable price.
///
/// This is a pure quoting value. Swap execution never consults it — the
/// swap path prices trades with [`crate::math::output_amount`] directly,
/// which accounts for the price impact of the trade itself.
///
/// Quotes are directional and independent: `from_reserves(a, b)` and
/// `from_reserves(b, a)` are separate truncated ratios, not reciprocals
/// of one another.
///
/// # Examples
///
/// ```
/// use tidepool::domain::{Amount, ScaledPrice};
///
/// let price = ScaledPrice::from_reserves(Amount::new(1_000), Amount::new(2_000))
///     .expect("positive reserves");
/// assert_eq!(price.get(), 500); // 0.5 after dividing by SCALE
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[must_use]
pub struct ScaledPrice(u128);

impl ScaledPrice {
    /// Scaling factor applied to the reserve ratio.
    pub const SCALE: u128 = 1_000;

    /// Computes the scaled price `input_reserve × SCALE / output_reserve`,
    /// truncating towards zero.
    ///
    /// # Errors
    ///
    /// - [`ExchangeError::InvalidReserves`] if either reserve is zero.
    /// - [`ExchangeError::Overflow`] if the scaled ratio exceeds `u128`.
    pub fn from_reserves(input_reserve: Amount, output_reserve: Amount) -> Result<Self> {
        if input_reserve.is_zero() || output_reserve.is_zero() {
            return Err(ExchangeError::InvalidReserves);
        }
        let scaled = math::mul_div(
            input_reserve.get(),
            Self::SCALE,
            output_reserve.get(),
            Rounding::Down,
        )
        .ok_or(ExchangeError::Overflow("scaled price exceeds u128"))?;
        Ok(Self(scaled))
    }

    /// Returns the scaled integer value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }
}

impl fmt::Display for ScaledPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
