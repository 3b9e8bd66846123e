//! Arithmetic for the pricing engine.
//!
//! Two building blocks live here:
//!
//! - [`mul_div`] — exact `a × b / d` with a 256-bit intermediate and an
//!   explicit [`Rounding`](crate::domain::Rounding) direction.
//! - [`output_amount`] — the constant-product swap formula, floor-biased
//!   in the pool's favor.

mod curve;
mod wide;

pub use curve::output_amount;
pub use wide::mul_div;

#[cfg(test)]
pub(crate) use wide::U256;
