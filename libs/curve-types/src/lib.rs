#![no_std]

mod curve;
mod error;
mod trade;

pub use curve::*;
pub use error::*;
pub use trade::*;

/// Fixed-point scale for prices and sold ratios (1e18)
pub const SCALE: u128 = 1_000_000_000_000_000_000;

/// Multiplier applied to the sold ratio when pricing
/// price = start_price * (1 + EXPONENT * sold / supply)
pub const EXPONENT: u128 = 2;
