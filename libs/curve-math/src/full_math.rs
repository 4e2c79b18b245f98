use curve_types::CurveError;
use soroban_sdk::{Env, U256};

/// Multiply and divide with 256-bit intermediate precision (rounds down)
/// Returns (a * b) / denominator
pub fn mul_div(env: &Env, a: u128, b: u128, denominator: u128) -> Result<u128, CurveError> {
    if denominator == 0 {
        return Err(CurveError::DivisionByZero);
    }

    let a_256 = U256::from_u128(env, a);
    let b_256 = U256::from_u128(env, b);
    let denom_256 = U256::from_u128(env, denominator);

    // u128 * u128 always fits in 256 bits, only the quotient can overflow
    let product = a_256.mul(&b_256);
    let result = product.div(&denom_256);

    result.to_u128().ok_or(CurveError::MathOverflow)
}

/// Token amount (i128) to math value (u128). Negative amounts are rejected.
pub fn from_amount(amount: i128) -> Result<u128, CurveError> {
    if amount < 0 {
        return Err(CurveError::InvalidAmount);
    }
    Ok(amount as u128)
}

/// Math value (u128) back to a token amount (i128)
pub fn to_amount(value: u128) -> Result<i128, CurveError> {
    i128::try_from(value).map_err(|_| CurveError::MathOverflow)
}
