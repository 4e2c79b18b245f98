use crate::full_math::mul_div;
use curve_types::{CurveError, SCALE};
use soroban_sdk::Env;

/// Asset units bought by `reserve_in` at `price` (rounds down)
///
/// asset_out = floor(reserve_in * SCALE / price)
pub fn purchase_return(env: &Env, reserve_in: u128, price: u128) -> Result<u128, CurveError> {
    if price == 0 {
        return Err(CurveError::PriceUndefined);
    }
    let asset_out = mul_div(env, reserve_in, SCALE, price)?;
    if asset_out == 0 {
        return Err(CurveError::ZeroReturn);
    }
    Ok(asset_out)
}

/// Reserve units paid for `asset_in` at `price` (rounds down)
///
/// reserve_out = floor(asset_in * price / SCALE)
pub fn sale_return(env: &Env, asset_in: u128, price: u128) -> Result<u128, CurveError> {
    let reserve_out = mul_div(env, asset_in, price, SCALE)?;
    if reserve_out == 0 {
        return Err(CurveError::ZeroReturn);
    }
    Ok(reserve_out)
}
