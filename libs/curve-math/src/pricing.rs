use crate::full_math::mul_div;
use curve_types::{CurveError, EXPONENT, SCALE};
use soroban_sdk::Env;

/// Unit price of the asset after `amount_sold` of `curve_supply` units are gone.
///
/// sold_ratio = floor(amount_sold * SCALE / curve_supply)
/// price      = floor(start_price * (SCALE + EXPONENT * sold_ratio) / SCALE)
///
/// Both divisions round down. Fails with `PriceUndefined` when the supply is
/// zero or more units are sold than the curve was allotted.
pub fn unit_price(
    env: &Env,
    curve_supply: u128,
    amount_sold: u128,
    start_price: u128,
) -> Result<u128, CurveError> {
    if curve_supply == 0 || amount_sold > curve_supply {
        return Err(CurveError::PriceUndefined);
    }

    let sold_ratio = mul_div(env, amount_sold, SCALE, curve_supply)?;

    // sold_ratio <= SCALE, so the growth factor is at most 3 * SCALE
    let growth = SCALE + EXPONENT * sold_ratio;

    mul_div(env, start_price, growth, SCALE)
}
