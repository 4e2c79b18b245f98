// ============================================================================
// PRICING INVARIANT SPECIFICATIONS
// ============================================================================
//
// KEY INVARIANTS:
// 1. Price never decreases as amount_sold grows
// 2. Price with nothing sold is the start price
// 3. Quotes round down, never in the trader's favour
//
// ============================================================================

#[cfg(feature = "certora")]
use soroban_sdk::Env;

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_assume, cvlr_satisfy};

/// RULE: Sanity check - unit price is reachable
#[cfg(feature = "certora")]
#[rule]
pub fn sanity_unit_price(env: Env, curve_supply: u128, amount_sold: u128, start_price: u128) {
    cvlr_assume!(curve_supply > 0 && amount_sold <= curve_supply);
    let price = curve_math::unit_price(&env, curve_supply, amount_sold, start_price);
    cvlr_satisfy!(price.is_ok());
}

/// RULE: Unit price is monotonically non-decreasing in amount_sold
#[cfg(feature = "certora")]
#[rule]
pub fn unit_price_monotonic(
    env: Env,
    curve_supply: u128,
    sold1: u128,
    sold2: u128,
    start_price: u128,
) {
    cvlr_assume!(curve_supply > 0);
    cvlr_assume!(sold1 < sold2 && sold2 <= curve_supply);
    cvlr_assume!(start_price <= curve_types::SCALE * 1_000_000);

    let p1 = curve_math::unit_price(&env, curve_supply, sold1, start_price);
    let p2 = curve_math::unit_price(&env, curve_supply, sold2, start_price);

    if let (Ok(p1), Ok(p2)) = (p1, p2) {
        cvlr_assert!(p1 <= p2);
    }
}

/// RULE: Price with nothing sold equals the start price
#[cfg(feature = "certora")]
#[rule]
pub fn unit_price_at_zero_is_start(env: Env, curve_supply: u128, start_price: u128) {
    cvlr_assume!(curve_supply > 0);
    if let Ok(price) = curve_math::unit_price(&env, curve_supply, 0, start_price) {
        cvlr_assert!(price == start_price);
    }
}

/// RULE: Price never exceeds three times the start price
#[cfg(feature = "certora")]
#[rule]
pub fn unit_price_bounded(env: Env, curve_supply: u128, amount_sold: u128, start_price: u128) {
    cvlr_assume!(curve_supply > 0 && amount_sold <= curve_supply);
    cvlr_assume!(start_price <= curve_types::SCALE * 1_000_000);
    if let Ok(price) = curve_math::unit_price(&env, curve_supply, amount_sold, start_price) {
        cvlr_assert!(price <= start_price * 3);
    }
}

/// RULE: A purchase never pays out more than reserve_in is worth
#[cfg(feature = "certora")]
#[rule]
pub fn purchase_rounds_down(env: Env, reserve_in: u128, price: u128) {
    use curve_types::SCALE;

    cvlr_assume!(reserve_in > 0 && reserve_in <= i128::MAX as u128);
    cvlr_assume!(price >= SCALE && price <= SCALE * 3);

    if let Ok(asset_out) = curve_math::purchase_return(&env, reserve_in, price) {
        // asset_out * price <= reserve_in * SCALE
        cvlr_assert!(asset_out <= reserve_in);
    }
}

/// RULE: A sale never pays out more than asset_in is worth
#[cfg(feature = "certora")]
#[rule]
pub fn sale_rounds_down(env: Env, asset_in: u128, price: u128) {
    use curve_types::SCALE;

    cvlr_assume!(asset_in > 0 && asset_in <= i128::MAX as u128 / 4);
    cvlr_assume!(price >= SCALE && price <= SCALE * 3);

    if let Ok(reserve_out) = curve_math::sale_return(&env, asset_in, price) {
        cvlr_assert!(reserve_out <= asset_in * 3);
        cvlr_assert!(reserve_out >= asset_in);
    }
}

// ============================================================================
// UNIT TESTS (run without Certora)
// ============================================================================
