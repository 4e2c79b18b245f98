// ============================================================================
// CURVE STATE INVARIANT SPECIFICATIONS
// ============================================================================
//
// KEY INVARIANTS:
// 1. A clamped buy lands reserve_collected exactly on the target
// 2. A buy never carries amount_sold past the curve supply
// 3. Phases only move forward
//
// ============================================================================

#[cfg(feature = "certora")]
use soroban_sdk::Env;

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_assume, cvlr_satisfy};

#[cfg(feature = "certora")]
fn model_config(env: &Env, target_reserve: i128, curve_supply: i128) -> curve_types::CurveConfig {
    let params = curve_types::CurveParams {
        start_price: curve_types::SCALE,
        target_reserve,
        min_purchase: 1,
        curve_supply,
    };
    // Pricing never looks at the addresses
    let this = env.current_contract_address();
    curve_types::CurveConfig::new(
        this.clone(),
        this.clone(),
        this.clone(),
        this.clone(),
        this,
        &params,
    )
}

/// RULE: The reserve charged by a buy never crosses the target
#[cfg(feature = "certora")]
#[rule]
pub fn buy_never_crosses_target(
    env: Env,
    target_reserve: i128,
    reserve_collected: i128,
    amount_sold: i128,
    reserve_in: i128,
) {
    use crate::invariants::reserve_within_target;
    use curve_types::{CurveState, Phase};

    cvlr_assume!(target_reserve > 0 && target_reserve <= 1_000_000_000_000);
    cvlr_assume!(reserve_collected >= 0 && reserve_collected < target_reserve);
    cvlr_assume!(amount_sold >= 0 && amount_sold <= 1_000_000_000_000);
    cvlr_assume!(reserve_in > 0 && reserve_in <= 1_000_000_000_000);

    let config = model_config(&env, target_reserve, 1_000_000_000_000);
    let state = CurveState {
        amount_sold,
        reserve_collected,
        phase: Phase::Active,
    };

    if let Ok(quote) = crate::quote::quote_buy(&env, &config, &state, reserve_in) {
        let after = reserve_collected + quote.reserve_in;
        cvlr_assert!(reserve_within_target(after, target_reserve));
        cvlr_assert!(quote.fills_target == (after == target_reserve));
        cvlr_assert!(quote.reserve_in <= reserve_in);
    }
}

/// RULE: A successful buy quote stays within the curve supply
#[cfg(feature = "certora")]
#[rule]
pub fn buy_within_supply(env: Env, curve_supply: i128, amount_sold: i128, reserve_in: i128) {
    use crate::invariants::sold_within_supply;
    use curve_types::{CurveState, Phase};

    cvlr_assume!(curve_supply > 0 && curve_supply <= 1_000_000_000_000);
    cvlr_assume!(amount_sold >= 0 && amount_sold <= curve_supply);
    cvlr_assume!(reserve_in > 0 && reserve_in <= 1_000_000_000_000);

    let config = model_config(&env, i128::MAX, curve_supply);
    let state = CurveState {
        amount_sold,
        reserve_collected: 0,
        phase: Phase::Active,
    };

    if let Ok(quote) = crate::quote::quote_buy(&env, &config, &state, reserve_in) {
        cvlr_assert!(sold_within_supply(amount_sold + quote.asset_out, curve_supply));
    }
}

/// RULE: Sanity check - a sell quote is reachable
#[cfg(feature = "certora")]
#[rule]
pub fn sanity_quote_sell(env: Env, amount_sold: i128, reserve_collected: i128, asset_in: i128) {
    use curve_types::{CurveState, Phase};

    cvlr_assume!(amount_sold > 0 && amount_sold <= 1_000_000);
    cvlr_assume!(reserve_collected > 0 && reserve_collected <= 1_000_000);
    cvlr_assume!(asset_in > 0 && asset_in <= amount_sold);

    let config = model_config(&env, 2_000_000, 1_000_000);
    let state = CurveState {
        amount_sold,
        reserve_collected,
        phase: Phase::Active,
    };
    let quote = crate::quote::quote_sell(&env, &config, &state, asset_in);
    cvlr_satisfy!(quote.is_ok());
}

/// RULE: Phase transitions only move forward
#[cfg(feature = "certora")]
#[rule]
pub fn phase_never_reverts(before: u32, after: u32) {
    use crate::invariants::phase_monotonic;
    use curve_types::Phase;

    fn phase(tag: u32) -> Phase {
        match tag % 3 {
            0 => Phase::Active,
            1 => Phase::TargetReached,
            _ => Phase::Graduated,
        }
    }

    cvlr_assume!(before % 3 > after % 3);
    cvlr_assert!(!phase_monotonic(&phase(before), &phase(after)));
}

// ============================================================================
// UNIT TESTS (run without Certora)
// ============================================================================
