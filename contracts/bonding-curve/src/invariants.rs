// ============================================================================
// INVARIANTS MODULE
// ============================================================================
//
// Pure predicates over the curve's accumulators and balances. The contract
// checks the supply bound before every buy and phase consistency before
// graduation. The balance predicates are asserted after every trade in the
// contract tests; the bounds and phase ordering by the Certora rules under
// `certora_specs`.
//
// INVARIANT CATEGORIES:
//
// 1. SUPPLY
//    - amount_sold never exceeds the curve's allotted supply
//    - amount_sold equals the asset units that left the curve
//
// 2. RESERVE
//    - reserve_collected never exceeds the target
//    - reserve_collected equals the curve's reserve-asset balance
//
// 3. PHASE
//    - the phase only moves forward
//    - trading is closed exactly when the target is met
//
// ============================================================================

use curve_types::{CurveState, Phase};

// ============================================================================
// SUPPLY INVARIANTS
// ============================================================================

/// Invariant: the curve never owes more than it was allotted
///
/// Property:
///   0 <= amount_sold <= curve_supply
pub fn sold_within_supply(amount_sold: i128, curve_supply: i128) -> bool {
    amount_sold >= 0 && amount_sold <= curve_supply
}

/// Invariant: sold units are exactly the units that left the curve
///
/// Property:
///   amount_sold == initial_held - current_held
pub fn sold_matches_held(amount_sold: i128, initial_held: i128, current_held: i128) -> bool {
    initial_held
        .checked_sub(current_held)
        .map_or(false, |moved| moved == amount_sold)
}

// ============================================================================
// RESERVE INVARIANTS
// ============================================================================

/// Invariant: the active-phase clamp never overshoots the target
///
/// Property:
///   0 <= reserve_collected <= target_reserve
pub fn reserve_within_target(reserve_collected: i128, target_reserve: i128) -> bool {
    reserve_collected >= 0 && reserve_collected <= target_reserve
}

/// Invariant: the books mirror the curve's actual reserve balance
///
/// Property:
///   reserve_collected == reserve_balance
pub fn reserve_matches_balance(reserve_collected: i128, reserve_balance: i128) -> bool {
    reserve_collected == reserve_balance
}

// ============================================================================
// PHASE INVARIANTS
// ============================================================================

fn phase_rank(phase: &Phase) -> u32 {
    match phase {
        Phase::Active => 0,
        Phase::TargetReached => 1,
        Phase::Graduated => 2,
    }
}

/// Invariant: phase transitions are monotonic
///
/// Property:
///   rank(after) >= rank(before)
pub fn phase_monotonic(before: &Phase, after: &Phase) -> bool {
    phase_rank(after) >= phase_rank(before)
}

/// Invariant: before graduation, trading is open iff the target is unmet
///
/// Property:
///   phase == Active <=> reserve_collected < target_reserve
pub fn phase_consistent(state: &CurveState, target_reserve: i128) -> bool {
    match state.phase {
        Phase::Active => state.reserve_collected < target_reserve,
        Phase::TargetReached => state.reserve_collected >= target_reserve,
        Phase::Graduated => true,
    }
}

// ============================================================================
// TESTS
// ============================================================================
