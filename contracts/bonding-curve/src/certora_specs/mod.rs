// ============================================================================
// CERTORA SUNBEAM FORMAL VERIFICATION SPECIFICATIONS
// ============================================================================
//
// Formal verification rules for the bonding curve.
//
// STRUCTURE:
//
// - math_specs.rs        : Pricing and quote function verification
// - curve_state_specs.rs : Accumulator and phase invariants
//
// USAGE:
// - Unit tests: cargo test -p bonding-curve
// - Certora build: cargo build --features certora -p bonding-curve
// - Verification: certoraSorobanProver bonding_curve.conf
//
// ============================================================================

pub mod curve_state_specs;
pub mod math_specs;
