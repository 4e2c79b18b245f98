use curve_types::{CurveConfig, CurveError, CurveState, GraduationRecord};
use soroban_sdk::{contracttype, Env};

// ============================================================================
// Storage layout
// ============================================================================
// Everything lives in Instance storage and shares the instance TTL.
//
// - Config:     written once by initialize, never again
// - State:      accumulators + phase, rewritten by buy/sell/graduate
// - Locked:     reentrancy flag, only true while an entry point runs
// - Graduation: written once by a successful graduate
// ============================================================================

/// Storage keys for the curve contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Curve configuration (Instance storage)
    Config,
    /// Curve accumulators and phase (Instance storage)
    State,
    /// Reentrancy lock (Instance storage)
    Locked,
    /// Graduation record (Instance storage)
    Graduation,
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days

/// Extend instance storage TTL
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

// === Config ===

pub fn get_config(env: &Env) -> Result<CurveConfig, CurveError> {
    let config = env
        .storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(CurveError::NotInitialized)?;
    extend_instance_ttl(env);
    Ok(config)
}

pub fn set_config(env: &Env, config: &CurveConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}

// === State ===

pub fn get_state(env: &Env) -> Result<CurveState, CurveError> {
    let state = env
        .storage()
        .instance()
        .get(&DataKey::State)
        .ok_or(CurveError::NotInitialized)?;
    extend_instance_ttl(env);
    Ok(state)
}

pub fn set_state(env: &Env, state: &CurveState) {
    env.storage().instance().set(&DataKey::State, state);
    extend_instance_ttl(env);
}

// === Lock ===

pub fn is_locked(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Locked)
        .unwrap_or(false)
}

pub fn set_locked(env: &Env, locked: bool) {
    if locked {
        env.storage().instance().set(&DataKey::Locked, &true);
    } else {
        env.storage().instance().remove(&DataKey::Locked);
    }
}

// === Graduation ===

pub fn get_graduation(env: &Env) -> Option<GraduationRecord> {
    env.storage().instance().get(&DataKey::Graduation)
}

pub fn set_graduation(env: &Env, record: &GraduationRecord) {
    env.storage().instance().set(&DataKey::Graduation, record);
    extend_instance_ttl(env);
}
