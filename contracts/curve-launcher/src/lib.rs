#![no_std]

use curve_types::CurveParams;
use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, Address, BytesN, Env, IntoVal, Symbol,
    Vec,
};

#[contract]
pub struct CurveLauncher;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LauncherError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    CurveExists = 3,
    InvalidParams = 4,
}

/// Storage keys for Launcher contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Admin address
    Admin,
    /// Curve WASM hash for deployment
    CurveWasmHash,
    /// asset -> curve address
    Curve(Address),
    /// Total number of curves created
    CurveCount,
    /// Curve address at index
    CurveAt(u32),
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280;
const INSTANCE_TTL_EXTEND: u32 = 518400;
const PERSISTENT_TTL_THRESHOLD: u32 = 17280;
const PERSISTENT_TTL_EXTEND: u32 = 518400;

/// Upper bound on entries returned by one paginated read
const MAX_PAGE: u32 = 50;

#[contractimpl]
impl CurveLauncher {
    /// Initialize launcher with admin and curve WASM hash
    pub fn initialize(
        env: Env,
        admin: Address,
        curve_wasm_hash: BytesN<32>,
    ) -> Result<(), LauncherError> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(LauncherError::AlreadyInitialized);
        }

        admin.require_auth();

        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage()
            .instance()
            .set(&DataKey::CurveWasmHash, &curve_wasm_hash);
        env.storage().instance().set(&DataKey::CurveCount, &0u32);

        extend_instance_ttl(&env);
        Ok(())
    }

    /// Deploy and initialize a bonding curve for `asset`.
    /// Returns the curve contract address.
    ///
    /// The creator still has to move the curve supply to the returned address
    /// and have `reserve_holder` approve it before graduation.
    pub fn create_curve(
        env: Env,
        creator: Address,
        asset: Address,
        reserve_asset: Address,
        reserve_holder: Address,
        venue: Address,
        params: CurveParams,
    ) -> Result<Address, LauncherError> {
        let curve_wasm_hash: BytesN<32> = env
            .storage()
            .instance()
            .get(&DataKey::CurveWasmHash)
            .ok_or(LauncherError::NotInitialized)?;

        creator.require_auth();

        params
            .validate()
            .map_err(|_| LauncherError::InvalidParams)?;
        if asset == reserve_asset {
            return Err(LauncherError::InvalidParams);
        }

        let curve_key = DataKey::Curve(asset.clone());
        if env.storage().persistent().has(&curve_key) {
            return Err(LauncherError::CurveExists);
        }

        let curve_count: u32 = env
            .storage()
            .instance()
            .get(&DataKey::CurveCount)
            .unwrap_or(0);

        // Deterministic salt from the running count
        let mut salt_bytes = [0u8; 32];
        salt_bytes[0..4].copy_from_slice(&curve_count.to_be_bytes());
        let salt = BytesN::from_array(&env, &salt_bytes);

        let curve_address = env
            .deployer()
            .with_current_contract(salt)
            .deploy_v2(curve_wasm_hash, ());

        init_curve(
            &env,
            &curve_address,
            &env.current_contract_address(),
            &asset,
            &reserve_asset,
            &reserve_holder,
            &venue,
            &params,
        );

        env.storage().persistent().set(&curve_key, &curve_address);
        extend_persistent_ttl(&env, &curve_key);

        let curve_at_key = DataKey::CurveAt(curve_count);
        env.storage()
            .persistent()
            .set(&curve_at_key, &curve_address);
        extend_persistent_ttl(&env, &curve_at_key);

        env.storage()
            .instance()
            .set(&DataKey::CurveCount, &(curve_count + 1));

        env.events().publish(
            (Symbol::new(&env, "curve_created"), creator),
            (asset, reserve_asset, curve_address.clone()),
        );

        extend_instance_ttl(&env);
        Ok(curve_address)
    }

    /// Get curve address for an asset
    pub fn get_curve(env: Env, asset: Address) -> Option<Address> {
        env.storage().persistent().get(&DataKey::Curve(asset))
    }

    /// Get total number of curves created
    pub fn get_curve_count(env: Env) -> u32 {
        extend_instance_ttl(&env);
        env.storage()
            .instance()
            .get(&DataKey::CurveCount)
            .unwrap_or(0)
    }

    /// Get curve address at specific index
    pub fn get_curve_at(env: Env, index: u32) -> Option<Address> {
        env.storage().persistent().get(&DataKey::CurveAt(index))
    }

    /// Get curves with pagination.
    /// Returns up to `limit` curves starting from `start_index`; `limit` is
    /// capped at 50 to stay within Soroban's read entry limits.
    pub fn get_curves_paginated(env: Env, start_index: u32, limit: u32) -> Vec<Address> {
        let safe_limit = limit.min(MAX_PAGE);

        let curve_count: u32 = env
            .storage()
            .instance()
            .get(&DataKey::CurveCount)
            .unwrap_or(0);

        let end_index = start_index.saturating_add(safe_limit).min(curve_count);

        let mut curves: Vec<Address> = Vec::new(&env);
        for i in start_index..end_index {
            if let Some(curve) = env.storage().persistent().get(&DataKey::CurveAt(i)) {
                curves.push_back(curve);
            }
        }

        curves
    }

    /// Get admin address
    pub fn get_admin(env: Env) -> Result<Address, LauncherError> {
        extend_instance_ttl(&env);
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(LauncherError::NotInitialized)
    }

    /// Get curve WASM hash
    pub fn get_curve_wasm_hash(env: Env) -> Result<BytesN<32>, LauncherError> {
        extend_instance_ttl(&env);
        env.storage()
            .instance()
            .get(&DataKey::CurveWasmHash)
            .ok_or(LauncherError::NotInitialized)
    }
}

fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

// Curve initialization via invoke; the launcher is the curve's launcher
#[allow(clippy::too_many_arguments)]
fn init_curve(
    env: &Env,
    curve_address: &Address,
    launcher: &Address,
    asset: &Address,
    reserve_asset: &Address,
    reserve_holder: &Address,
    venue: &Address,
    params: &CurveParams,
) {
    env.invoke_contract::<()>(
        curve_address,
        &Symbol::new(env, "initialize"),
        (launcher, asset, reserve_asset, reserve_holder, venue, params.clone()).into_val(env),
    );
}
