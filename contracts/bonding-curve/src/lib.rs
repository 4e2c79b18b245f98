#![no_std]

mod events;
mod graduation;
mod guard;
mod invariants;
mod quote;
mod storage;
mod trade;
mod transfers;
mod venue;

mod certora_specs;

#[cfg(test)]
mod testutils;

pub use venue::{LiquidityVenue, VenueClient};

use curve_types::{
    BuyQuote, CurveConfig, CurveError, CurveParams, CurveState, GraduationRecord, SellQuote,
    TradeReceipt,
};
use soroban_sdk::{contract, contractimpl, Address, Env};
use storage::{get_config, get_graduation, get_state, is_initialized, set_config, set_state};

#[contract]
pub struct BondingCurve;

#[contractimpl]
impl BondingCurve {
    /// Initialize a new curve
    ///
    /// # Arguments
    /// * `launcher` - Contract (or account) that deployed this curve
    /// * `asset` - Asset sold by the curve; the curve must hold `curve_supply` of it
    /// * `reserve_asset` - Asset accepted in exchange
    /// * `reserve_holder` - Holder of the asset units set aside for the venue.
    ///   It must grant this curve an allowance before graduation.
    /// * `venue` - Liquidity venue that receives the graduated balances
    /// * `params` - Start price, target reserve, minimum purchase, curve supply
    pub fn initialize(
        env: Env,
        launcher: Address,
        asset: Address,
        reserve_asset: Address,
        reserve_holder: Address,
        venue: Address,
        params: CurveParams,
    ) -> Result<(), CurveError> {
        if is_initialized(&env) {
            return Err(CurveError::AlreadyInitialized);
        }
        launcher.require_auth();

        params.validate()?;
        if asset == reserve_asset {
            return Err(CurveError::InvalidParams);
        }

        let config = CurveConfig::new(launcher, asset, reserve_asset, reserve_holder, venue, &params);
        set_config(&env, &config);
        set_state(&env, &CurveState::new());
        Ok(())
    }

    /// Buy the asset with the reserve asset
    ///
    /// # Arguments
    /// * `buyer` - Pays the reserve asset and receives the asset
    /// * `reserve_in` - Reserve amount offered; may be partially used at the target
    /// * `min_asset_out` - Minimum asset amount accepted (0 to disable)
    pub fn buy(
        env: Env,
        buyer: Address,
        reserve_in: i128,
        min_asset_out: i128,
    ) -> Result<TradeReceipt, CurveError> {
        buyer.require_auth();
        trade::buy(&env, &buyer, reserve_in, min_asset_out)
    }

    /// Sell the asset back for the reserve asset
    ///
    /// # Arguments
    /// * `seller` - Pays the asset and receives the reserve asset
    /// * `asset_in` - Asset amount sold
    /// * `min_reserve_out` - Minimum reserve amount accepted (0 to disable)
    pub fn sell(
        env: Env,
        seller: Address,
        asset_in: i128,
        min_reserve_out: i128,
    ) -> Result<TradeReceipt, CurveError> {
        seller.require_auth();
        trade::sell(&env, &seller, asset_in, min_reserve_out)
    }

    /// Move the collected reserve and the reserve-of-record balance to the
    /// venue. Callable by anyone once the target has been reached.
    pub fn graduate(env: Env) -> Result<GraduationRecord, CurveError> {
        graduation::graduate(&env)
    }

    // === View Functions ===

    /// Get curve configuration
    pub fn get_config(env: Env) -> Result<CurveConfig, CurveError> {
        get_config(&env)
    }

    /// Get current accumulators and phase
    pub fn get_state(env: Env) -> Result<CurveState, CurveError> {
        get_state(&env)
    }

    /// Get current unit price, scaled by SCALE
    pub fn current_price(env: Env) -> Result<u128, CurveError> {
        let config = get_config(&env)?;
        let state = get_state(&env)?;
        quote::current_price(&env, &config, &state)
    }

    /// Asset units `reserve_in` buys at the current price (no target clamp)
    pub fn purchase_return(env: Env, reserve_in: i128) -> Result<i128, CurveError> {
        let config = get_config(&env)?;
        let state = get_state(&env)?;
        quote::purchase_amount(&env, &config, &state, reserve_in)
    }

    /// Reserve units `asset_in` sells for at the current price
    pub fn sale_return(env: Env, asset_in: i128) -> Result<i128, CurveError> {
        let config = get_config(&env)?;
        let state = get_state(&env)?;
        quote::sale_amount(&env, &config, &state, asset_in)
    }

    /// What `buy` would charge and deliver right now, target clamp included
    pub fn preview_buy(env: Env, reserve_in: i128) -> Result<BuyQuote, CurveError> {
        if reserve_in <= 0 {
            return Err(CurveError::InvalidAmount);
        }
        let config = get_config(&env)?;
        let state = get_state(&env)?;
        quote::quote_buy(&env, &config, &state, reserve_in)
    }

    /// What `sell` would pay right now
    pub fn preview_sell(env: Env, asset_in: i128) -> Result<SellQuote, CurveError> {
        if asset_in <= 0 {
            return Err(CurveError::InvalidAmount);
        }
        let config = get_config(&env)?;
        let state = get_state(&env)?;
        quote::quote_sell(&env, &config, &state, asset_in)
    }

    /// True while buys and sells are accepted
    pub fn is_trading_active(env: Env) -> Result<bool, CurveError> {
        Ok(get_state(&env)?.is_trading_active())
    }

    /// True once the curve has handed off to the venue
    pub fn is_graduated(env: Env) -> Result<bool, CurveError> {
        Ok(get_state(&env)?.is_graduated())
    }

    /// Graduation record, if the curve has graduated
    pub fn get_graduation(env: Env) -> Option<GraduationRecord> {
        get_graduation(&env)
    }

    /// Asset units currently held by the curve
    pub fn held_balance(env: Env) -> Result<i128, CurveError> {
        let config = get_config(&env)?;
        transfers::balance(&env, &config.asset, &env.current_contract_address())
    }

    /// Reserve units currently held by the curve
    pub fn reserve_balance(env: Env) -> Result<i128, CurveError> {
        let config = get_config(&env)?;
        transfers::balance(&env, &config.reserve_asset, &env.current_contract_address())
    }
}
