use crate::events;
use crate::guard::non_reentrant;
use crate::invariants::sold_within_supply;
use crate::quote::{current_price, quote_buy, quote_sell};
use crate::storage::{get_config, get_state, set_state};
use crate::transfers::{balance, transfer};
use curve_types::{CurveError, Phase, TradeReceipt};
use soroban_sdk::{log, Address, Env};

/// Buy asset units with up to `reserve_in` of the reserve asset.
///
/// If the buy would carry reserve_collected past the target, only the part
/// that lands it exactly on the target is charged, and the asset amount is
/// priced for that part. The buy that reaches the target closes trading.
pub fn buy(
    env: &Env,
    buyer: &Address,
    reserve_in: i128,
    min_asset_out: i128,
) -> Result<TradeReceipt, CurveError> {
    if reserve_in <= 0 || min_asset_out < 0 {
        return Err(CurveError::InvalidAmount);
    }

    let config = get_config(env)?;
    if reserve_in < config.min_purchase {
        return Err(CurveError::BelowMinimum);
    }

    non_reentrant(env, || {
        let mut state = get_state(env)?;
        let quote = quote_buy(env, &config, &state, reserve_in)?;

        if quote.asset_out < min_asset_out {
            return Err(CurveError::SlippageExceeded);
        }

        let amount_sold = state
            .amount_sold
            .checked_add(quote.asset_out)
            .ok_or(CurveError::MathOverflow)?;
        let reserve_collected = state
            .reserve_collected
            .checked_add(quote.reserve_in)
            .ok_or(CurveError::MathOverflow)?;
        if !sold_within_supply(amount_sold, config.curve_supply) {
            return Err(CurveError::InsufficientSupply);
        }

        let contract = env.current_contract_address();
        transfer(env, &config.reserve_asset, buyer, &contract, quote.reserve_in)?;
        transfer(env, &config.asset, &contract, buyer, quote.asset_out)?;

        state.amount_sold = amount_sold;
        state.reserve_collected = reserve_collected;
        if state.reserve_collected >= config.target_reserve {
            state.phase = Phase::TargetReached;
            log!(env, "target reserve reached", state.reserve_collected);
        }
        set_state(env, &state);

        let price_after = current_price(env, &config, &state)?;
        events::purchase(env, buyer, quote.asset_out, quote.reserve_in);
        events::price_updated(env, price_after);

        Ok(TradeReceipt {
            asset_amount: quote.asset_out,
            reserve_amount: quote.reserve_in,
            price_after,
        })
    })
}

/// Sell `asset_in` units back to the curve for the reserve asset.
pub fn sell(
    env: &Env,
    seller: &Address,
    asset_in: i128,
    min_reserve_out: i128,
) -> Result<TradeReceipt, CurveError> {
    if asset_in <= 0 || min_reserve_out < 0 {
        return Err(CurveError::InvalidAmount);
    }

    let config = get_config(env)?;

    non_reentrant(env, || {
        let mut state = get_state(env)?;
        let quote = quote_sell(env, &config, &state, asset_in)?;

        if quote.reserve_out < min_reserve_out {
            return Err(CurveError::SlippageExceeded);
        }

        let contract = env.current_contract_address();
        let reserve_balance = balance(env, &config.reserve_asset, &contract)?;
        if quote.reserve_out > reserve_balance {
            return Err(CurveError::InsufficientReserve);
        }

        // Underflow here means the books were already wrong, never clamp it
        let amount_sold = state
            .amount_sold
            .checked_sub(asset_in)
            .filter(|sold| *sold >= 0)
            .ok_or(CurveError::AccumulatorUnderflow)?;
        let reserve_collected = state
            .reserve_collected
            .checked_sub(quote.reserve_out)
            .filter(|collected| *collected >= 0)
            .ok_or(CurveError::AccumulatorUnderflow)?;

        transfer(env, &config.asset, seller, &contract, asset_in)?;
        transfer(env, &config.reserve_asset, &contract, seller, quote.reserve_out)?;

        state.amount_sold = amount_sold;
        state.reserve_collected = reserve_collected;
        set_state(env, &state);

        let price_after = current_price(env, &config, &state)?;
        events::sale(env, seller, asset_in, quote.reserve_out);
        events::price_updated(env, price_after);

        Ok(TradeReceipt {
            asset_amount: asset_in,
            reserve_amount: quote.reserve_out,
            price_after,
        })
    })
}
