use curve_math::{from_amount, purchase_return, sale_return, to_amount, unit_price};
use curve_types::{BuyQuote, CurveConfig, CurveError, CurveState, SellQuote};
use soroban_sdk::Env;

/// Current unit price for the given accumulators
pub fn current_price(env: &Env, config: &CurveConfig, state: &CurveState) -> Result<u128, CurveError> {
    unit_price(
        env,
        from_amount(config.curve_supply)?,
        from_amount(state.amount_sold)?,
        config.start_price,
    )
}

pub fn ensure_trading(state: &CurveState) -> Result<(), CurveError> {
    if !state.is_trading_active() {
        return Err(CurveError::TradingClosed);
    }
    Ok(())
}

/// Asset units `reserve_in` buys at the current price, ignoring the target
pub fn purchase_amount(
    env: &Env,
    config: &CurveConfig,
    state: &CurveState,
    reserve_in: i128,
) -> Result<i128, CurveError> {
    ensure_trading(state)?;
    let price = current_price(env, config, state)?;
    to_amount(purchase_return(env, from_amount(reserve_in)?, price)?)
}

/// Reserve units `asset_in` sells for at the current price
pub fn sale_amount(
    env: &Env,
    config: &CurveConfig,
    state: &CurveState,
    asset_in: i128,
) -> Result<i128, CurveError> {
    ensure_trading(state)?;
    let price = current_price(env, config, state)?;
    to_amount(sale_return(env, from_amount(asset_in)?, price)?)
}

/// Quote a buy, clamping the charged reserve so that reserve_collected lands
/// exactly on the target instead of crossing it.
pub fn quote_buy(
    env: &Env,
    config: &CurveConfig,
    state: &CurveState,
    reserve_in: i128,
) -> Result<BuyQuote, CurveError> {
    ensure_trading(state)?;

    let remaining = state.reserve_remaining(config.target_reserve);
    let (charged, fills_target) = if reserve_in >= remaining {
        (remaining, true)
    } else {
        (reserve_in, false)
    };

    let price = current_price(env, config, state)?;
    let asset_out = to_amount(purchase_return(env, from_amount(charged)?, price)?)?;

    let available = config
        .curve_supply
        .checked_sub(state.amount_sold)
        .ok_or(CurveError::AccumulatorUnderflow)?;
    if asset_out > available {
        return Err(CurveError::InsufficientSupply);
    }

    Ok(BuyQuote {
        reserve_in: charged,
        asset_out,
        price,
        fills_target,
    })
}

/// Quote a sell. Sells are never clamped: a sale of more units than the curve
/// has sold, or one the books cannot cover, is rejected with
/// InsufficientReserve.
pub fn quote_sell(
    env: &Env,
    config: &CurveConfig,
    state: &CurveState,
    asset_in: i128,
) -> Result<SellQuote, CurveError> {
    ensure_trading(state)?;

    if asset_in > state.amount_sold {
        return Err(CurveError::InsufficientReserve);
    }

    let price = current_price(env, config, state)?;
    let reserve_out = to_amount(sale_return(env, from_amount(asset_in)?, price)?)?;

    if reserve_out > state.reserve_collected {
        return Err(CurveError::InsufficientReserve);
    }

    Ok(SellQuote {
        asset_in,
        reserve_out,
        price,
    })
}
