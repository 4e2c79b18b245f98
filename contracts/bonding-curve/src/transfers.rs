use curve_types::CurveError;
use soroban_sdk::{token, Address, Env};

// Token calls go through the generated try_* methods so that a failing token
// surfaces as TransferFailed instead of aborting the invocation. Returning
// the error still rolls back everything the frame did before it.

pub fn transfer(
    env: &Env,
    token: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), CurveError> {
    let client = token::Client::new(env, token);
    match client.try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(CurveError::TransferFailed),
    }
}

/// Move `amount` out of `from` using the allowance `from` granted the curve
pub fn transfer_from(
    env: &Env,
    token: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), CurveError> {
    let client = token::Client::new(env, token);
    let spender = env.current_contract_address();
    match client.try_transfer_from(&spender, from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(CurveError::TransferFailed),
    }
}

pub fn balance(env: &Env, token: &Address, id: &Address) -> Result<i128, CurveError> {
    let client = token::Client::new(env, token);
    match client.try_balance(id) {
        Ok(Ok(balance)) => Ok(balance),
        _ => Err(CurveError::TransferFailed),
    }
}
