use crate::events;
use crate::guard::non_reentrant;
use crate::invariants::phase_consistent;
use crate::storage::{get_config, get_state, set_graduation, set_state};
use crate::transfers::{balance, transfer, transfer_from};
use crate::venue::VenueClient;
use curve_types::{CurveConfig, CurveError, GraduationRecord, Phase};
use soroban_sdk::{log, Env};

/// Hand the collected reserve and the reserve-of-record asset balance to the
/// venue, then mark the curve graduated.
///
/// The graduated phase is only written after the venue accepted. Any failure
/// returns an error, which rolls back the transfers already made, so a failed
/// attempt leaves the curve exactly as it was and can be retried.
pub fn graduate(env: &Env) -> Result<GraduationRecord, CurveError> {
    let config = get_config(env)?;

    non_reentrant(env, || {
        let mut state = get_state(env)?;

        if state.is_graduated() {
            return Err(CurveError::AlreadyGraduated);
        }
        if state.reserve_collected < config.target_reserve {
            return Err(CurveError::NotReady);
        }

        debug_assert!(phase_consistent(&state, config.target_reserve));

        let asset_amount = balance(env, &config.asset, &config.reserve_holder)?;
        let reserve_amount = state.reserve_collected;

        if let Err(err) = hand_off(env, &config, asset_amount, reserve_amount) {
            log!(env, "graduation hand-off failed", err as u32, reserve_amount);
            return Err(err);
        }

        state.phase = Phase::Graduated;
        // The reserve now sits with the venue; the books keep mirroring the
        // curve's own balance
        state.reserve_collected = 0;
        set_state(env, &state);

        let record = GraduationRecord {
            asset_amount,
            reserve_amount,
            ledger: env.ledger().sequence(),
        };
        set_graduation(env, &record);

        log!(env, "curve graduated", asset_amount, reserve_amount);
        events::graduated(env, asset_amount, reserve_amount);

        Ok(record)
    })
}

fn hand_off(
    env: &Env,
    config: &CurveConfig,
    asset_amount: i128,
    reserve_amount: i128,
) -> Result<(), CurveError> {
    let contract = env.current_contract_address();

    transfer(env, &config.reserve_asset, &contract, &config.venue, reserve_amount)?;
    if asset_amount > 0 {
        transfer_from(env, &config.asset, &config.reserve_holder, &config.venue, asset_amount)?;
    }

    let venue = VenueClient::new(env, &config.venue);
    match venue.try_accept_graduation(
        &config.asset,
        &config.reserve_asset,
        &asset_amount,
        &reserve_amount,
    ) {
        Ok(Ok(true)) => Ok(()),
        _ => Err(CurveError::HandoffFailed),
    }
}
