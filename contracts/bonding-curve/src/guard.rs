use crate::storage::{is_locked, set_locked};
use curve_types::CurveError;
use soroban_sdk::Env;

/// Run `f` while holding the curve's reentrancy lock.
///
/// A nested call into any guarded entry point fails fast with
/// `ReentrancyBlocked`. The lock is cleared before returning, whether `f`
/// succeeded or not. This is independent of the trading phase check, which
/// every entry point still performs inside `f`.
pub fn non_reentrant<T, F>(env: &Env, f: F) -> Result<T, CurveError>
where
    F: FnOnce() -> Result<T, CurveError>,
{
    if is_locked(env) {
        return Err(CurveError::ReentrancyBlocked);
    }

    set_locked(env, true);
    let result = f();
    set_locked(env, false);

    result
}
