use soroban_sdk::{contractclient, Address, Env};

/// Interface the liquidity venue exposes to graduating curves.
///
/// The curve transfers `asset_amount` of `asset` and `reserve_amount` of
/// `reserve_asset` to the venue before calling `accept_graduation`. The venue
/// returns `true` once it has taken ownership of both. The call is made once
/// per curve and is not idempotent on the venue side.
#[allow(unused)]
#[contractclient(name = "VenueClient")]
pub trait LiquidityVenue {
    fn accept_graduation(
        env: Env,
        asset: Address,
        reserve_asset: Address,
        asset_amount: i128,
        reserve_amount: i128,
    ) -> bool;
}
