use crate::{BondingCurve, BondingCurveClient};
use curve_types::{CurveParams, SCALE};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{contract, contractimpl, contracttype, Address, Env};

pub const CURVE_SUPPLY: i128 = 750_000_000;
pub const RESERVE_OF_RECORD: i128 = 200_000_000;
pub const TARGET_RESERVE: i128 = 1_000;

#[contracttype]
#[derive(Clone)]
enum VenueKey {
    Accept,
    Calls,
}

/// Venue that accepts (or refuses) graduations and counts them
#[contract]
pub struct MockVenue;

#[contractimpl]
impl MockVenue {
    pub fn set_accept(env: Env, accept: bool) {
        env.storage().instance().set(&VenueKey::Accept, &accept);
    }

    pub fn calls(env: Env) -> u32 {
        env.storage().instance().get(&VenueKey::Calls).unwrap_or(0)
    }

    pub fn accept_graduation(
        env: Env,
        _asset: Address,
        _reserve_asset: Address,
        _asset_amount: i128,
        _reserve_amount: i128,
    ) -> bool {
        let accept = env
            .storage()
            .instance()
            .get(&VenueKey::Accept)
            .unwrap_or(true);
        if accept {
            let calls: u32 = env.storage().instance().get(&VenueKey::Calls).unwrap_or(0);
            env.storage().instance().set(&VenueKey::Calls, &(calls + 1));
        }
        accept
    }
}

/// Venue whose hook always traps
#[contract]
pub struct PanickingVenue;

#[contractimpl]
impl PanickingVenue {
    pub fn accept_graduation(
        _env: Env,
        _asset: Address,
        _reserve_asset: Address,
        _asset_amount: i128,
        _reserve_amount: i128,
    ) -> bool {
        panic!("venue offline")
    }
}

pub fn default_params() -> CurveParams {
    CurveParams {
        start_price: SCALE,
        target_reserve: TARGET_RESERVE,
        min_purchase: 1,
        curve_supply: CURVE_SUPPLY,
    }
}

/// A funded, initialized curve with both assets and a venue
pub struct Setup<'a> {
    pub env: Env,
    pub curve: BondingCurveClient<'a>,
    pub asset: TokenClient<'a>,
    pub reserve: TokenClient<'a>,
    pub asset_admin: StellarAssetClient<'a>,
    pub reserve_admin: StellarAssetClient<'a>,
    pub reserve_holder: Address,
    pub venue: Address,
}

impl<'a> Setup<'a> {
    pub fn new(params: CurveParams) -> Self {
        Self::build(params, |env| env.register(MockVenue, ()))
    }

    pub fn with_panicking_venue(params: CurveParams) -> Self {
        Self::build(params, |env| env.register(PanickingVenue, ()))
    }

    fn build<F>(params: CurveParams, register_venue: F) -> Self
    where
        F: FnOnce(&Env) -> Address,
    {
        let env = Env::default();
        env.mock_all_auths();

        let admin = Address::generate(&env);
        let asset_id = env.register_stellar_asset_contract_v2(admin.clone()).address();
        let reserve_id = env.register_stellar_asset_contract_v2(admin.clone()).address();
        let asset = TokenClient::new(&env, &asset_id);
        let reserve = TokenClient::new(&env, &reserve_id);
        let asset_admin = StellarAssetClient::new(&env, &asset_id);
        let reserve_admin = StellarAssetClient::new(&env, &reserve_id);

        let venue = register_venue(&env);
        let curve_id = env.register(BondingCurve, ());
        let curve = BondingCurveClient::new(&env, &curve_id);

        let launcher = Address::generate(&env);
        let reserve_holder = Address::generate(&env);
        curve.initialize(&launcher, &asset_id, &reserve_id, &reserve_holder, &venue, &params);

        // Curve allotment and the reserve-of-record set aside for the venue
        asset_admin.mint(&curve_id, &params.curve_supply);
        asset_admin.mint(&reserve_holder, &RESERVE_OF_RECORD);
        let expiration = env.ledger().sequence() + 10_000;
        asset.approve(&reserve_holder, &curve_id, &RESERVE_OF_RECORD, &expiration);

        Self {
            env,
            curve,
            asset,
            reserve,
            asset_admin,
            reserve_admin,
            reserve_holder,
            venue,
        }
    }

    /// New account funded with `reserve` units of the reserve asset
    pub fn trader(&self, reserve: i128) -> Address {
        let trader = Address::generate(&self.env);
        if reserve > 0 {
            self.reserve_admin.mint(&trader, &reserve);
        }
        trader
    }

    pub fn venue_client(&self) -> MockVenueClient<'a> {
        MockVenueClient::new(&self.env, &self.venue)
    }

    /// Fill the curve up to its target with a single buy
    pub fn fill_target(&self) -> Address {
        let target = self.curve.get_config().target_reserve;
        let buyer = self.trader(target);
        self.curve.buy(&buyer, &target, &0);
        buyer
    }
}
