use crate::CurveError;
use soroban_sdk::{contracttype, Address};

/// Launch parameters - fixed when the curve is initialized
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CurveParams {
    /// Unit price at zero units sold, scaled by SCALE
    pub start_price: u128,
    /// Reserve inflow that ends the active trading phase
    pub target_reserve: i128,
    /// Smallest reserve amount accepted by a buy
    pub min_purchase: i128,
    /// Asset units allotted to the curve, the pricing denominator
    pub curve_supply: i128,
}

impl CurveParams {
    pub fn validate(&self) -> Result<(), CurveError> {
        if self.start_price == 0
            || self.target_reserve <= 0
            || self.min_purchase <= 0
            || self.curve_supply <= 0
        {
            return Err(CurveError::InvalidParams);
        }
        Ok(())
    }
}

/// Curve configuration - immutable after initialization
#[contracttype]
#[derive(Clone, Debug)]
pub struct CurveConfig {
    /// Launcher that deployed this curve
    pub launcher: Address,
    /// Asset sold by the curve
    pub asset: Address,
    /// Asset accepted in exchange
    pub reserve_asset: Address,
    /// Holder of the asset units set aside for the venue
    pub reserve_holder: Address,
    /// Liquidity venue that receives the graduated balances
    pub venue: Address,
    pub start_price: u128,
    pub target_reserve: i128,
    pub min_purchase: i128,
    pub curve_supply: i128,
}

impl CurveConfig {
    pub fn new(
        launcher: Address,
        asset: Address,
        reserve_asset: Address,
        reserve_holder: Address,
        venue: Address,
        params: &CurveParams,
    ) -> Self {
        Self {
            launcher,
            asset,
            reserve_asset,
            reserve_holder,
            venue,
            start_price: params.start_price,
            target_reserve: params.target_reserve,
            min_purchase: params.min_purchase,
            curve_supply: params.curve_supply,
        }
    }

    pub fn params(&self) -> CurveParams {
        CurveParams {
            start_price: self.start_price,
            target_reserve: self.target_reserve,
            min_purchase: self.min_purchase,
            curve_supply: self.curve_supply,
        }
    }
}

/// Trading phase. Only ever moves forward:
/// Active -> TargetReached -> Graduated
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Phase {
    Active,
    TargetReached,
    Graduated,
}

/// Mutable curve accumulators - stored in Instance storage
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CurveState {
    /// Asset units held by buyers, net of units sold back
    pub amount_sold: i128,
    /// Reserve held by the curve from net buy activity
    pub reserve_collected: i128,
    pub phase: Phase,
}

impl CurveState {
    pub fn new() -> Self {
        Self {
            amount_sold: 0,
            reserve_collected: 0,
            phase: Phase::Active,
        }
    }

    pub fn is_trading_active(&self) -> bool {
        self.phase == Phase::Active
    }

    pub fn is_graduated(&self) -> bool {
        self.phase == Phase::Graduated
    }

    /// Remaining reserve the curve accepts before the target is hit
    pub fn reserve_remaining(&self, target_reserve: i128) -> i128 {
        (target_reserve - self.reserve_collected).max(0)
    }
}

impl Default for CurveState {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of a successful graduation
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GraduationRecord {
    /// Reserve-of-record asset units handed to the venue
    pub asset_amount: i128,
    /// Reserve units handed to the venue
    pub reserve_amount: i128,
    /// Ledger sequence the hand-off happened in
    pub ledger: u32,
}
