use soroban_sdk::contracttype;

/// Quote for a buy, after the target boundary clamp
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BuyQuote {
    /// Reserve that will actually be charged (may be less than requested)
    pub reserve_in: i128,
    /// Asset units the buyer receives
    pub asset_out: i128,
    /// Unit price the quote was computed at
    pub price: u128,
    /// True if this buy lands reserve_collected on the target
    pub fills_target: bool,
}

/// Quote for a sell
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SellQuote {
    pub asset_in: i128,
    pub reserve_out: i128,
    pub price: u128,
}

/// Result of an executed buy or sell
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TradeReceipt {
    /// Asset units moved (to the buyer, or from the seller)
    pub asset_amount: i128,
    /// Reserve units moved (from the buyer, or to the seller)
    pub reserve_amount: i128,
    /// Unit price after the trade
    pub price_after: u128,
}
