use soroban_sdk::contracterror;

/// Errors returned by the bonding curve and the math helpers it uses.
///
/// Codes are grouped by kind so that clients can classify a failure
/// without matching every variant:
/// - 1..=9   validation, rejected before any state is read
/// - 10..=19 state, rejected after a cheap phase/lock check
/// - 20..=29 arithmetic boundary conditions
/// - 30..=39 accounting consistency
/// - 40..=49 failed calls into other contracts
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CurveError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidParams = 3,
    InvalidAmount = 4,
    BelowMinimum = 5,
    SlippageExceeded = 6,

    TradingClosed = 10,
    AlreadyGraduated = 11,
    NotReady = 12,
    ReentrancyBlocked = 13,

    PriceUndefined = 20,
    DivisionByZero = 21,
    ZeroReturn = 22,
    MathOverflow = 23,

    InsufficientReserve = 30,
    InsufficientSupply = 31,
    AccumulatorUnderflow = 32,

    TransferFailed = 40,
    HandoffFailed = 41,
}

impl CurveError {
    /// True for errors that mean the curve's books and balances disagree
    pub fn is_consistency(&self) -> bool {
        (30..40).contains(&(*self as u32))
    }

    /// True for failures of an external token or venue call
    pub fn is_external(&self) -> bool {
        (40..50).contains(&(*self as u32))
    }
}
