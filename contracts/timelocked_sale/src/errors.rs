use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidConfig = 3,
    InvalidAmount = 4,
    InvalidBeneficiary = 5,
    /// Purchase attempted before the opening time.
    SaleNotOpen = 6,
    /// Purchase attempted at or after the closing time.
    SaleEnded = 7,
    BelowMinimumContribution = 8,
    AboveMaximumContribution = 9,
    CapExceeded = 10,
    AlreadyFinalized = 11,
    NotYetClosable = 12,
    NothingToRelease = 13,
    NotRevocable = 14,
    AlreadyRevoked = 15,
    Unauthorized = 16,
    LedgerTransferFailed = 17,
    ScheduleNotFound = 18,
    InvalidIndex = 19,
    ArithmeticOverflow = 20,
    /// The lock has never held the requested asset.
    AssetNotLocked = 21,
}
