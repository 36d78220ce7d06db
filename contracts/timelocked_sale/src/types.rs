use soroban_sdk::{contracttype, Address, Env, Map};

/// Basis-point denominator for team/partner allocations.
pub const BPS_DENOMINATOR: i128 = 10_000;

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleAssets {
    pub token: Address,         // Asset being sold and vested
    pub payment_token: Address, // Asset contributed by buyers
    pub wallet: Address,        // Receives forwarded contributions
    pub token_wallet: Address,  // Vault that approved the sale to pull `token`
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleWindow {
    pub opening_time: u64,
    pub closing_time: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct ContributionLimits {
    pub min_contribution: i128,
    pub max_contribution: i128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct RaiseState {
    pub rate: i128, // Asset units per value unit
    pub cap: i128,
    pub total_raised: i128,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum DeliveryMode {
    /// Purchased tokens go straight to the beneficiary.
    Immediate,
    /// Purchased tokens are held in the beneficiary's vesting schedule.
    Locked,
}

/// Relative vesting terms; the absolute cliff is `start + cliff_duration`.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct LockTerms {
    pub cliff_duration: u64,
    pub duration: u64,
    pub revocable: bool,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct FundsConfig {
    pub team: Address,
    pub partners: Address,
    pub team_bps: u32,
    pub partners_bps: u32,
    pub team_terms: LockTerms,
    pub partners_terms: LockTerms,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleConfig {
    pub assets: SaleAssets,
    pub window: SaleWindow,
    pub limits: ContributionLimits,
    pub delivery: DeliveryMode,
    pub investor_terms: LockTerms,
    pub funds: FundsConfig,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[contracttype]
pub struct SaleFinalizationState {
    pub finalized: bool,
    pub token_team_amount: i128,
    pub token_partners_amount: i128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub enum LockId {
    Investor(Address),
    Team,
    Partners,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[contracttype]
pub struct LockedAsset {
    pub held: i128,     // Still inside the schedule
    pub released: i128, // Already paid out to the beneficiary
    pub revoked: bool,
}

impl LockedAsset {
    /// Everything the schedule has ever been credited with, net of refunds.
    pub fn total(&self) -> Option<i128> {
        self.held.checked_add(self.released)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct VestingSchedule {
    pub beneficiary: Address,
    pub controller: Address,
    pub start: u64,
    pub cliff: u64,
    pub duration: u64,
    pub revocable: bool,
    pub assets: Map<Address, LockedAsset>,
}

#[contracttype]
pub enum DataKey {
    Owner,
    Config,
    Raise,
    Finalization,
    Lock(LockId),
    InvestorLockCount,
    InvestorLock(u32),
}

pub fn get_ledger_timestamp(env: &Env) -> u64 {
    env.ledger().timestamp()
}
