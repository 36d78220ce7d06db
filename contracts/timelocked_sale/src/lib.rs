#![no_std]

mod admission;
mod contract;
mod errors;
mod events;
mod finalization;
mod ledger;
mod storage;
mod types;
mod validator;
mod vesting;


pub use contract::{TimelockedSaleContract, TimelockedSaleContractClient};
pub use errors::Error;
pub use types::{
    ContributionLimits, DeliveryMode, FundsConfig, LockId, LockTerms, LockedAsset, RaiseState,
    SaleAssets, SaleConfig, SaleFinalizationState, SaleWindow, VestingSchedule,
};
