use crate::errors::Error;
use crate::types::*;
use soroban_sdk::{Address, Env, Vec};

const DAY_IN_LEDGERS: u32 = 17_280;
/// Lock entries are kept alive for 120 days past their last write.
pub(crate) const LOCK_BUMP_AMOUNT: u32 = 120 * DAY_IN_LEDGERS;
pub(crate) const LOCK_LIFETIME_THRESHOLD: u32 = LOCK_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<SaleConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn set_config(env: &Env, config: &SaleConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_owner(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(Error::NotInitialized)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn get_raise(env: &Env) -> Result<RaiseState, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Raise)
        .ok_or(Error::NotInitialized)
}

pub fn set_raise(env: &Env, raise: &RaiseState) {
    env.storage().instance().set(&DataKey::Raise, raise);
}

pub fn get_finalization(env: &Env) -> SaleFinalizationState {
    env.storage()
        .instance()
        .get(&DataKey::Finalization)
        .unwrap_or_default()
}

pub fn set_finalization(env: &Env, state: &SaleFinalizationState) {
    env.storage()
        .instance()
        .set(&DataKey::Finalization, state);
}

pub fn get_schedule(env: &Env, lock: &LockId) -> Option<VestingSchedule> {
    env.storage()
        .persistent()
        .get(&DataKey::Lock(lock.clone()))
}

pub fn set_schedule(env: &Env, lock: &LockId, schedule: &VestingSchedule) {
    let key = DataKey::Lock(lock.clone());
    env.storage().persistent().set(&key, schedule);
    env.storage()
        .persistent()
        .extend_ttl(&key, LOCK_LIFETIME_THRESHOLD, LOCK_BUMP_AMOUNT);
}

pub fn get_investor_lock_count(env: &Env) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::InvestorLockCount)
        .unwrap_or(0)
}

/// Investor lock beneficiaries in the order their locks were opened.
pub fn get_investor_locks(env: &Env) -> Vec<Address> {
    let mut locks = Vec::new(env);
    for i in 0..get_investor_lock_count(env) {
        if let Some(beneficiary) = env.storage().persistent().get(&DataKey::InvestorLock(i)) {
            locks.push_back(beneficiary);
        }
    }
    locks
}

pub fn push_investor_lock(env: &Env, beneficiary: &Address) {
    let count = get_investor_lock_count(env);
    let key = DataKey::InvestorLock(count);
    env.storage().persistent().set(&key, beneficiary);
    env.storage()
        .persistent()
        .extend_ttl(&key, LOCK_LIFETIME_THRESHOLD, LOCK_BUMP_AMOUNT);

    let count_key = DataKey::InvestorLockCount;
    env.storage().persistent().set(&count_key, &(count + 1));
    env.storage()
        .persistent()
        .extend_ttl(&count_key, LOCK_LIFETIME_THRESHOLD, LOCK_BUMP_AMOUNT);
}
