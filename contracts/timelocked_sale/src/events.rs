use crate::types::LockId;
use soroban_sdk::{symbol_short, Address, Env};

pub fn sale_initialized(env: &Env, token: &Address, wallet: &Address, rate: i128, cap: i128) {
    env.events().publish(
        (symbol_short!("init"),),
        (token.clone(), wallet.clone(), rate, cap),
    );
}

pub fn tokens_purchased(
    env: &Env,
    purchaser: &Address,
    beneficiary: &Address,
    value: i128,
    amount: i128,
) {
    env.events().publish(
        (symbol_short!("purchase"), beneficiary.clone()),
        (purchaser.clone(), value, amount),
    );
}

pub fn tokens_locked(env: &Env, lock: &LockId, asset: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("locked"),),
        (lock.clone(), asset.clone(), amount),
    );
}

pub fn tokens_released(env: &Env, lock: &LockId, asset: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("released"),),
        (lock.clone(), asset.clone(), amount),
    );
}

pub fn vesting_revoked(env: &Env, lock: &LockId, asset: &Address, refund: i128) {
    env.events().publish(
        (symbol_short!("revoked"),),
        (lock.clone(), asset.clone(), refund),
    );
}

pub fn sale_finalized(env: &Env, team_amount: i128, partners_amount: i128) {
    env.events().publish(
        (symbol_short!("finalized"),),
        (team_amount, partners_amount),
    );
}

pub fn schedule_deposit(env: &Env, lock: &LockId, from: &Address, asset: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("deposit"),),
        (lock.clone(), from.clone(), asset.clone(), amount),
    );
}
