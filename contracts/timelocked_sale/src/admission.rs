use crate::errors::Error;
use crate::events;
use crate::ledger;
use crate::storage::*;
use crate::types::*;
use crate::validator;
use crate::vesting;
use soroban_sdk::{log, Address, Env};

/// Asset bought by `value`; truncating, never rounds up.
pub fn token_amount(raise: &RaiseState, value: i128) -> Result<i128, Error> {
    value.checked_mul(raise.rate).ok_or(Error::ArithmeticOverflow)
}

/// Accepts `value` of the payment asset from `purchaser` and delivers the
/// purchased tokens to `beneficiary`, either directly or into its lock.
///
/// Checks run in a fixed order and the first failure wins: finalized,
/// window, per-call limits, cap, then (locked delivery only) a revoked
/// beneficiary lock. Nothing moves until all of them pass.
pub fn buy_tokens(
    env: &Env,
    purchaser: &Address,
    beneficiary: &Address,
    value: i128,
) -> Result<i128, Error> {
    purchaser.require_auth();

    let config = get_config(env)?;
    let mut raise = get_raise(env)?;

    if value <= 0 {
        return Err(Error::InvalidAmount);
    }
    if *beneficiary == env.current_contract_address() {
        return Err(Error::InvalidBeneficiary);
    }

    let now = get_ledger_timestamp(env);
    if get_finalization(env).finalized {
        return Err(Error::AlreadyFinalized);
    }
    if let Err(e) = validator::is_open(&config.window, now) {
        log!(env, "purchase outside sale window", now);
        return Err(e);
    }
    validator::within_limits(&config.limits, value)?;
    validator::cap_ok(&raise, value)?;
    if config.delivery == DeliveryMode::Locked {
        ensure_lock_accepts(env, &config.assets.token, beneficiary)?;
    }

    let amount = token_amount(&raise, value)?;
    raise.total_raised += value;
    set_raise(env, &raise);

    ledger::transfer_from_signer(
        env,
        &config.assets.payment_token,
        purchaser,
        &config.assets.wallet,
        value,
    )?;

    match config.delivery {
        DeliveryMode::Immediate => {
            ledger::pull_allowance(
                env,
                &config.assets.token,
                &config.assets.token_wallet,
                beneficiary,
                amount,
            )?;
        }
        DeliveryMode::Locked => lock_purchase(env, &config, beneficiary, amount, now)?,
    }

    events::tokens_purchased(env, purchaser, beneficiary, value, amount);
    Ok(amount)
}

/// A beneficiary whose lock was revoked for the sale token cannot receive
/// more of it through that lock.
fn ensure_lock_accepts(env: &Env, token: &Address, beneficiary: &Address) -> Result<(), Error> {
    let lock = LockId::Investor(beneficiary.clone());
    match get_schedule(env, &lock) {
        Some(schedule) if vesting::locked_asset(&schedule, token).revoked => {
            log!(env, "purchase into revoked lock", beneficiary.clone());
            Err(Error::AlreadyRevoked)
        }
        _ => Ok(()),
    }
}

/// Moves purchased tokens into the beneficiary's lock, opening it on the
/// first purchase. Later purchases keep the original start time.
fn lock_purchase(
    env: &Env,
    config: &SaleConfig,
    beneficiary: &Address,
    amount: i128,
    now: u64,
) -> Result<(), Error> {
    let lock = LockId::Investor(beneficiary.clone());
    let mut schedule = match get_schedule(env, &lock) {
        Some(existing) => existing,
        None => {
            let owner = get_owner(env)?;
            push_investor_lock(env, beneficiary);
            vesting::open_schedule(env, &lock, beneficiary, &owner, now, &config.investor_terms)?
        }
    };

    ledger::pull_allowance(
        env,
        &config.assets.token,
        &config.assets.token_wallet,
        &env.current_contract_address(),
        amount,
    )?;
    vesting::credit(env, &lock, &mut schedule, &config.assets.token, amount)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_token_amount_uses_fixed_rate() {
        let raise = RaiseState {
            rate: 500,
            cap: 70,
            total_raised: 0,
        };
        assert_eq!(token_amount(&raise, 2), Ok(1000));
        assert_eq!(
            token_amount(&raise, i128::MAX),
            Err(Error::ArithmeticOverflow)
        );
    }
}
