use crate::errors::Error;
use crate::events;
use crate::ledger;
use crate::storage::{get_schedule, set_schedule};
use crate::types::*;
use soroban_sdk::{log, Address, Env, Map};

/// Linear vesting of `total` units.
///
/// Accrual runs from `start`; the cliff only withholds it, so the first
/// release after the cliff pays out everything accrued since `start`.
/// Division truncates. A revoked asset is fully vested because its `total`
/// has already been cut down to what was vested at revocation.
pub fn vested_amount_at(
    total: i128,
    start: u64,
    cliff: u64,
    duration: u64,
    revoked: bool,
    now: u64,
) -> Result<i128, Error> {
    if now < cliff {
        return Ok(0);
    }
    let end = start.checked_add(duration).ok_or(Error::ArithmeticOverflow)?;
    if revoked || now >= end {
        return Ok(total);
    }

    let elapsed = now.saturating_sub(start);
    let accrued = total
        .checked_mul(elapsed as i128)
        .ok_or(Error::ArithmeticOverflow)?;
    Ok(accrued / duration as i128)
}

pub fn locked_asset(schedule: &VestingSchedule, asset: &Address) -> LockedAsset {
    schedule.assets.get(asset.clone()).unwrap_or_default()
}

pub fn vested_amount(schedule: &VestingSchedule, asset: &Address, now: u64) -> Result<i128, Error> {
    let entry = locked_asset(schedule, asset);
    let total = entry.total().ok_or(Error::ArithmeticOverflow)?;
    vested_amount_at(
        total,
        schedule.start,
        schedule.cliff,
        schedule.duration,
        entry.revoked,
        now,
    )
}

pub fn releasable_amount(
    schedule: &VestingSchedule,
    asset: &Address,
    now: u64,
) -> Result<i128, Error> {
    let vested = vested_amount(schedule, asset, now)?;
    Ok(vested.saturating_sub(locked_asset(schedule, asset).released))
}

pub fn load(env: &Env, lock: &LockId) -> Result<VestingSchedule, Error> {
    get_schedule(env, lock).ok_or(Error::ScheduleNotFound)
}

/// Creates an empty schedule for `lock` starting at `start`.
pub fn open_schedule(
    env: &Env,
    lock: &LockId,
    beneficiary: &Address,
    controller: &Address,
    start: u64,
    terms: &LockTerms,
) -> Result<VestingSchedule, Error> {
    let cliff = start
        .checked_add(terms.cliff_duration)
        .ok_or(Error::ArithmeticOverflow)?;

    let schedule = VestingSchedule {
        beneficiary: beneficiary.clone(),
        controller: controller.clone(),
        start,
        cliff,
        duration: terms.duration,
        revocable: terms.revocable,
        assets: Map::new(env),
    };
    set_schedule(env, lock, &schedule);
    Ok(schedule)
}

/// Records `amount` of `asset` as held by the schedule. The caller must
/// already have moved the tokens into the contract.
pub fn credit(
    env: &Env,
    lock: &LockId,
    schedule: &mut VestingSchedule,
    asset: &Address,
    amount: i128,
) -> Result<(), Error> {
    let mut entry = locked_asset(schedule, asset);
    if entry.revoked {
        return Err(Error::AlreadyRevoked);
    }
    entry.held = entry
        .held
        .checked_add(amount)
        .ok_or(Error::ArithmeticOverflow)?;
    schedule.assets.set(asset.clone(), entry);
    set_schedule(env, lock, schedule);

    events::tokens_locked(env, lock, asset, amount);
    Ok(())
}

/// Tops up an existing schedule with any asset.
pub fn deposit(
    env: &Env,
    from: &Address,
    lock: &LockId,
    asset: &Address,
    amount: i128,
) -> Result<(), Error> {
    from.require_auth();

    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }
    let mut schedule = load(env, lock)?;
    if locked_asset(&schedule, asset).revoked {
        return Err(Error::AlreadyRevoked);
    }

    ledger::transfer_from_signer(env, asset, from, &env.current_contract_address(), amount)?;
    credit(env, lock, &mut schedule, asset, amount)?;

    events::schedule_deposit(env, lock, from, asset, amount);
    Ok(())
}

/// Pays everything currently vested and unreleased to the beneficiary.
pub fn release(env: &Env, lock: &LockId, asset: &Address) -> Result<i128, Error> {
    let mut schedule = load(env, lock)?;
    let now = get_ledger_timestamp(env);

    let releasable = releasable_amount(&schedule, asset, now)?;
    if releasable <= 0 {
        log!(env, "nothing to release", asset.clone(), now);
        return Err(Error::NothingToRelease);
    }

    let mut entry = locked_asset(&schedule, asset);
    entry.held -= releasable;
    entry.released = entry
        .released
        .checked_add(releasable)
        .ok_or(Error::ArithmeticOverflow)?;
    schedule.assets.set(asset.clone(), entry);
    set_schedule(env, lock, &schedule);

    ledger::transfer(env, asset, &schedule.beneficiary, releasable)?;

    events::tokens_released(env, lock, asset, releasable);
    Ok(releasable)
}

/// Returns the unvested remainder of `asset` to the controller and freezes
/// the schedule for that asset at what has vested so far.
pub fn revoke(env: &Env, caller: &Address, lock: &LockId, asset: &Address) -> Result<i128, Error> {
    caller.require_auth();

    let mut schedule = load(env, lock)?;
    if *caller != schedule.controller {
        return Err(Error::Unauthorized);
    }
    if !schedule.revocable {
        return Err(Error::NotRevocable);
    }
    let mut entry = schedule
        .assets
        .get(asset.clone())
        .ok_or(Error::AssetNotLocked)?;
    if entry.revoked {
        return Err(Error::AlreadyRevoked);
    }

    let now = get_ledger_timestamp(env);
    let unreleased = releasable_amount(&schedule, asset, now)?;
    let refund = entry.held - unreleased;

    entry.held = unreleased;
    entry.revoked = true;
    schedule.assets.set(asset.clone(), entry);
    set_schedule(env, lock, &schedule);

    if refund > 0 {
        ledger::transfer(env, asset, &schedule.controller, refund)?;
    }

    events::vesting_revoked(env, lock, asset, refund);
    Ok(refund)
}
