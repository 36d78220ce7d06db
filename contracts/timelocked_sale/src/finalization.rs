use crate::errors::Error;
use crate::events;
use crate::ledger;
use crate::storage::*;
use crate::types::*;
use crate::validator;
use crate::vesting;
use soroban_sdk::{log, Address, Env};

/// `tokens_sold * bps / 10_000`, truncating.
pub fn allocation(tokens_sold: i128, bps: u32) -> Result<i128, Error> {
    let scaled = tokens_sold
        .checked_mul(bps as i128)
        .ok_or(Error::ArithmeticOverflow)?;
    Ok(scaled / BPS_DENOMINATOR)
}

pub fn tokens_sold(raise: &RaiseState) -> Result<i128, Error> {
    raise
        .total_raised
        .checked_mul(raise.rate)
        .ok_or(Error::ArithmeticOverflow)
}

/// One-time post-close transition. Anyone may call it once the sale has
/// closed; it locks the team and partner allocations and marks the sale
/// finalized.
pub fn finalize(env: &Env) -> Result<SaleFinalizationState, Error> {
    let config = get_config(env)?;
    let raise = get_raise(env)?;
    let mut state = get_finalization(env);

    if state.finalized {
        return Err(Error::AlreadyFinalized);
    }
    let now = get_ledger_timestamp(env);
    if !validator::has_closed(&config.window, now) {
        log!(env, "finalize before closing time", now);
        return Err(Error::NotYetClosable);
    }

    let sold = tokens_sold(&raise)?;
    state.token_team_amount = allocation(sold, config.funds.team_bps)?;
    state.token_partners_amount = allocation(sold, config.funds.partners_bps)?;
    state.finalized = true;
    set_finalization(env, &state);

    let owner = get_owner(env)?;
    lock_fund(
        env,
        &config,
        &LockId::Team,
        &config.funds.team,
        &owner,
        &config.funds.team_terms,
        state.token_team_amount,
        now,
    )?;
    lock_fund(
        env,
        &config,
        &LockId::Partners,
        &config.funds.partners,
        &owner,
        &config.funds.partners_terms,
        state.token_partners_amount,
        now,
    )?;

    events::sale_finalized(env, state.token_team_amount, state.token_partners_amount);
    Ok(state)
}

#[allow(clippy::too_many_arguments)]
fn lock_fund(
    env: &Env,
    config: &SaleConfig,
    lock: &LockId,
    beneficiary: &Address,
    controller: &Address,
    terms: &LockTerms,
    amount: i128,
    now: u64,
) -> Result<(), Error> {
    let mut schedule = vesting::open_schedule(env, lock, beneficiary, controller, now, terms)?;
    if amount == 0 {
        return Ok(());
    }

    ledger::pull_allowance(
        env,
        &config.assets.token,
        &config.assets.token_wallet,
        &env.current_contract_address(),
        amount,
    )?;
    vesting::credit(env, lock, &mut schedule, &config.assets.token, amount)
}
