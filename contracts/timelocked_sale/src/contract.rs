use crate::admission;
use crate::errors::Error;
use crate::events;
use crate::finalization;
use crate::storage::*;
use crate::types::*;
use crate::validator;
use crate::vesting;
use soroban_sdk::{contract, contractimpl, contractmeta, Address, Env, Vec};

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "Capped, time-windowed token sale with timelocked vesting"
);

#[contract]
pub struct TimelockedSaleContract;

fn valid_terms(terms: &LockTerms) -> bool {
    terms.duration > 0 && terms.cliff_duration <= terms.duration
}

#[contractimpl]
impl TimelockedSaleContract {
    /// Initialize the sale. Every parameter is fixed from here on.
    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        env: Env,
        owner: Address,
        assets: SaleAssets,
        window: SaleWindow,
        limits: ContributionLimits,
        rate: i128,
        cap: i128,
        delivery: DeliveryMode,
        investor_terms: LockTerms,
        funds: FundsConfig,
    ) -> Result<(), Error> {
        if is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }

        owner.require_auth();

        let allocated_bps = funds.team_bps as u64 + funds.partners_bps as u64;
        if window.opening_time >= window.closing_time
            || limits.min_contribution <= 0
            || limits.min_contribution > limits.max_contribution
            || rate <= 0
            || cap <= 0
            || !valid_terms(&investor_terms)
            || !valid_terms(&funds.team_terms)
            || !valid_terms(&funds.partners_terms)
            || allocated_bps > BPS_DENOMINATOR as u64
            || funds.team == funds.partners
        {
            return Err(Error::InvalidConfig);
        }

        let config = SaleConfig {
            assets,
            window,
            limits,
            delivery,
            investor_terms,
            funds,
        };

        set_config(&env, &config);
        set_owner(&env, &owner);
        set_raise(
            &env,
            &RaiseState {
                rate,
                cap,
                total_raised: 0,
            },
        );
        set_finalization(&env, &SaleFinalizationState::default());

        events::sale_initialized(&env, &config.assets.token, &config.assets.wallet, rate, cap);
        Ok(())
    }

    /// Buy tokens for `beneficiary`, paying `value` of the payment asset.
    /// Returns the amount of tokens purchased.
    pub fn buy_tokens(
        env: Env,
        purchaser: Address,
        beneficiary: Address,
        value: i128,
    ) -> Result<i128, Error> {
        admission::buy_tokens(&env, &purchaser, &beneficiary, value)
    }

    /// Close out the sale and lock the team and partner allocations.
    pub fn finalize(env: Env) -> Result<SaleFinalizationState, Error> {
        finalization::finalize(&env)
    }

    /// Release whatever has vested for `asset` on `lock`. Callable by anyone;
    /// funds only ever go to the lock's beneficiary.
    pub fn release(env: Env, lock: LockId, asset: Address) -> Result<i128, Error> {
        vesting::release(&env, &lock, &asset)
    }

    /// Revoke `asset` on `lock`, returning the unvested part to the
    /// controller. Only the lock's controller may call this.
    pub fn revoke(env: Env, caller: Address, lock: LockId, asset: Address) -> Result<i128, Error> {
        vesting::revoke(&env, &caller, &lock, &asset)
    }

    pub fn deposit(
        env: Env,
        from: Address,
        lock: LockId,
        asset: Address,
        amount: i128,
    ) -> Result<(), Error> {
        vesting::deposit(&env, &from, &lock, &asset, amount)
    }

    // View functions
    pub fn owner(env: Env) -> Result<Address, Error> {
        get_owner(&env)
    }

    pub fn is_owner(env: Env, caller: Address) -> bool {
        get_owner(&env).map(|owner| owner == caller).unwrap_or(false)
    }

    pub fn rate(env: Env) -> Result<i128, Error> {
        Ok(get_raise(&env)?.rate)
    }

    pub fn cap(env: Env) -> Result<i128, Error> {
        Ok(get_raise(&env)?.cap)
    }

    pub fn total_raised(env: Env) -> Result<i128, Error> {
        Ok(get_raise(&env)?.total_raised)
    }

    pub fn tokens_sold(env: Env) -> Result<i128, Error> {
        finalization::tokens_sold(&get_raise(&env)?)
    }

    pub fn cap_reached(env: Env) -> Result<bool, Error> {
        Ok(validator::cap_reached(&get_raise(&env)?))
    }

    pub fn wallet(env: Env) -> Result<Address, Error> {
        Ok(get_config(&env)?.assets.wallet)
    }

    pub fn token(env: Env) -> Result<Address, Error> {
        Ok(get_config(&env)?.assets.token)
    }

    pub fn token_wallet(env: Env) -> Result<Address, Error> {
        Ok(get_config(&env)?.assets.token_wallet)
    }

    pub fn opening_time(env: Env) -> Result<u64, Error> {
        Ok(get_config(&env)?.window.opening_time)
    }

    pub fn closing_time(env: Env) -> Result<u64, Error> {
        Ok(get_config(&env)?.window.closing_time)
    }

    pub fn is_open(env: Env) -> Result<bool, Error> {
        let window = get_config(&env)?.window;
        Ok(validator::is_open(&window, get_ledger_timestamp(&env)).is_ok())
    }

    pub fn has_closed(env: Env) -> Result<bool, Error> {
        let window = get_config(&env)?.window;
        Ok(validator::has_closed(&window, get_ledger_timestamp(&env)))
    }

    pub fn contribution_limits(env: Env) -> Result<ContributionLimits, Error> {
        Ok(get_config(&env)?.limits)
    }

    pub fn delivery_mode(env: Env) -> Result<DeliveryMode, Error> {
        Ok(get_config(&env)?.delivery)
    }

    /// Investor lock terms: index 0 is the cliff duration, 1 the duration.
    pub fn beneficiary_locks_time(env: Env, index: u32) -> Result<u64, Error> {
        let terms = get_config(&env)?.investor_terms;
        match index {
            0 => Ok(terms.cliff_duration),
            1 => Ok(terms.duration),
            _ => Err(Error::InvalidIndex),
        }
    }

    /// Revocability of the investor (0), team (1) and partner (2) locks.
    pub fn revocability(env: Env, index: u32) -> Result<bool, Error> {
        let config = get_config(&env)?;
        match index {
            0 => Ok(config.investor_terms.revocable),
            1 => Ok(config.funds.team_terms.revocable),
            2 => Ok(config.funds.partners_terms.revocable),
            _ => Err(Error::InvalidIndex),
        }
    }

    pub fn is_finalized(env: Env) -> bool {
        get_finalization(&env).finalized
    }

    pub fn token_team_amount(env: Env) -> i128 {
        get_finalization(&env).token_team_amount
    }

    pub fn token_partners_amount(env: Env) -> i128 {
        get_finalization(&env).token_partners_amount
    }

    /// Investor beneficiaries with a lock, in order of first purchase.
    pub fn get_token_locks_beneficiaries(env: Env) -> Vec<Address> {
        get_investor_locks(&env)
    }

    /// `[team, partners]` once finalized, empty before.
    pub fn get_token_locks_team_partners(env: Env) -> Result<Vec<Address>, Error> {
        let mut locks = Vec::new(&env);
        if !get_finalization(&env).finalized {
            return Ok(locks);
        }
        for lock in [LockId::Team, LockId::Partners] {
            locks.push_back(vesting::load(&env, &lock)?.beneficiary);
        }
        Ok(locks)
    }

    pub fn get_user_lock_start_time(env: Env, beneficiary: Address) -> Result<u64, Error> {
        Ok(vesting::load(&env, &LockId::Investor(beneficiary))?.start)
    }

    pub fn get_lock_start_time(env: Env, lock: LockId) -> Result<u64, Error> {
        Ok(vesting::load(&env, &lock)?.start)
    }

    pub fn get_schedule(env: Env, lock: LockId) -> Option<VestingSchedule> {
        get_schedule(&env, &lock)
    }

    pub fn vested_amount(env: Env, lock: LockId, asset: Address) -> Result<i128, Error> {
        let schedule = vesting::load(&env, &lock)?;
        vesting::vested_amount(&schedule, &asset, get_ledger_timestamp(&env))
    }

    pub fn releasable_amount(env: Env, lock: LockId, asset: Address) -> Result<i128, Error> {
        let schedule = vesting::load(&env, &lock)?;
        vesting::releasable_amount(&schedule, &asset, get_ledger_timestamp(&env))
    }

    pub fn released(env: Env, lock: LockId, asset: Address) -> Result<i128, Error> {
        let schedule = vesting::load(&env, &lock)?;
        Ok(vesting::locked_asset(&schedule, &asset).released)
    }

    pub fn revoked(env: Env, lock: LockId, asset: Address) -> Result<bool, Error> {
        let schedule = vesting::load(&env, &lock)?;
        Ok(vesting::locked_asset(&schedule, &asset).revoked)
    }
}
