use crate::errors::Error;
use soroban_sdk::{log, token, Address, Env};

/// Moves `amount` of `asset` held by this contract to `to`.
pub fn transfer(env: &Env, asset: &Address, to: &Address, amount: i128) -> Result<(), Error> {
    let client = token::Client::new(env, asset);
    match client.try_transfer(&env.current_contract_address(), to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "ledger transfer failed", asset.clone(), amount);
            Err(Error::LedgerTransferFailed)
        }
    }
}

/// Moves `amount` of `asset` from `from` to `to`, authorized by the caller's
/// own signature (used for contributions and deposits).
pub fn transfer_from_signer(
    env: &Env,
    asset: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), Error> {
    let client = token::Client::new(env, asset);
    match client.try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "ledger transfer failed", asset.clone(), from.clone(), amount);
            Err(Error::LedgerTransferFailed)
        }
    }
}

/// Pulls `amount` of `asset` out of `owner` using the allowance it granted
/// to this contract.
pub fn pull_allowance(
    env: &Env,
    asset: &Address,
    owner: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), Error> {
    let client = token::Client::new(env, asset);
    match client.try_transfer_from(&env.current_contract_address(), owner, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "allowance pull failed", asset.clone(), owner.clone(), amount);
            Err(Error::LedgerTransferFailed)
        }
    }
}
