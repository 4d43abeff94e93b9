//! Narrow adapters over the Stellar token interface.
//!
//! The pool only ever moves tokens in or out of its own custody and reads
//! its own balance. Any failure inside the token contract (insufficient
//! funds, missing authorization, a trapping implementation) surfaces as
//! [`ContractError::TransferFailed`], failing the enclosing invocation so the
//! host rolls back every write it made.
//!
//! Callers finish all ledger writes before calling into a token.

use soroban_sdk::{token, Address, Env};

use crate::ContractError;

/// Move `amount` of `token` from `from` into pool custody.
/// `from` must authorize the nested transfer.
pub fn pull(env: &Env, token: &Address, from: &Address, amount: i128) -> Result<(), ContractError> {
    transfer(env, token, from, &env.current_contract_address(), amount)
}

/// Move `amount` of `token` out of pool custody to `to`.
pub fn push(env: &Env, token: &Address, to: &Address, amount: i128) -> Result<(), ContractError> {
    transfer(env, token, &env.current_contract_address(), to, amount)
}

/// Balance of `token` held by the pool.
pub fn custody_balance(env: &Env, token: &Address) -> i128 {
    token::Client::new(env, token).balance(&env.current_contract_address())
}

fn transfer(
    env: &Env,
    token: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), ContractError> {
    match token::Client::new(env, token).try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(ContractError::TransferFailed),
    }
}
