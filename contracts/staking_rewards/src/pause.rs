use common::roles::{self, Role};
use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::{events, ContractError};

const PAUSED: Symbol = symbol_short!("PAUSED");

pub fn is_paused(env: &Env) -> bool {
    env.storage().instance().get(&PAUSED).unwrap_or(false)
}

/// Guard for participant-facing operations. Runs before any settlement.
pub fn require_not_paused(env: &Env) -> Result<(), ContractError> {
    if is_paused(env) {
        return Err(ContractError::Paused);
    }
    Ok(())
}

/// Halts participant operations.
/// Requires `PauseAuthority` or `Guardian`.
pub fn pause(env: &Env, caller: &Address) -> Result<(), ContractError> {
    let allowed = roles::has_role(env, Role::PauseAuthority, caller)
        || roles::has_role(env, Role::Guardian, caller);
    if !allowed {
        return Err(ContractError::NotPauseAuthority);
    }
    if is_paused(env) {
        return Err(ContractError::Paused);
    }

    env.storage().instance().set(&PAUSED, &true);

    events::publish_paused(env, caller.clone());

    Ok(())
}

/// Resumes participant operations.
/// Requires `PauseAuthority`; guardians can halt but never resume.
pub fn unpause(env: &Env, caller: &Address) -> Result<(), ContractError> {
    if !roles::has_role(env, Role::PauseAuthority, caller) {
        return Err(ContractError::NotPauseAuthority);
    }
    if !is_paused(env) {
        return Err(ContractError::NotPaused);
    }

    env.storage().instance().set(&PAUSED, &false);

    events::publish_unpaused(env, caller.clone());

    Ok(())
}
