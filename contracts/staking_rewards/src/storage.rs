use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

use crate::ContractError;

// ── Storage key constants ────────────────────────────────────────────────────

const CONFIG: Symbol = symbol_short!("CONFIG");
const POOL: Symbol = symbol_short!("POOL");

// Per-participant persistent storage uses tuple keys: (prefix, address)
const PARTICIPANT: Symbol = symbol_short!("PRTCPNT");

const TTL_THRESHOLD: u32 = 5184000;
const TTL_EXTEND_TO: u32 = 10368000;

// ── Records ──────────────────────────────────────────────────────────────────

/// Construction parameters. Written once by `initialize`, never mutated.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub admin: Address,
    pub stake_token: Address,
    pub reward_token: Address,
    pub rewards_duration: u64,
}

/// Pool-wide accrual state.
///
/// `reward_per_token_stored` is scaled by [`crate::rewards::PRECISION`] and
/// never decreases; `last_update_time` never exceeds the ledger time.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Pool {
    pub total_staked: i128,
    pub reward_rate: i128,
    pub period_finish: u64,
    pub last_update_time: u64,
    pub reward_per_token_stored: i128,
}

/// A participant's position and last settled snapshot.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Participant {
    pub balance: i128,
    pub reward_per_token_paid: i128,
    pub rewards: i128,
}

// ── Accessors ────────────────────────────────────────────────────────────────

fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

fn participant_key(account: &Address) -> (Symbol, Address) {
    (PARTICIPANT, account.clone())
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&CONFIG)
}

pub fn load_config(env: &Env) -> Result<Config, ContractError> {
    env.storage()
        .instance()
        .get(&CONFIG)
        .ok_or(ContractError::NotInitialized)
}

pub fn save_config(env: &Env, config: &Config) {
    env.storage().instance().set(&CONFIG, config);
    extend_instance_ttl(env);
}

/// Absent before initialization; every field then reads as zero.
pub fn load_pool(env: &Env) -> Pool {
    env.storage().instance().get(&POOL).unwrap_or_default()
}

pub fn save_pool(env: &Env, pool: &Pool) {
    env.storage().instance().set(&POOL, pool);
    extend_instance_ttl(env);
}

pub fn load_participant(env: &Env, account: &Address) -> Participant {
    let key = participant_key(account);
    let participant: Option<Participant> = env.storage().persistent().get(&key);
    if participant.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
    }
    participant.unwrap_or_default()
}

pub fn save_participant(env: &Env, account: &Address, participant: &Participant) {
    let key = participant_key(account);
    env.storage().persistent().set(&key, participant);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}
