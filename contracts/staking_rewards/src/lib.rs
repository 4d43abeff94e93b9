#![no_std]

pub mod assets;
pub mod events;
pub mod pause;
pub mod rewards;
pub mod storage;

use common::roles::{self, RoleChange};
use soroban_sdk::{contract, contractimpl, contracttype, log, Address, Env, String, Vec};

use storage::{Config, Participant, Pool};

pub use common::roles::Role;

/// Strkeys of the all-zero account and contract ids, treated as null.
const NULL_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";
const NULL_CONTRACT: &str = "CAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAABSC4";

// ── Contract errors ──────────────────────────────────────────────────────────

/// Error codes returned by every fallible entry point.
///
/// # Code ranges
/// | Range   | Purpose                         |
/// |---------|---------------------------------|
/// | 1 – 9   | Lifecycle / configuration       |
/// | 10 – 19 | Authorization (names the role)  |
/// | 20 – 29 | Input / balance validation      |
/// | 30 – 39 | Pause state                     |
/// | 40 – 49 | Token and arithmetic failures   |
#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    /// A token identity is null or points at the pool itself.
    InvalidAddress = 3,
    TokensIdentical = 4,
    InvalidDuration = 5,

    NotFundingManager = 10,
    NotPauseAuthority = 11,
    NotGuardian = 12,
    /// Caller does not hold the admin role of the role being changed.
    NotRoleAdmin = 13,

    NeedMoreThanZero = 20,
    /// Withdrawal larger than the staked balance.
    InsufficientBalance = 21,
    CannotRescueStakeToken = 22,

    Paused = 30,
    NotPaused = 31,

    TransferFailed = 40,
    /// Scheduled rate exceeds what the pool's reward balance can pay.
    RewardTooHigh = 41,
    Overflow = 42,
}

// ── Public-facing types ──────────────────────────────────────────────────────

/// Snapshot of a participant's position returned by `get_staker_info`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakerInfo {
    pub staked: i128,
    pub earned: i128,
    pub reward_per_token_paid: i128,
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct StakingRewardsContract;

#[contractimpl]
impl StakingRewardsContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the pool.
    ///
    /// * `admin`            – receives every role.
    /// * `stake_token`      – SAC address of the token participants stake.
    /// * `reward_token`     – SAC address of the token streamed as rewards.
    /// * `rewards_duration` – seconds each funding event streams over.
    pub fn initialize(
        env: Env,
        admin: Address,
        stake_token: Address,
        reward_token: Address,
        rewards_duration: u64,
    ) -> Result<(), ContractError> {
        if storage::is_initialized(&env) {
            return Err(ContractError::AlreadyInitialized);
        }
        admin.require_auth();

        if Self::is_invalid_token(&env, &stake_token) || Self::is_invalid_token(&env, &reward_token)
        {
            return Err(ContractError::InvalidAddress);
        }
        if stake_token == reward_token {
            return Err(ContractError::TokensIdentical);
        }
        if rewards_duration == 0 {
            return Err(ContractError::InvalidDuration);
        }

        storage::save_config(
            &env,
            &Config {
                admin: admin.clone(),
                stake_token: stake_token.clone(),
                reward_token: reward_token.clone(),
                rewards_duration,
            },
        );
        storage::save_pool(&env, &Pool::default());
        roles::bootstrap(&env, &admin);

        events::publish_initialized(&env, admin, stake_token, reward_token, rewards_duration);

        Ok(())
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    /// Deposit `amount` stake tokens.
    ///
    /// Accrual is settled under the old balance before the deposit lands, so
    /// the new tokens never earn retroactively.
    pub fn stake(env: Env, staker: Address, amount: i128) -> Result<(), ContractError> {
        let config = storage::load_config(&env)?;
        staker.require_auth();
        pause::require_not_paused(&env)?;
        Self::require_positive(amount)?;

        let (mut pool, mut participant) = Self::update_reward(&env, &staker)?;

        participant.balance = participant
            .balance
            .checked_add(amount)
            .ok_or(ContractError::Overflow)?;
        pool.total_staked = pool
            .total_staked
            .checked_add(amount)
            .ok_or(ContractError::Overflow)?;
        storage::save_participant(&env, &staker, &participant);
        storage::save_pool(&env, &pool);

        assets::pull(&env, &config.stake_token, &staker, amount)?;

        events::publish_staked(&env, staker, amount, pool.total_staked);

        Ok(())
    }

    /// Return `amount` stake tokens to `staker`.
    ///
    /// Fails with `InsufficientBalance` if `amount` exceeds the staked
    /// balance; nothing is partially withdrawn.
    pub fn withdraw(env: Env, staker: Address, amount: i128) -> Result<(), ContractError> {
        let config = storage::load_config(&env)?;
        staker.require_auth();
        pause::require_not_paused(&env)?;

        Self::withdraw_stake(&env, &config, &staker, amount)
    }

    /// Claim all accrued rewards for `staker`. Returns the amount paid,
    /// `0` (without transfer or event) if nothing is pending.
    pub fn get_reward(env: Env, staker: Address) -> Result<i128, ContractError> {
        let config = storage::load_config(&env)?;
        staker.require_auth();
        pause::require_not_paused(&env)?;

        Self::pay_reward(&env, &config, &staker)
    }

    /// Withdraw the full staked balance and claim rewards in one invocation.
    /// Returns the reward paid.
    pub fn exit(env: Env, staker: Address) -> Result<i128, ContractError> {
        let config = storage::load_config(&env)?;
        staker.require_auth();
        pause::require_not_paused(&env)?;

        let balance = storage::load_participant(&env, &staker).balance;
        Self::withdraw_stake(&env, &config, &staker, balance)?;
        Self::pay_reward(&env, &config, &staker)
    }

    // ── Funding ─────────────────────────────────────────────────────────────

    /// Pull `amount` reward tokens from `caller` and restart the schedule.
    ///
    /// Whatever the running schedule has not yet streamed is blended into the
    /// new rate, which then runs for a full `rewards_duration` from now.
    /// Requires `FundingManager`. Unaffected by pause.
    pub fn notify_reward_amount(
        env: Env,
        caller: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        let config = storage::load_config(&env)?;
        caller.require_auth();
        if !roles::has_role(&env, Role::FundingManager, &caller) {
            return Err(ContractError::NotFundingManager);
        }
        Self::require_positive(amount)?;

        let mut pool = Self::update_global_reward(&env)?;

        let now = env.ledger().timestamp();
        let duration = config.rewards_duration;
        let reward_rate = rewards::next_reward_rate(
            amount,
            now,
            pool.period_finish,
            pool.reward_rate,
            duration,
        )
        .ok_or(ContractError::Overflow)?;

        pool.reward_rate = reward_rate;
        pool.last_update_time = now;
        pool.period_finish = now.checked_add(duration).ok_or(ContractError::Overflow)?;
        storage::save_pool(&env, &pool);

        assets::pull(&env, &config.reward_token, &caller, amount)?;

        // The pool must be able to pay out the whole schedule it just promised.
        let balance = assets::custody_balance(&env, &config.reward_token);
        if reward_rate > balance / i128::from(duration) {
            return Err(ContractError::RewardTooHigh);
        }

        log!(&env, "reward added", amount, reward_rate, pool.period_finish);
        events::publish_reward_added(&env, amount, reward_rate, pool.period_finish);

        Ok(())
    }

    // ── Safety gate ─────────────────────────────────────────────────────────

    /// Halt stake, withdraw, get_reward and exit.
    /// Requires `PauseAuthority` or `Guardian`.
    pub fn pause(env: Env, caller: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        pause::pause(&env, &caller)
    }

    /// Resume participant operations. Requires `PauseAuthority`.
    pub fn unpause(env: Env, caller: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        pause::unpause(&env, &caller)
    }

    pub fn is_paused(env: Env) -> bool {
        pause::is_paused(&env)
    }

    /// Send `amount` of a stray `token` held by the pool to `caller`.
    ///
    /// The stake token can never be rescued, whoever asks. The reward token
    /// can; guardians are trusted not to drain live reward funds.
    /// Requires `Guardian`. Unaffected by pause.
    pub fn rescue_token(
        env: Env,
        caller: Address,
        token: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        let config = storage::load_config(&env)?;
        caller.require_auth();
        if token == config.stake_token {
            return Err(ContractError::CannotRescueStakeToken);
        }
        if !roles::has_role(&env, Role::Guardian, &caller) {
            return Err(ContractError::NotGuardian);
        }
        Self::require_positive(amount)?;

        assets::push(&env, &token, &caller, amount)?;

        log!(&env, "token rescued", token, amount);
        events::publish_recovered(&env, token, caller, amount);

        Ok(())
    }

    // ── Role management ─────────────────────────────────────────────────────

    /// Grant `role` to `account`. `caller` must hold the role's admin role.
    pub fn grant_role(
        env: Env,
        caller: Address,
        role: Role,
        account: Address,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        match roles::grant_role(&env, &caller, role, &account) {
            RoleChange::Unauthorized => Err(ContractError::NotRoleAdmin),
            RoleChange::Unchanged => Ok(()),
            RoleChange::Applied => {
                events::publish_role_granted(&env, role, account, caller);
                Ok(())
            }
        }
    }

    /// Revoke `role` from `account`. `caller` must hold the role's admin role.
    pub fn revoke_role(
        env: Env,
        caller: Address,
        role: Role,
        account: Address,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        match roles::revoke_role(&env, &caller, role, &account) {
            RoleChange::Unauthorized => Err(ContractError::NotRoleAdmin),
            RoleChange::Unchanged => Ok(()),
            RoleChange::Applied => {
                events::publish_role_revoked(&env, role, account, caller);
                Ok(())
            }
        }
    }

    /// Drop `role` from the calling `account` itself.
    pub fn renounce_role(env: Env, account: Address, role: Role) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        account.require_auth();
        if roles::remove_role(&env, role, &account) {
            events::publish_role_revoked(&env, role, account.clone(), account);
        }
        Ok(())
    }

    pub fn has_role(env: Env, role: Role, account: Address) -> bool {
        roles::has_role(&env, role, &account)
    }

    pub fn role_admin(_env: Env, role: Role) -> Role {
        role.admin_role()
    }

    pub fn role_members(env: Env, role: Role) -> Vec<Address> {
        roles::members(&env, role)
    }

    // ── View functions ───────────────────────────────────────────────────────

    /// `min(now, period_finish)`; `0` before the first funding event.
    pub fn last_time_reward_applicable(env: Env) -> u64 {
        let pool = storage::load_pool(&env);
        rewards::last_time_reward_applicable(env.ledger().timestamp(), pool.period_finish)
    }

    /// Live reward-per-token accumulator (scaled by `PRECISION`).
    pub fn reward_per_token(env: Env) -> Result<i128, ContractError> {
        let pool = storage::load_pool(&env);
        Self::current_reward_per_token(&env, &pool)
    }

    /// Real-time entitlement of `account` without mutating state.
    pub fn earned(env: Env, account: Address) -> Result<i128, ContractError> {
        let pool = storage::load_pool(&env);
        let participant = storage::load_participant(&env, &account);
        Self::project_earned(&env, &pool, &participant)
    }

    /// Return the combined staking position for a participant.
    pub fn get_staker_info(env: Env, account: Address) -> Result<StakerInfo, ContractError> {
        let pool = storage::load_pool(&env);
        let participant = storage::load_participant(&env, &account);
        Ok(StakerInfo {
            staked: participant.balance,
            earned: Self::project_earned(&env, &pool, &participant)?,
            reward_per_token_paid: participant.reward_per_token_paid,
        })
    }

    pub fn balance_of(env: Env, account: Address) -> i128 {
        storage::load_participant(&env, &account).balance
    }

    pub fn total_staked(env: Env) -> i128 {
        storage::load_pool(&env).total_staked
    }

    pub fn reward_rate(env: Env) -> i128 {
        storage::load_pool(&env).reward_rate
    }

    pub fn period_finish(env: Env) -> u64 {
        storage::load_pool(&env).period_finish
    }

    pub fn last_update_time(env: Env) -> u64 {
        storage::load_pool(&env).last_update_time
    }

    pub fn reward_per_token_stored(env: Env) -> i128 {
        storage::load_pool(&env).reward_per_token_stored
    }

    pub fn rewards_duration(env: Env) -> Result<u64, ContractError> {
        Ok(storage::load_config(&env)?.rewards_duration)
    }

    /// Total reward the current rate streams over one full period.
    pub fn get_reward_for_duration(env: Env) -> Result<i128, ContractError> {
        let duration = storage::load_config(&env)?.rewards_duration;
        storage::load_pool(&env)
            .reward_rate
            .checked_mul(i128::from(duration))
            .ok_or(ContractError::Overflow)
    }

    pub fn stake_token(env: Env) -> Result<Address, ContractError> {
        Ok(storage::load_config(&env)?.stake_token)
    }

    pub fn reward_token(env: Env) -> Result<Address, ContractError> {
        Ok(storage::load_config(&env)?.reward_token)
    }

    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        Ok(storage::load_config(&env)?.admin)
    }

    pub fn is_initialized(env: Env) -> bool {
        storage::is_initialized(&env)
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    fn require_initialized(env: &Env) -> Result<(), ContractError> {
        if !storage::is_initialized(env) {
            return Err(ContractError::NotInitialized);
        }
        Ok(())
    }

    fn require_positive(amount: i128) -> Result<(), ContractError> {
        if amount <= 0 {
            return Err(ContractError::NeedMoreThanZero);
        }
        Ok(())
    }

    fn is_invalid_token(env: &Env, token: &Address) -> bool {
        *token == Address::from_string(&String::from_str(env, NULL_ACCOUNT))
            || *token == Address::from_string(&String::from_str(env, NULL_CONTRACT))
            || *token == env.current_contract_address()
    }

    fn current_reward_per_token(env: &Env, pool: &Pool) -> Result<i128, ContractError> {
        let applicable =
            rewards::last_time_reward_applicable(env.ledger().timestamp(), pool.period_finish);
        let elapsed = applicable.saturating_sub(pool.last_update_time);
        rewards::compute_reward_per_token(
            pool.reward_per_token_stored,
            pool.reward_rate,
            elapsed,
            pool.total_staked,
        )
        .ok_or(ContractError::Overflow)
    }

    fn project_earned(
        env: &Env,
        pool: &Pool,
        participant: &Participant,
    ) -> Result<i128, ContractError> {
        let current_rpt = Self::current_reward_per_token(env, pool)?;
        rewards::earned(
            participant.balance,
            current_rpt,
            participant.reward_per_token_paid,
            participant.rewards,
        )
        .ok_or(ContractError::Overflow)
    }

    /// Settle the global accumulator up to `min(now, period_finish)` without
    /// touching any participant. Runs before every mutation.
    fn update_global_reward(env: &Env) -> Result<Pool, ContractError> {
        let mut pool = storage::load_pool(env);

        pool.reward_per_token_stored = Self::current_reward_per_token(env, &pool)?;
        pool.last_update_time =
            rewards::last_time_reward_applicable(env.ledger().timestamp(), pool.period_finish)
                .max(pool.last_update_time);
        storage::save_pool(env, &pool);

        log!(env, "settled", pool.reward_per_token_stored, pool.last_update_time);

        Ok(pool)
    }

    /// Full per-participant settlement.
    ///
    /// 1. Update the global accumulator.
    /// 2. Lock in everything `account` earned since its last snapshot under
    ///    its current balance.
    /// 3. Store the new snapshot.
    fn update_reward(env: &Env, account: &Address) -> Result<(Pool, Participant), ContractError> {
        let pool = Self::update_global_reward(env)?;

        let mut participant = storage::load_participant(env, account);
        participant.rewards = rewards::earned(
            participant.balance,
            pool.reward_per_token_stored,
            participant.reward_per_token_paid,
            participant.rewards,
        )
        .ok_or(ContractError::Overflow)?;
        participant.reward_per_token_paid = pool.reward_per_token_stored;
        storage::save_participant(env, account, &participant);

        Ok((pool, participant))
    }

    fn withdraw_stake(
        env: &Env,
        config: &Config,
        staker: &Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        Self::require_positive(amount)?;

        let (mut pool, mut participant) = Self::update_reward(env, staker)?;

        if amount > participant.balance {
            return Err(ContractError::InsufficientBalance);
        }
        participant.balance = participant.balance.saturating_sub(amount);
        pool.total_staked = pool
            .total_staked
            .checked_sub(amount)
            .ok_or(ContractError::Overflow)?;
        storage::save_participant(env, staker, &participant);
        storage::save_pool(env, &pool);

        assets::push(env, &config.stake_token, staker, amount)?;

        events::publish_withdrawn(env, staker.clone(), amount, pool.total_staked);

        Ok(())
    }

    fn pay_reward(env: &Env, config: &Config, staker: &Address) -> Result<i128, ContractError> {
        let (_, mut participant) = Self::update_reward(env, staker)?;

        let reward = participant.rewards;
        if reward <= 0 {
            return Ok(0);
        }
        participant.rewards = 0;
        storage::save_participant(env, staker, &participant);

        assets::push(env, &config.reward_token, staker, reward)?;

        events::publish_reward_paid(env, staker.clone(), reward);

        Ok(reward)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────



#[cfg(test)]
mod test_events;

#[cfg(test)]
mod test_pause;
