/// Fixed-point scaling factor.
///
/// All reward-per-token values are multiplied by this constant before storage
/// to preserve sub-unit precision without floating-point arithmetic.
/// 10^18 leaves ample headroom for 7-decimal Stellar amounts inside `i128`.
/// Every division by `PRECISION` (and by `total_staked`) floors.
pub const PRECISION: i128 = 1_000_000_000_000_000_000;

// ── Core reward engine ──────────────────────────────────────────────────────

/// The latest instant rewards have been streaming for: `min(now, period_finish)`.
///
/// Once the funding period has elapsed this stays pinned at `period_finish`
/// until the pool is funded again.
pub fn last_time_reward_applicable(now: u64, period_finish: u64) -> u64 {
    now.min(period_finish)
}

/// Recompute the global `reward_per_token_stored` value.
///
/// ```text
/// Δrpt = reward_rate × elapsed_seconds × PRECISION / total_staked
/// new_rpt = stored_rpt + Δrpt
/// ```
///
/// When `total_staked` is zero `stored` is returned unchanged: nothing is
/// distributed while the pool is empty. Returns `None` on overflow.
#[allow(clippy::arithmetic_side_effects)]
pub fn compute_reward_per_token(
    stored: i128,
    reward_rate: i128,
    elapsed: u64,
    total_staked: i128,
) -> Option<i128> {
    if total_staked <= 0 {
        return Some(stored);
    }

    let delta = reward_rate
        .checked_mul(i128::from(elapsed))?
        .checked_mul(PRECISION)?
        / total_staked;

    stored.checked_add(delta)
}

/// Calculate the total rewards earned by a single staker.
///
/// ```text
/// earned = staked × (current_rpt − user_rpt_paid) / PRECISION + user_earned
/// ```
///
/// Only the accumulation since the staker's last snapshot is counted, so
/// earlier settlements are never double-counted. Returns `None` on overflow
/// or if the snapshot is ahead of the accumulator.
#[allow(clippy::arithmetic_side_effects)]
pub fn earned(
    staked: i128,
    current_rpt: i128,
    user_rpt_paid: i128,
    user_earned: i128,
) -> Option<i128> {
    let delta = current_rpt.checked_sub(user_rpt_paid)?;
    if delta < 0 {
        return None;
    }
    let new_rewards = staked.checked_mul(delta)? / PRECISION;

    user_earned.checked_add(new_rewards)
}

/// Emission rate for a funding event of `amount` at `now`.
///
/// If the previous period is still running, its undistributed remainder
/// (`(period_finish − now) × current_rate`) is folded into the new schedule:
///
/// ```text
/// rate = (amount + leftover) / duration
/// ```
#[allow(clippy::arithmetic_side_effects)]
pub fn next_reward_rate(
    amount: i128,
    now: u64,
    period_finish: u64,
    current_rate: i128,
    duration: u64,
) -> Option<i128> {
    if duration == 0 {
        return None;
    }
    let total = amount.checked_add(leftover(now, period_finish, current_rate)?)?;

    Some(total / i128::from(duration))
}

/// Reward still owed by the running schedule at `now`.
#[allow(clippy::arithmetic_side_effects)]
pub fn leftover(now: u64, period_finish: u64, rate: i128) -> Option<i128> {
    if now >= period_finish {
        return Some(0);
    }
    i128::from(period_finish - now).checked_mul(rate)
}

// ── Unit tests ──────────────────────────────────────────────────────────────
// Pure math, no Soroban environment needed.
