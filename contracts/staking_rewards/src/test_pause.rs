extern crate std;

use soroban_sdk::{testutils::Address as _, Address};

use crate::test::{setup, TestPool, UNIT};
use crate::{ContractError, Role};

fn guardian(pool: &TestPool) -> Address {
    let guardian = Address::generate(&pool.env);
    pool.client.grant_role(&pool.admin, &Role::Guardian, &guardian);
    guardian
}

#[test]
fn test_guardian_pauses_but_cannot_unpause() {
    let pool = setup();
    let guardian = guardian(&pool);

    pool.client.pause(&guardian);
    assert!(pool.client.is_paused());

    assert_eq!(
        pool.client.try_unpause(&guardian),
        Err(Ok(ContractError::NotPauseAuthority))
    );
    assert!(pool.client.is_paused());

    pool.client.unpause(&pool.admin);
    assert!(!pool.client.is_paused());
}

#[test]
fn test_outsider_cannot_toggle_pause() {
    let pool = setup();
    let outsider = Address::generate(&pool.env);

    assert_eq!(
        pool.client.try_pause(&outsider),
        Err(Ok(ContractError::NotPauseAuthority))
    );

    pool.client.pause(&pool.admin);
    assert_eq!(
        pool.client.try_unpause(&outsider),
        Err(Ok(ContractError::NotPauseAuthority))
    );
}

#[test]
fn test_double_pause_and_spurious_unpause_fail() {
    let pool = setup();

    assert_eq!(
        pool.client.try_unpause(&pool.admin),
        Err(Ok(ContractError::NotPaused))
    );

    pool.client.pause(&pool.admin);
    assert_eq!(
        pool.client.try_pause(&pool.admin),
        Err(Ok(ContractError::Paused))
    );
}

#[test]
fn test_pause_blocks_participant_operations() {
    let pool = setup();
    let user = pool.staker(100 * UNIT);
    pool.fund(1_000 * UNIT);
    pool.mint_stake(&user, 10 * UNIT);

    pool.at(100);
    pool.client.pause(&guardian(&pool));
    let last_update = pool.client.last_update_time();

    assert_eq!(pool.client.try_stake(&user, &UNIT), Err(Ok(ContractError::Paused)));
    assert_eq!(pool.client.try_withdraw(&user, &UNIT), Err(Ok(ContractError::Paused)));
    assert_eq!(pool.client.try_get_reward(&user), Err(Ok(ContractError::Paused)));
    assert_eq!(pool.client.try_exit(&user), Err(Ok(ContractError::Paused)));

    assert_eq!(pool.client.balance_of(&user), 100 * UNIT);
    assert_eq!(pool.client.last_update_time(), last_update);
    assert_eq!(pool.stake_balance(&user), 10 * UNIT);
    assert_eq!(pool.reward_balance(&user), 0);
}

#[test]
fn test_rewards_keep_accruing_while_paused() {
    let pool = setup();
    let user = pool.staker(100 * UNIT);
    pool.fund(1_000 * UNIT);

    pool.at(100);
    pool.client.pause(&pool.admin);

    pool.at(300);
    assert_eq!(pool.client.earned(&user), 300 * UNIT);

    pool.client.unpause(&pool.admin);
    assert_eq!(pool.client.get_reward(&user), 300 * UNIT);
}

#[test]
fn test_funding_and_rescue_work_while_paused() {
    let pool = setup();
    pool.client.pause(&pool.admin);

    pool.fund(1_000 * UNIT);
    assert_eq!(pool.client.reward_rate(), UNIT);

    pool.client
        .rescue_token(&pool.admin, &pool.reward_token, &(10 * UNIT));
    assert_eq!(pool.reward_balance(&pool.admin), 10 * UNIT);
    assert!(pool.client.is_paused());
}
