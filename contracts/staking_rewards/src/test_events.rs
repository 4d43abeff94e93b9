#![allow(clippy::unwrap_used, clippy::expect_used)]

extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events},
    xdr::{ContractEventBody, ScVal},
    Address, Env, IntoVal, TryFromVal, Val, Vec,
};

use crate::events::{RewardAddedEvent, RewardPaidEvent, StakedEvent};
use crate::test::{setup, DURATION, UNIT};
use crate::Role;

fn to_scvals(env: &Env, vals: Vec<Val>) -> std::vec::Vec<ScVal> {
    vals.iter()
        .map(|val| ScVal::try_from_val(env, &val).unwrap())
        .collect()
}

/// Bodies of events the pool emitted during the last invocation.
fn pool_events(env: &Env, pool: &Address) -> std::vec::Vec<(std::vec::Vec<ScVal>, ScVal)> {
    env.events()
        .all()
        .filter_by_contract(pool)
        .events()
        .iter()
        .map(|event| {
            let ContractEventBody::V0(body) = &event.body;
            (body.topics.to_vec(), body.data.clone())
        })
        .collect()
}

/// Payload of the single event carrying exactly `topics`.
fn find_event(env: &Env, pool: &Address, topics: Vec<Val>) -> Option<ScVal> {
    let expected = to_scvals(env, topics);
    pool_events(env, pool)
        .into_iter()
        .find(|(emitted, _)| *emitted == expected)
        .map(|(_, data)| data)
}

fn payload<T: IntoVal<Env, Val>>(env: &Env, value: T) -> ScVal {
    let val: Val = value.into_val(env);
    ScVal::try_from_val(env, &val).unwrap()
}

#[test]
fn test_stake_emits_staked() {
    let pool = setup();
    let user = Address::generate(&pool.env);
    pool.mint_stake(&user, 10 * UNIT);

    pool.client.stake(&user, &(10 * UNIT));

    let data = find_event(
        &pool.env,
        &pool.client.address,
        (symbol_short!("STAKED"), user.clone()).into_val(&pool.env),
    )
    .expect("STAKED not emitted");
    let expected = StakedEvent {
        staker: user,
        amount: 10 * UNIT,
        new_total_staked: 10 * UNIT,
        timestamp: 0,
    };
    assert_eq!(data, payload(&pool.env, expected));
}

#[test]
fn test_withdraw_emits_withdrawn() {
    let pool = setup();
    let user = pool.staker(10 * UNIT);

    pool.client.withdraw(&user, &(4 * UNIT));

    assert!(find_event(
        &pool.env,
        &pool.client.address,
        (symbol_short!("WITHDRAWN"), user).into_val(&pool.env),
    )
    .is_some());
}

#[test]
fn test_notify_emits_reward_added() {
    let pool = setup();
    pool.at(50);
    pool.fund(1_000 * UNIT);

    let data = find_event(
        &pool.env,
        &pool.client.address,
        (symbol_short!("RWD_ADDED"),).into_val(&pool.env),
    )
    .expect("RWD_ADDED not emitted");
    let expected = RewardAddedEvent {
        amount: 1_000 * UNIT,
        reward_rate: UNIT,
        period_finish: 50 + DURATION,
        timestamp: 50,
    };
    assert_eq!(data, payload(&pool.env, expected));
}

#[test]
fn test_claim_emits_reward_paid() {
    let pool = setup();
    let user = pool.staker(10 * UNIT);
    pool.fund(1_000 * UNIT);

    pool.at(10);
    pool.client.get_reward(&user);

    let data = find_event(
        &pool.env,
        &pool.client.address,
        (symbol_short!("RWD_PAID"), user.clone()).into_val(&pool.env),
    )
    .expect("RWD_PAID not emitted");
    let expected = RewardPaidEvent {
        staker: user,
        amount: 10 * UNIT,
        timestamp: 10,
    };
    assert_eq!(data, payload(&pool.env, expected));
}

#[test]
fn test_empty_claim_emits_nothing() {
    let pool = setup();
    let user = Address::generate(&pool.env);

    assert_eq!(pool.client.get_reward(&user), 0);
    assert!(find_event(
        &pool.env,
        &pool.client.address,
        (symbol_short!("RWD_PAID"), user).into_val(&pool.env),
    )
    .is_none());
}

#[test]
fn test_exit_emits_withdrawn_then_reward_paid() {
    let pool = setup();
    let user = pool.staker(10 * UNIT);
    pool.fund(1_000 * UNIT);

    pool.at(20);
    pool.client.exit(&user);

    let withdrawn = to_scvals(
        &pool.env,
        (symbol_short!("WITHDRAWN"), user.clone()).into_val(&pool.env),
    );
    let paid = to_scvals(
        &pool.env,
        (symbol_short!("RWD_PAID"), user).into_val(&pool.env),
    );
    let topics: std::vec::Vec<_> = pool_events(&pool.env, &pool.client.address)
        .into_iter()
        .map(|(topics, _)| topics)
        .collect();

    let withdrawn_at = topics.iter().position(|t| *t == withdrawn);
    let paid_at = topics.iter().position(|t| *t == paid);
    assert!(withdrawn_at.is_some() && paid_at.is_some());
    assert!(withdrawn_at < paid_at);
}

#[test]
fn test_pause_toggle_and_role_events() {
    let pool = setup();
    let watcher = Address::generate(&pool.env);

    pool.client.grant_role(&pool.admin, &Role::Guardian, &watcher);
    assert!(find_event(
        &pool.env,
        &pool.client.address,
        (symbol_short!("ROLE_GRNT"), watcher.clone()).into_val(&pool.env),
    )
    .is_some());

    // Already held: no second grant event.
    pool.client.grant_role(&pool.admin, &Role::Guardian, &watcher);
    let granted = to_scvals(
        &pool.env,
        (symbol_short!("ROLE_GRNT"), watcher.clone()).into_val(&pool.env),
    );
    let grants = pool_events(&pool.env, &pool.client.address)
        .into_iter()
        .filter(|(topics, _)| *topics == granted)
        .count();
    assert!(grants <= 1);

    pool.client.pause(&watcher);
    assert!(find_event(
        &pool.env,
        &pool.client.address,
        (symbol_short!("PAUSED"), watcher.clone()).into_val(&pool.env),
    )
    .is_some());

    pool.client.unpause(&pool.admin);
    assert!(find_event(
        &pool.env,
        &pool.client.address,
        (symbol_short!("UNPAUSED"), pool.admin.clone()).into_val(&pool.env),
    )
    .is_some());
}

#[test]
fn test_rescue_emits_recovered() {
    let pool = setup();
    pool.mint_reward(&pool.client.address, 5 * UNIT);

    pool.client
        .rescue_token(&pool.admin, &pool.reward_token, &(5 * UNIT));

    assert!(find_event(
        &pool.env,
        &pool.client.address,
        (symbol_short!("RECOVERED"), pool.reward_token.clone()).into_val(&pool.env),
    )
    .is_some());
}
