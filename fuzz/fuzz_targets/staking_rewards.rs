#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::{Client as TokenClient, StellarAssetClient},
    Address, Env,
};
use staking_rewards::{Role, StakingRewardsContract, StakingRewardsContractClient};

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Stake { who: u8, amount: u32 },
    Withdraw { who: u8, amount: u32 },
    GetReward { who: u8 },
    Exit { who: u8 },
    Fund { amount: u32 },
    Advance { secs: u16 },
    Pause { who: u8 },
    Unpause { who: u8 },
    Rescue { amount: u32 },
}

fuzz_target!(|input: (u16, Vec<FuzzAction>)| {
    let (duration, actions) = input;
    let duration = u64::from(duration.max(1));

    let env = Env::default();
    env.mock_all_auths();

    let stake_token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let reward_token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let contract_id = env.register(StakingRewardsContract, ());
    let client = StakingRewardsContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    client.initialize(&admin, &stake_token, &reward_token, &duration);

    // Index 0 is the admin; 1 is a guardian; the rest hold no role.
    let mut users = vec![admin.clone(), Address::generate(&env)];
    client.grant_role(&admin, &Role::Guardian, &users[1]);
    for _ in 0..3 {
        users.push(Address::generate(&env));
    }

    let stake_sac = StellarAssetClient::new(&env, &stake_token);
    let reward_sac = StellarAssetClient::new(&env, &reward_token);
    let stake_balance = TokenClient::new(&env, &stake_token);

    // Only errors are acceptable outcomes; a host panic or a broken
    // invariant is a finding.
    for action in actions {
        match action {
            FuzzAction::Stake { who, amount } => {
                let user = &users[usize::from(who) % users.len()];
                stake_sac.mint(user, &i128::from(amount));
                let _ = client.try_stake(user, &i128::from(amount));
            }
            FuzzAction::Withdraw { who, amount } => {
                let user = &users[usize::from(who) % users.len()];
                let _ = client.try_withdraw(user, &i128::from(amount));
            }
            FuzzAction::GetReward { who } => {
                let user = &users[usize::from(who) % users.len()];
                let _ = client.try_get_reward(user);
            }
            FuzzAction::Exit { who } => {
                let user = &users[usize::from(who) % users.len()];
                let _ = client.try_exit(user);
            }
            FuzzAction::Fund { amount } => {
                reward_sac.mint(&admin, &i128::from(amount));
                let _ = client.try_notify_reward_amount(&admin, &i128::from(amount));
            }
            FuzzAction::Advance { secs } => {
                let now = env.ledger().timestamp();
                env.ledger().set_timestamp(now + u64::from(secs));
            }
            FuzzAction::Pause { who } => {
                let _ = client.try_pause(&users[usize::from(who) % users.len()]);
            }
            FuzzAction::Unpause { who } => {
                let _ = client.try_unpause(&users[usize::from(who) % users.len()]);
            }
            FuzzAction::Rescue { amount } => {
                let _ = client.try_rescue_token(&users[1], &reward_token, &i128::from(amount));
            }
        }

        let staked: i128 = users.iter().map(|u| client.balance_of(u)).sum();
        assert_eq!(staked, client.total_staked());
        assert_eq!(staked, stake_balance.balance(&contract_id));
        assert!(client.reward_per_token() >= client.reward_per_token_stored());
    }
});
