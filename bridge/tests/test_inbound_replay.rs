//! Inbound Credit & Replay Protection Integration Tests.
//!
//! Tests `ApplyTransfers`, the relayer-submitted batch credit:
//! - Each remote hash credited from custody exactly once
//! - Replayed hash aborts the whole batch atomically
//! - Positional array validation
//! - Program/owner authorization and program rotation

use cosmwasm_std::{Addr, Uint128};
use cw_multi_test::{App, ContractWrapper, Executor};

use bridge::msg::{
    ExecuteMsg, InstantiateMsg, QueryMsg, TransferExistsResponse, TransferRecordResponse,
};
use bridge::ContractError;

// ============================================================================
// Test Setup
// ============================================================================

fn contract_bridge() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(
        bridge::contract::execute,
        bridge::contract::instantiate,
        bridge::contract::query,
    );
    Box::new(contract)
}

fn contract_cw20() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    );
    Box::new(contract)
}

struct TestEnv {
    app: App,
    bridge: Addr,
    cdt: Addr,
    owner: Addr,
    program: Addr,
    user: Addr,
}

fn instantiate_token(
    app: &mut App,
    code_id: u64,
    owner: &Addr,
    symbol: &str,
    balances: Vec<cw20::Cw20Coin>,
) -> Addr {
    app.instantiate_contract(
        code_id,
        owner.clone(),
        &cw20_base::msg::InstantiateMsg {
            name: format!("{symbol} Token"),
            symbol: symbol.to_string(),
            decimals: 9,
            initial_balances: balances,
            mint: None,
            marketing: None,
        },
        &[],
        symbol,
        None,
    )
    .unwrap()
}

/// Instantiates the bridge with a dedicated program (relayer) address and
/// 10^10 CDT already in custody.
fn setup() -> TestEnv {
    let mut app = App::default();
    let owner = Addr::unchecked("terra1owner");
    let program = Addr::unchecked("terra1program");
    let user = Addr::unchecked("terra1user");
    let pool = Addr::unchecked("terra1pool");

    let cw20_code = app.store_code(contract_cw20());
    let cdt = instantiate_token(
        &mut app,
        cw20_code,
        &owner,
        "CDT",
        vec![cw20::Cw20Coin {
            address: owner.to_string(),
            amount: Uint128::new(1_000_000_000_000),
        }],
    );
    let tok_in = instantiate_token(
        &mut app,
        cw20_code,
        &owner,
        "USDC",
        vec![cw20::Cw20Coin {
            address: pool.to_string(),
            amount: Uint128::new(2_000_000_000),
        }],
    );
    let tok_out = instantiate_token(
        &mut app,
        cw20_code,
        &owner,
        "WLUNA",
        vec![cw20::Cw20Coin {
            address: pool.to_string(),
            amount: Uint128::new(1_000_000_000),
        }],
    );

    let bridge_code = app.store_code(contract_bridge());
    let bridge = app
        .instantiate_contract(
            bridge_code,
            owner.clone(),
            &InstantiateMsg {
                bridge_chain: "terraclassic".to_string(),
                token: cdt.to_string(),
                fee_denom: "uluna".to_string(),
                fees_in_dollar: Uint128::new(1_000_000_000),
                fees_in_cdt_percentage: 2,
                dex_in: tok_in.to_string(),
                dex_out: tok_out.to_string(),
                dex_pool: pool.to_string(),
                minimum_transfer_quantity: None,
                lock_duration: None,
                unlock_window: None,
            },
            &[],
            "cdt-bridge",
            Some(owner.to_string()),
        )
        .unwrap();

    app.execute_contract(
        owner.clone(),
        bridge.clone(),
        &ExecuteMsg::ChangeProgram {
            program: program.to_string(),
        },
        &[],
    )
    .unwrap();

    // Fund custody so inbound credits have something to draw from
    app.execute_contract(
        owner.clone(),
        cdt.clone(),
        &cw20::Cw20ExecuteMsg::Transfer {
            recipient: bridge.to_string(),
            amount: Uint128::new(10_000_000_000),
        },
        &[],
    )
    .unwrap();

    TestEnv {
        app,
        bridge,
        cdt,
        owner,
        program,
        user,
    }
}

fn cdt_balance(env: &TestEnv, account: &Addr) -> u128 {
    let resp: cw20::BalanceResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            env.cdt.clone(),
            &cw20::Cw20QueryMsg::Balance {
                address: account.to_string(),
            },
        )
        .unwrap();
    resp.balance.u128()
}

fn hash_exists(env: &TestEnv, hash: &str) -> bool {
    let resp: TransferExistsResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            env.bridge.clone(),
            &QueryMsg::TransferExists {
                hash: hash.to_string(),
            },
        )
        .unwrap();
    resp.exists
}

fn apply(
    env: &mut TestEnv,
    sender: &Addr,
    items: &[(&str, &Addr, u128)],
) -> anyhow::Result<cw_multi_test::AppResponse> {
    let msg = ExecuteMsg::ApplyTransfers {
        from_chains: items.iter().map(|_| "massa".to_string()).collect(),
        recipients: items.iter().map(|(_, r, _)| r.to_string()).collect(),
        amounts: items.iter().map(|(_, _, a)| Uint128::new(*a)).collect(),
        hashes: items.iter().map(|(h, _, _)| h.to_string()).collect(),
    };
    env.app
        .execute_contract(sender.clone(), env.bridge.clone(), &msg, &[])
}

// ============================================================================
// Inbound Credits
// ============================================================================

#[test]
fn apply_transfers_credits_recipients() {
    let mut env = setup();
    let user = env.user.clone();
    let program = env.program.clone();

    apply(
        &mut env,
        &program,
        &[("h1", &user, 1_000_000_000), ("h2", &user, 2_000_000_000)],
    )
    .unwrap();

    assert_eq!(cdt_balance(&env, &env.user), 3_000_000_000);
    assert_eq!(cdt_balance(&env, &env.bridge), 7_000_000_000);
    assert!(hash_exists(&env, "h1"));
    assert!(hash_exists(&env, "h2"));
}

#[test]
fn inbound_credits_are_dedup_only_entries() {
    let mut env = setup();
    let user = env.user.clone();
    let program = env.program.clone();

    apply(&mut env, &program, &[("h1", &user, 1_000_000_000)]).unwrap();

    // Seen for replay purposes, but no full ledger record
    assert!(hash_exists(&env, "h1"));
    let record: Option<TransferRecordResponse> = env
        .app
        .wrap()
        .query_wasm_smart(
            env.bridge.clone(),
            &QueryMsg::Transfer {
                hash: "h1".to_string(),
            },
        )
        .unwrap();
    assert!(record.is_none());
}

#[test]
fn replayed_hash_rejected() {
    let mut env = setup();
    let user = env.user.clone();
    let program = env.program.clone();

    apply(&mut env, &program, &[("h1", &user, 1_000_000_000)]).unwrap();

    let err = apply(&mut env, &program, &[("h1", &user, 1_000_000_000)]).unwrap_err();
    assert!(matches!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::AlreadyProcessed { .. }
    ));
    assert_eq!(cdt_balance(&env, &env.user), 1_000_000_000);
}

#[test]
fn replay_aborts_the_whole_batch() {
    let mut env = setup();
    let user = env.user.clone();
    let program = env.program.clone();

    apply(&mut env, &program, &[("h1", &user, 1_000_000_000)]).unwrap();

    // A fresh hash batched with a replayed one must not be credited
    let err = apply(
        &mut env,
        &program,
        &[("h3", &user, 1_000_000_000), ("h1", &user, 1_000_000_000)],
    )
    .unwrap_err();
    assert!(matches!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::AlreadyProcessed { .. }
    ));
    assert!(!hash_exists(&env, "h3"));
    assert_eq!(cdt_balance(&env, &env.user), 1_000_000_000);
}

#[test]
fn array_length_mismatch_rejected() {
    let mut env = setup();
    let program = env.program.clone();
    let user = env.user.clone();

    let err = env
        .app
        .execute_contract(
            program,
            env.bridge.clone(),
            &ExecuteMsg::ApplyTransfers {
                from_chains: vec!["massa".to_string(), "massa".to_string()],
                recipients: vec![user.to_string(), user.to_string()],
                amounts: vec![Uint128::new(1_000_000_000)],
                hashes: vec!["h1".to_string(), "h2".to_string()],
            },
            &[],
        )
        .unwrap_err();
    assert!(matches!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::InvalidArgument { .. }
    ));
}

// ============================================================================
// Authorization
// ============================================================================

#[test]
fn only_program_or_owner_may_apply() {
    let mut env = setup();
    let user = env.user.clone();

    let err = apply(&mut env, &user.clone(), &[("h1", &user, 1_000_000_000)]).unwrap_err();
    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::Unauthorized
    );
}

#[test]
fn owner_may_apply_directly() {
    let mut env = setup();
    let owner = env.owner.clone();
    let user = env.user.clone();

    apply(&mut env, &owner, &[("h1", &user, 1_000_000_000)]).unwrap();
    assert_eq!(cdt_balance(&env, &env.user), 1_000_000_000);
}

#[test]
fn program_rotation_revokes_the_old_relayer() {
    let mut env = setup();
    let owner = env.owner.clone();
    let old_program = env.program.clone();
    let user = env.user.clone();

    env.app
        .execute_contract(
            owner,
            env.bridge.clone(),
            &ExecuteMsg::ChangeProgram {
                program: user.to_string(),
            },
            &[],
        )
        .unwrap();

    let err = apply(&mut env, &old_program, &[("h1", &user, 1_000_000_000)]).unwrap_err();
    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::Unauthorized
    );

    // The new program may apply
    apply(&mut env, &user.clone(), &[("h1", &user, 1_000_000_000)]).unwrap();
}
