//! Outbound transfer handler.
//!
//! `InitiateTransfer` debits the caller's CDT into custody, splits the fee,
//! and appends a ledger record. Delivery on the destination chain is phase
//! two of the protocol and belongs to off-chain relayers reading the ledger;
//! this contract never moves funds to the far side.

use cosmwasm_std::{
    to_json_binary, CosmosMsg, DepsMut, Env, MessageInfo, Response, Uint128, WasmMsg,
};
use cw20::Cw20ExecuteMsg;

use crate::access::ensure_active;
use crate::error::ContractError;
use crate::execute::attached_amount;
use crate::fees::{fee_in_native, fee_in_token};
use crate::hash::{compute_transfer_hash, hash_to_hex};
use crate::ledger;
use crate::oracle::{cw20_allowance, cw20_balance};
use crate::state::{TransferRecord, COLLECTED_FEES, CONFIG};

/// Nonce for locally-originated transfer hashes. Fixed at zero: hash
/// uniqueness within a block is not guaranteed and relayers tolerate it.
const OUTBOUND_NONCE: u64 = 0;

pub fn execute_initiate_transfer(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    quantity: Uint128,
    to_chain: String,
    data: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_active(&config)?;

    // Service fee in native coin, converted through the oracle
    let native_fee = fee_in_native(deps.as_ref())?;
    let paid = attached_amount(&info, &config.fee_denom);
    if paid < native_fee {
        return Err(ContractError::InsufficientFee {
            expected: native_fee,
            got: paid,
        });
    }

    if quantity < config.minimum_transfer_quantity {
        return Err(ContractError::BelowMinimumQuantity {
            min: config.minimum_transfer_quantity,
        });
    }

    // The caller must both hold and have approved the gross quantity
    let balance = cw20_balance(&deps.querier, &config.token, &info.sender)?;
    if balance < quantity {
        return Err(ContractError::InsufficientBalance);
    }
    let allowance = cw20_allowance(
        &deps.querier,
        &config.token,
        &info.sender,
        &env.contract.address,
    )?;
    if allowance < quantity {
        return Err(ContractError::InsufficientAllowance);
    }

    let debit = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
            owner: info.sender.to_string(),
            recipient: env.contract.address.to_string(),
            amount: quantity,
        })?,
        funds: vec![],
    });

    // Fee split; the net quantity is what the far side credits
    let fee = fee_in_token(quantity, config.fees_in_cdt_percentage)?;
    let net_quantity = quantity - fee;

    let collected = COLLECTED_FEES.load(deps.storage)?;
    COLLECTED_FEES.save(deps.storage, &(collected + fee))?;

    let timestamp = env.block.time.seconds();
    let hash = compute_transfer_hash(timestamp, OUTBOUND_NONCE, info.sender.as_str());

    let record = TransferRecord {
        hash: hash.clone(),
        from: info.sender.to_string(),
        token: config.token.to_string(),
        quantity: net_quantity,
        from_chain: config.bridge_chain.clone(),
        to_chain: to_chain.clone(),
        fees_in_cdt: fee,
        fees_in_native: paid,
        block_timestamp: timestamp,
        // 0 until the destination chain confirms delivery
        block_number: 0,
        data,
    };
    let index = ledger::append(deps.storage, &record)?;

    Ok(Response::new()
        .add_message(debit)
        .add_attribute("method", "initiate_transfer")
        .add_attribute("index", index.to_string())
        .add_attribute("hash", hash_to_hex(&hash))
        .add_attribute("sender", info.sender)
        .add_attribute("quantity", net_quantity.to_string())
        .add_attribute("fee", fee.to_string())
        .add_attribute("to_chain", to_chain))
}
