//! Inbound credit handler.
//!
//! An authorized relayer submits a batch of transfers observed on the remote
//! chain. Each item is credited at most once: the ledger's seen markers are
//! the sole non-replay guarantee, and a replayed hash aborts the whole batch
//! so nothing is applied partially.

use cosmwasm_std::{to_json_binary, CosmosMsg, DepsMut, MessageInfo, Response, Uint128, WasmMsg};
use cw20::Cw20ExecuteMsg;

use crate::access::ensure_program_or_owner;
use crate::error::ContractError;
use crate::ledger;
use crate::state::CONFIG;

pub fn execute_apply_transfers(
    deps: DepsMut,
    info: MessageInfo,
    from_chains: Vec<String>,
    recipients: Vec<String>,
    amounts: Vec<Uint128>,
    hashes: Vec<String>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_program_or_owner(&config, &info.sender)?;

    // The four arrays are positionally correlated; silently truncating to
    // the shortest would mis-credit custody, so lengths must match exactly.
    let len = recipients.len();
    if from_chains.len() != len || amounts.len() != len || hashes.len() != len {
        return Err(ContractError::InvalidArgument {
            reason: format!(
                "array length mismatch: from_chains={}, recipients={}, amounts={}, hashes={}",
                from_chains.len(),
                len,
                amounts.len(),
                hashes.len()
            ),
        });
    }

    let mut messages: Vec<CosmosMsg> = Vec::with_capacity(len);
    for i in 0..len {
        // Rejects replays with AlreadyProcessed, aborting the batch
        ledger::mark_seen(deps.storage, &hashes[i])?;

        let recipient = deps.api.addr_validate(&recipients[i])?;
        messages.push(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: config.token.to_string(),
            msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
                recipient: recipient.to_string(),
                amount: amounts[i],
            })?,
            funds: vec![],
        }));
    }

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("method", "apply_transfers")
        .add_attribute("count", len.to_string()))
}
