//! Tag based dispatch for hosts that hand over raw requests instead of
//! the typed `ExecuteMsg` / `QueryMsg` enums.

use cosmwasm_std::from_slice;
use serde::de::DeserializeOwned;

use crate::msg::{MsgBuyName, MsgSetName, QueryMsg, Transition, BUY_NAME, ROUTE, SET_NAME};
use crate::ContractError;

pub const QUERY_RESOLVE: &str = "resolve";
pub const QUERY_WHOIS: &str = "whois";
pub const QUERY_NAMES: &str = "names";

fn decode<T: DeserializeOwned>(payload: &[u8]) -> Result<T, ContractError> {
    from_slice(payload).map_err(|e| ContractError::validation(e.to_string()))
}

/// Decodes a transition addressed to `route` with type tag `kind`.
pub fn route_transition(
    route: &str,
    kind: &str,
    payload: &[u8],
) -> Result<Transition, ContractError> {
    if route != ROUTE {
        return Err(ContractError::unknown_request(format!("route {}", route)));
    }
    match kind {
        SET_NAME => Ok(Transition::SetName(decode::<MsgSetName>(payload)?)),
        BUY_NAME => Ok(Transition::BuyName(decode::<MsgBuyName>(payload)?)),
        _ => Err(ContractError::unknown_request(kind)),
    }
}

/// Maps a query path such as `["whois", "alice.id"]` onto a `QueryMsg`.
pub fn route_query(path: &[&str]) -> Result<QueryMsg, ContractError> {
    match path {
        [QUERY_RESOLVE, name] => Ok(QueryMsg::Resolve {
            name: name.to_string(),
        }),
        [QUERY_WHOIS, name] => Ok(QueryMsg::Whois {
            name: name.to_string(),
        }),
        [QUERY_NAMES] => Ok(QueryMsg::Names {}),
        _ => Err(ContractError::unknown_request(format!(
            "query endpoint {}",
            path.join("/")
        ))),
    }
}
