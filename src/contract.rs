#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult, Storage,
};
use cw2::set_contract_version;

use crate::bank::{AttachedFunds, Bank};
use crate::coins::{format_coins, is_all_gt};
use crate::error::ContractError;
use crate::keeper::Keeper;
use crate::msg::{
    ConfigResponse, ExecuteMsg, InstantiateMsg, MsgBuyName, MsgSetName, QueryMsg,
    ResolveResponse, Transition,
};
use crate::state::{Config, Record, CONFIG};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:cw-nameservice";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = match msg.default_price {
        Some(default_price) => Config { default_price },
        None => Config::default(),
    };
    if config.default_price.amount.is_zero() {
        return Err(ContractError::validation("default price must be positive"));
    }
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("default_price", config.default_price.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    let transition = msg.into_transition(info.sender.clone());
    transition.validate_basic()?;

    let config = CONFIG.load(deps.storage)?;
    let keeper = Keeper::new(&config);
    let mut bank = AttachedFunds::new(&info);

    let res = handle(deps.storage, &keeper, &mut bank, transition)?;
    Ok(res.add_messages(bank.into_messages()))
}

/// Applies one validated transition.
///
/// Every check runs before the first write, so a rejected transition
/// leaves the store untouched.
pub fn handle<B: Bank>(
    store: &mut dyn Storage,
    keeper: &Keeper,
    bank: &mut B,
    transition: Transition,
) -> Result<Response, ContractError> {
    match transition {
        Transition::SetName(msg) => execute_set_name(store, keeper, msg),
        Transition::BuyName(msg) => execute_buy_name(store, keeper, bank, msg),
    }
}

pub fn execute_set_name(
    store: &mut dyn Storage,
    keeper: &Keeper,
    msg: MsgSetName,
) -> Result<Response, ContractError> {
    // an unowned name has no owner to match
    if keeper.owner(store, &msg.name)?.as_ref() != Some(&msg.owner) {
        return Err(ContractError::Unauthorized { name: msg.name });
    }
    keeper.set_value(store, &msg.name, msg.value)?;

    Ok(Response::new()
        .add_attribute("action", "set_name")
        .add_attribute("name", msg.name)
        .add_attribute("owner", msg.owner))
}

pub fn execute_buy_name<B: Bank>(
    store: &mut dyn Storage,
    keeper: &Keeper,
    bank: &mut B,
    msg: MsgBuyName,
) -> Result<Response, ContractError> {
    let record = keeper.record(store, &msg.name)?;
    if !is_all_gt(&msg.bid, &record.price) {
        return Err(ContractError::InsufficientBid {
            bid: format_coins(&msg.bid),
            price: format_coins(&record.price),
        });
    }

    let mut res = Response::new()
        .add_attribute("action", "buy_name")
        .add_attribute("name", msg.name.clone())
        .add_attribute("buyer", msg.buyer.clone())
        .add_attribute("price", format_coins(&msg.bid));

    match record.current_owner().cloned() {
        Some(previous_owner) => {
            bank.transfer(&msg.buyer, &previous_owner, &msg.bid)?;
            res = res.add_attribute("previous_owner", previous_owner);
        }
        None => bank.deduct(&msg.buyer, &msg.bid)?,
    }

    keeper.set_owner(store, &msg.name, msg.buyer)?;
    keeper.set_price(store, &msg.name, msg.bid)?;

    Ok(res)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let keeper = Keeper::new(&config);
    match msg {
        QueryMsg::Resolve { name } => Ok(to_binary(&query_resolve(deps, &keeper, name)?)?),
        QueryMsg::Whois { name } => Ok(to_binary(&query_whois(deps, &keeper, &name)?)?),
        QueryMsg::Names {} => Ok(to_binary(&query_names(deps, &keeper)?)?),
        QueryMsg::Config {} => Ok(to_binary(&ConfigResponse::from(config))?),
    }
}

fn query_resolve(
    deps: Deps,
    keeper: &Keeper,
    name: String,
) -> Result<ResolveResponse, ContractError> {
    let value = keeper.resolve(deps.storage, &name)?;
    if value.is_empty() {
        return Err(ContractError::UnresolvableName { name });
    }
    Ok(ResolveResponse { value })
}

fn query_whois(deps: Deps, keeper: &Keeper, name: &str) -> StdResult<Record> {
    keeper.record(deps.storage, name)
}

fn query_names(deps: Deps, keeper: &Keeper) -> StdResult<Vec<String>> {
    keeper.names(deps.storage).collect()
}
