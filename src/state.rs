use cosmwasm_schema::cw_serde;
use cosmwasm_std::{coin, Addr, Coin};
use cw_storage_plus::Item;

/// Denomination of the default price when none is configured.
pub const DEFAULT_DENOM: &str = "nametoken";

/// Namespace holding one `Record` per name.
pub const RECORDS_NAMESPACE: &str = "records";

#[cw_serde]
pub struct Config {
    /// Price of a name that has never been bought.
    pub default_price: Coin,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_price: coin(1, DEFAULT_DENOM),
        }
    }
}

pub const CONFIG: Item<Config> = Item::new("config");

#[cw_serde]
pub struct Record {
    /// `None` or the empty address means the name is unowned, whatever
    /// value and price say.
    pub owner: Option<Addr>,
    pub value: String,
    pub price: Vec<Coin>,
}

impl Record {
    /// The record every never-written name resolves to.
    pub fn unowned(default_price: Vec<Coin>) -> Self {
        Record {
            owner: None,
            value: String::new(),
            price: default_price,
        }
    }

    /// The owner, unless it is missing or the empty address.
    pub fn current_owner(&self) -> Option<&Addr> {
        self.owner.as_ref().filter(|a| !a.as_str().is_empty())
    }

    pub fn has_owner(&self) -> bool {
        self.current_owner().is_some()
    }
}
