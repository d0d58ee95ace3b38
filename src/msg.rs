use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Coin};

use crate::coins::{has_duplicate_denoms, is_all_positive};
use crate::state::{Config, Record};
use crate::ContractError;

/// Route every nameservice transition carries.
pub const ROUTE: &str = "nameservice";

pub const SET_NAME: &str = "set_name";
pub const BUY_NAME: &str = "buy_name";

#[cw_serde]
pub struct InstantiateMsg {
    /// Price of a never-bought name. Defaults to one `nametoken`.
    pub default_price: Option<Coin>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Point `name` at `value`. Only the current owner may do this.
    SetName { name: String, value: String },
    /// Take over `name` by bidding more than its current price.
    /// The bid must be attached to the message as funds.
    BuyName { name: String, bid: Vec<Coin> },
}

impl ExecuteMsg {
    /// Binds the message to the account that signed it.
    pub fn into_transition(self, signer: Addr) -> Transition {
        match self {
            ExecuteMsg::SetName { name, value } => Transition::SetName(MsgSetName {
                name,
                value,
                owner: signer,
            }),
            ExecuteMsg::BuyName { name, bid } => Transition::BuyName(MsgBuyName {
                name,
                bid,
                buyer: signer,
            }),
        }
    }
}

#[cw_serde]
pub struct MsgSetName {
    pub name: String,
    pub value: String,
    pub owner: Addr,
}

impl MsgSetName {
    pub fn validate_basic(&self) -> Result<(), ContractError> {
        if self.owner.as_str().is_empty() {
            return Err(ContractError::validation("owner address cannot be empty"));
        }
        if self.name.is_empty() || self.value.is_empty() {
            return Err(ContractError::validation("name and/or value cannot be empty"));
        }
        Ok(())
    }

    pub fn signers(&self) -> Vec<&Addr> {
        vec![&self.owner]
    }
}

#[cw_serde]
pub struct MsgBuyName {
    pub name: String,
    pub bid: Vec<Coin>,
    pub buyer: Addr,
}

impl MsgBuyName {
    pub fn validate_basic(&self) -> Result<(), ContractError> {
        if self.buyer.as_str().is_empty() {
            return Err(ContractError::validation("buyer address cannot be empty"));
        }
        if self.name.is_empty() {
            return Err(ContractError::validation("name cannot be empty"));
        }
        if !is_all_positive(&self.bid) {
            return Err(ContractError::validation("bids must be positive"));
        }
        if has_duplicate_denoms(&self.bid) {
            return Err(ContractError::validation("bid lists a denomination twice"));
        }
        Ok(())
    }

    pub fn signers(&self) -> Vec<&Addr> {
        vec![&self.buyer]
    }
}

/// Every state change the registry accepts.
#[cw_serde]
pub enum Transition {
    SetName(MsgSetName),
    BuyName(MsgBuyName),
}

impl Transition {
    pub fn route(&self) -> &'static str {
        ROUTE
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Transition::SetName(_) => SET_NAME,
            Transition::BuyName(_) => BUY_NAME,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Transition::SetName(msg) => &msg.name,
            Transition::BuyName(msg) => &msg.name,
        }
    }

    pub fn validate_basic(&self) -> Result<(), ContractError> {
        match self {
            Transition::SetName(msg) => msg.validate_basic(),
            Transition::BuyName(msg) => msg.validate_basic(),
        }
    }

    pub fn signers(&self) -> Vec<&Addr> {
        match self {
            Transition::SetName(msg) => msg.signers(),
            Transition::BuyName(msg) => msg.signers(),
        }
    }
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    // Resolve returns the value a name points at
    #[returns(ResolveResponse)]
    Resolve { name: String },
    // Whois returns the full record of a name, owned or not
    #[returns(Record)]
    Whois { name: String },
    #[returns(Vec<String>)]
    Names {},
    #[returns(ConfigResponse)]
    Config {},
}

#[cw_serde]
pub struct ResolveResponse {
    pub value: String,
}

#[cw_serde]
pub struct ConfigResponse {
    pub default_price: Coin,
}

impl From<Config> for ConfigResponse {
    fn from(config: Config) -> Self {
        ConfigResponse {
            default_price: config.default_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::coin;

    fn set_name(name: &str, value: &str, owner: &str) -> MsgSetName {
        MsgSetName {
            name: name.to_string(),
            value: value.to_string(),
            owner: Addr::unchecked(owner),
        }
    }

    fn buy_name(name: &str, bid: Vec<Coin>, buyer: &str) -> MsgBuyName {
        MsgBuyName {
            name: name.to_string(),
            bid,
            buyer: Addr::unchecked(buyer),
        }
    }

    #[test]
    fn set_name_validation() {
        assert!(set_name("alice.id", "1.1.1.1", "alice").validate_basic().is_ok());
        for msg in [
            set_name("", "1.1.1.1", "alice"),
            set_name("alice.id", "", "alice"),
            set_name("alice.id", "1.1.1.1", ""),
        ] {
            assert!(matches!(
                msg.validate_basic(),
                Err(ContractError::Validation { .. })
            ));
        }
    }

    #[test]
    fn buy_name_validation() {
        let ok = buy_name("alice.id", vec![coin(5, "nametoken")], "bob");
        assert!(ok.validate_basic().is_ok());

        for msg in [
            buy_name("", vec![coin(5, "nametoken")], "bob"),
            buy_name("alice.id", vec![coin(5, "nametoken")], ""),
            buy_name("alice.id", vec![], "bob"),
            buy_name("alice.id", vec![coin(0, "nametoken")], "bob"),
            buy_name("alice.id", vec![coin(1, "a"), coin(2, "a")], "bob"),
        ] {
            assert!(matches!(
                msg.validate_basic(),
                Err(ContractError::Validation { .. })
            ));
        }
    }

    #[test]
    fn signer_binding_and_tags() {
        let transition = ExecuteMsg::SetName {
            name: "alice.id".to_string(),
            value: "v".to_string(),
        }
        .into_transition(Addr::unchecked("alice"));
        assert_eq!(transition.route(), ROUTE);
        assert_eq!(transition.kind(), SET_NAME);
        assert_eq!(transition.name(), "alice.id");
        assert_eq!(transition.signers(), vec![&Addr::unchecked("alice")]);

        let transition = ExecuteMsg::BuyName {
            name: "alice.id".to_string(),
            bid: vec![coin(2, "nametoken")],
        }
        .into_transition(Addr::unchecked("bob"));
        assert_eq!(transition.kind(), BUY_NAME);
        assert_eq!(transition.signers(), vec![&Addr::unchecked("bob")]);
    }
}
