use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: incorrect owner for {name}")]
    Unauthorized { name: String },

    #[error("Invalid request: {reason}")]
    Validation { reason: String },

    #[error("Bid not high enough: bid {bid} does not exceed price {price}")]
    InsufficientBid { bid: String, price: String },

    #[error("Buyer does not have enough coins: required {required}")]
    InsufficientFunds { required: String },

    #[error("Unrecognized nameservice request: {kind}")]
    UnknownRequest { kind: String },

    #[error("Could not resolve name: {name}")]
    UnresolvableName { name: String },
}

impl ContractError {
    pub fn validation(reason: impl Into<String>) -> Self {
        ContractError::Validation {
            reason: reason.into(),
        }
    }

    pub fn unknown_request(kind: impl Into<String>) -> Self {
        ContractError::UnknownRequest { kind: kind.into() }
    }
}
