//! Balance movement used by `buy_name`.
//!
//! A contract cannot pull coins out of an account, so on chain the buyer
//! attaches the funds to the transaction and `AttachedFunds` spends them.

use cosmwasm_std::{Addr, BankMsg, Coin, MessageInfo};
use cw_utils::NativeBalance;

use crate::coins::format_coins;
use crate::ContractError;

/// Synchronous, all-or-nothing balance movement.
///
/// A failed call must leave every balance untouched and report
/// `ContractError::InsufficientFunds`.
pub trait Bank {
    /// Moves `amount` from `from` to `to`.
    fn transfer(&mut self, from: &Addr, to: &Addr, amount: &[Coin]) -> Result<(), ContractError>;

    /// Removes `amount` from `from` without a payee.
    fn deduct(&mut self, from: &Addr, amount: &[Coin]) -> Result<(), ContractError>;
}

/// Spends the funds sent along with the current message.
///
/// Whatever is left unspent is refunded to the sender by `into_messages`.
pub struct AttachedFunds {
    sender: Addr,
    remaining: NativeBalance,
    messages: Vec<BankMsg>,
}

impl AttachedFunds {
    pub fn new(info: &MessageInfo) -> Self {
        let mut remaining = NativeBalance(info.funds.clone());
        remaining.normalize();
        AttachedFunds {
            sender: info.sender.clone(),
            remaining,
            messages: vec![],
        }
    }

    fn spend(&mut self, from: &Addr, amount: &[Coin]) -> Result<(), ContractError> {
        let insufficient = || ContractError::InsufficientFunds {
            required: format_coins(amount),
        };
        if *from != self.sender || !amount.iter().all(|c| self.remaining.has(c)) {
            return Err(insufficient());
        }
        let mut remaining = self.remaining.clone();
        for c in amount {
            remaining = remaining.sub_saturating(c.clone())?;
        }
        self.remaining = remaining;
        Ok(())
    }

    /// Bank messages to attach to the response: queued payouts first, then
    /// the refund of any unspent funds.
    pub fn into_messages(self) -> Vec<BankMsg> {
        let mut messages = self.messages;
        let refund = self.remaining.into_vec();
        if !refund.is_empty() {
            messages.push(BankMsg::Send {
                to_address: self.sender.into_string(),
                amount: refund,
            });
        }
        messages
    }
}

impl Bank for AttachedFunds {
    fn transfer(&mut self, from: &Addr, to: &Addr, amount: &[Coin]) -> Result<(), ContractError> {
        self.spend(from, amount)?;
        self.messages.push(BankMsg::Send {
            to_address: to.to_string(),
            amount: amount.to_vec(),
        });
        Ok(())
    }

    fn deduct(&mut self, from: &Addr, amount: &[Coin]) -> Result<(), ContractError> {
        // the bid stays with the contract
        self.spend(from, amount)
    }
}
