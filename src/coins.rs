//! Comparisons over multi-denomination amounts.
//!
//! Prices and bids are plain `Vec<Coin>`. A denomination missing from one
//! side counts as zero on that side.

use std::collections::BTreeSet;

use cosmwasm_std::{Coin, Uint128};

pub fn amount_of(coins: &[Coin], denom: &str) -> Uint128 {
    coins
        .iter()
        .filter(|c| c.denom == denom)
        .map(|c| c.amount)
        .fold(Uint128::zero(), |acc, a| acc + a)
}

/// True iff `coins` is non-empty and every entry has a positive amount.
pub fn is_all_positive(coins: &[Coin]) -> bool {
    !coins.is_empty() && coins.iter().all(|c| !c.amount.is_zero())
}

pub fn has_duplicate_denoms(coins: &[Coin]) -> bool {
    let mut seen = BTreeSet::new();
    coins.iter().any(|c| !seen.insert(c.denom.as_str()))
}

/// True iff `a` strictly exceeds `b` in every denomination present in either.
/// An empty `a` never exceeds anything.
pub fn is_all_gt(a: &[Coin], b: &[Coin]) -> bool {
    if a.is_empty() {
        return false;
    }
    a.iter()
        .chain(b.iter())
        .map(|c| c.denom.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .all(|denom| amount_of(a, denom) > amount_of(b, denom))
}

pub fn format_coins(coins: &[Coin]) -> String {
    if coins.is_empty() {
        return "0".to_string();
    }
    coins
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
