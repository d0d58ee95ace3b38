use cosmwasm_std::{Addr, Coin, Order, StdResult, Storage};
use cw_storage_plus::Map;

use crate::state::{Config, Record, RECORDS_NAMESPACE};

/// Sole owner of the name records.
///
/// Holds the record namespace and the default price only. Every getter
/// reads through the storage it is handed and every setter does one read
/// followed by at most one write.
pub struct Keeper<'a> {
    records: Map<'a, &'a str, Record>,
    default_price: Vec<Coin>,
}

impl<'a> Keeper<'a> {
    pub fn new(config: &Config) -> Self {
        Keeper {
            records: Map::new(RECORDS_NAMESPACE),
            default_price: vec![config.default_price.clone()],
        }
    }

    /// Stored record for `name`, or the unowned record if none was written.
    pub fn record(&self, store: &dyn Storage, name: &str) -> StdResult<Record> {
        Ok(self
            .records
            .may_load(store, name)?
            .unwrap_or_else(|| Record::unowned(self.default_price.clone())))
    }

    /// Writes `record` unless it has no owner; unowned records never reach the store.
    pub fn set_record(
        &self,
        store: &mut dyn Storage,
        name: &str,
        record: &Record,
    ) -> StdResult<()> {
        if !record.has_owner() {
            return Ok(());
        }
        self.records.save(store, name, record)
    }

    pub fn resolve(&self, store: &dyn Storage, name: &str) -> StdResult<String> {
        Ok(self.record(store, name)?.value)
    }

    pub fn set_value(&self, store: &mut dyn Storage, name: &str, value: String) -> StdResult<()> {
        let mut record = self.record(store, name)?;
        record.value = value;
        self.set_record(store, name, &record)
    }

    pub fn has_owner(&self, store: &dyn Storage, name: &str) -> StdResult<bool> {
        Ok(self.record(store, name)?.has_owner())
    }

    pub fn owner(&self, store: &dyn Storage, name: &str) -> StdResult<Option<Addr>> {
        Ok(self.record(store, name)?.current_owner().cloned())
    }

    pub fn set_owner(&self, store: &mut dyn Storage, name: &str, owner: Addr) -> StdResult<()> {
        let mut record = self.record(store, name)?;
        record.owner = Some(owner);
        self.set_record(store, name, &record)
    }

    pub fn price(&self, store: &dyn Storage, name: &str) -> StdResult<Vec<Coin>> {
        Ok(self.record(store, name)?.price)
    }

    pub fn set_price(
        &self,
        store: &mut dyn Storage,
        name: &str,
        price: Vec<Coin>,
    ) -> StdResult<()> {
        let mut record = self.record(store, name)?;
        record.price = price;
        self.set_record(store, name, &record)
    }

    /// Lazily walks every stored name in ascending key order.
    ///
    /// Each call starts a fresh walk over the store as it is now.
    pub fn names<'c>(
        &self,
        store: &'c dyn Storage,
    ) -> Box<dyn Iterator<Item = StdResult<String>> + 'c> {
        self.records.keys(store, None, None, Order::Ascending)
    }
}
