use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::globals::Globals;
use crate::item::ItemTemplate;
use crate::trader::Trader;

/// The in-memory database the host builds from `assets/database`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DatabaseTables {
    pub globals: Globals,
    pub templates: Templates,
    /// Keyed by trader id.
    pub traders: BTreeMap<String, Trader>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Templates {
    /// Keyed by template id.
    pub items: BTreeMap<String, ItemTemplate>,
}

impl DatabaseTables {
    pub fn insert_item(&mut self, item: ItemTemplate) {
        self.templates.items.insert(item.id.clone(), item);
    }

    pub fn insert_trader(&mut self, trader: Trader) {
        self.traders.insert(trader.base.id.clone(), trader);
    }

    pub fn item(&self, id: &str) -> Option<&ItemTemplate> {
        self.templates.items.get(id)
    }

    pub fn trader(&self, id: &str) -> Option<&Trader> {
        self.traders.get(id)
    }
}
