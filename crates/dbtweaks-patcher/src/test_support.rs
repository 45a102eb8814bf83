//! Fixture builders for tests of the patch engine and of hosts embedding it.
//!
//! The hierarchy mirrors the shape of the real template table: a single root
//! node, intermediate category nodes, then the class nodes items hang off.

use std::collections::BTreeMap;

use dbtweaks_models::trader::known;
use dbtweaks_models::{
    BaseClass, DatabaseTables, HideoutConfig, InsuranceConfig, ItemProps, ItemTemplate, Trader,
};
use serde_json::{json, Map, Value};

pub const ITEM_ROOT: &str = "54009119af1c881c07000029";
pub const STACKABLE_ITEM: &str = "5661632d4bdc2d903d8b456b";
pub const COMPOUND_ITEM: &str = "566162e44bdc2d3f298b4573";

/// Category nodes for every [`BaseClass`], plus the nodes above them.
pub fn sample_hierarchy_items() -> Vec<ItemTemplate> {
    vec![
        ItemTemplate::node(ITEM_ROOT, "").with_name("Item"),
        ItemTemplate::node(STACKABLE_ITEM, ITEM_ROOT).with_name("StackableItem"),
        ItemTemplate::node(COMPOUND_ITEM, ITEM_ROOT).with_name("CompoundItem"),
        ItemTemplate::node(BaseClass::Ammo.template_id(), STACKABLE_ITEM).with_name("Ammo"),
        ItemTemplate::node(BaseClass::Money.template_id(), STACKABLE_ITEM).with_name("Money"),
        ItemTemplate::node(BaseClass::Weapon.template_id(), COMPOUND_ITEM).with_name("Weapon"),
        ItemTemplate::node(BaseClass::Magazine.template_id(), COMPOUND_ITEM)
            .with_name("Magazine"),
    ]
}

pub fn ammo(id: &str, weight: Option<f64>) -> ItemTemplate {
    ItemTemplate::new(id, BaseClass::Ammo.template_id()).with_props(ItemProps {
        weight,
        stack_max_size: Some(60),
        ..ItemProps::default()
    })
}

pub fn money(id: &str, stack_max_size: Option<u64>) -> ItemTemplate {
    ItemTemplate::new(id, BaseClass::Money.template_id()).with_props(ItemProps {
        stack_max_size,
        ..ItemProps::default()
    })
}

pub fn weapon(id: &str, weight: Option<f64>, durability_burn_ratio: Option<f64>) -> ItemTemplate {
    ItemTemplate::new(id, BaseClass::Weapon.template_id()).with_props(ItemProps {
        weight,
        durability_burn_ratio,
        ..ItemProps::default()
    })
}

pub fn magazine(id: &str, weight: Option<f64>) -> ItemTemplate {
    ItemTemplate::new(id, BaseClass::Magazine.template_id()).with_props(ItemProps {
        weight,
        ..ItemProps::default()
    })
}

/// Tables holding the hierarchy, both well-known traders, and the given items.
pub fn tables_with_items(items: Vec<ItemTemplate>) -> DatabaseTables {
    let mut tables = DatabaseTables::default();
    for item in sample_hierarchy_items().into_iter().chain(items) {
        tables.insert_item(item);
    }
    tables.insert_trader(Trader::new(known::PRAPOR, "Prapor"));
    tables.insert_trader(Trader::new(known::THERAPIST, "Therapist"));
    tables
}

/// A small but representative database: a few rounds, currencies, and guns.
pub fn sample_tables() -> DatabaseTables {
    tables_with_items(vec![
        ammo("5656d7c34bdc2d9d198b4587", Some(0.01)),
        ammo("56dff3afd2720bba668b4567", Some(0.012)),
        ammo("5c0d5e4486f77478390952fe", None),
        money("5449016a4bdc2d6f028b456f", Some(500_000)),
        money("5696686a4bdc2da3298b456a", Some(50_000)),
        weapon("5644bd2b4bdc2d3b4c8b4572", Some(3.3), Some(1.15)),
        weapon("5bf3e03b0db834001d2c4a9c", Some(3.1), None),
        magazine("55d480c04bdc2d1d4e8b456a", Some(0.14)),
    ])
}

pub fn sample_insurance() -> InsuranceConfig {
    let mut multipliers = BTreeMap::new();
    multipliers.insert(known::PRAPOR.to_string(), 0.16);
    multipliers.insert(known::THERAPIST.to_string(), 0.25);
    InsuranceConfig {
        insurance_multiplier: Some(multipliers),
        return_chance_percent: None,
        extra: extras(json!({ "runIntervalSeconds": 600 })),
    }
}

pub fn sample_hideout() -> HideoutConfig {
    HideoutConfig {
        override_build_time_seconds: Some(-1),
        override_craft_time_seconds: Some(-1),
        extra: extras(json!({ "runIntervalSeconds": 10 })),
    }
}

fn extras(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}
