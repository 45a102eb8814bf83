//! End-to-end behaviour of the built-in modules against fixture databases.
//!
//! Each test builds tables with `test_support`, lends them to a module through
//! a `Dataset`, and inspects the tables afterwards.

use std::collections::BTreeMap;

use dbtweaks_models::trader::known;
use dbtweaks_models::{
    ConfigType, DatabaseTables, Edit, HideoutConfig, InsuranceConfig, InsuranceField,
    PatchProfile,
};
use dbtweaks_patcher::test_support::{
    ammo, sample_hideout, sample_insurance, sample_tables, tables_with_items, weapon,
};
use dbtweaks_patcher::{
    apply_profile, Dataset, ItemHierarchy, PatchError, PostDbLoadMod, ProfileMod,
};

fn run_module(
    module: &ProfileMod,
    tables: &mut DatabaseTables,
    insurance: &mut InsuranceConfig,
    hideout: &mut HideoutConfig,
) -> Result<dbtweaks_models::PatchReport, PatchError> {
    let hierarchy = ItemHierarchy::from_items(&tables.templates.items);
    let dataset = Dataset::new(tables, &hierarchy)
        .with_insurance(insurance)
        .with_hideout(hideout);
    module.post_db_load(dataset)
}

/// Ammo with a weight is zeroed, ammo without one is left alone, and a weapon
/// carrying the same field is out of scope.
#[test]
fn ammo_weight_scenario() {
    let mut tables = tables_with_items(vec![
        ammo("ammo_with_weight", Some(5.0)),
        ammo("ammo_without_weight", None),
        weapon("weapon", Some(5.0), None),
    ]);
    let before_unweighted = tables.item("ammo_without_weight").unwrap().clone();

    let module = ProfileMod::builtin("bois").unwrap();
    run_module(
        &module,
        &mut tables,
        &mut sample_insurance(),
        &mut sample_hideout(),
    )
    .unwrap();

    assert_eq!(tables.item("ammo_with_weight").unwrap().props.weight, Some(0.0));
    assert_eq!(tables.item("ammo_without_weight").unwrap(), &before_unweighted);
    assert_eq!(tables.item("weapon").unwrap().props.weight, Some(5.0));

    let json = serde_json::to_value(tables.item("ammo_without_weight").unwrap()).unwrap();
    assert!(json["_props"].get("Weight").is_none());
}

#[test]
fn weapon_burn_ratio_scenario() {
    let mut tables = tables_with_items(vec![weapon("ak", Some(3.3), Some(1.15))]);

    let module = ProfileMod::builtin("bois").unwrap();
    run_module(
        &module,
        &mut tables,
        &mut sample_insurance(),
        &mut sample_hideout(),
    )
    .unwrap();

    assert_eq!(
        tables.item("ak").unwrap().props.durability_burn_ratio,
        Some(0.75)
    );
}

#[test]
fn hideout_variant_uses_its_own_values() {
    let mut tables = tables_with_items(vec![weapon("ak", Some(3.3), Some(1.15))]);
    let mut hideout = sample_hideout();

    let module = ProfileMod::builtin("bois-hideout").unwrap();
    run_module(&module, &mut tables, &mut sample_insurance(), &mut hideout).unwrap();

    assert_eq!(
        tables.item("ak").unwrap().props.durability_burn_ratio,
        Some(0.5)
    );
    assert_eq!(hideout.override_build_time_seconds, Some(60));
    assert_eq!(hideout.override_craft_time_seconds, Some(60));
    assert_eq!(hideout.extra["runIntervalSeconds"], 10);
}

/// A missing multiplier map is created with exactly the module's entries.
#[test]
fn insurance_multiplier_is_replaced_wholesale() {
    let mut tables = sample_tables();
    let mut insurance = InsuranceConfig::default();
    assert!(insurance.insurance_multiplier.is_none());

    let module = ProfileMod::builtin("bois").unwrap();
    run_module(&module, &mut tables, &mut insurance, &mut sample_hideout()).unwrap();

    let mut expected = BTreeMap::new();
    expected.insert(known::PRAPOR.to_string(), 0.25);
    expected.insert(known::THERAPIST.to_string(), 0.75);
    assert_eq!(insurance.insurance_multiplier, Some(expected));

    let mut expected_chance = BTreeMap::new();
    expected_chance.insert(known::PRAPOR.to_string(), 80.0);
    expected_chance.insert(known::THERAPIST.to_string(), 100.0);
    assert_eq!(insurance.return_chance_percent, Some(expected_chance));
}

#[test]
fn stale_multiplier_entries_are_dropped() {
    let mut tables = sample_tables();
    let mut insurance = sample_insurance();
    insurance
        .insurance_multiplier
        .as_mut()
        .unwrap()
        .insert("5a7c2eca46aef81a7ca2145d".to_string(), 0.3);

    let module = ProfileMod::builtin("bois").unwrap();
    run_module(&module, &mut tables, &mut insurance, &mut sample_hideout()).unwrap();

    let multipliers = insurance.insurance_multiplier.unwrap();
    assert_eq!(multipliers.len(), 2);
    assert!(!multipliers.contains_key("5a7c2eca46aef81a7ca2145d"));
}

/// A missing trader aborts the pass before anything is written.
#[test]
fn missing_trader_fails_without_partial_writes() {
    let mut tables = sample_tables();
    tables.traders.remove(known::THERAPIST);
    let mut insurance = sample_insurance();
    let mut hideout = sample_hideout();

    let tables_before = tables.clone();
    let insurance_before = insurance.clone();

    let module = ProfileMod::builtin("bois").unwrap();
    let err = run_module(&module, &mut tables, &mut insurance, &mut hideout).unwrap_err();

    match err {
        PatchError::MissingTrader { trader_id, .. } => assert_eq!(trader_id, known::THERAPIST),
        other => panic!("expected MissingTrader, got {other:?}"),
    }
    assert_eq!(tables, tables_before);
    assert_eq!(insurance, insurance_before);
}

#[test]
fn missing_hideout_config_is_reported() {
    let mut tables = sample_tables();
    let mut insurance = sample_insurance();
    let hierarchy = ItemHierarchy::from_items(&tables.templates.items);
    let tables_before = tables.clone();

    let module = ProfileMod::builtin("bois-hideout").unwrap();
    let dataset = Dataset::new(&mut tables, &hierarchy).with_insurance(&mut insurance);
    let err = module.post_db_load(dataset).unwrap_err();

    assert!(matches!(
        err,
        PatchError::MissingConfig {
            category: ConfigType::Hideout
        }
    ));
    assert_eq!(tables, tables_before);
}

/// `bois` never touches the hideout config, so it runs without one.
#[test]
fn bois_runs_without_hideout_config() {
    let mut tables = sample_tables();
    let mut insurance = sample_insurance();
    let hierarchy = ItemHierarchy::from_items(&tables.templates.items);

    let module = ProfileMod::builtin("bois").unwrap();
    let dataset = Dataset::new(&mut tables, &hierarchy).with_insurance(&mut insurance);
    module.post_db_load(dataset).unwrap();

    assert_eq!(tables.globals.config.rag_fair.min_user_level, 10);
}

#[test]
fn applying_twice_matches_applying_once() {
    let module = ProfileMod::builtin("bois-hideout").unwrap();

    let mut once = sample_tables();
    let mut once_insurance = sample_insurance();
    let mut once_hideout = sample_hideout();
    run_module(&module, &mut once, &mut once_insurance, &mut once_hideout).unwrap();

    let mut twice = sample_tables();
    let mut twice_insurance = sample_insurance();
    let mut twice_hideout = sample_hideout();
    run_module(&module, &mut twice, &mut twice_insurance, &mut twice_hideout).unwrap();
    run_module(&module, &mut twice, &mut twice_insurance, &mut twice_hideout).unwrap();

    assert_eq!(once, twice);
    assert_eq!(once_insurance, twice_insurance);
    assert_eq!(once_hideout, twice_hideout);
}

/// Every direct trader edit reads back as the declared value.
#[test]
fn direct_edits_read_back() {
    let module = ProfileMod::builtin("bois").unwrap();
    let mut tables = sample_tables();
    run_module(
        &module,
        &mut tables,
        &mut sample_insurance(),
        &mut sample_hideout(),
    )
    .unwrap();

    let rag_fair = &tables.globals.config.rag_fair;
    assert_eq!(rag_fair.min_user_level, 10);
    assert!(!rag_fair.is_only_found_in_raid_allowed);

    for edit in &module.profile().edits {
        if let Edit::TraderInsurance {
            trader,
            field,
            value,
        } = edit
        {
            let insurance = &tables.trader(trader).unwrap().base.insurance;
            let actual = match field {
                InsuranceField::MaxReturnHour => insurance.max_return_hour,
                InsuranceField::MinReturnHour => insurance.min_return_hour,
                InsuranceField::MaxStorageTime => insurance.max_storage_time,
            };
            assert_eq!(actual, *value, "{edit}");
        }
    }
}

#[test]
fn report_counts_written_and_skipped() {
    let module = ProfileMod::builtin("bois").unwrap();
    let mut tables = sample_tables();
    let report = run_module(
        &module,
        &mut tables,
        &mut sample_insurance(),
        &mut sample_hideout(),
    )
    .unwrap();

    assert_eq!(report.module, "bois");
    assert_eq!(report.outcomes.len(), module.profile().edits.len());

    let weight = report
        .outcomes
        .iter()
        .find(|o| o.edit.contains("Weight"))
        .unwrap();
    assert_eq!((weight.written, weight.skipped), (2, 1));

    let burn = report
        .outcomes
        .iter()
        .find(|o| o.edit.contains("DurabilityBurnRatio"))
        .unwrap();
    assert_eq!((burn.written, burn.skipped), (1, 1));

    for money in ["5449016a4bdc2d6f028b456f", "5696686a4bdc2da3298b456a"] {
        assert_eq!(
            tables.item(money).unwrap().props.stack_max_size,
            Some(5_000_000)
        );
    }
}

#[test]
fn magazines_are_not_ammo() {
    let module = ProfileMod::builtin("bois").unwrap();
    let mut tables = sample_tables();
    run_module(
        &module,
        &mut tables,
        &mut sample_insurance(),
        &mut sample_hideout(),
    )
    .unwrap();

    assert_eq!(
        tables.item("55d480c04bdc2d1d4e8b456a").unwrap().props.weight,
        Some(0.14)
    );
}

#[test]
fn edits_apply_in_declared_order() {
    let profile = PatchProfile {
        name: "ordering".to_string(),
        version: 2,
        description: None,
        edits: vec![
            Edit::RagFairMinUserLevel { value: 5 },
            Edit::RagFairMinUserLevel { value: 20 },
        ],
    };
    let mut tables = sample_tables();
    let hierarchy = ItemHierarchy::from_items(&tables.templates.items);
    let mut dataset = Dataset::new(&mut tables, &hierarchy);

    let outcomes = apply_profile(&profile, &mut dataset).unwrap();
    assert_eq!(outcomes.len(), 2);
    assert_eq!(tables.globals.config.rag_fair.min_user_level, 20);
}

#[test]
fn empty_item_table_is_valid() {
    let mut tables = DatabaseTables::default();
    tables.insert_trader(dbtweaks_models::Trader::new(known::PRAPOR, "Prapor"));
    tables.insert_trader(dbtweaks_models::Trader::new(known::THERAPIST, "Therapist"));

    let module = ProfileMod::builtin("bois").unwrap();
    let report = run_module(
        &module,
        &mut tables,
        &mut InsuranceConfig::default(),
        &mut HideoutConfig::default(),
    )
    .unwrap();

    assert_eq!(report.outcomes.iter().map(|o| o.skipped).sum::<usize>(), 0);
    assert!(tables.templates.items.is_empty());
}
