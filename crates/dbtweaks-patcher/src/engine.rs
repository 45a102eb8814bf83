use std::collections::BTreeMap;

use dbtweaks_models::{
    BaseClass, ConfigType, Edit, EditOutcome, InsuranceField, ItemProps, ItemTemplate,
    PatchProfile,
};
use tracing::{debug, info};

use crate::classifier::ItemClassifier;
use crate::dataset::Dataset;
use crate::error::PatchError;

/// Check every direct-keyed target of `profile` against the dataset.
///
/// Runs before any write so a failing profile leaves the dataset untouched.
pub fn validate_profile(profile: &PatchProfile, dataset: &Dataset<'_>) -> Result<(), PatchError> {
    for edit in &profile.edits {
        if let Some(trader_id) = edit.trader_id() {
            if !dataset.tables.traders.contains_key(trader_id) {
                return Err(PatchError::MissingTrader {
                    trader_id: trader_id.to_string(),
                    edit: edit.to_string(),
                });
            }
        }
        match edit.config_type() {
            Some(category) if !has_config(dataset, category) => {
                return Err(PatchError::MissingConfig { category });
            }
            _ => {}
        }
    }
    Ok(())
}

fn has_config(dataset: &Dataset<'_>, category: ConfigType) -> bool {
    match category {
        ConfigType::Insurance => dataset.insurance.is_some(),
        ConfigType::Hideout => dataset.hideout.is_some(),
    }
}

/// Validate, then apply every edit of `profile` in declared order.
pub fn apply_profile(
    profile: &PatchProfile,
    dataset: &mut Dataset<'_>,
) -> Result<Vec<EditOutcome>, PatchError> {
    validate_profile(profile, dataset)?;

    let mut outcomes = Vec::with_capacity(profile.edits.len());
    for edit in &profile.edits {
        let outcome = apply_edit(edit, dataset)?;
        debug!(
            profile = %profile.name,
            edit = %outcome.edit,
            written = outcome.written,
            skipped = outcome.skipped,
            "Edit applied"
        );
        outcomes.push(outcome);
    }

    info!(
        profile = %profile.name,
        version = profile.version,
        edits = outcomes.len(),
        "Profile applied"
    );
    Ok(outcomes)
}

fn apply_edit(edit: &Edit, dataset: &mut Dataset<'_>) -> Result<EditOutcome, PatchError> {
    let label = edit.to_string();
    let counts = match edit {
        Edit::RagFairMinUserLevel { value } => {
            dataset.tables.globals.config.rag_fair.min_user_level = *value;
            (1, 0)
        }
        Edit::RagFairFoundInRaidOnly { value } => {
            dataset
                .tables
                .globals
                .config
                .rag_fair
                .is_only_found_in_raid_allowed = *value;
            (1, 0)
        }
        Edit::TraderInsurance {
            trader,
            field,
            value,
        } => {
            let record = dataset.tables.traders.get_mut(trader.as_str()).ok_or_else(|| {
                PatchError::MissingTrader {
                    trader_id: trader.clone(),
                    edit: label.clone(),
                }
            })?;
            let insurance = &mut record.base.insurance;
            match field {
                InsuranceField::MaxReturnHour => insurance.max_return_hour = *value,
                InsuranceField::MinReturnHour => insurance.min_return_hour = *value,
                InsuranceField::MaxStorageTime => insurance.max_storage_time = *value,
            }
            (1, 0)
        }
        Edit::ItemWeight { class, value } => patch_items_of_class(
            &mut dataset.tables.templates.items,
            dataset.classifier,
            *class,
            |props| &mut props.weight,
            *value,
        ),
        Edit::ItemStackMaxSize { class, value } => patch_items_of_class(
            &mut dataset.tables.templates.items,
            dataset.classifier,
            *class,
            |props| &mut props.stack_max_size,
            *value,
        ),
        Edit::ItemDurabilityBurnRatio { class, value } => patch_items_of_class(
            &mut dataset.tables.templates.items,
            dataset.classifier,
            *class,
            |props| &mut props.durability_burn_ratio,
            *value,
        ),
        Edit::InsuranceMultiplier { value } => {
            let insurance = dataset
                .insurance
                .as_deref_mut()
                .ok_or(PatchError::MissingConfig {
                    category: ConfigType::Insurance,
                })?;
            insurance.insurance_multiplier = Some(value.clone());
            (1, 0)
        }
        Edit::InsuranceReturnChance { value } => {
            let insurance = dataset
                .insurance
                .as_deref_mut()
                .ok_or(PatchError::MissingConfig {
                    category: ConfigType::Insurance,
                })?;
            insurance.return_chance_percent = Some(value.clone());
            (1, 0)
        }
        Edit::HideoutBuildTimeCap { seconds } => {
            let hideout = dataset
                .hideout
                .as_deref_mut()
                .ok_or(PatchError::MissingConfig {
                    category: ConfigType::Hideout,
                })?;
            hideout.override_build_time_seconds = Some(*seconds);
            (1, 0)
        }
        Edit::HideoutCraftTimeCap { seconds } => {
            let hideout = dataset
                .hideout
                .as_deref_mut()
                .ok_or(PatchError::MissingConfig {
                    category: ConfigType::Hideout,
                })?;
            hideout.override_craft_time_seconds = Some(*seconds);
            (1, 0)
        }
    };

    Ok(EditOutcome {
        edit: label,
        written: counts.0,
        skipped: counts.1,
    })
}

/// Set one optional property on every item of `class` that already carries it.
///
/// Returns `(written, skipped)`: items of the class that had the field, and
/// items of the class that did not. Items of other classes are not counted.
pub fn patch_items_of_class<T, F>(
    items: &mut BTreeMap<String, ItemTemplate>,
    classifier: &dyn ItemClassifier,
    class: BaseClass,
    field: F,
    value: T,
) -> (usize, usize)
where
    T: Copy,
    F: Fn(&mut ItemProps) -> &mut Option<T>,
{
    let mut written = 0;
    let mut skipped = 0;
    for item in items.values_mut() {
        if !classifier.is_of_class(&item.id, class) {
            continue;
        }
        match field(&mut item.props) {
            Some(current) => {
                *current = value;
                written += 1;
            }
            None => skipped += 1,
        }
    }
    (written, skipped)
}
