use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::base_class::BaseClass;
use crate::server_config::ConfigType;

/// One declarative override applied to the host tables.
///
/// Item edits are filtered by class and only touch records that already carry
/// the field. All other edits target a fixed record and always write.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "target", rename_all = "snake_case")]
pub enum Edit {
    RagFairMinUserLevel {
        value: u32,
    },
    /// Sets `RagFair.isOnlyFoundInRaidAllowed`.
    RagFairFoundInRaidOnly {
        value: bool,
    },
    TraderInsurance {
        trader: String,
        field: InsuranceField,
        value: i64,
    },
    ItemWeight {
        class: BaseClass,
        value: f64,
    },
    ItemStackMaxSize {
        class: BaseClass,
        value: u64,
    },
    ItemDurabilityBurnRatio {
        class: BaseClass,
        value: f64,
    },
    /// Replaces the whole trader-id → multiplier map.
    InsuranceMultiplier {
        value: BTreeMap<String, f64>,
    },
    /// Replaces the whole trader-id → percent map.
    InsuranceReturnChance {
        value: BTreeMap<String, f64>,
    },
    HideoutBuildTimeCap {
        seconds: i64,
    },
    HideoutCraftTimeCap {
        seconds: i64,
    },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum InsuranceField {
    MaxReturnHour,
    MinReturnHour,
    MaxStorageTime,
}

impl InsuranceField {
    pub const fn as_str(self) -> &'static str {
        match self {
            InsuranceField::MaxReturnHour => "max_return_hour",
            InsuranceField::MinReturnHour => "min_return_hour",
            InsuranceField::MaxStorageTime => "max_storage_time",
        }
    }
}

impl Edit {
    /// Trader id this edit addresses directly, if any.
    pub fn trader_id(&self) -> Option<&str> {
        match self {
            Edit::TraderInsurance { trader, .. } => Some(trader),
            _ => None,
        }
    }

    /// Config category this edit writes into, if any.
    pub fn config_type(&self) -> Option<ConfigType> {
        match self {
            Edit::InsuranceMultiplier { .. } | Edit::InsuranceReturnChance { .. } => {
                Some(ConfigType::Insurance)
            }
            Edit::HideoutBuildTimeCap { .. } | Edit::HideoutCraftTimeCap { .. } => {
                Some(ConfigType::Hideout)
            }
            _ => None,
        }
    }

    /// Base class filter of an item edit.
    pub fn class(&self) -> Option<BaseClass> {
        match self {
            Edit::ItemWeight { class, .. }
            | Edit::ItemStackMaxSize { class, .. }
            | Edit::ItemDurabilityBurnRatio { class, .. } => Some(*class),
            _ => None,
        }
    }
}

impl fmt::Display for Edit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edit::RagFairMinUserLevel { value } => {
                write!(f, "globals.config.RagFair.minUserLevel = {value}")
            }
            Edit::RagFairFoundInRaidOnly { value } => {
                write!(f, "globals.config.RagFair.isOnlyFoundInRaidAllowed = {value}")
            }
            Edit::TraderInsurance {
                trader,
                field,
                value,
            } => write!(
                f,
                "traders[{trader}].base.insurance.{} = {value}",
                field.as_str()
            ),
            Edit::ItemWeight { class, value } => write!(f, "items[{class}]._props.Weight = {value}"),
            Edit::ItemStackMaxSize { class, value } => {
                write!(f, "items[{class}]._props.StackMaxSize = {value}")
            }
            Edit::ItemDurabilityBurnRatio { class, value } => {
                write!(f, "items[{class}]._props.DurabilityBurnRatio = {value}")
            }
            Edit::InsuranceMultiplier { value } => {
                write!(f, "insurance.insuranceMultiplier = {} entries", value.len())
            }
            Edit::InsuranceReturnChance { value } => {
                write!(f, "insurance.returnChancePercent = {} entries", value.len())
            }
            Edit::HideoutBuildTimeCap { seconds } => {
                write!(f, "hideout.overrideBuildTimeSeconds = {seconds}")
            }
            Edit::HideoutCraftTimeCap { seconds } => {
                write!(f, "hideout.overrideCraftTimeSeconds = {seconds}")
            }
        }
    }
}

/// A named, versioned edit table. Applied in order by the patch engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatchProfile {
    pub name: String,
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub description: Option<String>,
    pub edits: Vec<Edit>,
}

fn default_version() -> u32 {
    1
}
