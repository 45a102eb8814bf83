use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Categories of server-side config records, as found under `assets/configs`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum ConfigType {
    Insurance,
    Hideout,
}

impl ConfigType {
    pub const ALL: [ConfigType; 2] = [ConfigType::Insurance, ConfigType::Hideout];

    pub const fn as_str(self) -> &'static str {
        match self {
            ConfigType::Insurance => "insurance",
            ConfigType::Hideout => "hideout",
        }
    }

    /// File name of this category inside the configs directory.
    pub fn file_name(self) -> String {
        format!("{}.json", self.as_str())
    }
}

impl fmt::Display for ConfigType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `insurance.json`. Both maps are keyed by trader id.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insurance_multiplier: Option<BTreeMap<String, f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_chance_percent: Option<BTreeMap<String, f64>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `hideout.json`. A value of `-1` disables the corresponding override.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HideoutConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub override_build_time_seconds: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub override_craft_time_seconds: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
