use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Trader ids that ship with the base game data.
pub mod known {
    pub const PRAPOR: &str = "54cb50c76803fa8b248b4571";
    pub const THERAPIST: &str = "54cb57776803fa99248b456e";
}

/// A trader as loaded from `traders/<id>/`. Only `base.json` is modelled.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trader {
    pub base: TraderBase,
}

/// Contents of a trader's `base.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TraderBase {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub nickname: String,
    pub insurance: TraderInsurance,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TraderInsurance {
    #[serde(default)]
    pub availability: bool,
    pub max_return_hour: i64,
    pub min_return_hour: i64,
    pub max_storage_time: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Trader {
    pub fn new(id: impl Into<String>, nickname: impl Into<String>) -> Self {
        Self {
            base: TraderBase {
                id: id.into(),
                nickname: nickname.into(),
                insurance: TraderInsurance::default(),
                extra: Map::new(),
            },
        }
    }
}

impl Default for TraderInsurance {
    fn default() -> Self {
        Self {
            availability: true,
            max_return_hour: 48,
            min_return_hour: 24,
            max_storage_time: 72,
            extra: Map::new(),
        }
    }
}
