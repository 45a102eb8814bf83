use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `globals.json`. Only the flea market block is modelled.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Globals {
    pub config: GlobalsConfig,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GlobalsConfig {
    #[serde(rename = "RagFair")]
    pub rag_fair: RagFairConfig,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Flea market access settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RagFairConfig {
    pub min_user_level: u32,
    pub is_only_found_in_raid_allowed: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for RagFairConfig {
    fn default() -> Self {
        Self {
            min_user_level: 15,
            is_only_found_in_raid_allowed: true,
            extra: Map::new(),
        }
    }
}
