use dbtweaks_models::ConfigType;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatchError {
    #[error("Configuration error: trader {trader_id} not found (edit: {edit})")]
    MissingTrader { trader_id: String, edit: String },

    #[error("Configuration error: config category '{category}' is not registered")]
    MissingConfig { category: ConfigType },

    #[error("Unknown module: {0}")]
    UnknownModule(String),

    #[error("Profile parse error: {0}")]
    Profile(#[from] toml::de::Error),
}
