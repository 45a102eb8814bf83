use std::path::Path;

use dbtweaks_models::{ConfigType, HideoutConfig, InsuranceConfig};
use tracing::{info, warn};

use crate::database::{read_json, write_json};
use crate::error::HostError;

/// Server config records, keyed by category. A category is registered only
/// if its file was present at load time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigServer {
    pub insurance: Option<InsuranceConfig>,
    pub hideout: Option<HideoutConfig>,
}

impl ConfigServer {
    pub fn load(root: &Path) -> Result<Self, HostError> {
        let server = Self {
            insurance: load_optional(root, ConfigType::Insurance)?,
            hideout: load_optional(root, ConfigType::Hideout)?,
        };
        info!(
            path = %root.display(),
            registered = ?server.registered(),
            "Server configs loaded"
        );
        Ok(server)
    }

    pub fn write(&self, root: &Path, pretty: bool) -> Result<(), HostError> {
        if let Some(insurance) = &self.insurance {
            write_json(&root.join(ConfigType::Insurance.file_name()), insurance, pretty)?;
        }
        if let Some(hideout) = &self.hideout {
            write_json(&root.join(ConfigType::Hideout.file_name()), hideout, pretty)?;
        }
        Ok(())
    }

    pub fn registered(&self) -> Vec<ConfigType> {
        ConfigType::ALL
            .into_iter()
            .filter(|category| match category {
                ConfigType::Insurance => self.insurance.is_some(),
                ConfigType::Hideout => self.hideout.is_some(),
            })
            .collect()
    }
}

fn load_optional<T: serde::de::DeserializeOwned>(
    root: &Path,
    category: ConfigType,
) -> Result<Option<T>, HostError> {
    let path = root.join(category.file_name());
    if !path.is_file() {
        warn!(%category, path = %path.display(), "Config file not found, category not registered");
        return Ok(None);
    }
    read_json(&path).map(Some)
}
