use std::path::PathBuf;

use dbtweaks_patcher::PatchError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HostError {
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Profile error in {path}: {source}")]
    Profile {
        path: PathBuf,
        #[source]
        source: PatchError,
    },

    #[error("Module '{module}' failed during post-load: {source}")]
    Module {
        module: String,
        #[source]
        source: PatchError,
    },

    #[error("Patch error: {0}")]
    Patch(#[from] PatchError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl HostError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}
