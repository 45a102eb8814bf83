use std::fs;
use std::path::Path;

use dbtweaks_models::{DatabaseTables, Globals, Templates, Trader, TraderBase};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::HostError;

const GLOBALS_FILE: &str = "globals.json";
const ITEMS_FILE: &str = "templates/items.json";
const TRADERS_DIR: &str = "traders";
const TRADER_BASE_FILE: &str = "base.json";
/// Lives under `traders/` but is not a trader.
const RAGFAIR_DIR: &str = "ragfair";

/// Load the tables the patcher works on from a database directory.
///
/// Reads `globals.json`, `templates/items.json`, and every
/// `traders/<id>/base.json`. Trader directories without a `base.json` are
/// skipped.
pub fn load_database(root: &Path) -> Result<DatabaseTables, HostError> {
    let globals: Globals = read_json(&root.join(GLOBALS_FILE))?;
    let items = read_json(&root.join(ITEMS_FILE))?;

    let mut tables = DatabaseTables {
        globals,
        templates: Templates { items },
        traders: Default::default(),
    };

    let traders_dir = root.join(TRADERS_DIR);
    let mut entries: Vec<_> = fs::read_dir(&traders_dir)
        .map_err(|e| HostError::io(&traders_dir, e))?
        .collect::<Result<_, _>>()
        .map_err(|e| HostError::io(&traders_dir, e))?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let dir = entry.path();
        if !dir.is_dir() || entry.file_name() == RAGFAIR_DIR {
            continue;
        }
        let base_path = dir.join(TRADER_BASE_FILE);
        if !base_path.is_file() {
            warn!(path = %dir.display(), "Trader directory has no base.json, skipping");
            continue;
        }
        let base: TraderBase = read_json(&base_path)?;
        if entry.file_name().to_string_lossy() != base.id {
            warn!(
                dir = %dir.display(),
                id = %base.id,
                "Trader directory name does not match its _id"
            );
        }
        debug!(id = %base.id, nickname = %base.nickname, "Loaded trader");
        tables.insert_trader(Trader { base });
    }

    info!(
        items = tables.templates.items.len(),
        traders = tables.traders.len(),
        path = %root.display(),
        "Database loaded"
    );
    Ok(tables)
}

/// Write `tables` back out in the same layout [`load_database`] reads.
pub fn write_database(tables: &DatabaseTables, root: &Path, pretty: bool) -> Result<(), HostError> {
    write_json(&root.join(GLOBALS_FILE), &tables.globals, pretty)?;
    write_json(&root.join(ITEMS_FILE), &tables.templates.items, pretty)?;
    for (id, trader) in &tables.traders {
        let path = root.join(TRADERS_DIR).join(id).join(TRADER_BASE_FILE);
        write_json(&path, &trader.base, pretty)?;
    }
    info!(path = %root.display(), "Database written");
    Ok(())
}

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, HostError> {
    let contents = fs::read_to_string(path).map_err(|e| HostError::io(path, e))?;
    serde_json::from_str(&contents).map_err(|e| HostError::json(path, e))
}

pub(crate) fn write_json<T: Serialize>(path: &Path, value: &T, pretty: bool) -> Result<(), HostError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| HostError::io(parent, e))?;
    }
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(|e| HostError::json(path, e))?;
    fs::write(path, json).map_err(|e| HostError::io(path, e))
}
