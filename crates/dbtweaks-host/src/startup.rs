use std::fs;
use std::path::Path;

use dbtweaks_models::PatchReport;
use dbtweaks_patcher::{profiles, PostDbLoadMod, ProfileMod};
use tracing::info;

use crate::config::{HostConfig, ModsConfig};
use crate::configs::ConfigServer;
use crate::container::Container;
use crate::database::{load_database, write_database, write_json};
use crate::error::HostError;

pub const REPORT_FILE: &str = "patch-report.json";

/// The host's startup path: load, run every module's post-load hook once,
/// then persist.
///
/// Any failure aborts before output is written, so a partially patched
/// database never reaches disk.
pub struct Startup {
    config: HostConfig,
}

impl Startup {
    pub fn new(config: HostConfig) -> Self {
        Self { config }
    }

    /// Run startup. With `dry_run`, the patched tables are discarded.
    pub fn run(&self, dry_run: bool) -> Result<Vec<PatchReport>, HostError> {
        info!("Host startup beginning");

        let mods = resolve_mods(&self.config.mods)?;
        let tables = load_database(&self.config.database.path)?;
        let configs = ConfigServer::load(&self.config.configs.path)?;
        let mut container = Container::new(tables, configs);

        let reports = container.run_post_db_load(&mods)?;
        for report in &reports {
            for outcome in &report.outcomes {
                info!(
                    module = %report.module,
                    edit = %outcome.edit,
                    written = outcome.written,
                    skipped = outcome.skipped,
                    "Edit outcome"
                );
            }
        }

        if dry_run {
            info!(modules = reports.len(), "Dry run, nothing written");
            return Ok(reports);
        }

        self.persist(container, &reports)?;
        info!(modules = reports.len(), "Host startup complete");
        Ok(reports)
    }

    fn persist(&self, container: Container, reports: &[PatchReport]) -> Result<(), HostError> {
        let output = &self.config.output;
        let (tables, configs) = container.into_parts();
        write_database(&tables, &output.path.join("database"), output.pretty)?;
        configs.write(&output.path.join("configs"), output.pretty)?;
        if output.write_report {
            write_json(&output.path.join(REPORT_FILE), &reports, output.pretty)?;
        }
        Ok(())
    }
}

/// Built-in modules first, in configured order, then profile files.
pub fn resolve_mods(config: &ModsConfig) -> Result<Vec<Box<dyn PostDbLoadMod>>, HostError> {
    if config.enabled.is_empty() && config.profiles.is_empty() {
        return Err(HostError::Config("no modules enabled".to_string()));
    }

    let mut mods: Vec<Box<dyn PostDbLoadMod>> = Vec::new();
    for name in &config.enabled {
        mods.push(Box::new(ProfileMod::builtin(name)?));
    }
    for path in &config.profiles {
        mods.push(Box::new(load_profile_file(path)?));
    }
    Ok(mods)
}

fn load_profile_file(path: &Path) -> Result<ProfileMod, HostError> {
    let source = fs::read_to_string(path).map_err(|e| HostError::io(path, e))?;
    let profile = profiles::parse_profile(&source).map_err(|source| HostError::Profile {
        path: path.to_path_buf(),
        source,
    })?;
    info!(name = %profile.name, path = %path.display(), "Loaded profile file");
    Ok(ProfileMod::new(profile))
}
