use dbtweaks_models::{DatabaseTables, PatchReport};
use dbtweaks_patcher::{Dataset, ItemHierarchy, PostDbLoadMod};
use tracing::{error, info};

use crate::configs::ConfigServer;
use crate::error::HostError;

/// Owns the loaded database and the services modules resolve from it.
///
/// The item helper is a snapshot of the template hierarchy taken at
/// construction. Modules never add or remove templates, so it stays valid
/// across every post-load pass.
pub struct Container {
    tables: DatabaseTables,
    configs: ConfigServer,
    item_helper: ItemHierarchy,
}

impl Container {
    pub fn new(tables: DatabaseTables, configs: ConfigServer) -> Self {
        let item_helper = ItemHierarchy::from_items(&tables.templates.items);
        Self {
            tables,
            configs,
            item_helper,
        }
    }

    pub fn tables(&self) -> &DatabaseTables {
        &self.tables
    }

    pub fn configs(&self) -> &ConfigServer {
        &self.configs
    }

    pub fn item_helper(&self) -> &ItemHierarchy {
        &self.item_helper
    }

    /// Lend the tables, every registered config, and the item helper.
    pub fn dataset(&mut self) -> Dataset<'_> {
        let mut dataset = Dataset::new(&mut self.tables, &self.item_helper);
        if let Some(insurance) = self.configs.insurance.as_mut() {
            dataset = dataset.with_insurance(insurance);
        }
        if let Some(hideout) = self.configs.hideout.as_mut() {
            dataset = dataset.with_hideout(hideout);
        }
        dataset
    }

    /// Call each module's post-load hook once, in order. The first failure
    /// stops the sequence.
    pub fn run_post_db_load(
        &mut self,
        mods: &[Box<dyn PostDbLoadMod>],
    ) -> Result<Vec<PatchReport>, HostError> {
        let mut reports = Vec::with_capacity(mods.len());
        for module in mods {
            info!(module = module.name(), "Running post-db-load hook");
            match module.post_db_load(self.dataset()) {
                Ok(report) => reports.push(report),
                Err(source) => {
                    error!(module = module.name(), error = %source, "Post-db-load hook failed");
                    return Err(HostError::Module {
                        module: module.name().to_string(),
                        source,
                    });
                }
            }
        }
        Ok(reports)
    }

    pub fn into_parts(self) -> (DatabaseTables, ConfigServer) {
        (self.tables, self.configs)
    }
}
