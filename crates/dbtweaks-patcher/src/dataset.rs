use dbtweaks_models::{DatabaseTables, HideoutConfig, InsuranceConfig};

use crate::classifier::ItemClassifier;

/// Everything a module may touch during its post-load pass, lent by the host
/// for the duration of one call.
///
/// Config records are optional because the host only registers the
/// categories it found on disk.
pub struct Dataset<'a> {
    pub tables: &'a mut DatabaseTables,
    pub insurance: Option<&'a mut InsuranceConfig>,
    pub hideout: Option<&'a mut HideoutConfig>,
    pub classifier: &'a dyn ItemClassifier,
}

impl<'a> Dataset<'a> {
    pub fn new(tables: &'a mut DatabaseTables, classifier: &'a dyn ItemClassifier) -> Self {
        Self {
            tables,
            insurance: None,
            hideout: None,
            classifier,
        }
    }

    pub fn with_insurance(mut self, insurance: &'a mut InsuranceConfig) -> Self {
        self.insurance = Some(insurance);
        self
    }

    pub fn with_hideout(mut self, hideout: &'a mut HideoutConfig) -> Self {
        self.hideout = Some(hideout);
        self
    }
}
