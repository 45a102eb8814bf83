use chrono::Utc;
use dbtweaks_models::{PatchProfile, PatchReport};
use tracing::info;

use crate::dataset::Dataset;
use crate::engine::apply_profile;
use crate::error::PatchError;
use crate::profiles;

/// A plugin the host calls exactly once, after its database has loaded.
///
/// The dataset is taken by value so nothing of it can outlive the call.
pub trait PostDbLoadMod {
    fn name(&self) -> &str;

    fn post_db_load(&self, dataset: Dataset<'_>) -> Result<PatchReport, PatchError>;
}

/// A module whose whole behaviour is one edit profile.
#[derive(Debug, Clone)]
pub struct ProfileMod {
    profile: PatchProfile,
}

impl ProfileMod {
    pub fn new(profile: PatchProfile) -> Self {
        Self { profile }
    }

    /// One of the modules shipped with this crate, see [`profiles::BUILTIN`].
    pub fn builtin(name: &str) -> Result<Self, PatchError> {
        Ok(Self::new(profiles::builtin(name)?))
    }

    pub fn profile(&self) -> &PatchProfile {
        &self.profile
    }
}

impl PostDbLoadMod for ProfileMod {
    fn name(&self) -> &str {
        &self.profile.name
    }

    fn post_db_load(&self, mut dataset: Dataset<'_>) -> Result<PatchReport, PatchError> {
        let outcomes = apply_profile(&self.profile, &mut dataset)?;
        let report = PatchReport {
            module: self.profile.name.clone(),
            profile_version: self.profile.version,
            applied_at: Utc::now(),
            outcomes,
        };
        info!(
            module = %report.module,
            written = report.total_written(),
            skipped = report.total_skipped(),
            "Module post-load pass complete"
        );
        Ok(report)
    }
}
