use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What one module's patch pass did. Written next to the patched tables by the host.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatchReport {
    pub module: String,
    pub profile_version: u32,
    pub applied_at: DateTime<Utc>,
    pub outcomes: Vec<EditOutcome>,
}

/// Per-edit counters.
///
/// `written` counts records whose field was set. `skipped` counts records that
/// matched the filter but lacked the field. Direct edits always report one write.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EditOutcome {
    pub edit: String,
    pub written: usize,
    pub skipped: usize,
}

impl PatchReport {
    pub fn total_written(&self) -> usize {
        self.outcomes.iter().map(|o| o.written).sum()
    }

    pub fn total_skipped(&self) -> usize {
        self.outcomes.iter().map(|o| o.skipped).sum()
    }
}
