pub mod classifier;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod module;
pub mod profiles;

pub mod test_support;

pub use classifier::{ItemClassifier, ItemHierarchy};
pub use dataset::Dataset;
pub use engine::{apply_profile, validate_profile};
pub use error::PatchError;
pub use module::{PostDbLoadMod, ProfileMod};
