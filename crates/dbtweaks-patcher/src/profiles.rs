use dbtweaks_models::PatchProfile;

use crate::error::PatchError;

const BOIS: &str = include_str!("../profiles/bois.toml");
const BOIS_HIDEOUT: &str = include_str!("../profiles/bois-hideout.toml");

/// Built-in modules as `(name, profile source)` pairs.
pub const BUILTIN: [(&str, &str); 2] = [("bois", BOIS), ("bois-hideout", BOIS_HIDEOUT)];

pub fn builtin_names() -> impl Iterator<Item = &'static str> {
    BUILTIN.iter().map(|(name, _)| *name)
}

pub fn builtin(name: &str) -> Result<PatchProfile, PatchError> {
    let (_, source) = BUILTIN
        .iter()
        .find(|(builtin_name, _)| *builtin_name == name)
        .ok_or_else(|| PatchError::UnknownModule(name.to_string()))?;
    parse_profile(source)
}

pub fn parse_profile(source: &str) -> Result<PatchProfile, PatchError> {
    Ok(toml::from_str(source)?)
}
