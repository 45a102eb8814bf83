use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse item categories, each backed by a `Node` template in the item table.
///
/// An item belongs to a class when the class's template id appears somewhere
/// on the item's `_parent` chain.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum BaseClass {
    Ammo,
    Money,
    Weapon,
    Magazine,
}

impl BaseClass {
    pub const ALL: [BaseClass; 4] = [
        BaseClass::Ammo,
        BaseClass::Money,
        BaseClass::Weapon,
        BaseClass::Magazine,
    ];

    /// Template id of the node this class is rooted at.
    pub const fn template_id(self) -> &'static str {
        match self {
            BaseClass::Ammo => "5485a8684bdc2da71d8b4567",
            BaseClass::Money => "543be5dd4bdc2deb348b4569",
            BaseClass::Weapon => "5422acb9af1c889c16000029",
            BaseClass::Magazine => "5448bc234bdc2d3c308b4569",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            BaseClass::Ammo => "ammo",
            BaseClass::Money => "money",
            BaseClass::Weapon => "weapon",
            BaseClass::Magazine => "magazine",
        }
    }
}

impl fmt::Display for BaseClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_ids_are_distinct() {
        let mut ids: Vec<&str> = BaseClass::ALL.iter().map(|c| c.template_id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), BaseClass::ALL.len());
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&BaseClass::Ammo).unwrap();
        assert_eq!(json, r#""ammo""#);
        let parsed: BaseClass = serde_json::from_str(r#""magazine""#).unwrap();
        assert_eq!(parsed, BaseClass::Magazine);
    }
}
