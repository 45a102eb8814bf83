use std::collections::{BTreeMap, HashMap};

use dbtweaks_models::{BaseClass, ItemTemplate};

/// Answers "does template X belong to category Y".
pub trait ItemClassifier {
    fn is_of_class(&self, item_id: &str, class: BaseClass) -> bool;
}

/// Classifier backed by a snapshot of the template `_parent` links.
///
/// Built once after the item table is loaded. Holding only the links means it
/// borrows nothing from the tables it classifies, so the tables can be patched
/// while it is in use.
#[derive(Debug, Clone, Default)]
pub struct ItemHierarchy {
    parents: HashMap<String, String>,
}

impl ItemHierarchy {
    pub fn from_items(items: &BTreeMap<String, ItemTemplate>) -> Self {
        let parents = items
            .iter()
            .filter(|(_, item)| !item.parent.is_empty())
            .map(|(id, item)| (id.clone(), item.parent.clone()))
            .collect();
        Self { parents }
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Walks the parent chain looking for `ancestor_id`. Bounded by the number
    /// of known links so a malformed cyclic table cannot loop forever.
    pub fn descends_from(&self, item_id: &str, ancestor_id: &str) -> bool {
        let mut current = item_id;
        for _ in 0..=self.parents.len() {
            match self.parents.get(current) {
                Some(parent) if parent == ancestor_id => return true,
                Some(parent) => current = parent,
                None => return false,
            }
        }
        false
    }
}

impl ItemClassifier for ItemHierarchy {
    fn is_of_class(&self, item_id: &str, class: BaseClass) -> bool {
        self.descends_from(item_id, class.template_id())
    }
}
