use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single entry of `templates/items.json`.
///
/// Only the fields the patcher reads or writes are modelled; everything else
/// is kept in `extra` so it survives a load/write cycle untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemTemplate {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_name", default)]
    pub name: String,
    /// Id of the parent template. Empty for the hierarchy root.
    #[serde(rename = "_parent", default)]
    pub parent: String,
    /// `"Item"` or `"Node"`.
    #[serde(rename = "_type", default)]
    pub item_type: String,
    #[serde(rename = "_props", default)]
    pub props: ItemProps,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ItemTemplate {
    pub fn new(id: impl Into<String>, parent: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            parent: parent.into(),
            item_type: "Item".to_string(),
            props: ItemProps::default(),
            extra: Map::new(),
        }
    }

    pub fn node(id: impl Into<String>, parent: impl Into<String>) -> Self {
        Self {
            item_type: "Node".to_string(),
            ..Self::new(id, parent)
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_props(mut self, props: ItemProps) -> Self {
        self.props = props;
        self
    }
}

/// The `_props` bag of an item template.
///
/// Absent properties stay absent: a `None` is never written back as `null`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ItemProps {
    #[serde(rename = "Weight", default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(rename = "StackMaxSize", default, skip_serializing_if = "Option::is_none")]
    pub stack_max_size: Option<u64>,
    #[serde(
        rename = "DurabilityBurnRatio",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub durability_burn_ratio: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_fields_survive_roundtrip() {
        let json = r#"{
            "_id": "5656d7c34bdc2d9d198b4587",
            "_name": "patron_762x39_PS",
            "_parent": "5485a8684bdc2da71d8b4567",
            "_type": "Item",
            "_props": { "Weight": 0.01, "StackMaxSize": 60, "Caliber": "Caliber762x39" },
            "_proto": "5cc80f79e4a949033c7343b2"
        }"#;
        let item: ItemTemplate = serde_json::from_str(json).unwrap();
        assert_eq!(item.props.weight, Some(0.01));
        assert_eq!(item.props.stack_max_size, Some(60));
        assert_eq!(item.props.durability_burn_ratio, None);
        assert_eq!(item.props.extra["Caliber"], "Caliber762x39");
        assert_eq!(item.extra["_proto"], "5cc80f79e4a949033c7343b2");

        let back: Value = serde_json::to_value(&item).unwrap();
        assert_eq!(back["_props"]["Caliber"], "Caliber762x39");
        assert_eq!(back["_proto"], "5cc80f79e4a949033c7343b2");
    }

    #[test]
    fn absent_props_are_not_serialized() {
        let item = ItemTemplate::new("a", "b");
        let value = serde_json::to_value(&item).unwrap();
        let props = value["_props"].as_object().unwrap();
        assert!(!props.contains_key("Weight"));
        assert!(!props.contains_key("StackMaxSize"));
        assert!(!props.contains_key("DurabilityBurnRatio"));
    }

    #[test]
    fn missing_props_object_defaults() {
        let item: ItemTemplate = serde_json::from_str(r#"{"_id": "x"}"#).unwrap();
        assert_eq!(item.props, ItemProps::default());
        assert!(item.parent.is_empty());
    }
}
