//! Alfred Script Filter feedback payload.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Feedback {
    pub items: Vec<Item>,
}

impl Feedback {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn single(item: Item) -> Self {
        Self { items: vec![item] }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<ItemIcon>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<BTreeMap<String, String>>,
}

impl Item {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            uid: None,
            title: title.into(),
            subtitle: None,
            arg: None,
            valid: None,
            icon: None,
            variables: None,
        }
    }

    /// Stable id; Alfred uses it to learn the user's preferred row.
    pub fn with_uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = Some(uid.into());
        self
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.arg = Some(arg.into());
        self
    }

    pub fn with_valid(mut self, valid: bool) -> Self {
        self.valid = Some(valid);
        self
    }

    pub fn with_icon(mut self, icon: ItemIcon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemIcon {
    pub path: String,
}

impl ItemIcon {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_serializes_items_array() {
        let payload = Feedback::single(Item::new("Open in Waze").with_arg("waze://?navigate=yes"));
        let json = payload.to_json().expect("serialize feedback");

        assert!(json.starts_with("{\"items\":["));
        assert!(json.contains("\"arg\":\"waze://?navigate=yes\""));
    }

    #[test]
    fn item_optional_fields_serialize_only_when_present() {
        let json = serde_json::to_string(&Item::new("Waze")).expect("serialize item");

        assert_eq!(json, "{\"title\":\"Waze\"}");
    }

    #[test]
    fn uid_icon_and_variables_are_serialized() {
        let item = Item::new("Open in Citymapper")
            .with_uid("citymapper")
            .with_valid(true)
            .with_icon(ItemIcon::new("icons/citymapper.png"))
            .with_variable("app", "citymapper")
            .with_variable("mode", "transit");

        let value = serde_json::to_value(&item).expect("serialize item");
        assert_eq!(value["uid"], "citymapper");
        assert_eq!(value["icon"]["path"], "icons/citymapper.png");
        assert_eq!(value["variables"]["app"], "citymapper");
        assert_eq!(value["variables"]["mode"], "transit");
    }
}
