use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category tag attached to every item, controlling how it is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemVariant {
    Notice,
    Warning,
    Success,
    Error,
}

impl ItemVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemVariant::Notice => "notice",
            ItemVariant::Warning => "warning",
            ItemVariant::Success => "success",
            ItemVariant::Error => "error",
        }
    }
}

impl fmt::Display for ItemVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single entry in the data provider's collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique id, minted when the item is created
    pub id: Uuid,
    /// Display text
    pub content: String,
    /// Category tag
    pub variant: ItemVariant,
}

impl Item {
    /// Create an item with a freshly generated id.
    pub fn new(content: impl Into<String>, variant: ItemVariant) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            variant,
        }
    }
}

/// Fixed body for the data provider's outbound request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiPayload {
    pub key: String,
}

impl Default for ApiPayload {
    fn default() -> Self {
        Self {
            key: "value".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_serializes_lowercase() {
        let json = serde_json::to_string(&ItemVariant::Success).unwrap();
        assert_eq!(json, "\"success\"");

        let parsed: ItemVariant = serde_json::from_str("\"warning\"").unwrap();
        assert_eq!(parsed, ItemVariant::Warning);
    }

    #[test]
    fn item_roundtrip() {
        let item = Item::new("hi", ItemVariant::Success);
        let json = serde_json::to_string(&item).unwrap();
        let parsed: Item = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, item);
        assert_eq!(parsed.content, "hi");
        assert_eq!(parsed.variant, ItemVariant::Success);
    }

    #[test]
    fn items_get_distinct_ids() {
        let a = Item::new("a", ItemVariant::Notice);
        let b = Item::new("a", ItemVariant::Notice);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn payload_wire_form() {
        let json = serde_json::to_string(&ApiPayload::default()).unwrap();
        assert_eq!(json, r#"{"key":"value"}"#);
    }
}
