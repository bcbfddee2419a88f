//! Models
//!
//! Data structures matching the REST API (camelCase on the wire).

use serde::{Deserialize, Serialize};

/// A property listing with its spaces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: u32,
    pub address: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub type_name: String,
    pub type_id: u32,
    pub price: f64,
    #[serde(default)]
    pub spaces: Vec<Space>,
}

impl Property {
    /// Sum of all space sizes (sq. ft)
    pub fn total_size(&self) -> f64 {
        self.spaces.iter().map(|s| s.size).sum()
    }

    pub fn has_spaces(&self) -> bool {
        !self.spaces.is_empty()
    }
}

/// A space owned by exactly one property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Space {
    pub id: u32,
    /// Back-reference to the owning property; lookup context only
    #[serde(default)]
    pub property_id: u32,
    #[serde(default)]
    pub description: Option<String>,
    pub size: f64,
    #[serde(default)]
    pub type_id: u32,
    /// Display label for `type_id`, resolved server-side
    #[serde(default)]
    pub space_type: Option<String>,
}

/// Lookup list entry (property types, space types)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryItem {
    pub id: u32,
    pub name: String,
}

/// Which lookup list to load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DictionaryKind {
    PropertyType,
    SpaceType,
}

impl DictionaryKind {
    pub fn path(&self) -> &'static str {
        match self {
            DictionaryKind::PropertyType => "/api/dictionaries/DictPropertyType",
            DictionaryKind::SpaceType => "/api/dictionaries/DictSpaceType",
        }
    }
}

/// Create payload for `POST /api/properties`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProperty {
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub type_id: u32,
    pub price: f64,
    pub spaces: Vec<NewSpace>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSpace {
    pub description: String,
    pub size: f64,
    pub type_id: u32,
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn space(id: u32, description: Option<&str>, space_type: Option<&str>, size: f64) -> Space {
        Space {
            id,
            property_id: 1,
            description: description.map(str::to_string),
            size,
            type_id: 1,
            space_type: space_type.map(str::to_string),
        }
    }

    pub fn property(id: u32, address: &str, price: f64, spaces: Vec<Space>) -> Property {
        Property {
            id,
            address: address.to_string(),
            description: None,
            type_name: "House".to_string(),
            type_id: 1,
            price,
            spaces,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use serde_json::json;

    #[test]
    fn test_property_decodes_camel_case() {
        let raw = json!({
            "id": 7,
            "address": "1 Main St",
            "typeName": "Condo",
            "typeId": 2,
            "price": 250000.0,
            "spaces": [
                { "id": 1, "propertyId": 7, "description": "Kitchen", "size": 120, "typeId": 3, "spaceType": "Kitchen" }
            ]
        });
        let property: Property = serde_json::from_value(raw).unwrap();
        assert_eq!(property.type_name, "Condo");
        assert_eq!(property.spaces[0].space_type.as_deref(), Some("Kitchen"));
        assert_eq!(property.description, None);
    }

    #[test]
    fn test_missing_spaces_decode_empty() {
        let raw = json!({ "id": 1, "address": "x", "typeId": 1, "price": 1 });
        let property: Property = serde_json::from_value(raw).unwrap();
        assert!(!property.has_spaces());
        assert_eq!(property.total_size(), 0.0);
    }

    #[test]
    fn test_total_size() {
        let p = property(1, "a", 1.0, vec![space(1, None, None, 100.0), space(2, None, None, 50.5)]);
        assert_eq!(p.total_size(), 150.5);
    }

    #[test]
    fn test_new_property_payload() {
        let payload = NewProperty {
            address: "2 Elm".to_string(),
            description: None,
            type_id: 4,
            price: 99.5,
            spaces: vec![NewSpace { description: "Bath".to_string(), size: 40.0, type_id: 2 }],
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "address": "2 Elm",
                "typeId": 4,
                "price": 99.5,
                "spaces": [{ "description": "Bath", "size": 40.0, "typeId": 2 }]
            })
        );
    }
}
