//! Add-Property Form Rules
//!
//! The draft holds raw form strings; `validate` either produces the create
//! payload or a per-field error map. Checks are advisory: the server is
//! expected to enforce its own bounds.

use std::collections::BTreeMap;

use crate::models::{NewProperty, NewSpace};

pub const ADDRESS_REQUIRED: &str = "Address is required";
pub const TYPE_REQUIRED: &str = "Type is required";
pub const PRICE_INVALID: &str = "Valid price required";
pub const SPACE_DESCRIPTION_REQUIRED: &str = "Space description required";
pub const SPACE_SIZE_INVALID: &str = "Valid size required";

/// Form field an error message belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldKey {
    Address,
    Type,
    Price,
    SpaceDescription(usize),
    SpaceSize(usize),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<FieldKey, &'static str>,
}

impl ValidationErrors {
    pub fn get(&self, key: FieldKey) -> Option<&'static str> {
        self.errors.get(&key).copied()
    }

    pub fn has(&self, key: FieldKey) -> bool {
        self.errors.contains_key(&key)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    fn insert(&mut self, key: FieldKey, message: &'static str) {
        self.errors.insert(key, message);
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<&str> = self.errors.values().copied().collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// One space row of the form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpaceDraft {
    pub description: String,
    pub size: String,
    pub type_id: String,
}

/// The add-property form as typed
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDraft {
    pub address: String,
    pub description: String,
    pub type_id: String,
    pub price: String,
    pub spaces: Vec<SpaceDraft>,
}

impl Default for PropertyDraft {
    /// A fresh form starts with one blank space row
    fn default() -> Self {
        Self {
            address: String::new(),
            description: String::new(),
            type_id: String::new(),
            price: String::new(),
            spaces: vec![SpaceDraft::default()],
        }
    }
}

/// A finite number strictly greater than zero
fn positive_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite() && *n > 0.0)
}

fn non_zero_id(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|id| *id != 0)
}

impl PropertyDraft {
    pub fn add_space(&mut self) {
        self.spaces.push(SpaceDraft::default());
    }

    /// Remove the row at `idx`; out-of-range indices are ignored
    pub fn remove_space(&mut self, idx: usize) {
        if idx < self.spaces.len() {
            self.spaces.remove(idx);
        }
    }

    pub fn space_mut(&mut self, idx: usize) -> Option<&mut SpaceDraft> {
        self.spaces.get_mut(idx)
    }

    pub fn validate(&self) -> Result<NewProperty, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let address = self.address.trim();
        if address.is_empty() {
            errors.insert(FieldKey::Address, ADDRESS_REQUIRED);
        }
        let type_id = non_zero_id(&self.type_id);
        if type_id.is_none() {
            errors.insert(FieldKey::Type, TYPE_REQUIRED);
        }
        let price = positive_number(&self.price);
        if price.is_none() {
            errors.insert(FieldKey::Price, PRICE_INVALID);
        }

        let mut spaces = Vec::with_capacity(self.spaces.len());
        for (idx, space) in self.spaces.iter().enumerate() {
            let description = space.description.trim();
            if description.is_empty() {
                errors.insert(FieldKey::SpaceDescription(idx), SPACE_DESCRIPTION_REQUIRED);
            }
            let size = positive_number(&space.size);
            if size.is_none() {
                errors.insert(FieldKey::SpaceSize(idx), SPACE_SIZE_INVALID);
            }
            if let Some(size) = size {
                spaces.push(NewSpace {
                    description: description.to_string(),
                    size,
                    // Unselected space type goes out as 0
                    type_id: space.type_id.trim().parse().unwrap_or(0),
                });
            }
        }

        match (errors.is_empty(), type_id, price) {
            (true, Some(type_id), Some(price)) => {
                let description = self.description.trim();
                Ok(NewProperty {
                    address: address.to_string(),
                    description: (!description.is_empty()).then(|| description.to_string()),
                    type_id,
                    price,
                    spaces,
                })
            }
            _ => Err(errors),
        }
    }
}
