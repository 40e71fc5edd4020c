//! Plant record types
//!
//! The catalog holds one record per plant, keyed by a unique `name`.
//! The create path folds the name to uppercase before persisting; updates
//! and bulk seeding write whatever they are given.

use serde::{Deserialize, Serialize};

/// A catalog record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    /// Unique catalog key. Uppercase for records created through the
    /// create path.
    pub name: String,
    /// Broad category, e.g. "Flower" or "Succulent".
    #[serde(rename = "type")]
    pub kind: String,
    /// Unit price.
    pub price: f64,
    /// Botanical family. Optional — absent on records written before the
    /// column existed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
}

/// Payload for creating a record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlantInput {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
}

impl PlantInput {
    /// Build the record the create path persists: the name is folded to
    /// uppercase, every other field is taken verbatim.
    #[must_use]
    pub fn into_record(self) -> Plant {
        Plant {
            name: self.name.to_uppercase(),
            kind: self.kind,
            price: self.price,
            family: self.family,
        }
    }
}

/// Field-wise update payload. Absent fields keep their stored values.
///
/// Supplied values are applied verbatim — a `name` here is NOT folded to
/// uppercase the way the create path does.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlantUpdate {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub price: Option<f64>,
    pub family: Option<String>,
}

impl PlantUpdate {
    /// Overlay the supplied fields onto `plant`.
    pub fn apply_to(&self, plant: &mut Plant) {
        if let Some(name) = &self.name {
            plant.name = name.clone();
        }
        if let Some(kind) = &self.kind {
            plant.kind = kind.clone();
        }
        if let Some(price) = self.price {
            plant.price = price;
        }
        if let Some(family) = &self.family {
            plant.family = Some(family.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn into_record_uppercases_name_only() {
        let input = PlantInput {
            name: "rose".to_owned(),
            kind: "Flower".to_owned(),
            price: 10.0,
            family: Some("Rosaceae".to_owned()),
        };
        let plant = input.into_record();
        assert_eq!(plant.name, "ROSE");
        assert_eq!(plant.kind, "Flower");
        assert_eq!(plant.family.as_deref(), Some("Rosaceae"));
    }

    #[test]
    fn update_overlays_only_supplied_fields() {
        let mut plant = Plant {
            name: "ROSE".to_owned(),
            kind: "Flower".to_owned(),
            price: 10.0,
            family: None,
        };
        let update = PlantUpdate { price: Some(99.0), ..PlantUpdate::default() };
        update.apply_to(&mut plant);
        assert_eq!(plant.price, 99.0);
        assert_eq!(plant.name, "ROSE");
        assert_eq!(plant.kind, "Flower");
    }

    #[test]
    fn update_does_not_normalize_name() {
        let mut plant = Plant {
            name: "ROSE".to_owned(),
            kind: "Flower".to_owned(),
            price: 10.0,
            family: None,
        };
        let update = PlantUpdate { name: Some("rose".to_owned()), ..PlantUpdate::default() };
        update.apply_to(&mut plant);
        assert_eq!(plant.name, "rose");
    }

    #[test]
    fn plant_serializes_with_type_key_and_omits_absent_family() {
        let plant = Plant {
            name: "TULIP".to_owned(),
            kind: "Flower".to_owned(),
            price: 4.75,
            family: None,
        };
        let json = serde_json::to_value(&plant).unwrap();
        assert_eq!(json["type"], "Flower");
        assert!(json.get("family").is_none());
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn input_deserializes_from_wire_shape() {
        let input: PlantInput =
            serde_json::from_str(r#"{"name":"fern","type":"Houseplant","price":7.5}"#).unwrap();
        assert_eq!(input.kind, "Houseplant");
        assert!(input.family.is_none());
    }
}
