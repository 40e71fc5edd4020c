//! Request and response payloads (serde).

use plantarium_core::{PlantInput, PlantUpdate};
use serde::{Deserialize, Serialize};

/// `POST /plants` body.
#[derive(Debug, Deserialize)]
pub struct CreatePlantRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub price: f64,
    #[serde(default)]
    pub family: Option<String>,
}

impl From<CreatePlantRequest> for PlantInput {
    fn from(req: CreatePlantRequest) -> Self {
        Self { name: req.name, kind: req.kind, price: req.price, family: req.family }
    }
}

/// `PATCH /plants/{name}` body. Absent fields keep their stored values.
#[derive(Debug, Default, Deserialize)]
pub struct UpdatePlantRequest {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub price: Option<f64>,
    pub family: Option<String>,
}

impl From<UpdatePlantRequest> for PlantUpdate {
    fn from(req: UpdatePlantRequest) -> Self {
        Self { name: req.name, kind: req.kind, price: req.price, family: req.family }
    }
}

#[derive(Debug, Serialize)]
#[non_exhaustive]
pub struct VersionResponse {
    pub version: &'static str,
}
