//! Freight quote wire types
//!
//! Shared between the gateway client and the backend endpoint.

use serde::{Deserialize, Serialize};

pub const DEFAULT_WEIGHT_KG: f64 = 1.0;
pub const DEFAULT_LENGTH_CM: f64 = 20.0;
pub const DEFAULT_HEIGHT_CM: f64 = 5.0;
pub const DEFAULT_WIDTH_CM: f64 = 15.0;

/// Request body for `POST /api/consultas/frete`.
///
/// Dimensions fall back to the standard small-parts box when unspecified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreightQuoteRequest {
    pub cep: String,
    #[serde(rename = "weight", skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    #[serde(rename = "length", skip_serializing_if = "Option::is_none")]
    pub length_cm: Option<f64>,
    #[serde(rename = "height", skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    #[serde(rename = "width", skip_serializing_if = "Option::is_none")]
    pub width_cm: Option<f64>,
}

impl FreightQuoteRequest {
    pub fn new(cep: impl Into<String>) -> Self {
        Self {
            cep: cep.into(),
            weight_kg: None,
            length_cm: None,
            height_cm: None,
            width_cm: None,
        }
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg.unwrap_or(DEFAULT_WEIGHT_KG)
    }

    pub fn length_cm(&self) -> f64 {
        self.length_cm.unwrap_or(DEFAULT_LENGTH_CM)
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm.unwrap_or(DEFAULT_HEIGHT_CM)
    }

    pub fn width_cm(&self) -> f64 {
        self.width_cm.unwrap_or(DEFAULT_WIDTH_CM)
    }
}

/// One carrier service option in a quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarrierOption {
    pub name: String,
    pub price: f64,
    pub eta_days: u32,
}

/// Response body for `POST /api/consultas/frete`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FreightQuoteResponse {
    pub success: bool,
    #[serde(default)]
    pub carriers: Vec<CarrierOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FreightQuoteResponse {
    pub fn ok(carriers: Vec<CarrierOption>) -> Self {
        Self {
            success: true,
            carriers,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            carriers: Vec::new(),
            error: Some(error.into()),
        }
    }
}
