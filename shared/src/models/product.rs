//! Product Model

use serde::{Deserialize, Serialize};

/// Stock product entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Option<i64>,
    pub name: String,
    /// Price per kilogram/liter (currency per 1000 g/ml)
    pub cost: f64,
    /// VAT rate in percentage (e.g., 10 = 10%)
    #[serde(default)]
    pub vat_rate: i32,
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    pub name: String,
    pub cost: f64,
    #[serde(default)]
    pub vat_rate: i32,
}

/// Update product payload (partial merge)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub cost: Option<f64>,
    pub vat_rate: Option<i32>,
}
