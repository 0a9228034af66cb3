//! Menu Model
//!
//! A menu is a composed dish: an ordered list of ingredient usages, each
//! embedding a frozen copy of the product it was built from, plus derived
//! cost aggregates.

use serde::{Deserialize, Serialize};

/// Frozen copy of a product as embedded in a menu ingredient
///
/// Not a live reference. Propagation is the only mechanism that refreshes
/// these fields after the source product changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSnapshot {
    pub id: i64,
    pub name: String,
    /// Price per kilogram/liter (currency per 1000 g/ml)
    pub cost: f64,
    #[serde(default)]
    pub vat_rate: i32,
}

/// One ingredient usage inside a menu
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuIngredient {
    pub product: ProductSnapshot,
    /// Grams or milliliters
    pub quantity: f64,
    /// Derived: `(product.cost / 1000) * quantity`. Re-derived server-side
    /// on every write path, so clients may omit it.
    #[serde(default)]
    pub unit_cost: f64,
}

/// Menu entity with derived cost fields
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Menu {
    pub id: Option<i64>,
    pub menu_name: String,
    pub ingredients: Vec<MenuIngredient>,
    /// Sum of ingredient unit costs, VAT excluded
    #[serde(default)]
    pub base_cost: f64,
    /// Sum of per-ingredient VAT amounts
    #[serde(default)]
    pub vat_amount: f64,
    /// `base_cost + vat_amount`
    #[serde(default)]
    pub total_cost: f64,
}

/// Create menu payload
///
/// Ingredients arrive as (snapshot, quantity) pairs; all derived costs are
/// computed server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuCreate {
    pub menu_name: String,
    pub ingredients: Vec<MenuIngredient>,
}
