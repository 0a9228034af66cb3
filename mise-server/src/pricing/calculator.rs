//! Menu Cost Calculator
//!
//! Aggregates an ingredient list into base cost, VAT amount and
//! VAT-inclusive total. Uses rust_decimal for the arithmetic, stores as
//! f64. Display rounding is a presentation concern and does not happen
//! here.

use rust_decimal::prelude::*;
use shared::models::{Menu, MenuIngredient};

/// Convert f64 to Decimal; non-finite values degrade to zero
#[inline]
fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage
#[inline]
fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

/// Derived cost aggregates for a menu
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MenuCosts {
    /// Sum of ingredient unit costs, VAT excluded
    pub base_cost: f64,
    /// Sum of per-ingredient VAT amounts
    pub vat_amount: f64,
    /// `base_cost + vat_amount`
    pub total_cost: f64,
}

/// Unit cost of `quantity` grams/ml of a product priced per 1000 g/ml
pub fn unit_cost(cost_per_kilo: f64, quantity: f64) -> f64 {
    let cost = to_decimal(cost_per_kilo);
    let qty = to_decimal(quantity);
    to_f64(cost / Decimal::ONE_THOUSAND * qty)
}

/// Aggregate an ingredient list into [`MenuCosts`]
///
/// Non-finite unit costs count as zero; the calculator never fails.
pub fn calculate_costs(ingredients: &[MenuIngredient]) -> MenuCosts {
    let mut base_acc = Decimal::ZERO;
    let mut vat_acc = Decimal::ZERO;

    for ing in ingredients {
        let unit = to_decimal(ing.unit_cost);
        let rate = Decimal::from(ing.product.vat_rate);
        base_acc += unit;
        vat_acc += unit * rate / Decimal::ONE_HUNDRED;
    }

    MenuCosts {
        base_cost: to_f64(base_acc),
        vat_amount: to_f64(vat_acc),
        total_cost: to_f64(base_acc + vat_acc),
    }
}

/// Re-derive every ingredient's unit cost from its own snapshot, then
/// recompute the menu's aggregates
///
/// Idempotent. Every write path that touches an ingredient list goes
/// through here, so snapshots, unit costs and aggregates are always
/// mutually consistent at rest.
pub fn normalize_menu(menu: &mut Menu) {
    for ing in menu.ingredients.iter_mut() {
        ing.unit_cost = unit_cost(ing.product.cost, ing.quantity);
    }
    let costs = calculate_costs(&menu.ingredients);
    menu.base_cost = costs.base_cost;
    menu.vat_amount = costs.vat_amount;
    menu.total_cost = costs.total_cost;
}
