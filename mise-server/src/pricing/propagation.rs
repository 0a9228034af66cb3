//! Cost Propagation
//!
//! Keeps menu-embedded product snapshots and derived costs consistent
//! after a product changes or disappears. Fired synchronously from the
//! product endpoints; the stock write and the menu write are two
//! independent file rewrites with no cross-file atomicity.

use crate::db::{JsonStore, StoreResult};
use crate::pricing::calculator;
use shared::models::{Menu, Product};

/// Pushes product price/VAT changes and deletions into stored menus
#[derive(Clone)]
pub struct CostPropagator {
    store: JsonStore,
}

impl CostPropagator {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    /// Rewrite every menu that embeds `product`: refresh the snapshot,
    /// re-derive unit costs, recompute the aggregates
    ///
    /// Menus with no matching ingredient are persisted unchanged in the
    /// same batch write. Returns the number of menus touched.
    pub async fn propagate_update(&self, product: &Product) -> StoreResult<usize> {
        let Some(product_id) = product.id else {
            return Ok(0);
        };

        let mut menus = self.store.load_menus().await?;
        let mut touched = 0;

        for menu in menus.iter_mut() {
            if refresh_menu(menu, product_id, product) {
                touched += 1;
            }
        }

        self.store.save_menus(&menus).await?;
        tracing::info!(product_id, touched, "propagated product update to menus");
        Ok(touched)
    }

    /// Remove every trace of a deleted product
    ///
    /// Matching ingredients are dropped; menus left with zero ingredients
    /// are dropped from the sequence entirely; menus that shrank get their
    /// aggregates recomputed. Returns the number of menus dropped.
    pub async fn propagate_removal(&self, product_id: i64) -> StoreResult<usize> {
        let menus = self.store.load_menus().await?;
        let before = menus.len();
        let mut kept = Vec::with_capacity(before);

        for mut menu in menus {
            let had = menu.ingredients.len();
            menu.ingredients.retain(|ing| ing.product.id != product_id);
            if menu.ingredients.is_empty() {
                continue;
            }
            if menu.ingredients.len() != had {
                calculator::normalize_menu(&mut menu);
            }
            kept.push(menu);
        }

        let dropped = before - kept.len();
        self.store.save_menus(&kept).await?;
        tracing::info!(product_id, dropped, "propagated product removal to menus");
        Ok(dropped)
    }
}

/// Refresh one menu against an updated product
///
/// Returns whether any ingredient embedded the product.
fn refresh_menu(menu: &mut Menu, product_id: i64, product: &Product) -> bool {
    let mut matched = false;
    for ing in menu.ingredients.iter_mut() {
        if ing.product.id != product_id {
            continue;
        }
        ing.product.name = product.name.clone();
        ing.product.cost = product.cost;
        ing.product.vat_rate = product.vat_rate;
        matched = true;
    }
    if matched {
        calculator::normalize_menu(menu);
    }
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{MenuIngredient, ProductSnapshot};

    const EPS: f64 = 1e-9;

    fn make_product(id: i64, cost: f64, vat_rate: i32) -> Product {
        Product {
            id: Some(id),
            name: format!("product-{}", id),
            cost,
            vat_rate,
        }
    }

    fn make_ingredient(product: &Product, quantity: f64) -> MenuIngredient {
        MenuIngredient {
            product: ProductSnapshot {
                id: product.id.unwrap(),
                name: product.name.clone(),
                cost: product.cost,
                vat_rate: product.vat_rate,
            },
            quantity,
            unit_cost: calculator::unit_cost(product.cost, quantity),
        }
    }

    fn make_menu(name: &str, ingredients: Vec<MenuIngredient>) -> Menu {
        let mut menu = Menu {
            id: None,
            menu_name: name.to_string(),
            ingredients,
            base_cost: 0.0,
            vat_amount: 0.0,
            total_cost: 0.0,
        };
        calculator::normalize_menu(&mut menu);
        menu
    }

    async fn seed_menus(store: &JsonStore, mut menus: Vec<Menu>) {
        for (i, menu) in menus.iter_mut().enumerate() {
            menu.id = Some(i as i64 + 1);
        }
        store.save_menus(&menus).await.unwrap();
    }

    #[tokio::test]
    async fn test_price_change_rewrites_snapshots_and_costs() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        let flour = make_product(1, 10.0, 10);
        seed_menus(
            &store,
            vec![make_menu("Bread", vec![make_ingredient(&flour, 500.0)])],
        )
        .await;

        let propagator = CostPropagator::new(store.clone());
        let updated = make_product(1, 20.0, 10);
        let touched = propagator.propagate_update(&updated).await.unwrap();
        assert_eq!(touched, 1);

        let menus = store.load_menus().await.unwrap();
        let ing = &menus[0].ingredients[0];
        assert_eq!(ing.product.cost, 20.0);
        assert!((ing.unit_cost - 10.0).abs() < EPS);
        assert!((menus[0].base_cost - 10.0).abs() < EPS);
        assert!((menus[0].vat_amount - 1.0).abs() < EPS);
        assert!((menus[0].total_cost - 11.0).abs() < EPS);
    }

    #[tokio::test]
    async fn test_vat_change_recomputes_aggregates() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        let flour = make_product(1, 10.0, 10);
        seed_menus(
            &store,
            vec![make_menu("Bread", vec![make_ingredient(&flour, 500.0)])],
        )
        .await;

        let propagator = CostPropagator::new(store.clone());
        let updated = make_product(1, 10.0, 20);
        propagator.propagate_update(&updated).await.unwrap();

        let menus = store.load_menus().await.unwrap();
        assert_eq!(menus[0].ingredients[0].product.vat_rate, 20);
        assert!((menus[0].base_cost - 5.0).abs() < EPS);
        assert!((menus[0].vat_amount - 1.0).abs() < EPS);
        assert!((menus[0].total_cost - 6.0).abs() < EPS);
    }

    #[tokio::test]
    async fn test_unrelated_menus_are_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        let flour = make_product(1, 10.0, 10);
        let sugar = make_product(2, 30.0, 8);
        seed_menus(
            &store,
            vec![
                make_menu("Bread", vec![make_ingredient(&flour, 500.0)]),
                make_menu("Syrup", vec![make_ingredient(&sugar, 200.0)]),
            ],
        )
        .await;

        let propagator = CostPropagator::new(store.clone());
        let touched = propagator
            .propagate_update(&make_product(1, 40.0, 10))
            .await
            .unwrap();
        assert_eq!(touched, 1);

        let menus = store.load_menus().await.unwrap();
        let syrup = menus.iter().find(|m| m.menu_name == "Syrup").unwrap();
        assert_eq!(syrup.ingredients[0].product.cost, 30.0);
        assert!((syrup.base_cost - 6.0).abs() < EPS);
    }

    #[tokio::test]
    async fn test_propagation_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        let flour = make_product(1, 10.0, 10);
        seed_menus(
            &store,
            vec![make_menu("Bread", vec![make_ingredient(&flour, 333.0)])],
        )
        .await;

        let propagator = CostPropagator::new(store.clone());
        let updated = make_product(1, 19.99, 10);

        propagator.propagate_update(&updated).await.unwrap();
        let first = std::fs::read_to_string(dir.path().join("menu.json")).unwrap();

        propagator.propagate_update(&updated).await.unwrap();
        let second = std::fs::read_to_string(dir.path().join("menu.json")).unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_removal_drops_ingredients_and_empty_menus() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        let flour = make_product(1, 10.0, 10);
        let sugar = make_product(2, 30.0, 8);
        seed_menus(
            &store,
            vec![
                make_menu("Bread", vec![make_ingredient(&flour, 500.0)]),
                make_menu(
                    "Cake",
                    vec![
                        make_ingredient(&flour, 200.0),
                        make_ingredient(&sugar, 100.0),
                    ],
                ),
            ],
        )
        .await;

        let propagator = CostPropagator::new(store.clone());
        let dropped = propagator.propagate_removal(1).await.unwrap();
        assert_eq!(dropped, 1);

        let menus = store.load_menus().await.unwrap();
        assert_eq!(menus.len(), 1);
        let cake = &menus[0];
        assert_eq!(cake.menu_name, "Cake");
        assert!(cake.ingredients.iter().all(|ing| ing.product.id != 1));

        // The surviving menu's aggregates reflect only the sugar
        assert!((cake.base_cost - 3.0).abs() < EPS);
        assert!((cake.vat_amount - 0.24).abs() < EPS);
        assert!((cake.total_cost - 3.24).abs() < EPS);
    }

    #[tokio::test]
    async fn test_removal_of_unreferenced_product_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        let flour = make_product(1, 10.0, 10);
        seed_menus(
            &store,
            vec![make_menu("Bread", vec![make_ingredient(&flour, 500.0)])],
        )
        .await;

        let propagator = CostPropagator::new(store.clone());
        let dropped = propagator.propagate_removal(99).await.unwrap();
        assert_eq!(dropped, 0);

        let menus = store.load_menus().await.unwrap();
        assert_eq!(menus.len(), 1);
        assert_eq!(menus[0].ingredients.len(), 1);
    }
}
