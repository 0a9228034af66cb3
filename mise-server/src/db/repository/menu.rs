//! Menu Repository

use super::{RepoError, RepoResult, next_id};
use crate::db::JsonStore;
use shared::models::Menu;

#[derive(Clone)]
pub struct MenuRepository {
    store: JsonStore,
}

impl MenuRepository {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    /// Full menu sequence
    ///
    /// Never fails to the caller: storage errors are logged and an empty
    /// sequence returned.
    pub async fn list(&self) -> Vec<Menu> {
        match self.store.load_menus().await {
            Ok(menus) => menus,
            Err(e) => {
                tracing::error!(error = %e, "failed to read menu store");
                Vec::new()
            }
        }
    }

    /// Append a new menu, assigning the next free id
    ///
    /// The caller supplies the derived cost fields already recomputed.
    pub async fn create(&self, mut menu: Menu) -> RepoResult<Menu> {
        let mut menus = self.store.load_menus().await?;
        menu.id = Some(next_id(menus.iter().filter_map(|m| m.id)));
        menus.push(menu.clone());
        self.store.save_menus(&menus).await?;
        Ok(menu)
    }

    /// Full replace of the menu carrying `menu.id`
    pub async fn update(&self, menu: Menu) -> RepoResult<Menu> {
        let Some(id) = menu.id else {
            return Err(RepoError::NotFound("menu without id".to_string()));
        };
        let mut menus = self.store.load_menus().await?;
        let Some(slot) = menus.iter_mut().find(|m| m.id == Some(id)) else {
            return Err(RepoError::NotFound(format!("menu {}", id)));
        };
        *slot = menu.clone();
        self.store.save_menus(&menus).await?;
        Ok(menu)
    }
}
