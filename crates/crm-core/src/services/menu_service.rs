// ============================================================================
// CRM Core - Menu Service
// File: crates/crm-core/src/services/menu_service.rs
// ============================================================================
//! Menu administration: tree loading, CRUD, and reorder persistence

use std::sync::Arc;

use tracing::{debug, info};
use validator::Validate;

use crate::domain::{MenuCreate, MenuOrderChange, MenuRecord, MenuTree, MenuUpdate};
use crate::error::DomainError;
use crate::repositories::MenuApi;

pub struct MenuService<M: MenuApi> {
    api: Arc<M>,
}

impl<M: MenuApi> MenuService<M> {
    pub fn new(api: Arc<M>) -> Self {
        Self { api }
    }

    /// Full tree for administration.
    pub async fn load_tree(&self) -> Result<MenuTree, DomainError> {
        let records = self.api.list_all().await?;
        debug!("Fetched {} menu records", records.len());
        Ok(MenuTree::build(records))
    }

    /// Tree of menus visible to the signed-in user, for navigation.
    pub async fn load_visible_tree(&self) -> Result<MenuTree, DomainError> {
        let records = self.api.list_visible().await?;
        Ok(MenuTree::build(records))
    }

    pub async fn get(&self, menu_no: i64) -> Result<MenuRecord, DomainError> {
        self.api.get(menu_no).await
    }

    pub async fn create(&self, form: &MenuCreate) -> Result<MenuRecord, DomainError> {
        form.validate()?;
        let created = self.api.create(form).await?;
        info!(menu_no = created.menu_no, "Menu created");
        Ok(created)
    }

    /// Create under `parent_no`, slotted after the current last child.
    pub async fn create_child(
        &self,
        tree: &MenuTree,
        parent_no: i64,
        mut form: MenuCreate,
    ) -> Result<MenuRecord, DomainError> {
        if tree.get(parent_no).is_none() {
            return Err(DomainError::Validation(format!(
                "Unknown parent menu: {}",
                parent_no
            )));
        }
        form.upper_menu_no = Some(parent_no);
        form.menu_order = tree.next_order(Some(parent_no));
        self.create(&form).await
    }

    pub async fn update(&self, menu_no: i64, form: &MenuUpdate) -> Result<MenuRecord, DomainError> {
        form.validate()?;
        self.api.update(menu_no, form).await
    }

    pub async fn delete(&self, menu_no: i64) -> Result<(), DomainError> {
        self.api.delete(menu_no).await?;
        info!(menu_no, "Menu deleted");
        Ok(())
    }

    /// Move `active` onto `over`'s slot within their sibling group and
    /// persist the resulting order in one bulk call.
    ///
    /// The tree is updated in place; on a persistence failure the caller
    /// should reload, the optimistic local order is not rolled back.
    pub async fn reorder(
        &self,
        tree: &mut MenuTree,
        active: i64,
        over: i64,
    ) -> Result<Vec<MenuOrderChange>, DomainError> {
        let changes = tree.move_within_siblings(active, over)?;
        if changes.is_empty() {
            debug!("Reorder produced no order changes, nothing to persist");
            return Ok(changes);
        }
        self.api.reorder(&changes).await?;
        info!("Persisted new order for {} menus", changes.len());
        Ok(changes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::menu_api::MockMenuApi;

    fn record(menu_no: i64, upper: Option<i64>, order: i32) -> MenuRecord {
        MenuRecord {
            menu_no,
            upper_menu_no: upper,
            menu_code: format!("M{}", menu_no),
            menu_name: format!("Menu {}", menu_no),
            menu_path: None,
            icon_name: None,
            menu_order: order,
            menu_description: None,
            is_visible: true,
            is_active: true,
        }
    }

    fn sample_form() -> MenuCreate {
        MenuCreate {
            menu_name: "Reports".into(),
            menu_code: "REPORTS".into(),
            menu_path: Some("/reports".into()),
            icon_name: None,
            menu_order: 0,
            is_visible: true,
            is_active: true,
            menu_description: None,
            upper_menu_no: None,
        }
    }

    #[tokio::test]
    async fn test_load_tree_builds_forest() {
        let mut api = MockMenuApi::new();
        api.expect_list_all()
            .returning(|| Ok(vec![record(1, None, 10), record(2, Some(1), 5)]));

        let service = MenuService::new(Arc::new(api));
        let tree = service.load_tree().await.unwrap();
        assert_eq!(tree.roots(), &[1]);
        assert_eq!(tree.children_of(1), &[2]);
    }

    #[tokio::test]
    async fn test_create_validates_before_any_call() {
        let mut api = MockMenuApi::new();
        api.expect_create().never();

        let service = MenuService::new(Arc::new(api));
        let mut form = sample_form();
        form.menu_name.clear();
        let err = service.create(&form).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_child_fills_parent_and_order() {
        let tree = MenuTree::build(vec![record(1, None, 10), record(2, Some(1), 30)]);

        let mut api = MockMenuApi::new();
        api.expect_create()
            .withf(|form| form.upper_menu_no == Some(1) && form.menu_order == 40)
            .returning(|form| {
                let mut created = record(99, form.upper_menu_no, form.menu_order);
                created.menu_name = form.menu_name.clone();
                Ok(created)
            });

        let service = MenuService::new(Arc::new(api));
        let created = service.create_child(&tree, 1, sample_form()).await.unwrap();
        assert_eq!(created.upper_menu_no, Some(1));
    }

    #[tokio::test]
    async fn test_create_child_rejects_unknown_parent() {
        let tree = MenuTree::build(vec![record(1, None, 10)]);
        let mut api = MockMenuApi::new();
        api.expect_create().never();

        let service = MenuService::new(Arc::new(api));
        let err = service
            .create_child(&tree, 42, sample_form())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn test_reorder_persists_changed_rows() {
        let mut tree = MenuTree::build(vec![
            record(10, None, 10),
            record(11, None, 20),
            record(12, None, 30),
        ]);

        let mut api = MockMenuApi::new();
        api.expect_reorder()
            .withf(|changes: &[MenuOrderChange]| {
                changes.iter().map(|c| c.menu_no).collect::<Vec<_>>() == vec![12, 10, 11]
            })
            .returning(|_| Ok(()));

        let service = MenuService::new(Arc::new(api));
        let changes = service.reorder(&mut tree, 12, 10).await.unwrap();
        assert_eq!(changes.len(), 3);
        assert_eq!(tree.roots(), &[12, 10, 11]);
    }

    #[tokio::test]
    async fn test_reorder_noop_skips_persistence() {
        let mut tree = MenuTree::build(vec![record(10, None, 10), record(11, None, 20)]);
        let mut api = MockMenuApi::new();
        api.expect_reorder().never();

        let service = MenuService::new(Arc::new(api));
        let changes = service.reorder(&mut tree, 10, 10).await.unwrap();
        assert!(changes.is_empty());
    }

    #[tokio::test]
    async fn test_reorder_rejects_cross_parent_move() {
        let mut tree = MenuTree::build(vec![
            record(1, None, 0),
            record(10, Some(1), 0),
            record(2, None, 10),
        ]);
        let mut api = MockMenuApi::new();
        api.expect_reorder().never();

        let service = MenuService::new(Arc::new(api));
        assert!(service.reorder(&mut tree, 10, 2).await.is_err());
    }
}
