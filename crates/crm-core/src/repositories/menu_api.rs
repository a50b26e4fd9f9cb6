//! Menu gateway port

use async_trait::async_trait;

use crate::domain::{MenuCreate, MenuOrderChange, MenuRecord, MenuUpdate};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuApi: Send + Sync {
    /// Every menu, for administration.
    async fn list_all(&self) -> Result<Vec<MenuRecord>, DomainError>;

    /// Menus visible to the signed-in user, for navigation.
    async fn list_visible(&self) -> Result<Vec<MenuRecord>, DomainError>;

    async fn get(&self, menu_no: i64) -> Result<MenuRecord, DomainError>;

    async fn create(&self, form: &MenuCreate) -> Result<MenuRecord, DomainError>;

    async fn update(&self, menu_no: i64, form: &MenuUpdate) -> Result<MenuRecord, DomainError>;

    async fn delete(&self, menu_no: i64) -> Result<(), DomainError>;

    /// Persist a sibling reorder in one call.
    async fn reorder(&self, changes: &[MenuOrderChange]) -> Result<(), DomainError>;
}
