//! User account entity and forms

use serde::{Deserialize, Serialize};
use validator::Validate;

use crm_shared::YnFlag;

/// Backend user account. Named to stay clear of [`super::session::User`],
/// the signed-in identity view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub user_id: String,
    pub user_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub dept_id: Option<String>,
    #[serde(default)]
    pub use_at: YnFlag,
}

/// Create form; the only place a password ever appears client-side.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserCreate {
    #[validate(length(min = 3, message = "User ID must be at least 3 characters"))]
    pub user_id: String,
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub user_name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dept_id: Option<String>,
    #[serde(default)]
    pub use_at: YnFlag,
}

/// Update form; user id and password are not editable here.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub user_name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub use_at: YnFlag,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_rejects_short_password() {
        let form = UserCreate {
            user_id: "admin".into(),
            user_name: "Admin".into(),
            email: "admin@example.com".into(),
            password: "short".into(),
            phone: None,
            dept_id: None,
            use_at: YnFlag::Y,
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_update_rejects_bad_email() {
        let form = UserUpdate {
            user_name: "Admin".into(),
            email: "not-an-email".into(),
            phone: None,
            use_at: YnFlag::Y,
        };
        assert!(form.validate().is_err());
    }
}
