//! Product entity and form

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crm_shared::YnFlag;

use super::validation::non_negative;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: String,
    pub product_code: String,
    pub product_name: String,
    #[serde(default)]
    pub product_category: Option<String>,
    #[serde(default)]
    pub product_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub unit_price: Decimal,
    #[serde(default)]
    pub cost_price: Option<Decimal>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub tax_rate: Option<f64>,
    #[serde(default)]
    pub stock_quantity: Option<i32>,
    #[serde(default)]
    pub is_active: YnFlag,
    #[serde(default)]
    pub use_at: YnFlag,
}

/// Shared create/update form.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductForm {
    #[validate(length(min = 1, message = "Product Code is required"))]
    pub product_code: String,
    #[validate(length(min = 1, message = "Product Name is required"))]
    pub product_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[validate(custom(function = non_negative, message = "Unit Price must be positive"))]
    pub unit_price: Decimal,
    #[validate(custom(function = non_negative, message = "Cost Price must be positive"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[validate(range(min = 0.0, message = "Tax Rate must be positive"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_rate: Option<f64>,
    #[validate(range(min = 0, message = "Stock must be 0 or greater"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_quantity: Option<i32>,
    #[serde(default)]
    pub is_active: YnFlag,
    #[serde(default)]
    pub use_at: YnFlag,
}
