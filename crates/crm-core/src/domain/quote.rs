//! Quote entity and forms

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validation::non_negative;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub quote_id: String,
    pub quote_number: String,
    #[serde(default)]
    pub opportunity_id: Option<String>,
    pub customer_id: String,
    #[serde(default)]
    pub contact_id: Option<String>,
    #[serde(default)]
    pub quote_status: Option<String>,
    pub quote_date: NaiveDate,
    #[serde(default)]
    pub valid_until: Option<NaiveDate>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub payment_terms: Option<String>,
    #[serde(default)]
    pub delivery_terms: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub assigned_user_id: Option<String>,
    #[serde(default)]
    pub items: Vec<QuoteItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteItem {
    pub product_id: String,
    pub quantity: i32,
    pub unit_price: Decimal,
    #[serde(default)]
    pub discount_rate: Option<f64>,
    #[serde(default)]
    pub tax_rate: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Quote form, used for create and full update alike.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuoteForm {
    #[validate(length(min = 1, message = "Quote number is required"))]
    pub quote_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opportunity_id: Option<String>,
    #[validate(length(min = 1, message = "Customer is required"))]
    pub customer_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_status: Option<String>,
    pub quote_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_terms: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_terms: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_user_id: Option<String>,
    #[validate(nested)]
    #[serde(default)]
    pub items: Vec<QuoteItemForm>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuoteItemForm {
    #[validate(length(min = 1, message = "Product is required"))]
    pub product_id: String,
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: i32,
    #[validate(custom(function = non_negative, message = "Unit price must be non-negative"))]
    pub unit_price: Decimal,
    #[validate(range(min = 0.0, max = 100.0, message = "Discount rate must be between 0 and 100"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_rate: Option<f64>,
    #[validate(range(min = 0.0, message = "Tax rate must be non-negative"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_item_validation_is_nested() {
        let form: QuoteForm = serde_json::from_str(
            r#"{
                "quoteNumber": "Q-001",
                "customerId": "c-1",
                "quoteDate": "2026-01-15",
                "items": [
                    {"productId": "p-1", "quantity": 0, "unitPrice": "10.00"}
                ]
            }"#,
        )
        .unwrap();
        assert!(form.validate().is_err());
    }
}
