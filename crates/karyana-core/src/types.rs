//! # Wire Types
//!
//! Types mirroring the backend's JSON wire format.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Wire Types                                     │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │      Sale       │   │    Session      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  _id (optional) │   │  _id            │   │  token          │       │
//! │  │  name           │   │  createdAt      │   │  user profile   │       │
//! │  │  price          │   │  totalAmount    │   └─────────────────┘       │
//! │  │  stock          │   │  cartItems[]    │                             │
//! │  │  category       │   └─────────────────┘                             │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity Note
//! The backend keys entities by Mongo `_id`. Catalog suggestions returned by
//! the pre-built endpoint have not been persisted yet and therefore carry no
//! `_id`; `Product::id` is `Option` for exactly that case.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::LOW_STOCK_THRESHOLD;

// =============================================================================
// Credentials & Session
// =============================================================================

/// Login/registration form payload.
///
/// `name` is only sent on registration; login posts email and password.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Login credentials (no display name).
    pub fn login(email: impl Into<String>, password: impl Into<String>) -> Self {
        Credentials {
            name: None,
            email: email.into(),
            password: password.into(),
        }
    }

    /// Registration credentials.
    pub fn register(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Credentials {
            name: Some(name.into()),
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Cached identity of the signed-in user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Backend identifier.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Display name shown in the home greeting.
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// An authenticated session: bearer token plus the cached profile.
///
/// ## Invariant
/// Token and profile exist together or not at all. The credential store
/// persists and clears them as a pair; nothing else writes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: UserProfile,
}

/// Full response body of the register/login endpoints.
///
/// The backend replies with the user document plus a `token` field on
/// success. Only a body that actually carries a token establishes a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,

    #[serde(rename = "_id", default)]
    pub id: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,
}

impl AuthResponse {
    /// Builds the session to persist, if the response carries a token.
    pub fn session(&self) -> Option<Session> {
        let token = self.token.clone()?;
        Some(Session {
            token,
            user: UserProfile {
                id: self.id.clone(),
                name: self.name.clone().unwrap_or_default(),
                email: self.email.clone(),
            },
        })
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product in the store's inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Backend identifier; absent on catalog suggestions that were never
    /// saved. Rows without an id cannot be edited or deleted.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Display name shown in lists and on receipts.
    pub name: String,

    /// Unit price in rupees. The backend owns all arithmetic; the client
    /// only displays this value and passes it back unchanged.
    pub price: f64,

    /// Units on hand.
    pub stock: i64,

    /// Category label, e.g. "Groceries".
    pub category: String,
}

impl Product {
    /// Whether this product should be flagged as low on stock in list views.
    #[inline]
    pub fn is_low_stock(&self) -> bool {
        self.stock <= LOW_STOCK_THRESHOLD
    }

    /// Whether edit/delete actions are available for this row.
    ///
    /// Catalog suggestions have no backend id until they are batch-saved,
    /// so mutation calls would have nothing to address.
    #[inline]
    pub fn is_editable(&self) -> bool {
        self.id.is_some()
    }
}

/// Raw text captured by the product edit form, before coercion.
///
/// Price and stock arrive as strings because that is what a text input
/// yields; [`crate::validation::validate_product_form`] coerces them.
#[derive(Debug, Clone, Default)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub stock: String,
    pub category: String,
}

impl ProductForm {
    /// Pre-fills the form from an existing product.
    pub fn from_product(product: &Product) -> Self {
        ProductForm {
            name: product.name.clone(),
            price: product.price.to_string(),
            stock: product.stock.to_string(),
            category: product.category.clone(),
        }
    }
}

/// Validated, coerced body for a product update call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPatch {
    pub name: String,
    pub price: f64,
    pub stock: i64,
    pub category: String,
}

// =============================================================================
// Sales
// =============================================================================

/// A line of a recorded sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,

    pub name: String,

    pub quantity: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// A completed sale as returned by the sales history endpoint.
///
/// Read-only on the client; created server-side when a sale is recorded.
/// Display order is exactly the order the backend returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    #[serde(rename = "_id")]
    pub id: String,

    pub created_at: DateTime<Utc>,

    pub total_amount: f64,

    pub cart_items: Vec<CartItem>,
}

/// Acknowledgement body of the quick-save batch endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSaveReceipt {
    pub message: String,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(stock: i64) -> Product {
        Product {
            id: Some("p-1".to_string()),
            name: "Rice".to_string(),
            price: 250.0,
            stock,
            category: "Groceries".to_string(),
        }
    }

    #[test]
    fn test_low_stock_flag_at_threshold() {
        assert!(product(0).is_low_stock());
        assert!(product(5).is_low_stock());
        assert!(!product(6).is_low_stock());
    }

    #[test]
    fn test_unsaved_product_is_not_editable() {
        let mut p = product(10);
        assert!(p.is_editable());
        p.id = None;
        assert!(!p.is_editable());
    }

    #[test]
    fn test_product_wire_format_uses_mongo_id() {
        let json = r#"{"_id":"66b1","name":"Rice","price":250,"stock":3,"category":"Groceries"}"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.id.as_deref(), Some("66b1"));
        assert_eq!(p.price, 250.0);

        let back = serde_json::to_value(&p).unwrap();
        assert_eq!(back["_id"], "66b1");
        assert!(back.get("id").is_none());
    }

    #[test]
    fn test_prebuilt_product_deserializes_without_id() {
        let json = r#"{"name":"Sugar","price":180,"stock":20,"category":"Groceries"}"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert!(p.id.is_none());

        // And serializing it back must not invent an `_id` the backend
        // would try to persist.
        let back = serde_json::to_value(&p).unwrap();
        assert!(back.get("_id").is_none());
    }

    #[test]
    fn test_auth_response_session_requires_token() {
        let without: AuthResponse = serde_json::from_str(
            r#"{"_id":"u1","name":"Asif","email":"asif@example.com"}"#,
        )
        .unwrap();
        assert!(without.session().is_none());

        let with: AuthResponse = serde_json::from_str(
            r#"{"_id":"u1","name":"Asif","email":"asif@example.com","token":"jwt"}"#,
        )
        .unwrap();
        let session = with.session().unwrap();
        assert_eq!(session.token, "jwt");
        assert_eq!(session.user.name, "Asif");
        assert_eq!(session.user.id.as_deref(), Some("u1"));
    }

    #[test]
    fn test_sale_wire_format() {
        let json = r#"{
            "_id": "s1",
            "createdAt": "2024-03-01T10:15:00Z",
            "totalAmount": 500,
            "cartItems": [{"name": "Rice", "quantity": 2}]
        }"#;
        let sale: Sale = serde_json::from_str(json).unwrap();
        assert_eq!(sale.total_amount, 500.0);
        assert_eq!(sale.cart_items.len(), 1);
        assert_eq!(sale.cart_items[0].quantity, 2);
    }

    #[test]
    fn test_form_prefill_round_trips_numbers_as_text() {
        let form = ProductForm::from_product(&product(3));
        assert_eq!(form.price, "250");
        assert_eq!(form.stock, "3");
    }
}
