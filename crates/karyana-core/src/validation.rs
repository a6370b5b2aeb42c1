//! # Validation Module
//!
//! Client-side form validation for the Karyana POS screens.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Screen controller (this crate)                               │
//! │  ├── Empty-field rejection, numeric coercion                           │
//! │  └── Blocks the HTTP call before anything is transmitted               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Backend service                                              │
//! │  ├── Schema validation, uniqueness, auth                               │
//! │  └── Authoritative; its errors surface verbatim in the UI              │
//! │                                                                         │
//! │  Defense in depth: the client never relies on Layer 1 alone            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::types::{Credentials, ProductForm, ProductPatch};

// =============================================================================
// Product Form
// =============================================================================

/// Validates and coerces a product form into an update/create body.
///
/// ## Rules
/// - All four fields (name, price, stock, category) must be non-empty
///   after trimming
/// - `price` must parse as a non-negative number
/// - `stock` must parse as a non-negative integer
///
/// A failed validation means no request body exists, so the save call
/// cannot be attempted.
///
/// ## Example
/// ```rust
/// use karyana_core::types::ProductForm;
/// use karyana_core::validation::validate_product_form;
///
/// let form = ProductForm {
///     name: "Rice".to_string(),
///     price: "250".to_string(),
///     stock: "3".to_string(),
///     category: "Groceries".to_string(),
/// };
/// let patch = validate_product_form(&form).unwrap();
/// assert_eq!(patch.price, 250.0);
/// assert_eq!(patch.stock, 3);
/// ```
pub fn validate_product_form(form: &ProductForm) -> ValidationResult<ProductPatch> {
    let name = required(&form.name, "name")?;
    let price_text = required(&form.price, "price")?;
    let stock_text = required(&form.stock, "stock")?;
    let category = required(&form.category, "category")?;

    let price: f64 = price_text
        .parse()
        .map_err(|_| ValidationError::NotANumber {
            field: "price",
            value: price_text.clone(),
        })?;
    if price < 0.0 {
        return Err(ValidationError::Negative { field: "price" });
    }

    let stock: i64 = stock_text
        .parse()
        .map_err(|_| ValidationError::NotANumber {
            field: "stock",
            value: stock_text.clone(),
        })?;
    if stock < 0 {
        return Err(ValidationError::Negative { field: "stock" });
    }

    Ok(ProductPatch {
        name,
        price,
        stock,
        category,
    })
}

// =============================================================================
// Auth Forms
// =============================================================================

/// Validates a login form: email and password must be non-empty.
pub fn validate_login_form(credentials: &Credentials) -> ValidationResult<()> {
    required(&credentials.email, "email")?;
    required(&credentials.password, "password")?;
    Ok(())
}

/// Validates a registration form: name, email and password must be
/// non-empty.
pub fn validate_register_form(credentials: &Credentials) -> ValidationResult<()> {
    let name = credentials.name.as_deref().unwrap_or("");
    required(name, "name")?;
    validate_login_form(credentials)
}

// =============================================================================
// Helpers
// =============================================================================

/// Trims a field and rejects it when empty.
fn required(value: &str, field: &'static str) -> ValidationResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Required { field });
    }
    Ok(value.to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================
