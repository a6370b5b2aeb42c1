//! # karyana-core: Pure Business Logic for the Karyana POS Client
//!
//! Everything the handheld client knows without touching the network lives
//! here: the backend's wire types, the validation applied to form input
//! before a request is allowed out, and the low-stock display rules.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Karyana POS Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Rendering Surface (external)                   │   │
//! │  │     Login UI ──► Products UI ──► Quick-Add UI ──► History UI   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              apps/handheld (screen controllers)                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ karyana-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │validation │  │   stock   │  │  catalog  │  │   │
//! │  │   │  Product  │  │   form    │  │ low-stock │  │categories │  │   │
//! │  │   │   Sale    │  │ coercion  │  │  banner   │  │   param   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             karyana-api (HTTP clients + credentials)            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Wire types (Product, Sale, Session, etc.)
//! - [`validation`] - Form validation and numeric coercion
//! - [`stock`] - Low-stock flagging and the alert banner
//! - [`catalog`] - Stocked category labels and query serialisation
//! - [`error`] - Validation error type
//!
//! ## Design Principles
//!
//! 1. **Wire fidelity**: types serialize exactly as the backend expects
//!    (Mongo `_id`, camelCase fields, plain JSON numbers)
//! 2. **No I/O**: network and file system access is FORBIDDEN here
//! 3. **Validate before transmit**: a form that fails validation never
//!    produces a request body
//! 4. **Explicit errors**: all errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod stock;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use karyana_core::Product` instead of
// `use karyana_core::types::Product`

pub use error::ValidationError;
pub use stock::LowStockBanner;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Stock level at or below which a product is flagged as low on stock.
///
/// ## Ownership Note
/// The backend also exposes a dedicated low-stock report endpoint with its
/// own threshold. This constant only drives the client-side display rule
/// (row flag + alert banner) computed over an already-fetched product list.
pub const LOW_STOCK_THRESHOLD: i64 = 5;
