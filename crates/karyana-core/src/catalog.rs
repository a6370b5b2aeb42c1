//! # Catalog Categories
//!
//! The stocked category labels offered on the quick-add screen, and the
//! serialisation of a category selection for the pre-built products query.

/// Categories the backend keeps pre-built catalogs for.
///
/// Shown as the multi-select on the quick-add screen. The labels are part
/// of the API contract: the pre-built endpoint matches on them verbatim.
pub const CATALOG_CATEGORIES: [&str; 7] = [
    "General Store",
    "Groceries",
    "Electronics",
    "Apparel/Clothing",
    "Stationery",
    "Bakery",
    "Medical Store",
];

/// Serialises a category selection as the `categories` query parameter.
///
/// The backend expects a single comma-joined string, not a repeated
/// parameter.
pub fn categories_param<S: AsRef<str>>(categories: &[S]) -> String {
    categories
        .iter()
        .map(|c| c.as_ref())
        .collect::<Vec<_>>()
        .join(",")
}
