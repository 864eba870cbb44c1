//! View models for the console screens.

pub mod listing;
pub mod marketplace;

pub use listing::{BrandRow, CategoryRow, FieldCell, Listing, field_cells};
pub use marketplace::MarketplaceForm;
