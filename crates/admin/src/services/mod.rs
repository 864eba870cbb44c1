//! Console services combining the API client with the core transforms.
//!
//! # Services
//!
//! - `marketplace_editor` - Marketplace load/save through the cost editor view
//! - `category_list` - Flattened category rows with custom field values
//! - `brand_list` - Brand rows with custom field summaries
//! - `custom_fields` - Concurrent per-entity custom field value fetching

pub mod brand_list;
pub mod category_list;
pub mod custom_fields;
pub mod marketplace_editor;

pub use brand_list::BrandList;
pub use category_list::CategoryList;
pub use custom_fields::{CustomFieldValueSource, fetch_values_for_entities};
pub use marketplace_editor::MarketplaceEditor;
