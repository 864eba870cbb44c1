//! Marketplace cost records and their editable view.
//!
//! A marketplace persists its pricing as one flat list of [`CostRecord`]s. The
//! editor works on a [`CostView`] with three sections:
//!
//! - tiered product-cost slabs (`COMMISSION` records over a product range),
//! - flat-rate breakdowns (any category over the `All` range),
//! - shipping slabs (`SHIPPING` records over a product range).
//!
//! [`decode`] and [`encode`] convert between the two shapes.

mod codec;
mod view;

pub use codec::{decode, encode, parse_number};
pub use view::{CommissionBreakdown, CostView, ProductCostSlab, ShippingCostSlab};

use serde::{Deserialize, Serialize};

use crate::types::CostId;

/// Sentinel product range meaning "every product".
pub const ALL_PRODUCTS: &str = "All";

/// Cost component category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CostCategory {
    Commission,
    Shipping,
    Marketing,
}

impl CostCategory {
    /// Wire name of the category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Commission => "COMMISSION",
            Self::Shipping => "SHIPPING",
            Self::Marketing => "MARKETING",
        }
    }
}

impl std::fmt::Display for CostCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a cost value is a percentage or an absolute amount.
///
/// The platform writes the single letters `P` and `A`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CostValueType {
    #[serde(rename = "P", alias = "p", alias = "PERCENT")]
    Percent,
    #[serde(rename = "A", alias = "a", alias = "ABSOLUTE")]
    Absolute,
}

impl CostValueType {
    /// Short label used in tables.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Percent => "%",
            Self::Absolute => "abs",
        }
    }
}

impl std::str::FromStr for CostValueType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "P" | "PERCENT" | "%" => Ok(Self::Percent),
            "A" | "ABSOLUTE" => Ok(Self::Absolute),
            _ => Err(format!("invalid cost value type: {s}")),
        }
    }
}

/// Product range a cost record applies to.
///
/// On the wire this is a single string: [`ALL_PRODUCTS`] or `"<from>-<to>"`.
/// It is parsed once when a record is deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum ProductRange {
    All,
    Range { from: String, to: String },
}

impl ProductRange {
    /// Parse a wire range string, splitting on the first `-`.
    ///
    /// A string without `-` becomes a range with an empty upper bound.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw == ALL_PRODUCTS {
            return Self::All;
        }
        let (from, to) = raw.split_once('-').unwrap_or((raw, ""));
        Self::Range {
            from: from.to_owned(),
            to: to.to_owned(),
        }
    }

    /// Build a range from its bounds.
    #[must_use]
    pub fn between(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::Range {
            from: from.into(),
            to: to.into(),
        }
    }

    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl Default for ProductRange {
    fn default() -> Self {
        Self::Range {
            from: String::new(),
            to: String::new(),
        }
    }
}

impl std::fmt::Display for ProductRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str(ALL_PRODUCTS),
            Self::Range { from, to } if to.is_empty() => f.write_str(from),
            Self::Range { from, to } => write!(f, "{from}-{to}"),
        }
    }
}

impl From<Option<String>> for ProductRange {
    fn from(raw: Option<String>) -> Self {
        raw.as_deref().map_or_else(Self::default, Self::parse)
    }
}

impl From<ProductRange> for String {
    fn from(range: ProductRange) -> Self {
        range.to_string()
    }
}

/// The view section a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CostKind {
    /// Tiered product-cost slab.
    ProductSlab,
    /// Flat-rate breakdown over all products.
    Breakdown,
    /// Range-keyed shipping cost.
    ShippingSlab,
}

/// A persisted marketplace cost record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CostId>,
    pub cost_category: CostCategory,
    pub cost_value_type: CostValueType,
    #[serde(default)]
    pub cost_value: f64,
    #[serde(default)]
    pub cost_product_range: ProductRange,
}

impl CostRecord {
    /// Create a record without a server id.
    #[must_use]
    pub const fn new(
        cost_category: CostCategory,
        cost_value_type: CostValueType,
        cost_value: f64,
        cost_product_range: ProductRange,
    ) -> Self {
        Self {
            id: None,
            cost_category,
            cost_value_type,
            cost_value,
            cost_product_range,
        }
    }

    /// Which view section this record decodes into.
    ///
    /// `MARKETING` records over a product range have no section and return
    /// `None`.
    #[must_use]
    pub const fn kind(&self) -> Option<CostKind> {
        match (self.cost_category, self.cost_product_range.is_all()) {
            (_, true) => Some(CostKind::Breakdown),
            (CostCategory::Commission, false) => Some(CostKind::ProductSlab),
            (CostCategory::Shipping, false) => Some(CostKind::ShippingSlab),
            (CostCategory::Marketing, false) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_range_parse() {
        assert_eq!(ProductRange::parse("All"), ProductRange::All);
        assert_eq!(
            ProductRange::parse("0-500"),
            ProductRange::between("0", "500")
        );
        assert_eq!(
            ProductRange::parse("1-500rs"),
            ProductRange::between("1", "500rs")
        );
        // Only the first dash splits.
        assert_eq!(
            ProductRange::parse("10-20-30"),
            ProductRange::between("10", "20-30")
        );
        assert_eq!(ProductRange::parse("100"), ProductRange::between("100", ""));
    }

    #[test]
    fn test_product_range_display() {
        assert_eq!(ProductRange::All.to_string(), "All");
        assert_eq!(ProductRange::between("0", "500").to_string(), "0-500");
        assert_eq!(ProductRange::between("100", "").to_string(), "100");
    }

    #[test]
    fn test_record_wire_format() {
        let json = r#"{
            "id": 11,
            "costCategory": "COMMISSION",
            "costValueType": "A",
            "costValue": 500.00,
            "costProductRange": "0-500"
        }"#;
        let record: CostRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, Some(CostId::new(11)));
        assert_eq!(record.cost_value_type, CostValueType::Absolute);
        assert_eq!(record.cost_product_range, ProductRange::between("0", "500"));

        let out = serde_json::to_value(CostRecord::new(
            CostCategory::Marketing,
            CostValueType::Percent,
            2.5,
            ProductRange::All,
        ))
        .unwrap();
        assert_eq!(
            out,
            serde_json::json!({
                "costCategory": "MARKETING",
                "costValueType": "P",
                "costValue": 2.5,
                "costProductRange": "All"
            })
        );
    }

    #[test]
    fn test_value_type_accepts_long_form() {
        let parsed: CostValueType = serde_json::from_str("\"PERCENT\"").unwrap();
        assert_eq!(parsed, CostValueType::Percent);
        assert_eq!("absolute".parse::<CostValueType>(), Ok(CostValueType::Absolute));
    }

    #[test]
    fn test_null_range_decodes_to_empty_range() {
        let json = r#"{"costCategory":"SHIPPING","costValueType":"A","costValue":40,"costProductRange":null}"#;
        let record: CostRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.cost_product_range, ProductRange::default());
        assert_eq!(record.kind(), Some(CostKind::ShippingSlab));
    }

    #[test]
    fn test_record_kind() {
        let kind = |category, range: &str| {
            CostRecord::new(category, CostValueType::Percent, 1.0, ProductRange::parse(range))
                .kind()
        };
        assert_eq!(kind(CostCategory::Commission, "0-500"), Some(CostKind::ProductSlab));
        assert_eq!(kind(CostCategory::Commission, "All"), Some(CostKind::Breakdown));
        assert_eq!(kind(CostCategory::Shipping, "All"), Some(CostKind::Breakdown));
        assert_eq!(kind(CostCategory::Marketing, "All"), Some(CostKind::Breakdown));
        assert_eq!(kind(CostCategory::Shipping, "1-500rs"), Some(CostKind::ShippingSlab));
        assert_eq!(kind(CostCategory::Marketing, "0-500"), None);
    }
}
