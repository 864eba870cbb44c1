//! Editable cost view rows.

use serde::{Deserialize, Serialize};

use super::{CostCategory, CostValueType};

/// One tier of the product-cost table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCostSlab {
    pub from: String,
    pub to: String,
    pub value_type: CostValueType,
}

impl ProductCostSlab {
    /// Empty slab of the given value type.
    #[must_use]
    pub const fn empty(value_type: CostValueType) -> Self {
        Self {
            from: String::new(),
            to: String::new(),
            value_type,
        }
    }
}

/// A flat-rate cost applied to every product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionBreakdown {
    pub category: CostCategory,
    pub value: String,
    pub value_type: CostValueType,
}

impl CommissionBreakdown {
    /// Empty percentage breakdown for `category`.
    #[must_use]
    pub const fn empty(category: CostCategory) -> Self {
        Self {
            category,
            value: String::new(),
            value_type: CostValueType::Percent,
        }
    }
}

/// Shipping cost for a product range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingCostSlab {
    pub range: String,
    pub cost: String,
}

/// Editor state for a marketplace's costs.
///
/// Every section holds at least one row after [`super::decode`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostView {
    pub product_cost_slabs: Vec<ProductCostSlab>,
    pub product_cost_value_type: CostValueType,
    pub commission_breakdowns: Vec<CommissionBreakdown>,
    pub shipping_costs: Vec<ShippingCostSlab>,
}

/// Range of the shipping row seeded into a fresh editor.
pub(crate) const DEFAULT_SHIPPING_RANGE: &str = "1-500rs";

pub(crate) fn default_product_cost_slabs() -> Vec<ProductCostSlab> {
    vec![ProductCostSlab::empty(CostValueType::Absolute)]
}

pub(crate) fn default_commission_breakdowns() -> Vec<CommissionBreakdown> {
    vec![
        CommissionBreakdown::empty(CostCategory::Commission),
        CommissionBreakdown::empty(CostCategory::Shipping),
    ]
}

pub(crate) fn default_shipping_costs() -> Vec<ShippingCostSlab> {
    vec![ShippingCostSlab {
        range: DEFAULT_SHIPPING_RANGE.to_owned(),
        cost: String::new(),
    }]
}

impl Default for CostView {
    fn default() -> Self {
        Self {
            product_cost_slabs: default_product_cost_slabs(),
            product_cost_value_type: CostValueType::Absolute,
            commission_breakdowns: default_commission_breakdowns(),
            shipping_costs: default_shipping_costs(),
        }
    }
}

impl CostView {
    /// Append an empty product-cost slab using the shared value type.
    pub fn add_product_cost_slab(&mut self) {
        self.product_cost_slabs
            .push(ProductCostSlab::empty(self.product_cost_value_type));
    }

    /// Append an empty percentage commission breakdown.
    pub fn add_commission_breakdown(&mut self) {
        self.commission_breakdowns
            .push(CommissionBreakdown::empty(CostCategory::Commission));
    }

    /// Append an empty shipping slab.
    pub fn add_shipping_cost(&mut self) {
        self.shipping_costs.push(ShippingCostSlab {
            range: String::new(),
            cost: String::new(),
        });
    }

    /// Switch every product-cost slab to `value_type`.
    pub fn set_product_cost_value_type(&mut self, value_type: CostValueType) {
        self.product_cost_value_type = value_type;
        for slab in &mut self.product_cost_slabs {
            slab.value_type = value_type;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_slab_inherits_shared_value_type() {
        let mut view = CostView::default();
        view.set_product_cost_value_type(CostValueType::Percent);
        view.add_product_cost_slab();

        assert_eq!(view.product_cost_slabs.len(), 2);
        assert!(
            view.product_cost_slabs
                .iter()
                .all(|s| s.value_type == CostValueType::Percent)
        );
    }

    #[test]
    fn test_add_rows() {
        let mut view = CostView::default();
        view.add_commission_breakdown();
        view.add_shipping_cost();

        assert_eq!(
            view.commission_breakdowns.last(),
            Some(&CommissionBreakdown::empty(CostCategory::Commission))
        );
        assert_eq!(view.shipping_costs.len(), 2);
        assert!(view.shipping_costs.last().is_some_and(|s| s.range.is_empty()));
    }

    #[test]
    fn test_view_json_is_camel_case() {
        let json = serde_json::to_value(CostView::default()).unwrap();
        assert_eq!(json["productCostValueType"], "A");
        assert_eq!(json["shippingCosts"][0]["range"], "1-500rs");
        assert_eq!(json["commissionBreakdowns"][1]["category"], "SHIPPING");
    }
}
