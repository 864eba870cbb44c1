//! Conversion between persisted cost records and the editor view.
//!
//! Decoding never fails: unknown record combinations are skipped and empty
//! sections fall back to their default rows, so the editor always has at least
//! one row per section. Encoding never fails either: incomplete rows are
//! dropped and unparseable numbers become `0`, which lets the editor hold
//! scratch rows without corrupting the saved payload.

use std::num::FpCategory;

use super::view::{
    CommissionBreakdown, CostView, ProductCostSlab, ShippingCostSlab,
    default_commission_breakdowns, default_product_cost_slabs, default_shipping_costs,
};
use super::{CostCategory, CostKind, CostRecord, CostValueType, ProductRange};
use crate::partition::partition;

/// Decode persisted records into the editor view.
///
/// Records are split by [`CostRecord::kind`]:
///
/// - product slabs take `from`/`to` from the range and keep their value type;
///   the first slab's type becomes the shared `product_cost_value_type`;
/// - breakdowns and shipping slabs render their value as text, with `0`
///   rendered as an empty field;
/// - a section with no records keeps its default rows.
#[must_use]
pub fn decode(records: &[CostRecord]) -> CostView {
    let mut buckets = partition(records.iter(), |record| record.kind());

    let product_cost_slabs = buckets.take_or(
        &CostKind::ProductSlab,
        |record| {
            let (from, to) = match &record.cost_product_range {
                ProductRange::Range { from, to } => (from.clone(), to.clone()),
                ProductRange::All => (String::new(), String::new()),
            };
            ProductCostSlab {
                from,
                to,
                value_type: record.cost_value_type,
            }
        },
        default_product_cost_slabs,
    );
    let product_cost_value_type = product_cost_slabs
        .first()
        .map_or(CostValueType::Absolute, |slab| slab.value_type);

    let commission_breakdowns = buckets.take_or(
        &CostKind::Breakdown,
        |record| CommissionBreakdown {
            category: record.cost_category,
            value: format_value(record.cost_value),
            value_type: record.cost_value_type,
        },
        default_commission_breakdowns,
    );

    let shipping_costs = buckets.take_or(
        &CostKind::ShippingSlab,
        |record| ShippingCostSlab {
            range: record.cost_product_range.to_string(),
            cost: format_value(record.cost_value),
        },
        default_shipping_costs,
    );

    CostView {
        product_cost_slabs,
        product_cost_value_type,
        commission_breakdowns,
        shipping_costs,
    }
}

/// Encode the editor view into records for saving.
///
/// Output order is product slabs, then breakdowns, then shipping slabs.
/// Rows are emitted only when complete:
///
/// - a product slab needs `from` and `to`; its stored value is `to`;
/// - a breakdown needs `value`;
/// - a shipping slab needs `range` and `cost`; it is always an absolute amount.
#[must_use]
pub fn encode(view: &CostView) -> Vec<CostRecord> {
    let product_slabs = view
        .product_cost_slabs
        .iter()
        .filter(|slab| !slab.from.is_empty() && !slab.to.is_empty())
        .map(|slab| {
            CostRecord::new(
                CostCategory::Commission,
                slab.value_type,
                parse_number(&slab.to),
                ProductRange::between(slab.from.as_str(), slab.to.as_str()),
            )
        });

    let breakdowns = view
        .commission_breakdowns
        .iter()
        .filter(|breakdown| !breakdown.value.is_empty())
        .map(|breakdown| {
            CostRecord::new(
                breakdown.category,
                breakdown.value_type,
                parse_number(&breakdown.value),
                ProductRange::All,
            )
        });

    let shipping = view
        .shipping_costs
        .iter()
        .filter(|slab| !slab.cost.is_empty() && !slab.range.is_empty())
        .map(|slab| {
            CostRecord::new(
                CostCategory::Shipping,
                CostValueType::Absolute,
                parse_number(&slab.cost),
                ProductRange::parse(&slab.range),
            )
        });

    product_slabs.chain(breakdowns).chain(shipping).collect()
}

/// Parse the leading number of a form field, defaulting to `0`.
///
/// Surrounding whitespace is ignored and trailing text after the number is
/// dropped, so `"12.5%"` parses as `12.5`. Input without a leading number,
/// and values that overflow, give `0`.
#[must_use]
pub fn parse_number(input: &str) -> f64 {
    let s = input.trim();
    let bytes = s.as_bytes();
    let mut end = 0;
    let mut mantissa_digits = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
        mantissa_digits += 1;
    }
    if bytes.get(end) == Some(&b'.') {
        end += 1;
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
            mantissa_digits += 1;
        }
    }
    if mantissa_digits == 0 {
        return 0.0;
    }

    // Exponent only counts when it has digits.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    s.get(..end)
        .and_then(|prefix| prefix.parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Render a stored value for a text field. Zero is shown as an empty field.
fn format_value(value: f64) -> String {
    match value.classify() {
        FpCategory::Zero | FpCategory::Nan => String::new(),
        _ => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        category: CostCategory,
        value_type: CostValueType,
        value: f64,
        range: &str,
    ) -> CostRecord {
        CostRecord::new(category, value_type, value, ProductRange::parse(range))
    }

    fn sorted_json(records: &[CostRecord]) -> Vec<String> {
        let mut out: Vec<String> = records
            .iter()
            .map(|r| serde_json::to_string(r).unwrap())
            .collect();
        out.sort();
        out
    }

    #[test]
    fn test_decode_empty_yields_default_rows() {
        let view = decode(&[]);

        assert_eq!(
            view.product_cost_slabs,
            vec![ProductCostSlab::empty(CostValueType::Absolute)]
        );
        assert_eq!(view.product_cost_value_type, CostValueType::Absolute);
        assert_eq!(
            view.commission_breakdowns,
            vec![
                CommissionBreakdown::empty(CostCategory::Commission),
                CommissionBreakdown::empty(CostCategory::Shipping),
            ]
        );
        assert_eq!(
            view.shipping_costs,
            vec![ShippingCostSlab {
                range: "1-500rs".to_string(),
                cost: String::new(),
            }]
        );
        assert_eq!(view, CostView::default());
    }

    #[test]
    fn test_decode_single_product_slab() {
        let view = decode(&[record(
            CostCategory::Commission,
            CostValueType::Absolute,
            500.0,
            "0-500",
        )]);

        assert_eq!(
            view.product_cost_slabs,
            vec![ProductCostSlab {
                from: "0".to_string(),
                to: "500".to_string(),
                value_type: CostValueType::Absolute,
            }]
        );
        assert_eq!(view.product_cost_value_type, CostValueType::Absolute);
        assert_eq!(view.commission_breakdowns, CostView::default().commission_breakdowns);
        assert_eq!(view.shipping_costs, CostView::default().shipping_costs);
    }

    #[test]
    fn test_decode_first_slab_sets_shared_value_type() {
        let view = decode(&[
            record(CostCategory::Commission, CostValueType::Percent, 5.0, "0-500"),
            record(CostCategory::Commission, CostValueType::Absolute, 9.0, "500-1000"),
        ]);
        assert_eq!(view.product_cost_value_type, CostValueType::Percent);
        // Individual slabs keep their own type.
        assert_eq!(
            view.product_cost_slabs
                .iter()
                .map(|s| s.value_type)
                .collect::<Vec<_>>(),
            vec![CostValueType::Percent, CostValueType::Absolute]
        );
    }

    #[test]
    fn test_decode_partitions_mixed_records() {
        let view = decode(&[
            record(CostCategory::Shipping, CostValueType::Absolute, 40.0, "1-500rs"),
            record(CostCategory::Commission, CostValueType::Percent, 12.5, "All"),
            record(CostCategory::Marketing, CostValueType::Percent, 3.0, "All"),
            record(CostCategory::Marketing, CostValueType::Percent, 8.0, "0-100"),
            record(CostCategory::Shipping, CostValueType::Absolute, 60.0, "500-1000rs"),
        ]);

        assert_eq!(view.product_cost_slabs, CostView::default().product_cost_slabs);
        assert_eq!(
            view.commission_breakdowns,
            vec![
                CommissionBreakdown {
                    category: CostCategory::Commission,
                    value: "12.5".to_string(),
                    value_type: CostValueType::Percent,
                },
                CommissionBreakdown {
                    category: CostCategory::Marketing,
                    value: "3".to_string(),
                    value_type: CostValueType::Percent,
                },
            ]
        );
        assert_eq!(
            view.shipping_costs,
            vec![
                ShippingCostSlab {
                    range: "1-500rs".to_string(),
                    cost: "40".to_string(),
                },
                ShippingCostSlab {
                    range: "500-1000rs".to_string(),
                    cost: "60".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_decode_zero_value_renders_empty() {
        let view = decode(&[record(
            CostCategory::Commission,
            CostValueType::Percent,
            0.0,
            "All",
        )]);
        assert_eq!(view.commission_breakdowns.len(), 1);
        assert!(view.commission_breakdowns.iter().all(|b| b.value.is_empty()));
    }

    #[test]
    fn test_encode_drops_slab_missing_upper_bound() {
        let mut view = CostView::default();
        view.product_cost_slabs = vec![ProductCostSlab {
            from: "100".to_string(),
            to: String::new(),
            value_type: CostValueType::Percent,
        }];
        assert!(encode(&view).is_empty());
    }

    #[test]
    fn test_encode_default_view_is_empty() {
        assert!(encode(&CostView::default()).is_empty());
    }

    #[test]
    fn test_encode_emits_rows_in_section_order() {
        let view = CostView {
            product_cost_slabs: vec![ProductCostSlab {
                from: "0".to_string(),
                to: "500".to_string(),
                value_type: CostValueType::Percent,
            }],
            product_cost_value_type: CostValueType::Percent,
            commission_breakdowns: vec![CommissionBreakdown {
                category: CostCategory::Marketing,
                value: "abc".to_string(),
                value_type: CostValueType::Absolute,
            }],
            shipping_costs: vec![
                ShippingCostSlab {
                    range: "1-500rs".to_string(),
                    cost: "45".to_string(),
                },
                ShippingCostSlab {
                    range: String::new(),
                    cost: "99".to_string(),
                },
            ],
        };

        assert_eq!(
            encode(&view),
            vec![
                record(CostCategory::Commission, CostValueType::Percent, 500.0, "0-500"),
                // Unparseable value coerces to zero.
                record(CostCategory::Marketing, CostValueType::Absolute, 0.0, "All"),
                record(CostCategory::Shipping, CostValueType::Absolute, 45.0, "1-500rs"),
            ]
        );
    }

    #[test]
    fn test_round_trip_well_formed_records() {
        let records = vec![
            record(CostCategory::Commission, CostValueType::Percent, 500.0, "0-500"),
            record(CostCategory::Commission, CostValueType::Percent, 1000.0, "500-1000"),
            record(CostCategory::Commission, CostValueType::Percent, 15.0, "All"),
            record(CostCategory::Shipping, CostValueType::Percent, 2.0, "All"),
            record(CostCategory::Marketing, CostValueType::Absolute, 20.0, "All"),
            record(CostCategory::Shipping, CostValueType::Absolute, 40.0, "1-500rs"),
        ];

        let encoded = encode(&decode(&records));
        assert_eq!(sorted_json(&encoded), sorted_json(&records));
    }

    #[test]
    fn test_encode_shipping_range_all_becomes_breakdown_on_reload() {
        let mut view = CostView::default();
        view.shipping_costs = vec![ShippingCostSlab {
            range: "All".to_string(),
            cost: "30".to_string(),
        }];
        let reloaded = decode(&encode(&view));
        assert!(
            reloaded
                .commission_breakdowns
                .iter()
                .any(|b| b.category == CostCategory::Shipping && b.value == "30")
        );
    }

    #[test]
    fn test_parse_number() {
        assert!((parse_number("500") - 500.0).abs() < f64::EPSILON);
        assert!((parse_number(" 12.5% ") - 12.5).abs() < f64::EPSILON);
        assert!((parse_number("-3") + 3.0).abs() < f64::EPSILON);
        assert!((parse_number(".5") - 0.5).abs() < f64::EPSILON);
        assert!((parse_number("1e3") - 1000.0).abs() < f64::EPSILON);
        assert!((parse_number("7e") - 7.0).abs() < f64::EPSILON);
        assert!((parse_number("500rs") - 500.0).abs() < f64::EPSILON);
        assert!(parse_number("").abs() < f64::EPSILON);
        assert!(parse_number("abc").abs() < f64::EPSILON);
        assert!(parse_number("-").abs() < f64::EPSILON);
        assert!(parse_number("1e999").abs() < f64::EPSILON);
    }
}
