//! Marketplace entities as exchanged with the platform.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::cost::CostRecord;
use crate::types::MarketplaceId;

/// A sales marketplace and its cost records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Marketplace {
    pub id: MarketplaceId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub costs: Vec<CostRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_date_time: Option<NaiveDateTime>,
}

/// Body of a marketplace create or update request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceRequest {
    pub name: String,
    pub description: String,
    pub enabled: bool,
    pub costs: Vec<CostRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::{CostCategory, CostValueType, ProductRange};

    #[test]
    fn test_marketplace_response_shape() {
        let json = r#"{
            "id": 4,
            "name": "Myntra",
            "description": null,
            "enabled": true,
            "createDateTime": "2025-02-01T12:00:00",
            "costs": [
                {"id": 1, "costCategory": "COMMISSION", "costValueType": "P",
                 "costValue": 18.00, "costProductRange": "All"}
            ]
        }"#;
        let marketplace: Marketplace = serde_json::from_str(json).unwrap();
        assert_eq!(marketplace.id, MarketplaceId::new(4));
        assert!(marketplace.description.is_none());
        assert_eq!(marketplace.costs.len(), 1);
        assert!(marketplace.costs[0].cost_product_range.is_all());
    }

    #[test]
    fn test_request_field_names() {
        let request = MarketplaceRequest {
            name: "Ajio".to_string(),
            description: String::new(),
            enabled: false,
            costs: vec![CostRecord::new(
                CostCategory::Shipping,
                CostValueType::Absolute,
                40.0,
                ProductRange::between("1", "500rs"),
            )],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Ajio",
                "description": "",
                "enabled": false,
                "costs": [{
                    "costCategory": "SHIPPING",
                    "costValueType": "A",
                    "costValue": 40.0,
                    "costProductRange": "1-500rs"
                }]
            })
        );
    }
}
