//! Category hierarchy and its list rows.
//!
//! Categories form two levels below the roots. The list screen shows one row
//! per level-1 category (a category whose parent is a root); roots and
//! grandchildren only appear by name inside those rows.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::custom_field::NO_FIELDS;
use crate::types::{CategoryId, ClientId, EntityStatus};

/// Parent label when a level-1 category's parent cannot be resolved.
pub const ROOT_LABEL: &str = "Root";

/// Sub-category label when a category has no children.
pub const NO_CHILDREN: &str = "None";

/// A category as returned by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<ClientId>,
    pub name: String,
    #[serde(default)]
    pub parent_category_id: Option<CategoryId>,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_date_time: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_date_time: Option<NaiveDateTime>,
}

/// One row of the category list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDisplay {
    pub id: CategoryId,
    pub parent_category: String,
    pub category: String,
    pub sub_category: String,
    pub attributes: String,
    pub status: EntityStatus,
}

/// Rows for every level-1 category, in input order.
#[must_use]
pub fn flatten(categories: &[Category]) -> Vec<CategoryDisplay> {
    flatten_with_attributes(categories, |_| NO_FIELDS.to_owned())
}

/// Like [`flatten`], with the `attributes` column supplied by the caller.
pub fn flatten_with_attributes<F>(categories: &[Category], mut attributes: F) -> Vec<CategoryDisplay>
where
    F: FnMut(&Category) -> String,
{
    let roots: HashSet<CategoryId> = categories
        .iter()
        .filter(|c| c.parent_category_id.is_none())
        .map(|c| c.id)
        .collect();

    let by_id: HashMap<CategoryId, &Category> = categories.iter().map(|c| (c.id, c)).collect();

    let mut children: HashMap<CategoryId, Vec<&str>> = HashMap::new();
    for category in categories {
        if let Some(parent) = category.parent_category_id {
            children.entry(parent).or_default().push(&category.name);
        }
    }

    categories
        .iter()
        .filter(|c| c.parent_category_id.is_some_and(|p| roots.contains(&p)))
        .map(|category| {
            let parent_category = category
                .parent_category_id
                .and_then(|p| by_id.get(&p))
                .map_or_else(|| ROOT_LABEL.to_owned(), |p| p.name.clone());
            let sub_category = children
                .get(&category.id)
                .map_or_else(|| NO_CHILDREN.to_owned(), |names| names.join(", "));

            CategoryDisplay {
                id: category.id,
                parent_category,
                category: category.name.clone(),
                sub_category,
                attributes: attributes(category),
                status: EntityStatus::from_enabled(category.enabled),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: i64, name: &str, parent: Option<i64>, enabled: bool) -> Category {
        Category {
            id: CategoryId::new(id),
            client_id: None,
            name: name.to_string(),
            parent_category_id: parent.map(CategoryId::new),
            enabled,
            create_date_time: None,
            update_date_time: None,
        }
    }

    #[test]
    fn test_flatten_three_levels() {
        let categories = vec![
            category(1, "Apparel", None, true),
            category(2, "Shirts", Some(1), true),
            category(3, "Polo", Some(2), true),
        ];

        let rows = flatten(&categories);

        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.id, CategoryId::new(2));
        assert_eq!(row.parent_category, "Apparel");
        assert_eq!(row.category, "Shirts");
        assert_eq!(row.sub_category, "Polo");
        assert_eq!(row.attributes, "None");
        assert_eq!(row.status, EntityStatus::Active);
    }

    #[test]
    fn test_flatten_only_depth_one_rows() {
        let categories = vec![
            category(1, "Apparel", None, true),
            category(10, "Footwear", None, true),
            category(2, "Shirts", Some(1), false),
            category(3, "Polo", Some(2), true),
            category(4, "Oxford", Some(2), true),
            category(11, "Sneakers", Some(10), true),
            category(12, "Orphan", Some(999), true),
        ];

        let rows = flatten(&categories);

        let ids: Vec<i64> = rows.iter().map(|r| r.id.as_i64()).collect();
        assert_eq!(ids, vec![2, 11]);
        assert_eq!(rows[0].sub_category, "Polo, Oxford");
        assert_eq!(rows[0].status.label(), "Inactive");
        assert_eq!(rows[1].sub_category, "None");
    }

    #[test]
    fn test_flatten_is_idempotent() {
        let categories = vec![
            category(1, "Apparel", None, true),
            category(2, "Shirts", Some(1), true),
        ];
        assert_eq!(flatten(&categories), flatten(&categories));
    }

    #[test]
    fn test_flatten_with_attributes() {
        let categories = vec![
            category(1, "Apparel", None, true),
            category(2, "Shirts", Some(1), true),
        ];
        let rows = flatten_with_attributes(&categories, |c| format!("attrs of {}", c.name));
        assert_eq!(rows[0].attributes, "attrs of Shirts");
    }

    #[test]
    fn test_category_wire_format() {
        let json = r#"[
            {"id": 1, "clientId": 1, "name": "Apparel", "parentCategoryId": null, "enabled": true,
             "createDateTime": "2025-01-10T09:30:00"},
            {"id": 2, "name": "Shirts", "parentCategoryId": 1, "enabled": false}
        ]"#;
        let categories: Vec<Category> = serde_json::from_str(json).unwrap();
        assert!(categories[0].parent_category_id.is_none());
        assert!(categories[0].create_date_time.is_some());
        assert_eq!(categories[1].parent_category_id, Some(CategoryId::new(1)));

        let row = serde_json::to_value(&flatten(&categories)[0]).unwrap();
        assert_eq!(row["parentCategory"], "Apparel");
        assert_eq!(row["status"], "Active");
    }
}
