//! Per-entity custom field values, fetched concurrently.
//!
//! List screens need the values of every visible entity. There is no bulk
//! endpoint, so one request is issued per entity with at most `concurrency`
//! in flight. A failed request only blanks that entity's values.

use std::collections::HashMap;
use std::future::Future;

use futures::stream::{self, StreamExt};
use prizent_core::custom_field::{CustomFieldDefinition, CustomFieldValue};
use prizent_core::{EntityId, Module};
use tracing::{debug, warn};

use crate::api::{ApiClient, ApiError};

/// Source of per-entity custom field values.
pub trait CustomFieldValueSource {
    /// Values stored for one entity.
    fn fetch_values(
        &self,
        module: Module,
        module_id: EntityId,
    ) -> impl Future<Output = Result<Vec<CustomFieldValue>, ApiError>> + Send;
}

impl CustomFieldValueSource for ApiClient {
    async fn fetch_values(
        &self,
        module: Module,
        module_id: EntityId,
    ) -> Result<Vec<CustomFieldValue>, ApiError> {
        self.custom_field_values(module, module_id).await
    }
}

/// Values for each of `ids`, keyed by entity.
///
/// Every id gets an entry. Entities whose request failed map to an empty list
/// and the failure is logged; the remaining entities are unaffected.
pub async fn fetch_values_for_entities<S, I>(
    source: &S,
    module: Module,
    ids: I,
    concurrency: usize,
) -> HashMap<EntityId, Vec<CustomFieldValue>>
where
    S: CustomFieldValueSource + Sync,
    I: IntoIterator<Item = EntityId>,
{
    let values: HashMap<EntityId, Vec<CustomFieldValue>> = stream::iter(ids)
        .map(|id| async move {
            match source.fetch_values(module, id).await {
                Ok(values) => (id, values),
                Err(e) => {
                    warn!(
                        module = module.code(),
                        module_id = %id,
                        error = %e,
                        "Failed to fetch custom field values"
                    );
                    (id, Vec::new())
                }
            }
        })
        .buffered(concurrency.max(1))
        .collect()
        .await;

    debug!(module = module.code(), entities = values.len(), "Fetched custom field values");
    values
}

/// Definitions for `module`, or none if they cannot be fetched.
///
/// List screens still render without custom field columns.
pub async fn definitions_or_empty(client: &ApiClient, module: Module) -> Vec<CustomFieldDefinition> {
    match client.list_custom_fields(module).await {
        Ok(definitions) => definitions,
        Err(e) => {
            warn!(module = module.code(), error = %e, "Failed to fetch custom field definitions");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use prizent_core::{ClientId, CustomFieldId, CustomFieldValueId};

    use super::*;

    /// Answers from a fixed table; ids listed in `failing` error out.
    struct FakeSource {
        failing: Vec<EntityId>,
        calls: Mutex<Vec<EntityId>>,
    }

    impl FakeSource {
        fn new(failing: &[i64]) -> Self {
            Self {
                failing: failing.iter().copied().map(EntityId::new).collect(),
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    impl CustomFieldValueSource for FakeSource {
        async fn fetch_values(
            &self,
            module: Module,
            module_id: EntityId,
        ) -> Result<Vec<CustomFieldValue>, ApiError> {
            if let Ok(mut calls) = self.calls.lock() {
                calls.push(module_id);
            }
            if self.failing.contains(&module_id) {
                return Err(ApiError::Api {
                    status: 500,
                    message: "boom".to_string(),
                });
            }
            Ok(vec![CustomFieldValue {
                id: CustomFieldValueId::new(module_id.as_i64() * 10),
                custom_field_id: CustomFieldId::new(1),
                client_id: ClientId::new(1),
                module,
                module_id,
                value: format!("value-{module_id}"),
            }])
        }
    }

    fn ids(raw: &[i64]) -> Vec<EntityId> {
        raw.iter().copied().map(EntityId::new).collect()
    }

    #[tokio::test]
    async fn test_one_failure_leaves_others_intact() {
        let source = FakeSource::new(&[2]);

        let values =
            fetch_values_for_entities(&source, Module::Category, ids(&[1, 2, 3]), 2).await;

        assert_eq!(values.len(), 3);
        assert!(values[&EntityId::new(2)].is_empty());
        assert_eq!(values[&EntityId::new(1)][0].value, "value-1");
        assert_eq!(values[&EntityId::new(3)][0].value, "value-3");
    }

    #[tokio::test]
    async fn test_every_entity_requested_once() {
        let source = FakeSource::new(&[]);

        let values = fetch_values_for_entities(&source, Module::Brand, ids(&[5, 6, 7, 8]), 0).await;

        assert_eq!(values.len(), 4);
        let mut calls = source.calls.lock().map(|c| c.clone()).unwrap_or_default();
        calls.sort();
        assert_eq!(calls, ids(&[5, 6, 7, 8]));
    }

    #[tokio::test]
    async fn test_no_entities() {
        let source = FakeSource::new(&[]);
        let values = fetch_values_for_entities(&source, Module::Product, Vec::new(), 8).await;
        assert!(values.is_empty());
    }
}
