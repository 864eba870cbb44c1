//! Custom field endpoints against the fake platform.

use prizent_admin::ApiError;
use prizent_admin::services::fetch_values_for_entities;
use prizent_core::custom_field::CustomFieldValueRequest;
use prizent_core::{CustomFieldId, EntityId, Module};
use prizent_integration_tests::{FakePlatform, field_value, text_field};

fn fields() -> FakePlatform {
    FakePlatform::new()
        .with_custom_fields(vec![
            text_field(1, "Origin", Module::Brand, true),
            text_field(2, "Color", Module::Category, true),
        ])
        .with_values(vec![field_value(1, 1, Module::Brand, 12, "India")])
}

#[tokio::test]
async fn test_list_filters_by_module() {
    let platform = fields();
    let client = platform.client().await.unwrap();

    let brand_fields = client.list_custom_fields(Module::Brand).await.unwrap();

    assert_eq!(brand_fields.len(), 1);
    assert_eq!(brand_fields[0].name, "Origin");
    assert_eq!(
        platform.requests_to("/api/admin/custom-fields"),
        vec!["GET /api/admin/custom-fields?module=b"]
    );
}

#[tokio::test]
async fn test_save_value_upserts() {
    let platform = fields();
    let client = platform.client().await.unwrap();

    let request = CustomFieldValueRequest {
        custom_field_id: CustomFieldId::new(1),
        module: Module::Brand,
        module_id: EntityId::new(12),
        value: "Sri Lanka".to_string(),
    };
    let saved = client.save_custom_field_value(&request).await.unwrap();
    assert_eq!(saved.value, "Sri Lanka");

    let values = client
        .custom_field_values(Module::Brand, EntityId::new(12))
        .await
        .unwrap();
    assert_eq!(values.len(), 1);
    assert_eq!(values[0].value, "Sri Lanka");
}

#[tokio::test]
async fn test_toggle_and_delete_definition() {
    let platform = fields();
    let client = platform.client().await.unwrap();

    let field = client
        .set_custom_field_enabled(CustomFieldId::new(2), false)
        .await
        .unwrap();
    assert!(!field.enabled);

    let missing = client
        .set_custom_field_enabled(CustomFieldId::new(42), true)
        .await
        .unwrap_err();
    assert!(matches!(missing, ApiError::NotFound(_)));

    client.delete_custom_field(CustomFieldId::new(2)).await.unwrap();
    assert!(platform.state().custom_fields.iter().all(|f| f.id != CustomFieldId::new(2)));
}

#[tokio::test]
async fn test_fan_out_survives_server_errors() {
    let platform = fields().failing_values_for(EntityId::new(13));
    let client = platform.client().await.unwrap();

    let values = fetch_values_for_entities(
        &client,
        Module::Brand,
        [12, 13, 14].map(EntityId::new),
        2,
    )
    .await;

    assert_eq!(values.len(), 3);
    assert_eq!(values[&EntityId::new(12)][0].value, "India");
    assert!(values[&EntityId::new(13)].is_empty());
    assert!(values[&EntityId::new(14)].is_empty());
}
