//! Custom field commands.

use prizent_admin::AppError;
use prizent_core::custom_field::CustomFieldValueRequest;
use prizent_core::{CustomFieldId, EntityId, Module};

use super::{CliError, Context, print_json};

fn parse_module(raw: &str) -> Result<Module, CliError> {
    raw.parse()
        .map_err(|e: prizent_core::UnknownModule| CliError::InvalidArgument(e.to_string()))
}

/// Print the definitions of a module.
pub async fn list(ctx: &Context, module: &str) -> Result<(), CliError> {
    let module = parse_module(module)?;
    let fields = ctx
        .client
        .list_custom_fields(module)
        .await
        .map_err(AppError::from)?;
    print_json(&fields)
}

/// Print the values stored for one entity.
pub async fn values(ctx: &Context, module: &str, id: i64) -> Result<(), CliError> {
    let module = parse_module(module)?;
    let values = ctx
        .client
        .custom_field_values(module, EntityId::new(id))
        .await
        .map_err(AppError::from)?;
    print_json(&values)
}

/// Store one entity's value for a field.
pub async fn set(
    ctx: &Context,
    field: i64,
    module: &str,
    id: i64,
    value: String,
) -> Result<(), CliError> {
    let request = CustomFieldValueRequest {
        custom_field_id: CustomFieldId::new(field),
        module: parse_module(module)?,
        module_id: EntityId::new(id),
        value,
    };
    let saved = ctx
        .client
        .save_custom_field_value(&request)
        .await
        .map_err(AppError::from)?;
    print_json(&saved)
}

/// Enable or disable a definition.
pub async fn set_enabled(ctx: &Context, id: i64, enabled: bool) -> Result<(), CliError> {
    let field = ctx
        .client
        .set_custom_field_enabled(CustomFieldId::new(id), enabled)
        .await
        .map_err(AppError::from)?;
    print_json(&field)
}

/// Delete a definition.
pub async fn delete(ctx: &Context, id: i64) -> Result<(), CliError> {
    ctx.client
        .delete_custom_field(CustomFieldId::new(id))
        .await
        .map_err(AppError::from)?;
    tracing::info!(custom_field_id = id, "Custom field deleted");
    Ok(())
}
