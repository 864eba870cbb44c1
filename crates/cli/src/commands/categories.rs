//! Category commands.

use prizent_admin::services::CategoryList;
use prizent_core::CategoryId;

use super::{CliError, Context, print_json};

fn service(ctx: &Context) -> CategoryList {
    CategoryList::new(ctx.client.clone(), ctx.concurrency)
}

/// Print the category list rows.
pub async fn list(ctx: &Context) -> Result<(), CliError> {
    let listing = service(ctx).load().await?;
    print_json(&listing)
}

/// Enable or disable a category.
pub async fn set_enabled(ctx: &Context, id: i64, enabled: bool) -> Result<(), CliError> {
    let category = service(ctx).toggle(CategoryId::new(id), enabled).await?;
    print_json(&category)
}

/// Delete a category.
pub async fn delete(ctx: &Context, id: i64) -> Result<(), CliError> {
    service(ctx).delete(CategoryId::new(id)).await?;
    tracing::info!(category_id = id, "Category deleted");
    Ok(())
}
