//! Brand commands.

use prizent_admin::services::BrandList;

use super::{CliError, Context, print_json};

/// Print the brand list rows.
pub async fn list(ctx: &Context) -> Result<(), CliError> {
    let listing = BrandList::new(ctx.client.clone(), ctx.concurrency)
        .load()
        .await?;
    print_json(&listing)
}
