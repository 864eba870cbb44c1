//! Role commands.

use prizent_core::UserRole;

use super::{CliError, print_json};

/// Print where a user with `role` lands after login.
pub fn landing(role: &str) -> Result<(), CliError> {
    let role: UserRole = role.parse().map_err(CliError::InvalidArgument)?;
    print_json(&serde_json::json!({
        "role": role.to_string(),
        "landing": role.landing_section().path(),
        "canEditMarketplaces": role.can_edit_marketplaces(),
    }))
}
