//! Prizent CLI - marketplace costs, categories and custom fields from the
//! terminal.
//!
//! # Usage
//!
//! ```bash
//! # Show a marketplace's costs in editor form
//! pz-cli marketplace show 4
//!
//! # Save an edited form back
//! pz-cli marketplace save 4 --file myntra.json
//!
//! # Category list rows with custom field summaries
//! pz-cli categories list
//!
//! # Custom field definitions of the brand module
//! pz-cli custom-fields list --module b
//! ```
//!
//! # Environment Variables
//!
//! See `prizent_admin::config`. `RUST_LOG` controls log output (default `info`);
//! set `PRIZENT_LOG_JSON` for JSON log lines.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod commands;

use commands::Context;

#[derive(Parser)]
#[command(name = "pz-cli")]
#[command(author, version, about = "Prizent admin console CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Marketplaces and their cost configuration
    Marketplace {
        #[command(subcommand)]
        action: MarketplaceAction,
    },
    /// Category list and status
    Categories {
        #[command(subcommand)]
        action: CategoryAction,
    },
    /// Custom field definitions and values
    CustomFields {
        #[command(subcommand)]
        action: CustomFieldAction,
    },
    /// Brand list
    Brands {
        #[command(subcommand)]
        action: BrandAction,
    },
    /// Show where a role lands after login
    Landing {
        /// Role (`SUPER_ADMIN`, `ADMIN`, `USER`)
        role: String,
    },
}

#[derive(Subcommand)]
enum MarketplaceAction {
    /// List marketplaces
    List {
        #[arg(long, default_value_t = 0)]
        page: u32,
        #[arg(long, default_value_t = 10)]
        size: u32,
    },
    /// Print a marketplace in editor form
    Show { id: i64 },
    /// Save an editor form from a JSON file
    Save {
        id: i64,
        #[arg(short, long)]
        file: String,
    },
    /// Create a marketplace from an editor form JSON file
    Create {
        #[arg(short, long)]
        file: String,
    },
    /// Enable a marketplace
    Enable { id: i64 },
    /// Disable a marketplace
    Disable { id: i64 },
}

#[derive(Subcommand)]
enum CategoryAction {
    /// Print category rows
    List,
    /// Enable a category
    Enable { id: i64 },
    /// Disable a category
    Disable { id: i64 },
    /// Delete a category
    Delete { id: i64 },
}

#[derive(Subcommand)]
enum CustomFieldAction {
    /// List definitions of a module (`p`, `m`, `b`, `c`)
    List {
        #[arg(short, long)]
        module: String,
    },
    /// Print the values stored for one entity
    Values {
        #[arg(short, long)]
        module: String,
        /// Entity id
        id: i64,
    },
    /// Store one entity's value for a field
    Set {
        /// Custom field id
        #[arg(long)]
        field: i64,
        #[arg(short, long)]
        module: String,
        /// Entity id
        #[arg(long)]
        id: i64,
        value: String,
    },
    /// Enable a definition
    Enable { id: i64 },
    /// Disable a definition
    Disable { id: i64 },
    /// Delete a definition
    Delete { id: i64 },
}

#[derive(Subcommand)]
enum BrandAction {
    /// Print brand rows
    List,
}

#[tokio::main]
async fn main() {
    // Logs go to stderr so JSON output on stdout stays pipeable
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    let json_logs = std::env::var("PRIZENT_LOG_JSON").is_ok();
    let json_layer = json_logs.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer =
        (!json_logs).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    if let Commands::Landing { role } = &cli.command {
        commands::role::landing(role)?;
        return Ok(());
    }

    let ctx = Context::from_env()?;

    match cli.command {
        Commands::Marketplace { action } => match action {
            MarketplaceAction::List { page, size } => {
                commands::marketplace::list(&ctx, page, size).await?;
            }
            MarketplaceAction::Show { id } => commands::marketplace::show(&ctx, id).await?,
            MarketplaceAction::Save { id, file } => {
                commands::marketplace::save(&ctx, id, &file).await?;
            }
            MarketplaceAction::Create { file } => {
                commands::marketplace::create(&ctx, &file).await?;
            }
            MarketplaceAction::Enable { id } => {
                commands::marketplace::set_enabled(&ctx, id, true).await?;
            }
            MarketplaceAction::Disable { id } => {
                commands::marketplace::set_enabled(&ctx, id, false).await?;
            }
        },
        Commands::Categories { action } => match action {
            CategoryAction::List => commands::categories::list(&ctx).await?,
            CategoryAction::Enable { id } => {
                commands::categories::set_enabled(&ctx, id, true).await?;
            }
            CategoryAction::Disable { id } => {
                commands::categories::set_enabled(&ctx, id, false).await?;
            }
            CategoryAction::Delete { id } => commands::categories::delete(&ctx, id).await?,
        },
        Commands::CustomFields { action } => match action {
            CustomFieldAction::List { module } => {
                commands::custom_fields::list(&ctx, &module).await?;
            }
            CustomFieldAction::Values { module, id } => {
                commands::custom_fields::values(&ctx, &module, id).await?;
            }
            CustomFieldAction::Set {
                field,
                module,
                id,
                value,
            } => commands::custom_fields::set(&ctx, field, &module, id, value).await?,
            CustomFieldAction::Enable { id } => {
                commands::custom_fields::set_enabled(&ctx, id, true).await?;
            }
            CustomFieldAction::Disable { id } => {
                commands::custom_fields::set_enabled(&ctx, id, false).await?;
            }
            CustomFieldAction::Delete { id } => {
                commands::custom_fields::delete(&ctx, id).await?;
            }
        },
        Commands::Brands { action } => match action {
            BrandAction::List => commands::brands::list(&ctx).await?,
        },
        Commands::Landing { .. } => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_save_command() {
        let cli = Cli::try_parse_from(["pz-cli", "marketplace", "save", "4", "--file", "m.json"]);
        assert!(matches!(
            cli.map(|c| c.command),
            Ok(Commands::Marketplace {
                action: MarketplaceAction::Save { id: 4, .. }
            })
        ));
    }
}
