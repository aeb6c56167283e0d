//! Migrate command - applies or reverts schema migrations

use clap::Args;
use tracing::info;

use crate::config::AppConfig;
use crate::infrastructure::logging;
use crate::infrastructure::storage::{connect_pool, inventory_migrations, PostgresMigrator};

#[derive(Args)]
pub struct MigrateArgs {
    /// Revert the latest applied migration instead of applying
    #[arg(long)]
    pub revert: bool,
}

/// Run migrations against the configured database
pub async fn run(args: MigrateArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    let pool = connect_pool(&config.database).await?;
    let migrator = PostgresMigrator::new(pool);
    let migrations = inventory_migrations();

    if args.revert {
        let current = migrator.current_version().await?;
        match current {
            Some(version) => {
                if let Some(migration) = migrations.iter().find(|m| m.version == version) {
                    migrator.revert_migration(migration).await?;
                    info!(version, "Reverted migration");
                } else {
                    anyhow::bail!("No known migration with version {}", version);
                }
            }
            None => info!("No migrations to revert"),
        }
    } else {
        migrator.run_all(&migrations).await?;
        info!(
            version = ?migrator.current_version().await?,
            "Migrations up to date"
        );
    }

    Ok(())
}
