//! Seed command - inserts demo users for local development

use tracing::info;

use crate::config::AppConfig;
use crate::domain::user::Role;
use crate::infrastructure::logging;
use crate::infrastructure::storage::{connect_pool, inventory_migrations, PostgresMigrator};
use crate::infrastructure::user::{Argon2Hasher, PasswordHasher};

struct DemoUser {
    name: &'static str,
    email: &'static str,
    password: &'static str,
    role: Role,
}

const DEMO_USERS: &[DemoUser] = &[
    DemoUser {
        name: "Admin Manager",
        email: "admin@pharmacy.local",
        password: "admin123",
        role: Role::Manager,
    },
    DemoUser {
        name: "Sally Seller",
        email: "sally@pharmacy.local",
        password: "sales123",
        role: Role::Salesperson,
    },
];

/// Insert demo users, skipping emails that already exist
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    let pool = connect_pool(&config.database).await?;

    let migrator = PostgresMigrator::new(pool.clone());
    migrator.run_all(&inventory_migrations()).await?;

    let hasher = Argon2Hasher::new();

    for demo in DEMO_USERS {
        let password_hash = hasher.hash(demo.password)?;

        let result = sqlx::query(
            r#"
            INSERT INTO users (name, email, password_hash, role)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (email) DO NOTHING
            "#,
        )
        .bind(demo.name)
        .bind(demo.email)
        .bind(&password_hash)
        .bind(demo.role.as_str())
        .execute(&pool)
        .await?;

        if result.rows_affected() > 0 {
            info!(email = demo.email, role = demo.role.as_str(), "Seeded user");
        } else {
            info!(email = demo.email, "User already present, skipped");
        }
    }

    Ok(())
}
