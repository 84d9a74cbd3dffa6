#![cfg(test)]
use tokio::sync::OnceCell;
use sea_orm::DatabaseConnection;
use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<Result<(), String>> = OnceCell::const_new();

/// Connection for DB-backed tests; `None` means skip (no database or `SKIP_DB_TESTS`).
pub async fn get_db() -> Option<DatabaseConnection> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }

    let mut cfg = configs::load_default().map(|c| c.database).unwrap_or_default();
    cfg.normalize_from_env();
    let cfg = DatabaseConfig {
        max_connections: cfg.max_connections.max(20),
        min_connections: 1,
        connect_timeout_secs: 5,
        acquire_timeout_secs: 10,
        ..cfg
    };
    let db = match connect_with_config(&cfg).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("skip: cannot connect to db: {}", e);
            return None;
        }
    };

    let migrated = MIGRATED
        .get_or_init(|| async { migration::Migrator::up(&db, None).await.map_err(|e| e.to_string()) })
        .await;
    if let Err(e) = migrated {
        eprintln!("skip: migrate up failed: {}", e);
        return None;
    }
    Some(db)
}
