//! # Stockroom Library
//!
//! Core library for the Stockroom inventory tracker.
//! This is the main entry point that configures and runs the app.
//!
//! ## Module Organization
//! ```text
//! stockroom_lib/
//! ├── lib.rs            ◄─── You are here (startup & shutdown)
//! ├── args.rs           ◄─── --config / --write-config / --help
//! ├── state/
//! │   ├── mod.rs        ◄─── State type exports
//! │   ├── inventory.rs  ◄─── InventoryManager (collection + edit marker)
//! │   └── config.rs     ◄─── AppConfig (toml + env)
//! ├── commands/
//! │   ├── mod.rs        ◄─── Command exports
//! │   └── product.rs    ◄─── Parsing, execution, rendering, stdin session
//! └── error.rs          ◄─── API error type for commands
//! ```

pub mod args;
pub mod commands;
pub mod error;
pub mod state;

use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

use args::{CliArgs, USAGE};
use error::ApiError;
use state::{AppConfig, InventoryManager};
use stockroom_db::{Database, DbConfig, ProductStore};

/// Runs the app until `quit` or end of input.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Load AppConfig ───────────────────────────────────────────────────► │
/// │     • defaults → stockroom.toml (or --config) → STOCKROOM_* env         │
/// │                                                                         │
/// │  2. Initialize Logging ───────────────────────────────────────────────► │
/// │     • RUST_LOG, else logging.filter; written to stderr                  │
/// │     • the resolved config is logged once the subscriber is up           │
/// │     • --write-config saves it and stops here                            │
/// │                                                                         │
/// │  3. Connect to Database ──────────────────────────────────────────────► │
/// │     • SQLite with WAL mode, pending migrations applied, health check    │
/// │                                                                         │
/// │  4. Load Inventory ───────────────────────────────────────────────────► │
/// │     • Spawn the snapshot writer, read the slot, sort                    │
/// │                                                                         │
/// │  5. Command Session on stdin/stdout                                     │
/// │                                                                         │
/// │  6. Shutdown: drain the writer, close the pool                          │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run(args: CliArgs) -> Result<(), ApiError> {
    if args.help {
        println!("{}", USAGE);
        return Ok(());
    }

    let config_path = AppConfig::resolve_path(args.config);
    let config = AppConfig::load(config_path.clone())?;

    init_tracing(&config.logging.filter);

    info!(
        config_file = ?config_path,
        database_path = ?config.storage.database_path,
        slot = %config.slot_key(),
        filter = %config.logging.filter,
        "Configuration resolved"
    );

    if args.write_config {
        let written = config.save(config_path)?;
        println!("Wrote {}", written.display());
        return Ok(());
    }

    info!("Starting Stockroom");

    let db_path = config.database_path()?;
    info!(?db_path, "Database path determined");

    let db = Database::new(DbConfig::new(db_path)).await?;
    if !db.health_check().await {
        return Err(ApiError::internal("Database is not responding"));
    }
    info!("Database connected and migrations applied");

    let store = ProductStore::with_slot_key(db.clone(), config.slot_key());
    let mut manager = InventoryManager::load(&store, store.spawn_writer()).await;

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    let session = commands::run_session(&mut manager, stdin, &mut stdout).await;

    // Drain queued snapshots even if the session ended on an I/O error
    manager.store().shutdown().await?;
    db.close().await;

    session?;
    info!(
        slot = %store.slot_key(),
        snapshots = manager.store().enqueued(),
        "Stockroom stopped"
    );
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=stockroom=trace` - Show trace for stockroom crates only
/// - Default: `logging.filter` from config
fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // Ignore "already set" when embedded in a host that installed its own
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_write_config_to_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conf").join("stockroom.toml");

        let args = CliArgs {
            config: Some(path.clone()),
            write_config: true,
            help: false,
        };
        run(args).await.unwrap();

        assert!(path.is_file());
        let written = AppConfig::load(Some(path)).unwrap();
        assert!(!written.slot_key().is_empty());
    }

    #[tokio::test]
    async fn test_help_exits_early() {
        let args = CliArgs {
            help: true,
            ..CliArgs::default()
        };
        assert!(run(args).await.is_ok());
    }
}
