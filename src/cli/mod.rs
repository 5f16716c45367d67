pub mod commands;

use clap::{Parser, Subcommand};
use std::sync::Arc;

use crate::auth::TokenService;
use crate::config::AppConfig;
use crate::database::{MemoryUserStore, PgUserStore, UserStore};
use crate::state::AppState;

#[derive(Parser)]
#[command(name = "marketplace-users-api")]
#[command(about = "Marketplace user accounts API - registration, sign-in, profiles and admin user management")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Run the HTTP server (default)")]
    Serve(commands::serve::ServeArgs),

    #[command(about = "Load demo users (or a YAML fixture) into the configured store")]
    Seed(commands::seed::SeedArgs),

    #[command(about = "Print the Argon2 hash of a password, for hand-written fixtures")]
    HashPassword {
        #[arg(help = "Plaintext password")]
        password: String,
    },
}

pub async fn run(cli: Cli, config: AppConfig) -> anyhow::Result<()> {
    match cli.command {
        None => commands::serve::handle(commands::serve::ServeArgs::default(), config).await,
        Some(Commands::Serve(args)) => commands::serve::handle(args, config).await,
        Some(Commands::Seed(args)) => commands::seed::handle(args, config).await,
        Some(Commands::HashPassword { password }) => commands::hash_password::handle(&password),
    }
}

/// Open the configured store: PostgreSQL when `DATABASE_URL` is set, memory otherwise
pub async fn open_store(config: &AppConfig) -> anyhow::Result<Arc<dyn UserStore>> {
    match config.database.url.as_deref() {
        Some(url) => {
            let store = PgUserStore::connect(url, &config.database).await?;
            Ok(Arc::new(store))
        }
        None => {
            tracing::warn!("DATABASE_URL not set; users are kept in memory and lost on exit");
            Ok(Arc::new(MemoryUserStore::new()))
        }
    }
}

/// Wire the store and token service into handler state
pub async fn build_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let tokens = TokenService::from_config(&config.security)
        .map_err(|e| anyhow::anyhow!("{} (set JWT_SECRET)", e))?;
    let store = open_store(config).await?;
    Ok(AppState::new(store, tokens))
}
