use anyhow::Context;
use clap::Args;
use std::path::PathBuf;

use crate::config::AppConfig;
use crate::database::{seed, PgUserStore, UserStore};

#[derive(Args, Debug)]
pub struct SeedArgs {
    #[arg(long, help = "YAML fixture to load instead of the built-in demo users")]
    pub fixture: Option<PathBuf>,
}

pub async fn handle(args: SeedArgs, config: AppConfig) -> anyhow::Result<()> {
    // A memory store would vanish with this process
    let url = config
        .database
        .url
        .as_deref()
        .context("DATABASE_URL is not set; seed needs a PostgreSQL store to write to")?;

    let users = match &args.fixture {
        Some(path) => {
            let yaml = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read fixture {}", path.display()))?;
            seed::load_fixture(&yaml)?
        }
        None => seed::demo_users()?,
    };

    let store = PgUserStore::connect(url, &config.database).await?;
    let created = store.insert_many(users).await;
    store.close().await;
    let created = created?;

    for user in &created {
        println!("{}\t{}\tadmin={}\tseller={}", user.id, user.email, user.is_admin, user.is_seller);
    }
    tracing::info!("Seeded {} users", created.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn refuses_without_database_url() {
        let mut config = AppConfig::from_env();
        config.database.url = None;

        let err = handle(SeedArgs { fixture: None }, config).await.unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));
    }
}
