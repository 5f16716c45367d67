use clap::Args;

use crate::config::AppConfig;
use crate::server;

#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    #[arg(long, help = "Port to listen on (overrides PORT / SERVER_PORT)")]
    pub port: Option<u16>,

    #[arg(long, help = "Address to bind (overrides SERVER_HOST)")]
    pub host: Option<String>,
}

pub async fn handle(args: ServeArgs, mut config: AppConfig) -> anyhow::Result<()> {
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(host) = args.host {
        config.server.host = host;
    }

    tracing::info!("Starting marketplace users API in {:?} mode", config.environment);

    let state = crate::cli::build_state(&config).await?;
    let router = server::app_with_cors(state, &config.security);
    server::serve(router, &config.bind_addr()).await
}
