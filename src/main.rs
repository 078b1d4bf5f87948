use clap::Parser;
use contrib_points::domain::ports::ConfigProvider;
use contrib_points::http::{create_router, AppState};
use contrib_points::utils::{logger, validation::Validate};
use contrib_points::{CliConfig, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 指定 --config 時以 TOML 檔為準
    match cli.config.clone() {
        Some(path) => {
            let config = TomlConfig::from_file(&path)?;
            logger::init_logger(
                cli.verbose || config.verbose(),
                cli.json_logs || config.json_logs(),
            );
            tracing::info!("Loaded configuration from {}", path.display());
            serve(&config).await
        }
        None => {
            logger::init_logger(cli.verbose, cli.json_logs);
            if cli.verbose {
                tracing::debug!("CLI config: {:?}", cli);
            }
            serve(&cli).await
        }
    }
}

async fn serve<C: ConfigProvider + Validate>(config: &C) -> anyhow::Result<()> {
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let state = AppState::from_config(config)?;
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind((config.host(), config.port())).await?;
    tracing::info!("🚀 Server running at http://{}/", listener.local_addr()?);
    tracing::info!("📡 Fetching contribution pages from {}", config.source_base_url());

    axum::serve(listener, app).await?;

    Ok(())
}
