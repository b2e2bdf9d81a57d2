use anyhow::Result;
use clap::Parser;
use kittyk::config::Config;
use kittyk::server;
use tracing_subscriber::EnvFilter;

/// Link-in-bio profile pages and editor.
#[derive(Parser)]
#[command(name = "kittyk")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Bind address, overriding `LISTEN`
    #[arg(long, value_name = "HOST:PORT")]
    listen: Option<String>,

    /// Validate configuration and exit
    #[arg(long)]
    check_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(listen) = cli.listen {
        config.listen_addr = listen;
    }
    config.validate()?;

    init_tracing(&config)?;
    config.print_summary();

    if cli.check_config {
        tracing::info!("Configuration is valid");
        return Ok(());
    }

    server::run(config).await
}

/// Installs the global subscriber: `RUST_LOG` filter, text or JSON output.
fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_level)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = if config.log_format == "json" {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))
}
