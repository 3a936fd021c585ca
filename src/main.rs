use clap::Parser;
use ratio_signal::cli::{self, Cli, Commands};
use ratio_signal::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // BOT / CHAT / RUN_URL may come from a local .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Load configuration
    let config = if std::path::Path::new(&cli.config).exists() {
        Config::load(&cli.config)?
    } else {
        eprintln!("Warning: {} not found, using default configuration", cli.config);
        Config::default()
    };

    // Initialize telemetry
    ratio_signal::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Run(args) => {
            tracing::info!("Starting scheduled run");
            args.execute(&config).await?;
        }
        Commands::Check(args) => {
            args.execute(&config).await?;
        }
        Commands::Status => {
            cli::show_status(&config).await?;
        }
        Commands::Config => {
            cli::show_config(&config)?;
        }
    }

    Ok(())
}
