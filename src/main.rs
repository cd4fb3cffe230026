use clap::Parser;
use csp_advisor::cli::{Cli, Commands};
use csp_advisor::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        Config::default()
    });

    // Initialize telemetry
    csp_advisor::telemetry::init_telemetry(&config.telemetry, cli.log_format)?;

    match cli.command {
        Commands::Score(args) => args.execute(&config).await?,
        Commands::Select(args) => args.execute(&config).await?,
        Commands::Evaluate(args) => args.execute(&config).await?,
        Commands::Config => {
            print!("{}", toml::to_string_pretty(&config)?);
        }
    }

    Ok(())
}
