use clap::Parser;
use hookdash::cli::{
    fetch, handle_completions, handle_config_init, load_config_with_overrides, status, Cli,
    Commands, ConfigCommands, ConnectionArgs,
};
use hookdash::config::DashboardConfig;

/// Load config for a command and start logging.
fn prepare(connection: &ConnectionArgs) -> Result<DashboardConfig, Box<dyn std::error::Error>> {
    let config = load_config_with_overrides(connection)?;
    if let Err(e) = hookdash::logging::init_tracing(&config.logging) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    Ok(config)
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Status(args) => match prepare(&args.connection) {
            Ok(config) => status::handle_status(&args, &config).await,
            Err(e) => Err(e),
        },
        Commands::Fetch(args) => match prepare(&args.connection) {
            Ok(config) => fetch::handle_fetch(&args, &config).await,
            Err(e) => Err(e),
        },
        Commands::Url(args) => {
            prepare(&args.connection).map(|config| fetch::handle_url(&args, &config))
        }
        Commands::Config(config_cmd) => match config_cmd {
            ConfigCommands::Init(args) => handle_config_init(&args),
        },
        Commands::Completions(args) => {
            handle_completions(&args);
            Ok(String::new())
        }
    };

    match result {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
