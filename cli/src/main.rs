mod commands;

use clap::Parser;
use commands::{handle_analyze, handle_config, handle_explain, ui, Cli, Commands};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_path = cli.config.as_deref();
    let result = match cli.command {
        Commands::Analyze(args) => handle_analyze(args, config_path, cli.verbose).await,
        Commands::Explain(args) => handle_explain(args, config_path).await,
        Commands::Config(command) => handle_config(command),
    };

    if let Err(e) = result {
        ui::print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}
