use anyhow::Result;
use clap::Parser;
use log::error;

use gembatch::{BatchHandler, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging - verbose shows debug output, otherwise only errors
    let filter = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Error
    };
    env_logger::Builder::from_default_env()
        .filter_level(filter)
        .init();

    // Handle version early
    if matches!(cli.command, Some(Commands::Version)) {
        let version_info = format!(
            "gembatch {}\nRust version: {}\nPlatform: {}-{}",
            env!("CARGO_PKG_VERSION"),
            env!("CARGO_PKG_RUST_VERSION"),
            std::env::consts::OS,
            std::env::consts::ARCH
        );
        println!("{version_info}");
        return Ok(());
    }

    let handler = match BatchHandler::new(&cli) {
        Ok(h) => h,
        Err(e) => {
            error!("Failed to initialize gembatch: {e}");
            eprintln!("Error: Failed to initialize gembatch: {e}");
            eprintln!("Check your config with 'gembatch config'.");
            std::process::exit(1);
        }
    };

    match cli.command {
        Some(command) => match handler.handle_command(command) {
            Ok(output) => println!("{output}"),
            Err(e) => {
                error!("Command failed: {e}");
                eprintln!("{}", handler.format_error(&e.to_string()));
                std::process::exit(1);
            }
        },
        None => {
            // Missing or unreadable input is the one fatal condition;
            // everything past loading is fail-soft.
            if let Err(e) = handler.run().await {
                error!("Batch run failed: {e}");
                eprintln!("{}", handler.format_error(&format!("{e:#}")));
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
