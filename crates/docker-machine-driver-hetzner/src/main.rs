mod cli;
mod config;

use colored::Colorize;
use machine_driver::{Driver, LayeredOptions, MapOptions};
use machine_driver_hetzner::HetznerDriver;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let mut driver = HetznerDriver::new(env!("CARGO_PKG_VERSION"));
    let flags = driver.create_flags();
    let matches = cli::command(&flags).get_matches();

    if matches.get_flag(cli::ARG_VERSION) {
        println!("Version: {}", driver.version());
        return Ok(());
    }

    // stdout carries the configuration, logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let explicit = matches.get_one::<PathBuf>(cli::ARG_OPTIONS_FILE).cloned();
    let file_options = match config::find_options_file(explicit)? {
        Some(path) => {
            tracing::debug!("Loading options file: {}", path.display());
            config::load_options(&path, &flags)?
        }
        None => MapOptions::new(),
    };
    let cli_options = cli::ClapOptions::new(matches, &flags);
    let opts = LayeredOptions::new().with(&cli_options).with(&file_options);

    match driver.set_config_from_flags(&opts) {
        Ok(()) => {
            eprintln!("{}", "✓ Driver configuration is valid".green().bold());
            println!(
                "{}",
                serde_json::to_string_pretty(&driver.config().redacted())?
            );
        }
        Err(e) => {
            eprintln!("{}", "✗ Configuration error".red().bold());
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
