//! Configuration management CLI commands.

use crate::cli::common::{load_config, print_json, CliError, CliResult};
use crate::config::Config;
use crate::constants::APP_NAME;
use crate::models::BandCount;
use clap::{Args, Subcommand};
use serde::Serialize;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
    /// Print the config file location
    Path,
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Default band count for encode and bands (4, 5, or 6)
    #[arg(long, value_name = "N")]
    default_bands: Option<BandCount>,

    /// Tolerance color for 4-band results
    #[arg(long, value_name = "COLOR")]
    tolerance_four_band: Option<String>,

    /// Tolerance color for 5- and 6-band results
    #[arg(long, value_name = "COLOR")]
    tolerance_multi_band: Option<String>,

    /// Temperature-coefficient color for 6-band results ("none" to clear)
    #[arg(long, value_name = "COLOR")]
    temp_coefficient: Option<String>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput<'a> {
    path: Option<String>,
    encode: &'a crate::config::EncodeConfig,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
            ConfigCommand::Path => {
                let path = Config::config_file_path()
                    .map_err(|e| CliError::io(format!("{e:#}")))?;
                println!("{}", path.display());
                Ok(())
            }
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;

        if self.json {
            let path = Config::config_file_path()
                .ok()
                .map(|p| p.to_string_lossy().to_string());
            return print_json(&ConfigOutput {
                path,
                encode: &config.encode,
            });
        }

        output_human_readable(&config);
        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.default_bands.is_none()
            && self.tolerance_four_band.is_none()
            && self.tolerance_multi_band.is_none()
            && self.temp_coefficient.is_none()
        {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --default-bands, \
                 --tolerance-four-band, --tolerance-multi-band, or --temp-coefficient",
            ));
        }

        let mut config = load_config()?;

        if let Some(bands) = self.default_bands {
            config.encode.default_bands = bands;
        }
        if let Some(color) = &self.tolerance_four_band {
            config.encode.tolerance_four_band = color.trim().to_lowercase();
        }
        if let Some(color) = &self.tolerance_multi_band {
            config.encode.tolerance_multi_band = color.trim().to_lowercase();
        }
        if let Some(color) = &self.temp_coefficient {
            config.encode.temp_coefficient = match color.trim().to_lowercase().as_str() {
                "none" | "" => None,
                name => Some(name.to_string()),
            };
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("{e:#}")))?;

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("{APP_NAME} Configuration");
    println!("========================");
    println!();

    match Config::config_file_path() {
        Ok(path) if path.exists() => println!("File: {}", path.display()),
        Ok(path) => println!("File: {} (not created yet, using defaults)", path.display()),
        Err(_) => println!("File: (unavailable)"),
    }
    println!();

    println!("Encode:");
    println!("  Default Bands:        {}", config.encode.default_bands);
    println!(
        "  Tolerance (4-band):   {}",
        config.encode.tolerance_four_band
    );
    println!(
        "  Tolerance (5/6-band): {}",
        config.encode.tolerance_multi_band
    );
    println!(
        "  Temp Coefficient:     {}",
        config
            .encode
            .temp_coefficient
            .as_deref()
            .unwrap_or("(none)")
    );
}
