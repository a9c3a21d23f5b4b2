//! Encode command: resistance to band colors.

use crate::cli::common::{load_config, print_json, CliError, CliResult};
use crate::color_table::ColorTable;
use crate::models::{format_ohms_grouped, format_resistance, BandCount, ResistanceInput, Unit};
use crate::services::{EncodeResult, Encoder};
use clap::Args;
use serde::Serialize;

/// Find the band colors closest to a resistance
#[derive(Debug, Clone, Args)]
pub struct EncodeArgs {
    /// Resistance, optionally with a unit suffix (e.g., 4700, 4.7k, 2.2M)
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: String,

    /// Unit of VALUE when it has no suffix (ohm, k, M)
    #[arg(short, long, value_name = "UNIT")]
    pub unit: Option<Unit>,

    /// Number of bands (4, 5, or 6); defaults to the configured band count
    #[arg(short, long, value_name = "N")]
    pub bands: Option<BandCount>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct EncodeOutput<'a> {
    target_ohms: f64,
    band_count: BandCount,
    #[serde(flatten)]
    result: &'a EncodeResult,
    formatted: String,
    display: String,
}

impl EncodeArgs {
    /// Execute the encode command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let target_ohms = self.target_ohms()?;
        let band_count = self.bands.unwrap_or(config.encode.default_bands);

        let table = ColorTable::standard()?;
        let encoder = Encoder::with_policy(table, config.encode.tolerance_policy());
        let result = encoder.encode(target_ohms, band_count)?;

        if self.json {
            return print_json(&EncodeOutput {
                target_ohms,
                band_count,
                result: &result,
                formatted: result.formatted(),
                display: result.summary(),
            });
        }

        let names: Vec<String> = result
            .bands
            .iter()
            .map(|band| match band.as_deref().and_then(|name| table.get(name)) {
                Some(entry) => entry.display_name(),
                None => "(none)".to_string(),
            })
            .collect();

        println!(
            "Target:      {} ({})",
            format_ohms_grouped(target_ohms),
            format_resistance(target_ohms)
        );
        println!("Bands:       {}", names.join(", "));
        println!("Encodes:     {}", result.summary());

        Ok(())
    }

    /// Target in ohms from VALUE and --unit.
    fn target_ohms(&self) -> CliResult<f64> {
        let input = ResistanceInput::parse(&self.value)?;
        let unit = match (input.unit, self.unit) {
            (Some(suffix), Some(unit)) if suffix != unit => {
                return Err(CliError::validation(format!(
                    "VALUE '{}' already carries unit {suffix}, which conflicts with --unit {unit}",
                    self.value
                )));
            }
            (Some(unit), _) | (None, Some(unit)) => unit,
            (None, None) => Unit::Ohm,
        };
        Ok(input.ohms_in(unit)?)
    }
}
