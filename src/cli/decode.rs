//! Decode command: band colors to resistance.

use crate::cli::common::{print_json, CliResult};
use crate::color_table::{ColorEntry, ColorTable};
use crate::models::BandCount;
use crate::services::{DecodeResult, Decoder};
use clap::Args;
use serde::Serialize;

/// Decode band colors into resistance and tolerance
#[derive(Debug, Clone, Args)]
pub struct DecodeArgs {
    /// Band colors in order, 4 to 6 of them (e.g., yellow violet red gold)
    #[arg(value_name = "COLOR", required = true)]
    pub colors: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct DecodeOutput<'a> {
    bands: Vec<String>,
    band_count: BandCount,
    #[serde(flatten)]
    result: &'a DecodeResult,
    display: String,
}

impl DecodeArgs {
    /// Execute the decode command
    pub fn execute(&self) -> CliResult<()> {
        let band_count = BandCount::from_len(self.colors.len())?;
        let table = ColorTable::standard()?;
        let result = Decoder::new(table).decode(&self.colors, band_count)?;

        // Echo canonical names so aliases and casing are normalized
        let entries: Vec<&ColorEntry> = self
            .colors
            .iter()
            .filter_map(|color| table.get(color))
            .collect();

        if self.json {
            return print_json(&DecodeOutput {
                bands: entries.iter().map(|entry| entry.name.clone()).collect(),
                band_count,
                result: &result,
                display: result.summary(),
            });
        }

        let names: Vec<String> = entries.iter().map(|entry| entry.display_name()).collect();

        println!("Bands:       {}", names.join(", "));
        println!("Resistance:  {}", result.summary());
        println!("Tolerance:   ±{}%", result.tolerance_percent);
        if let Some(ppm) = result.temp_coefficient {
            println!("Temp Coeff:  {} ppm/K", ppm);
        }

        Ok(())
    }
}
