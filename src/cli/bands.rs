//! Bands command: band positions and their legal colors.

use crate::cli::common::{load_config, print_json, CliResult};
use crate::color_table::ColorTable;
use crate::models::{BandCount, BandSpec};
use clap::Args;
use serde::Serialize;

/// Show each band position and the colors allowed there
#[derive(Debug, Clone, Args)]
pub struct BandsArgs {
    /// Number of bands (4, 5, or 6); defaults to the configured band count
    #[arg(short, long, value_name = "N")]
    pub bands: Option<BandCount>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct BandOptions {
    #[serde(flatten)]
    spec: BandSpec,
    colors: Vec<String>,
}

#[derive(Debug, Serialize)]
struct BandsOutput {
    band_count: BandCount,
    bands: Vec<BandOptions>,
}

impl BandsArgs {
    /// Execute the bands command
    pub fn execute(&self) -> CliResult<()> {
        let band_count = match self.bands {
            Some(count) => count,
            None => load_config()?.encode.default_bands,
        };
        let table = ColorTable::standard()?;

        let bands: Vec<BandOptions> = band_count
            .layout()
            .into_iter()
            .map(|spec| {
                let colors = table
                    .options_for(&spec)
                    .into_iter()
                    .map(|entry| entry.name.clone())
                    .collect();
                BandOptions { spec, colors }
            })
            .collect();

        if self.json {
            return print_json(&BandsOutput { band_count, bands });
        }

        println!("{}-band resistor", band_count);
        println!();
        for band in &bands {
            println!("{}", band.spec.label);
            println!("  {}", band.colors.join(", "));
        }

        Ok(())
    }
}
