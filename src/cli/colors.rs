//! Colors command: print the color-code table.

use crate::cli::common::{print_json, CliResult};
use crate::color_table::{ColorEntry, ColorTable};
use crate::models::BandRole;
use clap::Args;
use serde::Serialize;

/// List band colors and the values they encode
#[derive(Debug, Clone, Args)]
pub struct ColorsArgs {
    /// Only list colors that can play this role
    /// (digit, multiplier, tolerance, temp-coefficient)
    #[arg(short, long, value_name = "ROLE")]
    pub role: Option<BandRole>,

    /// Paint a swatch next to each color (24-bit terminal colors)
    #[arg(long)]
    pub swatch: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ColorsOutput<'a> {
    version: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<BandRole>,
    colors: Vec<&'a ColorEntry>,
}

impl ColorsArgs {
    /// Execute the colors command
    pub fn execute(&self) -> CliResult<()> {
        let table = ColorTable::standard()?;
        let colors: Vec<&ColorEntry> = match self.role {
            Some(role) => table.colors_with_role(role),
            None => table.entries().iter().collect(),
        };

        if self.json {
            return print_json(&ColorsOutput {
                version: table.version(),
                role: self.role,
                colors,
            });
        }

        println!(
            "{:<8} {:>5}  {:>12}  {:>9}  {:>10}  Swatch",
            "Color", "Digit", "Multiplier", "Tolerance", "Temp Coeff"
        );
        for entry in colors {
            let swatch = if self.swatch {
                format!("{} {}", entry.swatch.ansi_block(2), entry.swatch)
            } else {
                entry.swatch.to_hex()
            };
            println!(
                "{:<8} {:>5}  {:>12}  {:>9}  {:>10}  {}",
                entry.name,
                cell(entry.digit.map(|d| d.to_string())),
                cell(entry.multiplier.map(|m| format!("×{m}"))),
                cell(entry.tolerance.map(|t| format!("±{t}%"))),
                cell(entry.temp_coefficient.map(|ppm| format!("{ppm} ppm"))),
                swatch
            );
        }

        Ok(())
    }
}

fn cell(value: Option<String>) -> String {
    value.unwrap_or_else(|| "-".to_string())
}
