//! Data models for resistor bands, units, and swatches.

pub mod band;
pub mod rgb;
pub mod unit;

pub use band::{BandCount, BandRole, BandSpec};
pub use rgb::RgbColor;
pub use unit::{
    format_ohms_grouped, format_resistance, parse_resistance, scale_significand, ResistanceInput,
    Unit,
};
