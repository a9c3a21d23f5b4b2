//! Resistor Code Library
//!
//! This library converts between resistor color bands and resistance values:
//! decoding 4-, 5-, and 6-band sequences into ohms and tolerance, and
//! encoding a target resistance into the closest band colors.

// Module declarations
pub mod cli;
pub mod color_table;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod services;

pub use color_table::{ColorEntry, ColorTable};
pub use error::ResistorError;
pub use models::{BandCount, BandRole};
pub use services::{decode, encode, DecodeResult, Decoder, EncodeResult, Encoder};
