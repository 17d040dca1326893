pub mod batch_config;

#[cfg(feature = "cli")]
use crate::core::RawParkingFields;
#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
    Csv,
}

/// Output of a single estimate. CSV is a batch-only format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum EstimateFormat {
    #[default]
    Human,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "parking-optimiser")]
#[command(about = "Estimate usable parking spaces in a paved area")]
pub struct CliConfig {
    /// Parking area in use (SqM)
    #[arg(long, allow_hyphen_values = true)]
    pub area: String,

    /// Width of each parking aisle (M)
    #[arg(long, allow_hyphen_values = true)]
    pub width: String,

    /// Length of each parking aisle (M)
    #[arg(long, allow_hyphen_values = true)]
    pub length: String,

    /// Objective of the algorithm
    #[arg(long, default_value = "Increase Parking Spaces")]
    pub objective: String,

    #[arg(long, value_enum, default_value_t = EstimateFormat::Human)]
    pub format: EstimateFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl RawParkingFields for CliConfig {
    fn raw_area(&self) -> &str {
        &self.area
    }

    fn raw_width(&self) -> &str {
        &self.width
    }

    fn raw_length(&self) -> &str {
        &self.length
    }

    fn raw_objective(&self) -> &str {
        &self.objective
    }
}
