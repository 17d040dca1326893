pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{batch_config::BatchConfig, EstimateFormat, OutputFormat};
pub use crate::core::{
    estimator::{estimate, estimate_with_objective_name},
    optimiser::ParkingOptimiser,
    validator::validate,
};
pub use crate::domain::model::{EstimateBreakdown, Objective, OptimisationResult, ParkingInput};
pub use crate::domain::ports::{FormFields, RawParkingFields};
pub use crate::utils::error::{OptimiserError, Result};
