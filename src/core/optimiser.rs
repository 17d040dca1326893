use crate::config::batch_config::BatchConfig;
use crate::core::report::LotOutcome;
use crate::core::{estimator, validator, EstimateBreakdown, RawParkingFields};
use crate::utils::error::Result;

/// Runs validation then estimation for each request. Holds no state between runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct ParkingOptimiser;

impl ParkingOptimiser {
    pub fn new() -> Self {
        Self
    }

    pub fn run<F: RawParkingFields + ?Sized>(&self, fields: &F) -> Result<EstimateBreakdown> {
        tracing::debug!(
            area = fields.raw_area(),
            width = fields.raw_width(),
            length = fields.raw_length(),
            objective = fields.raw_objective(),
            "Validating inputs"
        );
        let input = validator::validate_fields(fields).inspect_err(|e| {
            tracing::warn!("Input rejected: {}", e);
        })?;

        tracing::debug!(objective = %input.objective, "Estimating spaces");
        let breakdown = estimator::breakdown(&input);

        tracing::info!(
            total_possible_spaces = breakdown.total_possible_spaces,
            space_count = breakdown.result.space_count,
            parking_ratio = breakdown.result.parking_ratio,
            "Estimate complete"
        );
        Ok(breakdown)
    }

    /// Evaluates every enabled lot in file order; a failing lot does not stop the batch.
    pub fn run_batch(&self, config: &BatchConfig) -> Vec<LotOutcome> {
        tracing::info!("Running batch '{}'", config.batch.name);

        let outcomes: Vec<LotOutcome> = config
            .enabled_lots()
            .map(|lot| {
                let fields = config.resolve(lot);
                let outcome = self.run(&fields);
                if let Err(e) = &outcome {
                    tracing::warn!(lot = %lot.name, "Lot failed: {}", e);
                }
                LotOutcome {
                    name: lot.name.clone(),
                    outcome,
                }
            })
            .collect();

        let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
        tracing::info!(
            lots = outcomes.len(),
            failed,
            "Batch '{}' finished",
            config.batch.name
        );
        outcomes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FormFields;
    use crate::utils::error::OptimiserError;

    #[test]
    fn test_run_returns_fresh_value_per_request() {
        let optimiser = ParkingOptimiser::new();
        let first = optimiser
            .run(&FormFields::new("1000", "2.5", "5", "Increase Parking Spaces"))
            .unwrap();
        let second = optimiser
            .run(&FormFields::new("1000", "2.5", "5", "Improve Traffic Flow"))
            .unwrap();
        assert_eq!(first.result.space_count, 49);
        assert_eq!(second.result.space_count, 38);
    }

    #[test]
    fn test_run_surfaces_validation_error() {
        let err = ParkingOptimiser::new()
            .run(&FormFields::new("1000", "2.5", "five", "Increase Parking Spaces"))
            .unwrap_err();
        assert!(matches!(err, OptimiserError::ParseError { .. }));
    }
}
