use crate::core::{CurveParameters, EstimateBreakdown, Objective, OptimisationResult, ParkingInput};
use crate::utils::error::{OptimiserError, Result};

/// Upper bound of the parking ratio.
pub const MAX_PARKING_RATIO: f64 = 0.7;

/// Floor division with the exact-remainder semantics used for stall counting.
///
/// Computed from the float remainder rather than `(a / b).floor()`, so that a
/// stall which only "fits" through rounding error in `a / b` is still dropped
/// (`1.0 / 0.1` rounds to 10, but only nine 0.1 stalls fit in 1.0).
pub fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 && (b < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }
    if div == 0.0 {
        return 0.0_f64.copysign(a / b);
    }
    // `div` is integral up to rounding; snap it.
    let floored = div.floor();
    if div - floored > 0.5 {
        floored + 1.0
    } else {
        floored
    }
}

/// Logistic curve evaluated at the lot area, with its capacity factored out.
pub fn parking_ratio(area_parking: f64, parameters: CurveParameters) -> f64 {
    MAX_PARKING_RATIO / (1.0 + (-parameters.k * (area_parking - parameters.x0)).exp())
}

pub fn total_possible_spaces(input: &ParkingInput) -> u64 {
    floor_div(input.area_parking, input.aisle_width * input.aisle_length) as u64
}

pub fn breakdown(input: &ParkingInput) -> EstimateBreakdown {
    let parameters = input.objective.parameters();
    let stall_area = input.aisle_width * input.aisle_length;
    let total = total_possible_spaces(input);
    let ratio = parking_ratio(input.area_parking, parameters);
    // Floor the stall count before applying the ratio; reordering shifts marginal results.
    let space_count = (total as f64 * ratio).trunc() as u64;

    EstimateBreakdown {
        input: *input,
        stall_area,
        total_possible_spaces: total,
        parameters,
        result: OptimisationResult {
            space_count,
            parking_ratio: ratio,
        },
    }
}

pub fn estimate(input: &ParkingInput) -> OptimisationResult {
    breakdown(input).result
}

/// Estimates from an objective given by name, for callers that bypass the validator.
pub fn estimate_with_objective_name(
    area_parking: f64,
    aisle_width: f64,
    aisle_length: f64,
    objective: &str,
) -> Result<OptimisationResult> {
    let objective =
        Objective::from_selection(objective).ok_or_else(|| OptimiserError::InvalidObjectiveError {
            value: objective.to_string(),
        })?;

    Ok(estimate(&ParkingInput {
        area_parking,
        aisle_width,
        aisle_length,
        objective,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(area: f64, width: f64, length: f64, objective: Objective) -> ParkingInput {
        ParkingInput {
            area_parking: area,
            aisle_width: width,
            aisle_length: length,
            objective,
        }
    }

    #[test]
    fn test_increase_spaces_reference_lot() {
        let b = breakdown(&input(1000.0, 2.5, 5.0, Objective::IncreaseSpaces));
        assert_eq!(b.stall_area, 12.5);
        assert_eq!(b.total_possible_spaces, 80);
        let expected = 0.7 / (1.0 + (-2.0_f64).exp());
        assert!((b.result.parking_ratio - expected).abs() < 1e-12);
        assert!((b.result.parking_ratio - 0.616_557_954_584_517_6).abs() < 1e-12);
        assert_eq!(b.result.space_count, 49);
    }

    #[test]
    fn test_improve_traffic_flow_reference_lot() {
        let result = estimate(&input(1000.0, 2.5, 5.0, Objective::ImproveTrafficFlow));
        assert!((result.parking_ratio - 0.482_982_136_789_328_66).abs() < 1e-12);
        assert_eq!(result.space_count, 38);
    }

    #[test]
    fn test_ratio_at_midpoint_is_half_of_max() {
        for objective in Objective::ALL {
            let result = estimate(&input(200.0, 2.5, 5.0, objective));
            assert!((result.parking_ratio - 0.35).abs() < 1e-12);
            assert_eq!(result.space_count, 5);
        }
    }

    #[test]
    fn test_ratio_saturates_at_max_for_huge_lots() {
        let result = estimate(&input(1.0e6, 2.5, 5.0, Objective::IncreaseSpaces));
        assert_eq!(result.parking_ratio, MAX_PARKING_RATIO);
        assert_eq!(result.space_count, 56_000);
    }

    #[test]
    fn test_partial_stalls_are_dropped() {
        assert_eq!(
            total_possible_spaces(&input(37.5, 2.5, 5.0, Objective::IncreaseSpaces)),
            3
        );
        assert_eq!(
            total_possible_spaces(&input(49.9, 2.5, 5.0, Objective::IncreaseSpaces)),
            3
        );
        assert_eq!(
            total_possible_spaces(&input(10.0, 2.5, 5.0, Objective::IncreaseSpaces)),
            0
        );
    }

    #[test]
    fn test_floor_div_uses_exact_remainder() {
        assert_eq!(floor_div(1000.0, 12.5), 80.0);
        assert_eq!(floor_div(7.0, 2.0), 3.0);
        assert_eq!(floor_div(1.0, 0.1), 9.0);
        assert_eq!(floor_div(0.5, 2.0), 0.0);
    }

    #[test]
    fn test_small_lot_has_no_spaces() {
        let result = estimate(&input(37.5, 2.5, 5.0, Objective::ImproveTrafficFlow));
        assert_eq!(result.space_count, 0);
        assert!(result.parking_ratio > 0.0);
    }

    #[test]
    fn test_properties_hold_across_inputs() {
        let areas = [0.01, 1.0, 37.5, 100.0, 199.9, 200.0, 512.0, 5000.0, 1.0e5];
        let dims = [(0.1, 1.0), (2.0, 5.0), (2.4, 4.8), (2.5, 5.0), (3.0, 6.0)];
        for area in areas {
            for (width, length) in dims {
                for objective in Objective::ALL {
                    let lot = input(area, width, length, objective);
                    let b = breakdown(&lot);
                    assert!(b.result.parking_ratio > 0.0);
                    assert!(b.result.parking_ratio <= MAX_PARKING_RATIO);
                    assert!(b.result.space_count <= b.total_possible_spaces);
                    assert_eq!(estimate(&lot), b.result);
                }
            }
        }
    }

    #[test]
    fn test_estimate_with_objective_name() {
        let result =
            estimate_with_objective_name(1000.0, 2.5, 5.0, "Increase Parking Spaces").unwrap();
        assert_eq!(result.space_count, 49);

        let err = estimate_with_objective_name(1000.0, 2.5, 5.0, "Shortest Walk").unwrap_err();
        assert!(matches!(err, OptimiserError::InvalidObjectiveError { .. }));
    }
}
