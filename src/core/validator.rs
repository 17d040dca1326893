use crate::core::{Objective, ParkingInput, RawParkingFields};
use crate::utils::error::{OptimiserError, Result};
use crate::utils::validation::{parse_positive, validate_positive, Validate};

pub const AREA_FIELD: &str = "area_parking";
pub const WIDTH_FIELD: &str = "aisle_width";
pub const LENGTH_FIELD: &str = "aisle_length";
pub const STALL_AREA_FIELD: &str = "stall_area";

/// Rejects dimensions whose stall area or stall count cannot be represented.
pub fn validate_stall_geometry(
    area_parking: f64,
    aisle_width: f64,
    aisle_length: f64,
) -> Result<()> {
    let stall_area = aisle_width * aisle_length;
    if stall_area <= 0.0 || !stall_area.is_finite() {
        return Err(OptimiserError::RangeError {
            field: STALL_AREA_FIELD.to_string(),
            value: stall_area.to_string(),
            reason: "must be a positive, finite product of width and length".to_string(),
        });
    }

    let stalls = area_parking / stall_area;
    if !stalls.is_finite() || stalls >= u64::MAX as f64 {
        return Err(OptimiserError::RangeError {
            field: AREA_FIELD.to_string(),
            value: area_parking.to_string(),
            reason: "holds more stalls than can be counted".to_string(),
        });
    }
    Ok(())
}

/// Turns the raw form fields into a [`ParkingInput`].
///
/// Fields are checked in form order (area, width, length, objective) and the
/// first failure is returned.
pub fn validate(
    raw_area: &str,
    raw_width: &str,
    raw_length: &str,
    raw_objective: &str,
) -> Result<ParkingInput> {
    let area_parking = parse_positive(AREA_FIELD, raw_area)?;
    let aisle_width = parse_positive(WIDTH_FIELD, raw_width)?;
    let aisle_length = parse_positive(LENGTH_FIELD, raw_length)?;
    validate_stall_geometry(area_parking, aisle_width, aisle_length)?;
    let objective =
        Objective::from_selection(raw_objective).ok_or_else(|| OptimiserError::SelectionError {
            value: raw_objective.to_string(),
        })?;

    Ok(ParkingInput {
        area_parking,
        aisle_width,
        aisle_length,
        objective,
    })
}

pub fn validate_fields<F: RawParkingFields + ?Sized>(fields: &F) -> Result<ParkingInput> {
    validate(
        fields.raw_area(),
        fields.raw_width(),
        fields.raw_length(),
        fields.raw_objective(),
    )
}

impl Validate for ParkingInput {
    fn validate(&self) -> Result<()> {
        for (field, value) in [
            (AREA_FIELD, self.area_parking),
            (WIDTH_FIELD, self.aisle_width),
            (LENGTH_FIELD, self.aisle_length),
        ] {
            if !value.is_finite() {
                return Err(OptimiserError::ParseError {
                    field: field.to_string(),
                    value: value.to_string(),
                });
            }
            validate_positive(field, value)?;
        }
        validate_stall_geometry(self.area_parking, self.aisle_width, self.aisle_length)
    }
}
