use crate::core::{EstimateBreakdown, OptimisationResult};
use crate::utils::error::{OptimiserError, Result};
use serde::Serialize;

pub const ADVISORY_NOTE: &str =
    "This result should only be used as assistance in assessing and restructuring parking areas.";

/// Result line shown after a successful run.
pub fn format_result(result: &OptimisationResult) -> String {
    format!(
        "Optimised result: At a Parking Ratio of {:.2}, {} parking space(s) can efficiently fit\n{}",
        result.parking_ratio, result.space_count, ADVISORY_NOTE
    )
}

pub fn format_error(error: &OptimiserError) -> String {
    error.user_friendly_message()
}

pub fn to_json(breakdown: &EstimateBreakdown) -> Result<String> {
    Ok(serde_json::to_string_pretty(breakdown)?)
}

/// One evaluated lot of a batch run.
#[derive(Debug)]
pub struct LotOutcome {
    pub name: String,
    pub outcome: Result<EstimateBreakdown>,
}

impl LotOutcome {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

#[derive(Debug, Serialize)]
struct LotRow<'a> {
    name: &'a str,
    area_parking: Option<f64>,
    aisle_width: Option<f64>,
    aisle_length: Option<f64>,
    objective: Option<&'static str>,
    total_possible_spaces: Option<u64>,
    parking_ratio: Option<f64>,
    space_count: Option<u64>,
    error: Option<String>,
}

impl<'a> From<&'a LotOutcome> for LotRow<'a> {
    fn from(lot: &'a LotOutcome) -> Self {
        match &lot.outcome {
            Ok(b) => LotRow {
                name: &lot.name,
                area_parking: Some(b.input.area_parking),
                aisle_width: Some(b.input.aisle_width),
                aisle_length: Some(b.input.aisle_length),
                objective: Some(b.input.objective.id()),
                total_possible_spaces: Some(b.total_possible_spaces),
                parking_ratio: Some(b.result.parking_ratio),
                space_count: Some(b.result.space_count),
                error: None,
            },
            Err(e) => LotRow {
                name: &lot.name,
                area_parking: None,
                aisle_width: None,
                aisle_length: None,
                objective: None,
                total_possible_spaces: None,
                parking_ratio: None,
                space_count: None,
                error: Some(e.user_friendly_message()),
            },
        }
    }
}

pub fn batch_to_csv(lots: &[LotOutcome]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for lot in lots {
        writer.serialize(LotRow::from(lot))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| OptimiserError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| OptimiserError::ConfigError {
        message: format!("CSV output is not valid UTF-8: {}", e),
    })
}

pub fn batch_to_json(lots: &[LotOutcome]) -> Result<String> {
    let rows: Vec<LotRow<'_>> = lots.iter().map(LotRow::from).collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}

pub fn batch_to_text(lots: &[LotOutcome]) -> String {
    let mut lines = Vec::with_capacity(lots.len() + 1);
    for lot in lots {
        match &lot.outcome {
            Ok(b) => lines.push(format!(
                "{}: {} of {} space(s) at a Parking Ratio of {:.2} ({})",
                lot.name,
                b.result.space_count,
                b.total_possible_spaces,
                b.result.parking_ratio,
                b.input.objective
            )),
            Err(e) => lines.push(format!("{}: {}", lot.name, e.user_friendly_message())),
        }
    }
    lines.push(ADVISORY_NOTE.to_string());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::estimator::breakdown;
    use crate::core::validator::validate;

    fn lot(name: &str, area: &str) -> LotOutcome {
        LotOutcome {
            name: name.to_string(),
            outcome: validate(area, "2.5", "5", "Increase Parking Spaces").map(|i| breakdown(&i)),
        }
    }

    #[test]
    fn test_format_result_rounds_ratio() {
        let message = format_result(&OptimisationResult {
            space_count: 49,
            parking_ratio: 0.616_557_954_584_517_6,
        });
        assert_eq!(
            message,
            "Optimised result: At a Parking Ratio of 0.62, 49 parking space(s) can efficiently fit\n\
             This result should only be used as assistance in assessing and restructuring parking areas."
        );
    }

    #[test]
    fn test_format_error_uses_form_prefix() {
        let err = validate("-5", "2.5", "5", "Improve Traffic Flow").unwrap_err();
        assert!(format_error(&err).starts_with("Invalid input: "));
    }

    #[test]
    fn test_batch_csv_has_header_and_row_per_lot() {
        let lots = vec![lot("north", "1000"), lot("south", "zero")];
        let csv = batch_to_csv(&lots).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "name,area_parking,aisle_width,aisle_length,objective,total_possible_spaces,parking_ratio,space_count,error"
        );
        assert!(lines[1].starts_with("north,1000.0,2.5,5.0,increase-spaces,80,"));
        assert!(lines[1].ends_with(",49,"));
        assert!(lines[2].starts_with("south,,,,,,,,"));
        assert!(lines[2].contains("Invalid input"));
    }

    #[test]
    fn test_batch_text_ends_with_advisory() {
        let text = batch_to_text(&[lot("north", "1000")]);
        assert!(text.starts_with("north: 49 of 80 space(s) at a Parking Ratio of 0.62"));
        assert!(text.ends_with(ADVISORY_NOTE));
    }
}
