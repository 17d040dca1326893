use serde::{Deserialize, Serialize};
use std::fmt;

/// What the estimate should favour. Each objective carries its own logistic curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Objective {
    IncreaseSpaces,
    ImproveTrafficFlow,
}

impl Objective {
    pub const ALL: [Objective; 2] = [Objective::IncreaseSpaces, Objective::ImproveTrafficFlow];

    /// Label shown in the objective selector.
    pub fn label(&self) -> &'static str {
        match self {
            Objective::IncreaseSpaces => "Increase Parking Spaces",
            Objective::ImproveTrafficFlow => "Improve Traffic Flow",
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Objective::IncreaseSpaces => "increase-spaces",
            Objective::ImproveTrafficFlow => "improve-traffic-flow",
        }
    }

    /// Accepts either the selector label or the short id, ignoring surrounding whitespace.
    pub fn from_selection(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|objective| objective.label() == value || objective.id() == value)
    }

    pub fn parameters(&self) -> CurveParameters {
        match self {
            Objective::IncreaseSpaces => CurveParameters { k: 0.0025, x0: 200.0 },
            Objective::ImproveTrafficFlow => CurveParameters { k: 0.0010, x0: 200.0 },
        }
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Growth rate and midpoint of the logistic curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveParameters {
    pub k: f64,
    pub x0: f64,
}

/// Validated form input. Every dimension is finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParkingInput {
    pub area_parking: f64,
    pub aisle_width: f64,
    pub aisle_length: f64,
    pub objective: Objective,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimisationResult {
    pub space_count: u64,
    pub parking_ratio: f64,
}

/// Intermediate values behind an [`OptimisationResult`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimateBreakdown {
    pub input: ParkingInput,
    pub stall_area: f64,
    pub total_possible_spaces: u64,
    pub parameters: CurveParameters,
    pub result: OptimisationResult,
}
