pub mod estimator;
pub mod optimiser;
pub mod report;
pub mod validator;

pub use crate::domain::model::{
    CurveParameters, EstimateBreakdown, Objective, OptimisationResult, ParkingInput,
};
pub use crate::domain::ports::{FormFields, RawParkingFields};
pub use crate::utils::error::Result;
