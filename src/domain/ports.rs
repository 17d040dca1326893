/// A source of the four raw form fields, before any parsing.
pub trait RawParkingFields {
    fn raw_area(&self) -> &str;
    fn raw_width(&self) -> &str;
    fn raw_length(&self) -> &str;
    fn raw_objective(&self) -> &str;
}

/// Plain owned fields, for callers that already hold the text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub area: String,
    pub width: String,
    pub length: String,
    pub objective: String,
}

impl FormFields {
    pub fn new(
        area: impl Into<String>,
        width: impl Into<String>,
        length: impl Into<String>,
        objective: impl Into<String>,
    ) -> Self {
        Self {
            area: area.into(),
            width: width.into(),
            length: length.into(),
            objective: objective.into(),
        }
    }
}

impl RawParkingFields for FormFields {
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
