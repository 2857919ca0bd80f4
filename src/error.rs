use wasm_bindgen::JsValue;

#[derive(Debug)]
pub enum TrackError {
    EmptyName,
    InvalidCoordinate {
        field: &'static str,
        value: f64,
    },
}

impl std::fmt::Display for TrackError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Track name must not be empty"),
            Self::InvalidCoordinate { field, value } => {
                write!(f, "Invalid value {value} for coordinate '{field}'")
            }
        }
    }
}

impl std::error::Error for TrackError {}

impl From<TrackError> for JsValue {
    fn from(e: TrackError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}

#[derive(Debug)]
pub enum TimeError {
    Malformed(String),
    OutOfRange {
        field: &'static str,
        value: u32,
    },
}

impl std::fmt::Display for TimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(s) => write!(f, "Malformed time string '{s}', expected HH:MM"),
            Self::OutOfRange { field, value } => {
                write!(f, "Time {field} {value} out of range")
            }
        }
    }
}

impl std::error::Error for TimeError {}

impl From<TimeError> for JsValue {
    fn from(e: TimeError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}
