use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("unknown app: {0}")]
    UnknownApp(String),
    #[error("unknown transport mode: {0} (expected driving, walking, bicycling, transit or taxi)")]
    UnknownMode(String),
    #[error("invalid coordinate: {0} (expected \"lat,lng\")")]
    InvalidCoordinate(String),
    #[error("latitude out of range: {0} (expected -90..=90)")]
    LatitudeOutOfRange(f64),
    #[error("longitude out of range: {0} (expected -180..=180)")]
    LongitudeOutOfRange(f64),
}
