use std::str::FromStr;

use serde::Serialize;

use crate::error::ParseError;

/// Signed decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Validating constructor for caller-supplied values.
    pub fn checked(latitude: f64, longitude: f64) -> Result<Self, ParseError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(ParseError::LatitudeOutOfRange(latitude));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(ParseError::LongitudeOutOfRange(longitude));
        }

        Ok(Self::new(latitude, longitude))
    }

    /// `"lat,lng"` using the default decimal rendering of both values.
    pub fn pair_string(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }

    pub fn latitude_microdegrees(&self) -> i64 {
        to_microdegrees(self.latitude)
    }

    pub fn longitude_microdegrees(&self) -> i64 {
        to_microdegrees(self.longitude)
    }
}

/// Truncates toward zero; the fraction below one microdegree is dropped.
fn to_microdegrees(degrees: f64) -> i64 {
    (degrees * 1_000_000.0).trunc() as i64
}

impl FromStr for Coordinate {
    type Err = ParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidCoordinate(raw.trim().to_string());

        let (lat, lng) = raw.split_once(',').ok_or_else(invalid)?;
        let latitude = lat.trim().parse::<f64>().map_err(|_| invalid())?;
        let longitude = lng.trim().parse::<f64>().map_err(|_| invalid())?;

        Self::checked(latitude, longitude)
    }
}

/// Start of a route. Every field is optional; a missing coordinate means
/// "current or unspecified location".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Origin {
    pub coordinate: Option<Coordinate>,
    pub name: Option<String>,
    pub address: Option<String>,
}

impl Origin {
    pub fn at(coordinate: Coordinate) -> Self {
        Self {
            coordinate: Some(coordinate),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn name_text(&self) -> Option<&str> {
        non_empty(self.name.as_deref())
    }

    pub fn address_text(&self) -> Option<&str> {
        non_empty(self.address.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Destination {
    pub coordinate: Coordinate,
    pub name: Option<String>,
    pub address: Option<String>,
}

impl Destination {
    pub fn at(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            name: None,
            address: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn name_text(&self) -> Option<&str> {
        non_empty(self.name.as_deref())
    }

    pub fn address_text(&self) -> Option<&str> {
        non_empty(self.address.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.trim().is_empty())
}
