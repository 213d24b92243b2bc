use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::app::App;
use crate::error::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Driving,
    Walking,
    Bicycling,
    Transit,
    Taxi,
}

impl TransportMode {
    pub const ALL: [TransportMode; 5] = [
        TransportMode::Driving,
        TransportMode::Walking,
        TransportMode::Bicycling,
        TransportMode::Transit,
        TransportMode::Taxi,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Driving => "driving",
            Self::Walking => "walking",
            Self::Bicycling => "bicycling",
            Self::Transit => "transit",
            Self::Taxi => "taxi",
        }
    }

    /// Token an app expects for this mode in its URL, if it takes a mode hint at all.
    pub fn identifier_for(self, app: App) -> Option<&'static str> {
        match app {
            App::GoogleMaps => match self {
                Self::Driving => Some("driving"),
                Self::Walking => Some("walking"),
                Self::Bicycling => Some("bicycling"),
                Self::Transit => Some("transit"),
                Self::Taxi => None,
            },
            _ => None,
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransportMode {
    type Err = ParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let mode = match raw.trim().to_ascii_lowercase().as_str() {
            "driving" | "drive" | "car" => Self::Driving,
            "walking" | "walk" => Self::Walking,
            "bicycling" | "cycling" | "bike" | "bicycle" => Self::Bicycling,
            "transit" | "public" => Self::Transit,
            "taxi" | "cab" | "ride" => Self::Taxi,
            _ => return Err(ParseError::UnknownMode(raw.trim().to_string())),
        };

        Ok(mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_parse_accepts_aliases_case_insensitively() {
        assert_eq!("Driving".parse::<TransportMode>(), Ok(TransportMode::Driving));
        assert_eq!(" bike ".parse::<TransportMode>(), Ok(TransportMode::Bicycling));
        assert_eq!("PUBLIC".parse::<TransportMode>(), Ok(TransportMode::Transit));
        assert_eq!("cab".parse::<TransportMode>(), Ok(TransportMode::Taxi));
    }

    #[test]
    fn mode_parse_rejects_unknown_value() {
        assert_eq!(
            "teleport".parse::<TransportMode>(),
            Err(ParseError::UnknownMode("teleport".to_string()))
        );
    }

    #[test]
    fn only_google_maps_receives_mode_tokens() {
        assert_eq!(
            TransportMode::Transit.identifier_for(App::GoogleMaps),
            Some("transit")
        );
        assert_eq!(TransportMode::Taxi.identifier_for(App::GoogleMaps), None);

        for app in App::ALL.into_iter().filter(|app| *app != App::GoogleMaps) {
            for mode in TransportMode::ALL {
                assert_eq!(mode.identifier_for(app), None, "{app} / {mode}");
            }
        }
    }
}
