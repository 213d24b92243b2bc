use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ParseError;

/// Navigation and ride-hailing apps a deep link can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum App {
    AppleMaps,
    GoogleMaps,
    Citymapper,
    Transit,
    Lyft,
    Uber,
    Navigon,
    Waze,
    DbNavigator,
    Yandex,
    Moovit,
    Olacabs,
}

impl App {
    pub const ALL: [App; 12] = [
        App::AppleMaps,
        App::GoogleMaps,
        App::Citymapper,
        App::Transit,
        App::Lyft,
        App::Uber,
        App::Navigon,
        App::Waze,
        App::DbNavigator,
        App::Yandex,
        App::Moovit,
        App::Olacabs,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::AppleMaps => "apple-maps",
            Self::GoogleMaps => "google-maps",
            Self::Citymapper => "citymapper",
            Self::Transit => "transit",
            Self::Lyft => "lyft",
            Self::Uber => "uber",
            Self::Navigon => "navigon",
            Self::Waze => "waze",
            Self::DbNavigator => "db-navigator",
            Self::Yandex => "yandex",
            Self::Moovit => "moovit",
            Self::Olacabs => "olacabs",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::AppleMaps => "Apple Maps",
            Self::GoogleMaps => "Google Maps",
            Self::Citymapper => "Citymapper",
            Self::Transit => "Transit App",
            Self::Lyft => "Lyft",
            Self::Uber => "Uber",
            Self::Navigon => "Navigon",
            Self::Waze => "Waze",
            Self::DbNavigator => "DB Navigator",
            Self::Yandex => "Yandex.Navi",
            Self::Moovit => "Moovit",
            Self::Olacabs => "Ola",
        }
    }

    /// Scheme token of the produced URL. Apple Maps is opened through the
    /// platform map APIs and only carries a placeholder.
    pub fn url_scheme(self) -> &'static str {
        match self {
            Self::AppleMaps => "",
            Self::GoogleMaps => "comgooglemaps",
            Self::Citymapper => "citymapper",
            Self::Transit => "transit",
            Self::Lyft => "lyft",
            Self::Uber => "uber",
            Self::Navigon => "navigon",
            Self::Waze => "waze",
            Self::DbNavigator => "dbnavigator",
            Self::Yandex => "yandexnavi",
            Self::Moovit => "moovit",
            Self::Olacabs => "olacabs",
        }
    }

    pub fn is_platform_native(self) -> bool {
        matches!(self, Self::AppleMaps)
    }
}

impl fmt::Display for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for App {
    type Err = ParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized: String = raw
            .trim()
            .chars()
            .filter(|ch| !matches!(ch, '-' | '_' | ' ' | '.'))
            .flat_map(char::to_lowercase)
            .collect();

        let app = match normalized.as_str() {
            "applemaps" | "apple" => Self::AppleMaps,
            "googlemaps" | "google" | "comgooglemaps" => Self::GoogleMaps,
            "citymapper" => Self::Citymapper,
            "transit" | "transitapp" => Self::Transit,
            "lyft" => Self::Lyft,
            "uber" => Self::Uber,
            "navigon" => Self::Navigon,
            "waze" => Self::Waze,
            "dbnavigator" | "db" => Self::DbNavigator,
            "yandex" | "yandexnavi" => Self::Yandex,
            "moovit" => Self::Moovit,
            "olacabs" | "ola" => Self::Olacabs,
            _ => return Err(ParseError::UnknownApp(raw.trim().to_string())),
        };

        Ok(app)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn catalog_ids_and_schemes_are_unique() {
        let ids: HashSet<_> = App::ALL.iter().map(|app| app.as_str()).collect();
        let schemes: HashSet<_> = App::ALL.iter().map(|app| app.url_scheme()).collect();

        assert_eq!(ids.len(), App::ALL.len());
        assert_eq!(schemes.len(), App::ALL.len());
    }

    #[test]
    fn only_apple_maps_uses_placeholder_scheme() {
        for app in App::ALL {
            assert_eq!(
                app.url_scheme().is_empty(),
                app.is_platform_native(),
                "unexpected scheme for {app}"
            );
        }
    }

    #[test]
    fn app_ids_round_trip_through_from_str() {
        for app in App::ALL {
            assert_eq!(app.as_str().parse::<App>(), Ok(app));
        }
    }

    #[test]
    fn app_parse_accepts_camel_case_and_aliases() {
        assert_eq!("googleMaps".parse::<App>(), Ok(App::GoogleMaps));
        assert_eq!(" DB_Navigator ".parse::<App>(), Ok(App::DbNavigator));
        assert_eq!("Yandex.Navi".parse::<App>(), Ok(App::Yandex));
        assert_eq!("ola".parse::<App>(), Ok(App::Olacabs));
    }

    #[test]
    fn app_parse_rejects_unknown_id() {
        assert_eq!(
            "mapquest".parse::<App>(),
            Err(ParseError::UnknownApp("mapquest".to_string()))
        );
    }

    #[test]
    fn app_serializes_as_kebab_case_id() {
        let json = serde_json::to_string(&App::DbNavigator).expect("serialize app");
        assert_eq!(json, "\"db-navigator\"");
    }
}
