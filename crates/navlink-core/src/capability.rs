use crate::app::App;
use crate::mode::TransportMode;

/// Whether `app` can express a route in `mode`. No mode means no filtering.
pub fn supports(app: App, mode: Option<TransportMode>) -> bool {
    let Some(mode) = mode else {
        return true;
    };

    match app {
        App::AppleMaps => mode != TransportMode::Bicycling,
        App::GoogleMaps | App::Yandex | App::Moovit => true,
        App::Citymapper | App::Transit | App::DbNavigator => mode == TransportMode::Transit,
        App::Lyft | App::Uber | App::Olacabs => mode == TransportMode::Taxi,
        App::Navigon => matches!(mode, TransportMode::Driving | TransportMode::Walking),
        App::Waze => mode == TransportMode::Driving,
    }
}

pub fn supported_modes(app: App) -> Vec<TransportMode> {
    TransportMode::ALL
        .into_iter()
        .filter(|mode| supports(app, Some(*mode)))
        .collect()
}
