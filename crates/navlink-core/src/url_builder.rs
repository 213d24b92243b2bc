//! Per-app deep-link assembly.
//!
//! Each app has its own small builder; [`build`] gates on the capability
//! table and dispatches. Origin parameters that need a coordinate are left
//! out entirely when the origin has none, and blank names/addresses are
//! never emitted.

use crate::app::App;
use crate::capability::supports;
use crate::deep_link::{DeepLink, escape_path_segment};
use crate::location::{Destination, Origin};
use crate::mode::TransportMode;

const NAVIGON_FALLBACK_NAME: &str = "Destination";
const UBER_CURRENT_LOCATION: &str = "my_location";

/// Deep link for `app`, or `None` when the app cannot express the route in
/// `mode` or is opened through platform map APIs instead of a URL.
pub fn build(
    app: App,
    origin: Option<&Origin>,
    destination: &Destination,
    mode: Option<TransportMode>,
) -> Option<DeepLink> {
    if !supports(app, mode) {
        return None;
    }

    let route = Route {
        origin,
        destination,
        mode,
    };

    let link = match app {
        App::AppleMaps => return None,
        App::GoogleMaps => google_maps(&route),
        App::Citymapper => citymapper(&route),
        App::Transit => transit(&route),
        App::Lyft => lyft(&route),
        App::Uber => uber(&route),
        App::Navigon => navigon(&route),
        App::Waze => waze(&route),
        App::DbNavigator => db_navigator(&route),
        App::Yandex => yandex(&route),
        App::Moovit => moovit(&route),
        App::Olacabs => olacabs(&route),
    };

    Some(link)
}

struct Route<'a> {
    origin: Option<&'a Origin>,
    destination: &'a Destination,
    mode: Option<TransportMode>,
}

impl Route<'_> {
    fn origin_pair(&self) -> Option<String> {
        self.origin
            .and_then(|origin| origin.coordinate)
            .map(|coordinate| coordinate.pair_string())
    }

    fn origin_latitude(&self) -> Option<String> {
        self.origin
            .and_then(|origin| origin.coordinate)
            .map(|coordinate| coordinate.latitude.to_string())
    }

    fn origin_longitude(&self) -> Option<String> {
        self.origin
            .and_then(|origin| origin.coordinate)
            .map(|coordinate| coordinate.longitude.to_string())
    }

    fn origin_name(&self) -> Option<&str> {
        self.origin.and_then(Origin::name_text)
    }

    fn origin_address(&self) -> Option<&str> {
        self.origin.and_then(Origin::address_text)
    }

    fn destination_pair(&self) -> String {
        self.destination.coordinate.pair_string()
    }

    fn destination_latitude(&self) -> String {
        self.destination.coordinate.latitude.to_string()
    }

    fn destination_longitude(&self) -> String {
        self.destination.coordinate.longitude.to_string()
    }
}

fn google_maps(route: &Route<'_>) -> DeepLink {
    let app = App::GoogleMaps;
    let mut link = DeepLink::new(app.url_scheme(), "maps");
    link.push_opt("saddr", route.origin_pair());
    link.push("daddr", route.destination_pair());
    link.push_opt(
        "directionsmode",
        route.mode.and_then(|mode| mode.identifier_for(app)),
    );
    link
}

fn citymapper(route: &Route<'_>) -> DeepLink {
    let mut link = DeepLink::new(App::Citymapper.url_scheme(), "directions");
    link.push("endcoord", route.destination_pair());
    link.push_opt("startcoord", route.origin_pair());
    link.push_opt("startname", route.origin_name());
    link.push_opt("startaddress", route.origin_address());
    link.push_opt("endname", route.destination.name_text());
    link.push_opt("endaddress", route.destination.address_text());
    link
}

fn transit(route: &Route<'_>) -> DeepLink {
    let mut link = DeepLink::new(App::Transit.url_scheme(), "directions");
    link.push_opt("from", route.origin_pair());
    link.push("to", route.destination_pair());
    link
}

fn lyft(route: &Route<'_>) -> DeepLink {
    let mut link = DeepLink::new(App::Lyft.url_scheme(), "ridetype");
    link.push("id", "lyft");
    link.push_opt("pickup[latitude]", route.origin_latitude());
    link.push_opt("pickup[longitude]", route.origin_longitude());
    link.push("destination[latitude]", route.destination_latitude());
    link.push("destination[longitude]", route.destination_longitude());
    link
}

fn uber(route: &Route<'_>) -> DeepLink {
    let mut link = DeepLink::new(App::Uber.url_scheme(), "");
    link.push("action", "setPickup");
    match (route.origin_latitude(), route.origin_longitude()) {
        (Some(latitude), Some(longitude)) => {
            link.push("pickup[latitude]", latitude);
            link.push("pickup[longitude]", longitude);
        }
        _ => link.push("pickup", UBER_CURRENT_LOCATION),
    }
    link.push("dropoff[latitude]", route.destination_latitude());
    link.push("dropoff[longitude]", route.destination_longitude());
    link.push_opt("dropoff[nickname]", route.destination.name_text());
    link
}

fn navigon(route: &Route<'_>) -> DeepLink {
    let name = route
        .destination
        .name_text()
        .unwrap_or(NAVIGON_FALLBACK_NAME);
    let path = format!(
        "coordinate/{}/{}/{}",
        escape_path_segment(name),
        route.destination.coordinate.longitude,
        route.destination.coordinate.latitude
    );
    DeepLink::new(App::Navigon.url_scheme(), path)
}

fn waze(route: &Route<'_>) -> DeepLink {
    let mut link = DeepLink::new(App::Waze.url_scheme(), "");
    link.push("ll", route.destination_pair());
    link.push("navigate", "yes");
    link
}

fn db_navigator(route: &Route<'_>) -> DeepLink {
    let mut link = DeepLink::new(App::DbNavigator.url_scheme(), "query");
    let start = route
        .origin
        .and_then(|origin| origin.coordinate.map(|coordinate| (origin, coordinate)));
    if let Some((origin, coordinate)) = start {
        link.push("SKOORD", "1");
        link.push_opt("SNAME", origin.name_text());
        link.push("SY", coordinate.latitude_microdegrees().to_string());
        link.push("SX", coordinate.longitude_microdegrees().to_string());
    }

    let coordinate = route.destination.coordinate;
    link.push("ZKOORD", "1");
    link.push_opt("ZNAME", route.destination.name_text());
    link.push("ZY", coordinate.latitude_microdegrees().to_string());
    link.push("ZX", coordinate.longitude_microdegrees().to_string());
    link
}

fn yandex(route: &Route<'_>) -> DeepLink {
    let mut link = DeepLink::new(App::Yandex.url_scheme(), "build_route_on_map");
    link.push_opt("lat_from", route.origin_latitude());
    link.push_opt("lon_from", route.origin_longitude());
    link.push("lat_to", route.destination_latitude());
    link.push("lon_to", route.destination_longitude());
    link
}

fn moovit(route: &Route<'_>) -> DeepLink {
    let mut link = DeepLink::new(App::Moovit.url_scheme(), "directions");
    link.push_opt("origin_lat", route.origin_latitude());
    link.push_opt("origin_lon", route.origin_longitude());
    link.push_opt("orig_name", route.origin_name());
    link.push("dest_lat", route.destination_latitude());
    link.push("dest_lon", route.destination_longitude());
    link.push_opt("dest_name", route.destination.name_text());
    link
}

fn olacabs(route: &Route<'_>) -> DeepLink {
    let mut link = DeepLink::new(App::Olacabs.url_scheme(), "app/launch");
    link.push_opt("lat", route.origin_latitude());
    link.push_opt("lng", route.origin_longitude());
    link.push("drop_lat", route.destination_latitude());
    link.push("drop_long", route.destination_longitude());
    link.push_opt("drop_address", route.destination.address_text());
    link.push_opt("drop_name", route.destination.name_text());
    link
}
