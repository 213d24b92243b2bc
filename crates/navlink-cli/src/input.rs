use navlink_core::{Coordinate, Destination, Origin, ParseError, TransportMode};

/// Raw route arguments as they arrive from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteArgs {
    pub to: String,
    pub to_name: Option<String>,
    pub to_address: Option<String>,
    pub from: Option<String>,
    pub from_name: Option<String>,
    pub from_address: Option<String>,
    pub mode: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RouteRequest {
    pub origin: Option<Origin>,
    pub destination: Destination,
    pub mode: Option<TransportMode>,
}

impl RouteRequest {
    pub fn origin(&self) -> Option<&Origin> {
        self.origin.as_ref()
    }
}

pub fn parse_route(args: &RouteArgs) -> Result<RouteRequest, ParseError> {
    let destination = Destination {
        coordinate: args.to.parse::<Coordinate>()?,
        name: clean_text(args.to_name.as_deref()),
        address: clean_text(args.to_address.as_deref()),
    };

    let origin_coordinate = match args.from.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => Some(raw.parse::<Coordinate>()?),
        _ => None,
    };
    let origin = Origin {
        coordinate: origin_coordinate,
        name: clean_text(args.from_name.as_deref()),
        address: clean_text(args.from_address.as_deref()),
    };
    let origin = (origin != Origin::default()).then_some(origin);

    let mode = parse_mode(args.mode.as_deref())?;

    Ok(RouteRequest {
        origin,
        destination,
        mode,
    })
}

pub fn parse_mode(raw: Option<&str>) -> Result<Option<TransportMode>, ParseError> {
    match raw.map(str::trim) {
        Some(value) if !value.is_empty() => value.parse::<TransportMode>().map(Some),
        _ => Ok(None),
    }
}

fn clean_text(raw: Option<&str>) -> Option<String> {
    let compact = raw?.split_whitespace().collect::<Vec<_>>().join(" ");
    if compact.is_empty() {
        None
    } else {
        Some(compact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(to: &str) -> RouteArgs {
        RouteArgs {
            to: to.to_string(),
            ..RouteArgs::default()
        }
    }

    #[test]
    fn parse_route_without_origin_fields_has_no_origin() {
        let request = parse_route(&args("52.52,13.405")).expect("route should parse");

        assert_eq!(request.origin, None);
        assert_eq!(request.destination.coordinate, Coordinate::new(52.52, 13.405));
        assert_eq!(request.mode, None);
    }

    #[test]
    fn parse_route_keeps_name_only_origin() {
        let mut raw = args("52.52,13.405");
        raw.from_name = Some("  Home  ".to_string());
        raw.from = Some("   ".to_string());

        let request = parse_route(&raw).expect("route should parse");
        let origin = request.origin.expect("origin should exist");

        assert_eq!(origin.coordinate, None);
        assert_eq!(origin.name.as_deref(), Some("Home"));
    }

    #[test]
    fn parse_route_compacts_names_and_drops_blank_ones() {
        let mut raw = args("48.8566, 2.3522");
        raw.to_name = Some("Gare\n du  Nord".to_string());
        raw.to_address = Some(" \t ".to_string());
        raw.mode = Some("Transit".to_string());

        let request = parse_route(&raw).expect("route should parse");

        assert_eq!(request.destination.name.as_deref(), Some("Gare du Nord"));
        assert_eq!(request.destination.address, None);
        assert_eq!(request.mode, Some(TransportMode::Transit));
    }

    #[test]
    fn parse_route_surfaces_invalid_coordinates() {
        let mut raw = args("52.52,13.405");
        raw.from = Some("somewhere".to_string());

        assert_eq!(
            parse_route(&raw),
            Err(ParseError::InvalidCoordinate("somewhere".to_string()))
        );
    }

    #[test]
    fn parse_mode_treats_blank_as_absent() {
        assert_eq!(parse_mode(Some("  ")), Ok(None));
        assert_eq!(parse_mode(None), Ok(None));
        assert_eq!(
            parse_mode(Some("zeppelin")),
            Err(ParseError::UnknownMode("zeppelin".to_string()))
        );
    }
}
