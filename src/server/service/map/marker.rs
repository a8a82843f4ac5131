//! Airport markers, marker icons and map layers.

use std::collections::HashMap;

use crate::{
    model::map::{
        AirportMarkerDto, CoordinatesDto, MapIconDto, MapLayer, MarkerLink, ParkedAircraftDto,
        ParkedAircraftEntryDto, SceneryLayersDto,
    },
    server::{
        model::db::{AircraftModel, AirportModel, SceneryModel},
        service::map::city_pair::location,
    },
};

/// Markers list parked aircraft individually up to this many, above it only a count is shown.
pub const PARKED_LIST_LIMIT: usize = 5;

static ICON_BASE_URL: &str =
    "https://raw.githubusercontent.com/pointhi/leaflet-color-markers/master/img";
static SHADOW_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/leaflet/0.7.7/images/marker-shadow.png";
const ICON_COLORS: [&str; 8] = [
    "blue", "gold", "green", "grey", "orange", "red", "violet", "yellow",
];

/// The coloured marker icons available to the map renderer.
pub fn map_icons() -> Vec<MapIconDto> {
    ICON_COLORS
        .iter()
        .map(|color| {
            let mut name = color.to_string();
            name[..1].make_ascii_uppercase();

            MapIconDto {
                name: format!("{}Icon", name),
                icon_url: format!("{}/marker-icon-2x-{}.png", ICON_BASE_URL, color),
                shadow_url: SHADOW_URL.to_string(),
                icon_size: [12, 20],
                shadow_size: [20, 20],
            }
        })
        .collect()
}

/// Parses a `lat,lon` coordinate string.
pub fn parse_coordinates(value: &str) -> Option<CoordinatesDto> {
    let (lat, lon) = value.split_once(',')?;

    Some(CoordinatesDto {
        lat: lat.trim().parse().ok()?,
        lon: lon.trim().parse().ok()?,
    })
}

fn parked_summary(aircraft: &[&AircraftModel]) -> ParkedAircraftDto {
    if (1..=PARKED_LIST_LIMIT).contains(&aircraft.len()) {
        ParkedAircraftDto::List {
            aircraft: aircraft
                .iter()
                .map(|ac| ParkedAircraftEntryDto {
                    registration: ac.registration.clone(),
                    icao: ac.icao.clone(),
                })
                .collect(),
        }
    } else {
        ParkedAircraftDto::Count {
            count: aircraft.len(),
        }
    }
}

/// Splits airports into hub and non hub markers.
///
/// When `aircraft` is given (fleet map) every marker carries the aircraft parked there.
pub fn airport_markers(
    airports: &[AirportModel],
    aircraft: Option<&[AircraftModel]>,
) -> (Vec<AirportMarkerDto>, Vec<AirportMarkerDto>) {
    let parked_by_airport: Option<HashMap<&str, Vec<&AircraftModel>>> = aircraft.map(|aircraft| {
        let mut parked: HashMap<&str, Vec<&AircraftModel>> = HashMap::new();
        for ac in aircraft {
            if let Some(airport_id) = ac.airport_id.as_deref() {
                parked.entry(airport_id).or_default().push(ac);
            }
        }
        parked
    });

    let mut hubs = Vec::new();
    let mut others = Vec::new();

    for airport in airports {
        let parked = parked_by_airport.as_ref().map(|parked| {
            let here = parked
                .get(airport.id.as_str())
                .map(Vec::as_slice)
                .unwrap_or_default();
            parked_summary(here)
        });

        let link = if airport.hub {
            MarkerLink::Hub
        } else {
            MarkerLink::Airport
        };
        let dto = marker(airport, link, parked);

        if airport.hub {
            hubs.push(dto);
        } else {
            others.push(dto);
        }
    }

    (hubs, others)
}

fn marker(
    airport: &AirportModel,
    link: MarkerLink,
    parked: Option<ParkedAircraftDto>,
) -> AirportMarkerDto {
    AirportMarkerDto {
        id: airport.id.clone(),
        name: airport.name.clone(),
        location: location(airport),
        link,
        parked,
    }
}

/// Simulator a scenery was installed for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Simulator {
    Fs9,
    Fsx,
    P3d,
    XPlane,
    Msfs,
    Other,
}

impl Simulator {
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => Self::Fs9,
            2 => Self::Fsx,
            3 => Self::P3d,
            4 => Self::XPlane,
            5 => Self::Msfs,
            _ => Self::Other,
        }
    }
}

/// Groups a pilot's sceneries into one marker layer per simulator.
///
/// Sceneries at airports missing from `airports` are left out.
pub fn scenery_layers(
    sceneries: &[SceneryModel],
    airports: &HashMap<String, AirportModel>,
) -> SceneryLayersDto {
    let mut layers = SceneryLayersDto::default();

    for scenery in sceneries {
        let Some(airport) = airports.get(&scenery.airport_id) else {
            continue;
        };

        let layer = match Simulator::from_code(scenery.simulator) {
            Simulator::Fs9 => &mut layers.fs9,
            Simulator::Fsx => &mut layers.fsx,
            Simulator::P3d => &mut layers.p3d,
            Simulator::XPlane => &mut layers.xplane,
            Simulator::Msfs => &mut layers.msfs,
            Simulator::Other => &mut layers.other,
        };
        layer.push(marker(airport, MarkerLink::Airport, None));
    }

    layers
}

impl SceneryLayersDto {
    pub fn len(&self) -> usize {
        self.fs9.len()
            + self.fsx.len()
            + self.p3d.len()
            + self.xplane.len()
            + self.msfs.len()
            + self.other.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Layers with at least one entry, in display order.
pub fn overlays(
    hubs: &[AirportMarkerDto],
    airports: &[AirportMarkerDto],
    city_pairs: usize,
    sceneries: &SceneryLayersDto,
) -> Vec<MapLayer> {
    [
        (MapLayer::Hubs, hubs.len()),
        (MapLayer::Airports, airports.len()),
        (MapLayer::Flights, city_pairs),
        (MapLayer::Fs9, sceneries.fs9.len()),
        (MapLayer::Fsx, sceneries.fsx.len()),
        (MapLayer::P3d, sceneries.p3d.len()),
        (MapLayer::Xplane, sceneries.xplane.len()),
        (MapLayer::Msfs, sceneries.msfs.len()),
        (MapLayer::OtherSims, sceneries.other.len()),
    ]
    .into_iter()
    .filter(|(_, count)| *count > 0)
    .map(|(layer, _)| layer)
    .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use flightdeck_test_utils::prelude::*;

    use super::*;

    #[test]
    fn provides_eight_icons() {
        let icons = map_icons();

        assert_eq!(icons.len(), 8);
        assert_eq!(icons[0].name, "BlueIcon");
        assert!(icons[0].icon_url.ends_with("marker-icon-2x-blue.png"));
    }

    #[test]
    fn parses_center_coordinates() {
        let center = parse_coordinates(" 50.03, 8.57 ").unwrap();

        assert_eq!(center.lat, 50.03);
        assert_eq!(center.lon, 8.57);
        assert!(parse_coordinates("50.03").is_none());
        assert!(parse_coordinates("north,east").is_none());
    }

    #[test]
    fn lists_few_parked_aircraft_and_counts_many() {
        let airports = vec![
            factory::airport("EDDF", true),
            factory::airport("EGLL", false),
            factory::airport("LFPG", false),
        ];
        let mut aircraft = vec![factory::aircraft(1, 1, "EDDF", "D-AIAA")];
        for id in 2..=7 {
            aircraft.push(factory::aircraft(id, 1, "EGLL", &format!("G-EUP{}", id)));
        }

        let (hubs, others) = airport_markers(&airports, Some(aircraft.as_slice()));

        assert_eq!(hubs.len(), 1);
        assert_eq!(hubs[0].link, MarkerLink::Hub);
        assert!(matches!(
            &hubs[0].parked,
            Some(ParkedAircraftDto::List { aircraft }) if aircraft.len() == 1
        ));
        assert_eq!(others[0].parked, Some(ParkedAircraftDto::Count { count: 6 }));
        assert_eq!(others[1].parked, Some(ParkedAircraftDto::Count { count: 0 }));
    }

    #[test]
    fn markers_without_fleet_have_no_parked_summary() {
        let airports = vec![factory::airport("EDDF", false)];

        let (hubs, others) = airport_markers(&airports, None);

        assert!(hubs.is_empty());
        assert_eq!(others[0].parked, None);
    }

    #[test]
    fn groups_sceneries_by_simulator() {
        let airports: HashMap<String, AirportModel> = ["EDDF", "EGLL", "LFPG"]
            .iter()
            .map(|id| (id.to_string(), factory::airport(id, false)))
            .collect();
        let sceneries = vec![
            factory::scenery(1, "EDDF", 5),
            factory::scenery(1, "EGLL", 0),
            factory::scenery(1, "LFPG", 9),
            factory::scenery(1, "KJFK", 5),
        ];

        let layers = scenery_layers(&sceneries, &airports);

        assert_eq!(layers.msfs.len(), 1);
        assert_eq!(layers.other.len(), 2);
        assert_eq!(layers.len(), 3);
        assert_eq!(
            overlays(&[], &[], 0, &layers),
            vec![MapLayer::Msfs, MapLayer::OtherSims]
        );
    }
}
