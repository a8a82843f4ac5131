use serde::{Deserialize, Serialize};

/// Everything needed to draw one flight map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MapViewModel {
    /// Map mode that produced this view (`generic`, `airline`, `user`, `fleet`, `airport`,
    /// `assignment`, `aerodromes` or `scenery`)
    pub source: String,
    /// Initial map centre, `None` when neither the viewer nor the settings provide one
    pub center: Option<CoordinatesDto>,
    /// Number of aircraft shown, fleet mode only
    pub aircraft_count: Option<usize>,
    /// Number of flights or PIREPs the city pairs were built from
    pub flight_count: Option<usize>,
    /// Number of scenery airports, scenery mode only
    pub scenery_count: Option<usize>,
    pub icons: Vec<MapIconDto>,
    pub hubs: Vec<AirportMarkerDto>,
    pub airports: Vec<AirportMarkerDto>,
    pub city_pairs: Vec<CityPairDto>,
    pub sceneries: SceneryLayersDto,
    /// Layers that have at least one entry, in display order
    pub overlays: Vec<MapLayer>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CoordinatesDto {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MapIconDto {
    pub name: String,
    pub icon_url: String,
    pub shadow_url: String,
    pub icon_size: [u32; 2],
    pub shadow_size: [u32; 2],
}

/// Page an airport marker links to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MarkerLink {
    Hub,
    Airport,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AirportMarkerDto {
    pub id: String,
    pub name: String,
    pub location: CoordinatesDto,
    pub link: MarkerLink,
    /// Aircraft parked at the airport, fleet mode only
    pub parked: Option<ParkedAircraftDto>,
}

/// Parked aircraft summary of a marker: short lists are spelled out, long ones are counted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParkedAircraftDto {
    List { aircraft: Vec<ParkedAircraftEntryDto> },
    Count { count: usize },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ParkedAircraftEntryDto {
    pub registration: String,
    pub icao: Option<String>,
}

/// Colour class of a city pair relative to the routes the viewer has flown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CityPairColor {
    /// Viewer flew this exact direction
    Primary,
    /// Viewer only flew the reverse direction
    Secondary,
    Default,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CityPairDto {
    /// Direction independent key, the two airport ids in ascending order joined by `-`
    pub key: String,
    /// Departure of the first record seen for this pair
    pub departure: String,
    pub arrival: String,
    pub departure_location: CoordinatesDto,
    pub arrival_location: CoordinatesDto,
    pub color: CityPairColor,
    pub popup: CityPairPopupDto,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CityPairPopupDto {
    /// Bare `DEP - ARR` label
    Label { text: String },
    /// Every matching flight or PIREP, outbound direction first
    Routes { routes: Vec<RouteLinkDto> },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RouteKind {
    Flight,
    Pirep,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RouteLinkDto {
    pub kind: RouteKind,
    pub id: String,
    /// e.g. `ABC123 KJFK-EGLL`
    pub label: String,
}

/// Scenery markers grouped by simulator.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SceneryLayersDto {
    pub fs9: Vec<AirportMarkerDto>,
    pub fsx: Vec<AirportMarkerDto>,
    pub p3d: Vec<AirportMarkerDto>,
    pub xplane: Vec<AirportMarkerDto>,
    pub msfs: Vec<AirportMarkerDto>,
    pub other: Vec<AirportMarkerDto>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MapLayer {
    Hubs,
    Airports,
    Flights,
    Fs9,
    Fsx,
    P3d,
    Xplane,
    Msfs,
    OtherSims,
}
