//! City pair construction.
//!
//! Flights and PIREPs are reduced to one edge per airport pair. The pair keeps the direction
//! of the first record seen for it; records flying the same pair in either direction only show
//! up in the detailed popup.

use std::collections::{HashMap, HashSet};

use crate::{
    model::map::{
        CityPairColor, CityPairDto, CityPairPopupDto, CoordinatesDto, RouteKind, RouteLinkDto,
    },
    server::model::db::AirportModel,
};

/// A flight or PIREP reduced to what the map needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteRecord {
    pub kind: RouteKind,
    pub id: String,
    pub airline_code: Option<String>,
    pub flight_number: String,
    pub dpt_airport_id: String,
    pub arr_airport_id: String,
}

impl RouteRecord {
    fn link(&self) -> RouteLinkDto {
        RouteLinkDto {
            kind: self.kind,
            id: self.id.clone(),
            label: format!(
                "{}{} {}-{}",
                self.airline_code.as_deref().unwrap_or_default(),
                self.flight_number,
                self.dpt_airport_id,
                self.arr_airport_id
            ),
        }
    }
}

/// Edges plus every airport touched by a drawable record, in order of first appearance.
#[derive(Debug, Default)]
pub struct CityPairs {
    pub pairs: Vec<CityPairDto>,
    pub airports: Vec<AirportModel>,
}

/// Direction independent key of an airport pair.
pub fn canonical_key(a: &str, b: &str) -> String {
    if a <= b {
        format!("{}-{}", a, b)
    } else {
        format!("{}-{}", b, a)
    }
}

pub fn location(airport: &AirportModel) -> CoordinatesDto {
    CoordinatesDto {
        lat: airport.lat,
        lon: airport.lon,
    }
}

/// Builds the city pairs of a set of records.
///
/// Records whose departure or arrival airport is unknown are logged and skipped.
///
/// # Arguments
/// - `records` - Flights or PIREPs in display order
/// - `airports` - Airports by id, soft deleted ones included
/// - `flown` - Departure/arrival pairs of the viewer's accepted PIREPs
/// - `detailed_popups` - List every matching record in the popup instead of a bare label
pub fn build_city_pairs(
    records: &[RouteRecord],
    airports: &HashMap<String, AirportModel>,
    flown: &HashSet<(String, String)>,
    detailed_popups: bool,
) -> CityPairs {
    let mut result = CityPairs::default();
    let mut seen_airports: HashSet<&str> = HashSet::new();
    let mut seen_pairs: HashSet<String> = HashSet::new();

    for record in records {
        let (Some(dpt), Some(arr)) = (
            airports.get(&record.dpt_airport_id),
            airports.get(&record.arr_airport_id),
        ) else {
            tracing::error!(
                "Map record {} ({} -> {}) references an unknown airport, skipped",
                record.id,
                record.dpt_airport_id,
                record.arr_airport_id
            );
            continue;
        };

        for airport in [dpt, arr] {
            if seen_airports.insert(airport.id.as_str()) {
                result.airports.push(airport.clone());
            }
        }

        let key = canonical_key(&dpt.id, &arr.id);
        if !seen_pairs.insert(key.clone()) {
            continue;
        }

        let popup = if detailed_popups {
            CityPairPopupDto::Routes {
                routes: routes_between(records, &dpt.id, &arr.id),
            }
        } else {
            CityPairPopupDto::Label {
                text: format!("{} - {}", dpt.id, arr.id),
            }
        };

        result.pairs.push(CityPairDto {
            key,
            departure: dpt.id.clone(),
            arrival: arr.id.clone(),
            departure_location: location(dpt),
            arrival_location: location(arr),
            color: pair_color(flown, &dpt.id, &arr.id),
            popup,
        });
    }

    result
}

/// Records flying `dpt -> arr` followed by those flying back.
fn routes_between(records: &[RouteRecord], dpt: &str, arr: &str) -> Vec<RouteLinkDto> {
    let outbound = records
        .iter()
        .filter(|r| r.dpt_airport_id == dpt && r.arr_airport_id == arr);
    let inbound = records
        .iter()
        .filter(|r| dpt != arr && r.dpt_airport_id == arr && r.arr_airport_id == dpt);

    outbound.chain(inbound).map(RouteRecord::link).collect()
}

fn pair_color(flown: &HashSet<(String, String)>, dpt: &str, arr: &str) -> CityPairColor {
    if flown.contains(&(dpt.to_string(), arr.to_string())) {
        CityPairColor::Primary
    } else if flown.contains(&(arr.to_string(), dpt.to_string())) {
        CityPairColor::Secondary
    } else {
        CityPairColor::Default
    }
}
