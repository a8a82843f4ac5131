//! Flight map aggregation.
//!
//! Turns the schedule, a pilot's PIREPs, the fleet or a pilot's sceneries into the markers and
//! city pair edges of a [`MapViewModel`].

pub mod city_pair;
pub mod marker;
pub mod mode;

use std::collections::{BTreeSet, HashMap, HashSet};

use chrono::{Datelike, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::map::{MapViewModel, RouteKind, SceneryLayersDto},
    server::{
        config::ServiceOptions,
        data::{
            aircraft::AircraftRepository,
            airline::AirlineRepository,
            airport::AirportRepository,
            assignment::AssignmentRepository,
            flight::{FlightQuery, FlightRepository, FlightScope},
            pirep::PirepRepository,
            scenery::SceneryRepository,
            setting::SettingRepository,
            subfleet::SubfleetRepository,
            user::UserRepository,
        },
        error::Error,
        model::db::{AirportModel, FlightModel, PirepModel, UserModel},
        service::{
            map::{
                city_pair::{build_city_pairs, location, RouteRecord},
                marker::{airport_markers, map_icons, overlays, parse_coordinates, scenery_layers},
                mode::MapMode,
            },
            subfleet::SubfleetService,
        },
    },
};

pub const CENTER_COORDS_SETTING: &str = "acars.center_coords";
pub const ONLY_FROM_CURRENT_SETTING: &str = "pilots.only_flights_from_current";
pub const RESTRICT_TO_COMPANY_SETTING: &str = "pilots.restrict_to_company";

/// Per request map options, unset flags fall back to the site settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapOptions {
    /// Only show flights flagged visible, ignored by the user and fleet maps
    pub visible: bool,
    pub limit: Option<u64>,
    /// Only show flights departing the viewer's airport (generic map)
    pub location: Option<bool>,
    /// Only show flights of the viewer's airline (generic and airport maps)
    pub company: Option<bool>,
    pub popups: Option<bool>,
    /// Airline whose fleet is shown (fleet map)
    pub airline: Option<i32>,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            visible: true,
            limit: None,
            location: None,
            company: None,
            popups: None,
            airline: None,
        }
    }
}

/// Restrictions resolved from options, settings and the viewer.
struct RouteFilter<'v> {
    viewer: Option<&'v UserModel>,
    viewer_airport: Option<&'v AirportModel>,
    limit_location: bool,
    limit_company: bool,
    visible_only: bool,
    limit: Option<u64>,
}

pub struct MapService<'a> {
    db: &'a DatabaseConnection,
    options: &'a ServiceOptions,
}

impl<'a> MapService<'a> {
    /// Creates a new instance of [`MapService`]
    pub fn new(db: &'a DatabaseConnection, options: &'a ServiceOptions) -> Self {
        Self { db, options }
    }

    /// Builds the map for a mode as seen by the viewer.
    ///
    /// Never fails because of inconsistent data: records referencing unknown airports are
    /// skipped and modes needing a viewer render empty for anonymous visitors.
    ///
    /// # Arguments
    /// - `mode` - What the map shows
    /// - `viewer_id` - Pilot id of the logged in viewer, if any
    /// - `options` - Per request filters and popup preference
    ///
    /// # Returns
    /// - `Ok(MapViewModel)` - Markers, city pairs and layers of the map
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn build_map_view(
        &self,
        mode: MapMode,
        viewer_id: Option<i32>,
        options: MapOptions,
    ) -> Result<MapViewModel, Error> {
        let setting_repo = SettingRepository::new(self.db);

        let mut center = setting_repo
            .get(CENTER_COORDS_SETTING)
            .await?
            .as_deref()
            .and_then(parse_coordinates);
        let limit_location = setting_repo.get_bool(ONLY_FROM_CURRENT_SETTING, false).await?
            || options.location.unwrap_or(false);
        let limit_company = setting_repo
            .get_bool(RESTRICT_TO_COMPANY_SETTING, false)
            .await?
            || options.company.unwrap_or(false);

        let detailed_popups = match mode {
            MapMode::Airline(_) => options.popups.unwrap_or(false),
            _ => options.popups.unwrap_or(true),
        };

        let viewer = match viewer_id {
            Some(user_id) => UserRepository::new(self.db).get(user_id).await?,
            None => None,
        };
        let viewer_airport = self.get_viewer_airport(viewer.as_ref()).await?;

        let mut view = MapViewModel {
            source: mode.label().to_string(),
            center: None,
            aircraft_count: None,
            flight_count: None,
            scenery_count: None,
            icons: map_icons(),
            hubs: Vec::new(),
            airports: Vec::new(),
            city_pairs: Vec::new(),
            sceneries: SceneryLayersDto::default(),
            overlays: Vec::new(),
        };

        match &mode {
            MapMode::Fleet => {
                let subfleet_service = SubfleetService::new(self.db);
                let mut subfleet_ids = SubfleetRepository::new(self.db)
                    .get_ids(options.airline)
                    .await?;
                let restriction = subfleet_service.get_restriction().await?;
                if let Some(allowed) = subfleet_service
                    .get_allowable_subfleets(viewer.as_ref(), restriction)
                    .await?
                {
                    subfleet_ids.retain(|id| allowed.contains(id));
                }

                let aircraft = AircraftRepository::new(self.db)
                    .get_parked_in_subfleets(subfleet_ids)
                    .await?;
                let locations: BTreeSet<String> = aircraft
                    .iter()
                    .filter_map(|ac| ac.airport_id.clone())
                    .collect();
                let airports = AirportRepository::new(self.db)
                    .get_by_ids(locations.into_iter().collect())
                    .await?;

                (view.hubs, view.airports) = airport_markers(&airports, Some(aircraft.as_slice()));
                view.aircraft_count = Some(aircraft.len());
            }
            MapMode::Aerodromes => {
                let airports = AirportRepository::new(self.db).get_all().await?;

                (view.hubs, view.airports) = airport_markers(&airports, None);
            }
            MapMode::Scenery => {
                let sceneries = match &viewer {
                    Some(viewer) => SceneryRepository::new(self.db).get_by_user(viewer.id).await?,
                    None => Vec::new(),
                };
                let airport_ids: BTreeSet<String> =
                    sceneries.iter().map(|s| s.airport_id.clone()).collect();
                let airports: HashMap<String, AirportModel> = AirportRepository::new(self.db)
                    .get_by_ids(airport_ids.into_iter().collect())
                    .await?
                    .into_iter()
                    .map(|airport| (airport.id.clone(), airport))
                    .collect();

                view.sceneries = scenery_layers(&sceneries, &airports);
                view.scenery_count = Some(view.sceneries.len());
            }
            route_mode => {
                let filter = RouteFilter {
                    viewer: viewer.as_ref(),
                    viewer_airport: viewer_airport.as_ref(),
                    limit_location,
                    limit_company,
                    visible_only: options.visible,
                    limit: options.limit,
                };
                let records = self.get_route_records(route_mode, &filter).await?;

                let flown: HashSet<(String, String)> = match &viewer {
                    Some(viewer) if mode.colours_flown_pairs() => PirepRepository::new(self.db)
                        .get_flown_city_pairs(viewer.id)
                        .await?
                        .into_iter()
                        .collect(),
                    _ => HashSet::new(),
                };

                let airport_ids: BTreeSet<String> = records
                    .iter()
                    .flat_map(|r| [r.dpt_airport_id.clone(), r.arr_airport_id.clone()])
                    .collect();
                let airports: HashMap<String, AirportModel> = AirportRepository::new(self.db)
                    .get_by_ids_with_trashed(airport_ids.into_iter().collect())
                    .await?
                    .into_iter()
                    .map(|airport| (airport.id.clone(), airport))
                    .collect();

                // Large maps only get the bare labels
                let detailed = detailed_popups && records.len() < self.options.popup_threshold;
                let city_pairs = build_city_pairs(&records, &airports, &flown, detailed);

                match route_mode {
                    MapMode::Generic if limit_location => {
                        if let Some(airport) = viewer_airport.as_ref() {
                            center = Some(location(airport));
                        }
                    }
                    MapMode::Airport(airport_id) => {
                        if let Some(airport) =
                            city_pairs.airports.iter().find(|a| &a.id == airport_id)
                        {
                            center = Some(location(airport));
                        }
                    }
                    _ => {}
                }

                (view.hubs, view.airports) = airport_markers(&city_pairs.airports, None);
                view.city_pairs = city_pairs.pairs;
                view.flight_count = Some(records.len());
            }
        }

        view.center = center;
        view.overlays = overlays(
            &view.hubs,
            &view.airports,
            view.city_pairs.len(),
            &view.sceneries,
        );

        Ok(view)
    }

    /// Current airport of the viewer, falling back to their home airport.
    async fn get_viewer_airport(
        &self,
        viewer: Option<&UserModel>,
    ) -> Result<Option<AirportModel>, Error> {
        let Some(viewer) = viewer else {
            return Ok(None);
        };

        let airport_repo = AirportRepository::new(self.db);

        for airport_id in [&viewer.curr_airport_id, &viewer.home_airport_id]
            .into_iter()
            .flatten()
        {
            if let Some(airport) = airport_repo.get(airport_id).await? {
                return Ok(Some(airport));
            }
        }

        Ok(None)
    }

    /// Flights or PIREPs drawn by a route mode.
    async fn get_route_records(
        &self,
        mode: &MapMode,
        filter: &RouteFilter<'_>,
    ) -> Result<Vec<RouteRecord>, Error> {
        let flight_repo = FlightRepository::new(self.db);

        // Company restricted maps have nothing to show without knowing the viewer's airline
        let company_airline = match (mode, filter.limit_company) {
            (MapMode::Generic | MapMode::Airport(_), true) => match filter.viewer {
                Some(viewer) => Some(viewer.airline_id),
                None => return Ok(Vec::new()),
            },
            _ => None,
        };

        let flights = match mode {
            MapMode::User => {
                let Some(viewer) = filter.viewer else {
                    return Ok(Vec::new());
                };
                let pireps = PirepRepository::new(self.db)
                    .get_accepted_by_user(viewer.id, filter.limit)
                    .await?;

                return self.pirep_records(pireps).await;
            }
            MapMode::Generic => {
                let scope = if filter.limit_location {
                    match filter.viewer_airport {
                        Some(airport) => FlightScope::DepartingFrom(airport.id.clone()),
                        None => return Ok(Vec::new()),
                    }
                } else {
                    FlightScope::All
                };

                flight_repo
                    .find_active(FlightQuery {
                        scope,
                        airline_id: company_airline,
                        visible_only: filter.visible_only,
                        limit: filter.limit,
                    })
                    .await?
            }
            MapMode::Airline(airline_id) => {
                flight_repo
                    .find_active(FlightQuery {
                        scope: FlightScope::All,
                        airline_id: Some(*airline_id),
                        visible_only: filter.visible_only,
                        limit: filter.limit,
                    })
                    .await?
            }
            MapMode::Airport(airport_id) => {
                flight_repo
                    .find_active(FlightQuery {
                        scope: FlightScope::TouchingAirport(airport_id.clone()),
                        airline_id: company_airline,
                        visible_only: filter.visible_only,
                        limit: filter.limit,
                    })
                    .await?
            }
            MapMode::Assignment => {
                let Some(viewer) = filter.viewer else {
                    return Ok(Vec::new());
                };
                if !self.options.assignments_enabled {
                    return Ok(Vec::new());
                }

                let now = Utc::now();
                let flight_ids = AssignmentRepository::new(self.db)
                    .get_flight_ids(viewer.id, now.year(), now.month() as i32)
                    .await?;

                flight_repo
                    .find_active(FlightQuery {
                        scope: FlightScope::Ids(flight_ids),
                        airline_id: None,
                        visible_only: filter.visible_only,
                        limit: filter.limit,
                    })
                    .await?
            }
            MapMode::Fleet | MapMode::Aerodromes | MapMode::Scenery => return Ok(Vec::new()),
        };

        self.flight_records(flights).await
    }

    async fn airline_codes(&self, airline_ids: Vec<i32>) -> Result<HashMap<i32, String>, Error> {
        let airlines = AirlineRepository::new(self.db)
            .get_by_ids_with_trashed(airline_ids)
            .await?;

        Ok(airlines
            .into_iter()
            .map(|airline| (airline.id, airline.code().to_string()))
            .collect())
    }

    async fn flight_records(&self, flights: Vec<FlightModel>) -> Result<Vec<RouteRecord>, Error> {
        let airline_ids: BTreeSet<i32> = flights.iter().map(|f| f.airline_id).collect();
        let codes = self.airline_codes(airline_ids.into_iter().collect()).await?;

        Ok(flights
            .into_iter()
            .map(|flight| RouteRecord {
                kind: RouteKind::Flight,
                airline_code: codes.get(&flight.airline_id).cloned(),
                flight_number: flight.flight_number.to_string(),
                id: flight.id,
                dpt_airport_id: flight.dpt_airport_id,
                arr_airport_id: flight.arr_airport_id,
            })
            .collect())
    }

    async fn pirep_records(&self, pireps: Vec<PirepModel>) -> Result<Vec<RouteRecord>, Error> {
        let airline_ids: BTreeSet<i32> = pireps.iter().map(|p| p.airline_id).collect();
        let codes = self.airline_codes(airline_ids.into_iter().collect()).await?;

        Ok(pireps
            .into_iter()
            .map(|pirep| RouteRecord {
                kind: RouteKind::Pirep,
                airline_code: codes.get(&pirep.airline_id).cloned(),
                flight_number: pirep.flight_number,
                id: pirep.id,
                dpt_airport_id: pirep.dpt_airport_id,
                arr_airport_id: pirep.arr_airport_id,
            })
            .collect())
    }
}
