//! Factory functions for generating flight operations models.
//!
//! In-memory model instances with standard test values, usable directly in unit tests or
//! modified and inserted with the `insert_*_with` fixtures.

use chrono::Utc;
use entity::sea_orm_active_enums::{AircraftState, AircraftStatus, PirepState};

use crate::model::{
    AircraftModel, AirlineModel, AirportModel, FlightModel, PirepModel, SceneryModel,
};

/// Create an airport at 50.0, 8.0 named after its ICAO code.
pub fn airport(airport_id: &str, hub: bool) -> AirportModel {
    AirportModel {
        id: airport_id.to_string(),
        iata: None,
        icao: airport_id.to_string(),
        name: format!("{} Airport", airport_id),
        lat: 50.0,
        lon: 8.0,
        hub,
        deleted_at: None,
    }
}

/// Create an active airline without an IATA code.
pub fn airline(airline_id: i32, icao: &str) -> AirlineModel {
    AirlineModel {
        id: airline_id,
        icao: icao.to_string(),
        iata: None,
        name: format!("{} Virtual", icao),
        active: true,
        deleted_at: None,
    }
}

/// Create an active, visible scheduled flight.
pub fn flight(
    flight_id: &str,
    airline_id: i32,
    flight_number: i32,
    dpt_airport_id: &str,
    arr_airport_id: &str,
) -> FlightModel {
    FlightModel {
        id: flight_id.to_string(),
        airline_id,
        flight_number,
        dpt_airport_id: dpt_airport_id.to_string(),
        arr_airport_id: arr_airport_id.to_string(),
        active: true,
        visible: true,
        deleted_at: None,
    }
}

/// Create a PIREP for flight 100 of airline 1, submitted now.
pub fn pirep(
    pirep_id: &str,
    user_id: i32,
    dpt_airport_id: &str,
    arr_airport_id: &str,
    state: PirepState,
) -> PirepModel {
    let now = Utc::now().naive_utc();

    PirepModel {
        id: pirep_id.to_string(),
        user_id,
        airline_id: 1,
        aircraft_id: None,
        flight_number: "100".to_string(),
        dpt_airport_id: dpt_airport_id.to_string(),
        arr_airport_id: arr_airport_id.to_string(),
        state,
        submitted_at: Some(now),
        created_at: now,
        updated_at: now,
        deleted_at: None,
    }
}

/// Create an active aircraft parked at `airport_id`.
pub fn aircraft(
    aircraft_id: i32,
    subfleet_id: i32,
    airport_id: &str,
    registration: &str,
) -> AircraftModel {
    AircraftModel {
        id: aircraft_id,
        subfleet_id,
        airport_id: Some(airport_id.to_string()),
        registration: registration.to_string(),
        icao: Some("A320".to_string()),
        state: AircraftState::Parked,
        status: AircraftStatus::Active,
    }
}

/// Create a scenery entry, `simulator` uses the stored simulator codes.
pub fn scenery(user_id: i32, airport_id: &str, simulator: i32) -> SceneryModel {
    let now = Utc::now().naive_utc();

    SceneryModel {
        id: 1,
        user_id,
        airport_id: airport_id.to_string(),
        region: None,
        simulator,
        notes: None,
        created_at: now,
        updated_at: now,
    }
}
