use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Online pilots of one network who fly for the airline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RosterViewModel {
    /// `VATSIM` or `IVAO`
    pub network: String,
    pub pilots: Vec<RosterEntryDto>,
    /// Set when the network feed could not be refreshed
    pub error: Option<String>,
    /// Whether the viewer holds a role allowing them to see the network checks
    pub checks: bool,
    /// When the pilot list was downloaded from the network
    pub downloaded_at: Option<NaiveDateTime>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RosterEntryDto {
    pub user_id: Option<i32>,
    pub name: Option<String>,
    pub name_private: Option<String>,
    pub network_id: String,
    pub callsign: String,
    pub server_name: Option<String>,
    pub online_minutes: i64,
    pub pirep: Option<ActivePirepDto>,
    /// Callsign prefix matches an active airline
    pub airline: bool,
    pub flight_plan: Option<FlightPlanDto>,
    /// IVAO only: remarks carry the virtual airline code
    pub vasys_check: Option<bool>,
}

impl RosterEntryDto {
    /// Flight plan as a single line, or the placeholder when none was filed.
    pub fn flight_plan_label(&self) -> String {
        match &self.flight_plan {
            Some(plan) => plan.to_string(),
            None => FlightPlanDto::NONE_LABEL.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FlightPlanDto {
    pub aircraft_type: String,
    pub departure: String,
    pub arrival: String,
}

impl FlightPlanDto {
    pub const NONE_LABEL: &'static str = "No ATC Flight Plan!";
}

impl std::fmt::Display for FlightPlanDto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} | {} > {}",
            self.aircraft_type, self.departure, self.arrival
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ActivePirepDto {
    pub id: String,
    /// Airline ICAO followed by the flight number
    pub flight: String,
    pub dpt_airport_id: String,
    pub arr_airport_id: String,
    pub aircraft_registration: Option<String>,
}
