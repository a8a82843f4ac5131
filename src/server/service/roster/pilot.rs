//! Pilot entries of the cached network feeds.
//!
//! Both networks publish the same information under different names and types. Entries are
//! normalized into [`NetworkPilot`] so the roster does not need to know which network it is
//! looking at.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    model::roster::FlightPlanDto,
    server::{
        error::feed::FeedError,
        service::roster::network::Network,
        util::time::{minutes_since, seconds_to_started_minutes},
    },
};

/// Network ids are numbers in the feeds, older snapshots may carry them as strings.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            Self::Number(id) => id.to_string(),
            Self::Text(id) => id.trim().to_string(),
        }
    }
}

#[derive(Deserialize, Debug)]
struct VatsimPilot {
    cid: RawId,
    callsign: String,
    server: Option<String>,
    logon_time: DateTime<Utc>,
    flight_plan: Option<VatsimFlightPlan>,
}

#[derive(Deserialize, Debug)]
struct VatsimFlightPlan {
    #[serde(default)]
    aircraft_short: String,
    #[serde(default)]
    departure: String,
    #[serde(default)]
    arrival: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct IvaoPilot {
    user_id: RawId,
    callsign: String,
    server_id: Option<String>,
    /// Seconds since the pilot connected
    time: i64,
    flight_plan: Option<IvaoFlightPlan>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct IvaoFlightPlan {
    #[serde(default)]
    aircraft_id: String,
    #[serde(default)]
    departure_id: String,
    #[serde(default)]
    arrival_id: String,
    remarks: Option<String>,
}

/// Connected pilot as published by either network.
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkPilot {
    pub network_id: String,
    pub callsign: String,
    pub server_name: Option<String>,
    pub online_minutes: i64,
    pub flight_plan: Option<FlightPlanDto>,
    /// Flight plan remarks, IVAO only
    pub remarks: Option<String>,
}

impl NetworkPilot {
    fn from_vatsim(pilot: VatsimPilot, now: DateTime<Utc>) -> Self {
        Self {
            network_id: pilot.cid.into_string(),
            callsign: pilot.callsign,
            server_name: pilot.server,
            online_minutes: minutes_since(pilot.logon_time, now),
            flight_plan: pilot.flight_plan.map(|plan| FlightPlanDto {
                aircraft_type: plan.aircraft_short,
                departure: plan.departure,
                arrival: plan.arrival,
            }),
            remarks: None,
        }
    }

    fn from_ivao(pilot: IvaoPilot) -> Self {
        let (flight_plan, remarks) = match pilot.flight_plan {
            Some(plan) => (
                Some(FlightPlanDto {
                    aircraft_type: plan.aircraft_id,
                    departure: plan.departure_id,
                    arrival: plan.arrival_id,
                }),
                plan.remarks,
            ),
            None => (None, None),
        };

        Self {
            network_id: pilot.user_id.into_string(),
            callsign: pilot.callsign,
            server_name: pilot.server_id,
            online_minutes: seconds_to_started_minutes(pilot.time),
            flight_plan,
            remarks,
        }
    }
}

/// Parses the pilot list stored in a network snapshot.
///
/// Entries that do not match the network's layout are logged and skipped, a single broken
/// entry does not take the whole roster down.
///
/// # Arguments
/// - `network` - Network the snapshot was downloaded from
/// - `raw` - JSON array stored in the snapshot
/// - `now` - Reference time for VATSIM online minutes
///
/// # Returns
/// - `Ok(Vec<NetworkPilot>)` - Normalized pilots in feed order
/// - `Err(FeedError::UnexpectedPayload)` - The snapshot is not a JSON array
pub fn parse_pilots(
    network: Network,
    raw: &str,
    now: DateTime<Utc>,
) -> Result<Vec<NetworkPilot>, FeedError> {
    let entries: Vec<Value> =
        serde_json::from_str(raw).map_err(|e| FeedError::UnexpectedPayload {
            network: network.name(),
            reason: e.to_string(),
        })?;

    let pilots = entries
        .into_iter()
        .filter_map(|entry| {
            let parsed = match network {
                Network::Vatsim => serde_json::from_value::<VatsimPilot>(entry)
                    .map(|pilot| NetworkPilot::from_vatsim(pilot, now)),
                Network::Ivao => {
                    serde_json::from_value::<IvaoPilot>(entry).map(NetworkPilot::from_ivao)
                }
            };

            match parsed {
                Ok(pilot) => Some(pilot),
                Err(e) => {
                    tracing::warn!("Skipping unreadable {} pilot entry: {}", network.name(), e);

                    None
                }
            }
        })
        .collect();

    Ok(pilots)
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use serde_json::json;

    use super::*;

    /// Expect online minutes from the logon time, 45 minutes ago gives 45
    #[test]
    fn vatsim_online_minutes_from_logon() {
        let now = Utc::now();
        let raw = json!([{
            "cid": 1234567,
            "callsign": "DLH4AB",
            "server": "GERMANY",
            "logon_time": (now - Duration::minutes(45)).to_rfc3339(),
            "flight_plan": {
                "aircraft_short": "A20N",
                "departure": "EDDF",
                "arrival": "EGLL",
                "remarks": "PBN/A1B1"
            }
        }])
        .to_string();

        let pilots = parse_pilots(Network::Vatsim, &raw, now).unwrap();

        assert_eq!(pilots.len(), 1);
        assert_eq!(pilots[0].network_id, "1234567");
        assert_eq!(pilots[0].online_minutes, 45);
        assert_eq!(pilots[0].server_name.as_deref(), Some("GERMANY"));
        assert_eq!(
            pilots[0].flight_plan.as_ref().unwrap().to_string(),
            "A20N | EDDF > EGLL"
        );
        assert_eq!(pilots[0].remarks, None);
    }

    /// Expect IVAO online seconds rounded up, 61 seconds gives 2 minutes
    #[test]
    fn ivao_online_minutes_round_up() {
        let raw = json!([{
            "userId": 654321,
            "callsign": "DLH4AB",
            "serverId": "WS",
            "time": 61,
            "flightPlan": {
                "aircraftId": "A320",
                "departureId": "EDDF",
                "arrivalId": "LFPG",
                "remarks": "IVAOVA/DLH"
            }
        }])
        .to_string();

        let pilots = parse_pilots(Network::Ivao, &raw, Utc::now()).unwrap();

        assert_eq!(pilots[0].network_id, "654321");
        assert_eq!(pilots[0].online_minutes, 2);
        assert_eq!(pilots[0].remarks.as_deref(), Some("IVAOVA/DLH"));
    }

    /// Expect pilots without flight plan to have none
    #[test]
    fn missing_flight_plan_is_none() {
        let raw = json!([{
            "userId": "654321",
            "callsign": "DLH4AB",
            "serverId": null,
            "time": 0,
            "flightPlan": null
        }])
        .to_string();

        let pilots = parse_pilots(Network::Ivao, &raw, Utc::now()).unwrap();

        assert_eq!(pilots[0].network_id, "654321");
        assert_eq!(pilots[0].flight_plan, None);
    }

    /// Expect broken entries to be skipped while the rest is kept
    #[test]
    fn skips_unreadable_entries() {
        let raw = json!([
            { "callsign": "NOID" },
            { "cid": 1, "callsign": "DLH1", "server": null, "logon_time": Utc::now().to_rfc3339(), "flight_plan": null }
        ])
        .to_string();

        let pilots = parse_pilots(Network::Vatsim, &raw, Utc::now()).unwrap();

        assert_eq!(pilots.len(), 1);
        assert_eq!(pilots[0].callsign, "DLH1");
    }

    /// Expect an error when the snapshot is not a list
    #[test]
    fn fails_for_non_array_snapshot() {
        let result = parse_pilots(Network::Vatsim, "{\"pilots\": []}", Utc::now());

        assert!(matches!(result, Err(FeedError::UnexpectedPayload { .. })));
    }
}
