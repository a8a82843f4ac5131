//! Factory functions for online network feed payloads.
//!
//! Payloads follow the layout the networks publish: VATSIM's `vatsim-data.json` and IVAO's
//! v2 whazzup, reduced to the fields the roster reads plus a few it ignores.

use chrono::{DateTime, Utc};
use serde_json::{json, Value};

/// Create a VATSIM pilot with an EDDF to EGLL flight plan.
pub fn vatsim_pilot(cid: i64, callsign: &str, logon_time: DateTime<Utc>) -> Value {
    json!({
        "cid": cid,
        "name": "Test Pilot",
        "callsign": callsign,
        "server": "GERMANY",
        "latitude": 50.03,
        "longitude": 8.57,
        "altitude": 35000,
        "logon_time": logon_time.to_rfc3339(),
        "flight_plan": {
            "aircraft_short": "A20N",
            "departure": "EDDF",
            "arrival": "EGLL",
            "remarks": "PBN/A1B1C1D1 /V/"
        }
    })
}

/// Wrap pilots into a full VATSIM data feed.
pub fn vatsim_feed(pilots: Vec<Value>) -> String {
    json!({
        "general": { "version": 3, "connected_clients": pilots.len() },
        "pilots": pilots,
        "controllers": [],
        "atis": [],
        "servers": []
    })
    .to_string()
}

/// Create an IVAO pilot online for `online_seconds` with an EDDF to LFPG flight plan.
pub fn ivao_pilot(
    user_id: i64,
    callsign: &str,
    online_seconds: i64,
    remarks: Option<&str>,
) -> Value {
    json!({
        "userId": user_id,
        "callsign": callsign,
        "serverId": "WS",
        "time": online_seconds,
        "flightPlan": {
            "aircraftId": "A320",
            "departureId": "EDDF",
            "arrivalId": "LFPG",
            "remarks": remarks
        }
    })
}

/// Wrap pilots into a full IVAO whazzup feed.
pub fn ivao_feed(pilots: Vec<Value>) -> String {
    json!({
        "updatedAt": Utc::now().to_rfc3339(),
        "clients": {
            "pilots": pilots,
            "atcs": [],
            "observers": []
        }
    })
    .to_string()
}
