//! Tests for the online network roster endpoint.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{Duration, Utc};
use flightdeck::{
    model::roster::RosterViewModel,
    server::controller::whazzup::{get_whazzup, WhazzupParams},
};

use super::*;

/// Expect 200 OK with the VATSIM roster downloaded from the feed
#[tokio::test]
async fn returns_vatsim_roster() -> Result<(), TestError> {
    let logon = Utc::now() - Duration::minutes(30);
    let feed = factory::vatsim_feed(vec![
        factory::vatsim_pilot(1000001, "DLH4AB", logon),
        factory::vatsim_pilot(1000002, "BAW12", logon),
    ]);
    let mut test = TestBuilder::new()
        .with_roster_tables()
        .with_airline(1, "DLH")
        .with_vatsim_feed(feed, 1)
        .build()
        .await?;
    let mut user = factory::user(1, "Jane Doe");
    user.vatsim_id = Some("1000001".to_string());
    test.user().insert_user_with(user).await?;

    let params = WhazzupParams {
        network: Some("vatsim".to_string()),
        ..Default::default()
    };
    let result = get_whazzup(State(test.to_app_state()), test.session.clone(), Query(params)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let roster: RosterViewModel = read_json(resp).await;
    assert_eq!(roster.network, "VATSIM");
    assert!(roster.error.is_none());
    assert_eq!(roster.pilots.len(), 1);
    assert_eq!(roster.pilots[0].callsign, "DLH4AB");
    assert_eq!(roster.pilots[0].user_id, Some(1));
    test.assert_mocks();

    Ok(())
}

/// Expect IVAO when no network is selected and an error message when its feed is down
#[tokio::test]
async fn reports_unavailable_ivao_feed() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .with_airline(1, "DLH")
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/whazzup")
                .with_status(503)
                .expect(1)
                .create()
        })
        .build()
        .await?;

    let result = get_whazzup(
        State(test.to_app_state()),
        test.session.clone(),
        Query(WhazzupParams::default()),
    )
    .await;

    assert!(result.is_ok());
    let roster: RosterViewModel = read_json(result.unwrap().into_response()).await;
    assert_eq!(roster.network, "IVAO");
    assert!(roster.error.is_some());
    assert!(roster.pilots.is_empty());
    test.assert_mocks();

    Ok(())
}
