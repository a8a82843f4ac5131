//! Tests for the map endpoint.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use flightdeck::{
    model::map::MapViewModel,
    server::{
        controller::map::{get_map, MapParams},
        model::session::user::SessionViewer,
    },
};

use super::*;

async fn setup() -> Result<TestContext, TestError> {
    let mut test = TestBuilder::new()
        .with_map_tables()
        .with_airport("EDDF", true)
        .with_airport("EGLL", false)
        .with_airport("LFPG", false)
        .with_airline(1, "DLH")
        .build()
        .await?;

    test.ops()
        .insert_flight("f1", 1, 100, "EDDF", "EGLL")
        .await?;
    test.ops()
        .insert_flight("f2", 1, 101, "EGLL", "EDDF")
        .await?;
    test.ops()
        .insert_flight("f3", 1, 200, "EDDF", "LFPG")
        .await?;

    Ok(test)
}

/// Expect 200 OK with the generic route map when no source is given
#[tokio::test]
async fn returns_generic_map_by_default() -> Result<(), TestError> {
    let test = setup().await?;

    let result = get_map(
        State(test.to_app_state()),
        test.session.clone(),
        Query(MapParams::default()),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let map: MapViewModel = read_json(resp).await;
    assert_eq!(map.source, "generic");
    assert_eq!(map.flight_count, Some(3));
    assert_eq!(map.city_pairs.len(), 2);
    assert_eq!(map.hubs.len(), 1);

    Ok(())
}

/// Expect the airport map when the source is an airport code
#[tokio::test]
async fn returns_airport_map_for_airport_source() -> Result<(), TestError> {
    let test = setup().await?;

    let params = MapParams {
        source: Some("LFPG".to_string()),
        ..Default::default()
    };
    let result = get_map(State(test.to_app_state()), test.session.clone(), Query(params)).await;

    assert!(result.is_ok());
    let map: MapViewModel = read_json(result.unwrap().into_response()).await;
    assert_eq!(map.source, "airport");
    assert_eq!(map.city_pairs.len(), 1);

    Ok(())
}

/// Expect an empty user map for an anonymous visitor
#[tokio::test]
async fn returns_empty_user_map_for_anonymous_visitor() -> Result<(), TestError> {
    let test = setup().await?;

    let params = MapParams {
        source: Some("user".to_string()),
        ..Default::default()
    };
    let result = get_map(State(test.to_app_state()), test.session.clone(), Query(params)).await;

    assert!(result.is_ok());
    let map: MapViewModel = read_json(result.unwrap().into_response()).await;
    assert_eq!(map.source, "user");
    assert!(map.city_pairs.is_empty());

    Ok(())
}

/// Expect the viewer's PIREPs on the user map
#[tokio::test]
async fn returns_user_map_for_logged_in_viewer() -> Result<(), TestError> {
    use entity::sea_orm_active_enums::PirepState;

    let mut test = setup().await?;
    test.user().insert_user(1, "Jane Doe").await?;
    test.ops()
        .insert_pirep("p1", 1, "EDDF", "EGLL", PirepState::Accepted)
        .await?;
    SessionViewer::insert(&test.session, 1).await.unwrap();

    let params = MapParams {
        source: Some("user".to_string()),
        ..Default::default()
    };
    let result = get_map(State(test.to_app_state()), test.session.clone(), Query(params)).await;

    assert!(result.is_ok());
    let map: MapViewModel = read_json(result.unwrap().into_response()).await;
    assert_eq!(map.flight_count, Some(1));
    assert_eq!(map.city_pairs.len(), 1);

    Ok(())
}
