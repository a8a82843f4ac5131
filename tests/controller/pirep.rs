//! Tests for the PIREP listing endpoint.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use entity::sea_orm_active_enums::PirepState;
use flightdeck::{
    model::pirep::PirepPageDto,
    server::controller::pirep::{get_pireps, PageParams},
};

use super::*;

/// Expect 200 OK with the first page of PIREPs
#[tokio::test]
async fn returns_first_page() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Airline)
        .with_table(entity::prelude::Aircraft)
        .with_table(entity::prelude::Pirep)
        .with_table(entity::prelude::PirepComment)
        .with_airline(1, "DLH")
        .build()
        .await?;
    test.user().insert_user(1, "Jane Doe").await?;
    test.ops()
        .insert_pirep("p1", 1, "EDDF", "EGLL", PirepState::Accepted)
        .await?;

    let result = get_pireps(State(test.to_app_state()), Query(PageParams::default())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let page: PirepPageDto = read_json(resp).await;
    assert_eq!(page.pireps.len(), 1);
    assert_eq!(page.pireps[0].airline.as_deref(), Some("DLH"));
    assert_eq!(page.pagination.page, 1);
    assert_eq!(page.pagination.total_items, 1);

    Ok(())
}

/// Expect 500 Internal Server Error when the tables are missing
#[tokio::test]
async fn fails_without_tables() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_pireps(State(test.to_app_state()), Query(PageParams::default())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
