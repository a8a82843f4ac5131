//! Tests for the news listing endpoint.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{Duration, Utc};
use flightdeck::{
    model::news::NewsPageDto,
    server::controller::{news::get_news, pirep::PageParams},
};

use super::*;

/// Expect the requested page of news, newest first
#[tokio::test]
async fn returns_requested_page() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::News)
        .build()
        .await?;
    test.user().insert_user(1, "Jane Doe").await?;
    let now = Utc::now().naive_utc();
    for i in 0..12 {
        test.ops()
            .insert_news(1, &format!("News {}", i), now - Duration::hours(i))
            .await?;
    }

    let params = PageParams { page: Some(2) };
    let result = get_news(State(test.to_app_state()), Query(params)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let page: NewsPageDto = read_json(resp).await;
    assert_eq!(page.news.len(), 2);
    assert_eq!(page.news[0].subject, "News 10");
    assert_eq!(page.pagination.total_pages, 2);

    Ok(())
}
