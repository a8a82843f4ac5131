//! Tests for HTTP controller endpoints.
//!
//! Each handler is called directly with state and session from a `TestContext`, the response
//! status and JSON body are checked.

mod map;
mod news;
mod pirep;
mod whazzup;

use axum::{body::to_bytes, response::Response};
use flightdeck_test_utils::prelude::*;
use serde::de::DeserializeOwned;

/// Reads a JSON response body into its view-model
async fn read_json<T: DeserializeOwned>(response: Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
