//! Online network fixture utilities.
//!
//! Stores network snapshots and creates the mock feed endpoints served by the test server.

pub mod factory;

use chrono::NaiveDateTime;
use mockito::Mock;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    constant::{IVAO_FEED_PATH, VATSIM_FEED_PATH},
    error::TestError,
    model::NetworkSnapshotModel,
    TestContext,
};

impl TestContext {
    pub fn network<'a>(&'a mut self) -> NetworkFixtures<'a> {
        NetworkFixtures { setup: self }
    }
}

pub struct NetworkFixtures<'a> {
    pub setup: &'a mut TestContext,
}

impl<'a> NetworkFixtures<'a> {
    /// Stores a snapshot of a network's pilot list as downloaded at `updated_at`
    pub async fn insert_snapshot(
        &self,
        network: &str,
        pilots_json: &str,
        updated_at: NaiveDateTime,
    ) -> Result<NetworkSnapshotModel, TestError> {
        Ok(
            entity::prelude::DisposableWhazzup::insert(entity::disposable_whazzup::ActiveModel {
                network: ActiveValue::Set(network.to_string()),
                pilots: ActiveValue::Set(pilots_json.to_string()),
                created_at: ActiveValue::Set(updated_at),
                updated_at: ActiveValue::Set(updated_at),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Create a mock VATSIM data feed endpoint.
    ///
    /// The mock verifies it was called exactly `expected_requests` times.
    pub fn create_vatsim_feed_endpoint(&mut self, body: String, expected_requests: usize) -> Mock {
        self.create_feed_endpoint(VATSIM_FEED_PATH, body, expected_requests)
    }

    /// Create a mock IVAO whazzup endpoint.
    ///
    /// The mock verifies it was called exactly `expected_requests` times.
    pub fn create_ivao_feed_endpoint(&mut self, body: String, expected_requests: usize) -> Mock {
        self.create_feed_endpoint(IVAO_FEED_PATH, body, expected_requests)
    }

    fn create_feed_endpoint(&mut self, path: &str, body: String, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("GET", path)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(expected_requests)
            .create()
    }
}
