//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before
//! execution. All operations are queued and executed during the final `build()` call.

use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables, fixtures and
/// mock feed endpoints. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_map_tables: bool,
    include_roster_tables: bool,

    // Database fixtures to insert
    airports: Vec<(String, bool)>, // (airport_id, hub)
    airlines: Vec<(i32, String)>,  // (airline_id, icao)
    settings: Vec<(String, String)>,

    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    // Pre-configured endpoint shortcuts
    vatsim_feed_endpoints: Vec<(String, usize)>, // (body, expected_requests)
    ivao_feed_endpoints: Vec<(String, usize)>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables, fixtures or mock endpoints configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_map_tables: false,
            include_roster_tables: false,
            airports: Vec::new(),
            airlines: Vec::new(),
            settings: Vec::new(),
            mock_builders: Vec::new(),
            vatsim_feed_endpoints: Vec::new(),
            ivao_feed_endpoints: Vec::new(),
        }
    }

    /// Add every table read when building flight maps.
    ///
    /// Settings, users, airports, airlines, flights, PIREPs, aircraft, subfleets, rank and type
    /// rating links, sceneries and monthly assignments.
    pub fn with_map_tables(mut self) -> Self {
        self.include_map_tables = true;
        self
    }

    /// Add every table read when building network rosters.
    ///
    /// Settings, users, roles, custom profile fields, airlines, aircraft, PIREPs and the
    /// network snapshots.
    pub fn with_roster_tables(mut self) -> Self {
        self.include_roster_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during
    /// `build()`. Chain multiple calls to add multiple tables.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use flightdeck_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), flightdeck_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Airport)
    ///     .with_table(Flight)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert an airport into the database, see [`factory::airport`](crate::fixtures::factory::airport).
    pub fn with_airport(mut self, airport_id: &str, hub: bool) -> Self {
        self.airports.push((airport_id.to_string(), hub));
        self
    }

    /// Insert an active airline into the database.
    pub fn with_airline(mut self, airline_id: i32, icao: &str) -> Self {
        self.airlines.push((airline_id, icao.to_string()));
        self
    }

    /// Insert a site setting, keys are given in their dotted form.
    pub fn with_setting(mut self, key: &str, value: &str) -> Self {
        self.settings.push((key.to_string(), value.to_string()));
        self
    }

    /// Add a mock VATSIM data feed returning `body`.
    ///
    /// The mock verifies it was called exactly `expected_requests` times.
    pub fn with_vatsim_feed(mut self, body: String, expected_requests: usize) -> Self {
        self.vatsim_feed_endpoints.push((body, expected_requests));
        self
    }

    /// Add a mock IVAO whazzup feed returning `body`.
    ///
    /// The mock verifies it was called exactly `expected_requests` times.
    pub fn with_ivao_feed(mut self, body: String, expected_requests: usize) -> Self {
        self.ivao_feed_endpoints.push((body, expected_requests));
        self
    }

    /// Add a custom mock endpoint with full control.
    ///
    /// Use this for failures and other responses not covered by the feed helpers.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test setup by creating all configured tables, fixtures, and mock endpoints.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (table groups first, then custom tables)
    /// 2. Inserts database fixtures (airports, airlines, settings)
    /// 3. Creates mock HTTP endpoints (custom endpoints, then feed endpoints)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        let mut all_tables = Vec::new();

        if self.include_map_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Setting),
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::Airport),
                schema.create_table_from_entity(entity::prelude::Airline),
                schema.create_table_from_entity(entity::prelude::Flight),
                schema.create_table_from_entity(entity::prelude::Pirep),
                schema.create_table_from_entity(entity::prelude::Aircraft),
                schema.create_table_from_entity(entity::prelude::Subfleet),
                schema.create_table_from_entity(entity::prelude::RankSubfleet),
                schema.create_table_from_entity(entity::prelude::TyperatingUser),
                schema.create_table_from_entity(entity::prelude::TyperatingSubfleet),
                schema.create_table_from_entity(entity::prelude::DisposableScenery),
                schema.create_table_from_entity(entity::prelude::DisposableAssignment),
            ]);
        } else if self.include_roster_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Setting),
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::Airline),
                schema.create_table_from_entity(entity::prelude::Aircraft),
                schema.create_table_from_entity(entity::prelude::Pirep),
            ]);
        }

        if self.include_roster_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::RoleUser),
                schema.create_table_from_entity(entity::prelude::UserField),
                schema.create_table_from_entity(entity::prelude::UserFieldValue),
                schema.create_table_from_entity(entity::prelude::DisposableWhazzup),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for (airport_id, hub) in self.airports {
            setup.ops().insert_airport(&airport_id, hub).await?;
        }

        for (airline_id, icao) in self.airlines {
            setup.ops().insert_airline(airline_id, &icao, true).await?;
        }

        for (key, value) in self.settings {
            setup.ops().insert_setting(&key, &value).await?;
        }

        // 3. Create mock endpoints
        // Custom endpoints first so tests can stack responses for the same path
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (body, expected) in self.vatsim_feed_endpoints {
            mocks.push(setup.network().create_vatsim_feed_endpoint(body, expected));
        }

        for (body, expected) in self.ivao_feed_endpoints {
            mocks.push(setup.network().create_ivao_feed_endpoint(body, expected));
        }

        // Store mocks in setup so they live as long as the test
        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
