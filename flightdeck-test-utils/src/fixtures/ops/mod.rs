//! Flight operations fixture utilities.
//!
//! Inserts airports, airlines, schedules, PIREPs, fleet, sceneries, assignments, settings
//! and news into the test database.

pub mod factory;

use chrono::{NaiveDateTime, Utc};
use entity::sea_orm_active_enums::PirepState;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{
        AircraftModel, AirlineModel, AirportModel, FlightModel, PirepModel, SceneryModel,
    },
    TestContext,
};

impl TestContext {
    pub fn ops<'a>(&'a mut self) -> OpsFixtures<'a> {
        OpsFixtures { setup: self }
    }
}

pub struct OpsFixtures<'a> {
    pub setup: &'a mut TestContext,
}

impl<'a> OpsFixtures<'a> {
    pub async fn insert_airport(
        &self,
        airport_id: &str,
        hub: bool,
    ) -> Result<AirportModel, TestError> {
        self.insert_airport_with(factory::airport(airport_id, hub))
            .await
    }

    pub async fn insert_airport_at(
        &self,
        airport_id: &str,
        lat: f64,
        lon: f64,
        hub: bool,
    ) -> Result<AirportModel, TestError> {
        let mut airport = factory::airport(airport_id, hub);
        airport.lat = lat;
        airport.lon = lon;

        self.insert_airport_with(airport).await
    }

    pub async fn insert_airport_with(&self, airport: AirportModel) -> Result<AirportModel, TestError> {
        Ok(
            entity::prelude::Airport::insert(entity::airport::ActiveModel {
                id: ActiveValue::Set(airport.id),
                iata: ActiveValue::Set(airport.iata),
                icao: ActiveValue::Set(airport.icao),
                name: ActiveValue::Set(airport.name),
                lat: ActiveValue::Set(airport.lat),
                lon: ActiveValue::Set(airport.lon),
                hub: ActiveValue::Set(airport.hub),
                deleted_at: ActiveValue::Set(airport.deleted_at),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Marks an existing airport as deleted
    pub async fn soft_delete_airport(&self, airport_id: &str) -> Result<(), TestError> {
        entity::prelude::Airport::update(entity::airport::ActiveModel {
            id: ActiveValue::Unchanged(airport_id.to_string()),
            deleted_at: ActiveValue::Set(Some(Utc::now().naive_utc())),
            ..Default::default()
        })
        .exec(&self.setup.db)
        .await?;

        Ok(())
    }

    pub async fn insert_airline(
        &self,
        airline_id: i32,
        icao: &str,
        active: bool,
    ) -> Result<AirlineModel, TestError> {
        let mut airline = factory::airline(airline_id, icao);
        airline.active = active;

        self.insert_airline_with(airline).await
    }

    pub async fn insert_airline_with(&self, airline: AirlineModel) -> Result<AirlineModel, TestError> {
        Ok(
            entity::prelude::Airline::insert(entity::airline::ActiveModel {
                id: ActiveValue::Set(airline.id),
                icao: ActiveValue::Set(airline.icao),
                iata: ActiveValue::Set(airline.iata),
                name: ActiveValue::Set(airline.name),
                active: ActiveValue::Set(airline.active),
                deleted_at: ActiveValue::Set(airline.deleted_at),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_flight(
        &self,
        flight_id: &str,
        airline_id: i32,
        flight_number: i32,
        dpt_airport_id: &str,
        arr_airport_id: &str,
    ) -> Result<FlightModel, TestError> {
        self.insert_flight_with(factory::flight(
            flight_id,
            airline_id,
            flight_number,
            dpt_airport_id,
            arr_airport_id,
        ))
        .await
    }

    pub async fn insert_flight_with(&self, flight: FlightModel) -> Result<FlightModel, TestError> {
        Ok(
            entity::prelude::Flight::insert(entity::flight::ActiveModel {
                id: ActiveValue::Set(flight.id),
                airline_id: ActiveValue::Set(flight.airline_id),
                flight_number: ActiveValue::Set(flight.flight_number),
                dpt_airport_id: ActiveValue::Set(flight.dpt_airport_id),
                arr_airport_id: ActiveValue::Set(flight.arr_airport_id),
                active: ActiveValue::Set(flight.active),
                visible: ActiveValue::Set(flight.visible),
                deleted_at: ActiveValue::Set(flight.deleted_at),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_pirep(
        &self,
        pirep_id: &str,
        user_id: i32,
        dpt_airport_id: &str,
        arr_airport_id: &str,
        state: PirepState,
    ) -> Result<PirepModel, TestError> {
        self.insert_pirep_with(factory::pirep(
            pirep_id,
            user_id,
            dpt_airport_id,
            arr_airport_id,
            state,
        ))
        .await
    }

    /// Inserts a PIREP, its pilot must already exist
    pub async fn insert_pirep_with(&self, pirep: PirepModel) -> Result<PirepModel, TestError> {
        Ok(
            entity::prelude::Pirep::insert(entity::pirep::ActiveModel {
                id: ActiveValue::Set(pirep.id),
                user_id: ActiveValue::Set(pirep.user_id),
                airline_id: ActiveValue::Set(pirep.airline_id),
                aircraft_id: ActiveValue::Set(pirep.aircraft_id),
                flight_number: ActiveValue::Set(pirep.flight_number),
                dpt_airport_id: ActiveValue::Set(pirep.dpt_airport_id),
                arr_airport_id: ActiveValue::Set(pirep.arr_airport_id),
                state: ActiveValue::Set(pirep.state),
                submitted_at: ActiveValue::Set(pirep.submitted_at),
                created_at: ActiveValue::Set(pirep.created_at),
                updated_at: ActiveValue::Set(pirep.updated_at),
                deleted_at: ActiveValue::Set(pirep.deleted_at),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_pirep_comment(
        &self,
        pirep_id: &str,
        user_id: i32,
    ) -> Result<entity::pirep_comment::Model, TestError> {
        Ok(
            entity::prelude::PirepComment::insert(entity::pirep_comment::ActiveModel {
                pirep_id: ActiveValue::Set(pirep_id.to_string()),
                user_id: ActiveValue::Set(user_id),
                comment: ActiveValue::Set("Nice landing".to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_subfleet(
        &self,
        subfleet_id: i32,
        airline_id: Option<i32>,
    ) -> Result<entity::subfleet::Model, TestError> {
        Ok(
            entity::prelude::Subfleet::insert(entity::subfleet::ActiveModel {
                id: ActiveValue::Set(subfleet_id),
                airline_id: ActiveValue::Set(airline_id),
                name: ActiveValue::Set(format!("Subfleet {}", subfleet_id)),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_aircraft(
        &self,
        aircraft_id: i32,
        subfleet_id: i32,
        airport_id: &str,
        registration: &str,
    ) -> Result<AircraftModel, TestError> {
        self.insert_aircraft_with(factory::aircraft(
            aircraft_id,
            subfleet_id,
            airport_id,
            registration,
        ))
        .await
    }

    pub async fn insert_aircraft_with(
        &self,
        aircraft: AircraftModel,
    ) -> Result<AircraftModel, TestError> {
        Ok(
            entity::prelude::Aircraft::insert(entity::aircraft::ActiveModel {
                id: ActiveValue::Set(aircraft.id),
                subfleet_id: ActiveValue::Set(aircraft.subfleet_id),
                airport_id: ActiveValue::Set(aircraft.airport_id),
                registration: ActiveValue::Set(aircraft.registration),
                icao: ActiveValue::Set(aircraft.icao),
                state: ActiveValue::Set(aircraft.state),
                status: ActiveValue::Set(aircraft.status),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_scenery(
        &self,
        user_id: i32,
        airport_id: &str,
        simulator: i32,
    ) -> Result<SceneryModel, TestError> {
        let scenery = factory::scenery(user_id, airport_id, simulator);

        Ok(
            entity::prelude::DisposableScenery::insert(entity::disposable_scenery::ActiveModel {
                user_id: ActiveValue::Set(scenery.user_id),
                airport_id: ActiveValue::Set(scenery.airport_id),
                region: ActiveValue::Set(scenery.region),
                simulator: ActiveValue::Set(scenery.simulator),
                notes: ActiveValue::Set(scenery.notes),
                created_at: ActiveValue::Set(scenery.created_at),
                updated_at: ActiveValue::Set(scenery.updated_at),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_assignment(
        &self,
        user_id: i32,
        flight_id: &str,
        year: i32,
        month: i32,
    ) -> Result<entity::disposable_assignment::Model, TestError> {
        Ok(entity::prelude::DisposableAssignment::insert(
            entity::disposable_assignment::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                flight_id: ActiveValue::Set(flight_id.to_string()),
                assignment_year: ActiveValue::Set(year),
                assignment_month: ActiveValue::Set(month),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Inserts a site setting, `key` in its dotted form
    pub async fn insert_setting(
        &self,
        key: &str,
        value: &str,
    ) -> Result<entity::setting::Model, TestError> {
        Ok(
            entity::prelude::Setting::insert(entity::setting::ActiveModel {
                id: ActiveValue::Set(key.replace('.', "_")),
                value: ActiveValue::Set(Some(value.to_string())),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Inserts a news item, its author must already exist
    pub async fn insert_news(
        &self,
        user_id: i32,
        subject: &str,
        created_at: NaiveDateTime,
    ) -> Result<entity::news::Model, TestError> {
        Ok(
            entity::prelude::News::insert(entity::news::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                subject: ActiveValue::Set(subject.to_string()),
                body: ActiveValue::Set(format!("<p>{}</p>", subject)),
                created_at: ActiveValue::Set(created_at),
                updated_at: ActiveValue::Set(created_at),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
