use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

/// Which part of the schedule a flight query covers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlightScope {
    All,
    /// Flights leaving the given airport
    DepartingFrom(String),
    /// Flights leaving or arriving at the given airport
    TouchingAirport(String),
    /// Only the given flight ids
    Ids(Vec<String>),
}

/// Filters applied on top of the `active` flag shared by every flight map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlightQuery {
    pub scope: FlightScope,
    pub airline_id: Option<i32>,
    pub visible_only: bool,
    pub limit: Option<u64>,
}

impl FlightQuery {
    pub fn new(scope: FlightScope) -> Self {
        Self {
            scope,
            airline_id: None,
            visible_only: false,
            limit: None,
        }
    }
}

pub struct FlightRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FlightRepository<'a, C> {
    /// Creates a new instance of [`FlightRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Active, non deleted flights matching the query, ordered by flight number
    ///
    /// For [`FlightScope::TouchingAirport`] the airline and visibility filters apply to both
    /// the departure and the arrival side of the condition.
    pub async fn find_active(
        &self,
        query: FlightQuery,
    ) -> Result<Vec<entity::flight::Model>, DbErr> {
        use entity::flight::Column;

        let mut condition = Condition::all()
            .add(Column::Active.eq(true))
            .add(Column::DeletedAt.is_null());

        if let Some(airline_id) = query.airline_id {
            condition = condition.add(Column::AirlineId.eq(airline_id));
        }

        if query.visible_only {
            condition = condition.add(Column::Visible.eq(true));
        }

        match query.scope {
            FlightScope::All => {}
            FlightScope::DepartingFrom(airport_id) => {
                condition = condition.add(Column::DptAirportId.eq(airport_id));
            }
            FlightScope::TouchingAirport(airport_id) => {
                condition = condition.add(
                    Condition::any()
                        .add(Column::DptAirportId.eq(airport_id.clone()))
                        .add(Column::ArrAirportId.eq(airport_id)),
                );
            }
            FlightScope::Ids(flight_ids) => {
                if flight_ids.is_empty() {
                    return Ok(Vec::new());
                }
                condition = condition.add(Column::Id.is_in(flight_ids));
            }
        }

        let mut select = entity::prelude::Flight::find()
            .filter(condition)
            .order_by_asc(Column::FlightNumber);

        if let Some(limit) = query.limit {
            select = select.limit(limit);
        }

        select.all(self.db).await
    }
}

#[cfg(test)]
mod tests {
    mod find_active {
        use flightdeck_test_utils::prelude::*;

        use crate::server::data::flight::{FlightQuery, FlightRepository, FlightScope};

        /// Expect inactive flights to never be returned
        #[tokio::test]
        async fn skips_inactive_flights() -> Result<(), TestError> {
            let mut test = TestBuilder::new()
                .with_table(entity::prelude::Flight)
                .build()
                .await?;
            test.ops().insert_flight("f1", 1, 100, "KJFK", "EGLL").await?;
            let mut inactive = factory::flight("f2", 1, 200, "KJFK", "LFPG");
            inactive.active = false;
            test.ops().insert_flight_with(inactive).await?;

            let flight_repo = FlightRepository::new(&test.db);
            let flights = flight_repo
                .find_active(FlightQuery::new(FlightScope::All))
                .await?;

            assert_eq!(flights.len(), 1);
            assert_eq!(flights[0].id, "f1");

            Ok(())
        }

        /// Expect the airport scope to match both directions and keep the airline filter on each
        #[tokio::test]
        async fn touching_airport_matches_both_directions() -> Result<(), TestError> {
            let mut test = TestBuilder::new()
                .with_table(entity::prelude::Flight)
                .build()
                .await?;
            test.ops().insert_flight("out", 1, 1, "EDDF", "EGLL").await?;
            test.ops().insert_flight("in", 1, 2, "LFPG", "EDDF").await?;
            test.ops().insert_flight("other", 1, 3, "LFPG", "EGLL").await?;
            test.ops().insert_flight("foreign", 2, 4, "EDDF", "KJFK").await?;

            let flight_repo = FlightRepository::new(&test.db);
            let flights = flight_repo
                .find_active(FlightQuery {
                    airline_id: Some(1),
                    ..FlightQuery::new(FlightScope::TouchingAirport("EDDF".to_string()))
                })
                .await?;

            let ids: Vec<&str> = flights.iter().map(|f| f.id.as_str()).collect();
            assert_eq!(ids, vec!["out", "in"]);

            Ok(())
        }

        /// Expect the limit to be applied after ordering by flight number
        #[tokio::test]
        async fn applies_limit_in_flight_number_order() -> Result<(), TestError> {
            let mut test = TestBuilder::new()
                .with_table(entity::prelude::Flight)
                .build()
                .await?;
            test.ops().insert_flight("c", 1, 300, "KJFK", "EGLL").await?;
            test.ops().insert_flight("a", 1, 100, "KJFK", "EGLL").await?;
            test.ops().insert_flight("b", 1, 200, "KJFK", "EGLL").await?;

            let flight_repo = FlightRepository::new(&test.db);
            let flights = flight_repo
                .find_active(FlightQuery {
                    limit: Some(2),
                    ..FlightQuery::new(FlightScope::All)
                })
                .await?;

            let ids: Vec<&str> = flights.iter().map(|f| f.id.as_str()).collect();
            assert_eq!(ids, vec!["a", "b"]);

            Ok(())
        }

        /// Expect an empty id scope to return nothing
        #[tokio::test]
        async fn empty_id_scope_returns_nothing() -> Result<(), TestError> {
            let mut test = TestBuilder::new()
                .with_table(entity::prelude::Flight)
                .build()
                .await?;
            test.ops().insert_flight("f1", 1, 100, "KJFK", "EGLL").await?;

            let flight_repo = FlightRepository::new(&test.db);
            let flights = flight_repo
                .find_active(FlightQuery::new(FlightScope::Ids(Vec::new())))
                .await?;

            assert!(flights.is_empty());

            Ok(())
        }
    }
}
