use std::collections::{BTreeSet, HashMap};

use sea_orm::DatabaseConnection;

use crate::{
    model::pirep::{PirepPageDto, PirepSummaryDto},
    server::{
        data::{aircraft::AircraftRepository, airline::AirlineRepository, pirep::PirepRepository},
        error::Error,
        util::{
            name::private_name,
            page::{page_index, pagination},
        },
    },
};

pub const PIREPS_PER_PAGE: u64 = 50;

pub struct PirepService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PirepService<'a> {
    /// Creates a new instance of [`PirepService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every PIREP that is no longer in progress, newest submission first.
    ///
    /// # Arguments
    /// - `page` - 1-based page number, first page when `None`
    ///
    /// # Returns
    /// - `Ok(PirepPageDto)` - PIREPs of the page with pilot, airline, aircraft and comment count
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn get_page(&self, page: Option<u64>) -> Result<PirepPageDto, Error> {
        let pirep_repo = PirepRepository::new(self.db);

        let page = page_index(page);
        let (pireps, total) = pirep_repo
            .get_page_excluding_in_progress(page, PIREPS_PER_PAGE)
            .await?;

        let airline_ids: BTreeSet<i32> = pireps.iter().map(|(p, _)| p.airline_id).collect();
        let airlines: HashMap<i32, String> = AirlineRepository::new(self.db)
            .get_by_ids_with_trashed(airline_ids.into_iter().collect())
            .await?
            .into_iter()
            .map(|airline| (airline.id, airline.icao))
            .collect();

        let aircraft_ids: BTreeSet<i32> = pireps.iter().filter_map(|(p, _)| p.aircraft_id).collect();
        let aircraft: HashMap<i32, String> = AircraftRepository::new(self.db)
            .get_by_ids(aircraft_ids.into_iter().collect())
            .await?
            .into_iter()
            .map(|aircraft| (aircraft.id, aircraft.registration))
            .collect();

        let comments = pirep_repo
            .get_comment_counts(pireps.iter().map(|(p, _)| p.id.clone()).collect())
            .await?;

        let pireps = pireps
            .into_iter()
            .map(|(pirep, user)| PirepSummaryDto {
                pilot: user.map(|u| private_name(&u.name)),
                airline: airlines.get(&pirep.airline_id).cloned(),
                aircraft: pirep
                    .aircraft_id
                    .and_then(|id| aircraft.get(&id).cloned()),
                state: pirep.state.label().to_string(),
                comments: comments.get(&pirep.id).copied().unwrap_or_default(),
                id: pirep.id,
                user_id: pirep.user_id,
                flight_number: pirep.flight_number,
                dpt_airport_id: pirep.dpt_airport_id,
                arr_airport_id: pirep.arr_airport_id,
                submitted_at: pirep.submitted_at,
            })
            .collect();

        Ok(PirepPageDto {
            pireps,
            pagination: pagination(page, PIREPS_PER_PAGE, total),
        })
    }
}

#[cfg(test)]
mod tests {
    mod get_page {
        use chrono::{Duration, Utc};
        use entity::sea_orm_active_enums::PirepState;
        use flightdeck_test_utils::prelude::*;

        use crate::server::service::pirep::{PirepService, PIREPS_PER_PAGE};

        async fn setup() -> Result<TestContext, TestError> {
            TestBuilder::new()
                .with_table(entity::prelude::User)
                .with_table(entity::prelude::Airline)
                .with_table(entity::prelude::Aircraft)
                .with_table(entity::prelude::Pirep)
                .with_table(entity::prelude::PirepComment)
                .with_airline(1, "DLH")
                .build()
                .await
        }

        /// Expect finished PIREPs with their details and in progress PIREPs left out
        #[tokio::test]
        async fn lists_finished_pireps_with_details() -> Result<(), TestError> {
            let mut test = setup().await?;
            test.user().insert_user(1, "Jane Doe").await?;
            test.ops().insert_aircraft(7, 1, "EDDF", "D-AIAA").await?;
            let mut pirep = factory::pirep("p1", 1, "EDDF", "EGLL", PirepState::Accepted);
            pirep.aircraft_id = Some(7);
            test.ops().insert_pirep_with(pirep).await?;
            test.ops()
                .insert_pirep("p2", 1, "EGLL", "EDDF", PirepState::InProgress)
                .await?;
            test.ops().insert_pirep_comment("p1", 1).await?;
            test.ops().insert_pirep_comment("p1", 1).await?;

            let pirep_service = PirepService::new(&test.db);
            let result = pirep_service.get_page(None).await;

            assert!(result.is_ok());
            let page = result.unwrap();
            assert_eq!(page.pireps.len(), 1);
            let summary = &page.pireps[0];
            assert_eq!(summary.id, "p1");
            assert_eq!(summary.pilot.as_deref(), Some("Jane D"));
            assert_eq!(summary.airline.as_deref(), Some("DLH"));
            assert_eq!(summary.aircraft.as_deref(), Some("D-AIAA"));
            assert_eq!(summary.state, "accepted");
            assert_eq!(summary.comments, 2);
            assert_eq!(page.pagination.total_items, 1);

            Ok(())
        }

        /// Expect newest submissions first, 50 per page
        #[tokio::test]
        async fn pages_newest_first() -> Result<(), TestError> {
            let mut test = setup().await?;
            test.user().insert_user(1, "Jane Doe").await?;
            let now = Utc::now().naive_utc();
            for i in 0..(PIREPS_PER_PAGE + 1) {
                let mut pirep =
                    factory::pirep(&format!("p{}", i), 1, "EDDF", "EGLL", PirepState::Pending);
                pirep.submitted_at = Some(now - Duration::minutes(i as i64));
                test.ops().insert_pirep_with(pirep).await?;
            }

            let pirep_service = PirepService::new(&test.db);
            let first = pirep_service.get_page(Some(1)).await.unwrap();
            let second = pirep_service.get_page(Some(2)).await.unwrap();

            assert_eq!(first.pireps.len(), 50);
            assert_eq!(first.pireps[0].id, "p0");
            assert_eq!(first.pagination.total_pages, 2);
            assert_eq!(second.pireps.len(), 1);
            assert_eq!(second.pireps[0].id, "p50");
            assert_eq!(second.pagination.page, 2);

            Ok(())
        }
    }
}
