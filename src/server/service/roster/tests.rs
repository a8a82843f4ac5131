use chrono::{Duration, Utc};
use flightdeck_test_utils::prelude::*;

use crate::server::model::app::AppState;

async fn setup() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_roster_tables()
        .with_airline(1, "DLH")
        .build()
        .await
}

/// Stores a fresh VATSIM snapshot so no download is attempted.
async fn store_vatsim_pilots(
    test: &mut TestContext,
    pilots: Vec<serde_json::Value>,
) -> Result<(), TestError> {
    let raw = serde_json::Value::Array(pilots).to_string();
    test.network()
        .insert_snapshot("VATSIM", &raw, Utc::now().naive_utc())
        .await?;

    Ok(())
}

async fn insert_vatsim_user(
    test: &mut TestContext,
    user_id: i32,
    name: &str,
    cid: &str,
) -> Result<(), TestError> {
    let mut user = factory::user(user_id, name);
    user.vatsim_id = Some(cid.to_string());
    test.user().insert_user_with(user).await?;

    Ok(())
}

mod refresh_interval {
    use crate::server::service::roster::{network::Network, RosterRequest};

    #[test]
    fn ignores_short_intervals() {
        let mut request = RosterRequest::new(Network::Vatsim);

        assert_eq!(request.refresh_interval(), 180);

        request.refresh_seconds = Some(15);
        assert_eq!(request.refresh_interval(), 180);

        request.refresh_seconds = Some(16);
        assert_eq!(request.refresh_interval(), 16);
    }
}

mod build_roster {
    use entity::sea_orm_active_enums::{PirepState, UserState};

    use super::*;
    use crate::server::service::roster::{
        network::Network, RosterRequest, RosterService, FEED_UNAVAILABLE_ERROR,
    };

    /// Tests filtering of online pilots.
    ///
    /// Verifies that a known pilot under an airline callsign is listed, a known pilot under a
    /// foreign callsign only when flying a PIREP, and pilots unknown to the airline never.
    ///
    /// Expected: the airline callsign and the PIREP pilot, nobody else
    #[tokio::test]
    async fn keeps_only_pilots_flying_for_the_airline() -> Result<(), TestError> {
        let mut test = setup().await?;
        insert_vatsim_user(&mut test, 1, "Jane Doe", "1000001").await?;
        insert_vatsim_user(&mut test, 2, "John Roe", "1000002").await?;
        insert_vatsim_user(&mut test, 3, "Max Mustermann", "1000003").await?;
        test.ops()
            .insert_pirep("p2", 2, "EDDF", "EGLL", PirepState::InProgress)
            .await?;
        let logon = Utc::now() - Duration::minutes(45);
        store_vatsim_pilots(
            &mut test,
            vec![
                factory::vatsim_pilot(1000001, "DLH4AB", logon),
                factory::vatsim_pilot(1000002, "BAW12", logon),
                factory::vatsim_pilot(1000003, "AFR77", logon),
                factory::vatsim_pilot(9999999, "DLH999", logon),
            ],
        )
        .await?;
        let state: AppState = test.to_app_state();

        let roster_service = RosterService::new(&state.db, &state.http_client, &state.options);
        let roster = roster_service
            .build_roster(RosterRequest::new(Network::Vatsim), None)
            .await
            .unwrap();

        let callsigns: Vec<&str> = roster.pilots.iter().map(|p| p.callsign.as_str()).collect();
        assert_eq!(callsigns, vec!["DLH4AB", "BAW12"]);
        assert!(roster.pilots.iter().all(|p| p.airline || p.pirep.is_some()));
        assert_eq!(roster.error, None);
        assert!(roster.downloaded_at.is_some());

        let jane = &roster.pilots[0];
        assert_eq!(jane.user_id, Some(1));
        assert_eq!(jane.name_private.as_deref(), Some("Jane D"));
        assert_eq!(jane.online_minutes, 45);
        assert!(jane.airline);
        assert_eq!(jane.vasys_check, None);

        let john = &roster.pilots[1];
        assert!(!john.airline);
        let pirep = john.pirep.as_ref().unwrap();
        assert_eq!(pirep.id, "p2");
        assert_eq!(pirep.flight, "DLH100");

        Ok(())
    }

    /// Tests deduplication of network ids.
    ///
    /// Expected: a pilot listed twice in the feed shows up once
    #[tokio::test]
    async fn lists_each_network_id_once() -> Result<(), TestError> {
        let mut test = setup().await?;
        insert_vatsim_user(&mut test, 1, "Jane Doe", "1000001").await?;
        let logon = Utc::now();
        store_vatsim_pilots(
            &mut test,
            vec![
                factory::vatsim_pilot(1000001, "DLH4AB", logon),
                factory::vatsim_pilot(1000001, "DLH4AC", logon),
            ],
        )
        .await?;
        let state: AppState = test.to_app_state();

        let roster_service = RosterService::new(&state.db, &state.http_client, &state.options);
        let roster = roster_service
            .build_roster(RosterRequest::new(Network::Vatsim), None)
            .await
            .unwrap();

        assert_eq!(roster.pilots.len(), 1);
        assert_eq!(roster.pilots[0].callsign, "DLH4AB");

        Ok(())
    }

    /// Tests lookup of network ids entered in a custom profile field.
    ///
    /// Verifies that the field named by the site setting is used, the pilot is resolved
    /// through the field value and values of inactive pilots are ignored.
    ///
    /// Expected: only the active pilot's entry, resolved to their account
    #[tokio::test]
    async fn resolves_pilots_through_profile_field() -> Result<(), TestError> {
        let mut test = setup().await?;
        test.ops()
            .insert_setting("gen_vatsim_field", "VATSIM CID")
            .await?;
        test.user().insert_user(1, "Jane Doe").await?;
        let mut suspended = factory::user(2, "John Roe");
        suspended.state = UserState::Suspended;
        test.user().insert_user_with(suspended).await?;
        test.user().insert_user_field(5, "VATSIM CID").await?;
        test.user()
            .insert_user_field_value(5, 1, Some("1000001"))
            .await?;
        test.user()
            .insert_user_field_value(5, 2, Some("1000002"))
            .await?;
        let logon = Utc::now();
        store_vatsim_pilots(
            &mut test,
            vec![
                factory::vatsim_pilot(1000001, "DLH4AB", logon),
                factory::vatsim_pilot(1000002, "DLH4AC", logon),
            ],
        )
        .await?;
        let state: AppState = test.to_app_state();

        let roster_service = RosterService::new(&state.db, &state.http_client, &state.options);
        let roster = roster_service
            .build_roster(RosterRequest::new(Network::Vatsim), None)
            .await
            .unwrap();

        assert_eq!(roster.pilots.len(), 1);
        assert_eq!(roster.pilots[0].network_id, "1000001");
        assert_eq!(roster.pilots[0].user_id, Some(1));

        Ok(())
    }

    /// Tests resolution of a padded profile field value.
    ///
    /// Verifies the value is trimmed the same way for relevance and lookup, and that an inactive
    /// pilot holding the same value is never picked.
    ///
    /// Expected: the pilot flying a PIREP under a foreign callsign is listed with their account
    #[tokio::test]
    async fn resolves_padded_profile_field_values() -> Result<(), TestError> {
        let mut test = setup().await?;
        let mut suspended = factory::user(1, "John Roe");
        suspended.state = UserState::Suspended;
        test.user().insert_user_with(suspended).await?;
        test.user().insert_user(2, "Jane Doe").await?;
        test.user().insert_user_field(5, "VATSIM").await?;
        test.user()
            .insert_user_field_value(5, 1, Some("1000001"))
            .await?;
        test.user()
            .insert_user_field_value(5, 2, Some(" 1000001 "))
            .await?;
        test.ops()
            .insert_pirep("p1", 2, "EDDF", "EGLL", PirepState::InProgress)
            .await?;
        store_vatsim_pilots(
            &mut test,
            vec![factory::vatsim_pilot(1000001, "XYZ123", Utc::now())],
        )
        .await?;
        let state: AppState = test.to_app_state();

        let roster_service = RosterService::new(&state.db, &state.http_client, &state.options);
        let roster = roster_service
            .build_roster(RosterRequest::new(Network::Vatsim), None)
            .await
            .unwrap();

        assert_eq!(roster.pilots.len(), 1);
        let entry = &roster.pilots[0];
        assert_eq!(entry.user_id, Some(2));
        assert!(!entry.airline);
        assert_eq!(entry.pirep.as_ref().map(|p| p.id.as_str()), Some("p1"));

        Ok(())
    }

    /// Tests the IVAO virtual airline check.
    ///
    /// Verifies online minutes are rounded up and the remarks are checked for the configured
    /// VA code.
    ///
    /// Expected: check passes for the pilot carrying `IVAOVA/DLH`, fails for the other
    #[tokio::test]
    async fn checks_ivao_remarks_for_va_code() -> Result<(), TestError> {
        let mut test = setup().await?;
        test.ops().insert_setting("gen_ivao_icao", "DLH").await?;
        for (user_id, ivao_id) in [(1, "500001"), (2, "500002")] {
            let mut user = factory::user(user_id, "Jane Doe");
            user.ivao_id = Some(ivao_id.to_string());
            test.user().insert_user_with(user).await?;
        }
        let raw = serde_json::json!([
            factory::ivao_pilot(500001, "DLH1", 61, Some("PBN/B2 IVAOVA/DLH")),
            factory::ivao_pilot(500002, "DLH2", 120, Some("PBN/B2")),
        ])
        .to_string();
        test.network()
            .insert_snapshot("IVAO", &raw, Utc::now().naive_utc())
            .await?;
        let state: AppState = test.to_app_state();

        let roster_service = RosterService::new(&state.db, &state.http_client, &state.options);
        let roster = roster_service
            .build_roster(RosterRequest::new(Network::Ivao), None)
            .await
            .unwrap();

        assert_eq!(roster.network, "IVAO");
        assert_eq!(roster.pilots.len(), 2);
        assert_eq!(roster.pilots[0].online_minutes, 2);
        assert_eq!(roster.pilots[0].vasys_check, Some(true));
        assert_eq!(roster.pilots[1].vasys_check, Some(false));

        Ok(())
    }

    /// Tests the checks flag.
    ///
    /// Expected: set for a viewer holding a role, unset for anonymous viewers
    #[tokio::test]
    async fn flags_checks_for_staff_viewers() -> Result<(), TestError> {
        let mut test = setup().await?;
        test.user().insert_user(1, "Jane Doe").await?;
        test.user().insert_role(1, 1).await?;
        store_vatsim_pilots(&mut test, vec![]).await?;
        let state: AppState = test.to_app_state();

        let roster_service = RosterService::new(&state.db, &state.http_client, &state.options);
        let staff = roster_service
            .build_roster(RosterRequest::new(Network::Vatsim), Some(1))
            .await
            .unwrap();
        let anonymous = roster_service
            .build_roster(RosterRequest::new(Network::Vatsim), None)
            .await
            .unwrap();

        assert!(staff.checks);
        assert!(!anonymous.checks);

        Ok(())
    }

    /// Tests the first roster of a network.
    ///
    /// Verifies the feed is downloaded when no snapshot exists yet and the fresh pilots are
    /// used right away.
    ///
    /// Expected: one download and the pilot from the feed
    #[tokio::test]
    async fn downloads_missing_snapshot() -> Result<(), TestError> {
        let mut test = TestBuilder::new()
            .with_roster_tables()
            .with_airline(1, "DLH")
            .with_vatsim_feed(
                factory::vatsim_feed(vec![factory::vatsim_pilot(
                    1000001,
                    "DLH4AB",
                    Utc::now(),
                )]),
                1,
            )
            .build()
            .await?;
        insert_vatsim_user(&mut test, 1, "Jane Doe", "1000001").await?;
        let state: AppState = test.to_app_state();

        let roster_service = RosterService::new(&state.db, &state.http_client, &state.options);
        let roster = roster_service
            .build_roster(RosterRequest::new(Network::Vatsim), None)
            .await
            .unwrap();

        assert_eq!(roster.pilots.len(), 1);
        assert_eq!(roster.error, None);
        assert!(roster.downloaded_at.is_some());
        test.assert_mocks();

        Ok(())
    }

    /// Tests a failed download without any snapshot.
    ///
    /// Expected: an empty roster carrying the error message
    #[tokio::test]
    async fn reports_unavailable_feed() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_roster_tables()
            .with_mock_endpoint(|server| {
                server
                    .mock("GET", "/vatsim-data.json")
                    .with_status(500)
                    .expect(1)
                    .create()
            })
            .build()
            .await?;
        let state: AppState = test.to_app_state();

        let roster_service = RosterService::new(&state.db, &state.http_client, &state.options);
        let roster = roster_service
            .build_roster(RosterRequest::new(Network::Vatsim), None)
            .await
            .unwrap();

        assert!(roster.pilots.is_empty());
        assert_eq!(roster.error.as_deref(), Some(FEED_UNAVAILABLE_ERROR));
        assert_eq!(roster.downloaded_at, None);
        test.assert_mocks();

        Ok(())
    }

    /// Tests a failed refresh of an outdated snapshot.
    ///
    /// Expected: the outdated pilots are served together with the error message
    #[tokio::test]
    async fn serves_stale_snapshot_when_refresh_fails() -> Result<(), TestError> {
        let mut test = TestBuilder::new()
            .with_roster_tables()
            .with_airline(1, "DLH")
            .with_mock_endpoint(|server| {
                server
                    .mock("GET", "/vatsim-data.json")
                    .with_status(500)
                    .expect(1)
                    .create()
            })
            .build()
            .await?;
        insert_vatsim_user(&mut test, 1, "Jane Doe", "1000001").await?;
        let updated_at = Utc::now().naive_utc() - Duration::minutes(10);
        let raw = serde_json::json!([factory::vatsim_pilot(1000001, "DLH4AB", Utc::now())])
            .to_string();
        test.network()
            .insert_snapshot("VATSIM", &raw, updated_at)
            .await?;
        let state: AppState = test.to_app_state();

        let roster_service = RosterService::new(&state.db, &state.http_client, &state.options);
        let roster = roster_service
            .build_roster(RosterRequest::new(Network::Vatsim), None)
            .await
            .unwrap();

        assert_eq!(roster.pilots.len(), 1);
        assert_eq!(roster.error.as_deref(), Some(FEED_UNAVAILABLE_ERROR));
        assert_eq!(roster.downloaded_at, Some(updated_at));
        test.assert_mocks();

        Ok(())
    }
}
