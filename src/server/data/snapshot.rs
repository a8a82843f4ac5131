use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

/// Cached pilot lists of the online networks, one row per network.
pub struct NetworkSnapshotRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NetworkSnapshotRepository<'a, C> {
    /// Creates a new instance of [`NetworkSnapshotRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Most recently refreshed snapshot of a network
    pub async fn get_latest(
        &self,
        network: &str,
    ) -> Result<Option<entity::disposable_whazzup::Model>, DbErr> {
        entity::prelude::DisposableWhazzup::find()
            .filter(entity::disposable_whazzup::Column::Network.eq(network))
            .order_by_desc(entity::disposable_whazzup::Column::UpdatedAt)
            .one(self.db)
            .await
    }

    /// Stores a freshly downloaded pilot list, replacing the previous one of that network
    ///
    /// Two requests refreshing at once both end up writing a complete list, whichever
    /// finishes last is kept.
    pub async fn upsert(
        &self,
        network: &str,
        pilots_json: String,
    ) -> Result<entity::disposable_whazzup::Model, DbErr> {
        let now = Utc::now().naive_utc();

        match self.get_latest(network).await? {
            Some(existing) => {
                let mut snapshot_am = existing.into_active_model();
                snapshot_am.pilots = ActiveValue::Set(pilots_json);
                snapshot_am.updated_at = ActiveValue::Set(now);

                snapshot_am.update(self.db).await
            }
            None => {
                let snapshot = entity::disposable_whazzup::ActiveModel {
                    network: ActiveValue::Set(network.to_string()),
                    pilots: ActiveValue::Set(pilots_json),
                    created_at: ActiveValue::Set(now),
                    updated_at: ActiveValue::Set(now),
                    ..Default::default()
                };

                snapshot.insert(self.db).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    mod get_latest {
        use chrono::{Duration, Utc};
        use flightdeck_test_utils::prelude::*;

        use crate::server::data::snapshot::NetworkSnapshotRepository;

        /// Expect the snapshot of the requested network only
        #[tokio::test]
        async fn returns_snapshot_of_network() -> Result<(), TestError> {
            let mut test = TestBuilder::new()
                .with_table(entity::prelude::DisposableWhazzup)
                .build()
                .await?;
            let now = Utc::now().naive_utc();
            test.network()
                .insert_snapshot("VATSIM", "[]", now - Duration::minutes(1))
                .await?;

            let snapshot_repo = NetworkSnapshotRepository::new(&test.db);
            let vatsim = snapshot_repo.get_latest("VATSIM").await?;
            let ivao = snapshot_repo.get_latest("IVAO").await?;

            assert!(vatsim.is_some());
            assert!(ivao.is_none());

            Ok(())
        }
    }

    mod upsert {
        use chrono::{Duration, Utc};
        use flightdeck_test_utils::prelude::*;
        use sea_orm::{EntityTrait, PaginatorTrait};

        use crate::server::data::snapshot::NetworkSnapshotRepository;

        /// Expect a first download to create the network's row
        #[tokio::test]
        async fn inserts_missing_snapshot() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_table(entity::prelude::DisposableWhazzup)
                .build()
                .await?;

            let snapshot_repo = NetworkSnapshotRepository::new(&test.db);
            let result = snapshot_repo.upsert("IVAO", "[]".to_string()).await;

            assert!(result.is_ok());
            assert_eq!(result.unwrap().network, "IVAO");

            Ok(())
        }

        /// Expect a refresh to replace the pilots in place and bump the timestamp
        #[tokio::test]
        async fn replaces_existing_snapshot() -> Result<(), TestError> {
            let mut test = TestBuilder::new()
                .with_table(entity::prelude::DisposableWhazzup)
                .build()
                .await?;
            let stale = Utc::now().naive_utc() - Duration::hours(1);
            test.network().insert_snapshot("IVAO", "[]", stale).await?;

            let snapshot_repo = NetworkSnapshotRepository::new(&test.db);
            let refreshed = snapshot_repo
                .upsert("IVAO", r#"[{"callsign":"DLH1"}]"#.to_string())
                .await?;

            assert!(refreshed.updated_at > stale);
            assert!(refreshed.pilots.contains("DLH1"));
            let rows = entity::prelude::DisposableWhazzup::find()
                .count(&test.db)
                .await?;
            assert_eq!(rows, 1);

            Ok(())
        }
    }
}
