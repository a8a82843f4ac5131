use sea_orm::DatabaseConnection;
use serde_json::Value;

use crate::server::{
    config::ServiceOptions, data::snapshot::NetworkSnapshotRepository, error::Error,
    model::db::NetworkSnapshotModel, service::roster::network::Network,
};

/// Downloads the pilot lists of the online networks and caches them in the database.
pub struct NetworkFeedService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
    options: &'a ServiceOptions,
}

impl<'a> NetworkFeedService<'a> {
    /// Creates a new instance of [`NetworkFeedService`]
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        options: &'a ServiceOptions,
    ) -> Self {
        Self {
            db,
            http_client,
            options,
        }
    }

    /// Downloads the network's data feed and stores its pilot list as the network's snapshot.
    ///
    /// # Arguments
    /// - `network` - Network to download
    ///
    /// # Returns
    /// - `Ok(NetworkSnapshotModel)` - Snapshot holding the freshly downloaded pilots
    /// - `Err(Error::ReqwestError)` - Feed unreachable, non success status or invalid JSON
    /// - `Err(Error::FeedError)` - Feed does not contain a pilot list
    /// - `Err(Error::DbErr)` - Snapshot could not be stored
    pub async fn download(&self, network: Network) -> Result<NetworkSnapshotModel, Error> {
        let url = match network {
            Network::Vatsim => &self.options.vatsim_feed_url,
            Network::Ivao => &self.options.ivao_feed_url,
        };

        tracing::debug!("Downloading {} feed from {}", network.name(), url);

        let payload: Value = self
            .http_client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let pilots = network.extract_pilots(payload)?;
        let pilot_count = pilots.as_array().map(Vec::len).unwrap_or_default();

        let snapshot = NetworkSnapshotRepository::new(self.db)
            .upsert(network.name(), pilots.to_string())
            .await?;

        tracing::info!(
            "Stored {} feed snapshot with {} pilots",
            network.name(),
            pilot_count
        );

        Ok(snapshot)
    }
}
