use sea_orm::DatabaseConnection;

use crate::server::config::{Config, ServiceOptions, DEFAULT_POPUP_THRESHOLD};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub http_client: reqwest::Client,
    pub options: ServiceOptions,
}

impl AppState {
    pub fn new(db: DatabaseConnection, http_client: reqwest::Client, config: &Config) -> Self {
        Self {
            db,
            http_client,
            options: ServiceOptions::from(config),
        }
    }
}

/// Builds state pointing both network feeds at a single base URL, as done by the test harness.
///
/// VATSIM is served from `{base}/vatsim-data.json` and IVAO from `{base}/whazzup`.
impl From<(DatabaseConnection, reqwest::Client, String)> for AppState {
    fn from((db, http_client, base_url): (DatabaseConnection, reqwest::Client, String)) -> Self {
        Self {
            db,
            http_client,
            options: ServiceOptions {
                vatsim_feed_url: format!("{}/vatsim-data.json", base_url),
                ivao_feed_url: format!("{}/whazzup", base_url),
                popup_threshold: DEFAULT_POPUP_THRESHOLD,
                assignments_enabled: true,
            },
        }
    }
}
