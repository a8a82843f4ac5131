use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

/// Key under which the host application's login flow stores the pilot id.
pub const SESSION_VIEWER_KEY: &str = "flightdeck:user:id";

/// Pilot id of the logged in viewer, stored as a string to stay compatible with the host.
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionViewer(pub String);

impl SessionViewer {
    /// Store the viewer's pilot id.
    ///
    /// Normally done by the host's login flow, used here by tests and tooling.
    pub async fn insert(session: &Session, user_id: i32) -> Result<(), Error> {
        session
            .insert(SESSION_VIEWER_KEY, SessionViewer(user_id.to_string()))
            .await?;

        Ok(())
    }

    /// Pilot id of the viewer, `None` for anonymous visitors.
    pub async fn get(session: &Session) -> Result<Option<i32>, Error> {
        let Some(SessionViewer(raw)) = session.get::<SessionViewer>(SESSION_VIEWER_KEY).await?
        else {
            return Ok(None);
        };

        raw.trim()
            .parse::<i32>()
            .map(Some)
            .map_err(|e| Error::ParseError(format!("session viewer id {:?}: {}", raw, e)))
    }
}
