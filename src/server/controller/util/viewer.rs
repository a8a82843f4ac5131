use tower_sessions::Session;

use crate::server::{error::Error, model::session::user::SessionViewer};

/// Retrieves the logged in pilot's id from the session
///
/// A viewer id the host stored in an unexpected format is logged and the request is treated
/// as anonymous.
///
/// # Returns
/// - `Ok(Some(id))`: Pilot is logged in
/// - `Ok(None)`: Anonymous visitor
/// - `Err(Error::SessionError)`: The session store could not be read
pub async fn get_viewer_id(session: &Session) -> Result<Option<i32>, Error> {
    match SessionViewer::get(session).await {
        Ok(viewer_id) => Ok(viewer_id),
        Err(Error::ParseError(e)) => {
            tracing::warn!("Ignoring unreadable viewer in session: {}", e);

            Ok(None)
        }
        Err(e) => Err(e),
    }
}
