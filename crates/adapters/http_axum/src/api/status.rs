//! Server status handler.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use hearth_app::ports::{BlobStore, DeviceRepository, SessionStore, UserRepository};

use crate::state::AppState;

/// Body of `GET /api/status`.
#[derive(Serialize)]
pub struct StatusResponse {
    /// Milliseconds since the server started.
    pub uptime: u64,
    #[serde(rename = "lastEvent")]
    pub last_event: Option<String>,
}

/// `GET /api/status`
pub async fn get<UR, DR, BS, SS>(
    State(state): State<AppState<UR, DR, BS, SS>>,
) -> Json<StatusResponse>
where
    UR: UserRepository + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
    BS: BlobStore + Send + Sync + 'static,
    SS: SessionStore + Send + Sync + 'static,
{
    let uptime = u64::try_from(state.status.uptime().as_millis()).unwrap_or(u64::MAX);
    Json(StatusResponse {
        uptime,
        last_event: state.status.last_event(),
    })
}
