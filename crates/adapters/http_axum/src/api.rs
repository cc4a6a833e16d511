//! JSON API routes consumed by the dashboard's polling client.

pub mod devices;
pub mod status;
pub mod storage;

use axum::Router;
use axum::routing::{get, post};

use hearth_app::ports::{BlobStore, DeviceRepository, SessionStore, UserRepository};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<UR, DR, BS, SS>() -> Router<AppState<UR, DR, BS, SS>>
where
    UR: UserRepository + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
    BS: BlobStore + Send + Sync + 'static,
    SS: SessionStore + Send + Sync + 'static,
{
    Router::new()
        .route("/status", get(status::get::<UR, DR, BS, SS>))
        .route("/devices", get(devices::list::<UR, DR, BS, SS>))
        .route(
            "/devices/{id}/toggle",
            post(devices::toggle::<UR, DR, BS, SS>),
        )
        .route(
            "/devices/{id}/brightness",
            post(devices::set_brightness::<UR, DR, BS, SS>),
        )
        .route(
            "/storage/{key}",
            get(storage::get::<UR, DR, BS, SS>)
                .post(storage::put::<UR, DR, BS, SS>)
                .delete(storage::delete::<UR, DR, BS, SS>),
        )
}
