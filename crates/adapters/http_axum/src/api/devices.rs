//! JSON REST handlers for devices.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use hearth_app::ports::{BlobStore, DeviceRepository, SessionStore, UserRepository};
use hearth_domain::device::Device;
use hearth_domain::error::{HearthError, NotFoundError, ValidationError};
use hearth_domain::id::DeviceId;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for setting brightness.
///
/// The polling client posts `{"value": n}`; `brightness` is accepted as an
/// alias. Deserialized wide: out-of-range numbers must reach validation and
/// come back as `400`, not die in the extractor as `422`.
#[derive(Deserialize)]
pub struct BrightnessRequest {
    #[serde(alias = "brightness")]
    pub value: i64,
}

/// Body of a successful mutation: the updated device plus the `ok` flag the
/// polling client gates its re-render on.
#[derive(Serialize)]
pub struct DeviceUpdated {
    pub ok: bool,
    #[serde(flatten)]
    pub device: Device,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Device>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the mutation endpoints.
pub enum UpdateResponse {
    Ok(Json<DeviceUpdated>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// An unparseable id gets the same 404 as an unknown one.
fn parse_device_id(raw: &str) -> Result<DeviceId, ApiError> {
    DeviceId::from_str(raw).map_err(|_| {
        ApiError::from(HearthError::NotFound(NotFoundError {
            entity: "device",
            id: raw.to_owned(),
        }))
    })
}

/// `GET /api/devices`
pub async fn list<UR, DR, BS, SS>(
    State(state): State<AppState<UR, DR, BS, SS>>,
) -> Result<ListResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
    BS: BlobStore + Send + Sync + 'static,
    SS: SessionStore + Send + Sync + 'static,
{
    let devices = state.device_service.list_devices().await?;
    Ok(ListResponse::Ok(Json(devices)))
}

/// `POST /api/devices/{id}/toggle`
pub async fn toggle<UR, DR, BS, SS>(
    State(state): State<AppState<UR, DR, BS, SS>>,
    Path(id): Path<String>,
) -> Result<UpdateResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
    BS: BlobStore + Send + Sync + 'static,
    SS: SessionStore + Send + Sync + 'static,
{
    let device_id = parse_device_id(&id)?;
    let device = state.device_service.toggle_device(device_id).await?;
    Ok(UpdateResponse::Ok(Json(DeviceUpdated { ok: true, device })))
}

/// `POST /api/devices/{id}/brightness`
pub async fn set_brightness<UR, DR, BS, SS>(
    State(state): State<AppState<UR, DR, BS, SS>>,
    Path(id): Path<String>,
    Json(req): Json<BrightnessRequest>,
) -> Result<UpdateResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
    BS: BlobStore + Send + Sync + 'static,
    SS: SessionStore + Send + Sync + 'static,
{
    let device_id = parse_device_id(&id)?;
    let level = u8::try_from(req.value).map_err(|_| {
        ApiError::from(HearthError::Validation(
            ValidationError::BrightnessOutOfRange(req.value),
        ))
    })?;
    let device = state
        .device_service
        .set_brightness(device_id, level)
        .await?;
    Ok(UpdateResponse::Ok(Json(DeviceUpdated { ok: true, device })))
}
