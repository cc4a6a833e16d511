//! JSON blob storage handlers.
//!
//! The response bodies mirror what the dashboard scripts expect: a missing
//! key reads as JSON `null`, writes and deletes answer `{"ok":true}`, and
//! storage failures carry a short machine-readable error code.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};

use hearth_app::ports::{BlobStore, DeviceRepository, SessionStore, UserRepository};
use hearth_domain::error::HearthError;
use hearth_domain::storage_key::StorageKey;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the read endpoint.
pub enum GetResponse {
    Found(Json<Value>),
    Missing,
    ReadFailed,
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Found(json) => json.into_response(),
            Self::Missing => Json(Value::Null).into_response(),
            Self::ReadFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "read_failed"})),
            )
                .into_response(),
        }
    }
}

/// Possible responses from the write endpoint.
pub enum PutResponse {
    Ok,
    WriteFailed,
}

impl IntoResponse for PutResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok => Json(json!({"ok": true})).into_response(),
            Self::WriteFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "write_failed"})),
            )
                .into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Ok,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok => Json(json!({"ok": true})).into_response(),
        }
    }
}

fn parse_key(raw: &str) -> Result<StorageKey, ApiError> {
    StorageKey::from_str(raw).map_err(|err| ApiError::from(HearthError::from(err)))
}

/// `GET /api/storage/{key}`
pub async fn get<UR, DR, BS, SS>(
    State(state): State<AppState<UR, DR, BS, SS>>,
    Path(key): Path<String>,
) -> Result<GetResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
    BS: BlobStore + Send + Sync + 'static,
    SS: SessionStore + Send + Sync + 'static,
{
    let key = parse_key(&key)?;
    match state.blob_service.read(&key).await {
        Ok(Some(value)) => Ok(GetResponse::Found(Json(value))),
        Ok(None) => Ok(GetResponse::Missing),
        Err(err) => {
            tracing::error!(error = %err, key = %key, "blob read failed");
            Ok(GetResponse::ReadFailed)
        }
    }
}

/// `POST /api/storage/{key}`
pub async fn put<UR, DR, BS, SS>(
    State(state): State<AppState<UR, DR, BS, SS>>,
    Path(key): Path<String>,
    Json(value): Json<Value>,
) -> Result<PutResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
    BS: BlobStore + Send + Sync + 'static,
    SS: SessionStore + Send + Sync + 'static,
{
    let key = parse_key(&key)?;
    match state.blob_service.write(&key, &value).await {
        Ok(()) => Ok(PutResponse::Ok),
        Err(err) => {
            tracing::error!(error = %err, key = %key, "blob write failed");
            Ok(PutResponse::WriteFailed)
        }
    }
}

/// `DELETE /api/storage/{key}`
pub async fn delete<UR, DR, BS, SS>(
    State(state): State<AppState<UR, DR, BS, SS>>,
    Path(key): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
    BS: BlobStore + Send + Sync + 'static,
    SS: SessionStore + Send + Sync + 'static,
{
    let key = parse_key(&key)?;
    state.blob_service.delete(&key).await?;
    Ok(DeleteResponse::Ok)
}
