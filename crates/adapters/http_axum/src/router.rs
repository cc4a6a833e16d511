//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use hearth_app::ports::{BlobStore, DeviceRepository, SessionStore, UserRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests API routes under `/api`, merges the page routes at `/`, and falls
/// back to serving the public asset directory (scripts, styles, images).
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<UR, DR, BS, SS>(state: AppState<UR, DR, BS, SS>) -> Router
where
    UR: UserRepository + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
    BS: BlobStore + Send + Sync + 'static,
    SS: SessionStore + Send + Sync + 'static,
{
    let public = ServeDir::new(state.pages.public_dir.clone());
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .merge(crate::pages::routes())
        .fallback_service(public)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use chrono::TimeDelta;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use hearth_app::services::auth_service::AuthService;
    use hearth_app::services::blob_service::BlobService;
    use hearth_app::services::device_service::DeviceService;
    use hearth_app::sessions::InMemorySessionStore;
    use hearth_app::status::StatusTracker;
    use hearth_domain::device::{Device, DeviceKind};
    use hearth_domain::error::HearthError;
    use hearth_domain::id::DeviceId;
    use hearth_domain::storage_key::StorageKey;
    use hearth_domain::user::User;

    use super::*;
    use crate::pages::PagesConfig;
    use crate::state::AppState;

    struct StubUserRepo;
    struct StubDeviceRepo;
    struct StubBlobStore;

    impl hearth_app::ports::UserRepository for StubUserRepo {
        async fn find_by_username(&self, _username: &str) -> Result<Option<User>, HearthError> {
            Ok(None)
        }
        async fn create(&self, user: User) -> Result<User, HearthError> {
            Ok(user)
        }
    }

    impl hearth_app::ports::DeviceRepository for StubDeviceRepo {
        async fn get_all(&self) -> Result<Vec<Device>, HearthError> {
            Ok(vec![])
        }
        async fn get_by_id(&self, _id: DeviceId) -> Result<Option<Device>, HearthError> {
            Ok(Some(
                Device::builder()
                    .name("Test Lamp")
                    .kind(DeviceKind::Light)
                    .build()
                    .unwrap(),
            ))
        }
        async fn update(&self, device: Device) -> Result<Device, HearthError> {
            Ok(device)
        }
    }

    impl hearth_app::ports::BlobStore for StubBlobStore {
        async fn read(
            &self,
            _key: &StorageKey,
        ) -> Result<Option<serde_json::Value>, HearthError> {
            Ok(None)
        }
        async fn write(
            &self,
            _key: &StorageKey,
            _value: &serde_json::Value,
        ) -> Result<(), HearthError> {
            Ok(())
        }
        async fn delete(&self, _key: &StorageKey) -> Result<(), HearthError> {
            Ok(())
        }
    }

    fn test_state() -> AppState<StubUserRepo, StubDeviceRepo, StubBlobStore, InMemorySessionStore> {
        let status = Arc::new(StatusTracker::new());
        AppState::new(
            AuthService::new(StubUserRepo),
            DeviceService::new(StubDeviceRepo, Arc::clone(&status)),
            BlobService::new(StubBlobStore),
            InMemorySessionStore::new(TimeDelta::hours(1)),
            status,
            PagesConfig {
                static_dir: std::env::temp_dir(),
                public_dir: std::env::temp_dir(),
            },
        )
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_redirect_root_to_login() {
        let app = build(test_state());

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/login");
    }

    #[tokio::test]
    async fn should_redirect_gated_page_without_session() {
        let app = build(test_state());

        let response = app
            .oneshot(Request::builder().uri("/home").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/login");
    }

    #[tokio::test]
    async fn should_return_null_for_missing_storage_key() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/storage/flashcards")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"null");
    }

    #[tokio::test]
    async fn should_reject_traversal_storage_key() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/storage/..%2Fusers")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_report_status_shape() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/status")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(value["uptime"].is_u64());
        assert!(value["lastEvent"].is_null());
    }
}
