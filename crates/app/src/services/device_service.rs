//! Device service — use-cases behind the device grid.

use std::sync::Arc;

use hearth_domain::device::Device;
use hearth_domain::error::{HearthError, NotFoundError};
use hearth_domain::id::DeviceId;

use crate::ports::DeviceRepository;
use crate::status::StatusTracker;

/// Application service for listing and mutating devices.
///
/// Successful mutations record a human-readable line on the shared
/// [`StatusTracker`], which the status endpoint reports as `lastEvent`.
pub struct DeviceService<R> {
    repo: R,
    status: Arc<StatusTracker>,
}

impl<R: DeviceRepository> DeviceService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R, status: Arc<StatusTracker>) -> Self {
        Self { repo, status }
    }

    /// List all devices.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_devices(&self) -> Result<Vec<Device>, HearthError> {
        self.repo.get_all().await
    }

    /// Look up a device by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::NotFound`] when no device with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_device(&self, id: DeviceId) -> Result<Device, HearthError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "device",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Flip a device's on/off state and persist it.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::NotFound`] for an unknown id or a storage
    /// error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn toggle_device(&self, id: DeviceId) -> Result<Device, HearthError> {
        let mut device = self.get_device(id).await?;
        device.toggle();
        let device = self.repo.update(device).await?;

        self.status.record(format!(
            "{} turned {}",
            device.name,
            if device.on { "on" } else { "off" }
        ));
        Ok(device)
    }

    /// Set a device's brightness and persist it.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::Validation`] when `level` exceeds 100,
    /// [`HearthError::NotFound`] for an unknown id, or a storage error from
    /// the repository.
    #[tracing::instrument(skip(self))]
    pub async fn set_brightness(&self, id: DeviceId, level: u8) -> Result<Device, HearthError> {
        let mut device = self.get_device(id).await?;
        device.set_brightness(level)?;
        let device = self.repo.update(device).await?;

        self.status
            .record(format!("{} brightness set to {}%", device.name, level));
        Ok(device)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearth_domain::device::DeviceKind;
    use hearth_domain::error::ValidationError;
    use std::collections::HashMap;
    use std::future::Future;
    use std::sync::Mutex;

    struct InMemoryDeviceRepo {
        store: Mutex<HashMap<DeviceId, Device>>,
    }

    impl Default for InMemoryDeviceRepo {
        fn default() -> Self {
            Self {
                store: Mutex::new(HashMap::new()),
            }
        }
    }

    impl InMemoryDeviceRepo {
        fn with(devices: Vec<Device>) -> Self {
            let repo = Self::default();
            {
                let mut store = repo.store.lock().unwrap();
                for device in devices {
                    store.insert(device.id, device);
                }
            }
            repo
        }
    }

    impl DeviceRepository for InMemoryDeviceRepo {
        fn get_all(&self) -> impl Future<Output = Result<Vec<Device>, HearthError>> + Send {
            let store = self.store.lock().unwrap();
            let result: Vec<Device> = store.values().cloned().collect();
            async { Ok(result) }
        }

        fn get_by_id(
            &self,
            id: DeviceId,
        ) -> impl Future<Output = Result<Option<Device>, HearthError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.get(&id).cloned();
            async { Ok(result) }
        }

        fn update(
            &self,
            device: Device,
        ) -> impl Future<Output = Result<Device, HearthError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.insert(device.id, device.clone());
            async { Ok(device) }
        }
    }

    fn lamp() -> Device {
        Device::builder()
            .name("Desk Lamp")
            .kind(DeviceKind::Light)
            .brightness(40)
            .build()
            .unwrap()
    }

    fn make_service(devices: Vec<Device>) -> (DeviceService<InMemoryDeviceRepo>, Arc<StatusTracker>) {
        let status = Arc::new(StatusTracker::new());
        let svc = DeviceService::new(InMemoryDeviceRepo::with(devices), Arc::clone(&status));
        (svc, status)
    }

    #[tokio::test]
    async fn should_list_all_devices() {
        let (svc, _) = make_service(vec![lamp(), lamp()]);
        let all = svc.list_devices().await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn should_return_not_found_when_device_missing() {
        let (svc, _) = make_service(vec![]);
        let result = svc.get_device(DeviceId::new()).await;
        assert!(matches!(result, Err(HearthError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_toggle_device_and_persist() {
        let device = lamp();
        let id = device.id;
        let (svc, _) = make_service(vec![device]);

        let toggled = svc.toggle_device(id).await.unwrap();
        assert!(toggled.on);

        let fetched = svc.get_device(id).await.unwrap();
        assert!(fetched.on);
    }

    #[tokio::test]
    async fn should_record_event_when_toggled() {
        let device = lamp();
        let id = device.id;
        let (svc, status) = make_service(vec![device]);

        svc.toggle_device(id).await.unwrap();
        assert_eq!(status.last_event().as_deref(), Some("Desk Lamp turned on"));

        svc.toggle_device(id).await.unwrap();
        assert_eq!(status.last_event().as_deref(), Some("Desk Lamp turned off"));
    }

    #[tokio::test]
    async fn should_set_brightness_and_record_event() {
        let device = lamp();
        let id = device.id;
        let (svc, status) = make_service(vec![device]);

        let updated = svc.set_brightness(id, 85).await.unwrap();
        assert_eq!(updated.brightness, 85);
        assert_eq!(
            status.last_event().as_deref(),
            Some("Desk Lamp brightness set to 85%")
        );
    }

    #[tokio::test]
    async fn should_reject_brightness_out_of_range() {
        let device = lamp();
        let id = device.id;
        let (svc, status) = make_service(vec![device]);

        let result = svc.set_brightness(id, 150).await;
        assert!(matches!(
            result,
            Err(HearthError::Validation(
                ValidationError::BrightnessOutOfRange(150)
            ))
        ));
        // Failed mutations leave state and status untouched.
        assert_eq!(svc.get_device(id).await.unwrap().brightness, 40);
        assert!(status.last_event().is_none());
    }

    #[tokio::test]
    async fn should_return_not_found_when_toggling_unknown_device() {
        let (svc, status) = make_service(vec![]);
        let result = svc.toggle_device(DeviceId::new()).await;
        assert!(matches!(result, Err(HearthError::NotFound(_))));
        assert!(status.last_event().is_none());
    }
}
