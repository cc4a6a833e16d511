//! File-backed implementation of [`DeviceRepository`].
//!
//! Devices live in a single JSON array file. A default set is seeded (and
//! persisted) the first time the repository is opened so the dashboard has
//! something to render.

use std::path::PathBuf;

use tokio::sync::RwLock;

use hearth_app::ports::DeviceRepository;
use hearth_domain::device::{Device, DeviceKind};
use hearth_domain::error::{HearthError, NotFoundError};
use hearth_domain::id::DeviceId;

use crate::error::StorageError;
use crate::fs;

/// `devices.json`-backed device repository.
pub struct JsonDeviceRepository {
    path: PathBuf,
    devices: RwLock<Vec<Device>>,
}

impl JsonDeviceRepository {
    /// Open the repository, seeding and persisting the default device set
    /// when the file does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the file cannot be read, parsed, or (on
    /// first run) written.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let devices = match fs::read_optional(&path).await? {
            Some(bytes) => serde_json::from_slice(&bytes)?,
            None => {
                let seeded = default_devices();
                let bytes = serde_json::to_vec_pretty(&seeded)?;
                fs::write_atomic(&path, &bytes).await?;
                tracing::info!(path = %path.display(), count = seeded.len(), "seeded device file");
                seeded
            }
        };
        Ok(Self {
            path,
            devices: RwLock::new(devices),
        })
    }

    async fn persist(&self, devices: &[Device]) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec_pretty(devices)?;
        fs::write_atomic(&self.path, &bytes).await?;
        Ok(())
    }
}

impl DeviceRepository for JsonDeviceRepository {
    async fn get_all(&self) -> Result<Vec<Device>, HearthError> {
        Ok(self.devices.read().await.clone())
    }

    async fn get_by_id(&self, id: DeviceId) -> Result<Option<Device>, HearthError> {
        let devices = self.devices.read().await;
        Ok(devices.iter().find(|d| d.id == id).cloned())
    }

    async fn update(&self, device: Device) -> Result<Device, HearthError> {
        let mut devices = self.devices.write().await;

        let Some(index) = devices.iter().position(|d| d.id == device.id) else {
            return Err(NotFoundError {
                entity: "device",
                id: device.id.to_string(),
            }
            .into());
        };

        let mut next = devices.clone();
        next[index] = device.clone();
        self.persist(&next).await?;

        *devices = next;
        Ok(device)
    }
}

fn default_devices() -> Vec<Device> {
    vec![
        Device {
            id: DeviceId::new(),
            name: "Living Room Light".to_string(),
            kind: DeviceKind::Light,
            desc: "Ceiling fixture in the living room".to_string(),
            on: false,
            brightness: 70,
        },
        Device {
            id: DeviceId::new(),
            name: "Bedroom Lamp".to_string(),
            kind: DeviceKind::Light,
            desc: "Bedside reading lamp".to_string(),
            on: false,
            brightness: 30,
        },
        Device {
            id: DeviceId::new(),
            name: "Kettle Plug".to_string(),
            kind: DeviceKind::Switch,
            desc: "Smart plug on the kitchen counter".to_string(),
            on: false,
            brightness: 0,
        },
        Device {
            id: DeviceId::new(),
            name: "Hallway Motion Sensor".to_string(),
            kind: DeviceKind::Sensor,
            desc: "Reports motion in the hallway".to_string(),
            on: true,
            brightness: 0,
        },
        Device {
            id: DeviceId::new(),
            name: "Main Thermostat".to_string(),
            kind: DeviceKind::Thermostat,
            desc: "Main floor temperature control".to_string(),
            on: true,
            brightness: 0,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_seed_defaults_when_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("devices.json");

        let repo = JsonDeviceRepository::open(&path).await.unwrap();
        let all = repo.get_all().await.unwrap();
        assert!(!all.is_empty());
        assert!(path.exists());
    }

    #[tokio::test]
    async fn should_keep_seeded_ids_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("devices.json");

        let first = JsonDeviceRepository::open(&path).await.unwrap();
        let seeded = first.get_all().await.unwrap();
        drop(first);

        let reopened = JsonDeviceRepository::open(&path).await.unwrap();
        let again = reopened.get_all().await.unwrap();
        assert_eq!(
            seeded.iter().map(|d| d.id).collect::<Vec<_>>(),
            again.iter().map(|d| d.id).collect::<Vec<_>>()
        );
    }

    #[tokio::test]
    async fn should_update_device_and_persist() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("devices.json");

        let repo = JsonDeviceRepository::open(&path).await.unwrap();
        let mut device = repo.get_all().await.unwrap().remove(0);
        device.on = true;
        device.brightness = 55;

        repo.update(device.clone()).await.unwrap();

        let reopened = JsonDeviceRepository::open(&path).await.unwrap();
        let fetched = reopened.get_by_id(device.id).await.unwrap().unwrap();
        assert!(fetched.on);
        assert_eq!(fetched.brightness, 55);
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_unknown_device() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonDeviceRepository::open(dir.path().join("devices.json"))
            .await
            .unwrap();

        let stray = Device {
            id: DeviceId::new(),
            name: "Stray".to_string(),
            kind: DeviceKind::Switch,
            desc: String::new(),
            on: false,
            brightness: 0,
        };
        let result = repo.update(stray).await;
        assert!(matches!(result, Err(HearthError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_return_none_for_unknown_id() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonDeviceRepository::open(dir.path().join("devices.json"))
            .await
            .unwrap();
        assert!(repo.get_by_id(DeviceId::new()).await.unwrap().is_none());
    }
}
