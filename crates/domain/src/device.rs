//! Device — a toggleable thing the dashboard renders as a card.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{HearthError, ValidationError};
use crate::id::DeviceId;

/// Broad device category, shown as a label on the device card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    Light,
    Switch,
    Sensor,
    Thermostat,
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Light => "light",
            Self::Switch => "switch",
            Self::Sensor => "sensor",
            Self::Thermostat => "thermostat",
        };
        f.write_str(label)
    }
}

/// A controllable device.
///
/// Field names follow the JSON contract the polling client renders:
/// `id`, `name`, `type`, `desc`, `on`, `brightness`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: DeviceKind,
    #[serde(default)]
    pub desc: String,
    pub on: bool,
    pub brightness: u8,
}

impl Device {
    /// Create a builder for constructing a [`Device`].
    #[must_use]
    pub fn builder() -> DeviceBuilder {
        DeviceBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::Validation`] when `name` is empty or
    /// `brightness` exceeds 100.
    pub fn validate(&self) -> Result<(), HearthError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyDeviceName.into());
        }
        if self.brightness > 100 {
            return Err(ValidationError::BrightnessOutOfRange(i64::from(self.brightness)).into());
        }
        Ok(())
    }

    /// Flip the on/off state.
    pub fn toggle(&mut self) {
        self.on = !self.on;
    }

    /// Set brightness as a 0–100 percentage.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::Validation`] when `level` exceeds 100.
    pub fn set_brightness(&mut self, level: u8) -> Result<(), HearthError> {
        if level > 100 {
            return Err(ValidationError::BrightnessOutOfRange(i64::from(level)).into());
        }
        self.brightness = level;
        Ok(())
    }
}

/// Step-by-step builder for [`Device`].
#[derive(Debug)]
pub struct DeviceBuilder {
    id: Option<DeviceId>,
    name: Option<String>,
    kind: DeviceKind,
    desc: Option<String>,
    on: bool,
    brightness: u8,
}

impl Default for DeviceBuilder {
    fn default() -> Self {
        Self {
            id: None,
            name: None,
            kind: DeviceKind::Switch,
            desc: None,
            on: false,
            brightness: 0,
        }
    }
}

impl DeviceBuilder {
    #[must_use]
    pub fn id(mut self, id: DeviceId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: DeviceKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = Some(desc.into());
        self
    }

    #[must_use]
    pub fn on(mut self, on: bool) -> Self {
        self.on = on;
        self
    }

    #[must_use]
    pub fn brightness(mut self, brightness: u8) -> Self {
        self.brightness = brightness;
        self
    }

    /// Consume the builder, validate, and return a [`Device`].
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::Validation`] if `name` is missing or empty,
    /// or `brightness` exceeds 100.
    pub fn build(self) -> Result<Device, HearthError> {
        let device = Device {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            kind: self.kind,
            desc: self.desc.unwrap_or_default(),
            on: self.on,
            brightness: self.brightness,
        };
        device.validate()?;
        Ok(device)
    }
}
