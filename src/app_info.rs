use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Reported status of this deployment slot.
///
/// Liveness is hardcoded: a slot that can answer at all reports `Up`.
/// `Down` only ever appears when an operator stamps it into the slot's
/// environment, e.g. while draining the inactive color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AppStatus {
    #[serde(rename = "UP")]
    Up,
    #[serde(rename = "DOWN")]
    Down,
}

impl fmt::Display for AppStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppStatus::Up => f.write_str("UP"),
            AppStatus::Down => f.write_str("DOWN"),
        }
    }
}

impl FromStr for AppStatus {
    type Err = MetadataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "UP" => Ok(AppStatus::Up),
            "DOWN" => Ok(AppStatus::Down),
            _ => Err(MetadataError::InvalidStatus(s.to_string())),
        }
    }
}

/// Why deployment metadata could not be resolved at startup.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("{0} is not set")]
    Missing(&'static str),
    #[error("APP_STATUS must be UP or DOWN, got {0:?}")]
    InvalidStatus(String),
}

/// Identity of this deployment slot, resolved once at startup and immutable
/// afterwards. Field order fixes the JSON key order of `/version`.
#[derive(Debug, Clone, Serialize)]
pub struct AppInfo {
    pub name: String,
    pub version: String,
    pub status: AppStatus,
}

impl AppInfo {
    /// Resolve slot metadata from the environment: `APP_NAME` and
    /// `APP_VERSION` are stamped per slot at deploy time, `APP_STATUS` is
    /// optional and defaults to `UP`.
    pub fn from_env() -> Result<Self, MetadataError> {
        let name =
            std::env::var("APP_NAME").map_err(|_| MetadataError::Missing("APP_NAME"))?;
        let version =
            std::env::var("APP_VERSION").map_err(|_| MetadataError::Missing("APP_VERSION"))?;
        let status = match std::env::var("APP_STATUS") {
            Ok(raw) => raw.parse()?,
            Err(_) => AppStatus::Up,
        };

        Ok(Self {
            name,
            version,
            status,
        })
    }

    /// Placeholder identity for a slot started without metadata.
    pub fn unknown() -> Self {
        Self {
            name: "unknown".to_string(),
            version: "unknown".to_string(),
            status: AppStatus::Up,
        }
    }
}
