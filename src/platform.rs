//! Host platform forwarding seam
//!
//! Entity definitions and polling cadence live with the host; the
//! integration only forwards setup and unload requests through the
//! [`PlatformForwarder`] trait.

use async_trait::async_trait;

use crate::entry::ConfigEntry;
use crate::error::Result;

/// Host platforms this integration registers entities on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Sensor entities fed from the site overview data
    Sensor,
}

/// Platforms forwarded on every successful setup
pub const PLATFORMS: &[Platform] = &[Platform::Sensor];

impl Platform {
    /// Host-facing platform name
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Sensor => "sensor",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Host-side platform lifecycle hooks
#[async_trait]
pub trait PlatformForwarder: Send + Sync {
    /// Initialize the given platforms against the entry's runtime data
    async fn forward_setup(&self, entry: &ConfigEntry, platforms: &[Platform]) -> Result<()>;

    /// Tear down the given platforms; returns whether all unloaded cleanly
    async fn unload(&self, entry: &ConfigEntry, platforms: &[Platform]) -> Result<bool>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_names() {
        assert_eq!(Platform::Sensor.as_str(), "sensor");
        assert_eq!(format!("{}", Platform::Sensor), "sensor");
    }

    #[test]
    fn sensor_is_the_only_forwarded_platform() {
        assert_eq!(PLATFORMS, &[Platform::Sensor]);
    }
}
