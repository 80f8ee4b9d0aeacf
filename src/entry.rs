//! Configuration entries and their runtime data
//!
//! A [`ConfigEntry`] is the host-managed record of one configured site:
//! immutable credentials plus the runtime handle attached while the entry
//! is active.

use std::fmt;
use std::sync::Arc;

use uuid::Uuid;

use crate::api::SiteApi;

/// Runtime data attached to a configuration entry after validation
#[derive(Clone)]
pub struct RuntimeData {
    /// Validated monitoring API client for this entry's site
    pub api_client: Arc<dyn SiteApi>,
}

impl RuntimeData {
    /// Wrap a validated client handle
    pub fn new(api_client: Arc<dyn SiteApi>) -> Self {
        Self { api_client }
    }
}

impl fmt::Debug for RuntimeData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuntimeData").finish_non_exhaustive()
    }
}

/// Host-managed record of one configured site
#[derive(Debug, Clone)]
pub struct ConfigEntry {
    /// Stable unique identifier assigned at creation
    pub entry_id: String,

    /// Human-readable title shown by the host
    pub title: String,

    /// Monitoring API key
    pub api_key: String,

    /// Identifier of the monitored site
    pub site_id: String,

    runtime: Option<RuntimeData>,
}

impl ConfigEntry {
    /// Create a new entry from its credentials
    pub fn new<S: Into<String>>(title: S, api_key: S, site_id: S) -> Self {
        Self {
            entry_id: Uuid::new_v4().to_string(),
            title: title.into(),
            api_key: api_key.into(),
            site_id: site_id.into(),
            runtime: None,
        }
    }

    /// Runtime data, present only while the entry is active
    pub fn runtime_data(&self) -> Option<&RuntimeData> {
        self.runtime.as_ref()
    }

    pub(crate) fn attach_runtime_data(&mut self, data: RuntimeData) {
        self.runtime = Some(data);
    }

    pub(crate) fn clear_runtime_data(&mut self) {
        self.runtime = None;
    }
}
