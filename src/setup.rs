//! Entry setup and validation
//!
//! One network round trip against the monitoring API decides whether a
//! configuration entry comes up, is retried later by the host, or is
//! rejected as permanently misconfigured. Retry scheduling and backoff
//! stay with the host.

use std::sync::Arc;

use reqwest::Client;

use crate::api::{SiteApi, SolarEdgeClient};
use crate::config::ApiConfig;
use crate::entry::{ConfigEntry, RuntimeData};
use crate::error::Result;
use crate::logging::get_logger;
use crate::platform::{PLATFORMS, PlatformForwarder};

/// Result of one activation attempt
#[derive(Debug, Clone)]
pub enum SetupOutcome {
    /// The site is reachable and active; the runtime handle is ready
    Ready(RuntimeData),

    /// Transient failure; the host should retry activation later
    NotReady { reason: String },

    /// The site is reachable but not active; setup must not be retried
    Invalid { reason: String },
}

impl SetupOutcome {
    /// Whether this outcome carries a runtime handle
    pub fn is_ready(&self) -> bool {
        matches!(self, SetupOutcome::Ready(_))
    }
}

/// Validate the configured site and build its runtime handle.
///
/// Constructs a client bound to the entry's API key and the host-shared
/// session, then classifies a single `site_details` call. No timeout is
/// applied beyond what the shared session enforces.
pub async fn activate(entry: &ConfigEntry, session: &Client, api: &ApiConfig) -> SetupOutcome {
    let client = SolarEdgeClient::new(entry.api_key.clone(), session.clone())
        .with_base_url(api.base_url.clone());
    validate_site(Arc::new(client), &entry.site_id).await
}

/// Classification core behind [`activate`], usable with any [`SiteApi`].
pub async fn validate_site(api: Arc<dyn SiteApi>, site_id: &str) -> SetupOutcome {
    let logger = get_logger("setup");
    logger.debug(&format!(
        "Validating monitoring API access for site {}",
        site_id
    ));

    let response = match api.site_details(site_id).await {
        Ok(response) => response,
        Err(err) => {
            logger.error(&format!(
                "Could not retrieve details for site {}: {}",
                site_id, err
            ));
            return SetupOutcome::NotReady {
                reason: err.to_string(),
            };
        }
    };

    logger.debug(&format!(
        "Details response for site {} received: {:?}",
        site_id, response
    ));

    let Some(details) = response.details else {
        logger.error(&format!(
            "Missing details block in response for site {}",
            site_id
        ));
        return SetupOutcome::NotReady {
            reason: "response carried no details block".to_string(),
        };
    };

    let Some(status) = details.status.as_deref() else {
        logger.error(&format!("Missing status in details for site {}", site_id));
        return SetupOutcome::NotReady {
            reason: "site details carried no status".to_string(),
        };
    };

    if !status.eq_ignore_ascii_case("active") {
        logger.error(&format!(
            "Site {} is not active (status: {})",
            site_id, status
        ));
        return SetupOutcome::Invalid {
            reason: format!("site status is {}", status),
        };
    }

    logger.debug(&format!("Site {} is active", site_id));
    SetupOutcome::Ready(RuntimeData::new(api))
}

/// Set up a configuration entry end to end.
///
/// On [`SetupOutcome::Ready`] the runtime handle is attached to the entry
/// and platform setup is forwarded to the host. Forwarder failures are the
/// only errors surfaced here; classification never is.
pub async fn setup_entry(
    entry: &mut ConfigEntry,
    session: &Client,
    api: &ApiConfig,
    platforms: &dyn PlatformForwarder,
) -> Result<SetupOutcome> {
    let outcome = activate(entry, session, api).await;
    if let SetupOutcome::Ready(data) = &outcome {
        entry.attach_runtime_data(data.clone());
        platforms.forward_setup(entry, PLATFORMS).await?;
    }
    Ok(outcome)
}

/// Unload a configuration entry, discarding its runtime handle.
pub async fn unload_entry(
    entry: &mut ConfigEntry,
    platforms: &dyn PlatformForwarder,
) -> Result<bool> {
    let unloaded = platforms.unload(entry, PLATFORMS).await?;
    if unloaded {
        entry.clear_runtime_data();
    }
    Ok(unloaded)
}
