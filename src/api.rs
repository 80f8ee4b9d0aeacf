//! SolarEdge monitoring API client
//!
//! In-tree client for the monitoring cloud API, bound to a host-shared
//! HTTP session. The integration itself only calls `site_details`; the
//! host's sensor platform polls `site_overview` through the same handle.

pub mod client;
pub mod types;

pub use client::{DEFAULT_BASE_URL, SiteApi, SolarEdgeClient, build_session};
pub use types::{
    CurrentPower, EnergySummary, SiteDetails, SiteDetailsResponse, SiteLocation, SiteOverview,
    SiteOverviewResponse,
};
