//! Typed responses for the SolarEdge monitoring API
//!
//! The wire format is an informally specified nested JSON mapping; every
//! field is optional here so that shape mismatches surface as absent values
//! instead of hard decode failures.

use chrono::NaiveDate;
use serde::Deserialize;

/// Envelope of `site/{id}/details.json`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SiteDetailsResponse {
    /// Site master data; absent on malformed responses
    pub details: Option<SiteDetails>,
}

/// Site master data as reported by the monitoring API.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteDetails {
    /// Numeric site identifier
    pub id: Option<u64>,

    /// Display name of the installation
    pub name: Option<String>,

    /// Owning account identifier
    pub account_id: Option<u64>,

    /// Lifecycle status ("Active", "Pending", "Disabled")
    pub status: Option<String>,

    /// Installed peak power in kWp
    pub peak_power: Option<f64>,

    /// Commissioning date
    pub installation_date: Option<NaiveDate>,

    /// Timestamp of the last received telemetry, API-local format
    pub last_update_time: Option<String>,

    /// Physical location of the installation
    pub location: Option<SiteLocation>,
}

/// Location block of the site details.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteLocation {
    pub country: Option<String>,
    pub city: Option<String>,
    pub time_zone: Option<String>,
}

/// Envelope of `site/{id}/overview.json`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SiteOverviewResponse {
    /// Aggregate production data; absent on malformed responses
    pub overview: Option<SiteOverview>,
}

/// Aggregate production overview polled by the sensor platform.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteOverview {
    /// Timestamp of the last overview refresh, API-local format
    pub last_update_time: Option<String>,

    /// Production since commissioning
    pub life_time_data: Option<EnergySummary>,

    /// Production over the last year
    pub last_year_data: Option<EnergySummary>,

    /// Production over the last month
    pub last_month_data: Option<EnergySummary>,

    /// Production over the last day
    pub last_day_data: Option<EnergySummary>,

    /// Momentary production
    pub current_power: Option<CurrentPower>,
}

/// Energy/revenue pair used by the overview aggregates.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EnergySummary {
    /// Energy in Wh
    pub energy: Option<f64>,

    /// Revenue in the account currency
    pub revenue: Option<f64>,
}

/// Momentary power block of the overview.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CurrentPower {
    /// Power in W
    pub power: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_details_payload() {
        let body = r#"{
            "details": {
                "id": 123,
                "name": "Rooftop PV",
                "accountId": 7,
                "status": "Active",
                "peakPower": 9.8,
                "installationDate": "2021-04-17",
                "lastUpdateTime": "2026-08-07 11:58:03",
                "location": {"country": "Netherlands", "city": "Utrecht", "timeZone": "Europe/Amsterdam"},
                "publicSettings": {"isPublic": false}
            }
        }"#;
        let response: SiteDetailsResponse = serde_json::from_str(body).unwrap();
        let details = response.details.unwrap();
        assert_eq!(details.id, Some(123));
        assert_eq!(details.status.as_deref(), Some("Active"));
        assert_eq!(
            details.installation_date,
            Some(NaiveDate::from_ymd_opt(2021, 4, 17).unwrap())
        );
        assert_eq!(
            details.location.unwrap().time_zone.as_deref(),
            Some("Europe/Amsterdam")
        );
    }

    #[test]
    fn missing_details_block_decodes_to_none() {
        let response: SiteDetailsResponse = serde_json::from_str("{}").unwrap();
        assert!(response.details.is_none());

        let response: SiteDetailsResponse =
            serde_json::from_str(r#"{"details": null}"#).unwrap();
        assert!(response.details.is_none());
    }

    #[test]
    fn missing_status_decodes_to_none() {
        let response: SiteDetailsResponse =
            serde_json::from_str(r#"{"details": {"id": 1, "name": "x"}}"#).unwrap();
        assert!(response.details.unwrap().status.is_none());
    }

    #[test]
    fn parses_overview_payload() {
        let body = r#"{
            "overview": {
                "lastUpdateTime": "2026-08-07 12:00:00",
                "lifeTimeData": {"energy": 12345678.0, "revenue": 2469.1},
                "lastDayData": {"energy": 4021.0},
                "currentPower": {"power": 1830.5}
            }
        }"#;
        let response: SiteOverviewResponse = serde_json::from_str(body).unwrap();
        let overview = response.overview.unwrap();
        assert_eq!(overview.current_power.unwrap().power, Some(1830.5));
        assert_eq!(overview.life_time_data.unwrap().energy, Some(12345678.0));
        assert!(overview.last_year_data.is_none());
    }
}
