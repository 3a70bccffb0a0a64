// Alert management operations
use std::sync::Arc;

use bytes::Bytes;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::application::check_success;
use crate::domain::alert::{Alert, AlertPage};
use crate::error::{DashboardError, Result};
use crate::infrastructure::http_client::ApiClient;

/// Filter and paging parameters for the unconfirmed-alert listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<NaiveDateTime>,
    pub page: u32,
    pub page_size: u32,
}

impl Default for AlertFilter {
    fn default() -> Self {
        Self {
            device_name: None,
            start_time: None,
            end_time: None,
            page: 1,
            page_size: 10,
        }
    }
}

#[derive(Clone)]
pub struct AlertService {
    client: Arc<ApiClient>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AlertIdsRequest {
    alert_ids: Vec<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UnconfirmedResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    total: i64,
    #[serde(default)]
    alerts: Vec<Alert>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    updated_count: Option<i64>,
}

impl AlertService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn unconfirmed_alerts(&self, filter: &AlertFilter) -> Result<AlertPage> {
        let response: UnconfirmedResponse = self
            .client
            .post_json("/api/alerts/getUnconfirmedAlerts", filter)
            .await?;
        check_success(response.success, response.message)?;
        Ok(AlertPage { total: response.total, alerts: response.alerts })
    }

    /// Confirm a batch of alerts. Ids arrive from the view as strings and
    /// are coerced to numbers before they go on the wire.
    pub async fn confirm_alerts<I, S>(&self, ids: I) -> Result<i64>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let alert_ids = coerce_ids(ids)?;
        let submitted = alert_ids.len() as i64;

        let response: UpdateResponse = self
            .client
            .put_json("/api/alerts/confirmAlert", &AlertIdsRequest { alert_ids })
            .await?;
        check_success(response.success, response.message)?;
        Ok(response.updated_count.unwrap_or(submitted))
    }

    pub async fn delete_alerts(&self, alert_ids: &[i64]) -> Result<i64> {
        let request = AlertIdsRequest { alert_ids: alert_ids.to_vec() };
        let response: UpdateResponse = self
            .client
            .delete_json("/api/alerts/deleteAlerts", &request)
            .await?;
        check_success(response.success, response.message)?;
        Ok(response.updated_count.unwrap_or(alert_ids.len() as i64))
    }

    /// XLSX export. Binary response, extended timeout.
    pub async fn export_alerts_xlsx(&self) -> Result<Bytes> {
        self.client.get_bytes("/api/alerts/exportAlertsToXLSX").await
    }
}

fn coerce_ids<I, S>(ids: I) -> Result<Vec<i64>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    ids.into_iter()
        .map(|id| {
            let raw = id.as_ref();
            raw.trim()
                .parse::<i64>()
                .map_err(|_| DashboardError::invalid_input(format!("alert id '{raw}' is not numeric")))
        })
        .collect()
}
