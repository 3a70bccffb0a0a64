// Report-system operations
use std::sync::Arc;

use bytes::Bytes;
use serde::Deserialize;

use crate::application::check_success;
use crate::domain::alert::{AlertStats, DailyAlertCount, WeeklyAlertStats};
use crate::domain::device::{AttributeValue, DeviceAttributes};
use crate::error::Result;
use crate::infrastructure::http_client::ApiClient;

#[derive(Clone)]
pub struct ReportService {
    client: Arc<ApiClient>,
}

#[derive(Debug, Deserialize)]
struct StatsResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    total: i64,
    #[serde(default)]
    confirmed: i64,
    #[serde(default)]
    unconfirmed: i64,
}

#[derive(Debug, Deserialize)]
struct WeeklyResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    days: Vec<DailyAlertCount>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AttributesResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    device_id: i64,
    #[serde(default)]
    attributes: Vec<AttributeValue>,
}

impl ReportService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn today_alert_stats(&self) -> Result<AlertStats> {
        self.alert_stats("/api/reports/alerts/getTodayAlertStats").await
    }

    pub async fn all_alert_stats(&self) -> Result<AlertStats> {
        self.alert_stats("/api/reports/alerts/getAllAlertStats").await
    }

    async fn alert_stats(&self, path: &str) -> Result<AlertStats> {
        let response: StatsResponse = self.client.get(path).await?;
        check_success(response.success, response.message)?;
        Ok(AlertStats {
            total: response.total,
            confirmed: response.confirmed,
            unconfirmed: response.unconfirmed,
        })
    }

    /// This week's alert counts, one bucket per day.
    pub async fn weekly_alert_stats(&self) -> Result<WeeklyAlertStats> {
        let response: WeeklyResponse = self
            .client
            .get("/api/reports/alerts/getWeeklyAlertStats")
            .await?;
        check_success(response.success, response.message)?;
        Ok(WeeklyAlertStats { days: response.days })
    }

    /// The report screen's eight named attribute values for a device.
    pub async fn device_attributes(&self, device_id: i64) -> Result<DeviceAttributes> {
        let response: AttributesResponse = self
            .client
            .get_query(
                "/api/reports/devices/getDeviceAttributes",
                &[("deviceId", device_id)],
            )
            .await?;
        check_success(response.success, response.message)?;
        Ok(DeviceAttributes {
            device_id: response.device_id,
            attributes: response.attributes,
        })
    }

    /// XLSX export of the attribute set. Binary response, extended timeout.
    pub async fn export_device_attributes(&self, device_id: i64) -> Result<Bytes> {
        self.client
            .get_bytes_query(
                "/api/reports/devices/exportDeviceAttributes",
                &[("deviceId", device_id)],
            )
            .await
    }
}
