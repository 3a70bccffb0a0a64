// Monitor-center operations
use std::sync::Arc;

use serde::Deserialize;

use crate::application::check_success;
use crate::domain::monitor::{CardPage, EnergySeries, HealthSeries, MetricCard};
use crate::error::Result;
use crate::infrastructure::http_client::ApiClient;

#[derive(Clone)]
pub struct MonitorService {
    client: Arc<ApiClient>,
}

#[derive(Debug, Deserialize)]
struct ValuesResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    values: Vec<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EnergyResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    values: Vec<f64>,
    #[serde(default)]
    energy_cost: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CardsResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    cards: Vec<MetricCard>,
    #[serde(default)]
    total_pages: u32,
}

impl MonitorService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Seven-day health-index series for a device.
    pub async fn health_series(&self, device_id: i64) -> Result<HealthSeries> {
        let response: ValuesResponse = self
            .client
            .get(&format!("/api/monitor/{device_id}/health"))
            .await?;
        check_success(response.success, response.message)?;
        Ok(HealthSeries { values: response.values })
    }

    /// Seven-day energy series plus the current day's cost.
    pub async fn energy_series(&self, device_id: i64) -> Result<EnergySeries> {
        let response: EnergyResponse = self
            .client
            .get(&format!("/api/monitor/{device_id}/energy"))
            .await?;
        check_success(response.success, response.message)?;
        Ok(EnergySeries { values: response.values, energy_cost: response.energy_cost })
    }

    /// Paginated metric cards for the dashboard tiles.
    pub async fn metric_cards(&self, device_id: i64, page: u32, page_size: u32) -> Result<CardPage> {
        let response: CardsResponse = self
            .client
            .get_query(
                &format!("/api/monitor/{device_id}/cards"),
                &[("page", page), ("pageSize", page_size)],
            )
            .await?;
        check_success(response.success, response.message)?;
        Ok(CardPage { cards: response.cards, total_pages: response.total_pages })
    }
}
