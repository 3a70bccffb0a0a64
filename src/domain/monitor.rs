// Monitor-center domain models
use serde::{Deserialize, Serialize};

/// Seven-day health-index series for one device.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthSeries {
    pub values: Vec<f64>,
}

impl HealthSeries {
    /// The most recent health index, feeding the gauge.
    pub fn latest(&self) -> Option<f64> {
        self.values.last().copied()
    }
}

/// Seven-day energy series plus the current day's cost.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergySeries {
    pub values: Vec<f64>,
    pub energy_cost: f64,
}

/// One dashboard tile. A health of -1 means the card carries no gauge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricCard {
    pub name: String,
    pub value: f64,
    pub unit: String,
    pub health: f64,
}

impl MetricCard {
    pub fn has_gauge(&self) -> bool {
        self.health >= 0.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardPage {
    pub cards: Vec<MetricCard>,
    pub total_pages: u32,
}
