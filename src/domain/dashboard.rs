// Dashboard domain model
use serde::Serialize;

use super::chart::{GaugeSpec, LineChartSpec};
use super::monitor::MetricCard;

/// The assembled monitor-center view for one device.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub title: String,
    pub health_chart: LineChartSpec,
    pub energy_chart: LineChartSpec,
    pub health_gauge: Option<GaugeSpec>,
    pub cards: Vec<MetricCard>,
    pub energy_cost: f64,
}

impl Dashboard {
    pub fn new(
        title: String,
        health_chart: LineChartSpec,
        energy_chart: LineChartSpec,
        health_gauge: Option<GaugeSpec>,
        cards: Vec<MetricCard>,
        energy_cost: f64,
    ) -> Self {
        Self {
            title,
            health_chart,
            energy_chart,
            health_gauge,
            cards,
            energy_cost,
        }
    }
}
