// Dashboard service - Use case for building the monitor-center view
use chrono::Days;

use crate::application::chart_renderer::{ChartRegistry, ChartSpec, ChartSurface};
use crate::application::monitor_service::MonitorService;
use crate::domain::chart::{GaugeSpec, LineChartSpec, SeriesInput};
use crate::domain::dashboard::Dashboard;
use crate::error::Result;

/// Base color of the health trend series.
pub const HEALTH_SERIES_COLOR: &str = "rgba(137, 121, 255, 1)";
/// Base color of the energy trend series.
pub const ENERGY_SERIES_COLOR: &str = "rgba(0, 178, 255, 1)";

const CARD_PAGE_SIZE: u32 = 12;

/// The monitor-center view's three drawing surfaces.
#[derive(Debug, Clone)]
pub struct DashboardSurfaces {
    pub health_chart: ChartSurface,
    pub energy_chart: ChartSurface,
    pub gauge: ChartSurface,
}

impl DashboardSurfaces {
    pub fn for_device(device_id: i64) -> Self {
        Self {
            health_chart: ChartSurface::new(format!("health-trend-{device_id}"), 600, 400),
            energy_chart: ChartSurface::new(format!("energy-trend-{device_id}"), 600, 400),
            gauge: ChartSurface::new(format!("health-gauge-{device_id}"), 300, 200),
        }
    }
}

#[derive(Clone)]
pub struct DashboardService {
    monitor: MonitorService,
}

impl DashboardService {
    pub fn new(monitor: MonitorService) -> Self {
        Self { monitor }
    }

    /// Assemble the dashboard for one device: health and energy series and
    /// the first card page are fetched concurrently, then the charts are
    /// rendered through the registry onto the view's surfaces.
    pub async fn device_dashboard(
        &self,
        registry: &mut ChartRegistry,
        surfaces: &DashboardSurfaces,
        device_id: i64,
    ) -> Result<Dashboard> {
        let (health, energy, cards) = futures::join!(
            self.monitor.health_series(device_id),
            self.monitor.energy_series(device_id),
            self.monitor.metric_cards(device_id, 1, CARD_PAGE_SIZE),
        );

        let health = health?;
        let energy = energy?;
        // A cards failure degrades to an empty tile row instead of sinking
        // the charts.
        let cards = match cards {
            Ok(page) => page.cards,
            Err(e) => {
                tracing::error!(device_id, error = %e, "metric cards unavailable");
                Vec::new()
            }
        };

        let health_chart = LineChartSpec::build(
            day_labels(health.values.len()),
            vec![SeriesInput::new("Health", health.values.clone(), HEALTH_SERIES_COLOR)],
        )?;
        registry.install(&surfaces.health_chart, ChartSpec::Line(health_chart.clone()));

        let energy_chart = LineChartSpec::build(
            day_labels(energy.values.len()),
            vec![SeriesInput::new("Energy", energy.values.clone(), ENERGY_SERIES_COLOR)],
        )?;
        registry.install(&surfaces.energy_chart, ChartSpec::Line(energy_chart.clone()));

        let health_gauge = match health.latest() {
            Some(value) => {
                let gauge = GaugeSpec::build(value, surfaces.gauge.width)?;
                registry.install(&surfaces.gauge, ChartSpec::Gauge(gauge.clone()));
                Some(gauge)
            }
            None => None,
        };

        Ok(Dashboard::new(
            format!("Device {device_id}"),
            health_chart,
            energy_chart,
            health_gauge,
            cards,
            energy.energy_cost,
        ))
    }
}

/// Date labels for the trailing n days, oldest first, ending today.
fn day_labels(len: usize) -> Vec<String> {
    let today = chrono::Local::now().date_naive();
    (0..len)
        .map(|i| {
            let back = (len - 1 - i) as u64;
            let day = today - Days::new(back);
            day.format("%m-%d").to_string()
        })
        .collect()
}
