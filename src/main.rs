// Main entry point - Dependency injection and view dispatch
use std::sync::Arc;

use device_dashboard::application::alert_service::{AlertFilter, AlertService};
use device_dashboard::application::chart_renderer::ChartRegistry;
use device_dashboard::application::dashboard_service::{DashboardService, DashboardSurfaces};
use device_dashboard::application::monitor_service::MonitorService;
use device_dashboard::application::report_service::ReportService;
use device_dashboard::application::simulation_service::SimulationService;
use device_dashboard::application::user_service::UserService;
use device_dashboard::infrastructure::config::load_app_config;
use device_dashboard::infrastructure::http_client::ApiClient;
use device_dashboard::infrastructure::token_store::{FileTokenStore, TokenProvider};
use device_dashboard::presentation::app_state::AppState;
use device_dashboard::presentation::routes::{View, resolve};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = load_app_config()?;

    // Token store and API client (infrastructure layer)
    let tokens = Arc::new(FileTokenStore::new(&config.auth.token_path));
    let client = Arc::new(ApiClient::new(&config.backend, tokens.clone())?);

    // Services (application layer)
    let monitor_service = MonitorService::new(client.clone());
    let state = AppState {
        user_service: UserService::new(client.clone()),
        alert_service: AlertService::new(client.clone()),
        report_service: ReportService::new(client.clone()),
        simulation_service: SimulationService::new(client.clone()),
        dashboard_service: DashboardService::new(monitor_service.clone()),
        monitor_service,
    };

    // Resolve the requested view (presentation layer)
    let path = std::env::args().nth(1).unwrap_or_else(|| "/".to_string());
    let route = resolve(&path).ok_or_else(|| anyhow::anyhow!("no route for {path}"))?;

    match route.view {
        View::Login => {
            let username = std::env::var("DASHBOARD_USER").unwrap_or_default();
            let password = std::env::var("DASHBOARD_PASS").unwrap_or_default();
            let token = state.user_service.login(&username, &password).await?;
            tokens.store(&token).await?;
            println!("logged in as {username}");
        }
        View::DeviceCenter => {
            let devices = state.user_service.devices(None, 1, 10).await?;
            let summary = state.user_service.device_status_summary().await?;
            let output = serde_json::json!({
                "devices": devices,
                "statusSummary": summary,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        View::MonitorCenter => {
            let device_id = route
                .device_id
                .ok_or_else(|| anyhow::anyhow!("monitor route without a device id"))?;
            let mut registry = ChartRegistry::new();
            let surfaces = DashboardSurfaces::for_device(device_id);
            let dashboard = state
                .dashboard_service
                .device_dashboard(&mut registry, &surfaces, device_id)
                .await?;
            println!("{}", serde_json::to_string_pretty(&dashboard)?);
        }
        View::DataSimulation => {
            let models = state.simulation_service.models(None, 1, 10).await?;
            println!("{}", serde_json::to_string_pretty(&models)?);
        }
        View::AlertSystem => {
            let alerts = state
                .alert_service
                .unconfirmed_alerts(&AlertFilter::default())
                .await?;
            println!("{}", serde_json::to_string_pretty(&alerts)?);
        }
        View::ReportSystem => {
            let (today, all, weekly) = tokio::try_join!(
                state.report_service.today_alert_stats(),
                state.report_service.all_alert_stats(),
                state.report_service.weekly_alert_stats(),
            )?;
            let output = serde_json::json!({
                "today": today,
                "all": all,
                "weekly": weekly,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
