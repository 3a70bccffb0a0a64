// Application state shared by the views
use crate::application::alert_service::AlertService;
use crate::application::dashboard_service::DashboardService;
use crate::application::monitor_service::MonitorService;
use crate::application::report_service::ReportService;
use crate::application::simulation_service::SimulationService;
use crate::application::user_service::UserService;

#[derive(Clone)]
pub struct AppState {
    pub user_service: UserService,
    pub alert_service: AlertService,
    pub monitor_service: MonitorService,
    pub report_service: ReportService,
    pub simulation_service: SimulationService,
    pub dashboard_service: DashboardService,
}
