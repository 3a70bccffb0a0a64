// Application layer - API services and dashboard assembly
pub mod alert_service;
pub mod chart_renderer;
pub mod dashboard_service;
pub mod monitor_service;
pub mod report_service;
pub mod simulation_service;
pub mod user_service;

use crate::error::{DashboardError, Result};

/// Turn a `success: false` envelope into a backend error.
pub(crate) fn check_success(success: bool, message: Option<String>) -> Result<()> {
    if success {
        Ok(())
    } else {
        Err(DashboardError::Backend(
            message.unwrap_or_else(|| "request rejected".to_string()),
        ))
    }
}
