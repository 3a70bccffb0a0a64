// Alert domain models
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: i64,
    pub device_id: i64,
    pub device_name: String,
    #[serde(default)]
    pub severity: Option<String>,
    pub confirmed: bool,
    pub timestamp: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertPage {
    pub total: i64,
    pub alerts: Vec<Alert>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertStats {
    pub total: i64,
    pub confirmed: i64,
    pub unconfirmed: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyAlertCount {
    pub date: NaiveDate,
    pub count: i64,
}

/// Alert counts for the current week, one bucket per day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyAlertStats {
    pub days: Vec<DailyAlertCount>,
}
