// User account and device listing operations
use std::sync::Arc;

use serde::Deserialize;

use crate::application::check_success;
use crate::domain::device::{Device, DevicePage, Pagination, StatusCount};
use crate::domain::user::UserInfo;
use crate::error::{DashboardError, Result};
use crate::infrastructure::http_client::ApiClient;

#[derive(Clone)]
pub struct UserService {
    client: Arc<ApiClient>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    status: String,
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StatusResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct InfoResponse {
    #[serde(default)]
    error: Option<String>,
    #[serde(flatten)]
    info: Option<UserInfo>,
}

#[derive(Debug, Deserialize)]
struct DevicesResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    devices: Vec<Device>,
    pagination: Option<Pagination>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CountResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    device_count: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatusSummaryResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    status_summary: Vec<StatusCount>,
}

#[derive(Debug, Deserialize)]
struct DeviceListResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    devices: Vec<Device>,
}

#[derive(Debug, Deserialize)]
struct GetDeviceResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    device: Option<Device>,
}

impl UserService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Exchange credentials for a bearer token. Persisting the token is the
    /// caller's job; this stays a pass-through.
    pub async fn login(&self, username: &str, password: &str) -> Result<String> {
        let response: TokenResponse = self
            .client
            .post_query(
                "/api/user/account/token/",
                &[("username", username), ("password", password)],
            )
            .await?;

        if response.status != "success" {
            let message = response
                .message
                .unwrap_or_else(|| "login rejected".to_string());
            tracing::error!(%message, "login failed");
            return Err(DashboardError::Authentication(message));
        }

        response
            .token
            .ok_or_else(|| DashboardError::Authentication("token missing from login response".to_string()))
    }

    pub async fn register(&self, username: &str, password: &str, phone: &str) -> Result<()> {
        let response: StatusResponse = self
            .client
            .post_query(
                "/api/user/account/register/",
                &[("username", username), ("password", password), ("phone", phone)],
            )
            .await?;

        if response.status != "success" {
            return Err(DashboardError::Backend(
                response.message.unwrap_or_else(|| "registration rejected".to_string()),
            ));
        }
        Ok(())
    }

    pub async fn user_info(&self) -> Result<UserInfo> {
        let response: InfoResponse = self.client.get("/api/user/account/info/").await?;
        if let Some(error) = response.error {
            return Err(DashboardError::Backend(error));
        }
        response
            .info
            .ok_or_else(|| DashboardError::backend("empty user info response"))
    }

    /// Paginated device listing, optionally filtered by a search string.
    pub async fn devices(
        &self,
        search_query: Option<&str>,
        page: u32,
        page_size: u32,
    ) -> Result<DevicePage> {
        let mut query = vec![
            ("page".to_string(), page.to_string()),
            ("pageSize".to_string(), page_size.to_string()),
        ];
        if let Some(search) = search_query {
            query.push(("searchQuery".to_string(), search.to_string()));
        }

        let response: DevicesResponse = self
            .client
            .get_query("/api/components/user/devices", &query)
            .await?;
        check_success(response.success, response.message)?;

        let pagination = response.pagination.unwrap_or(Pagination {
            total: response.devices.len() as i64,
            page,
            page_size,
            total_pages: 1,
        });

        Ok(DevicePage { devices: response.devices, pagination })
    }

    pub async fn device_count(&self) -> Result<i64> {
        let response: CountResponse = self
            .client
            .get("/api/components/user/devices/count")
            .await?;
        check_success(response.success, response.message)?;
        Ok(response.device_count)
    }

    pub async fn device_status_summary(&self) -> Result<Vec<StatusCount>> {
        let response: StatusSummaryResponse = self
            .client
            .get("/api/components/user/devices/status-summary")
            .await?;
        check_success(response.success, response.message)?;
        Ok(response.status_summary)
    }

    /// Devices whose status is anything other than healthy.
    pub async fn defective_devices(&self) -> Result<Vec<Device>> {
        let response: DeviceListResponse = self
            .client
            .get("/api/components/user/devices/defective")
            .await?;
        check_success(response.success, response.message)?;
        Ok(response.devices)
    }

    pub async fn device_by_id(&self, device_id: i64) -> Result<Device> {
        let response: GetDeviceResponse = self
            .client
            .get_query("/api/components/getdevice", &[("deviceId", device_id)])
            .await?;
        check_success(response.success, response.message)?;
        response
            .device
            .ok_or_else(|| DashboardError::backend(format!("device {device_id} missing from response")))
    }
}
