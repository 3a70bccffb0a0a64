// Data-simulation operations
use std::sync::Arc;

use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::application::check_success;
use crate::domain::simulation::{ModelPage, SimulationModel, SimulationResult};
use crate::error::Result;
use crate::infrastructure::http_client::ApiClient;

#[derive(Clone)]
pub struct SimulationService {
    client: Arc<ApiClient>,
}

#[derive(Debug, Deserialize)]
struct ModelsResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    models: Vec<SimulationModel>,
    #[serde(default)]
    total: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SimulationResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(flatten)]
    result: Option<SimulationResult>,
}

impl SimulationService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Paginated model listing with fuzzy search.
    pub async fn models(
        &self,
        search_query: Option<&str>,
        page: u32,
        page_size: u32,
    ) -> Result<ModelPage> {
        let mut query = vec![
            ("page".to_string(), page.to_string()),
            ("pageSize".to_string(), page_size.to_string()),
        ];
        if let Some(search) = search_query {
            query.push(("searchQuery".to_string(), search.to_string()));
        }

        let response: ModelsResponse = self
            .client
            .get_query("/api/simulation/getModels", &query)
            .await?;
        check_success(response.success, response.message)?;
        Ok(ModelPage { models: response.models, total: response.total })
    }

    /// Upload a data file and run the simulation. The backend answers
    /// synchronously with the result.
    pub async fn submit(
        &self,
        model_id: i64,
        device_id: i64,
        file_name: &str,
        file: Vec<u8>,
    ) -> Result<SimulationResult> {
        let part = Part::bytes(file).file_name(file_name.to_string());
        let form = Form::new()
            .text("modelId", model_id.to_string())
            .text("deviceId", device_id.to_string())
            .part("file", part);

        let response: SimulationResponse = self
            .client
            .post_multipart("/api/simulation/getSimulationResult", form)
            .await?;
        check_success(response.success, response.message)?;
        response
            .result
            .ok_or_else(|| crate::error::DashboardError::backend("empty simulation response"))
    }
}
