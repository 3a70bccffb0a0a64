// Data-simulation domain models
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationModel {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelPage {
    pub models: Vec<SimulationModel>,
    pub total: i64,
}

/// Outcome of a simulation run over an uploaded data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    #[serde(default)]
    pub task_id: Option<String>,
    pub image_url: String,
    pub damage_location: String,
    pub lifespan: f64,
    pub health_index: f64,
}
