use crate::dataset::DatasetStatus;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheckResponse {
    pub error: bool,
    pub dataset: DatasetStatus,
    pub sessions: usize,
}
