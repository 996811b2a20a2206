use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportCreateDto {
    pub reason: Option<String>,
    pub details: Option<String>,
}
