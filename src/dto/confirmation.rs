use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SendCodeDto {
    pub email: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct VerifyCodeDto {
    pub email: String,
    pub code: String,
}
