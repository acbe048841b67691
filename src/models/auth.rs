use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::UserResponse;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterRequest {
    #[schema(example = "earnzy_fan")]
    pub username: String,
    #[schema(example = "fan@example.com")]
    pub email: String,
    #[schema(example = "Password123")]
    pub password: String,
    /// 邀请人的推荐码（可选）
    #[schema(example = "AB12CD34")]
    pub referral_code: Option<String>,
    pub device_token: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "fan@example.com")]
    pub email: String,
    #[schema(example = "Password123")]
    pub password: String,
    pub device_token: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AdminLoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// access token 有效期（秒）
    pub expires_in: i64,
    pub user: Option<UserResponse>,
}
