use crate::middlewares::current_claims;
use crate::models::*;
use crate::services::UserService;
use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

const LEADERBOARD_SIZE: u64 = 50;

#[utoipa::path(
    get,
    path = "/users/me",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "当前用户资料", body = UserResponse),
        (status = 401, description = "未认证")
    )
)]
pub async fn me(user_service: web::Data<UserService>, req: HttpRequest) -> Result<HttpResponse> {
    let claims = match current_claims(&req) {
        Ok(claims) => claims,
        Err(e) => return Ok(e.error_response()),
    };
    match user_service.get_user(&claims.sub).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/users/device-token",
    tag = "users",
    security(("bearer_auth" = [])),
    request_body = UpdateDeviceTokenRequest,
    responses(
        (status = 200, description = "推送 token 已更新")
    )
)]
pub async fn update_device_token(
    user_service: web::Data<UserService>,
    req: HttpRequest,
    request: web::Json<UpdateDeviceTokenRequest>,
) -> Result<HttpResponse> {
    let claims = match current_claims(&req) {
        Ok(claims) => claims,
        Err(e) => return Ok(e.error_response()),
    };
    match user_service
        .update_device_token(&claims.sub, request.into_inner().device_token)
        .await
    {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Device token updated"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/leaderboard",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "按累计收入排名的前 50 名用户")
    )
)]
pub async fn leaderboard(user_service: web::Data<UserService>) -> Result<HttpResponse> {
    match user_service.leaderboard(LEADERBOARD_SIZE).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

// -----------------------------
// 管理端
// -----------------------------

#[utoipa::path(
    get,
    path = "/admin/users",
    tag = "admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "用户列表")
    )
)]
pub async fn list_users(
    user_service: web::Data<UserService>,
    query: web::Query<UserListQuery>,
) -> Result<HttpResponse> {
    match user_service.list_users(&query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/admin/users/{id}",
    tag = "admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "用户详情", body = UserResponse),
        (status = 404, description = "用户不存在")
    )
)]
pub async fn get_user(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    match user_service.get_user(&path.into_inner()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/admin/users/{id}/ban",
    tag = "admin",
    security(("bearer_auth" = [])),
    request_body = BanUserRequest,
    responses(
        (status = 200, description = "封禁状态已更新", body = UserResponse),
        (status = 404, description = "用户不存在")
    )
)]
pub async fn ban_user(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
    request: web::Json<BanUserRequest>,
) -> Result<HttpResponse> {
    match user_service
        .set_ban(&path.into_inner(), request.into_inner())
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn user_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .route("/me", web::get().to(me))
            .route("/device-token", web::post().to(update_device_token)),
    )
    .route("/leaderboard", web::get().to(leaderboard));
}

pub fn admin_user_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .route("", web::get().to(list_users))
            .route("/{id}", web::get().to(get_user))
            .route("/{id}/ban", web::post().to(ban_user)),
    );
}
