use crate::models::*;
use crate::services::{AutoBanService, NotificationService, StatsService};
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/admin/stats",
    tag = "admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "后台首页统计", body = DashboardStats)
    )
)]
pub async fn dashboard_stats(stats_service: web::Data<StatsService>) -> Result<HttpResponse> {
    match stats_service.dashboard().await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

// -----------------------------
// 通知
// -----------------------------

pub async fn list_notifications(
    notification_service: web::Data<NotificationService>,
    params: web::Query<PaginationParams>,
) -> Result<HttpResponse> {
    match notification_service.list(&params).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/admin/notifications/send",
    tag = "admin",
    security(("bearer_auth" = [])),
    request_body = SendNotificationRequest,
    responses(
        (status = 200, description = "通知已创建并推送", body = NotificationResponse)
    )
)]
pub async fn send_notification(
    notification_service: web::Data<NotificationService>,
    request: web::Json<SendNotificationRequest>,
) -> Result<HttpResponse> {
    match notification_service.send(request.into_inner()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

// -----------------------------
// 自动封禁规则
// -----------------------------

pub async fn list_auto_ban_rules(
    auto_ban_service: web::Data<AutoBanService>,
) -> Result<HttpResponse> {
    match auto_ban_service.list_rules().await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/admin/auto-ban-rules",
    tag = "admin",
    security(("bearer_auth" = [])),
    request_body = CreateAutoBanRuleRequest,
    responses(
        (status = 200, description = "规则已创建", body = AutoBanRuleResponse)
    )
)]
pub async fn create_auto_ban_rule(
    auto_ban_service: web::Data<AutoBanService>,
    request: web::Json<CreateAutoBanRuleRequest>,
) -> Result<HttpResponse> {
    match auto_ban_service.create_rule(request.into_inner()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub async fn toggle_auto_ban_rule(
    auto_ban_service: web::Data<AutoBanService>,
    path: web::Path<String>,
    request: web::Json<ToggleActiveRequest>,
) -> Result<HttpResponse> {
    match auto_ban_service
        .toggle_rule(&path.into_inner(), request.into_inner())
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub async fn delete_auto_ban_rule(
    auto_ban_service: web::Data<AutoBanService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    match auto_ban_service.delete_rule(&path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Auto-ban rule deleted"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn admin_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/stats", web::get().to(dashboard_stats))
        .service(
            web::scope("/notifications")
                .route("", web::get().to(list_notifications))
                .route("/send", web::post().to(send_notification)),
        )
        .service(
            web::scope("/auto-ban-rules")
                .route("", web::get().to(list_auto_ban_rules))
                .route("", web::post().to(create_auto_ban_rule))
                .route("/{id}/toggle", web::post().to(toggle_auto_ban_rule))
                .route("/{id}", web::delete().to(delete_auto_ban_rule)),
        );
}
