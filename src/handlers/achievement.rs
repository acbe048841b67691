use crate::models::*;
use crate::services::AchievementService;
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/achievements",
    tag = "achievements",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "启用中的成就列表")
    )
)]
pub async fn list_achievements(
    achievement_service: web::Data<AchievementService>,
) -> Result<HttpResponse> {
    match achievement_service.list_active().await {
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

pub async fn admin_list_achievements(
    achievement_service: web::Data<AchievementService>,
) -> Result<HttpResponse> {
    match achievement_service.list_all().await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub async fn create_achievement(
    achievement_service: web::Data<AchievementService>,
    request: web::Json<CreateAchievementRequest>,
) -> Result<HttpResponse> {
    match achievement_service.create(request.into_inner()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub async fn update_achievement(
    achievement_service: web::Data<AchievementService>,
    path: web::Path<String>,
    request: web::Json<UpdateAchievementRequest>,
) -> Result<HttpResponse> {
    match achievement_service
        .update(&path.into_inner(), request.into_inner())
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub async fn toggle_achievement(
    achievement_service: web::Data<AchievementService>,
    path: web::Path<String>,
    request: web::Json<ToggleActiveRequest>,
) -> Result<HttpResponse> {
    match achievement_service
        .toggle(&path.into_inner(), request.into_inner())
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub async fn delete_achievement(
    achievement_service: web::Data<AchievementService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    match achievement_service.delete(&path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Achievement deleted"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn achievement_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/achievements", web::get().to(list_achievements));
}

pub fn admin_achievement_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/achievements")
            .route("", web::get().to(admin_list_achievements))
            .route("", web::post().to(create_achievement))
            .route("/{id}", web::put().to(update_achievement))
            .route("/{id}/toggle", web::post().to(toggle_achievement))
            .route("/{id}", web::delete().to(delete_achievement)),
    );
}
