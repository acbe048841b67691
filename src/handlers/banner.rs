use crate::models::*;
use crate::services::BannerService;
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/banners",
    tag = "banners",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "启用中的横幅列表")
    )
)]
pub async fn list_banners(banner_service: web::Data<BannerService>) -> Result<HttpResponse> {
    match banner_service.list_active().await {
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

pub async fn admin_list_banners(banner_service: web::Data<BannerService>) -> Result<HttpResponse> {
    match banner_service.list_all().await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub async fn create_banner(
    banner_service: web::Data<BannerService>,
    request: web::Json<CreateBannerRequest>,
) -> Result<HttpResponse> {
    match banner_service.create(request.into_inner()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub async fn update_banner(
    banner_service: web::Data<BannerService>,
    path: web::Path<String>,
    request: web::Json<UpdateBannerRequest>,
) -> Result<HttpResponse> {
    match banner_service
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

pub async fn toggle_banner(
    banner_service: web::Data<BannerService>,
    path: web::Path<String>,
    request: web::Json<ToggleActiveRequest>,
) -> Result<HttpResponse> {
    match banner_service
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

pub async fn delete_banner(
    banner_service: web::Data<BannerService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    match banner_service.delete(&path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Banner deleted"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn banner_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/banners", web::get().to(list_banners));
}

pub fn admin_banner_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/banners")
            .route("", web::get().to(admin_list_banners))
            .route("", web::post().to(create_banner))
            .route("/{id}", web::put().to(update_banner))
            .route("/{id}/toggle", web::post().to(toggle_banner))
            .route("/{id}", web::delete().to(delete_banner)),
    );
}
