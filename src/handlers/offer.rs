use crate::models::*;
use crate::services::OfferService;
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/offers",
    tag = "offers",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "启用中的活动列表")
    )
)]
pub async fn list_offers(offer_service: web::Data<OfferService>) -> Result<HttpResponse> {
    match offer_service.list_active().await {
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

pub async fn admin_list_offers(offer_service: web::Data<OfferService>) -> Result<HttpResponse> {
    match offer_service.list_all().await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/admin/offers",
    tag = "admin",
    security(("bearer_auth" = [])),
    request_body = CreateOfferRequest,
    responses(
        (status = 200, description = "活动已创建", body = OfferResponse)
    )
)]
pub async fn create_offer(
    offer_service: web::Data<OfferService>,
    request: web::Json<CreateOfferRequest>,
) -> Result<HttpResponse> {
    match offer_service.create(request.into_inner()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub async fn update_offer(
    offer_service: web::Data<OfferService>,
    path: web::Path<String>,
    request: web::Json<UpdateOfferRequest>,
) -> Result<HttpResponse> {
    match offer_service
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

pub async fn toggle_offer(
    offer_service: web::Data<OfferService>,
    path: web::Path<String>,
    request: web::Json<ToggleActiveRequest>,
) -> Result<HttpResponse> {
    match offer_service
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

pub async fn delete_offer(
    offer_service: web::Data<OfferService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    match offer_service.delete(&path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Offer deleted"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn offer_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/offers", web::get().to(list_offers));
}

pub fn admin_offer_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/offers")
            .route("", web::get().to(admin_list_offers))
            .route("", web::post().to(create_offer))
            .route("/{id}", web::put().to(update_offer))
            .route("/{id}/toggle", web::post().to(toggle_offer))
            .route("/{id}", web::delete().to(delete_offer)),
    );
}
