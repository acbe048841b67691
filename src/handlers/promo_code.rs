use crate::middlewares::current_claims;
use crate::models::*;
use crate::services::PromoCodeService;
use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    post,
    path = "/promo/redeem",
    tag = "promo",
    security(("bearer_auth" = [])),
    request_body = RedeemPromoCodeRequest,
    responses(
        (status = 200, description = "兑换成功", body = RedeemPromoCodeResponse),
        (status = 400, description = "码无效、已过期、已兑换或名额用尽")
    )
)]
pub async fn redeem(
    promo_code_service: web::Data<PromoCodeService>,
    req: HttpRequest,
    request: web::Json<RedeemPromoCodeRequest>,
) -> Result<HttpResponse> {
    let claims = match current_claims(&req) {
        Ok(claims) => claims,
        Err(e) => return Ok(e.error_response()),
    };
    match promo_code_service
        .redeem(&claims.sub, request.into_inner())
        .await
    {
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

pub async fn list_promo_codes(
    promo_code_service: web::Data<PromoCodeService>,
) -> Result<HttpResponse> {
    match promo_code_service.list().await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/admin/promo-codes",
    tag = "admin",
    security(("bearer_auth" = [])),
    request_body = CreatePromoCodeRequest,
    responses(
        (status = 200, description = "兑换码已创建", body = PromoCodeResponse)
    )
)]
pub async fn create_promo_code(
    promo_code_service: web::Data<PromoCodeService>,
    request: web::Json<CreatePromoCodeRequest>,
) -> Result<HttpResponse> {
    match promo_code_service.create(request.into_inner()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub async fn toggle_promo_code(
    promo_code_service: web::Data<PromoCodeService>,
    path: web::Path<String>,
    request: web::Json<ToggleActiveRequest>,
) -> Result<HttpResponse> {
    match promo_code_service
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

pub async fn delete_promo_code(
    promo_code_service: web::Data<PromoCodeService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    match promo_code_service.delete(&path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Promo code deleted"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn promo_config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/promo").route("/redeem", web::post().to(redeem)));
}

pub fn admin_promo_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/promo-codes")
            .route("", web::get().to(list_promo_codes))
            .route("", web::post().to(create_promo_code))
            .route("/{id}/toggle", web::post().to(toggle_promo_code))
            .route("/{id}", web::delete().to(delete_promo_code)),
    );
}
