use crate::middlewares::current_claims;
use crate::models::*;
use crate::services::ReferralService;
use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/referrals/code",
    tag = "referrals",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "我的推荐码与分享链接", body = ReferralCodeResponse)
    )
)]
pub async fn get_code(
    referral_service: web::Data<ReferralService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let claims = match current_claims(&req) {
        Ok(claims) => claims,
        Err(e) => return Ok(e.error_response()),
    };
    match referral_service.get_code(&claims.sub).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/referrals/stats",
    tag = "referrals",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "推荐人数、累计收益与最近记录", body = ReferralStatsResponse)
    )
)]
pub async fn get_stats(
    referral_service: web::Data<ReferralService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let claims = match current_claims(&req) {
        Ok(claims) => claims,
        Err(e) => return Ok(e.error_response()),
    };
    match referral_service.get_stats(&claims.sub).await {
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

pub async fn list_referrals(
    referral_service: web::Data<ReferralService>,
    params: web::Query<PaginationParams>,
) -> Result<HttpResponse> {
    match referral_service.list(&params).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn referral_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/referrals")
            .route("/code", web::get().to(get_code))
            .route("/stats", web::get().to(get_stats)),
    );
}

pub fn admin_referral_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/referrals", web::get().to(list_referrals));
}
