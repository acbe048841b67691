use crate::middlewares::current_claims;
use crate::services::ClaimService;
use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/claims/daily-bonus",
    tag = "claims",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "签到状态与下次奖励", body = DailyBonusStatusResponse)
    )
)]
pub async fn daily_bonus_status(
    claim_service: web::Data<ClaimService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let claims = match current_claims(&req) {
        Ok(claims) => claims,
        Err(e) => return Ok(e.error_response()),
    };
    match claim_service.daily_bonus_status(&claims.sub).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/claims/daily-bonus",
    tag = "claims",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "签到成功", body = DailyBonusClaimResponse),
        (status = 400, description = "今日已签到")
    )
)]
pub async fn claim_daily_bonus(
    claim_service: web::Data<ClaimService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let claims = match current_claims(&req) {
        Ok(claims) => claims,
        Err(e) => return Ok(e.error_response()),
    };
    match claim_service.claim_daily_bonus(&claims.sub).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/claims/spin",
    tag = "claims",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "今日剩余转盘次数", body = SpinStatusResponse)
    )
)]
pub async fn spin_status(
    claim_service: web::Data<ClaimService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let claims = match current_claims(&req) {
        Ok(claims) => claims,
        Err(e) => return Ok(e.error_response()),
    };
    match claim_service.spin_status(&claims.sub).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/claims/spin",
    tag = "claims",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "转盘奖励已入账", body = SpinClaimResponse),
        (status = 400, description = "今日次数已用完")
    )
)]
pub async fn claim_spin(
    claim_service: web::Data<ClaimService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let claims = match current_claims(&req) {
        Ok(claims) => claims,
        Err(e) => return Ok(e.error_response()),
    };
    match claim_service.claim_spin(&claims.sub).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/claims/scratch",
    tag = "claims",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "今日剩余刮刮卡", body = ScratchStatusResponse)
    )
)]
pub async fn scratch_status(
    claim_service: web::Data<ClaimService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let claims = match current_claims(&req) {
        Ok(claims) => claims,
        Err(e) => return Ok(e.error_response()),
    };
    match claim_service.scratch_status(&claims.sub).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/claims/scratch",
    tag = "claims",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "刮刮卡奖励已入账", body = ScratchClaimResponse),
        (status = 400, description = "今日卡片已用完")
    )
)]
pub async fn claim_scratch(
    claim_service: web::Data<ClaimService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let claims = match current_claims(&req) {
        Ok(claims) => claims,
        Err(e) => return Ok(e.error_response()),
    };
    match claim_service.claim_scratch(&claims.sub).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn claim_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/claims")
            .route("/daily-bonus", web::get().to(daily_bonus_status))
            .route("/daily-bonus", web::post().to(claim_daily_bonus))
            .route("/spin", web::get().to(spin_status))
            .route("/spin", web::post().to(claim_spin))
            .route("/scratch", web::get().to(scratch_status))
            .route("/scratch", web::post().to(claim_scratch)),
    );
}
