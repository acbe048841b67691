use crate::middlewares::current_claims;
use crate::models::*;
use crate::services::WithdrawalService;
use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    post,
    path = "/withdrawals",
    tag = "withdrawals",
    security(("bearer_auth" = [])),
    request_body = CreateWithdrawalRequest,
    responses(
        (status = 200, description = "提现申请已受理，金额已扣除", body = WithdrawalResponse),
        (status = 400, description = "余额不足或低于最小提现额")
    )
)]
pub async fn create_withdrawal(
    withdrawal_service: web::Data<WithdrawalService>,
    req: HttpRequest,
    request: web::Json<CreateWithdrawalRequest>,
) -> Result<HttpResponse> {
    let claims = match current_claims(&req) {
        Ok(claims) => claims,
        Err(e) => return Ok(e.error_response()),
    };
    match withdrawal_service
        .request(&claims.sub, request.into_inner())
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/withdrawals",
    tag = "withdrawals",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "自己的提现记录")
    )
)]
pub async fn list_my_withdrawals(
    withdrawal_service: web::Data<WithdrawalService>,
    req: HttpRequest,
    params: web::Query<PaginationParams>,
) -> Result<HttpResponse> {
    let claims = match current_claims(&req) {
        Ok(claims) => claims,
        Err(e) => return Ok(e.error_response()),
    };
    match withdrawal_service.list_for_user(&claims.sub, &params).await {
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
    path = "/admin/withdrawals",
    tag = "admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "提现列表，可按状态过滤")
    )
)]
pub async fn list_withdrawals(
    withdrawal_service: web::Data<WithdrawalService>,
    query: web::Query<WithdrawalListQuery>,
) -> Result<HttpResponse> {
    let params = PaginationParams::new(query.page, query.per_page);
    match withdrawal_service.list(query.status, &params).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/admin/withdrawals/{id}/process",
    tag = "admin",
    security(("bearer_auth" = [])),
    request_body = ProcessWithdrawalRequest,
    responses(
        (status = 200, description = "审批完成", body = WithdrawalResponse),
        (status = 400, description = "非 pending 状态不可审批")
    )
)]
pub async fn process_withdrawal(
    withdrawal_service: web::Data<WithdrawalService>,
    path: web::Path<String>,
    request: web::Json<ProcessWithdrawalRequest>,
) -> Result<HttpResponse> {
    match withdrawal_service
        .process(&path.into_inner(), request.into_inner())
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn withdrawal_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/withdrawals")
            .route("", web::post().to(create_withdrawal))
            .route("", web::get().to(list_my_withdrawals)),
    );
}

pub fn admin_withdrawal_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/withdrawals")
            .route("", web::get().to(list_withdrawals))
            .route("/{id}/process", web::post().to(process_withdrawal)),
    );
}
