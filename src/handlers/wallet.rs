use crate::middlewares::current_claims;
use crate::models::*;
use crate::services::{LedgerService, UserService};
use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/wallet/balance",
    tag = "wallet",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "当前余额与等级", body = BalanceResponse)
    )
)]
pub async fn balance(
    user_service: web::Data<UserService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let claims = match current_claims(&req) {
        Ok(claims) => claims,
        Err(e) => return Ok(e.error_response()),
    };
    match user_service.get_balance(&claims.sub).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/wallet/history",
    tag = "wallet",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "账单，按时间倒序分页")
    )
)]
pub async fn history(
    ledger_service: web::Data<LedgerService>,
    req: HttpRequest,
    params: web::Query<PaginationParams>,
) -> Result<HttpResponse> {
    let claims = match current_claims(&req) {
        Ok(claims) => claims,
        Err(e) => return Ok(e.error_response()),
    };
    match ledger_service.user_history(&claims.sub, &params).await {
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
    path = "/admin/transactions",
    tag = "admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "全量交易列表，可按用户过滤")
    )
)]
pub async fn list_transactions(
    ledger_service: web::Data<LedgerService>,
    query: web::Query<TransactionListQuery>,
) -> Result<HttpResponse> {
    match ledger_service.list_transactions(&query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/admin/coins/adjust",
    tag = "admin",
    security(("bearer_auth" = [])),
    request_body = AdjustCoinsRequest,
    responses(
        (status = 200, description = "调整成功", body = TransactionResponse),
        (status = 400, description = "余额不足或用户被封禁")
    )
)]
pub async fn adjust_coins(
    ledger_service: web::Data<LedgerService>,
    request: web::Json<AdjustCoinsRequest>,
) -> Result<HttpResponse> {
    match ledger_service.adjust_coins(request.into_inner()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/admin/coins/bulk-credit",
    tag = "admin",
    security(("bearer_auth" = [])),
    request_body = BulkCreditRequest,
    responses(
        (status = 200, description = "批量发放成功", body = BulkCreditResponse)
    )
)]
pub async fn bulk_credit(
    ledger_service: web::Data<LedgerService>,
    request: web::Json<BulkCreditRequest>,
) -> Result<HttpResponse> {
    match ledger_service.bulk_credit(request.into_inner()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn wallet_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/wallet")
            .route("/balance", web::get().to(balance))
            .route("/history", web::get().to(history)),
    );
}

pub fn admin_wallet_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/transactions", web::get().to(list_transactions))
        .service(
            web::scope("/coins")
                .route("/adjust", web::post().to(adjust_coins))
                .route("/bulk-credit", web::post().to(bulk_credit)),
        );
}
