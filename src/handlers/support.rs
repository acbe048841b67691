use crate::entities::SenderType;
use crate::middlewares::current_claims;
use crate::models::*;
use crate::services::SupportService;
use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    post,
    path = "/support/tickets",
    tag = "support",
    security(("bearer_auth" = [])),
    request_body = CreateTicketRequest,
    responses(
        (status = 200, description = "工单已创建", body = TicketResponse)
    )
)]
pub async fn create_ticket(
    support_service: web::Data<SupportService>,
    req: HttpRequest,
    request: web::Json<CreateTicketRequest>,
) -> Result<HttpResponse> {
    let claims = match current_claims(&req) {
        Ok(claims) => claims,
        Err(e) => return Ok(e.error_response()),
    };
    match support_service
        .create_ticket(&claims.sub, request.into_inner())
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
    path = "/support/tickets",
    tag = "support",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "自己的工单列表")
    )
)]
pub async fn list_my_tickets(
    support_service: web::Data<SupportService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let claims = match current_claims(&req) {
        Ok(claims) => claims,
        Err(e) => return Ok(e.error_response()),
    };
    match support_service.list_for_user(&claims.sub).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/support/tickets/{id}/messages",
    tag = "support",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "工单会话"),
        (status = 403, description = "不是自己的工单")
    )
)]
pub async fn get_my_messages(
    support_service: web::Data<SupportService>,
    req: HttpRequest,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let claims = match current_claims(&req) {
        Ok(claims) => claims,
        Err(e) => return Ok(e.error_response()),
    };
    match support_service
        .get_messages(&path.into_inner(), Some(&claims.sub))
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
    post,
    path = "/support/tickets/{id}/messages",
    tag = "support",
    security(("bearer_auth" = [])),
    request_body = PostMessageRequest,
    responses(
        (status = 200, description = "消息已追加", body = TicketMessageResponse),
        (status = 400, description = "工单已关闭")
    )
)]
pub async fn post_my_message(
    support_service: web::Data<SupportService>,
    req: HttpRequest,
    path: web::Path<String>,
    request: web::Json<PostMessageRequest>,
) -> Result<HttpResponse> {
    let claims = match current_claims(&req) {
        Ok(claims) => claims,
        Err(e) => return Ok(e.error_response()),
    };
    match support_service
        .post_message(
            &path.into_inner(),
            &claims.sub,
            SenderType::User,
            request.into_inner(),
        )
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

pub async fn list_tickets(
    support_service: web::Data<SupportService>,
    query: web::Query<TicketListQuery>,
) -> Result<HttpResponse> {
    let params = PaginationParams::new(query.page, query.per_page);
    match support_service.list(query.status, &params).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub async fn get_messages(
    support_service: web::Data<SupportService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    match support_service
        .get_messages(&path.into_inner(), None)
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub async fn post_admin_message(
    support_service: web::Data<SupportService>,
    req: HttpRequest,
    path: web::Path<String>,
    request: web::Json<PostMessageRequest>,
) -> Result<HttpResponse> {
    let claims = match current_claims(&req) {
        Ok(claims) => claims,
        Err(e) => return Ok(e.error_response()),
    };
    match support_service
        .post_message(
            &path.into_inner(),
            &claims.sub,
            SenderType::Admin,
            request.into_inner(),
        )
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub async fn update_ticket_status(
    support_service: web::Data<SupportService>,
    path: web::Path<String>,
    request: web::Json<UpdateTicketStatusRequest>,
) -> Result<HttpResponse> {
    match support_service
        .update_status(&path.into_inner(), request.into_inner())
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn support_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/support/tickets")
            .route("", web::post().to(create_ticket))
            .route("", web::get().to(list_my_tickets))
            .route("/{id}/messages", web::get().to(get_my_messages))
            .route("/{id}/messages", web::post().to(post_my_message)),
    );
}

pub fn admin_support_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/support/tickets")
            .route("", web::get().to(list_tickets))
            .route("/{id}/messages", web::get().to(get_messages))
            .route("/{id}/messages", web::post().to(post_admin_message))
            .route("/{id}/status", web::post().to(update_ticket_status)),
    );
}
