use crate::middlewares::current_claims;
use crate::models::*;
use crate::services::TaskService;
use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/tasks",
    tag = "tasks",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "启用中的任务列表")
    )
)]
pub async fn list_tasks(task_service: web::Data<TaskService>) -> Result<HttpResponse> {
    match task_service.list_active().await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/tasks/{id}/complete",
    tag = "tasks",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "任务完成，奖励已入账", body = TaskCompleteResponse),
        (status = 400, description = "任务已完成或已下线")
    )
)]
pub async fn complete_task(
    task_service: web::Data<TaskService>,
    req: HttpRequest,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let claims = match current_claims(&req) {
        Ok(claims) => claims,
        Err(e) => return Ok(e.error_response()),
    };
    match task_service.complete(&claims.sub, &path.into_inner()).await {
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

pub async fn admin_list_tasks(task_service: web::Data<TaskService>) -> Result<HttpResponse> {
    match task_service.list_all().await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/admin/tasks",
    tag = "admin",
    security(("bearer_auth" = [])),
    request_body = CreateTaskRequest,
    responses(
        (status = 200, description = "任务已创建", body = TaskResponse)
    )
)]
pub async fn create_task(
    task_service: web::Data<TaskService>,
    request: web::Json<CreateTaskRequest>,
) -> Result<HttpResponse> {
    match task_service.create(request.into_inner()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub async fn update_task(
    task_service: web::Data<TaskService>,
    path: web::Path<String>,
    request: web::Json<UpdateTaskRequest>,
) -> Result<HttpResponse> {
    match task_service
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

pub async fn toggle_task(
    task_service: web::Data<TaskService>,
    path: web::Path<String>,
    request: web::Json<ToggleActiveRequest>,
) -> Result<HttpResponse> {
    match task_service
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

pub async fn delete_task(
    task_service: web::Data<TaskService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    match task_service.delete(&path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Task deleted"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn task_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/tasks")
            .route("", web::get().to(list_tasks))
            .route("/{id}/complete", web::post().to(complete_task)),
    );
}

pub fn admin_task_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/tasks")
            .route("", web::get().to(admin_list_tasks))
            .route("", web::post().to(create_task))
            .route("/{id}", web::put().to(update_task))
            .route("/{id}/toggle", web::post().to(toggle_task))
            .route("/{id}", web::delete().to(delete_task)),
    );
}
