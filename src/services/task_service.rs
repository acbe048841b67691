use crate::entities::{
    TransactionKind, app_user_entity as app_users, task_completion_entity as task_completions,
    task_entity as tasks,
};
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::services::{AutoBanService, LedgerService};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;

#[derive(Clone)]
pub struct TaskService {
    pool: DatabaseConnection,
    ledger_service: LedgerService,
    auto_ban_service: AutoBanService,
}

impl TaskService {
    pub fn new(
        pool: DatabaseConnection,
        ledger_service: LedgerService,
        auto_ban_service: AutoBanService,
    ) -> Self {
        Self {
            pool,
            ledger_service,
            auto_ban_service,
        }
    }

    /// 管理端：全量列表
    pub async fn list_all(&self) -> AppResult<Vec<TaskResponse>> {
        let models = tasks::Entity::find()
            .order_by_desc(tasks::Column::Priority)
            .order_by_desc(tasks::Column::CreatedAt)
            .all(&self.pool)
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    /// 客户端：仅启用的任务
    pub async fn list_active(&self) -> AppResult<Vec<TaskResponse>> {
        let models = tasks::Entity::find()
            .filter(tasks::Column::IsActive.eq(true))
            .order_by_desc(tasks::Column::Priority)
            .order_by_desc(tasks::Column::CreatedAt)
            .all(&self.pool)
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    pub async fn create(&self, request: CreateTaskRequest) -> AppResult<TaskResponse> {
        if request.coins <= 0 {
            return Err(AppError::ValidationError(
                "Task reward must be positive".to_string(),
            ));
        }

        let model = tasks::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            title: Set(request.title),
            description: Set(request.description),
            coins: Set(request.coins),
            action_url: Set(request.action_url),
            category: Set(request.category),
            is_active: Set(request.is_active.unwrap_or(true)),
            priority: Set(request.priority.unwrap_or(0)),
            created_at: Set(Utc::now()),
        }
        .insert(&self.pool)
        .await?;

        Ok(model.into())
    }

    pub async fn update(&self, task_id: &str, request: UpdateTaskRequest) -> AppResult<TaskResponse> {
        let task = tasks::Entity::find_by_id(task_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Task not found".to_string()))?;

        if let Some(coins) = request.coins
            && coins <= 0
        {
            return Err(AppError::ValidationError(
                "Task reward must be positive".to_string(),
            ));
        }

        let mut model: tasks::ActiveModel = task.into();
        if let Some(title) = request.title {
            model.title = Set(title);
        }
        if let Some(description) = request.description {
            model.description = Set(description);
        }
        if let Some(coins) = request.coins {
            model.coins = Set(coins);
        }
        if let Some(action_url) = request.action_url {
            model.action_url = Set(Some(action_url));
        }
        if let Some(category) = request.category {
            model.category = Set(category);
        }
        if let Some(priority) = request.priority {
            model.priority = Set(priority);
        }
        Ok(model.update(&self.pool).await?.into())
    }

    pub async fn toggle(
        &self,
        task_id: &str,
        request: ToggleActiveRequest,
    ) -> AppResult<TaskResponse> {
        let task = tasks::Entity::find_by_id(task_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Task not found".to_string()))?;

        let mut model: tasks::ActiveModel = task.into();
        model.is_active = Set(request.is_active);
        Ok(model.update(&self.pool).await?.into())
    }

    pub async fn delete(&self, task_id: &str) -> AppResult<()> {
        let result = tasks::Entity::delete_by_id(task_id).exec(&self.pool).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Task not found".to_string()));
        }
        Ok(())
    }

    /// 完成任务并领取奖励。每任务每用户只发一次，唯一索引兜底并发重复提交。
    pub async fn complete(&self, user_id: &str, task_id: &str) -> AppResult<TaskCompleteResponse> {
        let txn = self.pool.begin().await?;

        let task = tasks::Entity::find_by_id(task_id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound("Task not found".to_string()))?;
        if !task.is_active {
            return Err(AppError::ValidationError(
                "Task is no longer available".to_string(),
            ));
        }

        let already = task_completions::Entity::find()
            .filter(task_completions::Column::TaskId.eq(task_id))
            .filter(task_completions::Column::UserId.eq(user_id))
            .count(&txn)
            .await?;
        if already > 0 {
            return Err(AppError::ValidationError(
                "Task already completed".to_string(),
            ));
        }

        task_completions::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            task_id: Set(task_id.to_string()),
            user_id: Set(user_id.to_string()),
            created_at: Set(Utc::now()),
        }
        .insert(&txn)
        .await?;

        self.ledger_service
            .credit(
                &txn,
                user_id,
                task.coins,
                TransactionKind::Earn,
                &format!("Task completed: {}", task.title),
            )
            .await?;

        self.auto_ban_service.enforce(&txn, user_id).await?;

        let user = app_users::Entity::find_by_id(user_id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
        txn.commit().await?;

        Ok(TaskCompleteResponse {
            reward: task.coins,
            coins: user.coins,
        })
    }
}
