use crate::config::RewardsConfig;
use crate::entities::{
    TransactionKind, admin_entity as admins, app_user_entity as app_users,
    referral_entity as referrals,
};
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::services::LedgerService;
use crate::utils::{
    JwtService, ROLE_ADMIN, ROLE_USER, generate_referral_code, hash_password, validate_email,
    validate_password, validate_username, verify_password,
};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set, TransactionTrait,
};
use uuid::Uuid;

#[derive(Clone)]
pub struct AuthService {
    pool: DatabaseConnection,
    jwt_service: JwtService,
    ledger_service: LedgerService,
    rewards: RewardsConfig,
}

impl AuthService {
    pub fn new(
        pool: DatabaseConnection,
        jwt_service: JwtService,
        ledger_service: LedgerService,
        rewards: RewardsConfig,
    ) -> Self {
        Self {
            pool,
            jwt_service,
            ledger_service,
            rewards,
        }
    }

    /// 注册新用户。携带有效推荐码时在同一事务内记录推荐关系并给推荐人入账。
    pub async fn register(&self, request: RegisterRequest) -> AppResult<AuthResponse> {
        validate_username(&request.username)?;
        validate_email(&request.email)?;
        validate_password(&request.password)?;

        let txn = self.pool.begin().await?;

        let taken = app_users::Entity::find()
            .filter(app_users::Column::Username.eq(&request.username))
            .count(&txn)
            .await?;
        if taken > 0 {
            return Err(AppError::ValidationError(
                "Username already taken".to_string(),
            ));
        }

        let taken = app_users::Entity::find()
            .filter(app_users::Column::Email.eq(&request.email))
            .count(&txn)
            .await?;
        if taken > 0 {
            return Err(AppError::ValidationError(
                "Email already registered".to_string(),
            ));
        }

        // 推荐人必须在创建被推荐用户之前解析，无效码直接拒绝
        let referrer = if let Some(code) = &request.referral_code {
            let referrer = app_users::Entity::find()
                .filter(app_users::Column::ReferralCode.eq(code))
                .one(&txn)
                .await?
                .ok_or_else(|| {
                    AppError::ValidationError("Invalid referral code".to_string())
                })?;
            if referrer.is_banned {
                return Err(AppError::ValidationError(
                    "Invalid referral code".to_string(),
                ));
            }
            Some(referrer)
        } else {
            None
        };

        let referral_code = generate_referral_code(&txn).await?;
        let user_id = Uuid::new_v4().to_string();

        let user = app_users::ActiveModel {
            id: Set(user_id.clone()),
            username: Set(request.username.clone()),
            email: Set(request.email.clone()),
            password_hash: Set(hash_password(&request.password)?),
            coins: Set(0),
            total_earned: Set(0),
            is_banned: Set(false),
            ban_reason: Set(None),
            device_token: Set(request.device_token.clone()),
            referral_code: Set(referral_code),
            referred_by: Set(referrer.as_ref().map(|r| r.id.clone())),
            created_at: Set(Utc::now()),
        }
        .insert(&txn)
        .await?;

        if let Some(referrer) = &referrer {
            referrals::ActiveModel {
                id: Set(Uuid::new_v4().to_string()),
                referrer_id: Set(referrer.id.clone()),
                referred_id: Set(user_id.clone()),
                coins_earned: Set(self.rewards.referral_bonus),
                status: Set("active".to_string()),
                created_at: Set(Utc::now()),
            }
            .insert(&txn)
            .await?;

            self.ledger_service
                .credit(
                    &txn,
                    &referrer.id,
                    self.rewards.referral_bonus,
                    TransactionKind::Referral,
                    &format!("Referral bonus for inviting {}", request.username),
                )
                .await?;
        }

        txn.commit().await?;

        log::info!("New user registered: {}", user.username);
        let user_id = user.id.clone();
        self.build_auth_response(&user_id, ROLE_USER, Some(user.into()))
    }

    pub async fn login(&self, request: LoginRequest) -> AppResult<AuthResponse> {
        let user = app_users::Entity::find()
            .filter(app_users::Column::Email.eq(&request.email))
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::AuthError("Invalid email or password".to_string()))?;

        if !verify_password(&request.password, &user.password_hash)? {
            return Err(AppError::AuthError(
                "Invalid email or password".to_string(),
            ));
        }

        if user.is_banned {
            return Err(AppError::Forbidden);
        }

        // 登录时顺便刷新推送 token
        if let Some(device_token) = &request.device_token {
            let mut model: app_users::ActiveModel = user.clone().into();
            model.device_token = Set(Some(device_token.clone()));
            model.update(&self.pool).await?;
        }

        let user_id = user.id.clone();
        self.build_auth_response(&user_id, ROLE_USER, Some(user.into()))
    }

    pub async fn admin_login(&self, request: AdminLoginRequest) -> AppResult<AuthResponse> {
        let admin = admins::Entity::find()
            .filter(admins::Column::Email.eq(&request.email))
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::AuthError("Invalid email or password".to_string()))?;

        if !verify_password(&request.password, &admin.password_hash)? {
            return Err(AppError::AuthError(
                "Invalid email or password".to_string(),
            ));
        }

        self.build_auth_response(&admin.id, ROLE_ADMIN, None)
    }

    pub async fn refresh(&self, request: RefreshTokenRequest) -> AppResult<AuthResponse> {
        let claims = self.jwt_service.verify_refresh_token(&request.refresh_token)?;

        // 用户可能在 token 有效期内被封禁
        if claims.role == ROLE_USER {
            let user = app_users::Entity::find_by_id(&claims.sub)
                .one(&self.pool)
                .await?
                .ok_or_else(|| AppError::AuthError("User no longer exists".to_string()))?;
            if user.is_banned {
                return Err(AppError::Forbidden);
            }
        }

        self.build_auth_response(&claims.sub, &claims.role, None)
    }

    /// admins 表为空时用配置里的初始账号引导创建
    pub async fn bootstrap_admin(&self, email: &str, password: &str) -> AppResult<()> {
        let count = admins::Entity::find().count(&self.pool).await?;
        if count > 0 {
            return Ok(());
        }
        if password.is_empty() {
            log::warn!("No admin account exists and no bootstrap password configured");
            return Ok(());
        }

        admins::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            email: Set(email.to_string()),
            password_hash: Set(hash_password(password)?),
            created_at: Set(Utc::now()),
        }
        .insert(&self.pool)
        .await?;

        log::info!("Bootstrap admin account created: {email}");
        Ok(())
    }

    fn build_auth_response(
        &self,
        subject: &str,
        role: &str,
        user: Option<UserResponse>,
    ) -> AppResult<AuthResponse> {
        Ok(AuthResponse {
            access_token: self.jwt_service.generate_access_token(subject, role)?,
            refresh_token: self.jwt_service.generate_refresh_token(subject, role)?,
            expires_in: self.jwt_service.get_access_token_expires_in(),
            user,
        })
    }
}
