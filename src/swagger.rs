use actix_web::web;
use utoipa::OpenApi;
use utoipa::{
    Modify,
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa_swagger_ui::SwaggerUi;

use crate::entities::{
    AutoBanRuleType, ClaimType, NotificationStatus, NotificationTarget, SenderType, TicketStatus,
    TransactionKind, TransactionStatus, WithdrawalStatus,
};
use crate::handlers;
use crate::models::*;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.as_mut().unwrap();
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        )
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::auth::register,
        handlers::auth::login,
        handlers::auth::admin_login,
        handlers::auth::refresh,
        handlers::user::me,
        handlers::user::update_device_token,
        handlers::user::leaderboard,
        handlers::user::list_users,
        handlers::user::get_user,
        handlers::user::ban_user,
        handlers::wallet::balance,
        handlers::wallet::history,
        handlers::wallet::list_transactions,
        handlers::wallet::adjust_coins,
        handlers::wallet::bulk_credit,
        handlers::task::list_tasks,
        handlers::task::complete_task,
        handlers::task::create_task,
        handlers::offer::list_offers,
        handlers::offer::create_offer,
        handlers::banner::list_banners,
        handlers::achievement::list_achievements,
        handlers::promo_code::redeem,
        handlers::promo_code::create_promo_code,
        handlers::claim::daily_bonus_status,
        handlers::claim::claim_daily_bonus,
        handlers::claim::spin_status,
        handlers::claim::claim_spin,
        handlers::claim::scratch_status,
        handlers::claim::claim_scratch,
        handlers::withdrawal::create_withdrawal,
        handlers::withdrawal::list_my_withdrawals,
        handlers::withdrawal::list_withdrawals,
        handlers::withdrawal::process_withdrawal,
        handlers::referral::get_code,
        handlers::referral::get_stats,
        handlers::support::create_ticket,
        handlers::support::list_my_tickets,
        handlers::support::get_my_messages,
        handlers::support::post_my_message,
        handlers::admin::dashboard_stats,
        handlers::admin::send_notification,
        handlers::admin::create_auto_ban_rule,
    ),
    components(
        schemas(
            ApiError,
            RegisterRequest,
            LoginRequest,
            AdminLoginRequest,
            RefreshTokenRequest,
            AuthResponse,
            UserResponse,
            UserListQuery,
            BanUserRequest,
            UpdateDeviceTokenRequest,
            BalanceResponse,
            LeaderboardEntry,
            TransactionResponse,
            TransactionKind,
            TransactionStatus,
            AdjustCoinsRequest,
            BulkCreditRequest,
            BulkCreditResponse,
            TaskResponse,
            CreateTaskRequest,
            UpdateTaskRequest,
            TaskCompleteResponse,
            ToggleActiveRequest,
            OfferResponse,
            CreateOfferRequest,
            UpdateOfferRequest,
            BannerResponse,
            CreateBannerRequest,
            UpdateBannerRequest,
            AchievementResponse,
            CreateAchievementRequest,
            UpdateAchievementRequest,
            PromoCodeResponse,
            CreatePromoCodeRequest,
            RedeemPromoCodeRequest,
            RedeemPromoCodeResponse,
            ClaimType,
            DailyBonusStatusResponse,
            DailyBonusClaimResponse,
            SpinStatusResponse,
            SpinClaimResponse,
            ScratchStatusResponse,
            ScratchClaimResponse,
            WithdrawalResponse,
            WithdrawalStatus,
            CreateWithdrawalRequest,
            ProcessWithdrawalRequest,
            ReferralResponse,
            ReferralCodeResponse,
            ReferralStatsResponse,
            TicketResponse,
            TicketMessageResponse,
            TicketStatus,
            SenderType,
            CreateTicketRequest,
            PostMessageRequest,
            UpdateTicketStatusRequest,
            NotificationResponse,
            NotificationTarget,
            NotificationStatus,
            SendNotificationRequest,
            AutoBanRuleType,
            AutoBanRuleResponse,
            CreateAutoBanRuleRequest,
            DashboardStats,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Authentication API"),
        (name = "users", description = "User profile and leaderboard API"),
        (name = "wallet", description = "Coin balance and ledger API"),
        (name = "tasks", description = "Task API"),
        (name = "offers", description = "Offer API"),
        (name = "banners", description = "Banner API"),
        (name = "achievements", description = "Achievement API"),
        (name = "promo", description = "Promo code redemption API"),
        (name = "claims", description = "Daily bonus, spin and scratch API"),
        (name = "withdrawals", description = "Withdrawal API"),
        (name = "referrals", description = "Referral API"),
        (name = "support", description = "Support ticket API"),
        (name = "admin", description = "Admin dashboard API"),
    ),
    info(
        title = "Earnzy Backend API",
        version = "1.0.0",
        description = "Earnzy rewards platform REST API documentation",
    ),
    servers(
        (url = "/api/v1", description = "Local server")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}
