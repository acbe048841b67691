pub mod achievement_service;
pub mod auth_service;
pub mod auto_ban_service;
pub mod banner_service;
pub mod claim_service;
pub mod ledger_service;
pub mod notification_service;
pub mod offer_service;
pub mod promo_code_service;
pub mod referral_service;
pub mod stats_service;
pub mod support_service;
pub mod task_service;
pub mod user_service;
pub mod withdrawal_service;

pub use achievement_service::AchievementService;
pub use auth_service::AuthService;
pub use auto_ban_service::AutoBanService;
pub use banner_service::BannerService;
pub use claim_service::ClaimService;
pub use ledger_service::LedgerService;
pub use notification_service::NotificationService;
pub use offer_service::OfferService;
pub use promo_code_service::PromoCodeService;
pub use referral_service::ReferralService;
pub use stats_service::StatsService;
pub use support_service::SupportService;
pub use task_service::TaskService;
pub use user_service::UserService;
pub use withdrawal_service::WithdrawalService;
