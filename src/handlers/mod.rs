pub mod achievement;
pub mod admin;
pub mod auth;
pub mod banner;
pub mod claim;
pub mod offer;
pub mod promo_code;
pub mod referral;
pub mod support;
pub mod task;
pub mod user;
pub mod wallet;
pub mod withdrawal;

pub use achievement::{achievement_config, admin_achievement_config};
pub use admin::admin_config;
pub use auth::auth_config;
pub use banner::{admin_banner_config, banner_config};
pub use claim::claim_config;
pub use offer::{admin_offer_config, offer_config};
pub use promo_code::{admin_promo_config, promo_config};
pub use referral::{admin_referral_config, referral_config};
pub use support::{admin_support_config, support_config};
pub use task::{admin_task_config, task_config};
pub use user::{admin_user_config, user_config};
pub use wallet::{admin_wallet_config, wallet_config};
pub use withdrawal::{admin_withdrawal_config, withdrawal_config};
