pub mod achievements;
pub mod admins;
pub mod app_users;
pub mod auto_ban_rules;
pub mod banners;
pub mod daily_claims;
pub mod notifications;
pub mod offers;
pub mod promo_codes;
pub mod promo_redemptions;
pub mod referrals;
pub mod support_tickets;
pub mod task_completions;
pub mod tasks;
pub mod ticket_messages;
pub mod transactions;
pub mod withdrawals;

pub use achievements as achievement_entity;
pub use admins as admin_entity;
pub use app_users as app_user_entity;
pub use auto_ban_rules as auto_ban_rule_entity;
pub use banners as banner_entity;
pub use daily_claims as daily_claim_entity;
pub use notifications as notification_entity;
pub use offers as offer_entity;
pub use promo_codes as promo_code_entity;
pub use promo_redemptions as promo_redemption_entity;
pub use referrals as referral_entity;
pub use support_tickets as support_ticket_entity;
pub use task_completions as task_completion_entity;
pub use tasks as task_entity;
pub use ticket_messages as ticket_message_entity;
pub use transactions as transaction_entity;
pub use withdrawals as withdrawal_entity;

pub use auto_ban_rules::AutoBanRuleType;
pub use daily_claims::ClaimType;
pub use notifications::{NotificationStatus, NotificationTarget};
pub use support_tickets::TicketStatus;
pub use ticket_messages::SenderType;
pub use transactions::{TransactionKind, TransactionStatus};
pub use withdrawals::WithdrawalStatus;
