pub mod achievement;
pub mod auth;
pub mod auto_ban;
pub mod banner;
pub mod claim;
pub mod common;
pub mod notification;
pub mod offer;
pub mod pagination;
pub mod promo_code;
pub mod referral;
pub mod stats;
pub mod support;
pub mod task;
pub mod transaction;
pub mod user;
pub mod withdrawal;

pub use achievement::*;
pub use auth::*;
pub use auto_ban::*;
pub use banner::*;
pub use claim::*;
pub use common::*;
pub use notification::*;
pub use offer::*;
pub use pagination::*;
pub use promo_code::*;
pub use referral::*;
pub use stats::*;
pub use support::*;
pub use task::*;
pub use transaction::*;
pub use user::*;
pub use withdrawal::*;
