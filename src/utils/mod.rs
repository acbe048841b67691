pub mod codes;
pub mod jwt;
pub mod password;
pub mod validation;

pub use codes::{generate_promo_code, generate_referral_code};
pub use jwt::*;
pub use password::*;
pub use validation::{validate_email, validate_username};
