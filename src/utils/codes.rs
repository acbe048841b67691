use crate::entities::{app_user_entity as app_users, promo_code_entity as promo_codes};
use crate::error::AppResult;
use rand::Rng;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter};

const CODE_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

fn random_code(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| CODE_CHARS[rng.gen_range(0..CODE_CHARS.len())] as char)
        .collect()
}

/// 生成唯一的8位推荐码
pub async fn generate_referral_code<C: ConnectionTrait>(db: &C) -> AppResult<String> {
    loop {
        let code = random_code(8);

        let exists = app_users::Entity::find()
            .filter(app_users::Column::ReferralCode.eq(&code))
            .count(db)
            .await?;

        if exists == 0 {
            return Ok(code);
        }
    }
}

/// 生成唯一的10位兑换码
pub async fn generate_promo_code<C: ConnectionTrait>(db: &C) -> AppResult<String> {
    loop {
        let code = random_code(10);

        let exists = promo_codes::Entity::find()
            .filter(promo_codes::Column::Code.eq(&code))
            .count(db)
            .await?;

        if exists == 0 {
            return Ok(code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_code_charset() {
        let code = random_code(8);
        assert_eq!(code.len(), 8);
        assert!(
            code.chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        );
    }

    #[test]
    fn test_random_code_length() {
        assert_eq!(random_code(10).len(), 10);
        assert_eq!(random_code(0).len(), 0);
    }
}
