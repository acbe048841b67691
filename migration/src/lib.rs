pub use sea_orm_migration::prelude::*;

mod m20250601_000001_initial;
mod m20250610_000001_add_catalog;
mod m20250620_000001_add_rewards;
mod m20250701_000001_add_support_and_moderation;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_initial::Migration),
            Box::new(m20250610_000001_add_catalog::Migration),
            Box::new(m20250620_000001_add_rewards::Migration),
            Box::new(m20250701_000001_add_support_and_moderation::Migration),
        ]
    }
}
