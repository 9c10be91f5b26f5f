pub use sea_orm_migration::prelude::*;

mod m20260801_000001_create_user_table;
mod m20260801_000002_create_article_table;
mod m20260801_000003_create_tag_table;
mod m20260801_000004_create_article_tag_table;
mod m20260801_000005_create_favorite_table;
mod m20260801_000006_create_comment_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_create_user_table::Migration),
            Box::new(m20260801_000002_create_article_table::Migration),
            Box::new(m20260801_000003_create_tag_table::Migration),
            Box::new(m20260801_000004_create_article_tag_table::Migration),
            Box::new(m20260801_000005_create_favorite_table::Migration),
            Box::new(m20260801_000006_create_comment_table::Migration),
        ]
    }
}
