pub use sea_orm_migration::prelude::*;

mod m20250901_000001_create_bookmark_table;
mod m20250901_000002_create_comment_table;
mod m20250901_000003_create_reply_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250901_000001_create_bookmark_table::Migration),
            Box::new(m20250901_000002_create_comment_table::Migration),
            Box::new(m20250901_000003_create_reply_table::Migration),
        ]
    }
}
