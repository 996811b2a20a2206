pub use sea_orm_migration::prelude::*;

mod m20250410_000001_create_user_table;
mod m20250410_000002_create_user_profile_table;
mod m20250410_000003_create_user_statistics_table;
mod m20250411_000004_create_story_table;
mod m20250411_000005_create_story_part_table;
mod m20250411_000006_create_tag_table;
mod m20250411_000007_create_story_tag_table;
mod m20250412_000008_create_like_table;
mod m20250412_000009_create_comment_table;
mod m20250412_000010_create_report_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250410_000001_create_user_table::Migration),
            Box::new(m20250410_000002_create_user_profile_table::Migration),
            Box::new(m20250410_000003_create_user_statistics_table::Migration),
            Box::new(m20250411_000004_create_story_table::Migration),
            Box::new(m20250411_000005_create_story_part_table::Migration),
            Box::new(m20250411_000006_create_tag_table::Migration),
            Box::new(m20250411_000007_create_story_tag_table::Migration),
            Box::new(m20250412_000008_create_like_table::Migration),
            Box::new(m20250412_000009_create_comment_table::Migration),
            Box::new(m20250412_000010_create_report_table::Migration),
        ]
    }
}
