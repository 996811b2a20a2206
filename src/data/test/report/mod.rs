use crate::{data::report::ReportRepository, model::report::CreateReportParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod insert;
mod recent;

async fn report_tables() -> test_utils::context::TestContext {
    TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Story)
        .with_table(entity::prelude::Report)
        .build()
        .await
        .unwrap()
}
