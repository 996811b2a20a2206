use crate::{
    data::user::UserRepository,
    model::user::{CreateUserParam, UpdateProfileParam},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::builder::TestBuilder;

mod create_with_profile;
mod delete_cascade;
mod find_by_login;

async fn user_tables() -> test_utils::context::TestContext {
    TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::UserProfile)
        .with_table(entity::prelude::UserStatistics)
        .build()
        .await
        .unwrap()
}

fn sample_param(login: &str, email: &str) -> CreateUserParam {
    CreateUserParam {
        login: login.to_string(),
        email: email.to_string(),
        password_hash: "hash".to_string(),
    }
}
