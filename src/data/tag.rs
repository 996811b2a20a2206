//! Tag lookup and creation.
//!
//! Generic over the connection type so tag rows can be resolved inside a
//! caller-owned transaction (story create/update) as well as standalone.

use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

pub struct TagRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TagRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a tag by its normalized name, creating it if absent.
    pub async fn find_or_create(&self, name: &str) -> Result<entity::tag::Model, DbErr> {
        let existing = entity::prelude::Tag::find()
            .filter(entity::tag::Column::Name.eq(name))
            .one(self.db)
            .await?;

        if let Some(tag) = existing {
            return Ok(tag);
        }

        entity::tag::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Resolves a list of normalized tag names to tag rows, creating missing ones.
    pub async fn find_or_create_many(
        &self,
        names: &[String],
    ) -> Result<Vec<entity::tag::Model>, DbErr> {
        let mut tags = Vec::with_capacity(names.len());
        for name in names {
            tags.push(self.find_or_create(name).await?);
        }
        Ok(tags)
    }
}
