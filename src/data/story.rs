//! Story data repository for database operations.
//!
//! This module provides the `StoryRepository` for managing stories and the
//! collections hanging off them. Multi-table writes (creation with tags and an
//! initial part, tag-set reconciliation, cascade deletion) each run inside a
//! single transaction so dependent rows can never be observed half-written.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, JoinType, LoaderTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait, TransactionTrait,
};

use crate::{
    data::tag::TagRepository,
    model::{
        story::{CreateStoryParam, SearchParam, SearchResults, StoryDetail, StoryOverview},
        story_part::StoryPart,
        user::User,
    },
};

/// Repository providing database operations for stories.
pub struct StoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StoryRepository<'a> {
    /// Creates a new StoryRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `StoryRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a story with its tag links and optional first part.
    ///
    /// Tag names must already be normalized; existing tag rows are reused and
    /// missing ones created. When `initial_content` is present the story gets
    /// a first part at position 1 authored by the owner. Everything runs in
    /// one transaction.
    ///
    /// # Arguments
    /// - `param` - Story fields, normalized tag names, and optional first part
    ///
    /// # Returns
    /// - `Ok(Model)` - The created story row
    /// - `Err(DbErr)` - Database error; the transaction is rolled back
    pub async fn create(&self, param: CreateStoryParam) -> Result<entity::story::Model, DbErr> {
        let now = Utc::now();
        let txn = self.db.begin().await?;

        let story = entity::story::ActiveModel {
            owner_id: ActiveValue::Set(param.owner_id),
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            cover_image_url: ActiveValue::Set(param.cover_image_url),
            is_public: ActiveValue::Set(param.is_public),
            is_editable: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let tag_repo = TagRepository::new(&txn);
        for tag in tag_repo.find_or_create_many(&param.tags).await? {
            entity::prelude::StoryTag::insert(entity::story_tag::ActiveModel {
                story_id: ActiveValue::Set(story.id),
                tag_id: ActiveValue::Set(tag.id),
            })
            .exec_without_returning(&txn)
            .await?;
        }

        if let Some(content) = param.initial_content {
            entity::story_part::ActiveModel {
                story_id: ActiveValue::Set(story.id),
                author_id: ActiveValue::Set(param.owner_id),
                content: ActiveValue::Set(content),
                position: ActiveValue::Set(1),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;

        Ok(story)
    }

    /// Finds a story by primary key.
    pub async fn find_by_id(&self, story_id: i32) -> Result<Option<entity::story::Model>, DbErr> {
        entity::prelude::Story::find_by_id(story_id).one(self.db).await
    }

    /// Gets all stories as overviews, newest first.
    pub async fn list_overviews(&self) -> Result<Vec<StoryOverview>, DbErr> {
        let stories = entity::prelude::Story::find()
            .order_by_desc(entity::story::Column::CreatedAt)
            .all(self.db)
            .await?;

        self.overviews_for(stories).await
    }

    /// Gets a user's own stories as overviews, newest first.
    ///
    /// Private stories are included only when `include_private` is set (the
    /// viewer is the owner).
    pub async fn list_by_owner(
        &self,
        owner_id: i32,
        include_private: bool,
    ) -> Result<Vec<StoryOverview>, DbErr> {
        let mut query = entity::prelude::Story::find()
            .filter(entity::story::Column::OwnerId.eq(owner_id));

        if !include_private {
            query = query.filter(entity::story::Column::IsPublic.eq(true));
        }

        let stories = query
            .order_by_desc(entity::story::Column::CreatedAt)
            .all(self.db)
            .await?;

        self.overviews_for(stories).await
    }

    /// Gets public stories the user contributed parts to without owning.
    pub async fn list_contributed_by(&self, user_id: i32) -> Result<Vec<StoryOverview>, DbErr> {
        let stories = entity::prelude::Story::find()
            .join(JoinType::InnerJoin, entity::story::Relation::StoryPart.def())
            .filter(entity::story_part::Column::AuthorId.eq(user_id))
            .filter(entity::story::Column::OwnerId.ne(user_id))
            .filter(entity::story::Column::IsPublic.eq(true))
            .distinct()
            .order_by_desc(entity::story::Column::CreatedAt)
            .all(self.db)
            .await?;

        self.overviews_for(stories).await
    }

    /// Gets a single story as an overview.
    pub async fn overview(&self, story_id: i32) -> Result<Option<StoryOverview>, DbErr> {
        let Some(story) = self.find_by_id(story_id).await? else {
            return Ok(None);
        };

        let mut overviews = self.overviews_for(vec![story]).await?;
        Ok(overviews.pop())
    }

    /// Gets a full story view: overview plus ordered parts and contributors.
    ///
    /// Contributors are the distinct part authors in order of first
    /// appearance.
    ///
    /// # Returns
    /// - `Ok(Some(StoryDetail))` - Story found with all parts loaded
    /// - `Ok(None)` - No story with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn detail(&self, story_id: i32) -> Result<Option<StoryDetail>, DbErr> {
        let Some(overview) = self.overview(story_id).await? else {
            return Ok(None);
        };

        let rows = entity::prelude::StoryPart::find()
            .filter(entity::story_part::Column::StoryId.eq(story_id))
            .order_by_asc(entity::story_part::Column::Position)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        let mut parts = Vec::with_capacity(rows.len());
        let mut contributors: Vec<User> = Vec::new();
        for (part, author) in rows {
            let author = author.ok_or_else(|| {
                DbErr::RecordNotFound(format!("author of story part {} missing", part.id))
            })?;

            if !contributors.iter().any(|c| c.id == author.id) {
                contributors.push(User::from_entity(author.clone()));
            }
            parts.push(StoryPart::from_entities(part, author));
        }

        Ok(Some(StoryDetail {
            overview,
            parts,
            contributors,
        }))
    }

    /// Applies a partial update to a story and optionally replaces its tag set.
    ///
    /// `tags`, when present, is the full normalized tag-name set the story
    /// should end up with: links to other tags are removed, missing ones are
    /// created. Field and tag writes share one transaction and bump
    /// `updated_at`.
    ///
    /// # Arguments
    /// - `story` - The fetched story row to update
    /// - `title` / `description` / `cover_image_url` / `is_public` /
    ///   `is_editable` - Field updates; `None` keeps the current value
    /// - `tags` - Replacement tag-name set, already normalized
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated story row
    /// - `Err(DbErr)` - Database error; the transaction is rolled back
    #[allow(clippy::too_many_arguments)]
    pub async fn update_fields(
        &self,
        story: entity::story::Model,
        title: Option<String>,
        description: Option<String>,
        cover_image_url: Option<String>,
        is_public: Option<bool>,
        is_editable: Option<bool>,
        tags: Option<Vec<String>>,
    ) -> Result<entity::story::Model, DbErr> {
        let story_id = story.id;
        let txn = self.db.begin().await?;

        let mut active = story.into_active_model();
        if let Some(title) = title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(description) = description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(cover_image_url) = cover_image_url {
            active.cover_image_url = ActiveValue::Set(Some(cover_image_url));
        }
        if let Some(is_public) = is_public {
            active.is_public = ActiveValue::Set(is_public);
        }
        if let Some(is_editable) = is_editable {
            active.is_editable = ActiveValue::Set(is_editable);
        }
        active.updated_at = ActiveValue::Set(Utc::now());
        let story = active.update(&txn).await?;

        if let Some(names) = tags {
            let tag_repo = TagRepository::new(&txn);
            let tags = tag_repo.find_or_create_many(&names).await?;
            let keep_ids: Vec<i32> = tags.iter().map(|t| t.id).collect();

            entity::prelude::StoryTag::delete_many()
                .filter(entity::story_tag::Column::StoryId.eq(story_id))
                .filter(entity::story_tag::Column::TagId.is_not_in(keep_ids.clone()))
                .exec(&txn)
                .await?;

            let existing: Vec<i32> = entity::prelude::StoryTag::find()
                .filter(entity::story_tag::Column::StoryId.eq(story_id))
                .all(&txn)
                .await?
                .into_iter()
                .map(|link| link.tag_id)
                .collect();

            for tag_id in keep_ids {
                if !existing.contains(&tag_id) {
                    entity::prelude::StoryTag::insert(entity::story_tag::ActiveModel {
                        story_id: ActiveValue::Set(story_id),
                        tag_id: ActiveValue::Set(tag_id),
                    })
                    .exec_without_returning(&txn)
                    .await?;
                }
            }
        }

        txn.commit().await?;

        Ok(story)
    }

    /// Sets a story's `updated_at` to now.
    pub async fn touch(&self, story_id: i32) -> Result<(), DbErr> {
        entity::prelude::Story::update_many()
            .filter(entity::story::Column::Id.eq(story_id))
            .col_expr(
                entity::story::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes a story and every row that references it.
    ///
    /// Removes parts, tag links, likes, comments, and reports together with
    /// the story itself in a single all-or-nothing transaction. Callers that
    /// need the story's fields (title, owner) must fetch them first.
    ///
    /// # Arguments
    /// - `story_id` - Id of the story to remove
    ///
    /// # Returns
    /// - `Ok(())` - Story and all dependents removed
    /// - `Err(DbErr)` - Database error; the transaction is rolled back and no
    ///   rows are deleted
    pub async fn delete_cascade(&self, story_id: i32) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::StoryPart::delete_many()
            .filter(entity::story_part::Column::StoryId.eq(story_id))
            .exec(&txn)
            .await?;

        entity::prelude::StoryTag::delete_many()
            .filter(entity::story_tag::Column::StoryId.eq(story_id))
            .exec(&txn)
            .await?;

        entity::prelude::Like::delete_many()
            .filter(entity::like::Column::StoryId.eq(story_id))
            .exec(&txn)
            .await?;

        entity::prelude::Comment::delete_many()
            .filter(entity::comment::Column::StoryId.eq(story_id))
            .exec(&txn)
            .await?;

        entity::prelude::Report::delete_many()
            .filter(entity::report::Column::StoryId.eq(story_id))
            .exec(&txn)
            .await?;

        entity::prelude::Story::delete_by_id(story_id).exec(&txn).await?;

        txn.commit().await?;

        Ok(())
    }

    /// Searches stories by free text and tag names.
    ///
    /// Matches the query against title, description, and part content; tag
    /// names must already be normalized. Private stories are only visible to
    /// their owner. Results are newest first.
    ///
    /// # Arguments
    /// - `param` - Query text, normalized tags, one-based page, page size, and viewer
    ///
    /// # Returns
    /// - `Ok(SearchResults)` - One page of matches plus the total match count
    /// - `Err(DbErr)` - Database error during query
    pub async fn search(&self, param: SearchParam) -> Result<SearchResults, DbErr> {
        let mut query = entity::prelude::Story::find();

        query = match param.viewer_id {
            Some(viewer) => query.filter(
                Condition::any()
                    .add(entity::story::Column::IsPublic.eq(true))
                    .add(entity::story::Column::OwnerId.eq(viewer)),
            ),
            None => query.filter(entity::story::Column::IsPublic.eq(true)),
        };

        if let Some(text) = param.query.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            query = query
                .join(JoinType::LeftJoin, entity::story::Relation::StoryPart.def())
                .filter(
                    Condition::any()
                        .add(entity::story::Column::Title.contains(text))
                        .add(entity::story::Column::Description.contains(text))
                        .add(entity::story_part::Column::Content.contains(text)),
                );
        }

        if !param.tags.is_empty() {
            query = query
                .join(JoinType::LeftJoin, entity::story::Relation::StoryTag.def())
                .join(JoinType::LeftJoin, entity::story_tag::Relation::Tag.def())
                .filter(entity::tag::Column::Name.is_in(param.tags.clone()));
        }

        let paginator = query
            .distinct()
            .order_by_desc(entity::story::Column::CreatedAt)
            .paginate(self.db, param.page_size);

        let total = paginator.num_items().await?;
        let stories = paginator.fetch_page(param.page - 1).await?;
        let results = self.overviews_for(stories).await?;

        Ok(SearchResults {
            total,
            page: param.page,
            page_size: param.page_size,
            results,
        })
    }

    /// Assembles overviews for a batch of story rows.
    ///
    /// Loads owners, tag names, and the dependent collections for the whole
    /// batch with the SeaORM loader rather than one query per story.
    async fn overviews_for(
        &self,
        stories: Vec<entity::story::Model>,
    ) -> Result<Vec<StoryOverview>, DbErr> {
        if stories.is_empty() {
            return Ok(Vec::new());
        }

        let owners = stories.load_one(entity::prelude::User, self.db).await?;
        let tags = stories
            .load_many_to_many(entity::prelude::Tag, entity::prelude::StoryTag, self.db)
            .await?;
        let parts = stories.load_many(entity::prelude::StoryPart, self.db).await?;
        let likes = stories.load_many(entity::prelude::Like, self.db).await?;
        let comments = stories.load_many(entity::prelude::Comment, self.db).await?;

        let mut overviews = Vec::with_capacity(stories.len());
        for (i, story) in stories.into_iter().enumerate() {
            let owner = owners[i].clone().ok_or_else(|| {
                DbErr::RecordNotFound(format!("owner of story {} missing", story.id))
            })?;

            overviews.push(StoryOverview {
                id: story.id,
                title: story.title,
                description: story.description,
                cover_image_url: story.cover_image_url,
                is_public: story.is_public,
                is_editable: story.is_editable,
                created_at: story.created_at,
                updated_at: story.updated_at,
                owner: User::from_entity(owner),
                tags: tags[i].iter().map(|t| t.name.clone()).collect(),
                parts_count: parts[i].len() as u64,
                like_count: likes[i].len() as u64,
                comment_count: comments[i].len() as u64,
            });
        }

        Ok(overviews)
    }
}
