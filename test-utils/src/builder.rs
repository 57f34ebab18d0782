use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Comment, Reply};
///
/// let test = TestBuilder::new()
///     .with_table(Comment)
///     .with_table(Reply)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Vector of CREATE TABLE statements to execute during database setup.
    ///
    /// Each statement is generated from an entity model using SeaORM's schema builder.
    /// Statements are executed in the order they were added during `build()`.
    tables: Vec<TableCreateStatement>,

    /// Vector of CREATE INDEX statements to execute after table setup.
    ///
    /// Used for constraints the entity schema cannot express, such as the
    /// composite unique index on bookmarks.
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// Initializes an empty builder ready to have entity tables added via `with_table()`.
    /// Chain method calls to configure the test environment before calling `build()`.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. The table will be created when `build()` is called. Chain multiple
    /// calls to add multiple tables. Tables should be added in dependency order (tables
    /// with foreign keys should be added after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds a CREATE INDEX statement to run after the tables are created.
    ///
    /// # Arguments
    /// - `index` - Index statement to execute during `build()`
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_index(mut self, index: IndexCreateStatement) -> Self {
        self.indexes.push(index);
        self
    }

    /// Adds the bookmark table together with its composite unique index.
    ///
    /// The one-bookmark-per-user-and-article constraint lives in a separate
    /// index statement in the production migrations, so the plain entity table
    /// would not reproduce duplicate-bookmark conflicts. Use this instead of
    /// `with_table(Bookmark)` whenever a test exercises bookmark uniqueness.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_bookmark_table(self) -> Self {
        self.with_table(Bookmark).with_index(
            Index::create()
                .unique()
                .name("idx_bookmark_user_article_unique")
                .table(Bookmark)
                .col(entity::bookmark::Column::UserId)
                .col(entity::bookmark::Column::ArticleId)
                .to_owned(),
        )
    }

    /// Adds all tables required for bookmark, comment, and reply operations.
    ///
    /// This convenience method adds the following in dependency order:
    /// - Bookmark (with its unique index)
    /// - Comment
    /// - Reply
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_subcontent_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_subcontent_tables(self) -> Self {
        self.with_bookmark_table()
            .with_table(Comment)
            .with_table(Reply)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added via `with_table()`, then any CREATE INDEX
    /// statements. Tables are created in the order they were added to the builder.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create schema
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}
