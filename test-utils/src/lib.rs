//! Storyweave Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the
//! storyweave application. This crate offers a builder pattern for creating test
//! contexts with in-memory SQLite databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of three main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//!
//! Entity factories with sensible defaults live under `factory`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_user_operations() {
//!     let test = TestBuilder::new()
//!         .with_table(entity::prelude::User)
//!         .build()
//!         .await
//!         .unwrap();
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
