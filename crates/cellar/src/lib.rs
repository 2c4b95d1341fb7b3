//! Query composition and caching for a relational-database access layer.
//!
//! Queries are immutable descriptions built through chained calls; every
//! call returns a new description, so partially built queries can be
//! shared and refined independently:
//!
//! ```
//! use cellar::{values, Query, Render};
//!
//! let adults = Query::table("users").filter("age > ?", values![18]);
//! let (sql, _) = adults.render(0);
//!
//! assert_eq!(sql, r#"SELECT * FROM "users" WHERE age > $1"#);
//! ```
//!
//! Three caches sit on top of rendering: [`StatementCache`] for prepared
//! handles, [`QueryResultCache`] for materialized rows, and the
//! task-scoped [`identity_map`] for entity deduplication.

pub mod cache;
pub mod identity_map;

pub use cellar_core::{stmt, values, Error, Result};
pub use cellar_sql::{Flavor, Render, Serializer};

pub use cache::{CacheKey, CacheStats, QueryResultCache, StatementCache};
pub use identity_map::Entity;
pub use stmt::{Query, Row, Value};
