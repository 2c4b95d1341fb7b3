//! Shared helpers for the integration suite.

use std::sync::Arc;

use cellar::cache::CacheKey;
use cellar::{Entity, Query, Render, Row, Value};

pub use cellar::values;

/// A cheap stand-in for a driver's prepared-statement handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeStatement {
    pub sql: String,
}

impl FakeStatement {
    pub fn prepare(sql: &str) -> Self {
        Self {
            sql: sql.to_string(),
        }
    }
}

/// Builds a single-column `id` result set.
pub fn rows_with_ids(ids: &[i64]) -> Arc<[Row]> {
    let columns: Arc<[String]> = vec!["id".to_string()].into();
    ids.iter()
        .map(|id| Row::new(columns.clone(), vec![Value::I64(*id)]))
        .collect::<Vec<_>>()
        .into()
}

/// Renders `query` and derives its result-cache key.
pub fn cache_key_for(query: &Query) -> CacheKey {
    let (sql, _) = query.render(0);
    CacheKey::new(&sql, &query.all_args())
}

#[derive(Debug, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
}

impl User {
    pub fn from_row(row: &Row) -> Self {
        Self {
            id: match row.get("id") {
                Some(Value::I64(id)) => *id,
                other => panic!("expected integer id, got {other:?}"),
            },
            name: match row.get("name") {
                Some(Value::String(name)) => name.clone(),
                _ => String::new(),
            },
        }
    }
}

impl Entity for User {
    fn primary_key(&self) -> Value {
        Value::I64(self.id)
    }
}
