use std::sync::Arc;

use cellar::{identity_map, Row, Value};
use tests::{rows_with_ids, User};

/// Materializes a row, deduplicating through the identity map.
fn materialize(row: &Row) -> Arc<User> {
    let key = row.get("id").cloned().unwrap_or(Value::Null);

    if let Some(cached) = identity_map::get::<User>(&key) {
        return cached;
    }

    let user = Arc::new(User::from_row(row));
    identity_map::set(user.clone());
    user
}

#[tokio::test]
async fn overlapping_result_sets_share_instances() {
    identity_map::scope(async {
        let first = rows_with_ids(&[1, 2]);
        let second = rows_with_ids(&[2, 3]);

        let first: Vec<_> = first.iter().map(materialize).collect();
        let second: Vec<_> = second.iter().map(materialize).collect();

        // row 2 came back from both queries as one instance
        assert!(Arc::ptr_eq(&first[1], &second[0]));
        assert_eq!(identity_map::len(), 3);

        let stats = identity_map::stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 3);
    })
    .await;
}

#[tokio::test]
async fn deletes_evict_the_canonical_instance() {
    identity_map::scope(async {
        for row in rows_with_ids(&[1, 2]).iter() {
            materialize(row);
        }

        // the write path removes the entity after a DELETE
        assert!(identity_map::remove::<User>(&Value::I64(1)).is_some());
        assert!(identity_map::get::<User>(&Value::I64(1)).is_none());
        assert_eq!(identity_map::len(), 1);
    })
    .await;
}

#[tokio::test]
async fn separate_units_of_work_start_empty() {
    identity_map::scope(async {
        for row in rows_with_ids(&[1]).iter() {
            materialize(row);
        }
        assert_eq!(identity_map::len(), 1);
    })
    .await;

    identity_map::scope(async {
        assert_eq!(identity_map::len(), 0);
        assert!(identity_map::get::<User>(&Value::I64(1)).is_none());
    })
    .await;
}
