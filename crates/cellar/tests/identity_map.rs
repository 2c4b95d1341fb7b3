use std::sync::Arc;

use cellar::{identity_map, Entity, Value};

#[derive(Debug)]
struct User {
    id: i64,
    name: String,
}

impl Entity for User {
    fn primary_key(&self) -> Value {
        Value::I64(self.id)
    }
}

#[derive(Debug)]
struct Post {
    id: i64,
}

impl Entity for Post {
    fn primary_key(&self) -> Value {
        Value::I64(self.id)
    }
}

fn user(id: i64, name: &str) -> Arc<User> {
    Arc::new(User {
        id,
        name: name.to_string(),
    })
}

#[test]
fn lookups_inside_a_scope_share_one_instance() {
    identity_map::scope_sync(|| {
        identity_map::set(user(1, "Bob"));

        let first = identity_map::get::<User>(&Value::I64(1)).expect("cached");
        let second = identity_map::get::<User>(&Value::I64(1)).expect("cached");

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.name, "Bob");
    });
}

#[test]
fn lookups_outside_any_scope_miss() {
    assert!(!identity_map::enabled());

    identity_map::set(user(1, "Bob"));
    assert!(identity_map::get::<User>(&Value::I64(1)).is_none());
    assert_eq!(identity_map::len(), 0);
}

#[test]
fn the_map_is_dropped_when_the_scope_closes() {
    identity_map::scope_sync(|| {
        identity_map::set(user(1, "Bob"));
        assert!(identity_map::get::<User>(&Value::I64(1)).is_some());
    });

    assert!(identity_map::get::<User>(&Value::I64(1)).is_none());
}

#[test]
fn nested_scopes_share_the_outer_map() {
    identity_map::scope_sync(|| {
        identity_map::set(user(1, "Bob"));

        identity_map::scope_sync(|| {
            // inner scope sees the outer scope's entries
            assert!(identity_map::get::<User>(&Value::I64(1)).is_some());
            identity_map::set(user(2, "Alice"));
        });

        // entries added by the inner scope survive until the outermost
        // scope exits
        assert!(identity_map::get::<User>(&Value::I64(2)).is_some());
        assert_eq!(identity_map::len(), 2);
    });

    assert_eq!(identity_map::len(), 0);
}

#[test]
fn entries_are_keyed_by_type_and_id() {
    identity_map::scope_sync(|| {
        identity_map::set(user(1, "Bob"));
        identity_map::set(Arc::new(Post { id: 1 }));

        assert!(identity_map::get::<User>(&Value::I64(1)).is_some());
        assert!(identity_map::get::<Post>(&Value::I64(1)).is_some());
        assert_eq!(identity_map::len(), 2);

        assert_eq!(identity_map::all::<User>().len(), 1);
        assert_eq!(identity_map::all::<Post>().len(), 1);
    });
}

#[test]
fn set_overwrites_and_remove_deletes() {
    identity_map::scope_sync(|| {
        identity_map::set(user(1, "Bob"));
        identity_map::set(user(1, "Bobby"));

        let cached = identity_map::get::<User>(&Value::I64(1)).expect("cached");
        assert_eq!(cached.name, "Bobby");
        assert_eq!(identity_map::len(), 1);

        let removed = identity_map::remove::<User>(&Value::I64(1)).expect("removed");
        assert_eq!(removed.name, "Bobby");
        assert!(identity_map::get::<User>(&Value::I64(1)).is_none());
    });
}

#[test]
fn stats_track_hits_and_misses_per_scope() {
    identity_map::scope_sync(|| {
        identity_map::set(user(1, "Bob"));

        identity_map::get::<User>(&Value::I64(1));
        identity_map::get::<User>(&Value::I64(1));
        identity_map::get::<User>(&Value::I64(99));

        let stats = identity_map::stats();
        assert_eq!(stats.hits, 2);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.size, 1);
    });

    // outside the scope the counters read as zero
    assert_eq!(identity_map::stats().hits, 0);
}

#[tokio::test]
async fn async_scope_spans_await_points() {
    identity_map::scope(async {
        identity_map::set(user(1, "Bob"));
        tokio::task::yield_now().await;
        assert!(identity_map::get::<User>(&Value::I64(1)).is_some());
    })
    .await;

    assert!(!identity_map::enabled());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_tasks_have_isolated_maps() {
    let a = tokio::spawn(identity_map::scope(async {
        identity_map::set(user(1, "task-a"));
        tokio::task::yield_now().await;
        identity_map::get::<User>(&Value::I64(1)).expect("own entry").name.clone()
    }));

    let b = tokio::spawn(identity_map::scope(async {
        identity_map::set(user(1, "task-b"));
        tokio::task::yield_now().await;
        identity_map::get::<User>(&Value::I64(1)).expect("own entry").name.clone()
    }));

    let (a, b) = (a.await.unwrap(), b.await.unwrap());
    assert_eq!(a, "task-a");
    assert_eq!(b, "task-b");
}
