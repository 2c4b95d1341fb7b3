use std::time::Duration;

use pretty_assertions::assert_eq;

use cellar::cache::{QueryResultCache, StatementCache};
use cellar::{values, Query, Render, Value};
use tests::{cache_key_for, rows_with_ids, FakeStatement};

#[test]
fn render_then_execute_then_cache() {
    let statements = StatementCache::<FakeStatement>::new(16);
    let results = QueryResultCache::new(16, Duration::from_secs(60));

    let query = Query::table("users")
        .filter("age > ?", values![18])
        .filter("name = ?", values!["Bob"])
        .cache();

    let (sql, _) = query.render(0);
    assert_eq!(sql, r#"SELECT * FROM "users" WHERE age > $1 AND name = $2"#);
    assert_eq!(query.all_args(), vec![Value::from(18), Value::from("Bob")]);

    // first execution: prepare and remember the handle
    let handle = match statements.get(&sql) {
        Some(handle) => handle,
        None => {
            let prepared = FakeStatement::prepare(&sql);
            statements.set(sql.clone(), prepared.clone());
            prepared
        }
    };

    // the description opted in, so the rows land in the result cache
    let key = cache_key_for(&query);
    assert!(query.is_cached());
    assert!(results.get(&key).is_none());
    results.set(key.clone(), rows_with_ids(&[1, 2]), query.cache_ttl());

    // second execution: both caches short-circuit
    assert_eq!(statements.get(&sql), Some(handle));
    let rows = results.get(&key).expect("cached result");
    assert_eq!(rows.len(), 2);

    assert_eq!(statements.stats().hits, 1);
    assert_eq!(results.stats().hits, 1);
}

#[test]
fn writes_invalidate_cached_reads_synchronously() {
    let results = QueryResultCache::new(16, Duration::from_secs(60));

    let users = Query::table("users").filter("active = ?", values![true]).cache();
    let posts = Query::table("posts").cache();

    results.set(cache_key_for(&users), rows_with_ids(&[1]), None);
    results.set(cache_key_for(&posts), rows_with_ids(&[2]), None);

    // the write path invalidates before reporting success
    let removed = results.invalidate_table("users");
    assert_eq!(removed, 1);

    assert!(results.get(&cache_key_for(&users)).is_none());
    assert!(results.get(&cache_key_for(&posts)).is_some());
}

#[test]
fn uncached_queries_never_touch_the_result_cache() {
    let query = Query::table("users").cache_for(Duration::from_secs(5));
    assert!(query.is_cached());
    assert_eq!(query.cache_ttl(), Some(Duration::from_secs(5)));

    let opted_out = query.uncache();
    assert!(!opted_out.is_cached());
    assert_eq!(opted_out.cache_ttl(), None);
}

#[test]
fn one_statement_handle_serves_many_argument_sets() {
    let statements = StatementCache::<FakeStatement>::new(16);

    let by_age = |age: i64| Query::table("users").filter("age > ?", values![age]);

    let (sql_a, _) = by_age(18).render(0);
    let (sql_b, _) = by_age(65).render(0);

    // same SQL text regardless of bound values
    assert_eq!(sql_a, sql_b);

    statements.set(sql_a.clone(), FakeStatement::prepare(&sql_a));
    assert!(statements.get(&sql_b).is_some());

    // the argument vectors still differ
    assert_eq!(by_age(18).all_args(), vec![Value::from(18_i64)]);
    assert_eq!(by_age(65).all_args(), vec![Value::from(65_i64)]);
}

#[test]
fn stale_handle_recovery_is_delete_then_retry() {
    let statements = StatementCache::<FakeStatement>::new(16);
    let sql = r#"SELECT * FROM "users""#;

    statements.set(sql, FakeStatement::prepare(sql));

    // execution failed downstream: drop the handle and prepare again
    assert!(statements.delete(sql).is_some());
    assert!(statements.get(sql).is_none());

    statements.set(sql, FakeStatement::prepare(sql));
    assert!(statements.get(sql).is_some());
}
