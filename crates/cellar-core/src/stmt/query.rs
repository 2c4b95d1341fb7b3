use std::time::Duration;

use super::{
    CacheHint, Condition, ConditionGroup, Cte, Direction, ExistsCheck, GroupOp, InSubquery,
    InTarget, Join, JoinKind, OrderTerm, SetOp, SetOpKind, SubqueryFrom, Value, Window,
};

/// The full description of one query before rendering.
///
/// A `Query` is immutable: every builder method clones the receiver,
/// extends the relevant clause list on the clone, and returns it. Two
/// queries derived from a common ancestor never observe each other's
/// later refinements.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    /// Target table name
    pub table: String,

    /// Selected columns. Empty selects `*`.
    pub columns: Vec<String>,

    /// `SELECT DISTINCT`
    pub distinct: bool,

    /// `SELECT DISTINCT ON (..)` columns
    pub distinct_on: Vec<String>,

    /// Groups produced by combining whole queries with `or` / `and`.
    /// Rendered before the plain conditions.
    pub condition_groups: Vec<ConditionGroup>,

    /// Plain `WHERE` conditions, joined with `AND`
    pub conditions: Vec<Condition>,

    /// Joins, in the order added
    pub joins: Vec<Join>,

    /// `GROUP BY` columns
    pub group_by: Vec<String>,

    /// `HAVING` conditions, rendered only when a `GROUP BY` is present
    pub having: Vec<Condition>,

    /// `ORDER BY` terms
    pub order_by: Vec<OrderTerm>,

    /// `LIMIT`
    pub limit: Option<u64>,

    /// `OFFSET`
    pub offset: Option<u64>,

    /// Any CTEs
    pub ctes: Vec<Cte>,

    /// Replaces the table as the `FROM` source when set
    pub from_subquery: Option<SubqueryFrom>,

    /// `EXISTS` / `NOT EXISTS` predicates
    pub exists_checks: Vec<ExistsCheck>,

    /// `IN` / `NOT IN` subquery predicates
    pub in_subqueries: Vec<InSubquery>,

    /// Window-function expressions appended to the select list
    pub windows: Vec<Window>,

    /// Set operations appended after the main statement
    pub set_ops: Vec<SetOp>,

    /// Result-cache opt-in
    pub cache: Option<CacheHint>,
}

impl Query {
    /// Starts a query over `table`.
    pub fn table(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: vec![],
            distinct: false,
            distinct_on: vec![],
            condition_groups: vec![],
            conditions: vec![],
            joins: vec![],
            group_by: vec![],
            having: vec![],
            order_by: vec![],
            limit: None,
            offset: None,
            ctes: vec![],
            from_subquery: None,
            exists_checks: vec![],
            in_subqueries: vec![],
            windows: vec![],
            set_ops: vec![],
            cache: None,
        }
    }

    /// Appends columns to the select list.
    pub fn select<I>(&self, columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut query = self.clone();
        query.columns.extend(columns.into_iter().map(Into::into));
        query
    }

    pub fn distinct(&self) -> Self {
        let mut query = self.clone();
        query.distinct = true;
        query
    }

    pub fn distinct_on<I>(&self, columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut query = self.clone();
        query
            .distinct_on
            .extend(columns.into_iter().map(Into::into));
        query
    }

    /// Adds a `WHERE` condition. `text` may contain `?` placeholders,
    /// bound left-to-right to `args`.
    pub fn filter(&self, text: impl Into<String>, args: Vec<Value>) -> Self {
        let mut query = self.clone();
        query.conditions.push(Condition::new(text, args));
        query
    }

    /// Adds a `HAVING` condition. Only rendered when the query also has
    /// a `GROUP BY`.
    pub fn having(&self, text: impl Into<String>, args: Vec<Value>) -> Self {
        let mut query = self.clone();
        query.having.push(Condition::new(text, args));
        query
    }

    /// Combines this query's plain conditions with `other`'s under `OR`.
    ///
    /// Both sides' plain condition lists collapse into a single
    /// [`ConditionGroup`]; the result carries no plain conditions from
    /// either side, so repeated combinations compose left-to-right.
    pub fn or(&self, other: &Query) -> Self {
        self.combine(other, GroupOp::Or)
    }

    /// Combines this query's plain conditions with `other`'s under `AND`.
    pub fn and(&self, other: &Query) -> Self {
        self.combine(other, GroupOp::And)
    }

    fn combine(&self, other: &Query, op: GroupOp) -> Self {
        let mut query = self.clone();

        if query.conditions.is_empty() && other.conditions.is_empty() {
            return query;
        }

        let group = ConditionGroup {
            left: std::mem::take(&mut query.conditions),
            right: other.conditions.clone(),
            op,
        };
        query.condition_groups.push(group);
        query
    }

    /// Copies `other`'s clause lists into a new query.
    ///
    /// List-shaped clauses (joins, conditions, groups, havings, orders,
    /// group-by and distinct-on columns) are appended. Scalar fields
    /// (limit, offset, distinct flag) fill only when unset on the
    /// receiver.
    pub fn merge(&self, other: &Query) -> Self {
        let mut query = self.clone();

        query.joins.extend(other.joins.iter().cloned());
        query
            .condition_groups
            .extend(other.condition_groups.iter().cloned());
        query.conditions.extend(other.conditions.iter().cloned());
        query.group_by.extend(other.group_by.iter().cloned());
        query.having.extend(other.having.iter().cloned());
        query.order_by.extend(other.order_by.iter().cloned());
        query.distinct_on.extend(other.distinct_on.iter().cloned());

        if query.limit.is_none() {
            query.limit = other.limit;
        }
        if query.offset.is_none() {
            query.offset = other.offset;
        }
        if !query.distinct {
            query.distinct = other.distinct;
        }

        query
    }

    pub fn order_by(&self, column: impl Into<String>, direction: Direction) -> Self {
        let mut query = self.clone();
        query.order_by.push(OrderTerm::new(column, direction));
        query
    }

    pub fn limit(&self, limit: u64) -> Self {
        let mut query = self.clone();
        query.limit = Some(limit);
        query
    }

    pub fn offset(&self, offset: u64) -> Self {
        let mut query = self.clone();
        query.offset = Some(offset);
        query
    }

    pub fn group_by<I>(&self, columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut query = self.clone();
        query.group_by.extend(columns.into_iter().map(Into::into));
        query
    }

    /// Adds an inner join.
    pub fn join(&self, table: impl Into<String>, on: impl Into<String>) -> Self {
        self.join_with(Join::new(JoinKind::Inner, table, on))
    }

    pub fn left_join(&self, table: impl Into<String>, on: impl Into<String>) -> Self {
        self.join_with(Join::new(JoinKind::Left, table, on))
    }

    pub fn right_join(&self, table: impl Into<String>, on: impl Into<String>) -> Self {
        self.join_with(Join::new(JoinKind::Right, table, on))
    }

    pub fn cross_join(&self, table: impl Into<String>) -> Self {
        self.join_with(Join::cross(table))
    }

    pub fn full_outer_join(&self, table: impl Into<String>, on: impl Into<String>) -> Self {
        self.join_with(Join::new(JoinKind::FullOuter, table, on))
    }

    pub fn join_with(&self, join: Join) -> Self {
        let mut query = self.clone();
        query.joins.push(join);
        query
    }

    pub fn window(&self, window: Window) -> Self {
        let mut query = self.clone();
        query.windows.push(window);
        query
    }

    pub fn with(&self, cte: Cte) -> Self {
        let mut query = self.clone();
        query.ctes.push(cte);
        query
    }

    pub fn with_cte(&self, name: impl Into<String>, inner: Query) -> Self {
        self.with(Cte::new(name, inner))
    }

    /// Attaches a recursive CTE. `inner` should be a `union_all`
    /// composition of the anchor query and the recursive branch.
    pub fn with_recursive_cte(&self, name: impl Into<String>, inner: Query) -> Self {
        self.with(Cte::new(name, inner).recursive())
    }

    /// Selects from a subquery instead of the table.
    pub fn from_subquery(&self, inner: Query, alias: impl Into<String>) -> Self {
        let mut query = self.clone();
        query.from_subquery = Some(SubqueryFrom::new(inner, alias));
        query
    }

    pub fn exists(&self, inner: Query) -> Self {
        let mut query = self.clone();
        query.exists_checks.push(ExistsCheck {
            query: inner,
            negated: false,
        });
        query
    }

    pub fn not_exists(&self, inner: Query) -> Self {
        let mut query = self.clone();
        query.exists_checks.push(ExistsCheck {
            query: inner,
            negated: true,
        });
        query
    }

    /// Adds a `<column> IN (..)` predicate against a value list or a
    /// subquery.
    ///
    /// An empty value list is a no-op: `IN ()` is invalid SQL in some
    /// dialects, so the query is returned unmodified instead.
    pub fn filter_in(&self, column: impl Into<String>, target: impl Into<InTarget>) -> Self {
        self.filter_in_impl(column.into(), target.into(), false)
    }

    /// Negated form of [`filter_in`](Self::filter_in); the empty-list
    /// no-op applies here too.
    pub fn filter_not_in(&self, column: impl Into<String>, target: impl Into<InTarget>) -> Self {
        self.filter_in_impl(column.into(), target.into(), true)
    }

    fn filter_in_impl(&self, column: String, target: InTarget, negated: bool) -> Self {
        match target {
            InTarget::List(values) => {
                if values.is_empty() {
                    return self.clone();
                }

                let placeholders = vec!["?"; values.len()].join(", ");
                let keyword = if negated { "NOT IN" } else { "IN" };
                self.filter(format!("{column} {keyword} ({placeholders})"), values)
            }
            InTarget::Subquery(inner) => {
                let mut query = self.clone();
                query.in_subqueries.push(InSubquery {
                    column,
                    query: inner,
                    negated,
                });
                query
            }
        }
    }

    pub fn union(&self, other: Query) -> Self {
        self.set_op(SetOpKind::Union, other)
    }

    pub fn union_all(&self, other: Query) -> Self {
        self.set_op(SetOpKind::UnionAll, other)
    }

    pub fn intersect(&self, other: Query) -> Self {
        self.set_op(SetOpKind::Intersect, other)
    }

    pub fn except(&self, other: Query) -> Self {
        self.set_op(SetOpKind::Except, other)
    }

    fn set_op(&self, kind: SetOpKind, other: Query) -> Self {
        let mut query = self.clone();
        query.set_ops.push(SetOp { kind, query: other });
        query
    }

    /// Opts the query into the result cache with the cache-wide default
    /// TTL.
    pub fn cache(&self) -> Self {
        let mut query = self.clone();
        query.cache = Some(CacheHint::default());
        query
    }

    /// Opts the query into the result cache with an entry-specific TTL.
    pub fn cache_for(&self, ttl: Duration) -> Self {
        let mut query = self.clone();
        query.cache = Some(CacheHint { ttl: Some(ttl) });
        query
    }

    pub fn uncache(&self) -> Self {
        let mut query = self.clone();
        query.cache = None;
        query
    }

    pub fn is_cached(&self) -> bool {
        self.cache.is_some()
    }

    pub fn cache_ttl(&self) -> Option<Duration> {
        self.cache.and_then(|hint| hint.ttl)
    }

    /// A fresh query over the same table, with every clause dropped.
    pub fn reset(&self) -> Self {
        Self::table(self.table.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_calls_leave_receiver_unchanged() {
        let base = Query::table("users").filter("age > ?", crate::values![18]);
        let snapshot = base.clone();

        let _ = base.filter("name = ?", crate::values!["Bob"]);
        let _ = base.order_by("id", Direction::Desc);
        let _ = base.limit(10);
        let _ = base.join("posts", "posts.user_id = users.id");

        assert_eq!(base, snapshot);
    }

    #[test]
    fn branches_diverge_independently() {
        let base = Query::table("users").filter("a = ?", crate::values![1]);
        let left = base.filter("b = ?", crate::values![2]);
        let right = base.filter("c = ?", crate::values![3]);

        assert_eq!(base.conditions.len(), 1);
        assert_eq!(left.conditions.len(), 2);
        assert_eq!(right.conditions.len(), 2);
        assert_eq!(left.conditions[1].text, "b = ?");
        assert_eq!(right.conditions[1].text, "c = ?");
    }

    #[test]
    fn or_collapses_plain_conditions() {
        let a = Query::table("users").filter("x = ?", crate::values![1]);
        let b = Query::table("users").filter("y = ?", crate::values![2]);

        let combined = a.or(&b);

        assert!(combined.conditions.is_empty());
        assert_eq!(combined.condition_groups.len(), 1);
        assert_eq!(combined.condition_groups[0].op, GroupOp::Or);
        assert_eq!(combined.condition_groups[0].left.len(), 1);
        assert_eq!(combined.condition_groups[0].right.len(), 1);

        // receivers untouched
        assert_eq!(a.conditions.len(), 1);
        assert_eq!(b.conditions.len(), 1);
    }

    #[test]
    fn empty_in_list_is_a_no_op() {
        let base = Query::table("users");
        let unchanged = base.filter_in("id", crate::values![]);
        assert_eq!(base, unchanged);

        let negated = base.filter_not_in("id", crate::values![]);
        assert_eq!(base, negated);
    }

    #[test]
    fn merge_fills_unset_scalars_only() {
        let base = Query::table("users").limit(5);
        let other = Query::table("ignored")
            .limit(99)
            .offset(10)
            .filter("x = ?", crate::values![1]);

        let merged = base.merge(&other);

        assert_eq!(merged.limit, Some(5));
        assert_eq!(merged.offset, Some(10));
        assert_eq!(merged.conditions.len(), 1);
        assert_eq!(merged.table, "users");
    }

    #[test]
    fn reset_keeps_only_the_table() {
        let query = Query::table("users")
            .filter("a = ?", crate::values![1])
            .limit(3)
            .cache();

        assert_eq!(query.reset(), Query::table("users"));
    }
}
