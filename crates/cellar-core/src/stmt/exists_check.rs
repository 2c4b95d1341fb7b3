use super::Query;

/// An `EXISTS` / `NOT EXISTS` subquery predicate.
#[derive(Debug, Clone, PartialEq)]
pub struct ExistsCheck {
    pub query: Query,
    pub negated: bool,
}
