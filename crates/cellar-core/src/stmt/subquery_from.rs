use super::Query;

/// A subquery used as the `FROM` source of an outer query.
///
/// Renders as `FROM (<subquery>) AS <alias>`.
#[derive(Debug, Clone, PartialEq)]
pub struct SubqueryFrom {
    pub query: Box<Query>,
    pub alias: String,
}

impl SubqueryFrom {
    pub fn new(query: Query, alias: impl Into<String>) -> Self {
        Self {
            query: Box::new(query),
            alias: alias.into(),
        }
    }
}
