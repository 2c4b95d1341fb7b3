use super::{Query, Value};

/// Right-hand side of an `IN` predicate: either a literal value list or
/// a subquery.
#[derive(Debug, Clone, PartialEq)]
pub enum InTarget {
    List(Vec<Value>),
    Subquery(Query),
}

impl From<Vec<Value>> for InTarget {
    fn from(values: Vec<Value>) -> Self {
        Self::List(values)
    }
}

impl From<Query> for InTarget {
    fn from(query: Query) -> Self {
        Self::Subquery(query)
    }
}
