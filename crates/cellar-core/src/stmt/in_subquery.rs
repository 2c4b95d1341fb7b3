use super::Query;

/// A `<column> IN (<subquery>)` predicate, optionally negated.
#[derive(Debug, Clone, PartialEq)]
pub struct InSubquery {
    pub column: String,
    pub query: Query,
    pub negated: bool,
}
