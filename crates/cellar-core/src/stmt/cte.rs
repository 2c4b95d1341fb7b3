use super::Query;

/// A common table expression attached to a query's `WITH` clause.
#[derive(Debug, Clone, PartialEq)]
pub struct Cte {
    /// Name the CTE is referenced by
    pub name: String,

    /// The inner query. For a recursive CTE this is a `UNION ALL`
    /// composition of the anchor and the recursive branch.
    pub query: Query,

    /// True when the CTE references itself
    pub recursive: bool,

    /// Optional materialization hint
    pub materialize: Materialize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Materialize {
    Materialized,
    NotMaterialized,
    #[default]
    Unspecified,
}

impl Cte {
    pub fn new(name: impl Into<String>, query: Query) -> Self {
        Self {
            name: name.into(),
            query,
            recursive: false,
            materialize: Materialize::Unspecified,
        }
    }

    pub fn recursive(mut self) -> Self {
        self.recursive = true;
        self
    }

    pub fn materialized(mut self) -> Self {
        self.materialize = Materialize::Materialized;
        self
    }

    pub fn not_materialized(mut self) -> Self {
        self.materialize = Materialize::NotMaterialized;
        self
    }
}
