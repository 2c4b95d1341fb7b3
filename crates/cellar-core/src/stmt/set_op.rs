use super::Query;

/// A set operation appending another query's result set.
///
/// # Examples
///
/// ```text
/// SELECT ... UNION SELECT ...       // combines with union
/// SELECT ... EXCEPT SELECT ...      // removes matching rows
/// SELECT ... INTERSECT SELECT ...   // keeps only common rows
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SetOp {
    /// The set operation to apply
    pub kind: SetOpKind,

    /// The right-hand query
    pub query: Query,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOpKind {
    Union,
    UnionAll,
    Intersect,
    Except,
}

impl SetOp {
    pub fn is_union(&self) -> bool {
        matches!(self.kind, SetOpKind::Union | SetOpKind::UnionAll)
    }
}
