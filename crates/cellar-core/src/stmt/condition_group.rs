use super::Condition;

/// Two condition lists combined with a boolean operator.
///
/// Produced by combining two whole query descriptions with `or` / `and`.
/// Renders parenthesized, each side itself parenthesized when it holds
/// more than one condition:
///
/// ```text
/// ((a = $1 AND b = $2) OR c = $3)
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionGroup {
    pub left: Vec<Condition>,
    pub right: Vec<Condition>,
    pub op: GroupOp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupOp {
    Or,
    And,
}
