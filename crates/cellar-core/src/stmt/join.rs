/// A join against another table.
#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    /// The join kind
    pub kind: JoinKind,

    /// The table to join
    pub table: String,

    /// The join condition. `None` for cross joins.
    pub on: Option<String>,

    /// Optional alias for the joined table
    pub alias: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JoinKind {
    #[default]
    Inner,
    Left,
    Right,
    Cross,
    FullOuter,
}

impl Join {
    pub fn new(kind: JoinKind, table: impl Into<String>, on: impl Into<String>) -> Self {
        Self {
            kind,
            table: table.into(),
            on: Some(on.into()),
            alias: None,
        }
    }

    /// A cross join carries no `ON` condition.
    pub fn cross(table: impl Into<String>) -> Self {
        Self {
            kind: JoinKind::Cross,
            table: table.into(),
            on: None,
            alias: None,
        }
    }

    pub fn aliased(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}
