/// A window-function expression added to the select list.
///
/// Renders as `<function> OVER (PARTITION BY .. ORDER BY ..) AS <alias>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Window {
    /// The window function call, e.g. `row_number()`
    pub function: String,

    /// `PARTITION BY` expression
    pub partition_by: Option<String>,

    /// `ORDER BY` expression inside the window
    pub order_by: Option<String>,

    /// Column alias for the result
    pub alias: String,
}

impl Window {
    pub fn new(function: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            function: function.into(),
            partition_by: None,
            order_by: None,
            alias: alias.into(),
        }
    }

    pub fn partition_by(mut self, expr: impl Into<String>) -> Self {
        self.partition_by = Some(expr.into());
        self
    }

    pub fn order_by(mut self, expr: impl Into<String>) -> Self {
        self.order_by = Some(expr.into());
        self
    }
}
