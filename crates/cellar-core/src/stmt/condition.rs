use super::Value;

/// A boolean SQL fragment with `?` placeholders.
///
/// The text is never interpolated with literal values; every `?` is bound
/// to the argument at the same position in `args`.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    /// Raw SQL fragment, e.g. `age > ?`
    pub text: String,

    /// Arguments bound to the fragment's placeholders, in order
    pub args: Vec<Value>,
}

impl Condition {
    pub fn new(text: impl Into<String>, args: Vec<Value>) -> Self {
        Self {
            text: text.into(),
            args,
        }
    }

    /// Number of `?` placeholders in the fragment text.
    pub fn placeholder_count(&self) -> usize {
        self.text.chars().filter(|c| *c == '?').count()
    }
}

impl From<&str> for Condition {
    fn from(text: &str) -> Self {
        Self::new(text, vec![])
    }
}
