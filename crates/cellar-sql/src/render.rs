use cellar_core::stmt::{Query, Value};

use crate::serializer::{ParamCounter, Serializer};

/// Renders a query description to SQL text and its argument vector.
///
/// Both methods drive the same serializer walk, so the `$N` numbering
/// produced by `render` always lines up with the argument order produced
/// by `all_args`.
pub trait Render {
    /// Renders to SQL, numbering placeholders from `offset + 1`.
    ///
    /// Returns the SQL text and the next unused offset, for callers
    /// embedding the result inside a larger statement.
    fn render(&self, offset: usize) -> (String, usize);

    /// The bound arguments, in placeholder order.
    fn all_args(&self) -> Vec<Value>;
}

impl Render for Query {
    fn render(&self, offset: usize) -> (String, usize) {
        let mut params = ParamCounter::starting_at(offset);
        let sql = Serializer::postgresql().serialize(self, &mut params);
        (sql, params.next_offset())
    }

    fn all_args(&self) -> Vec<Value> {
        let mut args = Vec::new();
        Serializer::postgresql().serialize(self, &mut args);
        args
    }
}
