use super::{Flavor, Formatter, ToSql};

use cellar_core::stmt;

/// Sink for values bound to placeholders during serialization.
pub trait Params {
    fn push(&mut self, param: &stmt::Value) -> Placeholder;
}

/// A 1-based global placeholder index.
pub struct Placeholder(pub usize);

impl Params for Vec<stmt::Value> {
    fn push(&mut self, value: &stmt::Value) -> Placeholder {
        self.push(value.clone());
        Placeholder(self.len())
    }
}

/// Counts placeholders without retaining values.
///
/// The counter starts from a caller-supplied offset so a subquery
/// embedded in a larger statement continues the same ascending
/// placeholder sequence.
#[derive(Debug)]
pub struct ParamCounter {
    next: usize,
}

impl ParamCounter {
    pub fn starting_at(offset: usize) -> Self {
        Self { next: offset }
    }

    /// The offset the next placeholder would take.
    pub fn next_offset(&self) -> usize {
        self.next
    }
}

impl Params for ParamCounter {
    fn push(&mut self, _value: &stmt::Value) -> Placeholder {
        self.next += 1;
        Placeholder(self.next)
    }
}

impl ToSql for Placeholder {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        use std::fmt::Write;

        match f.serializer.flavor {
            Flavor::Mysql => write!(&mut f.dst, "?").unwrap(),
            Flavor::Postgresql => write!(&mut f.dst, "${}", self.0).unwrap(),
            Flavor::Sqlite => write!(&mut f.dst, "?{}", self.0).unwrap(),
        }
    }
}
