#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Delimited};

mod flavor;
pub use flavor::Flavor;

mod ident;
use ident::Ident;

mod params;
pub use params::{ParamCounter, Params, Placeholder};

// Fragment serializers
mod clause;
mod condition;
mod query;

use cellar_core::stmt;

/// Serialize a query description to a SQL string
#[derive(Debug, Default)]
pub struct Serializer {
    /// The database flavor handles the differences in placeholder syntax
    /// between SQL dialects.
    flavor: Flavor,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,
}

impl Serializer {
    pub fn new(flavor: Flavor) -> Self {
        Self { flavor }
    }

    pub fn postgresql() -> Self {
        Self::new(Flavor::Postgresql)
    }

    pub fn mysql() -> Self {
        Self::new(Flavor::Mysql)
    }

    pub fn sqlite() -> Self {
        Self::new(Flavor::Sqlite)
    }

    /// Serializes `query`, pushing each bound value into `params` in the
    /// order its placeholder appears in the output.
    pub fn serialize(&self, query: &stmt::Query, params: &mut impl Params) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
        };

        query.to_sql(&mut fmt);

        ret
    }
}
