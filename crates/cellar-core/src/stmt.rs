mod cache_hint;
pub use cache_hint::CacheHint;

mod condition;
pub use condition::Condition;

mod condition_group;
pub use condition_group::{ConditionGroup, GroupOp};

mod cte;
pub use cte::{Cte, Materialize};

mod direction;
pub use direction::Direction;

mod exists_check;
pub use exists_check::ExistsCheck;

mod in_subquery;
pub use in_subquery::InSubquery;

mod in_target;
pub use in_target::InTarget;

mod join;
pub use join::{Join, JoinKind};

mod order_term;
pub use order_term::OrderTerm;

mod query;
pub use query::Query;

mod row;
pub use row::Row;

mod set_op;
pub use set_op::{SetOp, SetOpKind};

mod subquery_from;
pub use subquery_from::SubqueryFrom;

mod value;
pub use value::Value;

mod window;
pub use window::Window;
