mod result;
pub use result::{CacheKey, QueryResultCache};

mod statement;
pub use statement::StatementCache;

mod stats;
pub use stats::CacheStats;
