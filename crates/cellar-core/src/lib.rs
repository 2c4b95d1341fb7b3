#[macro_use]
mod macros;

mod error;
pub use error::Error;

pub mod stmt;

/// A Result type alias that uses Cellar's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
