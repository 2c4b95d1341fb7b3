mod render;
pub use render::Render;

mod serializer;
pub use serializer::{Flavor, ParamCounter, Params, Placeholder, Serializer};
