/// Builds a `Vec<stmt::Value>` from heterogeneous literals.
///
/// ```
/// use cellar_core::values;
///
/// let args = values![18, "Bob", true];
/// assert_eq!(args.len(), 3);
/// ```
#[macro_export]
macro_rules! values {
    () => {
        Vec::<$crate::stmt::Value>::new()
    };
    ($( $value:expr ),+ $(,)?) => {
        vec![ $( $crate::stmt::Value::from($value), )+ ]
    };
}
