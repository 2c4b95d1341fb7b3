/// Placeholder syntax differences between SQL dialects.
///
/// Dialects are not otherwise modeled; the same SQL text is produced for
/// every flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Flavor {
    Mysql,
    #[default]
    Postgresql,
    Sqlite,
}
