use super::{Formatter, Params, ToSql};

pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let name = self.0.as_ref();

        if looks_like_expression(name) {
            f.dst.push_str(name);
        } else {
            f.dst.push('"');
            for ch in name.chars() {
                if ch == '"' {
                    f.dst.push('"');
                }
                f.dst.push(ch);
            }
            f.dst.push('"');
        }
    }
}

/// Raw fragments pass through unquoted: function calls, qualified or
/// aliased columns, `*`, and names the caller already quoted.
fn looks_like_expression(name: &str) -> bool {
    name.contains('(')
        || name.contains('.')
        || name.contains('*')
        || name.starts_with('"')
        || name.chars().any(char::is_whitespace)
}
