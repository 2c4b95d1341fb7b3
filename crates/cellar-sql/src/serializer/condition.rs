use super::{Formatter, Params, ToSql};

use cellar_core::stmt;

impl ToSql for &stmt::Condition {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let mut args = self.args.iter();

        for ch in self.text.chars() {
            if ch == '?' {
                let value = args.next().unwrap_or_else(|| {
                    panic!(
                        "condition `{}` has more placeholders than arguments",
                        self.text
                    )
                });
                let placeholder = f.params.push(value);
                placeholder.to_sql(f);
            } else {
                f.dst.push(ch);
            }
        }

        assert!(
            args.next().is_none(),
            "condition `{}` has more arguments than placeholders",
            self.text
        );
    }
}
