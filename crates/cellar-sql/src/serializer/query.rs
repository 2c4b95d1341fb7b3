use super::{Comma, Formatter, Ident, Params, ToSql};

use cellar_core::stmt;

impl ToSql for &stmt::Query {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        // WITH comes first so CTE arguments take the lowest placeholder
        // indexes; every later clause continues the same sequence.
        if !self.ctes.is_empty() {
            let keyword = if self.ctes.iter().any(|cte| cte.recursive) {
                "WITH RECURSIVE "
            } else {
                "WITH "
            };
            fmt!(f, keyword Comma(self.ctes.iter()) " ");
        }

        fmt!(f, "SELECT ");
        if !self.distinct_on.is_empty() {
            fmt!(f, "DISTINCT ON (" Comma(self.distinct_on.iter().map(Ident)) ") ");
        } else if self.distinct {
            fmt!(f, "DISTINCT ");
        }

        if self.columns.is_empty() {
            fmt!(f, "*");
        } else {
            fmt!(f, Comma(self.columns.iter().map(Ident)));
        }
        for window in &self.windows {
            fmt!(f, ", " window);
        }

        match &self.from_subquery {
            Some(subquery) => fmt!(f, " FROM " subquery),
            None => fmt!(f, " FROM " Ident(&self.table)),
        }

        for join in &self.joins {
            join.to_sql(f);
        }

        let has_where = !self.condition_groups.is_empty()
            || !self.conditions.is_empty()
            || !self.exists_checks.is_empty()
            || !self.in_subqueries.is_empty();

        if has_where {
            fmt!(f, " WHERE ");

            let mut sep = "";
            for group in &self.condition_groups {
                fmt!(f, sep group);
                sep = " AND ";
            }
            for condition in &self.conditions {
                fmt!(f, sep condition);
                sep = " AND ";
            }
            for check in &self.exists_checks {
                fmt!(f, sep check);
                sep = " AND ";
            }
            for in_subquery in &self.in_subqueries {
                fmt!(f, sep in_subquery);
                sep = " AND ";
            }
        }

        // DISTINCT ON columns join the explicit group columns
        let group_columns = || self.group_by.iter().chain(self.distinct_on.iter());
        if group_columns().next().is_some() {
            fmt!(f, " GROUP BY " Comma(group_columns().map(Ident)));

            let mut sep = " HAVING ";
            for condition in &self.having {
                fmt!(f, sep condition);
                sep = " AND ";
            }
        }

        if !self.order_by.is_empty() {
            fmt!(f, " ORDER BY " Comma(self.order_by.iter()));
        }

        if let Some(limit) = self.limit {
            fmt!(f, " LIMIT " limit);
        }
        if let Some(offset) = self.offset {
            fmt!(f, " OFFSET " offset);
        }

        for set_op in &self.set_ops {
            fmt!(f, " " set_op.kind " " set_op.query);
        }
    }
}

impl ToSql for &stmt::Cte {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, Ident(&self.name) " AS ");

        match self.materialize {
            stmt::Materialize::Materialized => fmt!(f, "MATERIALIZED "),
            stmt::Materialize::NotMaterialized => fmt!(f, "NOT MATERIALIZED "),
            stmt::Materialize::Unspecified => {}
        }

        fmt!(f, "(" self.query ")");
    }
}

impl ToSql for &stmt::SubqueryFrom {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, "(" self.query.as_ref() ") AS " Ident(&self.alias));
    }
}
