use super::{Delimited, Formatter, Ident, Params, ToSql};

use cellar_core::stmt;

impl ToSql for stmt::Direction {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            stmt::Direction::Asc => fmt!(f, "ASC"),
            stmt::Direction::Desc => fmt!(f, "DESC"),
        }
    }
}

impl ToSql for &stmt::OrderTerm {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, Ident(&self.column) " " self.direction);
    }
}

impl ToSql for &stmt::Join {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let keyword = match self.kind {
            stmt::JoinKind::Inner => " INNER JOIN ",
            stmt::JoinKind::Left => " LEFT JOIN ",
            stmt::JoinKind::Right => " RIGHT JOIN ",
            stmt::JoinKind::Cross => " CROSS JOIN ",
            stmt::JoinKind::FullOuter => " FULL OUTER JOIN ",
        };

        fmt!(f, keyword Ident(&self.table));

        if let Some(alias) = &self.alias {
            fmt!(f, " AS " Ident(alias));
        }

        if self.kind != stmt::JoinKind::Cross {
            if let Some(on) = &self.on {
                fmt!(f, " ON " on.as_str());
            }
        }
    }
}

impl ToSql for &stmt::Window {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, self.function.as_str() " OVER (");

        let mut sep = "";
        if let Some(partition) = &self.partition_by {
            fmt!(f, "PARTITION BY " partition.as_str());
            sep = " ";
        }
        if let Some(order) = &self.order_by {
            fmt!(f, sep "ORDER BY " order.as_str());
        }

        fmt!(f, ") AS " Ident(&self.alias));
    }
}

impl ToSql for stmt::SetOpKind {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            stmt::SetOpKind::Union => fmt!(f, "UNION"),
            stmt::SetOpKind::UnionAll => fmt!(f, "UNION ALL"),
            stmt::SetOpKind::Intersect => fmt!(f, "INTERSECT"),
            stmt::SetOpKind::Except => fmt!(f, "EXCEPT"),
        }
    }
}

impl ToSql for &stmt::ConditionGroup {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, "(");

        if !self.left.is_empty() {
            group_side(&self.left, f);
        }

        if !self.left.is_empty() && !self.right.is_empty() {
            match self.op {
                stmt::GroupOp::Or => fmt!(f, " OR "),
                stmt::GroupOp::And => fmt!(f, " AND "),
            }
        }

        if !self.right.is_empty() {
            group_side(&self.right, f);
        }

        fmt!(f, ")");
    }
}

fn group_side<P: Params>(conditions: &[stmt::Condition], f: &mut Formatter<'_, P>) {
    if let [condition] = conditions {
        condition.to_sql(f);
    } else {
        fmt!(f, "(" Delimited(conditions.iter(), " AND ") ")");
    }
}

impl ToSql for &stmt::ExistsCheck {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        if self.negated {
            fmt!(f, "NOT ");
        }
        fmt!(f, "EXISTS (" self.query ")");
    }
}

impl ToSql for &stmt::InSubquery {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, Ident(&self.column));
        if self.negated {
            fmt!(f, " NOT");
        }
        fmt!(f, " IN (" self.query ")");
    }
}
