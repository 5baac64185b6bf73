use crate::{
    ast::{
        common::Ident,
        criterion::{
            BasicCriterion, Comparator, ComplexCriterion, ContainsCriterion, Criterion,
            LogicalOp, Operand, RangeCriterion, RangeOp,
        },
    },
    renderer::{Render, Renderer},
};

impl Render for Criterion {
    fn render(&self, r: &mut Renderer) {
        match self {
            Criterion::Basic(basic) => basic.render(r),
            Criterion::Complex(complex) => complex.render(r),
            Criterion::Contains(contains) => contains.render(r),
            Criterion::Range(range) => range.render(r),
        }
    }
}

impl Render for BasicCriterion {
    fn render(&self, r: &mut Renderer) {
        self.left.render(r);

        let op_str = match self.comparator {
            Comparator::Eq => " = ",
            Comparator::NotEq => " <> ",
            Comparator::Lt => " < ",
            Comparator::LtEq => " <= ",
            Comparator::Gt => " > ",
            Comparator::GtEq => " >= ",
            Comparator::Like => " LIKE ",
            Comparator::In => " IN ",
        };
        r.sql.push_str(op_str);

        self.right.render(r);
    }
}

impl Render for ComplexCriterion {
    fn render(&self, r: &mut Renderer) {
        r.sql.push('(');
        self.left.render(r);

        let op_str = match self.op {
            LogicalOp::And => " AND ",
            LogicalOp::Or => " OR ",
        };
        r.sql.push_str(op_str);

        self.right.render(r);
        r.sql.push(')');
    }
}

impl Render for ContainsCriterion {
    fn render(&self, r: &mut Renderer) {
        self.term.render(r);
        r.sql.push_str(" IN (");
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                r.sql.push_str(", ");
            }
            r.add_param(value.clone());
        }
        r.sql.push(')');
    }
}

impl Render for RangeCriterion {
    fn render(&self, r: &mut Renderer) {
        self.term.render(r);

        let op_str = match self.op {
            RangeOp::Between => " BETWEEN ",
            RangeOp::NotBetween => " NOT BETWEEN ",
        };
        r.sql.push_str(op_str);

        self.start.render(r);
        r.sql.push_str(" AND ");
        self.end.render(r);
    }
}

impl Render for Ident {
    fn render(&self, r: &mut Renderer) {
        if let Some(qualifier) = &self.qualifier {
            r.sql.push_str(&r.dialect.quote_identifier(qualifier));
            r.sql.push('.');
        }
        r.sql.push_str(&r.dialect.quote_identifier(&self.name));
    }
}

impl Render for Operand {
    fn render(&self, r: &mut Renderer) {
        match self {
            Operand::Value(value) => r.add_param(value.clone()),
            Operand::Placeholder(placeholder) => r.sql.push_str(placeholder),
        }
    }
}
