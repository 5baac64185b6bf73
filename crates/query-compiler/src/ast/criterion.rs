//! Defines the AST for filter criteria.
//!
//! A `Criterion` is the WHERE-clause fragment handed over by the query
//! builder: comparisons on identifiers combined with AND/OR, plus
//! membership and range tests. The set of shapes is closed; the compiler
//! matches all of them exhaustively.

use crate::ast::common::Ident;
use model::core::value::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum Criterion {
    /// A single comparison, e.g., `age > 30`.
    Basic(BasicCriterion),

    /// A logical AND/OR combination of two sub-criteria.
    Complex(Box<ComplexCriterion>),

    /// A membership test over a fixed set of values, e.g., `id IN (1, 2)`.
    Contains(ContainsCriterion),

    /// A two-bound test, e.g., `age BETWEEN 10 AND 20`.
    Range(RangeCriterion),
}

impl Criterion {
    pub fn and(self, other: Criterion) -> Criterion {
        Criterion::Complex(Box::new(ComplexCriterion {
            left: self,
            op: LogicalOp::And,
            right: other,
        }))
    }

    pub fn or(self, other: Criterion) -> Criterion {
        Criterion::Complex(Box::new(ComplexCriterion {
            left: self,
            op: LogicalOp::Or,
            right: other,
        }))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BasicCriterion {
    pub left: Ident,
    pub comparator: Comparator,
    pub right: Operand,
}

impl BasicCriterion {
    pub fn new(left: Ident, comparator: Comparator, right: impl Into<Value>) -> Criterion {
        Criterion::Basic(BasicCriterion {
            left,
            comparator,
            right: Operand::Value(right.into()),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComplexCriterion {
    pub left: Criterion,
    pub op: LogicalOp,
    pub right: Criterion,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContainsCriterion {
    pub term: Ident,
    /// Members may be `Value::Null`; how NULLs bind is dialect-specific.
    pub values: Vec<Value>,
}

impl ContainsCriterion {
    pub fn new(term: Ident, values: Vec<Value>) -> Criterion {
        Criterion::Contains(ContainsCriterion { term, values })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RangeCriterion {
    pub term: Ident,
    pub op: RangeOp,
    pub start: Operand,
    pub end: Operand,
}

impl RangeCriterion {
    pub fn new(
        term: Ident,
        op: RangeOp,
        start: impl Into<Value>,
        end: impl Into<Value>,
    ) -> Criterion {
        Criterion::Range(RangeCriterion {
            term,
            op,
            start: Operand::Value(start.into()),
            end: Operand::Value(end.into()),
        })
    }
}

/// The right side of a comparison: a literal value before compilation, a
/// dialect placeholder token after.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Value(Value),
    Placeholder(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    Eq,    // =
    NotEq, // <>
    Lt,    // <
    LtEq,  // <=
    Gt,    // >
    GtEq,  // >=
    Like,  // LIKE
    In,    // IN
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOp {
    And,
    Or,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeOp {
    Between,
    NotBetween,
}
