//! The criterion compiler: rewrites literal values into dialect placeholders.
//!
//! The rewritten tree is structurally isomorphic to the input, with every
//! literal leaf replaced by a placeholder token, and the returned argument
//! list holds the extracted values in the same left-to-right order as the
//! placeholders appear in the rendered text.

use crate::ast::criterion::{
    BasicCriterion, Comparator, ComplexCriterion, Criterion, Operand, RangeCriterion,
};
use crate::dialect::Dialect;
use model::core::value::Value;

/// Compiles a criterion tree into its placeholder form plus the ordered
/// argument list to bind.
pub fn parameterize(criterion: Criterion, dialect: &dyn Dialect) -> (Criterion, Vec<Value>) {
    let mut parameterizer = Parameterizer {
        dialect,
        args: Vec::new(),
    };
    let rewritten = parameterizer.rewrite(criterion);
    (rewritten, parameterizer.args)
}

/// Holds the state of a single compilation pass.
///
/// The argument vector doubles as the placeholder counter: its length is the
/// 0-based index handed to the dialect, so numbering stays monotonic across
/// the whole traversal.
struct Parameterizer<'a> {
    dialect: &'a dyn Dialect,
    args: Vec<Value>,
}

impl Parameterizer<'_> {
    fn rewrite(&mut self, criterion: Criterion) -> Criterion {
        match criterion {
            Criterion::Basic(BasicCriterion {
                left,
                comparator,
                right,
            }) => {
                let right = self.rewrite_operand(right);
                Criterion::Basic(BasicCriterion {
                    left,
                    comparator,
                    right,
                })
            }

            Criterion::Complex(complex) => {
                // Left first, so its bindings shift the numbering seen by
                // the right subtree.
                let left = self.rewrite(complex.left);
                let right = self.rewrite(complex.right);
                Criterion::Complex(Box::new(ComplexCriterion {
                    left,
                    op: complex.op,
                    right,
                }))
            }

            Criterion::Contains(contains) => {
                let mut placeholders = Vec::with_capacity(contains.values.len());
                for value in contains.values {
                    if value.is_null() && !self.dialect.binds_null_in_list() {
                        // NULL membership needs an IS NULL predicate on
                        // this dialect.
                        continue;
                    }
                    placeholders.push(self.bind(value));
                }
                Criterion::Basic(BasicCriterion {
                    left: contains.term,
                    comparator: Comparator::In,
                    right: Operand::Placeholder(format!("({})", placeholders.join(", "))),
                })
            }

            Criterion::Range(range) => {
                let start = self.rewrite_operand(range.start);
                let end = self.rewrite_operand(range.end);
                Criterion::Range(RangeCriterion {
                    term: range.term,
                    op: range.op,
                    start,
                    end,
                })
            }
        }
    }

    fn rewrite_operand(&mut self, operand: Operand) -> Operand {
        match operand {
            Operand::Value(value) => Operand::Placeholder(self.bind(value)),
            // Already a placeholder; nothing left to bind.
            Operand::Placeholder(_) => operand,
        }
    }

    /// Appends the value to the argument list and returns the placeholder
    /// token for its position.
    fn bind(&mut self, value: Value) -> String {
        self.args.push(value);
        self.dialect.get_placeholder(self.args.len() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::common::Ident;
    use crate::ast::criterion::{ContainsCriterion, RangeOp};
    use crate::dialect::{Postgres, Sqlite};

    fn age_gt_30() -> Criterion {
        BasicCriterion::new(Ident::new("age"), Comparator::Gt, 30i64)
    }

    fn name_eq_bob() -> Criterion {
        BasicCriterion::new(Ident::new("name"), Comparator::Eq, "Bob")
    }

    fn placeholder_of(criterion: &Criterion) -> String {
        match criterion {
            Criterion::Basic(basic) => match &basic.right {
                Operand::Placeholder(p) => p.clone(),
                Operand::Value(v) => panic!("expected placeholder, found value {v:?}"),
            },
            other => panic!("expected basic criterion, found {other:?}"),
        }
    }

    #[test]
    fn test_basic_postgres() {
        let (rewritten, args) = parameterize(age_gt_30(), &Postgres);
        assert_eq!(placeholder_of(&rewritten), "$1");
        assert_eq!(args, vec![Value::Int(30)]);
    }

    #[test]
    fn test_basic_sqlite() {
        let (rewritten, args) = parameterize(age_gt_30(), &Sqlite);
        assert_eq!(placeholder_of(&rewritten), "?");
        assert_eq!(args, vec![Value::Int(30)]);
    }

    #[test]
    fn test_complex_numbers_left_to_right() {
        let (rewritten, args) = parameterize(age_gt_30().and(name_eq_bob()), &Postgres);

        let complex = match rewritten {
            Criterion::Complex(c) => c,
            other => panic!("expected complex criterion, found {other:?}"),
        };
        assert_eq!(placeholder_of(&complex.left), "$1");
        assert_eq!(placeholder_of(&complex.right), "$2");
        assert_eq!(
            args,
            vec![Value::Int(30), Value::String("Bob".to_string())]
        );
    }

    #[test]
    fn test_dialect_swap_keeps_argument_order() {
        let (_, postgres_args) = parameterize(age_gt_30().and(name_eq_bob()), &Postgres);
        let (_, sqlite_args) = parameterize(age_gt_30().and(name_eq_bob()), &Sqlite);
        assert_eq!(postgres_args, sqlite_args);
    }

    #[test]
    fn test_contains_postgres() {
        let criterion = ContainsCriterion::new(
            Ident::new("id"),
            vec![Value::Int(10), Value::Int(20), Value::Int(30)],
        );
        let (rewritten, args) = parameterize(criterion, &Postgres);

        let basic = match rewritten {
            Criterion::Basic(b) => b,
            other => panic!("expected basic criterion, found {other:?}"),
        };
        assert_eq!(basic.comparator, Comparator::In);
        assert_eq!(
            basic.right,
            Operand::Placeholder("($1, $2, $3)".to_string())
        );
        assert_eq!(args, vec![Value::Int(10), Value::Int(20), Value::Int(30)]);
    }

    #[test]
    fn test_contains_postgres_skips_nulls() {
        let criterion = ContainsCriterion::new(
            Ident::new("id"),
            vec![Value::Int(5), Value::Null, Value::Int(7)],
        );
        let (rewritten, args) = parameterize(criterion, &Postgres);

        assert_eq!(placeholder_of(&rewritten), "($1, $2)");
        assert_eq!(args, vec![Value::Int(5), Value::Int(7)]);
    }

    #[test]
    fn test_contains_sqlite_binds_nulls() {
        let criterion =
            ContainsCriterion::new(Ident::new("id"), vec![Value::Int(5), Value::Null]);
        let (rewritten, args) = parameterize(criterion, &Sqlite);

        assert_eq!(placeholder_of(&rewritten), "(?, ?)");
        assert_eq!(args, vec![Value::Int(5), Value::Null]);
    }

    #[test]
    fn test_range_allocates_consecutive_placeholders() {
        let criterion = name_eq_bob().and(RangeCriterion::new(
            Ident::new("age"),
            RangeOp::Between,
            10i64,
            20i64,
        ));
        let (rewritten, args) = parameterize(criterion, &Postgres);

        let complex = match rewritten {
            Criterion::Complex(c) => c,
            other => panic!("expected complex criterion, found {other:?}"),
        };
        let range = match complex.right {
            Criterion::Range(r) => r,
            other => panic!("expected range criterion, found {other:?}"),
        };
        assert_eq!(range.op, RangeOp::Between);
        assert_eq!(range.start, Operand::Placeholder("$2".to_string()));
        assert_eq!(range.end, Operand::Placeholder("$3".to_string()));
        assert_eq!(
            args,
            vec![
                Value::String("Bob".to_string()),
                Value::Int(10),
                Value::Int(20)
            ]
        );
    }

    #[test]
    fn test_range_subtype_preserved() {
        let criterion =
            RangeCriterion::new(Ident::new("age"), RangeOp::NotBetween, 10i64, 20i64);
        let (rewritten, _) = parameterize(criterion, &Sqlite);

        match rewritten {
            Criterion::Range(r) => assert_eq!(r.op, RangeOp::NotBetween),
            other => panic!("expected range criterion, found {other:?}"),
        }
    }

    #[test]
    fn test_nested_tree_binds_every_leaf_once() {
        // ((age > 30 AND name = 'Bob') OR (id IN (1, 2) AND score BETWEEN 0.5 AND 0.9))
        let left = age_gt_30().and(name_eq_bob());
        let right = ContainsCriterion::new(Ident::new("id"), vec![Value::Int(1), Value::Int(2)])
            .and(RangeCriterion::new(
                Ident::new("score"),
                RangeOp::Between,
                0.5f64,
                0.9f64,
            ));
        let (rewritten, args) = parameterize(left.or(right), &Postgres);

        assert_eq!(
            args,
            vec![
                Value::Int(30),
                Value::String("Bob".to_string()),
                Value::Int(1),
                Value::Int(2),
                Value::Float(0.5),
                Value::Float(0.9),
            ]
        );

        // Placeholder numbering follows the same left-to-right order.
        let outer = match rewritten {
            Criterion::Complex(c) => c,
            other => panic!("expected complex criterion, found {other:?}"),
        };
        let inner_left = match outer.left {
            Criterion::Complex(c) => c,
            other => panic!("expected complex criterion, found {other:?}"),
        };
        assert_eq!(placeholder_of(&inner_left.left), "$1");
        assert_eq!(placeholder_of(&inner_left.right), "$2");

        let inner_right = match outer.right {
            Criterion::Complex(c) => c,
            other => panic!("expected complex criterion, found {other:?}"),
        };
        assert_eq!(placeholder_of(&inner_right.left), "($3, $4)");
        match inner_right.right {
            Criterion::Range(r) => {
                assert_eq!(r.start, Operand::Placeholder("$5".to_string()));
                assert_eq!(r.end, Operand::Placeholder("$6".to_string()));
            }
            other => panic!("expected range criterion, found {other:?}"),
        }
    }

    #[test]
    fn test_compilation_is_pure() {
        let criterion = age_gt_30().and(ContainsCriterion::new(
            Ident::new("id"),
            vec![Value::Int(1), Value::Null],
        ));

        let first = parameterize(criterion.clone(), &Sqlite);
        let second = parameterize(criterion, &Sqlite);
        assert_eq!(first, second);
    }

    #[test]
    fn test_already_compiled_leaf_passes_through() {
        let compiled = Criterion::Basic(BasicCriterion {
            left: Ident::new("age"),
            comparator: Comparator::Gt,
            right: Operand::Placeholder("$1".to_string()),
        });
        let (rewritten, args) = parameterize(compiled.clone(), &Postgres);
        assert_eq!(rewritten, compiled);
        assert!(args.is_empty());
    }

    #[test]
    fn test_contains_empty_container() {
        let criterion = ContainsCriterion::new(Ident::new("id"), vec![]);
        let (rewritten, args) = parameterize(criterion, &Postgres);
        assert_eq!(placeholder_of(&rewritten), "()");
        assert!(args.is_empty());
    }
}
