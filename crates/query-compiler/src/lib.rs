use crate::ast::common::Ident;
use crate::ast::criterion::{Criterion, Operand};
use crate::dialect::Dialect;
use crate::renderer::{Render, Renderer};
use model::core::value::Value;
use tracing::debug;

pub mod ast;
pub mod dialect;
pub mod error;
pub mod macros;
pub mod parameterize;
pub mod renderer;
pub mod version;

pub fn ident(name: &str) -> Ident {
    Ident {
        qualifier: None,
        name: name.to_string(),
    }
}

pub fn value(val: impl Into<Value>) -> Operand {
    Operand::Value(val.into())
}

/// Compiles a criterion tree into SQL text plus the ordered argument list to
/// bind, under the given dialect.
pub fn compile(criterion: Criterion, dialect: &dyn Dialect) -> (String, Vec<Value>) {
    let (rewritten, args) = parameterize::parameterize(criterion, dialect);

    let mut renderer = Renderer::new(dialect);
    rewritten.render(&mut renderer);
    let (sql, leftover) = renderer.finish();
    debug_assert!(leftover.is_empty());

    debug!(
        dialect = %dialect.name(),
        args = args.len(),
        "compiled criterion"
    );
    (sql, args)
}

/// Appends a RETURNING clause to finished SQL text.
pub fn with_returning(sql: &str, returning: Option<&str>) -> String {
    format!("{sql} RETURNING {}", returning.unwrap_or("*"))
}
