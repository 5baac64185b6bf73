pub mod common;
pub mod criterion;
