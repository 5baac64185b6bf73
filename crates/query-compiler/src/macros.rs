#[macro_export]
macro_rules! ident {
    ($name:expr) => {
        $crate::ast::common::Ident {
            qualifier: None,
            name: $name.to_string(),
        }
    };
    ($qualifier:expr, $name:expr) => {
        $crate::ast::common::Ident {
            qualifier: Some($qualifier.to_string()),
            name: $name.to_string(),
        }
    };
}
