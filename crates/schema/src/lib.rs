#![forbid(unsafe_code)]

mod argument;
mod ast;
mod error;
mod schema;

pub use argument::{argument_values, ArgumentValues};
pub use ast::{AstNode, Directable};
pub use error::{ArgumentError, SchemaError};
pub use schema::{
    Deprecation,
    MetaDirective,
    MetaEnumValue,
    MetaField,
    MetaInputValue,
    MetaType,
    Schema,
    TypeKind,
    DEFAULT_DEPRECATION_REASON,
};
