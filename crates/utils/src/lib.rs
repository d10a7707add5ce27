#![forbid(unsafe_code)]

mod directives;
mod pattern;

pub use directives::{
    all_ast_nodes,
    contains_directive,
    get_directive_values,
    get_directives,
    match_directive,
    DirectiveUseMap,
    DirectiveValue,
};
pub use pattern::{arguments_match, value_matches};
