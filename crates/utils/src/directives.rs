use std::collections::HashSet;

use indexmap::IndexMap;
use parser::types::ConstDirective;
use stitchgate_schema::{argument_values, ArgumentError, ArgumentValues, AstNode, Directable, MetaDirective, Schema};
use tracing::instrument;
use value::Name;

use crate::pattern::arguments_match;

/// Directive name to resolved value(s), for the directives used on one element.
pub type DirectiveUseMap = IndexMap<Name, DirectiveValue>;

/// The resolved usages of one directive.
#[derive(Debug, Clone, PartialEq)]
pub enum DirectiveValue {
    /// The arguments of a non-repeatable directive.
    Single(ArgumentValues),
    /// The arguments of every usage of a repeatable directive, in source order.
    Repeated(Vec<ArgumentValues>),
}

impl DirectiveValue {
    #[inline]
    pub fn as_single(&self) -> Option<&ArgumentValues> {
        match self {
            DirectiveValue::Single(values) => Some(values),
            DirectiveValue::Repeated(_) => None,
        }
    }

    #[inline]
    pub fn as_repeated(&self) -> Option<&[ArgumentValues]> {
        match self {
            DirectiveValue::Single(_) => None,
            DirectiveValue::Repeated(values) => Some(values),
        }
    }

    /// Every argument record, whatever the repeatability.
    #[inline]
    pub fn values(&self) -> &[ArgumentValues] {
        match self {
            DirectiveValue::Single(values) => std::slice::from_ref(values),
            DirectiveValue::Repeated(values) => values,
        }
    }
}

/// The primary AST node of `element` followed by its extension nodes.
pub fn all_ast_nodes<D: Directable>(element: &D) -> Vec<&D::Node> {
    element
        .ast_node()
        .into_iter()
        .chain(element.extension_ast_nodes())
        .collect()
}

/// Resolves the usages of `directive` on a single AST node.
///
/// A repeatable directive always yields [`DirectiveValue::Repeated`], empty
/// when the node does not use it. A non-repeatable directive yields the
/// first usage on the node, or `None`.
pub fn get_directive_values(
    directive: &MetaDirective,
    node: &impl AstNode,
) -> Result<Option<DirectiveValue>, ArgumentError> {
    let mut usages = node
        .directives()
        .iter()
        .filter(|usage| usage.node.name.node == directive.name);

    if directive.is_repeatable {
        usages
            .map(|usage| argument_values(directive, &usage.node))
            .collect::<Result<Vec<_>, _>>()
            .map(|values| Some(DirectiveValue::Repeated(values)))
    } else {
        usages
            .next()
            .map(|usage| argument_values(directive, &usage.node))
            .transpose()
            .map(|values| values.map(DirectiveValue::Single))
    }
}

/// Collects the directives used on `element` that `schema` declares.
///
/// Nodes are resolved one at a time. Records of a repeatable directive are
/// appended across the primary and extension nodes; for a non-repeatable
/// directive the last node using it wins. Undeclared directives are skipped.
#[instrument(skip_all, level = "trace")]
pub fn get_directives<D: Directable>(schema: &Schema, element: &D) -> Result<DirectiveUseMap, ArgumentError> {
    let mut result = DirectiveUseMap::new();

    for node in all_ast_nodes(element) {
        let mut resolved = HashSet::new();

        for usage in node.directives() {
            let name = &usage.node.name.node;
            if !resolved.insert(name) {
                continue;
            }
            let Some(directive) = schema.directive(name) else {
                continue;
            };
            let Some(mut value) = get_directive_values(directive, node)? else {
                continue;
            };

            if let DirectiveValue::Repeated(values) = &mut value {
                if let Some(DirectiveValue::Repeated(existing)) = result.get_mut(&directive.name) {
                    existing.append(values);
                    continue;
                }
            }
            result.insert(directive.name.clone(), value);
        }
    }

    Ok(result)
}

/// Whether `element` uses `directive_name` with arguments matching `args`.
///
/// Returns `false` when the schema does not declare the directive. `None`
/// for `args` accepts any usage.
#[instrument(skip(element, schema, args), ret, level = "trace")]
pub fn contains_directive<D: Directable>(
    element: &D,
    schema: &Schema,
    directive_name: &str,
    args: Option<&ArgumentValues>,
) -> Result<bool, ArgumentError> {
    let Some(directive) = schema.directive(directive_name) else {
        return Ok(false);
    };

    for node in all_ast_nodes(element) {
        if !node
            .directives()
            .iter()
            .any(|usage| usage.node.name.node == directive.name)
        {
            continue;
        }
        let Some(value) = get_directive_values(directive, node)? else {
            continue;
        };
        let matched = value
            .values()
            .iter()
            .any(|values| args.map_or(true, |args| arguments_match(values, args)));
        if matched {
            return Ok(true);
        }
    }

    Ok(false)
}

/// Whether one directive usage is a usage of `directive` whose arguments
/// match `args`. The usage is resolved on its own, so repeatability plays
/// no part.
pub fn match_directive(
    usage: &ConstDirective,
    directive: &MetaDirective,
    args: Option<&ArgumentValues>,
) -> Result<bool, ArgumentError> {
    if usage.name.node != directive.name {
        return Ok(false);
    }

    match args {
        None => Ok(true),
        Some(args) => Ok(arguments_match(&argument_values(directive, usage)?, args)),
    }
}
