use parser::{types::ConstDirective, Positioned};
use stitchgate_schema::{Deprecation, MetaField, Schema};

use crate::{Transform, TransformError, TransformObjectFields, Transformed};

/// Drops the directive usages on object and interface fields for which the
/// filter returns `false`.
///
/// A field keeps its `@deprecated` derived state only while a `@deprecated`
/// usage survives the filter.
pub struct FilterFieldDirectives<F> {
    filter: F,
}

impl<F> FilterFieldDirectives<F>
where
    F: Fn(&Positioned<ConstDirective>) -> Result<bool, TransformError> + Send + Sync,
{
    pub fn new(filter: F) -> Self {
        Self { filter }
    }
}

impl<F> Transform for FilterFieldDirectives<F>
where
    F: Fn(&Positioned<ConstDirective>) -> Result<bool, TransformError> + Send + Sync,
{
    fn transform_schema(&self, schema: &Schema) -> Result<Schema, TransformError> {
        TransformObjectFields::new(|_type_name: &str, _field_name: &str, field: &MetaField| {
            filter_field_directives(field, &self.filter)
        })
        .transform_schema(schema)
    }
}

fn filter_field_directives<F>(field: &MetaField, filter: &F) -> Result<Transformed<MetaField>, TransformError>
where
    F: Fn(&Positioned<ConstDirective>) -> Result<bool, TransformError>,
{
    let Some(ast_node) = &field.ast_node else {
        return Ok(Transformed::Keep);
    };

    let mut keep_directives = Vec::with_capacity(ast_node.node.directives.len());
    for directive in &ast_node.node.directives {
        if filter(directive)? {
            keep_directives.push(directive.clone());
        }
    }

    if keep_directives.len() == ast_node.node.directives.len() {
        return Ok(Transformed::Keep);
    }

    let keeps_deprecated = keep_directives
        .iter()
        .any(|directive| directive.node.name.node.as_str() == "deprecated");

    let mut new_field = field.clone();
    if let Some(ast_node) = &mut new_field.ast_node {
        ast_node.node.directives = keep_directives;
    }
    if new_field.deprecation.is_deprecated() && !keeps_deprecated {
        new_field.deprecation = Deprecation::NoDeprecated;
    }

    Ok(Transformed::Replace(new_field))
}
