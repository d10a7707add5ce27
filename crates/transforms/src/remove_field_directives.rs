use parser::{types::ConstDirective, Positioned};
use stitchgate_schema::{ArgumentValues, Schema};
use stitchgate_utils::match_directive;
use tracing::instrument;

use crate::{FilterFieldDirectives, Transform, TransformError};

/// Strips the usages of one directive off object and interface fields.
///
/// Only usages whose arguments match the pattern given to
/// [`with_args`](Self::with_args) are stripped; other directives on the field
/// are left alone. A directive the schema does not declare makes this a
/// no-op.
#[derive(Debug, Clone)]
pub struct RemoveFieldDirectives {
    directive_name: String,
    args: ArgumentValues,
}

impl RemoveFieldDirectives {
    pub fn new(directive_name: impl Into<String>) -> Self {
        Self {
            directive_name: directive_name.into(),
            args: ArgumentValues::new(),
        }
    }

    pub fn with_args(mut self, args: ArgumentValues) -> Self {
        self.args = args;
        self
    }
}

impl Transform for RemoveFieldDirectives {
    #[instrument(skip_all, fields(directive = %self.directive_name), level = "trace")]
    fn transform_schema(&self, schema: &Schema) -> Result<Schema, TransformError> {
        let Some(directive) = schema.directive(&self.directive_name) else {
            tracing::trace!("Directive is not declared, schema left unchanged");
            return Ok(schema.clone());
        };

        FilterFieldDirectives::new(|usage: &Positioned<ConstDirective>| {
            Ok(!match_directive(&usage.node, directive, Some(&self.args))?)
        })
        .transform_schema(schema)
    }
}
