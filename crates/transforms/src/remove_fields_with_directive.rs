use stitchgate_schema::{ArgumentValues, MetaField, Schema};
use stitchgate_utils::contains_directive;
use tracing::instrument;

use crate::{FilterObjectFields, Transform, TransformError};

/// Removes every object and interface field that uses a directive whose
/// arguments match the pattern given to [`with_args`](Self::with_args).
#[derive(Debug, Clone)]
pub struct RemoveFieldsWithDirective {
    directive_name: String,
    args: ArgumentValues,
}

impl RemoveFieldsWithDirective {
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

impl Transform for RemoveFieldsWithDirective {
    #[instrument(skip_all, fields(directive = %self.directive_name), level = "trace")]
    fn transform_schema(&self, schema: &Schema) -> Result<Schema, TransformError> {
        FilterObjectFields::new(|_type_name: &str, _field_name: &str, field: &MetaField| {
            Ok(!contains_directive(field, schema, &self.directive_name, Some(&self.args))?)
        })
        .transform_schema(schema)
    }
}
