use stitchgate_schema::{MetaField, Schema};

use crate::{Transform, TransformError, TransformObjectFields, Transformed};

/// Keeps the object and interface fields for which the filter returns `true`.
pub struct FilterObjectFields<F> {
    filter: F,
}

impl<F> FilterObjectFields<F>
where
    F: Fn(&str, &str, &MetaField) -> Result<bool, TransformError> + Send + Sync,
{
    pub fn new(filter: F) -> Self {
        Self { filter }
    }
}

impl<F> Transform for FilterObjectFields<F>
where
    F: Fn(&str, &str, &MetaField) -> Result<bool, TransformError> + Send + Sync,
{
    fn transform_schema(&self, schema: &Schema) -> Result<Schema, TransformError> {
        TransformObjectFields::new(|type_name: &str, field_name: &str, field: &MetaField| {
            if (self.filter)(type_name, field_name, field)? {
                Ok(Transformed::Keep)
            } else {
                Ok(Transformed::Remove)
            }
        })
        .transform_schema(schema)
    }
}
