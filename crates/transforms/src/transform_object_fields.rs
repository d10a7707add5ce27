use std::sync::Arc;

use indexmap::IndexMap;
use stitchgate_schema::{MetaField, Schema};
use tracing::instrument;

use crate::{Transform, TransformError, Transformed};

/// Rewrites the fields of every object and interface type.
///
/// The callback receives the type name, the field name and the field, and
/// decides whether the field is kept, replaced or removed. Kept fields are
/// carried over as the same `Arc`, and a type whose fields all survive
/// untouched keeps its original field map.
pub struct TransformObjectFields<F> {
    field_transformer: F,
}

impl<F> TransformObjectFields<F>
where
    F: Fn(&str, &str, &MetaField) -> Result<Transformed<MetaField>, TransformError> + Send + Sync,
{
    pub fn new(field_transformer: F) -> Self {
        Self { field_transformer }
    }
}

impl<F> Transform for TransformObjectFields<F>
where
    F: Fn(&str, &str, &MetaField) -> Result<Transformed<MetaField>, TransformError> + Send + Sync,
{
    #[instrument(skip_all, level = "trace")]
    fn transform_schema(&self, schema: &Schema) -> Result<Schema, TransformError> {
        let mut transformed_schema = schema.clone();

        for meta_type in transformed_schema.types.values_mut() {
            if !meta_type.has_fields() {
                continue;
            }

            let mut fields = IndexMap::with_capacity(meta_type.fields.len());
            let mut changed = false;

            for (field_name, field) in &meta_type.fields {
                match (self.field_transformer)(meta_type.name.as_str(), field_name.as_str(), field.as_ref())? {
                    Transformed::Keep => {
                        fields.insert(field_name.clone(), field.clone());
                    },
                    Transformed::Replace(new_field) => {
                        tracing::debug!(type_name = %meta_type.name, field_name = %field_name, "Field replaced");
                        changed = true;
                        fields.insert(new_field.name.clone(), Arc::new(new_field));
                    },
                    Transformed::Remove => {
                        tracing::debug!(type_name = %meta_type.name, field_name = %field_name, "Field removed");
                        changed = true;
                    },
                }
            }

            if changed {
                meta_type.fields = fields;
            }
        }

        Ok(transformed_schema)
    }
}
