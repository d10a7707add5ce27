use stitchgate_schema::Schema;

use crate::TransformError;

/// A schema-wide rewrite pass. The input schema is never modified; the
/// result is a new schema sharing every element the pass left untouched.
pub trait Transform: Send + Sync {
    fn transform_schema(&self, schema: &Schema) -> Result<Schema, TransformError>;
}

/// Outcome of transforming one schema element.
#[derive(Debug, Clone)]
pub enum Transformed<T> {
    Keep,
    Replace(T),
    Remove,
}

/// Transforms applied one after the other, each to the output of the
/// previous one.
#[derive(Default)]
pub struct TransformPipeline {
    transforms: Vec<Box<dyn Transform>>,
}

impl TransformPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, transform: impl Transform + 'static) -> Self {
        self.transforms.push(Box::new(transform));
        self
    }

    pub fn push(&mut self, transform: Box<dyn Transform>) {
        self.transforms.push(transform);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }
}

impl Transform for TransformPipeline {
    fn transform_schema(&self, schema: &Schema) -> Result<Schema, TransformError> {
        let mut transforms = self.transforms.iter();
        let Some(first) = transforms.next() else {
            return Ok(schema.clone());
        };

        transforms.try_fold(first.transform_schema(schema)?, |schema, transform| {
            transform.transform_schema(&schema)
        })
    }
}
