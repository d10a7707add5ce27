#![forbid(unsafe_code)]

mod error;
mod filter_field_directives;
mod filter_object_fields;
mod remove_field_directives;
mod remove_fields_with_directive;
mod transform;
mod transform_object_fields;

pub use error::TransformError;
pub use filter_field_directives::FilterFieldDirectives;
pub use filter_object_fields::FilterObjectFields;
pub use remove_field_directives::RemoveFieldDirectives;
pub use remove_fields_with_directive::RemoveFieldsWithDirective;
pub use transform::{Transform, TransformPipeline, Transformed};
pub use transform_object_fields::TransformObjectFields;
