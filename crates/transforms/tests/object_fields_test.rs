use std::sync::Arc;

use pretty_assertions::assert_eq;
use stitchgate_schema::{MetaField, Schema};
use stitchgate_transforms::{
    FilterObjectFields,
    RemoveFieldDirectives,
    RemoveFieldsWithDirective,
    Transform,
    TransformObjectFields,
    TransformPipeline,
    Transformed,
};

const SDL: &str = r#"
    directive @internal on FIELD_DEFINITION

    type Query {
        a: String
        b: String @deprecated(reason: "old")
        c: String @internal
    }

    enum Role {
        ADMIN
    }
"#;

fn field_names(schema: &Schema, type_name: &str) -> Vec<String> {
    schema
        .get_type(type_name)
        .unwrap()
        .fields
        .keys()
        .map(|name| name.to_string())
        .collect()
}

#[test]
fn test_transform_object_fields_can_replace_and_remove() {
    let schema = Schema::parse(SDL).unwrap();

    let transformed = TransformObjectFields::new(|type_name: &str, field_name: &str, field: &MetaField| {
        assert_eq!(type_name, "Query");
        match field_name {
            "a" => {
                let mut field = field.clone();
                field.description = Some("replaced".to_string());
                Ok(Transformed::Replace(field))
            },
            "c" => Ok(Transformed::Remove),
            _ => Ok(Transformed::Keep),
        }
    })
    .transform_schema(&schema)
    .unwrap();

    assert_eq!(field_names(&transformed, "Query"), vec!["a", "b"]);
    let query = transformed.get_type("Query").unwrap();
    assert_eq!(query.field_by_name("a").unwrap().description.as_deref(), Some("replaced"));
    assert!(Arc::ptr_eq(
        schema.get_type("Query").unwrap().field_by_name("b").unwrap(),
        query.field_by_name("b").unwrap()
    ));
}

#[test]
fn test_filter_object_fields() {
    let schema = Schema::parse(SDL).unwrap();

    let transformed = FilterObjectFields::new(|_type_name: &str, field_name: &str, _field: &MetaField| {
        Ok(field_name != "b")
    })
    .transform_schema(&schema)
    .unwrap();

    assert_eq!(field_names(&transformed, "Query"), vec!["a", "c"]);
    assert!(transformed.get_type("Role").unwrap().enum_values.contains_key("ADMIN"));
}

#[test]
fn test_pipeline_applies_transforms_in_order() {
    let schema = Schema::parse(SDL).unwrap();
    let pipeline = TransformPipeline::new()
        .with(RemoveFieldsWithDirective::new("internal"))
        .with(RemoveFieldDirectives::new("deprecated"));
    assert_eq!(pipeline.len(), 2);

    let transformed = pipeline.transform_schema(&schema).unwrap();

    assert_eq!(field_names(&transformed, "Query"), vec!["a", "b"]);
    assert!(!transformed
        .get_type("Query")
        .unwrap()
        .field_by_name("b")
        .unwrap()
        .deprecation
        .is_deprecated());
}

#[test]
fn test_empty_pipeline_returns_an_equivalent_schema() {
    let schema = Schema::parse(SDL).unwrap();
    let pipeline = TransformPipeline::new();
    assert!(pipeline.is_empty());

    let transformed = pipeline.transform_schema(&schema).unwrap();

    assert_eq!(field_names(&transformed, "Query"), field_names(&schema, "Query"));
}
