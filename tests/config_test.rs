use std::io::Write;

use pretty_assertions::assert_eq;
use stitchgate::{schema::Schema, transforms::Transform, Config, TransformConfig};
use tracing_subscriber::EnvFilter;
use value::ConstValue;

const CONFIG: &str = r#"
[[transforms]]
kind = "remove_fields_with_directive"
directive = "internal"

[[transforms]]
kind = "remove_field_directives"
directive = "deprecated"
args = { reason = "old" }
"#;

const SDL: &str = r#"
    directive @internal on FIELD_DEFINITION

    type Query {
        public: String
        secret: String @internal
        legacy: String @deprecated(reason: "old")
        retired: String @deprecated(reason: "gone")
    }
"#;

#[test]
fn test_parse_config() {
    let config = Config::from_toml_str(CONFIG).unwrap();

    assert_eq!(config.transforms.len(), 2);
    match &config.transforms[1] {
        TransformConfig::RemoveFieldDirectives { directive, args } => {
            assert_eq!(directive, "deprecated");
            assert_eq!(args.get("reason"), Some(&ConstValue::String("old".to_string())));
        },
        other => panic!("unexpected transform {other:?}"),
    }
    match &config.transforms[0] {
        TransformConfig::RemoveFieldsWithDirective { directive, args } => {
            assert_eq!(directive, "internal");
            assert!(args.is_empty());
        },
        other => panic!("unexpected transform {other:?}"),
    }
}

#[test]
fn test_empty_config_has_no_transforms() {
    let config = Config::from_toml_str("").unwrap();
    assert!(config.transforms.is_empty());
    assert!(config.pipeline().is_empty());
}

#[test]
fn test_unknown_transform_kind_is_rejected() {
    let config = r#"
    [[transforms]]
    kind = "rename_types"
    directive = "internal"
    "#;
    assert!(Config::from_toml_str(config).is_err());
}

#[test]
fn test_configured_pipeline_transforms_schema() {
    let config = Config::from_toml_str(CONFIG).unwrap();
    let schema = Schema::parse(SDL).unwrap();

    let transformed = config.pipeline().transform_schema(&schema).unwrap();

    let query = transformed.get_type("Query").unwrap();
    assert_eq!(
        query.fields.keys().map(|name| name.as_str()).collect::<Vec<_>>(),
        vec!["public", "legacy", "retired"]
    );
    assert!(!query.field_by_name("legacy").unwrap().deprecation.is_deprecated());
    assert_eq!(
        query.field_by_name("retired").unwrap().deprecation.reason(),
        Some("gone")
    );
}

#[test]
fn test_float_pattern_matches_integer_literal() {
    let config = Config::from_toml_str(
        r#"
        [[transforms]]
        kind = "remove_fields_with_directive"
        directive = "limit"
        args = { max = 1.0 }
        "#,
    )
    .unwrap();
    let schema = Schema::parse(
        r#"
        directive @limit(max: Float) on FIELD_DEFINITION

        type Query {
            capped: String @limit(max: 1)
            loose: String @limit(max: 2)
        }
    "#,
    )
    .unwrap();

    let transformed = config.pipeline().transform_schema(&schema).unwrap();

    assert_eq!(
        transformed
            .get_type("Query")
            .unwrap()
            .fields
            .keys()
            .map(|name| name.as_str())
            .collect::<Vec<_>>(),
        vec!["loose"]
    );
}

#[test]
fn test_load_config_from_file() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new("info"))
                .unwrap(),
        )
        .with_test_writer()
        .try_init();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CONFIG.as_bytes()).unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.pipeline().len(), 2);
}

#[test]
fn test_missing_config_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.toml");

    let err = Config::from_file(&path).unwrap_err();
    assert!(err.to_string().contains("missing.toml"));
}
