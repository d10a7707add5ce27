use stitchgate_schema::{ArgumentValues, AstNode, Schema};
use stitchgate_utils::match_directive;
use value::{ConstValue, Name};

const SDL: &str = r#"
    directive @notthis on FIELD_DEFINITION
    directive @customDeprecated(reason: String, also: String, and: String, this: String) on FIELD_DEFINITION
    directive @tag(name: String!) repeatable on FIELD_DEFINITION

    type Query {
        field: String @customDeprecated(reason: "reason", also: "also")
        tagged: String @tag(name: "a") @tag(name: "b")
    }
"#;

fn args(pairs: &[(&str, &str)]) -> ArgumentValues {
    pairs
        .iter()
        .map(|(name, value)| (Name::new(name), ConstValue::String(value.to_string())))
        .collect()
}

#[test]
fn test_matches_a_directive_node_based_on_flexible_criteria() {
    let schema = Schema::parse(SDL).unwrap();
    let field = schema.get_type("Query").unwrap().field_by_name("field").unwrap();
    let usage = &field.ast_node.as_ref().unwrap().directives()[0].node;

    let not_the_directive = schema.directive("notthis").unwrap();
    let custom_deprecated = schema.directive("customDeprecated").unwrap();

    assert!(!match_directive(usage, not_the_directive, Some(&ArgumentValues::new())).unwrap());
    assert!(match_directive(usage, custom_deprecated, Some(&ArgumentValues::new())).unwrap());
    assert!(match_directive(usage, custom_deprecated, Some(&args(&[("reason", "reason")]))).unwrap());
    assert!(match_directive(
        usage,
        custom_deprecated,
        Some(&args(&[("reason", "reason"), ("also", "also")]))
    )
    .unwrap());
    assert!(!match_directive(
        usage,
        custom_deprecated,
        Some(&args(&[("reason", "reason"), ("and", "and")]))
    )
    .unwrap());
    assert!(!match_directive(usage, custom_deprecated, Some(&args(&[("this", "this")]))).unwrap());
}

#[test]
fn test_unspecified_pattern_matches_by_name_only() {
    let schema = Schema::parse(SDL).unwrap();
    let field = schema.get_type("Query").unwrap().field_by_name("field").unwrap();
    let usage = &field.ast_node.as_ref().unwrap().directives()[0].node;

    assert!(match_directive(usage, schema.directive("customDeprecated").unwrap(), None).unwrap());
    assert!(!match_directive(usage, schema.directive("notthis").unwrap(), None).unwrap());
}

#[test]
fn test_repeatable_usages_are_matched_one_at_a_time() {
    let schema = Schema::parse(SDL).unwrap();
    let field = schema.get_type("Query").unwrap().field_by_name("tagged").unwrap();
    let usages = field.ast_node.as_ref().unwrap().directives();
    let tag = schema.directive("tag").unwrap();

    let pattern = args(&[("name", "b")]);
    assert!(!match_directive(&usages[0].node, tag, Some(&pattern)).unwrap());
    assert!(match_directive(&usages[1].node, tag, Some(&pattern)).unwrap());
}
