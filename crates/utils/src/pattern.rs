use stitchgate_schema::ArgumentValues;
use value::{ConstValue, Number};

/// Structural partial equality between an extracted value and a pattern.
///
/// * a list pattern requires a list value at least as long, matched index by
///   index; trailing value items are ignored.
/// * an object pattern requires a non-null value holding every key of the
///   pattern; keys missing from the pattern are unconstrained.
/// * a number pattern matches a number of the same value, so `1` and `1.0`
///   are equal.
/// * any other pattern must equal the value exactly. A `null` pattern matches
///   an explicit `null` argument.
///
/// `None` stands for a missing value (an absent object key or list index)
/// and never matches.
pub fn value_matches(value: Option<&ConstValue>, pattern: &ConstValue) -> bool {
    match pattern {
        ConstValue::List(pattern_items) => match value {
            Some(ConstValue::List(items)) => pattern_items
                .iter()
                .enumerate()
                .all(|(index, pattern_item)| value_matches(items.get(index), pattern_item)),
            _ => false,
        },
        ConstValue::Object(pattern_fields) => match value {
            None | Some(ConstValue::Null) => false,
            Some(value) => pattern_fields
                .iter()
                .all(|(name, pattern_field)| value_matches(object_field(value, name), pattern_field)),
        },
        ConstValue::Number(pattern_number) => match value {
            Some(ConstValue::Number(number)) => numbers_equal(number, pattern_number),
            _ => false,
        },
        _ => value == Some(pattern),
    }
}

fn numbers_equal(a: &Number, b: &Number) -> bool {
    if let (Some(a), Some(b)) = (a.as_i64(), b.as_i64()) {
        return a == b;
    }
    if let (Some(a), Some(b)) = (a.as_u64(), b.as_u64()) {
        return a == b;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// [`value_matches`] for a whole argument record.
pub fn arguments_match(values: &ArgumentValues, pattern: &ArgumentValues) -> bool {
    pattern
        .iter()
        .all(|(name, pattern_value)| value_matches(values.get(name), pattern_value))
}

fn object_field<'a>(value: &'a ConstValue, name: &str) -> Option<&'a ConstValue> {
    match value {
        ConstValue::Object(fields) => fields.get(name),
        _ => None,
    }
}
