use indexmap::IndexMap;
use parser::{
    types::{BaseType, ConstDirective, Type},
    Positioned,
};
use value::{ConstValue, Name, Number};

use crate::{ArgumentError, MetaDirective};

/// The coerced arguments of one directive usage, in declaration order.
pub type ArgumentValues = IndexMap<Name, ConstValue>;

/// Resolves the arguments supplied to a directive usage against the
/// directive's declared arguments.
///
/// Omitted arguments take their declared default, coerced like a supplied
/// value. An omitted nullable
/// argument without a default is left out of the result entirely, which is
/// what makes patterns such as `{ reason: null }` distinguishable from `{}`.
/// Arguments the directive does not declare are ignored.
pub fn argument_values(directive: &MetaDirective, usage: &ConstDirective) -> Result<ArgumentValues, ArgumentError> {
    let mut values = ArgumentValues::new();

    for (name, definition) in &directive.arguments {
        let supplied = get_argument(&usage.arguments, name)
            .map(|value| &value.node)
            .or(definition.default_value.as_ref());
        let Some(value) = supplied else {
            if !definition.ty.nullable {
                return Err(ArgumentError::MissingRequiredArgument {
                    directive: directive.name.to_string(),
                    argument: name.to_string(),
                    ty: definition.ty.to_string(),
                });
            }
            continue;
        };

        let coerced = coerce_value(value, &definition.ty).map_err(|invalid| match invalid {
            Invalid::Null => ArgumentError::NullForNonNullArgument {
                directive: directive.name.to_string(),
                argument: name.to_string(),
                ty: definition.ty.to_string(),
            },
            Invalid::Value => ArgumentError::InvalidValue {
                directive: directive.name.to_string(),
                argument: name.to_string(),
                ty: definition.ty.to_string(),
                value: value.to_string(),
            },
        })?;
        values.insert(name.clone(), coerced);
    }

    Ok(values)
}

pub(crate) fn get_argument<'a>(
    arguments: &'a [(Positioned<Name>, Positioned<ConstValue>)],
    name: &str,
) -> Option<&'a Positioned<ConstValue>> {
    arguments
        .iter()
        .find_map(|d| if d.0.node.as_str() == name { Some(&d.1) } else { None })
}

pub(crate) fn get_argument_str<'a>(
    arguments: &'a [(Positioned<Name>, Positioned<ConstValue>)],
    name: &str,
) -> Option<Positioned<&'a str>> {
    get_argument(arguments, name).and_then(|value| match &value.node {
        ConstValue::String(s) => Some(Positioned::new(s.as_str(), value.pos)),
        _ => None,
    })
}

#[derive(Debug, Eq, PartialEq)]
enum Invalid {
    Null,
    Value,
}

fn coerce_value(value: &ConstValue, ty: &Type) -> Result<ConstValue, Invalid> {
    if let ConstValue::Null = value {
        return if ty.nullable { Ok(ConstValue::Null) } else { Err(Invalid::Null) };
    }

    match &ty.base {
        BaseType::List(item_ty) => match value {
            ConstValue::List(items) => items
                .iter()
                .map(|item| coerce_value(item, item_ty))
                .collect::<Result<Vec<_>, _>>()
                .map(ConstValue::List),
            // A single value is accepted where a list is expected.
            _ => coerce_value(value, item_ty).map(|item| ConstValue::List(vec![item])),
        },
        BaseType::Named(type_name) => coerce_named(value, type_name.as_str()),
    }
}

// Enums, input objects and custom scalars are passed through untouched.
fn coerce_named(value: &ConstValue, type_name: &str) -> Result<ConstValue, Invalid> {
    match (type_name, value) {
        ("Int", ConstValue::Number(n)) if n.as_i64().is_some_and(|n| i32::try_from(n).is_ok()) => Ok(value.clone()),
        ("Float", ConstValue::Number(n)) => n
            .as_f64()
            .and_then(Number::from_f64)
            .map(ConstValue::Number)
            .ok_or(Invalid::Value),
        ("String", ConstValue::String(_)) |
        ("Boolean", ConstValue::Boolean(_)) |
        ("ID", ConstValue::String(_)) => Ok(value.clone()),
        ("ID", ConstValue::Number(n)) if n.is_i64() || n.is_u64() => Ok(ConstValue::String(n.to_string())),
        ("Int" | "Float" | "String" | "Boolean" | "ID", _) => Err(Invalid::Value),
        _ => Ok(value.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ty(ty: &str) -> Type {
        Type::new(ty).unwrap()
    }

    #[test]
    fn single_value_is_wrapped_into_a_list() {
        assert_eq!(
            coerce_value(&ConstValue::String("a".to_string()), &ty("[String!]")),
            Ok(ConstValue::List(vec![ConstValue::String("a".to_string())]))
        );
    }

    #[test]
    fn null_list_item_is_rejected_for_non_null_items() {
        let value = ConstValue::List(vec![ConstValue::Null]);
        assert_eq!(coerce_value(&value, &ty("[String!]")), Err(Invalid::Null));
        assert_eq!(coerce_value(&value, &ty("[String]")), Ok(value.clone()));
    }

    #[test]
    fn integer_id_becomes_string() {
        assert_eq!(
            coerce_value(&ConstValue::Number(7.into()), &ty("ID")),
            Ok(ConstValue::String("7".to_string()))
        );
    }

    #[test]
    fn float_is_stored_as_f64() {
        assert_eq!(
            coerce_value(&ConstValue::Number(1.into()), &ty("Float")),
            Ok(ConstValue::Number(Number::from_f64(1.0).unwrap()))
        );
    }

    #[test]
    fn int_out_of_range_is_invalid() {
        assert_eq!(
            coerce_value(&ConstValue::Number(i64::MAX.into()), &ty("Int")),
            Err(Invalid::Value)
        );
    }

    #[test]
    fn custom_scalars_and_enums_pass_through() {
        let value = ConstValue::Enum(Name::new("ADMIN"));
        assert_eq!(coerce_value(&value, &ty("Role!")), Ok(value.clone()));
    }
}
