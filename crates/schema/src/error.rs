use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error(transparent)]
    Parse(#[from] parser::Error),

    #[error("Type '{type_name}' is defined more than once. Use 'extend type' to add to an existing type.")]
    DuplicateType { type_name: String },

    #[error("Directive '@{directive_name}' is defined more than once.")]
    DuplicateDirective { directive_name: String },

    #[error("Schema definition is defined more than once. Use 'extend schema' to add to the existing schema.")]
    DuplicateSchemaDefinition,

    #[error("Cannot extend type '{type_name}' because it is not defined.")]
    UnknownTypeExtension { type_name: String },

    #[error("Cannot extend type '{type_name}' of kind '{kind}' with an extension of kind '{extension_kind}'.")]
    TypeExtensionKindMismatch {
        type_name: String,
        kind: String,
        extension_kind: String,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("Argument '{argument}' of directive '@{directive}' of type '{ty}' is required, but it was not provided.")]
    MissingRequiredArgument {
        directive: String,
        argument: String,
        ty: String,
    },

    #[error("Argument '{argument}' of directive '@{directive}' of non-null type '{ty}' must not be null.")]
    NullForNonNullArgument {
        directive: String,
        argument: String,
        ty: String,
    },

    #[error("Argument '{argument}' of directive '@{directive}' has an invalid value {value} for type '{ty}'.")]
    InvalidValue {
        directive: String,
        argument: String,
        ty: String,
        value: String,
    },
}
