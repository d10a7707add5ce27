use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};
use parser::{
    types::{
        self,
        ConstDirective,
        DirectiveDefinition,
        DirectiveLocation,
        EnumType,
        EnumValueDefinition,
        FieldDefinition,
        InputObjectType,
        InputValueDefinition,
        InterfaceType,
        ObjectType,
        SchemaDefinition,
        ServiceDocument,
        Type,
        TypeDefinition,
        TypeSystemDefinition,
        UnionType,
    },
    Positioned,
};
use tracing::instrument;
use value::{ConstValue, Name};

use crate::{argument::get_argument_str, ast::Directable, SchemaError};

/// Reason reported for `@deprecated` usages that do not supply one.
pub const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Deprecation {
    NoDeprecated,
    Deprecated { reason: Option<String> },
}

impl Deprecation {
    #[inline]
    pub fn is_deprecated(&self) -> bool {
        matches!(self, Deprecation::Deprecated { .. })
    }

    #[inline]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Deprecation::NoDeprecated => None,
            Deprecation::Deprecated { reason } => reason.as_deref(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MetaField {
    pub description: Option<String>,
    pub name: Name,
    pub arguments: IndexMap<Name, MetaInputValue>,
    pub ty: Type,
    /// Derived from the `@deprecated` usage on `ast_node`.
    pub deprecation: Deprecation,
    pub ast_node: Option<Positioned<FieldDefinition>>,
}

#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
}

impl TypeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Scalar => "SCALAR",
            TypeKind::Object => "OBJECT",
            TypeKind::Interface => "INTERFACE",
            TypeKind::Union => "UNION",
            TypeKind::Enum => "ENUM",
            TypeKind::InputObject => "INPUT_OBJECT",
        }
    }
}

impl From<&types::TypeKind> for TypeKind {
    fn from(kind: &types::TypeKind) -> Self {
        match kind {
            types::TypeKind::Scalar => TypeKind::Scalar,
            types::TypeKind::Object(_) => TypeKind::Object,
            types::TypeKind::Interface(_) => TypeKind::Interface,
            types::TypeKind::Union(_) => TypeKind::Union,
            types::TypeKind::Enum(_) => TypeKind::Enum,
            types::TypeKind::InputObject(_) => TypeKind::InputObject,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MetaEnumValue {
    pub description: Option<String>,
    pub value: Name,
    pub deprecation: Deprecation,
    pub ast_node: Option<Positioned<EnumValueDefinition>>,
}

#[derive(Debug, Clone)]
pub struct MetaInputValue {
    pub description: Option<String>,
    pub name: Name,
    pub ty: Type,
    pub default_value: Option<ConstValue>,
    pub ast_node: Option<Positioned<InputValueDefinition>>,
}

#[derive(Debug, Clone)]
pub struct MetaType {
    pub description: Option<String>,
    pub name: Name,
    pub kind: TypeKind,

    pub implements: IndexSet<Name>,
    /// Fields are shared between a schema and the schemas transformed from it,
    /// so an untouched field stays pointer-identical across transforms.
    pub fields: IndexMap<Name, Arc<MetaField>>,
    pub possible_types: IndexSet<Name>,
    pub enum_values: IndexMap<Name, MetaEnumValue>,
    pub input_fields: IndexMap<Name, MetaInputValue>,

    pub ast_node: Option<Positioned<TypeDefinition>>,
    pub extension_ast_nodes: Vec<Positioned<TypeDefinition>>,
}

impl MetaType {
    #[inline]
    pub fn field_by_name(&self, name: &str) -> Option<&Arc<MetaField>> {
        self.fields.get(name)
    }

    /// Object and interface types, the types that own output fields.
    #[inline]
    pub fn has_fields(&self) -> bool {
        matches!(self.kind, TypeKind::Object | TypeKind::Interface)
    }
}

#[derive(Debug, Clone)]
pub struct MetaDirective {
    pub name: Name,
    pub description: Option<String>,
    pub locations: Vec<DirectiveLocation>,
    pub arguments: IndexMap<Name, MetaInputValue>,
    pub is_repeatable: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Schema {
    pub query_type: Option<Name>,
    pub mutation_type: Option<Name>,
    pub subscription_type: Option<Name>,
    pub types: IndexMap<Name, MetaType>,
    pub directives: IndexMap<Name, MetaDirective>,

    pub ast_node: Option<Positioned<SchemaDefinition>>,
    pub extension_ast_nodes: Vec<Positioned<SchemaDefinition>>,
}

impl Schema {
    #[instrument(err(Debug), skip(document), level = "trace")]
    pub fn parse(document: &str) -> Result<Schema, SchemaError> {
        Self::new(parser::parse_schema(document)?)
    }

    pub fn new(document: ServiceDocument) -> Result<Schema, SchemaError> {
        let mut schema = Schema::default();
        let mut type_extensions = Vec::new();

        for definition in document.definitions {
            match definition {
                TypeSystemDefinition::Schema(schema_definition) => {
                    if schema_definition.node.extend {
                        schema.extension_ast_nodes.push(schema_definition);
                    } else if schema.ast_node.is_some() {
                        return Err(SchemaError::DuplicateSchemaDefinition);
                    } else {
                        schema.ast_node = Some(schema_definition);
                    }
                },
                TypeSystemDefinition::Type(type_definition) => {
                    // Extensions are applied once every definition is known, so
                    // they may appear before the type they extend.
                    if type_definition.node.extend {
                        type_extensions.push(type_definition);
                        continue;
                    }
                    let name = type_definition.node.name.node.clone();
                    if schema.types.contains_key(&name) {
                        return Err(SchemaError::DuplicateType {
                            type_name: name.to_string(),
                        });
                    }
                    schema.types.insert(name, convert_type_definition(type_definition));
                },
                TypeSystemDefinition::Directive(directive_definition) => {
                    let name = directive_definition.node.name.node.clone();
                    if schema.directives.contains_key(&name) {
                        return Err(SchemaError::DuplicateDirective {
                            directive_name: name.to_string(),
                        });
                    }
                    schema
                        .directives
                        .insert(name, convert_directive_definition(directive_definition.node));
                },
            }
        }

        add_builtins(&mut schema)?;
        for extension in type_extensions {
            extend_type(&mut schema, extension)?;
        }

        convert_schema_definitions(&mut schema);
        finish_schema(&mut schema);
        Ok(schema)
    }

    #[inline]
    pub fn query_type(&self) -> &str {
        self.query_type.as_ref().map(|name| name.as_str()).unwrap_or("Query")
    }

    #[inline]
    pub fn mutation_type(&self) -> Option<&str> {
        self.mutation_type.as_ref().map(|name| name.as_str())
    }

    #[inline]
    pub fn subscription_type(&self) -> Option<&str> {
        self.subscription_type.as_ref().map(|name| name.as_str())
    }

    #[inline]
    pub fn get_type(&self, name: &str) -> Option<&MetaType> {
        self.types.get(name)
    }

    /// Every directive declared by the schema, built-in directives included.
    #[inline]
    pub fn directives(&self) -> impl Iterator<Item = &MetaDirective> {
        self.directives.values()
    }

    #[inline]
    pub fn directive(&self, name: &str) -> Option<&MetaDirective> {
        self.directives.get(name)
    }
}

impl Directable for Schema {
    type Node = Positioned<SchemaDefinition>;

    fn ast_node(&self) -> Option<&Self::Node> {
        self.ast_node.as_ref()
    }

    fn extension_ast_nodes(&self) -> &[Self::Node] {
        &self.extension_ast_nodes
    }
}

impl Directable for MetaType {
    type Node = Positioned<TypeDefinition>;

    fn ast_node(&self) -> Option<&Self::Node> {
        self.ast_node.as_ref()
    }

    fn extension_ast_nodes(&self) -> &[Self::Node] {
        &self.extension_ast_nodes
    }
}

impl Directable for MetaField {
    type Node = Positioned<FieldDefinition>;

    fn ast_node(&self) -> Option<&Self::Node> {
        self.ast_node.as_ref()
    }
}

impl Directable for MetaEnumValue {
    type Node = Positioned<EnumValueDefinition>;

    fn ast_node(&self) -> Option<&Self::Node> {
        self.ast_node.as_ref()
    }
}

impl Directable for MetaInputValue {
    type Node = Positioned<InputValueDefinition>;

    fn ast_node(&self) -> Option<&Self::Node> {
        self.ast_node.as_ref()
    }
}

// Root operation types come from `schema { .. }` and its extensions; without
// a schema definition the conventional root type names are used.
fn convert_schema_definitions(schema: &mut Schema) {
    let schema_definitions = schema
        .ast_node
        .iter()
        .chain(schema.extension_ast_nodes.iter())
        .map(|definition| &definition.node);

    let mut query_type = None;
    let mut mutation_type = None;
    let mut subscription_type = None;
    for definition in schema_definitions {
        if let Some(query) = &definition.query {
            query_type = Some(query.node.clone());
        }
        if let Some(mutation) = &definition.mutation {
            mutation_type = Some(mutation.node.clone());
        }
        if let Some(subscription) = &definition.subscription {
            subscription_type = Some(subscription.node.clone());
        }
    }

    let root_type = |name: Option<Name>, default: &str| {
        name.or_else(|| {
            if schema.ast_node.is_none() && schema.types.contains_key(default) {
                Some(Name::new(default))
            } else {
                None
            }
        })
    };
    let query_type = root_type(query_type, "Query");
    let mutation_type = root_type(mutation_type, "Mutation");
    let subscription_type = root_type(subscription_type, "Subscription");

    schema.query_type = query_type;
    schema.mutation_type = mutation_type;
    schema.subscription_type = subscription_type;
}

fn convert_type_definition(definition: Positioned<TypeDefinition>) -> MetaType {
    let mut meta_type = MetaType {
        description: definition.node.description.as_ref().map(|description| description.node.clone()),
        name: definition.node.name.node.clone(),
        kind: TypeKind::from(&definition.node.kind),
        implements: Default::default(),
        fields: Default::default(),
        possible_types: Default::default(),
        enum_values: Default::default(),
        input_fields: Default::default(),
        ast_node: None,
        extension_ast_nodes: Vec::new(),
    };
    merge_type_kind(&mut meta_type, definition.node.kind.clone());
    meta_type.ast_node = Some(definition);
    meta_type
}

fn extend_type(schema: &mut Schema, extension: Positioned<TypeDefinition>) -> Result<(), SchemaError> {
    let type_name = &extension.node.name.node;
    let Some(meta_type) = schema.types.get_mut(type_name) else {
        return Err(SchemaError::UnknownTypeExtension {
            type_name: type_name.to_string(),
        });
    };

    let extension_kind = TypeKind::from(&extension.node.kind);
    if extension_kind != meta_type.kind {
        return Err(SchemaError::TypeExtensionKindMismatch {
            type_name: type_name.to_string(),
            kind: meta_type.kind.as_str().to_string(),
            extension_kind: extension_kind.as_str().to_string(),
        });
    }

    merge_type_kind(meta_type, extension.node.kind.clone());
    meta_type.extension_ast_nodes.push(extension);
    Ok(())
}

fn merge_type_kind(meta_type: &mut MetaType, kind: types::TypeKind) {
    match kind {
        types::TypeKind::Scalar => {},
        types::TypeKind::Object(ObjectType { implements, fields }) |
        types::TypeKind::Interface(InterfaceType { implements, fields }) => {
            meta_type
                .implements
                .extend(implements.into_iter().map(|implement| implement.node));
            meta_type.fields.extend(
                fields
                    .into_iter()
                    .map(|field| (field.node.name.node.clone(), Arc::new(convert_field_definition(field)))),
            );
        },
        types::TypeKind::Union(UnionType { members }) => {
            meta_type
                .possible_types
                .extend(members.into_iter().map(|name| name.node));
        },
        types::TypeKind::Enum(EnumType { values }) => {
            meta_type.enum_values.extend(values.into_iter().map(|value| {
                (value.node.value.node.clone(), MetaEnumValue {
                    description: value.node.description.as_ref().map(|description| description.node.clone()),
                    value: value.node.value.node.clone(),
                    deprecation: get_deprecated(&value.node.directives),
                    ast_node: Some(value),
                })
            }));
        },
        types::TypeKind::InputObject(InputObjectType { fields }) => {
            meta_type.input_fields.extend(
                fields
                    .into_iter()
                    .map(|field| (field.node.name.node.clone(), convert_input_value_definition(field))),
            );
        },
    }
}

fn convert_field_definition(definition: Positioned<FieldDefinition>) -> MetaField {
    let field = &definition.node;
    MetaField {
        description: field.description.as_ref().map(|description| description.node.clone()),
        name: field.name.node.clone(),
        arguments: field
            .arguments
            .iter()
            .map(|arg| (arg.node.name.node.clone(), convert_input_value_definition(arg.clone())))
            .collect(),
        ty: field.ty.node.clone(),
        deprecation: get_deprecated(&field.directives),
        ast_node: Some(definition),
    }
}

fn convert_input_value_definition(arg: Positioned<InputValueDefinition>) -> MetaInputValue {
    MetaInputValue {
        description: arg.node.description.as_ref().map(|description| description.node.clone()),
        name: arg.node.name.node.clone(),
        ty: arg.node.ty.node.clone(),
        default_value: arg.node.default_value.as_ref().map(|default_value| default_value.node.clone()),
        ast_node: Some(arg),
    }
}

fn convert_directive_definition(directive_definition: DirectiveDefinition) -> MetaDirective {
    MetaDirective {
        name: directive_definition.name.node,
        description: directive_definition
            .description
            .map(|directive_definition| directive_definition.node),
        locations: directive_definition
            .locations
            .into_iter()
            .map(|location| location.node)
            .collect(),
        arguments: directive_definition
            .arguments
            .into_iter()
            .map(|arg| (arg.node.name.node.clone(), convert_input_value_definition(arg)))
            .collect(),
        is_repeatable: directive_definition.is_repeatable,
    }
}

fn get_deprecated(directives: &[Positioned<ConstDirective>]) -> Deprecation {
    directives
        .iter()
        .find(|directive| directive.node.name.node.as_str() == "deprecated")
        .map(|directive| Deprecation::Deprecated {
            reason: Some(
                get_argument_str(&directive.node.arguments, "reason")
                    .map(|reason| reason.node)
                    .unwrap_or(DEFAULT_DEPRECATION_REASON)
                    .to_string(),
            ),
        })
        .unwrap_or(Deprecation::NoDeprecated)
}

// Built-in scalars and directives are only added when the document does not
// declare them itself.
fn add_builtins(schema: &mut Schema) -> Result<(), SchemaError> {
    for definition in parser::parse_schema(include_str!("builtin.graphql"))?.definitions {
        match definition {
            TypeSystemDefinition::Type(type_definition) => {
                if schema.types.contains_key(&type_definition.node.name.node) {
                    continue;
                }
                let mut meta_type = convert_type_definition(type_definition);
                meta_type.ast_node = None;
                schema.types.insert(meta_type.name.clone(), meta_type);
            },
            TypeSystemDefinition::Directive(directive_definition) => {
                if schema.directives.contains_key(&directive_definition.node.name.node) {
                    continue;
                }
                schema.directives.insert(
                    directive_definition.node.name.node.clone(),
                    convert_directive_definition(directive_definition.node),
                );
            },
            TypeSystemDefinition::Schema(_) => {},
        }
    }

    Ok(())
}

fn finish_schema(schema: &mut Schema) {
    let mut possible_types: IndexMap<Name, IndexSet<Name>> = Default::default();
    for ty in schema.types.values() {
        if ty.kind == TypeKind::Object {
            for implement in &ty.implements {
                possible_types
                    .entry(implement.clone())
                    .or_default()
                    .insert(ty.name.clone());
            }
        }
    }
    for (name, types) in possible_types {
        if let Some(ty) = schema.types.get_mut(&name) {
            if ty.kind == TypeKind::Interface {
                ty.possible_types = types;
            }
        }
    }
}
