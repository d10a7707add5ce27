use parser::{
    types::{ConstDirective, EnumValueDefinition, FieldDefinition, InputValueDefinition, SchemaDefinition, TypeDefinition},
    Positioned,
};

/// A syntax node that may carry directive usages.
pub trait AstNode {
    fn directives(&self) -> &[Positioned<ConstDirective>];
}

/// A schema element whose directive usages live on its primary AST node and,
/// for the schema itself and named types, on any number of extension nodes.
pub trait Directable {
    type Node: AstNode;

    fn ast_node(&self) -> Option<&Self::Node>;

    #[inline]
    fn extension_ast_nodes(&self) -> &[Self::Node] {
        &[]
    }
}

impl<T: AstNode> AstNode for Positioned<T> {
    #[inline]
    fn directives(&self) -> &[Positioned<ConstDirective>] {
        self.node.directives()
    }
}

macro_rules! impl_ast_node {
    ($($ty:ty),*) => {
        $(
            impl AstNode for $ty {
                #[inline]
                fn directives(&self) -> &[Positioned<ConstDirective>] {
                    &self.directives
                }
            }
        )*
    };
}

impl_ast_node!(
    SchemaDefinition,
    TypeDefinition,
    FieldDefinition,
    InputValueDefinition,
    EnumValueDefinition
);

impl<T: Directable> Directable for &T {
    type Node = T::Node;

    #[inline]
    fn ast_node(&self) -> Option<&Self::Node> {
        (**self).ast_node()
    }

    #[inline]
    fn extension_ast_nodes(&self) -> &[Self::Node] {
        (**self).extension_ast_nodes()
    }
}

impl<T: Directable> Directable for std::sync::Arc<T> {
    type Node = T::Node;

    #[inline]
    fn ast_node(&self) -> Option<&Self::Node> {
        (**self).ast_node()
    }

    #[inline]
    fn extension_ast_nodes(&self) -> &[Self::Node] {
        (**self).extension_ast_nodes()
    }
}
