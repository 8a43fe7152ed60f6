//! Thin, owned-string aliases over the `graphql-parser` schema AST.
//!
//! We never tokenize or print SDL ourselves; we borrow `graphql-parser`'s
//! types and give them names that read naturally against the rest of this
//! crate.

pub use graphql_parser::schema as s;
pub use graphql_parser::schema::ParseError;
pub use graphql_parser::Pos;

pub type Document = s::Document<'static, String>;
pub type AstDefinition = s::Definition<'static, String>;
pub type TypeDefinition = s::TypeDefinition<'static, String>;
pub type ScalarType = s::ScalarType<'static, String>;
pub type ObjectType = s::ObjectType<'static, String>;
pub type InterfaceType = s::InterfaceType<'static, String>;
pub type UnionType = s::UnionType<'static, String>;
pub type EnumType = s::EnumType<'static, String>;
pub type InputObjectType = s::InputObjectType<'static, String>;
pub type DirectiveDefinition = s::DirectiveDefinition<'static, String>;
pub type Field = s::Field<'static, String>;
pub type InputValue = s::InputValue<'static, String>;
pub type Type = s::Type<'static, String>;
pub type Directive = s::Directive<'static, String>;

/// Parse SDL text into an owned document, detached from the input's lifetime.
///
/// An empty or whitespace/comment-only source is legal SDL and parses to an
/// empty document.
pub fn parse_schema(text: &str) -> Result<Document, ParseError> {
    if is_effectively_empty(text) {
        return Ok(Document {
            definitions: Vec::new(),
        });
    }
    graphql_parser::parse_schema::<String>(text).map(|doc| doc.into_static())
}

fn is_effectively_empty(text: &str) -> bool {
    text.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#')
    })
}

/// Leaf name at the bottom of a (possibly wrapped) type expression.
pub fn named_type(ty: &Type) -> &str {
    match ty {
        Type::NamedType(name) => name,
        Type::ListType(inner) => named_type(inner),
        Type::NonNullType(inner) => named_type(inner),
    }
}
