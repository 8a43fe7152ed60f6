//! The admissible-definition tagged variant: a re-tagging of the AST's
//! definition kinds, narrowed to the seven kinds this crate ever keeps.
//! Schema definitions, operations, fragments, and type extensions are
//! dropped at the border, before anything in `resolver` or `closure` ever
//! sees them.

use crate::ast::{
    self, AstDefinition, Directive, DirectiveDefinition, EnumType, Field, InputObjectType,
    InputValue, InterfaceType, ObjectType, ScalarType, Type, UnionType,
};

/// Root operation type names, merged field-wise across files.
pub const ROOT_OPERATION_TYPES: [&str; 3] = ["Query", "Mutation", "Subscription"];

/// Scalar names the schema language defines implicitly.
pub const BUILTIN_SCALARS: [&str; 5] = ["String", "Float", "Int", "Boolean", "ID"];

/// Directive names the schema language defines implicitly.
pub const BUILTIN_DIRECTIVES: [&str; 3] = ["deprecated", "skip", "include"];

pub fn is_root_operation_type(name: &str) -> bool {
    ROOT_OPERATION_TYPES.contains(&name)
}

pub fn is_builtin_scalar(name: &str) -> bool {
    BUILTIN_SCALARS.contains(&name)
}

pub fn is_builtin_directive(name: &str) -> bool {
    BUILTIN_DIRECTIVES.contains(&name)
}

/// One of the seven kinds this crate treats as admissible.
#[derive(Clone, Debug, PartialEq)]
pub enum Definition {
    Scalar(ScalarType),
    Object(ObjectType),
    Interface(InterfaceType),
    Enum(EnumType),
    Union(UnionType),
    InputObject(InputObjectType),
    Directive(DirectiveDefinition),
}

impl Definition {
    /// Filter an AST definition down to an admissible one, dropping schema
    /// definitions, type extensions, and anything else out of scope.
    pub fn from_ast(def: &AstDefinition) -> Option<Definition> {
        match def {
            AstDefinition::TypeDefinition(ast::s::TypeDefinition::Scalar(t)) => {
                Some(Definition::Scalar(t.clone()))
            }
            AstDefinition::TypeDefinition(ast::s::TypeDefinition::Object(t)) => {
                Some(Definition::Object(t.clone()))
            }
            AstDefinition::TypeDefinition(ast::s::TypeDefinition::Interface(t)) => {
                Some(Definition::Interface(t.clone()))
            }
            AstDefinition::TypeDefinition(ast::s::TypeDefinition::Enum(t)) => {
                Some(Definition::Enum(t.clone()))
            }
            AstDefinition::TypeDefinition(ast::s::TypeDefinition::Union(t)) => {
                Some(Definition::Union(t.clone()))
            }
            AstDefinition::TypeDefinition(ast::s::TypeDefinition::InputObject(t)) => {
                Some(Definition::InputObject(t.clone()))
            }
            AstDefinition::DirectiveDefinition(d) => Some(Definition::Directive(d.clone())),
            AstDefinition::SchemaDefinition(_) | AstDefinition::TypeExtension(_) => None,
        }
    }

    pub fn into_ast(self) -> AstDefinition {
        match self {
            Definition::Scalar(t) => {
                AstDefinition::TypeDefinition(ast::s::TypeDefinition::Scalar(t))
            }
            Definition::Object(t) => {
                AstDefinition::TypeDefinition(ast::s::TypeDefinition::Object(t))
            }
            Definition::Interface(t) => {
                AstDefinition::TypeDefinition(ast::s::TypeDefinition::Interface(t))
            }
            Definition::Enum(t) => AstDefinition::TypeDefinition(ast::s::TypeDefinition::Enum(t)),
            Definition::Union(t) => {
                AstDefinition::TypeDefinition(ast::s::TypeDefinition::Union(t))
            }
            Definition::InputObject(t) => {
                AstDefinition::TypeDefinition(ast::s::TypeDefinition::InputObject(t))
            }
            Definition::Directive(d) => AstDefinition::DirectiveDefinition(d),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Definition::Scalar(t) => &t.name,
            Definition::Object(t) => &t.name,
            Definition::Interface(t) => &t.name,
            Definition::Enum(t) => &t.name,
            Definition::Union(t) => &t.name,
            Definition::InputObject(t) => &t.name,
            Definition::Directive(d) => &d.name,
        }
    }

    /// Object/Interface field list, the only kinds a dotted field-selector
    /// import can restrict.
    pub fn fields(&self) -> Option<&Vec<Field>> {
        match self {
            Definition::Object(t) => Some(&t.fields),
            Definition::Interface(t) => Some(&t.fields),
            _ => None,
        }
    }

    pub fn fields_mut(&mut self) -> Option<&mut Vec<Field>> {
        match self {
            Definition::Object(t) => Some(&mut t.fields),
            Definition::Interface(t) => Some(&mut t.fields),
            _ => None,
        }
    }

    pub fn implements_interfaces(&self) -> Option<&Vec<String>> {
        match self {
            Definition::Object(t) => Some(&t.implements_interfaces),
            _ => None,
        }
    }

    pub fn union_members(&self) -> Option<&Vec<String>> {
        match self {
            Definition::Union(t) => Some(&t.types),
            _ => None,
        }
    }

    /// Every directive application the definition (or anything it directly
    /// owns - fields, arguments, enum values) carries. Used by the closure
    /// engine to pull in directive definitions.
    pub fn directive_applications(&self) -> Vec<&Directive> {
        let mut out = Vec::new();
        match self {
            Definition::Scalar(t) => out.extend(t.directives.iter()),
            Definition::Union(t) => out.extend(t.directives.iter()),
            Definition::Enum(t) => {
                out.extend(t.directives.iter());
                for v in &t.values {
                    out.extend(v.directives.iter());
                }
            }
            Definition::InputObject(t) => {
                out.extend(t.directives.iter());
                for f in &t.fields {
                    out.extend(f.directives.iter());
                }
            }
            Definition::Object(t) => {
                out.extend(t.directives.iter());
                for f in &t.fields {
                    out.extend(f.directives.iter());
                    for a in &f.arguments {
                        out.extend(a.directives.iter());
                    }
                }
            }
            Definition::Interface(t) => {
                out.extend(t.directives.iter());
                for f in &t.fields {
                    out.extend(f.directives.iter());
                    for a in &f.arguments {
                        out.extend(a.directives.iter());
                    }
                }
            }
            Definition::Directive(_) => {}
        }
        out
    }

    pub fn directive_arguments(&self) -> Option<&Vec<InputValue>> {
        match self {
            Definition::Directive(d) => Some(&d.arguments),
            _ => None,
        }
    }
}

pub fn leaf_type_name(ty: &Type) -> &str {
    ast::named_type(ty)
}
