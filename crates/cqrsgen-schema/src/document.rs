//! Schema document model
//!
//! A [`SchemaDocument`] is the resolved form of an SDL file: every named type in
//! declaration order plus the designated operation roots. Type references are an
//! explicit two-case union, a wrapper around another reference or a named leaf:
//!
//! ```text
//! [ID!]!  =  Wrapped(NonNull, Wrapped(List, Wrapped(NonNull, Named("ID"))))
//! ```

use crate::error::{SchemaError, SchemaResult};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

pub const ID: &str = "ID";
pub const BOOLEAN: &str = "Boolean";
pub const FLOAT: &str = "Float";
pub const INT: &str = "Int";
pub const STRING: &str = "String";

/// Scalars every schema has without declaring them.
pub const BUILTIN_SCALARS: [&str; 5] = [ID, BOOLEAN, FLOAT, INT, STRING];

/// Type modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wrapper {
    NonNull,
    List,
}

/// A reference to a type, possibly wrapped in non-null and list modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeReference {
    Wrapped(Wrapper, Box<TypeReference>),
    Named(String),
}

impl TypeReference {
    pub fn named(name: impl Into<String>) -> Self {
        TypeReference::Named(name.into())
    }

    pub fn non_null(inner: TypeReference) -> Self {
        TypeReference::Wrapped(Wrapper::NonNull, Box::new(inner))
    }

    pub fn list(inner: TypeReference) -> Self {
        TypeReference::Wrapped(Wrapper::List, Box::new(inner))
    }

    /// The named type at the bottom of all wrappers.
    pub fn leaf(&self) -> &str {
        let mut current = self;
        loop {
            match current {
                TypeReference::Wrapped(_, inner) => current = inner,
                TypeReference::Named(name) => return name,
            }
        }
    }

    /// The name `T` if this reference is exactly `T!`.
    pub fn non_null_name(&self) -> Option<&str> {
        match self {
            TypeReference::Wrapped(Wrapper::NonNull, inner) => match inner.as_ref() {
                TypeReference::Named(name) => Some(name),
                TypeReference::Wrapped(..) => None,
            },
            _ => None,
        }
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, TypeReference::Wrapped(Wrapper::NonNull, _))
    }
}

impl fmt::Display for TypeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeReference::Named(name) => f.write_str(name),
            TypeReference::Wrapped(Wrapper::NonNull, inner) => write!(f, "{inner}!"),
            TypeReference::Wrapped(Wrapper::List, inner) => write!(f, "[{inner}]"),
        }
    }
}

/// An argument or input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputValue {
    pub name: String,
    pub ty: TypeReference,
    /// Source text of the default value, if any
    pub default_value: Option<String>,
}

impl InputValue {
    pub fn new(name: impl Into<String>, ty: TypeReference) -> Self {
        Self {
            name: name.into(),
            ty,
            default_value: None,
        }
    }
}

/// A field of an object or interface type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefinition {
    pub name: String,
    pub arguments: Vec<InputValue>,
    pub ty: TypeReference,
}

impl FieldDefinition {
    pub fn new(name: impl Into<String>, ty: TypeReference) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
            ty,
        }
    }

    pub fn with_argument(mut self, argument: InputValue) -> Self {
        self.arguments.push(argument);
        self
    }
}

/// Kind of a named type definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Object,
    Interface,
    InputObject,
    Scalar,
    Enum,
    Union,
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeKind::Object => write!(f, "type"),
            TypeKind::Interface => write!(f, "interface"),
            TypeKind::InputObject => write!(f, "input"),
            TypeKind::Scalar => write!(f, "scalar"),
            TypeKind::Enum => write!(f, "enum"),
            TypeKind::Union => write!(f, "union"),
        }
    }
}

/// A named type declared in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDefinition {
    pub name: String,
    pub kind: TypeKind,
    /// Fields of object and interface types
    pub fields: Vec<FieldDefinition>,
    /// Fields of input object types
    pub input_fields: Vec<InputValue>,
    /// Implemented interfaces of object types, members of unions
    pub members: Vec<String>,
    /// Values of enum types
    pub values: Vec<String>,
}

impl TypeDefinition {
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            fields: Vec::new(),
            input_fields: Vec::new(),
            members: Vec::new(),
            values: Vec::new(),
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|field| field.name == name)
    }
}

/// A parsed and resolved schema.
#[derive(Debug, Clone, Default)]
pub struct SchemaDocument {
    types: Vec<TypeDefinition>,
    index: HashMap<String, usize>,
    query: Option<String>,
    mutation: Option<String>,
}

impl SchemaDocument {
    /// Parse and resolve SDL text.
    pub fn parse(source: &str) -> SchemaResult<Self> {
        let parsed = crate::parser::parse(source)?;
        let mut document = Self::default();
        for definition in parsed.types {
            document.insert(definition)?;
        }
        if parsed.has_schema_block {
            document.query = parsed.query;
            document.mutation = parsed.mutation;
        } else {
            document.query = document.contains("Query").then(|| "Query".to_string());
            document.mutation = document.contains("Mutation").then(|| "Mutation".to_string());
        }
        document.resolve()?;
        Ok(document)
    }

    /// Read and parse an SDL file.
    pub fn from_file(path: &Path) -> SchemaResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|source| SchemaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&source)
    }

    fn insert(&mut self, definition: TypeDefinition) -> SchemaResult<()> {
        if self.is_defined(&definition.name) {
            return Err(SchemaError::DuplicateType(definition.name));
        }
        self.index.insert(definition.name.clone(), self.types.len());
        self.types.push(definition);
        Ok(())
    }

    fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Whether `name` is declared or a built-in scalar.
    pub fn is_defined(&self, name: &str) -> bool {
        self.contains(name) || BUILTIN_SCALARS.contains(&name)
    }

    fn resolve(&self) -> SchemaResult<()> {
        for root in [&self.query, &self.mutation].into_iter().flatten() {
            if self.get(root).map(|ty| ty.kind) != Some(TypeKind::Object) {
                return Err(SchemaError::UnknownRootType(root.clone()));
            }
        }
        for ty in &self.types {
            for member in &ty.members {
                self.require(member, &ty.name)?;
            }
            for field in &ty.fields {
                let owner = format!("{}.{}", ty.name, field.name);
                self.require(field.ty.leaf(), &owner)?;
                for argument in &field.arguments {
                    self.require(argument.ty.leaf(), &format!("{owner}({})", argument.name))?;
                }
            }
            for input in &ty.input_fields {
                self.require(input.ty.leaf(), &format!("{}.{}", ty.name, input.name))?;
            }
        }
        Ok(())
    }

    fn require(&self, name: &str, referenced_by: &str) -> SchemaResult<()> {
        if self.is_defined(name) {
            Ok(())
        } else {
            Err(SchemaError::UnknownType {
                name: name.to_string(),
                referenced_by: referenced_by.to_string(),
            })
        }
    }

    /// All declared types in declaration order.
    pub fn types(&self) -> impl Iterator<Item = &TypeDefinition> {
        self.types.iter()
    }

    pub fn get(&self, name: &str) -> Option<&TypeDefinition> {
        self.index.get(name).and_then(|&position| self.types.get(position))
    }

    pub fn query_type(&self) -> Option<&TypeDefinition> {
        self.query.as_deref().and_then(|name| self.get(name))
    }

    pub fn mutation_type(&self) -> Option<&TypeDefinition> {
        self.mutation.as_deref().and_then(|name| self.get(name))
    }
}

#[cfg(test)]
#[path = "document/document_tests.rs"]
mod document_tests;
