//! Class properties

use crate::Visibility;
use crate::types::Type;
use std::fmt;

/// A property declaration with a `@var` doc comment.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    name: String,
    ty: Type,
    visibility: Visibility,
    is_static: bool,
}

impl Property {
    /// A public, non-static property.
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
            visibility: Visibility::Public,
            is_static: false,
        }
    }

    pub fn make_public(mut self) -> Self {
        self.visibility = Visibility::Public;
        self
    }

    pub fn make_protected(mut self) -> Self {
        self.visibility = Visibility::Protected;
        self
    }

    pub fn make_private(mut self) -> Self {
        self.visibility = Visibility::Private;
        self
    }

    pub fn make_static(mut self, value: bool) -> Self {
        self.is_static = value;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &Type {
        &self.ty
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    /// The class to import for this property's type, if it lives in a namespace.
    pub fn used_class(&self) -> Option<String> {
        self.ty.full_name()
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "/** @var {} */\n{}{} ${}",
            self.ty.to_doc_return(),
            self.visibility,
            if self.is_static { " static" } else { "" },
            self.name
        )
    }
}

#[cfg(test)]
#[path = "property/property_tests.rs"]
mod property_tests;
