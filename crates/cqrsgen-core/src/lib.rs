//! cqrsgen-core - Type model and class building blocks
//!
//! This crate provides the structural model every generator builds on:
//! - [`Type`] describing a field, argument or return type
//! - [`CodeBlock`] composing text and nested blocks with structural indentation
//! - [`Classifier`], [`Method`], [`Parameter`] and [`Property`] for generated classes
//! - [`NamingConfig`] and [`RuntimeClasses`] for names and referenced runtime classes
//! - [`CodegenError`] for error handling

mod block;
mod classifier;
mod config;
mod error;
mod method;
mod parameter;
mod property;
pub mod types;

pub use block::{CodeBlock, INDENT, Layout, Node};
pub use classifier::Classifier;
pub use config::{AGGREGATE_PLACEHOLDER, ArtifactKind, ArtifactNaming, NamingConfig, RuntimeClasses};
pub use error::{CodegenError, CodegenResult};
pub use method::Method;
pub use parameter::{Parameter, ParameterDefault};
pub use property::Property;
pub use types::{ClassRef, Conversion, Type};

/// Member visibility, ordered public first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Visibility::Public => write!(f, "public"),
            Visibility::Protected => write!(f, "protected"),
            Visibility::Private => write!(f, "private"),
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ArtifactKind, ClassRef, Classifier, CodeBlock, CodegenError, CodegenResult, Conversion,
        Method, NamingConfig, Parameter, Property, RuntimeClasses, Type, Visibility,
    };
}
