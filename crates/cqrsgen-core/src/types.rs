//! Type descriptors for generated members
//!
//! A [`Type`] is the semantic description of a field, argument or return type:
//! its short name, namespace, nullability, collection-ness and scalar-ness. It knows
//! how to render itself in the different positions a generated class needs
//! (parameter declaration, return declaration, doc comment and value conversion).
//!
//! # Markers
//!
//! | marker | meaning |
//! |--------|---------|
//! | [`Type::mixed`] | no declared type, renders as `mixed` in docs and nothing in code |
//! | [`Type::void`] | return marker, never nullable, never a collection |
//! | [`STATIC`] | late static binding, declared as `self` |

use serde::{Deserialize, Serialize};
use std::fmt;

pub const BOOL: &str = "bool";
pub const FLOAT: &str = "float";
pub const INT: &str = "int";
pub const STRING: &str = "string";
pub const SELF: &str = "self";
pub const STATIC: &str = "static";
pub const VOID: &str = "void";
pub const ARRAY: &str = "array";

const SCALARS: [&str; 4] = [BOOL, FLOAT, INT, STRING];

/// Semantic descriptor of a type used in a generated class.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Type {
    short_name: Option<String>,
    namespace: Option<String>,
    nullable: bool,
    collection: bool,
    scalar: bool,
}

/// How a non-scalar value expression is turned into an instance of its type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion<'a> {
    /// `new Type($value)`
    Construct,
    /// `Type::method($value)`
    StaticCall(&'a str),
}

impl Type {
    /// Create a type descriptor, normalising the marker invariants.
    ///
    /// `"mixed"` becomes the MIXED marker, `void` is never nullable nor a
    /// collection, and scalar types never carry a namespace.
    pub fn new(
        short_name: Option<&str>,
        namespace: Option<&str>,
        nullable: bool,
        collection: bool,
    ) -> Self {
        let short_name = short_name.filter(|name| *name != "mixed");
        let is_void = short_name == Some(VOID);
        let scalar = short_name.is_some_and(|name| SCALARS.contains(&name));
        Self {
            short_name: short_name.map(str::to_string),
            namespace: if scalar {
                None
            } else {
                namespace.map(str::to_string)
            },
            nullable: nullable && !is_void,
            collection: collection && !is_void,
            scalar,
        }
    }

    /// A nullable, non-collection type without namespace.
    pub fn named(short_name: &str) -> Self {
        Self::new(Some(short_name), None, true, false)
    }

    /// A non-null, non-collection type without namespace.
    pub fn required(short_name: &str) -> Self {
        Self::new(Some(short_name), None, false, false)
    }

    /// The MIXED marker: no declared type at all.
    pub fn mixed() -> Self {
        Self::new(None, None, true, false)
    }

    /// The VOID return marker.
    pub fn void() -> Self {
        Self::required(VOID)
    }

    /// A nullable type referring to a class.
    pub fn of_class(class: &ClassRef) -> Self {
        Self::new(Some(class.short()), class.namespace(), true, false)
    }

    /// Copy of this type with a different nullability.
    pub fn with_nullable(&self, nullable: bool) -> Self {
        Self::new(
            self.short_name.as_deref(),
            self.namespace.as_deref(),
            nullable,
            self.collection,
        )
    }

    /// Copy of this type with a different collection flag.
    pub fn with_collection(&self, collection: bool) -> Self {
        Self::new(
            self.short_name.as_deref(),
            self.namespace.as_deref(),
            self.nullable,
            collection,
        )
    }

    /// Wrap the short name in `prefix`/`suffix` if the type lives in `namespace`.
    ///
    /// Used to apply the value-object naming convention to converted schema types.
    pub fn with_name_surrounded_when_in_namespace(
        &self,
        prefix: &str,
        suffix: &str,
        namespace: &str,
    ) -> Self {
        match (&self.short_name, &self.namespace) {
            (Some(short), Some(ns)) if trim_ns(ns) == trim_ns(namespace) => Self::new(
                Some(&format!("{prefix}{short}{suffix}")),
                Some(ns),
                self.nullable,
                self.collection,
            ),
            _ => self.clone(),
        }
    }

    pub fn short_name(&self) -> Option<&str> {
        self.short_name.as_deref()
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    pub fn is_collection(&self) -> bool {
        self.collection
    }

    pub fn is_scalar(&self) -> bool {
        self.scalar
    }

    pub fn is_mixed(&self) -> bool {
        self.short_name.is_none()
    }

    /// Fully qualified name, or `None` for types outside any namespace.
    pub fn full_name(&self) -> Option<String> {
        let namespace = self.namespace.as_deref()?;
        let short = self.short_name.as_deref().unwrap_or_default();
        let namespace = trim_ns(namespace);
        if namespace.is_empty() {
            Some(short.to_string())
        } else {
            Some(format!("{namespace}\\{short}"))
        }
    }

    /// Declaration text in a parameter list, including the trailing space.
    pub fn to_param(&self) -> String {
        match self.declared_name() {
            Some(name) => format!("{}{name} ", if self.nullable { "?" } else { "" }),
            None => String::new(),
        }
    }

    /// Return declaration text, including the leading colon.
    pub fn to_return(&self) -> String {
        match self.declared_name() {
            Some(name) => format!(": {}{name}", if self.nullable { "?" } else { "" }),
            None => String::new(),
        }
    }

    /// Type text for a `@param` doc tag.
    pub fn to_doc_param(&self) -> String {
        self.doc_text()
    }

    /// Type text for a `@return` or `@var` doc tag.
    pub fn to_doc_return(&self) -> String {
        self.doc_text()
    }

    /// Expression converting `value` into this type.
    ///
    /// Nullable types short-circuit to `null`. Collections are passed through
    /// without element-wise conversion.
    pub fn to_conversion(&self, value: &str, conversion: Conversion<'_>) -> String {
        let guard = if self.nullable {
            format!("is_null({value}) ? null : ")
        } else {
            String::new()
        };
        match self.short_name.as_deref() {
            Some(short) if !self.collection => {
                let function = if self.scalar {
                    format!("{}val", short.replace(STRING, "str"))
                } else {
                    match conversion {
                        Conversion::Construct => format!("new {short}"),
                        Conversion::StaticCall(method) => format!("{short}::{method}"),
                    }
                };
                format!("{guard}{function}({value})")
            }
            _ => format!("{guard}{value}"),
        }
    }

    fn declared_name(&self) -> Option<&str> {
        if self.collection {
            return Some("iterable");
        }
        match self.short_name.as_deref() {
            Some(STATIC) => Some(SELF),
            other => other,
        }
    }

    fn doc_text(&self) -> String {
        format!(
            "{}{}{}",
            self.short_name.as_deref().unwrap_or("mixed"),
            if self.collection { "[]|iterable" } else { "" },
            if self.nullable { "|null" } else { "" }
        )
    }
}

/// A fully qualified class name split into namespace and short name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ClassRef {
    namespace: Option<String>,
    short: String,
}

impl ClassRef {
    /// Split `Some\Namespace\Class` into its parts; leading/trailing `\` are ignored.
    pub fn parse(fully_qualified: &str) -> Self {
        let trimmed = trim_ns(fully_qualified);
        match trimmed.rsplit_once('\\') {
            Some((namespace, short)) => Self {
                namespace: Some(namespace.to_string()),
                short: short.to_string(),
            },
            None => Self {
                namespace: None,
                short: trimmed.to_string(),
            },
        }
    }

    /// Build a reference from separate namespace and short name.
    pub fn new(namespace: &str, short: &str) -> Self {
        let namespace = trim_ns(namespace);
        Self {
            namespace: (!namespace.is_empty()).then(|| namespace.to_string()),
            short: short.to_string(),
        }
    }

    pub fn short(&self) -> &str {
        &self.short
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Fully qualified name without a leading backslash.
    pub fn full_name(&self) -> String {
        match &self.namespace {
            Some(namespace) => format!("{namespace}\\{}", self.short),
            None => self.short.clone(),
        }
    }
}

impl fmt::Display for ClassRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name())
    }
}

impl From<String> for ClassRef {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<&str> for ClassRef {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<ClassRef> for String {
    fn from(value: ClassRef) -> Self {
        value.full_name()
    }
}

/// Strip leading and trailing namespace separators.
pub fn trim_ns(namespace: &str) -> &str {
    namespace.trim_matches('\\')
}
