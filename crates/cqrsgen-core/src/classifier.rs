//! Structural model of a generated class or interface
//!
//! Members are collected in any order and sorted only when rendering:
//!
//! - constants alphabetically,
//! - properties and methods static first, then public, protected, private,
//!   then by name.
//!
//! The rendered text always starts with the strict types header, followed by the
//! namespace declaration and the sorted, de-duplicated `use` list.

use crate::Visibility;
use crate::block::CodeBlock;
use crate::method::Method;
use crate::property::Property;
use crate::types::{ClassRef, trim_ns};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Kind {
    #[default]
    Class,
    AbstractClass,
    FinalClass,
    Interface,
}

/// A class or interface under construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Classifier {
    name: String,
    namespace: String,
    kind: Kind,
    doc_comment: Option<CodeBlock>,
    parent: Option<String>,
    interfaces: Vec<String>,
    constants: BTreeMap<String, String>,
    properties: Vec<Property>,
    methods: Vec<Method>,
    used_classes: Vec<String>,
}

impl Classifier {
    pub fn new(name: impl Into<String>, namespace: &str) -> Self {
        Self {
            name: name.into(),
            namespace: trim_ns(namespace).to_string(),
            kind: Kind::Class,
            doc_comment: None,
            parent: None,
            interfaces: Vec::new(),
            constants: BTreeMap::new(),
            properties: Vec::new(),
            methods: Vec::new(),
            used_classes: Vec::new(),
        }
    }

    pub fn make_abstract(&mut self, value: bool) -> &mut Self {
        self.set_kind(Kind::AbstractClass, value)
    }

    pub fn make_final(&mut self, value: bool) -> &mut Self {
        self.set_kind(Kind::FinalClass, value)
    }

    pub fn make_interface(&mut self, value: bool) -> &mut Self {
        self.set_kind(Kind::Interface, value)
    }

    fn set_kind(&mut self, kind: Kind, value: bool) -> &mut Self {
        if value {
            self.kind = kind;
        } else if self.kind == kind {
            self.kind = Kind::Class;
        }
        self
    }

    /// Add a constant, rendered as its JSON encoding.
    pub fn add_constant(&mut self, name: impl Into<String>, value: serde_json::Value) -> &mut Self {
        self.constants.insert(name.into(), value.to_string());
        self
    }

    pub fn add_doc_line(&mut self, line: impl Into<String>) -> &mut Self {
        self.doc_comment
            .get_or_insert_with(CodeBlock::doc_comment)
            .push_text(line);
        self
    }

    pub fn add_property(&mut self, property: Property) -> &mut Self {
        if let Some(class) = property.used_class() {
            self.used_classes.push(class);
        }
        self.properties.push(property);
        self
    }

    pub fn add_method(&mut self, method: Method) -> &mut Self {
        self.used_classes.extend(method.used_classes().iter().cloned());
        self.methods.push(method);
        self
    }

    /// Set the parent class, or add an extended interface when this is an interface.
    pub fn extend(&mut self, class: &ClassRef) -> &mut Self {
        if self.is_interface() {
            self.interfaces.push(class.short().to_string());
        } else {
            self.parent = Some(class.short().to_string());
        }
        self.used_classes.push(class.full_name());
        self
    }

    pub fn implement(&mut self, interface: &ClassRef) -> &mut Self {
        self.interfaces.push(interface.short().to_string());
        self.used_classes.push(interface.full_name());
        self
    }

    pub fn use_class(&mut self, class: &ClassRef) -> &mut Self {
        self.used_classes.push(class.full_name());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Namespace without leading or trailing separators; empty for the global namespace.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn class_ref(&self) -> ClassRef {
        ClassRef::new(&self.namespace, &self.name)
    }

    pub fn is_abstract(&self) -> bool {
        self.kind == Kind::AbstractClass
    }

    pub fn is_final(&self) -> bool {
        self.kind == Kind::FinalClass
    }

    pub fn is_interface(&self) -> bool {
        self.kind == Kind::Interface
    }

    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    pub fn constants(&self) -> &BTreeMap<String, String> {
        &self.constants
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    pub fn method(&self, name: &str) -> Option<&Method> {
        self.methods.iter().find(|method| method.name() == name)
    }

    /// Classes to import: sorted, de-duplicated, excluding this classifier itself.
    pub fn used_classes(&self) -> Vec<String> {
        let own = self.class_ref().full_name();
        let mut classes: Vec<String> = self
            .used_classes
            .iter()
            .filter(|class| **class != own)
            .cloned()
            .collect();
        classes.sort();
        classes.dedup();
        classes
    }

    /// A short name bound twice in this file, either by an import and the class
    /// itself or by two imports. Compared case-insensitively, as PHP does.
    pub fn clashing_import(&self) -> Option<String> {
        let mut bound = HashSet::from([self.name.to_ascii_lowercase()]);
        self.used_classes()
            .into_iter()
            .map(|class| ClassRef::parse(&class).short().to_string())
            .find(|short| !bound.insert(short.to_ascii_lowercase()))
    }

    fn sorted_interfaces(&self) -> Vec<&str> {
        let mut interfaces: Vec<&str> = self.interfaces.iter().map(String::as_str).collect();
        interfaces.sort_unstable();
        interfaces.dedup();
        interfaces
    }

    fn body(&self) -> CodeBlock {
        let mut body = CodeBlock::indented("{", "}", "\n");
        if !self.constants.is_empty() {
            let constants: Vec<String> = self
                .constants
                .iter()
                .map(|(name, value)| format!("const {name} = {value};"))
                .collect();
            body.push_text(constants.join("\n"));
        }
        if !self.properties.is_empty() {
            let mut properties: Vec<&Property> = self.properties.iter().collect();
            properties.sort_by(|a, b| {
                member_order(
                    (a.is_static(), a.visibility(), a.name()),
                    (b.is_static(), b.visibility(), b.name()),
                )
            });
            let rendered: Vec<String> = properties.iter().map(|p| p.to_string()).collect();
            body.push_text(format!("{};", rendered.join(";\n")));
        }
        let mut methods: Vec<&Method> = self.methods.iter().collect();
        methods.sort_by(|a, b| {
            member_order(
                (a.is_static(), a.visibility(), a.name()),
                (b.is_static(), b.visibility(), b.name()),
            )
        });
        let rendered: Vec<String> = methods
            .iter()
            .map(|method| {
                if self.is_interface() {
                    format!("{};", method.signature())
                } else {
                    method.to_string()
                }
            })
            .collect();
        body.push_text(rendered.join("\n\n"));
        body
    }
}

fn member_order(a: (bool, Visibility, &str), b: (bool, Visibility, &str)) -> Ordering {
    b.0.cmp(&a.0)
        .then_with(|| a.1.cmp(&b.1))
        .then_with(|| a.2.cmp(b.2))
}

impl fmt::Display for Classifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<?php declare(strict_types=1);\n")?;
        if !self.namespace.is_empty() {
            writeln!(f, "namespace {};", self.namespace)?;
        }
        let used = self.used_classes();
        if !used.is_empty() {
            write!(f, "\nuse {};\n", used.join(";\nuse "))?;
        }
        f.write_str("\n")?;
        if let Some(doc) = &self.doc_comment {
            doc.fmt(f)?;
        }
        f.write_str(match self.kind {
            Kind::Class => "class ",
            Kind::AbstractClass => "abstract class ",
            Kind::FinalClass => "final class ",
            Kind::Interface => "interface ",
        })?;
        f.write_str(&self.name)?;
        if let Some(parent) = &self.parent {
            write!(f, " extends {parent}")?;
        }
        let interfaces = self.sorted_interfaces();
        if !interfaces.is_empty() {
            let keyword = if self.is_interface() { "extends" } else { "implements" };
            write!(f, " {keyword} {}", interfaces.join(", "))?;
        }
        writeln!(f, "\n{}", self.body())
    }
}
