//! Methods of generated classes

use crate::Visibility;
use crate::block::CodeBlock;
use crate::parameter::Parameter;
use crate::types::{Type, trim_ns};
use std::fmt;

/// A method: signature, optional doc comment and an indented body.
///
/// Abstract methods render their signature followed by `;` and no body.
/// `abstract` and `final` are mutually exclusive; setting one clears the other.
#[derive(Debug, Clone, PartialEq)]
pub struct Method {
    name: String,
    visibility: Visibility,
    is_static: bool,
    is_abstract: bool,
    is_final: bool,
    parameters: Vec<Parameter>,
    return_type: Type,
    doc_comment: Option<CodeBlock>,
    body: CodeBlock,
    used_classes: Vec<String>,
}

impl Method {
    /// A public instance method without parameters, returning MIXED.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            is_static: false,
            is_abstract: false,
            is_final: false,
            parameters: Vec::new(),
            return_type: Type::mixed(),
            doc_comment: None,
            body: CodeBlock::braces(),
            used_classes: Vec::new(),
        }
    }

    pub fn make_public(&mut self) -> &mut Self {
        self.visibility = Visibility::Public;
        self
    }

    pub fn make_protected(&mut self) -> &mut Self {
        self.visibility = Visibility::Protected;
        self
    }

    pub fn make_private(&mut self) -> &mut Self {
        self.visibility = Visibility::Private;
        self
    }

    pub fn make_static(&mut self, value: bool) -> &mut Self {
        self.is_static = value;
        self
    }

    pub fn make_abstract(&mut self, value: bool) -> &mut Self {
        self.is_abstract = value;
        if value {
            self.is_final = false;
        }
        self
    }

    pub fn make_final(&mut self, value: bool) -> &mut Self {
        self.is_final = value;
        if value {
            self.is_abstract = false;
        }
        self
    }

    /// Set the return type, importing its class when namespaced.
    pub fn make_return(&mut self, return_type: Type) -> &mut Self {
        if let Some(class) = return_type.full_name() {
            self.used_classes.push(class);
        }
        self.return_type = return_type;
        self
    }

    /// Append a parameter, importing its class when namespaced.
    pub fn append_parameter(&mut self, parameter: Parameter) -> &mut Self {
        if let Some(class) = parameter.ty().full_name() {
            self.used_classes.push(class);
        }
        self.parameters.push(parameter);
        self
    }

    pub fn add_doc_line(&mut self, line: impl Into<String>) -> &mut Self {
        self.doc_comment
            .get_or_insert_with(CodeBlock::doc_comment)
            .push_text(line);
        self
    }

    /// Import a class referenced only from the body.
    pub fn use_class(&mut self, fully_qualified: &str) -> &mut Self {
        self.used_classes.push(trim_ns(fully_qualified).to_string());
        self
    }

    pub fn push_text(&mut self, line: impl Into<String>) -> &mut Self {
        self.body.push_text(line);
        self
    }

    pub fn push_block(&mut self, block: CodeBlock) -> &mut Self {
        self.body.push_block(block);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    pub fn is_final(&self) -> bool {
        self.is_final
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn return_type(&self) -> &Type {
        &self.return_type
    }

    pub fn body(&self) -> &CodeBlock {
        &self.body
    }

    pub fn used_classes(&self) -> &[String] {
        &self.used_classes
    }

    /// `[abstract ][final ]<visibility> [static ]function name(params)[: return]`
    pub fn signature(&self) -> String {
        let parameters: Vec<String> = self.parameters.iter().map(Parameter::to_string).collect();
        format!(
            "{}{}{} {}function {}({}){}",
            if self.is_abstract { "abstract " } else { "" },
            if self.is_final { "final " } else { "" },
            self.visibility,
            if self.is_static { "static " } else { "" },
            self.name,
            parameters.join(", "),
            self.return_type.to_return()
        )
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(doc) = &self.doc_comment {
            doc.fmt(f)?;
        }
        f.write_str(&self.signature())?;
        if self.is_abstract {
            f.write_str(";")
        } else {
            write!(f, "\n{}", self.body)
        }
    }
}
