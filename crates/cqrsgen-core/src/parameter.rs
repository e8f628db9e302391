//! Method parameters

use crate::types::Type;
use std::fmt;

/// Default value of a parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterDefault {
    /// A literal, rendered as JSON (`null`, `1`, `"text"`).
    Literal(serde_json::Value),
    /// A constant name rendered verbatim (`self::LIMIT`).
    Constant(String),
}

/// A named, typed parameter of a [`Method`](crate::Method).
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    name: String,
    ty: Type,
    default: Option<ParameterDefault>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
            default: None,
        }
    }

    pub fn with_default_value(mut self, value: impl Into<serde_json::Value>) -> Self {
        self.default = Some(ParameterDefault::Literal(value.into()));
        self
    }

    pub fn with_default_constant(mut self, constant: impl Into<String>) -> Self {
        self.default = Some(ParameterDefault::Constant(constant.into()));
        self
    }

    pub fn without_default(mut self) -> Self {
        self.default = None;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &Type {
        &self.ty
    }

    pub fn default(&self) -> Option<&ParameterDefault> {
        self.default.as_ref()
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}${}", self.ty.to_param(), self.name)?;
        match &self.default {
            Some(ParameterDefault::Literal(value)) => write!(f, " = {value}"),
            Some(ParameterDefault::Constant(constant)) => write!(f, " = {constant}"),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "parameter/parameter_tests.rs"]
mod parameter_tests;
