#![allow(non_snake_case)]

use super::*;
use crate::types::{INT, STRING};

#[test]
fn Parameter___display___renders_type_and_name() {
    let param = Parameter::new("name", Type::named("SomeType"));

    assert_eq!(param.to_string(), "?SomeType $name");
}

#[test]
fn Parameter___mixed_type___renders_bare_name() {
    let param = Parameter::new("context", Type::mixed());

    assert_eq!(param.to_string(), "$context");
}

#[test]
fn Parameter___literal_default___renders_json() {
    let param = Parameter::new("label", Type::named(STRING)).with_default_value("n/a");

    assert_eq!(param.to_string(), "?string $label = \"n/a\"");
}

#[test]
fn Parameter___null_default___renders_null() {
    let param = Parameter::new("limit", Type::named(INT)).with_default_value(serde_json::Value::Null);

    assert_eq!(param.to_string(), "?int $limit = null");
}

#[test]
fn Parameter___constant_default___renders_constant_name() {
    let param = Parameter::new("limit", Type::required(INT)).with_default_constant("self::LIMIT");

    assert_eq!(param.to_string(), "int $limit = self::LIMIT");
}

#[test]
fn Parameter___without_default___drops_default() {
    let param = Parameter::new("limit", Type::required(INT))
        .with_default_value(5)
        .without_default();

    assert!(param.default().is_none());
    assert_eq!(param.to_string(), "int $limit");
}

#[test]
fn Parameter___accessors___expose_name_and_type() {
    let param = Parameter::new("id", Type::required(STRING));

    assert_eq!(param.name(), "id");
    assert_eq!(param.ty(), &Type::required(STRING));
}
