#![allow(non_snake_case)]

use super::*;

#[test]
fn SchemaError___syntax___displays_position() {
    let err = SchemaError::syntax(3, 14, "expected “:”");

    assert_eq!(err.to_string(), "syntax error at 3:14: expected “:”");
}

#[test]
fn SchemaError___unknown_type___names_referencing_element() {
    let err = SchemaError::UnknownType {
        name: "Money".into(),
        referenced_by: "LineItem.price".into(),
    };

    assert_eq!(
        err.to_string(),
        "unknown type “Money” referenced by LineItem.price"
    );
}

#[test]
fn SchemaError___io___keeps_source() {
    let err = SchemaError::Io {
        path: PathBuf::from("schema.graphql"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
    };

    assert!(std::error::Error::source(&err).is_some());
    assert!(err.to_string().starts_with("failed to read schema schema.graphql"));
}
