#![allow(non_snake_case)]

use super::*;
use std::io::Write;

const FIXTURE: &str = include_str!("../../../../fixtures/customer_invoice.graphql");

// TypeReference tests

#[test]
fn TypeReference___leaf___skips_all_wrappers() {
    let ty = TypeReference::non_null(TypeReference::list(TypeReference::non_null(
        TypeReference::named("Money"),
    )));

    assert_eq!(ty.leaf(), "Money");
}

#[test]
fn TypeReference___non_null_name___only_matches_direct_non_null() {
    let direct = TypeReference::non_null(TypeReference::named("Boolean"));
    let list = TypeReference::non_null(TypeReference::list(TypeReference::named("Boolean")));
    let nullable = TypeReference::named("Boolean");

    assert_eq!(direct.non_null_name(), Some("Boolean"));
    assert_eq!(list.non_null_name(), None);
    assert_eq!(nullable.non_null_name(), None);
    assert!(list.is_non_null());
    assert!(!nullable.is_non_null());
}

// SchemaDocument tests

#[test]
fn SchemaDocument___parse_fixture___keeps_declaration_order() {
    let document = SchemaDocument::parse(FIXTURE).unwrap();

    let names: Vec<&str> = document.types().map(|ty| ty.name.as_str()).collect();

    assert_eq!(
        names,
        [
            "CqrsQuery",
            "CqrsAggregateMutators",
            "Customer",
            "Invoice",
            "Address",
            "Date",
            "LineItem",
            "Money",
            "CustomerEvents",
            "InvoiceEvents",
        ]
    );
}

#[test]
fn SchemaDocument___schema_block___designates_roots() {
    let document = SchemaDocument::parse(FIXTURE).unwrap();

    assert_eq!(document.query_type().map(|ty| ty.name.as_str()), Some("CqrsQuery"));
    assert_eq!(
        document.mutation_type().map(|ty| ty.name.as_str()),
        Some("CqrsAggregateMutators")
    );
}

#[test]
fn SchemaDocument___without_schema_block___defaults_to_mutation_type() {
    let document = SchemaDocument::parse("type Mutation { Customer(id: ID!): Customer! } type Customer { a: Boolean! }").unwrap();

    assert_eq!(document.mutation_type().map(|ty| ty.name.as_str()), Some("Mutation"));
    assert!(document.query_type().is_none());
}

#[test]
fn SchemaDocument___without_mutation___has_no_mutation_root() {
    let document = SchemaDocument::parse("type Query { a: Int }").unwrap();

    assert!(document.mutation_type().is_none());
}

#[test]
fn SchemaDocument___duplicate_type___fails() {
    let err = SchemaDocument::parse("type A { b: Int } input A { c: Int }").unwrap_err();

    assert!(matches!(err, SchemaError::DuplicateType(name) if name == "A"));
}

#[test]
fn SchemaDocument___redefined_builtin_scalar___fails() {
    let err = SchemaDocument::parse("scalar String").unwrap_err();

    assert!(matches!(err, SchemaError::DuplicateType(name) if name == "String"));
}

#[test]
fn SchemaDocument___unknown_field_type___names_the_field() {
    let err = SchemaDocument::parse("input LineItem { price: Money! }").unwrap_err();

    match err {
        SchemaError::UnknownType {
            name,
            referenced_by,
        } => {
            assert_eq!(name, "Money");
            assert_eq!(referenced_by, "LineItem.price");
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn SchemaDocument___unknown_argument_type___names_the_argument() {
    let err = SchemaDocument::parse("type Customer { relocate(to: Address!): Boolean! }").unwrap_err();

    assert!(err.to_string().contains("Customer.relocate(to)"));
}

#[test]
fn SchemaDocument___schema_block_without_mutation___has_no_mutation_root() {
    let document = SchemaDocument::parse(
        "schema { query: Q } type Q { a: Int } type Mutation { Customer(id: ID!): Customer! } type Customer { a: Boolean! }",
    )
    .unwrap();

    assert!(document.mutation_type().is_none());
    assert_eq!(document.query_type().map(|ty| ty.name.as_str()), Some("Q"));
}

#[test]
fn SchemaDocument___no_schema_block___falls_back_to_conventional_roots() {
    let document = SchemaDocument::parse("type Query { a: Int } type Mutation { b: Int }").unwrap();

    assert_eq!(document.mutation_type().map(|ty| ty.name.as_str()), Some("Mutation"));
    assert_eq!(document.query_type().map(|ty| ty.name.as_str()), Some("Query"));
}

#[test]
fn SchemaDocument___unknown_root___fails() {
    let err = SchemaDocument::parse("schema { mutation: Missing }").unwrap_err();

    assert!(matches!(err, SchemaError::UnknownRootType(name) if name == "Missing"));
}

#[test]
fn SchemaDocument___root_of_wrong_kind___fails() {
    let err = SchemaDocument::parse("schema { mutation: M } input M { a: Int }").unwrap_err();

    assert!(matches!(err, SchemaError::UnknownRootType(_)));
}

#[test]
fn SchemaDocument___from_file___reads_schema() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(FIXTURE.as_bytes()).unwrap();

    let document = SchemaDocument::from_file(file.path()).unwrap();

    assert!(document.get("Customer").is_some());
    assert!(document.is_defined("ID"));
}

#[test]
fn SchemaDocument___from_missing_file___reports_io_error() {
    let dir = tempfile::tempdir().unwrap();

    let err = SchemaDocument::from_file(&dir.path().join("missing.graphql")).unwrap_err();

    assert!(matches!(err, SchemaError::Io { .. }));
}
