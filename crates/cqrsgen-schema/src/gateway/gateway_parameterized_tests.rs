#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

const SCHEMA: &str = "
    type Mutation { Customer(id: ID!): Customer! }
    type Customer { rename(name: String!): Boolean! }
    input Money { amount: Float! }
    scalar DateTime
    enum Color { RED }
    interface CustomerEvents { CustomerWasRenamed(name: String!): Boolean! }
";

fn convert(reference: TypeReference) -> CodegenResult<Type> {
    let gateway = SchemaGateway::new(SchemaDocument::parse(SCHEMA).unwrap());
    gateway.convert_type(
        &reference,
        &ClassRef::parse("Ramsey\\Uuid\\Uuid"),
        "\\My\\Project\\",
    )
}

fn named(name: &str) -> TypeReference {
    TypeReference::named(name)
}

fn non_null(inner: TypeReference) -> TypeReference {
    TypeReference::non_null(inner)
}

fn list(inner: TypeReference) -> TypeReference {
    TypeReference::list(inner)
}

// ============================================================================
// Leaf mapping
// ============================================================================

#[test_case("Boolean", "bool" ; "boolean")]
#[test_case("Float", "float" ; "float")]
#[test_case("Int", "int" ; "integer")]
#[test_case("String", "string" ; "string")]
fn convert_type___scalar_leaf___maps_to_scalar_without_namespace(leaf: &str, short: &str) {
    let ty = convert(named(leaf)).unwrap();

    assert_eq!(ty.short_name(), Some(short));
    assert_eq!(ty.namespace(), None);
    assert!(ty.is_scalar());
    assert!(ty.is_nullable());
    assert!(!ty.is_collection());
}

#[test]
fn convert_type___id_leaf___maps_to_identifier_class() {
    let ty = convert(named("ID")).unwrap();

    assert_eq!(ty.short_name(), Some("Uuid"));
    assert_eq!(ty.namespace(), Some("Ramsey\\Uuid"));
    assert!(!ty.is_scalar());
}

#[test]
fn convert_type___input_leaf___maps_to_default_namespace() {
    let ty = convert(named("Money")).unwrap();

    assert_eq!(ty.short_name(), Some("Money"));
    assert_eq!(ty.namespace(), Some("\\My\\Project\\"));
    assert!(!ty.is_scalar());
}

// ============================================================================
// Wrapper flags
// ============================================================================

#[test_case(non_null(named("ID")), false, false ; "non null id")]
#[test_case(non_null(list(non_null(named("ID")))), false, true ; "non null list of non null id")]
#[test_case(list(named("Boolean")), true, true ; "nullable list")]
#[test_case(list(non_null(named("Boolean"))), false, true ; "list of non null")]
#[test_case(non_null(non_null(named("Int"))), false, false ; "repeated non null")]
#[test_case(list(list(list(named("Money")))), true, true ; "three dimensional list")]
fn convert_type___wrappers___set_flags_regardless_of_depth(
    reference: TypeReference,
    nullable: bool,
    collection: bool,
) {
    let ty = convert(reference).unwrap();

    assert_eq!(ty.is_nullable(), nullable);
    assert_eq!(ty.is_collection(), collection);
}

// ============================================================================
// Unsupported leaves
// ============================================================================

#[test_case(named("CustomerEvents") ; "interface")]
#[test_case(non_null(list(named("CustomerEvents"))) ; "wrapped interface")]
#[test_case(named("DateTime") ; "custom scalar")]
#[test_case(named("Color") ; "enum")]
#[test_case(named("Customer") ; "object")]
#[test_case(named("Nowhere") ; "unknown")]
fn convert_type___unsupported_leaf___fails(reference: TypeReference) {
    let leaf = reference.leaf().to_string();

    let err = convert(reference).unwrap_err();

    assert_eq!(err, CodegenError::UnsupportedType(leaf));
}

// ============================================================================
// Validation of member types
// ============================================================================

#[test_case(
    "type Customer { tag(at: DateTime!): Boolean! }",
    "DateTime" ;
    "custom scalar command argument"
)]
#[test_case(
    "type Customer { tag(color: [Color!]): Boolean! }",
    "Color" ;
    "enum command argument"
)]
#[test_case(
    "type Customer { tag(at: String!): Boolean! } interface CustomerEvents { CustomerWasTagged(at: DateTime!): Boolean! }",
    "DateTime" ;
    "custom scalar event argument"
)]
#[test_case(
    "type Customer { tag(at: Stamp!): Boolean! } input Stamp { at: DateTime }",
    "DateTime" ;
    "custom scalar input field"
)]
fn SchemaGateway___validate___rejects_unconvertible_member(types: &str, unsupported: &str) {
    let source = format!(
        "type Mutation {{ Customer(id: ID!): Customer! }} {types} scalar DateTime enum Color {{ RED }}"
    );
    let gateway = SchemaGateway::new(SchemaDocument::parse(&source).unwrap());

    let err = gateway.validate().unwrap_err();

    assert_eq!(err, CodegenError::UnsupportedType(unsupported.to_string()));
}
