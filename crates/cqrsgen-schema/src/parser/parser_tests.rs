#![allow(non_snake_case)]

use super::*;

fn types(source: &str) -> Vec<TypeDefinition> {
    parse(source).unwrap().types
}

// Definitions

#[test]
fn parse___schema_block___records_operation_roots() {
    let parsed = parse("schema { query: Q mutation: M subscription: S }").unwrap();

    assert_eq!(parsed.query.as_deref(), Some("Q"));
    assert_eq!(parsed.mutation.as_deref(), Some("M"));
    assert!(parsed.types.is_empty());
}

#[test]
fn parse___schema_block_without_roots___is_recorded() {
    let parsed = parse("schema { query: Q } type Mutation { a: Int }").unwrap();

    assert!(parsed.has_schema_block);
    assert_eq!(parsed.mutation, None);
}

#[test]
fn parse___no_schema_block___is_recorded() {
    let parsed = parse("type Mutation { a: Int }").unwrap();

    assert!(!parsed.has_schema_block);
}

#[test]
fn parse___object_type___reads_fields_and_arguments() {
    let parsed = types("type Customer { rename(name: String!, reason: String): Boolean! }");

    let customer = &parsed[0];
    assert_eq!(customer.name, "Customer");
    assert_eq!(customer.kind, TypeKind::Object);
    let rename = &customer.fields[0];
    assert_eq!(rename.name, "rename");
    assert_eq!(rename.arguments.len(), 2);
    assert_eq!(rename.arguments[0].ty.to_string(), "String!");
    assert_eq!(rename.arguments[1].ty.to_string(), "String");
    assert_eq!(rename.ty.to_string(), "Boolean!");
}

#[test]
fn parse___arguments_without_commas___are_accepted() {
    let parsed = types("type Customer { engage(name: String! billingAddress: Address!): Customer! }");

    let names: Vec<&str> = parsed[0].fields[0]
        .arguments
        .iter()
        .map(|argument| argument.name.as_str())
        .collect();
    assert_eq!(names, ["name", "billingAddress"]);
}

#[test]
fn parse___nested_wrappers___build_type_reference_chain() {
    let parsed = types("type T { ids: [[ID!]]! }");

    let ty = &parsed[0].fields[0].ty;
    assert_eq!(
        *ty,
        TypeReference::non_null(TypeReference::list(TypeReference::list(
            TypeReference::non_null(TypeReference::named("ID"))
        )))
    );
    assert_eq!(ty.to_string(), "[[ID!]]!");
}

#[test]
fn parse___input_type___reads_input_fields_and_defaults() {
    let parsed = types(r#"input Money { amount: Float! = 0.0 currency: String = "EUR" tags: [String] = ["a", "b"] }"#);

    let money = &parsed[0];
    assert_eq!(money.kind, TypeKind::InputObject);
    assert_eq!(money.input_fields.len(), 3);
    assert_eq!(money.input_fields[0].default_value.as_deref(), Some("0.0"));
    assert_eq!(money.input_fields[1].default_value.as_deref(), Some("\"EUR\""));
    assert_eq!(money.input_fields[2].default_value.as_deref(), Some("[\"a\", \"b\"]"));
}

#[test]
fn parse___interface___implements_list_and_fields() {
    let parsed = types("interface CustomerEvents implements Node & Windable { CustomerWasRenamed(name: String!): Boolean! }");

    let events = &parsed[0];
    assert_eq!(events.kind, TypeKind::Interface);
    assert_eq!(events.members, ["Node", "Windable"]);
    assert_eq!(events.fields[0].name, "CustomerWasRenamed");
}

#[test]
fn parse___scalar_enum_union___are_recorded() {
    let parsed = types("scalar DateTime @specifiedBy(url: \"x\") enum Color { RED GREEN } union Shape = | Circle | Square");

    assert_eq!(parsed[0].kind, TypeKind::Scalar);
    assert_eq!(parsed[1].values, ["RED", "GREEN"]);
    assert_eq!(parsed[2].kind, TypeKind::Union);
    assert_eq!(parsed[2].members, ["Circle", "Square"]);
}

#[test]
fn parse___descriptions_comments_and_directives___are_skipped() {
    let source = r#"
        # leading comment
        """
        A customer aggregate
        """
        type Customer @key(fields: "id") {
            "Renames the customer"
            rename(
                "the new name"
                name: String! @deprecated(reason: "use label")
            ): Boolean! # trailing comment
        }
        directive @key(fields: String!) repeatable on OBJECT | INTERFACE
    "#;

    let parsed = types(source);

    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].fields[0].arguments[0].name, "name");
}

#[test]
fn parse___block_string_with_escaped_quotes___is_skipped() {
    let parsed = types("\"\"\"say \\\"\"\"hi\\\"\"\"\"\"\" type A { b: Int }");

    assert_eq!(parsed[0].name, "A");
}

#[test]
fn parse___empty_field_block___is_allowed() {
    let parsed = types("type Empty {} input Nothing");

    assert!(parsed[0].fields.is_empty());
    assert!(parsed[1].input_fields.is_empty());
}

// Errors

#[test]
fn parse___missing_colon___reports_position() {
    let err = parse("type A {\n  b Int\n}").unwrap_err();

    match err {
        SchemaError::Syntax {
            line,
            column,
            message,
        } => {
            assert_eq!((line, column), (2, 5));
            assert_eq!(message, "expected “:”, found “Int”");
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn parse___unterminated_string___fails() {
    let err = parse("\"open\ntype A { b: Int }").unwrap_err();

    assert!(matches!(err, SchemaError::Syntax { line: 1, .. }));
}

#[test]
fn parse___unknown_definition___fails() {
    let err = parse("query Q { a }").unwrap_err();

    assert!(err.to_string().contains("unknown definition “query”"));
}

#[test]
fn parse___type_extension___is_rejected() {
    let err = parse("extend type A { b: Int }").unwrap_err();

    assert!(err.to_string().contains("type extensions are not supported"));
}

#[test]
fn parse___unexpected_character___fails() {
    let err = parse("type A { b: Int% }").unwrap_err();

    assert!(err.to_string().contains("unexpected character “%”"));
}

#[test]
fn parse___unclosed_block___reports_end_of_input() {
    let err = parse("type A { b: Int").unwrap_err();

    assert!(err.to_string().ends_with("found end of input"));
}
