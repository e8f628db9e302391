#![allow(non_snake_case)]

use super::*;
use crate::types::{ClassRef, INT, STRING};

#[test]
fn Property___new___is_public_and_not_static() {
    let prop = Property::new("count", Type::named(INT));

    assert_eq!(prop.visibility(), Visibility::Public);
    assert!(!prop.is_static());
}

#[test]
fn Property___display___renders_var_doc_and_declaration() {
    let prop = Property::new("name", Type::named(STRING)).make_protected();

    assert_eq!(prop.to_string(), "/** @var string|null */\nprotected $name");
}

#[test]
fn Property___static___renders_static_keyword() {
    let prop = Property::new("instances", Type::required(INT).with_collection(true))
        .make_private()
        .make_static(true);

    assert_eq!(
        prop.to_string(),
        "/** @var int[]|iterable */\nprivate static $instances"
    );
}

#[test]
fn Property___namespaced_type___reports_used_class() {
    let prop = Property::new("id", Type::of_class(&ClassRef::parse("Kepawni\\Twilted\\EntityIdentifier")));

    assert_eq!(
        prop.used_class().as_deref(),
        Some("Kepawni\\Twilted\\EntityIdentifier")
    );
}

#[test]
fn Property___scalar_type___has_no_used_class() {
    let prop = Property::new("count", Type::named(INT));

    assert!(prop.used_class().is_none());
}
