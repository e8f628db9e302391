//! Property-based tests for the code block and type models
//!
//! Tests that rendering is structural: indentation depends only on nesting depth,
//! and inline blocks are a plain prefix/join/suffix.

use cqrsgen_core::{CodeBlock, INDENT, Type};
use proptest::prelude::*;

// Strategy: single-line text without line breaks
fn arb_line() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 $;=()]{0,20}"
}

fn arb_delimiter() -> impl Strategy<Value = String> {
    "[\\[\\](){}<>]{0,2}"
}

proptest! {
    /// Property: an empty inline block renders as prefix + suffix
    #[test]
    fn proptest_empty_inline_block_renders_delimiters(
        prefix in arb_delimiter(),
        suffix in arb_delimiter(),
        separator in ", ?",
    ) {
        let block = CodeBlock::new(&prefix, &suffix, &separator);

        prop_assert_eq!(block.to_string(), format!("{prefix}{suffix}"));
    }

    /// Property: inline blocks join their text contents with the separator
    #[test]
    fn proptest_inline_block_joins_contents(
        lines in prop::collection::vec(arb_line(), 1..8),
        separator in ", ?",
    ) {
        let mut block = CodeBlock::new("(", ")", &separator);
        for line in &lines {
            block.push_text(line.clone());
        }

        prop_assert_eq!(block.to_string(), format!("({})", lines.join(&separator)));
    }

    /// Property: innermost content of n nested indented blocks is indented n levels
    #[test]
    fn proptest_nested_indentation_matches_depth(
        depth in 1usize..8,
        line in "[a-z]{1,10};",
    ) {
        let mut block = CodeBlock::braces().with_text(line.clone());
        for _ in 1..depth {
            block = CodeBlock::braces().with_block(block);
        }

        let rendered = block.to_string();
        let expected = format!("\n{}{line}\n", INDENT.repeat(depth));

        prop_assert!(rendered.contains(&expected));
        prop_assert_eq!(block.indent_depth(), depth);
        prop_assert_eq!(rendered.lines().count(), 2 * depth + 1);
    }

    /// Property: rendering the same tree twice is byte-identical
    #[test]
    fn proptest_rendering_is_deterministic(lines in prop::collection::vec(arb_line(), 0..6)) {
        let mut block = CodeBlock::indented("[", "]", ",");
        for line in &lines {
            block.push_block(CodeBlock::braces().with_text(line.clone()));
        }

        prop_assert_eq!(block.to_string(), block.clone().to_string());
    }

    /// Property: void is never nullable nor a collection, whatever flags are requested
    #[test]
    fn proptest_void_ignores_flags(nullable in any::<bool>(), collection in any::<bool>()) {
        let ty = Type::new(Some("void"), Some("Ignored"), nullable, collection);

        prop_assert!(!ty.is_nullable());
        prop_assert!(!ty.is_collection());
    }

    /// Property: scalar types never carry a namespace
    #[test]
    fn proptest_scalars_drop_namespace(
        scalar in prop_oneof![Just("bool"), Just("float"), Just("int"), Just("string")],
        namespace in "[A-Z][a-z]{1,8}",
    ) {
        let ty = Type::new(Some(scalar), Some(namespace.as_str()), true, false);

        prop_assert!(ty.is_scalar());
        prop_assert_eq!(ty.namespace(), None);
    }
}
