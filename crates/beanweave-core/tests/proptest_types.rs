//! Property-based tests for Java type string parsing
//!
//! Type strings arrive from model files written by another tool, so the
//! parser must never panic and must agree with the `Display` form.

use beanweave_core::{Primitive, TypeRef};
use proptest::prelude::*;

fn arb_primitive() -> impl Strategy<Value = TypeRef> {
    prop_oneof![
        Just(Primitive::Boolean),
        Just(Primitive::Byte),
        Just(Primitive::Char),
        Just(Primitive::Short),
        Just(Primitive::Int),
        Just(Primitive::Long),
        Just(Primitive::Float),
        Just(Primitive::Double),
    ]
    .prop_map(TypeRef::Primitive)
}

fn arb_class_name() -> impl Strategy<Value = String> {
    (
        prop::collection::vec("[a-z][a-z0-9]{0,6}", 0..4),
        "[A-Z][A-Za-z0-9_]{0,10}",
    )
        .prop_map(|(packages, simple)| {
            let mut name = packages.join(".");
            if !name.is_empty() {
                name.push('.');
            }
            name.push_str(&simple);
            name
        })
}

fn arb_type_arg(inner: impl Strategy<Value = TypeRef>) -> impl Strategy<Value = TypeRef> {
    // Primitives are not valid type arguments
    (inner, any::<bool>()).prop_map(|(t, wildcard)| {
        let t = t.boxed();
        if wildcard {
            TypeRef::Wildcard(Some(Box::new(t)))
        } else {
            t
        }
    })
}

fn arb_type() -> impl Strategy<Value = TypeRef> {
    let leaf = prop_oneof![arb_primitive(), arb_class_name().prop_map(TypeRef::class)];
    leaf.prop_recursive(4, 24, 3, |inner| {
        prop_oneof![
            inner.clone().prop_map(TypeRef::array_of),
            (
                arb_class_name(),
                prop::collection::vec(arb_type_arg(inner), 1..3)
            )
                .prop_map(|(name, args)| TypeRef::generic(name, args)),
        ]
    })
}

proptest! {
    /// Property: parsing arbitrary text returns a value or an error, never panics
    #[test]
    fn proptest_parse_arbitrary_input_does_not_panic(input in ".{0,64}") {
        let _ = TypeRef::parse(&input);
    }

    /// Property: the display form of any type parses back to the same type
    #[test]
    fn proptest_display_form_parses_back(ty in arb_type()) {
        let text = ty.to_string();

        let parsed = TypeRef::parse(&text);

        prop_assert!(parsed.is_ok(), "failed to parse {}", text);
        prop_assert_eq!(parsed.unwrap(), ty);
    }
}
