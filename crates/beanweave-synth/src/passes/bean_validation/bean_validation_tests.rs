#![allow(non_snake_case)]

use super::*;
use crate::test_support::{model_of, render, run_pass, ty};
use beanweave_core::{ClassNode, SynthConfig};
use test_case::test_case;

const CONSTRAINTS: &str = "jakarta.validation.constraints.";

fn element(min_occurs: u32, max_occurs: MaxOccurs, simple_type: Option<SimpleTypeInfo>) -> PropertyKind {
    PropertyKind::Element {
        min_occurs,
        max_occurs,
        required: min_occurs > 0,
        term: ParticleTerm::Element { simple_type },
    }
}

fn class_with_property(field_type: &str, kind: PropertyKind) -> ClassNode {
    let mut class = ClassNode::new("com.example.PartyType");
    class.fields.push(FieldNode::new("code", ty(field_type)));
    class.properties.push(PropertyInfo::new("code", "Code", kind));
    class
}

fn annotations(model: &CodeModel) -> &[Annotation] {
    &model.class("com.example.PartyType").unwrap().fields[0].annotations
}

fn find<'a>(model: &'a CodeModel, simple_name: &str) -> Option<&'a Annotation> {
    let name = format!("{}{}", CONSTRAINTS, simple_name);
    annotations(model).iter().find(|a| a.class.name == name)
}

fn facets(pairs: &[(&str, &str)]) -> SimpleTypeInfo {
    pairs
        .iter()
        .fold(SimpleTypeInfo::default(), |st, (name, value)| st.with_facet(name, *value))
}

#[test]
fn BeanValidation___option_names___follow_dialect() {
    assert_eq!(BeanValidation::jsr303().option_name(), "Xph-bean-validation10");
    assert_eq!(BeanValidation::jsr349().option_name(), "Xph-bean-validation11");
    assert!(BeanValidation::jsr349().usage().contains("JSR 349"));
}

#[test]
fn BeanValidation___required_element___gets_not_null() {
    let class = class_with_property("java.lang.String", element(1, MaxOccurs::One, None));

    let (model, report) = run_pass(&BeanValidation::jsr303(), model_of(vec![class]));

    assert!(find(&model, "NotNull").is_some());
    assert_eq!(report.members_added, 1);
    assert_eq!(report.classes_touched, 1);
}

#[test]
fn BeanValidation___optional_element___has_no_not_null() {
    let class = class_with_property("java.lang.String", element(0, MaxOccurs::One, None));

    let (model, _) = run_pass(&BeanValidation::jsr303(), model_of(vec![class]));

    assert!(find(&model, "NotNull").is_none());
}

#[test]
fn BeanValidation___bounded_repetition___gets_size_range() {
    let class = class_with_property(
        "java.util.List<java.lang.String>",
        element(2, MaxOccurs::Bounded(5), None),
    );

    let (model, _) = run_pass(&BeanValidation::jsr303(), model_of(vec![class]));

    let size = find(&model, "Size").unwrap();
    assert_eq!(size.get("min"), Some(&AnnotationValue::Int(2)));
    assert_eq!(size.get("max"), Some(&AnnotationValue::Int(5)));
}

#[test]
fn BeanValidation___unbounded_repetition___gets_size_minimum_only() {
    let class = class_with_property(
        "java.util.List<java.lang.String>",
        element(1, MaxOccurs::Unbounded, None),
    );

    let (model, _) = run_pass(&BeanValidation::jsr303(), model_of(vec![class]));

    let size = find(&model, "Size").unwrap();
    assert_eq!(size.params, vec![("min".to_string(), AnnotationValue::Int(1))]);
}

#[test_case("java.util.List<java.lang.String>", true ; "list")]
#[test_case("java.util.Map<java.lang.String, java.lang.String>", true ; "map")]
#[test_case("byte[]", true ; "array")]
#[test_case("com.example.AddressType", true ; "generated class")]
#[test_case("java.lang.String", false ; "plain string")]
fn BeanValidation___nested_types___get_valid(field_type: &str, expected: bool) {
    let class = class_with_property(field_type, element(0, MaxOccurs::One, None));
    let address = ClassNode::new("com.example.AddressType");

    let (model, _) = run_pass(&BeanValidation::jsr303(), model_of(vec![class, address]));

    let valid = annotations(&model)
        .iter()
        .any(|a| a.class.name == "jakarta.validation.Valid");
    assert_eq!(valid, expected);
}

#[test]
fn BeanValidation___length_facets_on_string___give_size() {
    let simple = facets(&[(facet::MIN_LENGTH, "1"), (facet::MAX_LENGTH, "20")]);
    let class = class_with_property("java.lang.String", element(0, MaxOccurs::One, Some(simple)));

    let (model, _) = run_pass(&BeanValidation::jsr303(), model_of(vec![class]));
    let source = render(&model, "com.example.PartyType");

    assert!(source.contains("import jakarta.validation.constraints.Size;"));
    assert!(source.contains("@Size(min = 1, max = 20)"));
}

#[test]
fn BeanValidation___length_facets_on_number___are_ignored() {
    let simple = facets(&[(facet::MAX_LENGTH, "20")]);
    let class = class_with_property("java.math.BigDecimal", element(0, MaxOccurs::One, Some(simple)));

    let (model, _) = run_pass(&BeanValidation::jsr303(), model_of(vec![class]));

    assert!(find(&model, "Size").is_none());
}

#[test]
fn BeanValidation___pattern_facet___gives_pattern() {
    let simple = facets(&[(facet::PATTERN, "[A-Z]{3}")]);
    let class = class_with_property("java.lang.String", element(0, MaxOccurs::One, Some(simple)));

    let (model, _) = run_pass(&BeanValidation::jsr303(), model_of(vec![class]));

    assert_eq!(
        find(&model, "Pattern").unwrap().get("regexp"),
        Some(&AnnotationValue::Str("[A-Z]{3}".into()))
    );
}

#[test]
fn BeanValidation___match_all_pattern___is_skipped() {
    let simple = facets(&[(facet::PATTERN, "\\c+")]);
    let class = class_with_property("java.lang.String", element(0, MaxOccurs::One, Some(simple)));

    let (model, _) = run_pass(&BeanValidation::jsr303(), model_of(vec![class]));

    assert!(find(&model, "Pattern").is_none());
}

#[test]
fn BeanValidation___inclusive_bounds___give_decimal_min_max() {
    let simple = facets(&[(facet::MIN_INCLUSIVE, "0"), (facet::MAX_INCLUSIVE, "100")]);
    let class = class_with_property("int", element(0, MaxOccurs::One, Some(simple)));

    let (model, _) = run_pass(&BeanValidation::jsr349(), model_of(vec![class]));

    let max = find(&model, "DecimalMax").unwrap();
    assert_eq!(max.params, vec![("value".to_string(), AnnotationValue::Str("100".into()))]);
    let min = find(&model, "DecimalMin").unwrap();
    assert_eq!(min.get("value"), Some(&AnnotationValue::Str("0".into())));
}

#[test_case(BeanValidation::jsr303(), None ; "bean validation 1.0")]
#[test_case(BeanValidation::jsr349(), Some(AnnotationValue::Bool(false)) ; "bean validation 1.1")]
fn BeanValidation___exclusive_bound___flag_depends_on_dialect(
    pass: BeanValidation,
    inclusive: Option<AnnotationValue>,
) {
    let simple = facets(&[(facet::MAX_EXCLUSIVE, "10")]);
    let class = class_with_property("java.lang.Long", element(0, MaxOccurs::One, Some(simple)));

    let (model, _) = run_pass(&pass, model_of(vec![class]));

    let max = find(&model, "DecimalMax").unwrap();
    assert_eq!(max.get("value"), Some(&AnnotationValue::Str("10".into())));
    assert_eq!(max.get("inclusive"), inclusive.as_ref());
}

#[test_case("9223372036854775807")]
#[test_case("2147483647")]
#[test_case("-9223372036854775808")]
#[test_case("-2147483648")]
fn BeanValidation___sentinel_bound___is_dropped(literal: &str) {
    let simple = facets(&[(facet::MAX_INCLUSIVE, literal), (facet::MIN_INCLUSIVE, literal)]);
    let class = class_with_property("long", element(0, MaxOccurs::One, Some(simple)));

    let (model, _) = run_pass(&BeanValidation::jsr303(), model_of(vec![class]));

    assert!(find(&model, "DecimalMax").is_none());
    assert!(find(&model, "DecimalMin").is_none());
}

#[test]
fn BeanValidation___range_on_non_numeric___is_ignored() {
    let simple = facets(&[(facet::MAX_INCLUSIVE, "100")]);
    let class = class_with_property("boolean", element(0, MaxOccurs::One, Some(simple)));

    let (model, _) = run_pass(&BeanValidation::jsr303(), model_of(vec![class]));

    assert!(find(&model, "DecimalMax").is_none());
}

#[test]
fn BeanValidation___total_and_fraction_digits___split_integer_part() {
    let simple = facets(&[(facet::TOTAL_DIGITS, "10"), (facet::FRACTION_DIGITS, "2")]);
    let class = class_with_property("java.math.BigDecimal", element(0, MaxOccurs::One, Some(simple)));

    let (model, _) = run_pass(&BeanValidation::jsr303(), model_of(vec![class]));

    let digits = find(&model, "Digits").unwrap();
    assert_eq!(
        digits.params,
        vec![
            ("integer".to_string(), AnnotationValue::Int(8)),
            ("fraction".to_string(), AnnotationValue::Int(2)),
        ]
    );
}

#[test]
fn BeanValidation___length_beyond_int_range___is_dropped() {
    let simple = facets(&[(facet::MIN_LENGTH, "1"), (facet::MAX_LENGTH, "9999999999")]);
    let class = class_with_property("java.lang.String", element(0, MaxOccurs::One, Some(simple)));

    let (model, _) = run_pass(&BeanValidation::jsr303(), model_of(vec![class]));

    let size = find(&model, "Size").unwrap();
    assert_eq!(size.params, vec![("min".to_string(), AnnotationValue::Int(1))]);
}

#[test_case("5000000000", None ; "total beyond int range")]
#[test_case("-2147483648", Some(-2147483648) ; "integer part would underflow")]
fn BeanValidation___extreme_total_digits___stays_within_int(total: &str, integer: Option<i64>) {
    let simple = facets(&[(facet::TOTAL_DIGITS, total), (facet::FRACTION_DIGITS, "1")]);
    let class = class_with_property("java.math.BigDecimal", element(0, MaxOccurs::One, Some(simple)));

    let (model, _) = run_pass(&BeanValidation::jsr303(), model_of(vec![class]));

    let digits = find(&model, "Digits").map(|d| d.params.clone());
    assert_eq!(
        digits,
        integer.map(|i| vec![("integer".to_string(), AnnotationValue::Int(i))])
    );
}

#[test]
fn BeanValidation___total_digits_only___sets_integer() {
    let simple = facets(&[(facet::TOTAL_DIGITS, "5")]);
    let class = class_with_property("java.math.BigInteger", element(0, MaxOccurs::One, Some(simple)));

    let (model, _) = run_pass(&BeanValidation::jsr303(), model_of(vec![class]));

    let digits = find(&model, "Digits").unwrap();
    assert_eq!(digits.params, vec![("integer".to_string(), AnnotationValue::Int(5))]);
}

#[test]
fn BeanValidation___required_attribute___gets_not_null_and_facets() {
    let kind = PropertyKind::Attribute {
        required: true,
        simple_type: Some(facets(&[(facet::MAX_LENGTH, "3")])),
    };
    let class = class_with_property("java.lang.String", kind);

    let (model, _) = run_pass(&BeanValidation::jsr303(), model_of(vec![class]));

    assert!(find(&model, "NotNull").is_some());
    assert_eq!(
        find(&model, "Size").unwrap().params,
        vec![("max".to_string(), AnnotationValue::Int(3))]
    );
}

#[test]
fn BeanValidation___value_property___gets_facets_only() {
    let kind = PropertyKind::Value {
        simple_type: Some(facets(&[(facet::PATTERN, "\\d+")])),
    };
    let class = class_with_property("java.lang.String", kind);

    let (model, _) = run_pass(&BeanValidation::jsr303(), model_of(vec![class]));

    assert_eq!(annotations(&model).len(), 1);
    assert!(find(&model, "Pattern").is_some());
}

#[test]
fn BeanValidation___reference_property___is_ignored() {
    let class = class_with_property("java.lang.Object", PropertyKind::Reference);

    let (model, report) = run_pass(&BeanValidation::jsr303(), model_of(vec![class]));

    assert!(annotations(&model).is_empty());
    assert_eq!(report.classes_touched, 0);
}

#[test]
fn BeanValidation___unsupported_term___is_reported_and_skipped() {
    let kind = PropertyKind::Element {
        min_occurs: 1,
        max_occurs: MaxOccurs::One,
        required: true,
        term: ParticleTerm::Unsupported {
            description: "wildcard".into(),
        },
    };
    let class = class_with_property("java.lang.String", kind);

    let (model, report) = run_pass(&BeanValidation::jsr303(), model_of(vec![class]));

    assert_eq!(
        report.skipped,
        vec![SkipReason::Unsupported {
            class: "com.example.PartyType".into(),
            field: "code".into(),
            description: "wildcard".into(),
        }]
    );
    assert!(find(&model, "NotNull").is_some());
}

#[test]
fn BeanValidation___property_without_field___aborts() {
    let mut class = ClassNode::new("com.example.PartyType");
    class
        .properties
        .push(PropertyInfo::new("code", "Code", element(1, MaxOccurs::One, None)));
    let mut ctx = SynthContext::new(model_of(vec![class]), SynthConfig::default());

    let err = BeanValidation::jsr303().run(&mut ctx).unwrap_err();

    assert!(matches!(err, SynthError::MissingField { ref field, .. } if field == "code"));
}

#[test]
fn BeanValidation___second_run___adds_nothing() {
    let simple = facets(&[
        (facet::MIN_LENGTH, "1"),
        (facet::MAX_LENGTH, "20"),
        (facet::PATTERN, "[a-z]+"),
    ]);
    let class = class_with_property("java.lang.String", element(1, MaxOccurs::One, Some(simple)));

    let (model, first) = run_pass(&BeanValidation::jsr349(), model_of(vec![class]));
    let (model, second) = run_pass(&BeanValidation::jsr349(), model);

    assert_eq!(first.members_added, 3);
    assert_eq!(second.members_added, 0);
    assert_eq!(annotations(&model).len(), 3);
}

#[test]
fn BeanValidation___configured_package___is_used() {
    let class = class_with_property("java.lang.String", element(1, MaxOccurs::One, None));
    let mut config = SynthConfig::default();
    config.validation.package = "javax.validation".into();
    let mut ctx = SynthContext::new(model_of(vec![class]), config);

    BeanValidation::jsr303().run(&mut ctx).unwrap();

    let model = ctx.into_model();
    assert_eq!(
        annotations(&model)[0].class.name,
        "javax.validation.constraints.NotNull"
    );
}
