#![allow(non_snake_case)]

use super::*;
use crate::test_support::{class_with, getter, model_of};
use beanweave_core::{ClassRef, CodeModel, SynthConfig};

fn names(passes: &[&dyn Synthesizer]) -> Vec<&'static str> {
    passes.iter().map(|p| p.option_name()).collect()
}

fn context(model: CodeModel) -> SynthContext {
    SynthContext::new(model, SynthConfig::default())
}

#[test]
fn Engine___registry___lists_all_passes_in_canonical_order() {
    let engine = Engine::new();

    let options: Vec<_> = engine.synthesizers().map(|p| p.option_name()).collect();

    assert_eq!(
        options,
        vec![
            "Xph-offset-dt-extension",
            "Xph-value-extender",
            "Xph-list-extension",
            "Xph-equalshashcode",
            "Xph-tostring",
            "Xph-cloneable2",
            "Xph-bean-validation10",
            "Xph-bean-validation11",
            "Xph-implements",
            "Xph-fields-private",
            "Xph-code-quality",
            "Xph-csu",
            "Xph-package-null-marked",
        ]
    );
    assert!(engine.synthesizers().all(|p| !p.usage().is_empty()));
}

#[test]
fn Engine___select___reorders_and_deduplicates() {
    let engine = Engine::new();

    let selected = engine
        .select(&["-Xph-list-extension", "Xph-value-extender", "Xph-list-extension"])
        .unwrap();

    assert_eq!(names(&selected), vec!["Xph-value-extender", "Xph-list-extension"]);
}

#[test]
fn Engine___select_unknown_option___fails() {
    let engine = Engine::new();

    let err = engine.select(&["Xph-tostring", "-Xnope"]).err().unwrap();

    assert!(matches!(err, SynthError::UnknownPass(ref name) if name == "Xnope"));
    assert!(!err.is_fatal());
}

#[test]
fn Engine___run___reports_each_selected_pass() {
    let engine = Engine::new();
    let mut order = class_with(
        "com.example.OrderType",
        None,
        &[("lines", "java.util.List<java.lang.String>")],
    );
    order
        .methods
        .push(getter("getLines", "java.util.List<java.lang.String>"));
    let mut ctx = context(model_of(vec![order]));

    let report = engine
        .run(&mut ctx, &["Xph-tostring", "Xph-list-extension"])
        .unwrap();

    assert_eq!(report.passes.len(), 2);
    assert_eq!(report.passes[0].option, "Xph-list-extension");
    assert_eq!(report.passes[1].option, "Xph-tostring");
    assert!(report.members_added() > 0);
    assert!(ctx.is_active("Xph-list-extension"));
    assert!(!ctx.is_active("Xph-cloneable2"));
}

#[test]
fn Engine___run_with_no_options___changes_nothing() {
    let engine = Engine::new();
    let model = model_of(vec![class_with("com.example.PartyType", None, &[])]);
    let mut ctx = context(model.clone());

    let report = engine.run(&mut ctx, &[] as &[&str]).unwrap();

    assert!(report.passes.is_empty());
    assert_eq!(ctx.into_model(), model);
}

#[test]
fn Engine___cyclic_model___is_rejected_before_any_pass() {
    let engine = Engine::new();
    let mut a = class_with("com.example.A", None, &[]);
    a.parent = Some(ClassRef::new("com.example.B"));
    let b = class_with("com.example.B", Some("com.example.A"), &[]);
    let mut ctx = context(model_of(vec![a, b]));

    let err = engine.run(&mut ctx, &["Xph-tostring"]).unwrap_err();

    assert!(matches!(err, SynthError::Model(_)));
    assert!(ctx.model.classes.iter().all(|c| c.methods.is_empty()));
}

#[test]
fn Engine___failing_pass___aborts_run() {
    let engine = Engine::new();
    let mut class = class_with("com.example.PartyType", None, &[("name", "java.lang.String")]);
    class.properties.clear();
    let mut ctx = context(model_of(vec![class]));

    let err = engine.run(&mut ctx, &["Xph-equalshashcode"]).unwrap_err();

    assert!(matches!(err, SynthError::UnknownProperty { .. }));
    assert!(err.is_fatal());
}

#[test]
fn Engine___implements_without_interfaces___aborts_with_usage_error() {
    let engine = Engine::new();
    let mut ctx = context(model_of(vec![class_with("com.example.PartyType", None, &[])]));

    let err = engine.run(&mut ctx, &["Xph-implements"]).unwrap_err();

    assert!(matches!(err, SynthError::MissingArgument { ref option, .. } if option == "Xph-implements"));
    assert!(!err.is_fatal());
}
