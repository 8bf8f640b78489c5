#![allow(non_snake_case)]

use super::*;
use crate::test_support::{class_with, model_of, render, run_pass};
use beanweave_core::ClassNode;

#[test]
fn EqualsHashCode___root_class___compares_exact_class_and_fields() {
    let model = model_of(vec![class_with(
        "com.example.PartyType",
        None,
        &[("name", "java.lang.String"), ("count", "int")],
    )]);

    let (model, report) = run_pass(&EqualsHashCode, model);
    let source = render(&model, "com.example.PartyType");

    assert!(source.contains("public boolean equals(final Object o) {"));
    assert!(source.contains("if (o == this) {"));
    assert!(source.contains("if (o == null || !getClass().equals(o.getClass())) {"));
    assert!(source.contains("final PartyType rhs = (PartyType) o;"));
    assert!(source.contains("if (!EqualsHelper.equals(name, rhs.name)) {"));
    assert!(source.contains("if (!EqualsHelper.equals(count, rhs.count)) {"));
    assert!(source.contains("return new HashCodeGenerator(this).append(name).append(count).getHashCode();"));
    assert!(source.contains("import com.helger.base.equals.EqualsHelper;"));
    assert_eq!(report.members_added, 2);
    assert_eq!(report.classes_touched, 1);
}

#[test]
fn EqualsHashCode___derived_class_without_fields___delegates_to_super() {
    let model = model_of(vec![
        class_with("com.example.BaseType", None, &[("id", "java.lang.String")]),
        class_with("com.example.ChildType", Some("com.example.BaseType"), &[]),
    ]);

    let (model, _) = run_pass(&EqualsHashCode, model);
    let source = render(&model, "com.example.ChildType");

    assert!(source.contains("return super.equals(o);"));
    assert!(source.contains("return super.hashCode();"));
    assert!(!source.contains("rhs"));
}

#[test]
fn EqualsHashCode___derived_class_with_fields___requires_super_equality() {
    let model = model_of(vec![class_with(
        "com.example.ChildType",
        Some("org.example.ExternalBase"),
        &[("code", "java.lang.String")],
    )]);

    let (model, _) = run_pass(&EqualsHashCode, model);
    let source = render(&model, "com.example.ChildType");

    assert!(source.contains("if (!super.equals(o)) {"));
    assert!(!source.contains("getClass()"));
    assert!(source.contains(
        "return HashCodeGenerator.getDerived(super.hashCode()).append(code).getHashCode();"
    ));
}

#[test]
fn EqualsHashCode___collection_categories___use_dedicated_helpers() {
    let model = model_of(vec![
        class_with("com.example.LineType", None, &[]),
        class_with(
            "com.example.OrderType",
            None,
            &[
                ("lines", "java.util.List<com.example.LineType>"),
                ("any", "java.util.List<java.lang.Object>"),
                ("content", "java.util.List<jakarta.xml.bind.JAXBElement<?>>"),
                ("typed", "java.util.List<jakarta.xml.bind.JAXBElement<com.example.LineType>>"),
                ("choice", "jakarta.xml.bind.JAXBElement<java.lang.String>"),
            ],
        ),
    ]);

    let (model, _) = run_pass(&EqualsHashCode, model);
    let source = render(&model, "com.example.OrderType");

    assert!(source.contains("CollectionEqualsHelper.equalsCollection(lines, rhs.lines)"));
    assert!(source.contains("JAXBHelper.equalListAnys(any, rhs.any)"));
    assert!(source.contains("JAXBHelper.equalListJAXBElements(content, rhs.content)"));
    assert!(source.contains(
        "JAXBHelper.equalListJAXBElements(GenericReflection.uncheckedCast(typed), GenericReflection.uncheckedCast(rhs.typed))"
    ));
    assert!(source.contains("JAXBHelper.equalJAXBElements(choice, rhs.choice)"));
    assert!(source.contains(".append(JAXBHelper.getListAnyHashCode(any))"));
    assert!(source.contains(".append(JAXBHelper.getListJAXBElementHashCode(content))"));
    assert!(source.contains(".append(JAXBHelper.getHashCode(choice))"));
}

#[test]
fn EqualsHashCode___generic_object___dispatches_on_dom_nodes() {
    let model = model_of(vec![class_with(
        "com.example.ExtensionType",
        None,
        &[("any", "java.lang.Object")],
    )]);

    let (model, _) = run_pass(&EqualsHashCode, model);
    let source = render(&model, "com.example.ExtensionType");

    assert!(source.contains(
        "any instanceof Node && rhs.any instanceof Node ? JAXBHelper.equalDOMNodes((Node) any, (Node) rhs.any) : EqualsHelper.equals(any, rhs.any)"
    ));
    assert!(source.contains(
        "any instanceof Node ? JAXBHelper.getHashCode((Node) any) : HashCodeCalculator.hashCode(any)"
    ));
    assert!(source.contains("import org.w3c.dom.Node;"));
}

#[test]
fn EqualsHashCode___enums___are_skipped() {
    let mut color = ClassNode::new("com.example.ColorType");
    color.kind = ClassKind::Enum;
    let model = model_of(vec![color]);

    let (model, report) = run_pass(&EqualsHashCode, model);

    assert!(model.class("com.example.ColorType").unwrap().methods.is_empty());
    assert_eq!(report.classes_touched, 0);
}

#[test]
fn EqualsHashCode___existing_equals___is_kept_and_reported() {
    let mut class = class_with("com.example.PartyType", None, &[("name", "java.lang.String")]);
    class.methods.push(
        MethodDef::new("equals", TypeRef::Primitive(Primitive::Boolean))
            .with_param(Param::new("o", TypeRef::class(JAVA_OBJECT))),
    );
    let model = model_of(vec![class]);

    let (model, report) = run_pass(&EqualsHashCode, model);

    let equals_count = model
        .class("com.example.PartyType")
        .unwrap()
        .methods
        .iter()
        .filter(|m| m.name == "equals")
        .count();
    assert_eq!(equals_count, 1);
    assert_eq!(report.members_added, 1);
    assert_eq!(report.skipped.len(), 1);
}

#[test]
fn EqualsHashCode___members___carry_provenance_and_class_note() {
    let model = model_of(vec![class_with("com.example.PartyType", None, &[])]);

    let (model, _) = run_pass(&EqualsHashCode, model);
    let class = model.class("com.example.PartyType").unwrap();

    assert_eq!(
        class.methods[0].javadoc.lines,
        vec!["Created by ph-jaxb-plugin -Xph-equalshashcode".to_string()]
    );
    assert_eq!(
        class.javadoc,
        vec!["<p>This class contains methods created by ph-jaxb-plugin -Xph-equalshashcode</p>".to_string()]
    );
}

#[test]
fn EqualsHashCode___unknown_property___aborts_run() {
    let mut class = ClassNode::new("com.example.PartyType");
    class
        .fields
        .push(beanweave_core::FieldNode::new("orphan", TypeRef::class("java.lang.String")));
    let mut ctx = SynthContext::new(model_of(vec![class]), beanweave_core::SynthConfig::default());

    let result = EqualsHashCode.run(&mut ctx);

    assert!(matches!(
        result,
        Err(crate::SynthError::UnknownProperty { .. })
    ));
}
