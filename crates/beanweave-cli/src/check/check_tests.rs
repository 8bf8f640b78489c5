#![allow(non_snake_case)]

use super::*;
use beanweave_core::{FieldNode, MaxOccurs, ParticleTerm, PropertyInfo, TypeRef};

fn string() -> TypeRef {
    TypeRef::class("java.lang.String")
}

#[test]
fn find_problems___consistent_class___has_none() {
    let mut class = ClassNode::new("com.example.PartyType");
    class.fields.push(FieldNode::new("name", string()));
    class
        .properties
        .push(PropertyInfo::new("name", "Name", PropertyKind::Reference));
    let mut model = CodeModel::new();
    model.add_class(class);

    assert!(find_problems(&model).is_empty());
}

#[test]
fn find_problems___field_without_property___is_reported() {
    let mut class = ClassNode::new("com.example.PartyType");
    class.fields.push(FieldNode::new("name", string()));
    let mut model = CodeModel::new();
    model.add_class(class);

    let problems = find_problems(&model);

    assert_eq!(problems.len(), 1);
    assert!(matches!(problems[0], SynthError::UnknownProperty { ref field, .. } if field == "name"));
}

#[test]
fn find_problems___property_without_field___is_reported() {
    let mut class = ClassNode::new("com.example.PartyType");
    class.properties.push(PropertyInfo::new(
        "name",
        "Name",
        PropertyKind::Element {
            min_occurs: 1,
            max_occurs: MaxOccurs::One,
            required: true,
            term: ParticleTerm::ModelGroup,
        },
    ));
    let mut model = CodeModel::new();
    model.add_class(class);

    let problems = find_problems(&model);

    assert_eq!(
        problems[0].to_string(),
        "property 'name' of com.example.PartyType has no backing field"
    );
}

#[test]
fn find_problems___enum___is_not_inspected() {
    let mut color = ClassNode::new("com.example.ColorType");
    color.kind = ClassKind::Enum;
    color.fields.push(FieldNode::new("value", string()));
    let mut model = CodeModel::new();
    model.add_class(color);

    assert!(find_problems(&model).is_empty());
}
