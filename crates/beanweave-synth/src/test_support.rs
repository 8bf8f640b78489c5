//! Builders shared by the pass tests.

use crate::report::PassReport;
use crate::synthesizer::{SynthContext, Synthesizer};
use beanweave_core::naming::capitalize;
use beanweave_core::{
    ClassNode, ClassRef, CodeModel, FieldNode, MethodDef, PropertyInfo, PropertyKind,
    SynthConfig, TypeRef, java,
};

pub(crate) fn ty(s: &str) -> TypeRef {
    TypeRef::parse(s).unwrap()
}

/// A class whose fields each have a reference property named after the field.
pub(crate) fn class_with(name: &str, parent: Option<&str>, fields: &[(&str, &str)]) -> ClassNode {
    let mut class = ClassNode::new(name);
    class.parent = parent.map(ClassRef::new);
    for (field, field_type) in fields {
        class.fields.push(FieldNode::new(*field, ty(field_type)));
        class.properties.push(PropertyInfo::new(
            *field,
            capitalize(field),
            PropertyKind::Reference,
        ));
    }
    class
}

/// A schema getter with an empty body.
pub(crate) fn getter(name: &str, return_type: &str) -> MethodDef {
    MethodDef::new(name, ty(return_type))
}

pub(crate) fn model_of(classes: Vec<ClassNode>) -> CodeModel {
    let mut model = CodeModel::new();
    for class in classes {
        model.add_class(class);
    }
    model
}

pub(crate) fn run_pass(pass: &dyn Synthesizer, model: CodeModel) -> (CodeModel, PassReport) {
    run_pass_with(pass, model, SynthConfig::default())
}

pub(crate) fn run_pass_with(
    pass: &dyn Synthesizer,
    model: CodeModel,
    config: SynthConfig,
) -> (CodeModel, PassReport) {
    let mut ctx = SynthContext::new(model, config);
    ctx.set_active([pass.option_name()]);
    let report = pass.run(&mut ctx).unwrap();
    (ctx.into_model(), report)
}

pub(crate) fn render(model: &CodeModel, class: &str) -> String {
    java::render_class(model.class(class).unwrap())
}

pub(crate) fn method<'a>(model: &'a CodeModel, class: &str, name: &str) -> Option<&'a MethodDef> {
    model
        .class(class)
        .unwrap()
        .methods
        .iter()
        .find(|m| m.name == name)
}
