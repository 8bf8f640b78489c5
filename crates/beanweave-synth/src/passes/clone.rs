//! Deep copy through `cloneTo(target)` and `clone()`.
//!
//! Values that may be shared (primitives, immutable values, enums and opaque
//! `Object` content) are copied by reference. Everything else is duplicated:
//! arrays through the array helper, lists element by element, the
//! any-attribute map shallowly, nested types through their own `clone()`.

use super::{add_method, override_annotation, stamp};
use crate::ancestry::Lineage;
use crate::classify::TypeCategory;
use crate::error::SynthResult;
use crate::fields::{InstanceField, all_instance_fields};
use crate::report::PassReport;
use crate::synthesizer::{SynthContext, Synthesizer};
use beanweave_core::ast::{Block, Expr};
use beanweave_core::naming::getter_name;
use beanweave_core::{Annotation, ClassKind, ClassNode, ClassRef, MethodDef, Param, TypeRef};
use tracing::{debug, info};

/// Synthesizes `cloneTo(target)` and `clone()`.
pub struct Cloneable;

impl Cloneable {
    pub const OPTION: &'static str = "Xph-cloneable2";
}

impl Synthesizer for Cloneable {
    fn option_name(&self) -> &'static str {
        Self::OPTION
    }

    fn usage(&self) -> &'static str {
        "implement clone() of IExplicitlyCloneable interface and cloneTo(target)"
    }

    fn run(&self, ctx: &mut SynthContext) -> SynthResult<PassReport> {
        info!("Running -{}", Self::OPTION);
        let mut report = PassReport::new(Self::OPTION);
        let interface = ClassRef::new(ctx.config.runtime.cloneable_interface.clone());

        for index in 0..ctx.model.classes.len() {
            let class = &ctx.model.classes[index];
            if class.kind == ClassKind::Enum {
                continue;
            }
            let lineage = Lineage::of(&ctx.model, class);
            let fields = all_instance_fields(class)?;
            let clone_to = stamp(clone_to_method(ctx, class, &fields, lineage), ctx, Self::OPTION);
            let clone = stamp(clone_method(ctx, class), ctx, Self::OPTION);
            let note = ctx.config.class_note(Self::OPTION);

            let class = &mut ctx.model.classes[index];
            if lineage.is_root() && !class.interfaces.contains(&interface) {
                class.interfaces.push(interface.clone());
            }
            let added_clone_to = add_method(class, clone_to, &mut report);
            let added_clone = add_method(class, clone, &mut report);
            if added_clone_to || added_clone {
                debug!("Added clone methods to {}", class.name);
                class.add_javadoc_note(note);
                report.touch_class();
            }
        }

        Ok(report)
    }
}

fn clone_to_method(
    ctx: &SynthContext,
    class: &ClassNode,
    fields: &[InstanceField],
    lineage: Lineage,
) -> MethodDef {
    let target = Expr::name("ret");
    let mut body = Block::new();

    if !lineage.is_root() {
        body.expr(Expr::Super.invoke("cloneTo", vec![target.clone()]));
    }

    for field in fields {
        let value = Expr::name(&field.name);
        let destination = target.clone().field(&field.name);

        if field.ty.is_erasure("List") {
            let elem = field
                .ty
                .first_type_arg()
                .map(|t| t.unwrap_wildcard().clone())
                .unwrap_or_else(|| TypeRef::class("java.lang.Object"));
            let list_type = TypeRef::list_of(elem.clone());
            let local = format!("ret{}", field.accessor);

            let mut loop_body = Block::new();
            loop_body.expr(Expr::name(&local).invoke(
                "add",
                vec![clone_value(ctx, &elem, Expr::name("aItem"))],
            ));

            let mut copy = Block::new();
            copy.decl(
                list_type,
                &local,
                Expr::new_instance(TypeRef::generic("java.util.ArrayList", vec![elem.clone()]), vec![]),
            )
            .for_each(
                elem,
                "aItem",
                Expr::call(getter_name(&field.ty, &field.accessor), vec![]),
                loop_body,
            )
            .assign(destination.clone(), Expr::name(&local));

            body.if_else(value.is_null(), null_assignment(destination), copy);
        } else if field.ty.is_erasure("Map") {
            let args = field
                .ty
                .as_class()
                .map(|c| c.args.clone())
                .unwrap_or_default();
            let mut copy = Block::new();
            copy.assign(
                destination.clone(),
                Expr::new_instance(TypeRef::generic("java.util.HashMap", args), vec![value.clone()]),
            );
            body.if_else(value.is_null(), null_assignment(destination), copy);
        } else {
            body.assign(destination, clone_value(ctx, &field.ty, value));
        }
    }

    let runtime = &ctx.config.runtime;
    let mut method = MethodDef::new("cloneTo", TypeRef::Void)
        .with_param(Param::new("ret", class.as_type()).annotate(Annotation::new(&runtime.non_null)))
        .with_body(body);
    method
        .javadoc
        .line("This method clones all values from <code>this</code> to the passed object. All data in the parameter object is overwritten!")
        .param("ret", "The target object to clone to. May not be <code>null</code>.");
    method
}

fn null_assignment(destination: Expr) -> Block {
    let mut block = Block::new();
    block.assign(destination, Expr::Null);
    block
}

/// Expression producing an independent copy of `value` of type `ty`.
fn clone_value(ctx: &SynthContext, ty: &TypeRef, value: Expr) -> Expr {
    let runtime = &ctx.config.runtime;
    match ctx.classifier.classify(&ctx.model, ty) {
        category if category.is_shareable() => value,
        TypeCategory::ArrayOfImmutable => {
            Expr::static_call(&runtime.array_helper, "getCopy", vec![value])
        }
        TypeCategory::ExternallyCloneable => Expr::null_or(
            value.clone(),
            value.invoke("clone", vec![]).cast(ty.clone()),
        ),
        TypeCategory::WrappedUnionElement => {
            Expr::static_call(&runtime.jaxb_helper, "getClonedJAXBElement", vec![value])
        }
        _ => Expr::null_or(value.clone(), value.invoke("clone", vec![])),
    }
}

fn clone_method(ctx: &SynthContext, class: &ClassNode) -> MethodDef {
    let runtime = &ctx.config.runtime;
    let class_type = class.as_type();
    let method = MethodDef::new("clone", class_type.clone())
        .annotate(Annotation::new(&runtime.non_null))
        .annotate(Annotation::new(&runtime.returns_mutable_copy))
        .annotate(override_annotation());

    let mut method = if class.is_abstract {
        method.into_abstract()
    } else {
        let mut body = Block::new();
        body.decl(
            class_type.clone(),
            "ret",
            Expr::new_instance(class_type, vec![]),
        )
        .expr(Expr::call("cloneTo", vec![Expr::name("ret")]))
        .ret(Expr::name("ret"));
        method.with_body(body)
    };
    method.javadoc.returns("The cloned object. Never <code>null</code>.");
    method
}
