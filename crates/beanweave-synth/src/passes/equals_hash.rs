//! `equals` and `hashCode` built on the runtime equality helpers.

use super::{add_method, override_annotation, stamp};
use crate::ancestry::Lineage;
use crate::classify::TypeCategory;
use crate::error::SynthResult;
use crate::fields::{InstanceField, all_instance_fields};
use crate::report::PassReport;
use crate::synthesizer::{SynthContext, Synthesizer};
use beanweave_core::ast::{Block, Expr};
use beanweave_core::{ClassKind, ClassNode, JAVA_OBJECT, MethodDef, Param, Primitive, TypeRef};
use tracing::{debug, info};

/// Synthesizes `equals(Object)` and `hashCode()`.
pub struct EqualsHashCode;

impl EqualsHashCode {
    pub const OPTION: &'static str = "Xph-equalshashcode";
}

impl Synthesizer for EqualsHashCode {
    fn option_name(&self) -> &'static str {
        Self::OPTION
    }

    fn usage(&self) -> &'static str {
        "auto implement equals and hashCode using com.helger.base.equals.EqualsHelper and com.helger.base.hashcode.HashCodeGenerator"
    }

    fn run(&self, ctx: &mut SynthContext) -> SynthResult<PassReport> {
        info!("Running -{}", Self::OPTION);
        let mut report = PassReport::new(Self::OPTION);

        for index in 0..ctx.model.classes.len() {
            let class = &ctx.model.classes[index];
            if class.kind == ClassKind::Enum {
                continue;
            }
            let lineage = Lineage::of(&ctx.model, class);
            let fields = all_instance_fields(class)?;
            let equals = stamp(equals_method(ctx, class, &fields, lineage), ctx, Self::OPTION);
            let hash_code = stamp(hash_code_method(ctx, &fields, lineage), ctx, Self::OPTION);
            let note = ctx.config.class_note(Self::OPTION);

            let class = &mut ctx.model.classes[index];
            let added_equals = add_method(class, equals, &mut report);
            let added_hash = add_method(class, hash_code, &mut report);
            if added_equals || added_hash {
                debug!("Added equals/hashCode to {}", class.name);
                class.add_javadoc_note(note);
                report.touch_class();
            }
        }

        Ok(report)
    }
}

fn equals_method(
    ctx: &SynthContext,
    class: &ClassNode,
    fields: &[InstanceField],
    lineage: Lineage,
) -> MethodDef {
    let o = Expr::name("o");
    let mut body = Block::new();

    if !lineage.is_root() && fields.is_empty() {
        body.ret(Expr::Super.invoke("equals", vec![o]));
    } else {
        body.if_return(o.clone().eq(Expr::This), Expr::lit_bool(true));
        if lineage.is_root() {
            let same_class = Expr::call("getClass", vec![])
                .invoke("equals", vec![o.clone().invoke("getClass", vec![])]);
            body.if_return(o.clone().is_null().or(same_class.not()), Expr::lit_bool(false));
        } else {
            body.if_return(
                Expr::Super.invoke("equals", vec![o.clone()]).not(),
                Expr::lit_bool(false),
            );
        }

        if !fields.is_empty() {
            let class_type = class.as_type();
            body.decl(class_type.clone(), "rhs", o.cast(class_type));
            for field in fields {
                body.if_return(field_equals(ctx, field).not(), Expr::lit_bool(false));
            }
        }
        body.ret(Expr::lit_bool(true));
    }

    MethodDef::new("equals", TypeRef::Primitive(Primitive::Boolean))
        .with_param(Param::new("o", TypeRef::class(JAVA_OBJECT)))
        .annotate(override_annotation())
        .with_body(body)
}

fn hash_code_method(ctx: &SynthContext, fields: &[InstanceField], lineage: Lineage) -> MethodDef {
    let runtime = &ctx.config.runtime;
    let mut body = Block::new();

    if !lineage.is_root() && fields.is_empty() {
        body.ret(Expr::Super.invoke("hashCode", vec![]));
    } else {
        let mut generator = if lineage.is_root() {
            Expr::new_instance(TypeRef::class(&runtime.hash_code_generator), vec![Expr::This])
        } else {
            Expr::static_call(
                &runtime.hash_code_generator,
                "getDerived",
                vec![Expr::Super.invoke("hashCode", vec![])],
            )
        };
        for field in fields {
            generator = generator.invoke("append", vec![field_hash(ctx, field)]);
        }
        body.ret(generator.invoke("getHashCode", vec![]));
    }

    MethodDef::new("hashCode", TypeRef::Primitive(Primitive::Int))
        .annotate(override_annotation())
        .with_body(body)
}

/// Whether list elements `JAXBElement<X>` need an unchecked cast because `X`
/// is a generated class.
fn needs_unchecked_cast(ctx: &SynthContext, list_type: &TypeRef) -> bool {
    list_type
        .list_element()
        .map(TypeRef::unwrap_wildcard)
        .and_then(TypeRef::first_type_arg)
        .and_then(TypeRef::as_class)
        .is_some_and(|payload| ctx.model.is_generated(&payload.name))
}

fn unchecked(ctx: &SynthContext, expr: Expr) -> Expr {
    Expr::static_call(&ctx.config.runtime.generic_reflection, "uncheckedCast", vec![expr])
}

/// Boolean expression comparing one field of `this` and `rhs`.
fn field_equals(ctx: &SynthContext, field: &InstanceField) -> Expr {
    let runtime = &ctx.config.runtime;
    let mine = Expr::name(&field.name);
    let theirs = Expr::name("rhs").field(&field.name);

    match ctx.classifier.classify(&ctx.model, &field.ty) {
        TypeCategory::CollectionOfWrappedUnionElement => {
            let (mine, theirs) = if needs_unchecked_cast(ctx, &field.ty) {
                (unchecked(ctx, mine), unchecked(ctx, theirs))
            } else {
                (mine, theirs)
            };
            Expr::static_call(&runtime.jaxb_helper, "equalListJAXBElements", vec![mine, theirs])
        }
        TypeCategory::CollectionOfAny => {
            Expr::static_call(&runtime.jaxb_helper, "equalListAnys", vec![mine, theirs])
        }
        TypeCategory::CollectionOfOther => Expr::static_call(
            &runtime.collection_equals_helper,
            "equalsCollection",
            vec![mine, theirs],
        ),
        TypeCategory::WrappedUnionElement => {
            Expr::static_call(&runtime.jaxb_helper, "equalJAXBElements", vec![mine, theirs])
        }
        TypeCategory::GenericObject => {
            let node = TypeRef::class(&runtime.dom_node);
            Expr::cond(
                mine.clone()
                    .instance_of(node.clone())
                    .and(theirs.clone().instance_of(node.clone())),
                Expr::static_call(
                    &runtime.jaxb_helper,
                    "equalDOMNodes",
                    vec![mine.clone().cast(node.clone()), theirs.clone().cast(node)],
                ),
                Expr::static_call(&runtime.equals_helper, "equals", vec![mine, theirs]),
            )
        }
        _ => Expr::static_call(&runtime.equals_helper, "equals", vec![mine, theirs]),
    }
}

/// Argument appended to the hash code generator for one field.
fn field_hash(ctx: &SynthContext, field: &InstanceField) -> Expr {
    let runtime = &ctx.config.runtime;
    let value = Expr::name(&field.name);

    match ctx.classifier.classify(&ctx.model, &field.ty) {
        TypeCategory::CollectionOfWrappedUnionElement => {
            let value = if needs_unchecked_cast(ctx, &field.ty) {
                unchecked(ctx, value)
            } else {
                value
            };
            Expr::static_call(&runtime.jaxb_helper, "getListJAXBElementHashCode", vec![value])
        }
        TypeCategory::CollectionOfAny => {
            Expr::static_call(&runtime.jaxb_helper, "getListAnyHashCode", vec![value])
        }
        TypeCategory::WrappedUnionElement => {
            Expr::static_call(&runtime.jaxb_helper, "getHashCode", vec![value])
        }
        TypeCategory::GenericObject => {
            let node = TypeRef::class(&runtime.dom_node);
            Expr::cond(
                value.clone().instance_of(node.clone()),
                Expr::static_call(
                    &runtime.jaxb_helper,
                    "getHashCode",
                    vec![value.clone().cast(node)],
                ),
                Expr::static_call(&runtime.hash_code_calculator, "hashCode", vec![value]),
            )
        }
        _ => value,
    }
}

#[cfg(test)]
#[path = "equals_hash/equals_hash_tests.rs"]
mod equals_hash_tests;
