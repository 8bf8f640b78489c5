//! Convenience accessors for list properties.

use super::{add_method, nullness_annotation, stamp};
use crate::error::SynthResult;
use crate::fields::all_instance_fields;
use crate::report::{Outcome, PassReport, SkipReason};
use crate::synthesizer::{SynthContext, Synthesizer};
use beanweave_core::ast::{Block, Expr};
use beanweave_core::naming::{setter_name, strip_accessor};
use beanweave_core::{
    Annotation, ClassKind, ClassNode, ClassRef, MethodDef, Param, Primitive, TypeRef,
};
use tracing::{info, warn};

/// Synthesizes setters, emptiness checks, counts, indexed access and `add`
/// for every list property.
pub struct ListExtension;

impl ListExtension {
    pub const OPTION: &'static str = "Xph-list-extension";
}

impl Synthesizer for ListExtension {
    fn option_name(&self) -> &'static str {
        Self::OPTION
    }

    fn usage(&self) -> &'static str {
        "add additional methods for List types"
    }

    fn run(&self, ctx: &mut SynthContext) -> SynthResult<PassReport> {
        info!("Running -{}", Self::OPTION);
        let mut report = PassReport::new(Self::OPTION);
        let runtime = ctx.config.runtime.clone();
        let nonnegative = || Annotation::new(&runtime.nonnegative);

        for index in 0..ctx.model.classes.len() {
            let class = &ctx.model.classes[index];
            if class.kind == ClassKind::Enum {
                continue;
            }

            let mut methods = Vec::new();

            for field in all_instance_fields(class)? {
                if !field.ty.is_erasure("List") {
                    continue;
                }
                let mut body = Block::new();
                body.assign(Expr::name(&field.name), Expr::name("aList"));
                let mut param = Param::new("aList", field.ty.clone());
                if let Some(a) = nullness_annotation(&field.ty, &runtime.nullable) {
                    param = param.annotate(a);
                }
                let mut setter = MethodDef::new(setter_name(&field.accessor), TypeRef::Void)
                    .with_param(param)
                    .with_body(body);
                setter
                    .javadoc
                    .param("aList", "The new list member to set. May be <code>null</code>.");
                methods.push(setter);
            }

            let list_getters: Vec<(String, String, TypeRef)> = class
                .methods
                .iter()
                .filter(|m| m.params.is_empty() && m.return_type.is_erasure("List"))
                .filter_map(|m| {
                    let name = strip_accessor(&m.name, "get")?;
                    let elem = m
                        .return_type
                        .first_type_arg()
                        .map(|t| t.unwrap_wildcard().clone())
                        .unwrap_or_else(|| TypeRef::class("java.lang.Object"));
                    Some((m.name.clone(), name.to_string(), elem))
                })
                .collect();

            let mut skipped = Vec::new();
            for (getter, name, elem) in list_getters {
                let list = || Expr::call(&getter, vec![]);
                let boolean = TypeRef::Primitive(Primitive::Boolean);

                let mut body = Block::new();
                body.ret(list().invoke("isEmpty", vec![]).not());
                let mut has = MethodDef::new(format!("has{}Entries", name), boolean.clone())
                    .with_body(body);
                has.javadoc.returns(
                    "<code>true</code> if at least one item is contained, <code>false</code> otherwise.",
                );
                methods.push(has);

                let mut body = Block::new();
                body.ret(list().invoke("isEmpty", vec![]));
                let mut has_no = MethodDef::new(format!("hasNo{}Entries", name), boolean)
                    .with_body(body);
                has_no.javadoc.returns(
                    "<code>true</code> if no item is contained, <code>false</code> otherwise.",
                );
                methods.push(has_no);

                match count_method_name(class, &methods, &name) {
                    Some(count_name) => {
                        let mut body = Block::new();
                        body.ret(list().invoke("size", vec![]));
                        let mut count =
                            MethodDef::new(count_name, TypeRef::Primitive(Primitive::Int))
                                .annotate(nonnegative())
                                .with_body(body);
                        count
                            .javadoc
                            .returns("The number of contained elements. Always &ge; 0.");
                        methods.push(count);
                    }
                    None => {
                        let member = format!("get{}Count", name);
                        warn!("Cannot create '{}' method because it already exists", member);
                        skipped.push(SkipReason::Collision {
                            class: class.name.clone(),
                            member,
                        });
                    }
                }

                let mut body = Block::new();
                body.ret(list().invoke("get", vec![Expr::name("index")]));
                let mut at_index = MethodDef::new(format!("get{}AtIndex", name), elem.clone());
                if let Some(a) = nullness_annotation(&elem, &runtime.nullable) {
                    at_index = at_index.annotate(a);
                }
                let mut at_index = at_index
                    .with_param(
                        Param::new("index", TypeRef::Primitive(Primitive::Int))
                            .annotate(nonnegative()),
                    )
                    .with_body(body);
                at_index
                    .throws
                    .push(ClassRef::new("java.lang.IndexOutOfBoundsException"));
                at_index
                    .javadoc
                    .param("index", "The index to retrieve")
                    .returns("The element at the specified index. May be <code>null</code>")
                    .throws("java.lang.IndexOutOfBoundsException", "if the index is invalid!");
                methods.push(at_index);

                let mut body = Block::new();
                body.expr(list().invoke("add", vec![Expr::name("elem")]));
                let mut param = Param::new("elem", elem.clone());
                if let Some(a) = nullness_annotation(&elem, &runtime.non_null) {
                    param = param.annotate(a);
                }
                let mut add = MethodDef::new(format!("add{}", name), TypeRef::Void)
                    .with_param(param)
                    .with_body(body);
                add.javadoc
                    .param("elem", "The element to be added. May not be <code>null</code>.");
                methods.push(add);
            }

            let methods: Vec<MethodDef> = methods
                .into_iter()
                .map(|m| stamp(m, ctx, Self::OPTION))
                .collect();
            let note = ctx.config.class_note(Self::OPTION);

            let class = &mut ctx.model.classes[index];
            let mut touched = false;
            for method in methods {
                touched |= add_method(class, method, &mut report);
            }
            for reason in skipped {
                report.record(Outcome::Skipped(reason));
            }
            if touched {
                class.add_javadoc_note(note);
                report.touch_class();
            }
        }

        Ok(report)
    }
}

/// `get<N>Count`, or `get<N>ListCount` if the former is taken, or `None`
/// if both are. Methods already queued for this class count as taken.
fn count_method_name(class: &ClassNode, queued: &[MethodDef], name: &str) -> Option<String> {
    [format!("get{}Count", name), format!("get{}ListCount", name)]
        .into_iter()
        .find(|candidate| {
            !class.has_method_named_without_params(candidate)
                && !queued
                    .iter()
                    .any(|m| m.params.is_empty() && &m.name == candidate)
        })
}
