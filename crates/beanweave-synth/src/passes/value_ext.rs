//! Value-carrier constructors, setters and getters.
//!
//! A class carrying a single `value` field (directly or through an
//! ancestor) gets a constructor taking that value. Every setter and getter
//! elsewhere in the model whose type is such a class gets an overload that
//! works with the carried value directly.
//!
//! The sub-passes run in a fixed order: default constructors, value
//! constructors (which populate the carrier table), setters, getters.

use super::offset_dt::{OffsetDtExtension, local_companion};
use super::{add_constructor, add_method, stamp, stamp_constructor};
use crate::ancestry::{ValueCarrierMap, value_field_type};
use crate::error::SynthResult;
use crate::report::{Outcome, PassReport, SkipReason};
use crate::synthesizer::{SynthContext, Synthesizer};
use beanweave_core::ast::{Block, Expr};
use beanweave_core::naming::strip_accessor;
use beanweave_core::{
    Annotation, ClassKind, ConstructorDef, MethodDef, Param, Primitive, TypeRef,
};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Synthesizes value constructors and value-typed accessor overloads.
pub struct ValueExtender;

impl ValueExtender {
    pub const OPTION: &'static str = "Xph-value-extender";
}

/// Carrier class name to the type of its value.
type CarrierTypes = BTreeMap<String, TypeRef>;

impl Synthesizer for ValueExtender {
    fn option_name(&self) -> &'static str {
        Self::OPTION
    }

    fn usage(&self) -> &'static str {
        "create additional constructors with the 'value' as argument + getter and setter for the value"
    }

    fn run(&self, ctx: &mut SynthContext) -> SynthResult<PassReport> {
        info!("Running -{}", Self::OPTION);
        let mut report = PassReport::new(Self::OPTION);
        let with_local = ctx.is_active(OffsetDtExtension::OPTION);

        add_default_constructors(ctx, &mut report);
        let carriers = add_value_constructors(ctx, with_local, &mut report);
        debug!("{} value carrier classes", carriers.len());
        add_value_setters(ctx, &carriers, with_local, &mut report);
        add_value_getters(ctx, &carriers, with_local, &mut report);

        Ok(report)
    }
}

fn nullable_unless_primitive(ctx: &SynthContext, param: Param) -> Param {
    if param.ty.is_primitive() {
        param
    } else {
        param.annotate(Annotation::new(&ctx.config.runtime.nullable))
    }
}

fn value_param_doc(value_type: &TypeRef) -> &'static str {
    if value_type.is_primitive() {
        "The value to be set."
    } else {
        "The value to be set. May be <code>null</code>."
    }
}

/// Explicit no-argument constructors, which later constructors would
/// otherwise suppress.
fn add_default_constructors(ctx: &mut SynthContext, report: &mut PassReport) {
    let note = ctx.config.class_note(ValueExtender::OPTION);
    let mut ctor = ConstructorDef::new();
    ctor.javadoc.line("Default constructor");
    let ctor = stamp_constructor(ctor, ctx, ValueExtender::OPTION);

    for class in ctx.model.classes.iter_mut() {
        if class.kind == ClassKind::Enum || class.has_constructor(&[]) {
            continue;
        }
        class.constructors.push(ctor.clone());
        class.add_javadoc_note(note.clone());
        report.record(Outcome::Synthesized);
        report.touch_class();
    }
}

fn value_constructor(ctx: &SynthContext, value_type: &TypeRef) -> ConstructorDef {
    let mut body = Block::new();
    body.expr(Expr::call("setValue", vec![Expr::name("valueParam")]));
    let mut ctor = ConstructorDef::new()
        .with_param(nullable_unless_primitive(
            ctx,
            Param::new("valueParam", value_type.clone()),
        ))
        .with_body(body);
    ctor.javadoc
        .line(format!("Constructor for value of type {}", value_type.erasure_name()));
    ctor.javadoc.param("valueParam", value_param_doc(value_type));
    stamp_constructor(ctor, ctx, ValueExtender::OPTION)
}

/// Add `(T valueParam)` constructors and collect the carrier table.
fn add_value_constructors(
    ctx: &mut SynthContext,
    with_local: bool,
    report: &mut PassReport,
) -> CarrierTypes {
    let value_map = ValueCarrierMap::build(&ctx.model);
    for reason in value_map.skipped() {
        report.record(Outcome::Skipped(reason.clone()));
    }

    let mut carriers = CarrierTypes::new();
    for index in 0..ctx.model.classes.len() {
        let class = &ctx.model.classes[index];
        if class.kind == ClassKind::Enum {
            continue;
        }
        let Some(value_type) = value_field_type(&ctx.model, &value_map, class) else {
            continue;
        };
        debug!("{} carries a value of type {}", class.name, value_type);

        let mut ctors = vec![value_constructor(ctx, &value_type)];
        if with_local {
            if let Some(companion) = local_companion(&value_type) {
                ctors.push(value_constructor(ctx, &companion.local));
            }
        }
        carriers.insert(class.name.clone(), value_type);

        let note = ctx.config.class_note(ValueExtender::OPTION);
        let class = &mut ctx.model.classes[index];
        let mut touched = false;
        for ctor in ctors {
            touched |= add_constructor(class, ctor, report);
        }
        if touched {
            class.add_javadoc_note(note);
            report.touch_class();
        }
    }
    carriers
}

fn value_setter(
    ctx: &SynthContext,
    setter: &str,
    property: &str,
    carrier: &TypeRef,
    value_type: &TypeRef,
) -> MethodDef {
    let runtime = &ctx.config.runtime;
    let obj = Expr::name("aObj");
    let value = Expr::name("valueParam");

    let mut create = Block::new();
    create
        .assign(obj.clone(), Expr::new_instance(carrier.clone(), vec![value.clone()]))
        .expr(Expr::call(setter, vec![obj.clone()]));
    let mut update = Block::new();
    update.expr(obj.clone().invoke("setValue", vec![value]));

    let mut body = Block::new();
    body.decl_var(carrier.clone(), "aObj", Expr::call(format!("get{}", property), vec![]))
        .if_else(obj.clone().is_null(), create, update)
        .ret(obj);

    let mut method = MethodDef::new(setter, carrier.clone())
        .annotate(Annotation::new(&runtime.non_null))
        .with_param(nullable_unless_primitive(
            ctx,
            Param::new("valueParam", value_type.clone()),
        ))
        .with_body(body);
    method
        .javadoc
        .line(format!("Special setter with value of type {}", value_type.erasure_name()))
        .param("valueParam", value_param_doc(value_type))
        .returns(format!(
            "The created intermediary object of type {} and never <code>null</code>",
            carrier.erasure_name()
        ));
    stamp(method, ctx, ValueExtender::OPTION)
}

/// Overload `set<X>(P)` with `set<X>(T)` for every carrier class `P`.
fn add_value_setters(
    ctx: &mut SynthContext,
    carriers: &CarrierTypes,
    with_local: bool,
    report: &mut PassReport,
) {
    for index in 0..ctx.model.classes.len() {
        let class = &ctx.model.classes[index];
        if class.kind == ClassKind::Enum {
            continue;
        }

        let mut methods = Vec::new();
        for existing in &class.methods {
            if existing.params.len() != 1 {
                continue;
            }
            let Some(property) = strip_accessor(&existing.name, "set") else {
                continue;
            };
            let carrier = &existing.params[0].ty;
            let Some(value_type) = carrier.as_class().and_then(|c| carriers.get(&c.name)) else {
                continue;
            };

            methods.push(value_setter(ctx, &existing.name, property, carrier, value_type));
            if with_local {
                if let Some(companion) = local_companion(value_type) {
                    methods.push(value_setter(
                        ctx,
                        &existing.name,
                        property,
                        carrier,
                        &companion.local,
                    ));
                }
            }
        }

        let note = ctx.config.class_note(ValueExtender::OPTION);
        let class = &mut ctx.model.classes[index];
        let mut touched = false;
        for method in methods {
            touched |= add_method(class, method, report);
        }
        if touched {
            class.add_javadoc_note(note);
            report.touch_class();
        }
    }
}

fn value_getter(
    ctx: &SynthContext,
    name: &str,
    getter: &str,
    carrier: &TypeRef,
    value_type: &TypeRef,
    unwrap: &str,
) -> MethodDef {
    let obj = Expr::name("aObj");
    let mut body = Block::new();
    body.decl(carrier.clone(), "aObj", Expr::call(getter, vec![]));

    let carrier_name = carrier.erasure_name();
    let mut method = if value_type.is_primitive() {
        body.ret(Expr::cond(
            obj.clone().is_null(),
            Expr::name("nullValue"),
            obj.invoke(unwrap, vec![]),
        ));
        let mut method = MethodDef::new(name, value_type.clone())
            .with_param(Param::new("nullValue", value_type.clone()))
            .with_body(body);
        method
            .javadoc
            .param(
                "nullValue",
                "The value to be returned, if the owning object is <code>null</code>",
            )
            .returns(format!(
                "Either the value of the contained {} object or the passed nullValue",
                carrier_name
            ));
        method
    } else {
        body.ret(Expr::null_or(obj.clone(), obj.invoke(unwrap, vec![])));
        let mut method = MethodDef::new(name, value_type.clone())
            .annotate(Annotation::new(&ctx.config.runtime.nullable))
            .with_body(body);
        method.javadoc.returns(format!(
            "Either the value of the contained {} object or <code>null</code>",
            carrier_name
        ));
        method
    };
    method
        .javadoc
        .line(format!("Get the value of the contained {} object", carrier_name));
    stamp(method, ctx, ValueExtender::OPTION)
}

/// Add `get<X>Value` next to every `get<X>()` returning a carrier class.
fn add_value_getters(
    ctx: &mut SynthContext,
    carriers: &CarrierTypes,
    with_local: bool,
    report: &mut PassReport,
) {
    for index in 0..ctx.model.classes.len() {
        let class = &ctx.model.classes[index];
        if class.kind == ClassKind::Enum {
            continue;
        }

        let mut methods = Vec::new();
        let mut skipped = Vec::new();
        for existing in &class.methods {
            if !existing.params.is_empty() {
                continue;
            }
            let Some(property) = strip_accessor(&existing.name, "get") else {
                continue;
            };
            let carrier = &existing.return_type;
            let Some(value_type) = carrier.as_class().and_then(|c| carriers.get(&c.name)) else {
                continue;
            };

            let is_boolean = *value_type == TypeRef::Primitive(Primitive::Boolean);
            let name = if is_boolean {
                format!("is{}Value", property)
            } else {
                format!("get{}Value", property)
            };
            if class.has_method_named_without_params(&name) {
                warn!(
                    "Another method with name '{}' and no parameters is already present in class '{}' - not creating it.",
                    name, class.name
                );
                skipped.push(SkipReason::Collision {
                    class: class.name.clone(),
                    member: name,
                });
                continue;
            }

            let unwrap = if is_boolean { "isValue" } else { "getValue" };
            methods.push(value_getter(ctx, &name, &existing.name, carrier, value_type, unwrap));

            if with_local && !value_type.is_primitive() {
                if let Some(companion) = local_companion(value_type) {
                    methods.push(value_getter(
                        ctx,
                        &format!("{}Local", name),
                        &existing.name,
                        carrier,
                        &companion.local,
                        "getValueLocal",
                    ));
                }
            }
        }

        let note = ctx.config.class_note(ValueExtender::OPTION);
        let class = &mut ctx.model.classes[index];
        let mut touched = false;
        for method in methods {
            touched |= add_method(class, method, report);
        }
        for reason in skipped {
            report.record(Outcome::Skipped(reason));
        }
        if touched {
            class.add_javadoc_note(note);
            report.touch_class();
        }
    }
}
