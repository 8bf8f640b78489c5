//! Diagnostic `toString` built on the runtime string generator.

use super::{add_method, override_annotation, stamp};
use crate::ancestry::Lineage;
use crate::error::SynthResult;
use crate::fields::{InstanceField, all_instance_fields};
use crate::report::PassReport;
use crate::synthesizer::{SynthContext, Synthesizer};
use beanweave_core::ast::{Block, Expr};
use beanweave_core::{ClassKind, MethodDef, TypeRef};
use tracing::info;

/// Synthesizes `toString()`.
pub struct ToStringPass;

impl ToStringPass {
    pub const OPTION: &'static str = "Xph-tostring";
}

impl Synthesizer for ToStringPass {
    fn option_name(&self) -> &'static str {
        Self::OPTION
    }

    fn usage(&self) -> &'static str {
        "auto implement toString using com.helger.base.tostring.ToStringGenerator"
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
            // the inherited toString already covers everything
            if !lineage.is_root() && fields.is_empty() {
                continue;
            }
            let method = stamp(to_string_method(ctx, &fields, lineage), ctx, Self::OPTION);
            let note = ctx.config.class_note(Self::OPTION);

            let class = &mut ctx.model.classes[index];
            if add_method(class, method, &mut report) {
                class.add_javadoc_note(note);
                report.touch_class();
            }
        }

        Ok(report)
    }
}

fn to_string_method(ctx: &SynthContext, fields: &[InstanceField], lineage: Lineage) -> MethodDef {
    let generator_class = &ctx.config.runtime.to_string_generator;
    let mut generator = if lineage.is_root() {
        Expr::new_instance(TypeRef::class(generator_class), vec![Expr::This])
    } else {
        Expr::static_call(
            generator_class,
            "getDerived",
            vec![Expr::Super.invoke("toString", vec![])],
        )
    };
    for field in fields {
        generator = generator.invoke(
            "append",
            vec![Expr::lit_str(&field.name), Expr::name(&field.name)],
        );
    }

    let mut body = Block::new();
    body.ret(generator.invoke("getToString", vec![]));

    MethodDef::new("toString", TypeRef::class("java.lang.String"))
        .annotate(override_annotation())
        .with_body(body)
}
