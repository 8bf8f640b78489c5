//! `Local*` views of offset date/time fields.

use super::{add_method, stamp};
use crate::error::SynthResult;
use crate::fields::all_instance_fields;
use crate::report::PassReport;
use crate::synthesizer::{SynthContext, Synthesizer};
use beanweave_core::ast::{Block, Expr};
use beanweave_core::naming::{getter_name, setter_name};
use beanweave_core::{Annotation, ClassKind, ClassRef, MethodDef, Param, TypeRef};
use tracing::info;

const ZONE_OFFSET: &str = "java.time.ZoneOffset";

/// The offset-free counterpart of an offset date/time type.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalCompanion {
    /// `java.time.LocalDate`, `LocalTime` or `LocalDateTime`
    pub local: TypeRef,

    /// Instance method converting the offset value, e.g. `toLocalDate`
    pub conversion: &'static str,

    /// `Offset*` types are rebuilt at UTC, `XMLOffset*` types without offset
    pub uses_utc: bool,
}

/// Companion of `ty`, if it is one of the offset date/time types.
pub fn local_companion(ty: &TypeRef) -> Option<LocalCompanion> {
    let class = ty.as_class()?;
    let simple = class.simple_name();
    let (local, conversion) = match simple {
        "OffsetDate" | "XMLOffsetDate" => ("java.time.LocalDate", "toLocalDate"),
        "OffsetTime" | "XMLOffsetTime" => ("java.time.LocalTime", "toLocalTime"),
        "OffsetDateTime" | "XMLOffsetDateTime" => ("java.time.LocalDateTime", "toLocalDateTime"),
        _ => return None,
    };
    Some(LocalCompanion {
        local: TypeRef::class(local),
        conversion,
        uses_utc: !simple.starts_with("XML"),
    })
}

/// Synthesizes `get<Field>Local()` and `set<Field>(Local*)` for offset
/// date/time fields.
pub struct OffsetDtExtension;

impl OffsetDtExtension {
    pub const OPTION: &'static str = "Xph-offset-dt-extension";
}

impl Synthesizer for OffsetDtExtension {
    fn option_name(&self) -> &'static str {
        Self::OPTION
    }

    fn usage(&self) -> &'static str {
        "add additional methods for Offset* date time types"
    }

    fn run(&self, ctx: &mut SynthContext) -> SynthResult<PassReport> {
        info!("Running -{}", Self::OPTION);
        let mut report = PassReport::new(Self::OPTION);
        let nullable = ctx.config.runtime.nullable.clone();

        for index in 0..ctx.model.classes.len() {
            let class = &ctx.model.classes[index];
            if class.kind == ClassKind::Enum {
                continue;
            }

            let mut methods = Vec::new();
            for field in all_instance_fields(class)? {
                let Some(companion) = local_companion(&field.ty) else {
                    continue;
                };
                let local_name = companion.local.erasure_name();
                let value = Expr::name(&field.name);

                let mut body = Block::new();
                body.ret(Expr::null_or(
                    value.clone(),
                    value.clone().invoke(companion.conversion, vec![]),
                ));
                let mut local_getter = MethodDef::new(
                    format!("{}Local", getter_name(&field.ty, &field.name)),
                    companion.local.clone(),
                )
                .annotate(Annotation::new(&nullable))
                .with_body(body);
                local_getter.javadoc.returns(format!(
                    "The {} representation of {}. May be <code>null</code>.",
                    local_name, field.name
                ));
                methods.push(stamp(local_getter, ctx, Self::OPTION));

                let offset = if companion.uses_utc {
                    Expr::StaticRef {
                        class: ClassRef::new(ZONE_OFFSET),
                        name: "UTC".to_string(),
                    }
                } else {
                    Expr::Null
                };
                let field_class = field
                    .ty
                    .as_class()
                    .map(|c| c.name.clone())
                    .unwrap_or_default();
                let mut body = Block::new();
                body.assign(
                    value,
                    Expr::null_or(
                        Expr::name("aValue"),
                        Expr::static_call(field_class, "of", vec![Expr::name("aValue"), offset]),
                    ),
                );
                let mut local_setter = MethodDef::new(setter_name(&field.name), TypeRef::Void)
                    .with_param(
                        Param::new("aValue", companion.local.clone())
                            .annotate(Annotation::new(&nullable)),
                    )
                    .with_body(body);
                local_setter.javadoc.param(
                    "aValue",
                    format!("The {} to set. May be <code>null</code>.", local_name),
                );
                methods.push(stamp(local_setter, ctx, Self::OPTION));
            }

            let note = ctx.config.class_note(Self::OPTION);
            let class = &mut ctx.model.classes[index];
            let mut touched = false;
            for method in methods {
                touched |= add_method(class, method, &mut report);
            }
            if touched {
                class.add_javadoc_note(note);
                report.touch_class();
            }
        }

        Ok(report)
    }
}
