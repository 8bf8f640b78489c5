//! The synthesis passes.
//!
//! | Option | Pass |
//! |--------|------|
//! | `Xph-offset-dt-extension` | [`OffsetDtExtension`] |
//! | `Xph-value-extender` | [`ValueExtender`] |
//! | `Xph-list-extension` | [`ListExtension`] |
//! | `Xph-equalshashcode` | [`EqualsHashCode`] |
//! | `Xph-tostring` | [`ToStringPass`] |
//! | `Xph-cloneable2` | [`Cloneable`] |
//! | `Xph-bean-validation10` / `Xph-bean-validation11` | [`BeanValidation`] |
//! | `Xph-implements` | [`Implements`] |
//! | `Xph-fields-private` | [`FieldsPrivate`] |
//! | `Xph-code-quality` | [`CodeQuality`] |
//! | `Xph-csu` | [`CodingStyleguideUnaware`] |
//! | `Xph-package-null-marked` | [`PackageNullMarked`] |

mod bean_validation;
mod clone;
mod code_quality;
mod coding_style;
mod equals_hash;
mod fields_private;
mod implements;
mod list_ext;
mod offset_dt;
mod package_null_marked;
mod to_string;
mod value_ext;

pub use bean_validation::BeanValidation;
pub use clone::Cloneable;
pub use code_quality::CodeQuality;
pub use coding_style::CodingStyleguideUnaware;
pub use equals_hash::EqualsHashCode;
pub use fields_private::FieldsPrivate;
pub use implements::Implements;
pub use list_ext::ListExtension;
pub use offset_dt::{LocalCompanion, OffsetDtExtension, local_companion};
pub use package_null_marked::PackageNullMarked;
pub use to_string::ToStringPass;
pub use value_ext::ValueExtender;

use crate::report::{Outcome, PassReport, SkipReason};
use crate::synthesizer::SynthContext;
use beanweave_core::{Annotation, ClassNode, ConstructorDef, MethodDef, TypeRef};
use tracing::debug;

pub(crate) fn override_annotation() -> Annotation {
    Annotation::new("java.lang.Override")
}

/// Nullness annotation `class` for a value of type `ty`. Type-use nullness
/// annotations cannot target primitives.
pub(crate) fn nullness_annotation(ty: &TypeRef, class: &str) -> Option<Annotation> {
    (!ty.is_primitive()).then(|| Annotation::new(class))
}

/// Mark `method` as created by `option` and add the provenance line.
pub(crate) fn stamp(mut method: MethodDef, ctx: &SynthContext, option: &str) -> MethodDef {
    method.javadoc.line(ctx.provenance(option));
    method.synthesized_by(option)
}

pub(crate) fn stamp_constructor(
    mut ctor: ConstructorDef,
    ctx: &SynthContext,
    option: &str,
) -> ConstructorDef {
    ctor.javadoc.line(ctx.provenance(option));
    ctor.synthesized_by(option)
}

/// Append `method` unless one with the same name and parameter types exists.
pub(crate) fn add_method(class: &mut ClassNode, method: MethodDef, report: &mut PassReport) -> bool {
    let types: Vec<TypeRef> = method.params.iter().map(|p| p.ty.clone()).collect();
    if class.has_method(&method.name, &types) {
        debug!(
            "Method '{}' already exists in {}, not creating it",
            method.name, class.name
        );
        report.record(Outcome::Skipped(SkipReason::Collision {
            class: class.name.clone(),
            member: method.name,
        }));
        return false;
    }
    class.methods.push(method);
    report.record(Outcome::Synthesized);
    true
}

/// Append `ctor` unless one with the same parameter types exists.
pub(crate) fn add_constructor(
    class: &mut ClassNode,
    ctor: ConstructorDef,
    report: &mut PassReport,
) -> bool {
    let types: Vec<TypeRef> = ctor.params.iter().map(|p| p.ty.clone()).collect();
    if class.has_constructor(&types) {
        let signature: Vec<String> = types.iter().map(|t| t.erasure_name()).collect();
        report.record(Outcome::Skipped(SkipReason::Collision {
            class: class.name.clone(),
            member: format!("{}({})", class.simple_name(), signature.join(", ")),
        }));
        return false;
    }
    class.constructors.push(ctor);
    report.record(Outcome::Synthesized);
    true
}
