//! Warning fixes for the element factories.

use crate::error::SynthResult;
use crate::report::{Outcome, PassReport};
use crate::synthesizer::{SynthContext, Synthesizer};
use beanweave_core::{MethodDef, Visibility};
use tracing::{debug, info};

const QNAME: &str = "QName";
const JAXB_ELEMENT: &str = "JAXBElement";

/// Publishes the static element names of each object factory, makes the
/// parameter of `create*` element methods final and documents the return
/// value of every `create*` method.
pub struct CodeQuality;

impl CodeQuality {
    pub const OPTION: &'static str = "Xph-code-quality";
}

impl Synthesizer for CodeQuality {
    fn option_name(&self) -> &'static str {
        Self::OPTION
    }

    fn usage(&self) -> &'static str {
        "fix some issues that cause warnings in the generated code"
    }

    fn run(&self, ctx: &mut SynthContext) -> SynthResult<PassReport> {
        info!("Running -{}", Self::OPTION);
        let mut report = PassReport::new(Self::OPTION);

        for factory in ctx.model.object_factories.iter_mut() {
            let mut touched = false;

            for field in factory
                .fields
                .iter_mut()
                .filter(|f| f.ty.erasure_name() == QNAME && f.visibility != Visibility::Public)
            {
                field.visibility = Visibility::Public;
                report.record(Outcome::Synthesized);
                touched = true;
            }

            for method in factory
                .methods
                .iter_mut()
                .filter(|m| m.name.starts_with("create"))
            {
                if fix_create_method(method) {
                    debug!("Documented {}.{}", factory.name, method.name);
                    report.record(Outcome::Synthesized);
                    touched = true;
                }
            }

            if touched {
                report.touch_class();
            }
        }

        Ok(report)
    }
}

/// Returns whether `method` changed.
fn fix_create_method(method: &mut MethodDef) -> bool {
    let returns = if method.params.len() == 1 && method.return_type.erasure_name() == JAXB_ELEMENT {
        method.params[0].is_final = true;
        "The created JAXBElement and never <code>null</code>.".to_string()
    } else if method.params.is_empty() {
        format!(
            "The created {} object and never <code>null</code>.",
            method.return_type.erasure_name()
        )
    } else {
        return false;
    };
    if method.javadoc.returns.as_deref() == Some(returns.as_str()) {
        return false;
    }
    method.javadoc.returns(returns);
    true
}
