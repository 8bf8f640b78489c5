//! Marker annotation excluding generated classes from coding-style checks.

use crate::error::SynthResult;
use crate::report::{Outcome, PassReport};
use crate::synthesizer::{SynthContext, Synthesizer};
use beanweave_core::Annotation;
use tracing::info;

/// Annotates every generated class, enum and object factory with the
/// configured `CodingStyleguideUnaware` marker.
pub struct CodingStyleguideUnaware;

impl CodingStyleguideUnaware {
    pub const OPTION: &'static str = "Xph-csu";
}

impl Synthesizer for CodingStyleguideUnaware {
    fn option_name(&self) -> &'static str {
        Self::OPTION
    }

    fn usage(&self) -> &'static str {
        "add @CodingStyleguideUnaware annotations to all classes"
    }

    fn run(&self, ctx: &mut SynthContext) -> SynthResult<PassReport> {
        info!("Running -{}", Self::OPTION);
        let mut report = PassReport::new(Self::OPTION);
        let marker = ctx.config.runtime.coding_styleguide_unaware.clone();

        let model = &mut ctx.model;
        for class in model.classes.iter_mut().chain(model.object_factories.iter_mut()) {
            if class.has_annotation(&marker) {
                continue;
            }
            class.annotations.push(Annotation::new(&marker));
            report.record(Outcome::Synthesized);
            report.touch_class();
        }

        Ok(report)
    }
}
