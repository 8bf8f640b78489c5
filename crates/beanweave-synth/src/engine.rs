//! Pass registry and pipeline

use crate::error::{SynthError, SynthResult};
use crate::passes::{
    BeanValidation, Cloneable, CodeQuality, CodingStyleguideUnaware, EqualsHashCode,
    FieldsPrivate, Implements, ListExtension, OffsetDtExtension, PackageNullMarked,
    ToStringPass, ValueExtender,
};
use crate::report::RunReport;
use crate::synthesizer::{SynthContext, Synthesizer};
use tracing::{debug, error, info};

/// All known passes, in the order they run.
///
/// The value extender must run before the list extension, and the offset
/// extension before the value extender so the latter can see its option.
pub struct Engine {
    passes: Vec<Box<dyn Synthesizer>>,
}

impl Engine {
    pub fn new() -> Self {
        Self {
            passes: vec![
                Box::new(OffsetDtExtension),
                Box::new(ValueExtender),
                Box::new(ListExtension),
                Box::new(EqualsHashCode),
                Box::new(ToStringPass),
                Box::new(Cloneable),
                Box::new(BeanValidation::jsr303()),
                Box::new(BeanValidation::jsr349()),
                Box::new(Implements),
                Box::new(FieldsPrivate),
                Box::new(CodeQuality),
                Box::new(CodingStyleguideUnaware),
                Box::new(PackageNullMarked),
            ],
        }
    }

    /// Registered passes in canonical order.
    pub fn synthesizers(&self) -> impl Iterator<Item = &dyn Synthesizer> {
        self.passes.iter().map(Box::as_ref)
    }

    /// Resolve option names (with or without a leading `-`) to passes.
    ///
    /// The result follows the canonical order, not the order given, and
    /// contains each pass once.
    pub fn select<S: AsRef<str>>(&self, options: &[S]) -> SynthResult<Vec<&dyn Synthesizer>> {
        let mut wanted = Vec::with_capacity(options.len());
        for option in options {
            let name = option.as_ref().trim().trim_start_matches('-');
            if !self.passes.iter().any(|p| p.option_name() == name) {
                return Err(SynthError::UnknownPass(name.to_string()));
            }
            wanted.push(name);
        }
        Ok(self
            .synthesizers()
            .filter(|p| wanted.contains(&p.option_name()))
            .collect())
    }

    /// Run the selected passes over `ctx.model`.
    ///
    /// The first error aborts the run; the model may then be partially
    /// extended and should be discarded.
    pub fn run<S: AsRef<str>>(&self, ctx: &mut SynthContext, options: &[S]) -> SynthResult<RunReport> {
        ctx.model.validate()?;
        let selected = self.select(options)?;
        ctx.set_active(selected.iter().map(|p| p.option_name()));
        info!(
            "Synthesizing {} classes with {} passes",
            ctx.model.classes.len(),
            selected.len()
        );

        let mut report = RunReport::default();
        for pass in selected {
            let pass_report = pass.run(ctx).inspect_err(|e| {
                error!(
                    "Synthesis aborted in -{} (code {}): {}",
                    pass.option_name(),
                    e.error_code(),
                    e
                );
            })?;
            debug!(
                "-{}: {} members added, {} skipped",
                pass_report.option,
                pass_report.members_added,
                pass_report.skipped.len()
            );
            report.passes.push(pass_report);
        }

        info!(
            "Synthesis finished: {} members added, {} skipped",
            report.members_added(),
            report.skipped().count()
        );
        Ok(report)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "engine/engine_tests.rs"]
mod engine_tests;
