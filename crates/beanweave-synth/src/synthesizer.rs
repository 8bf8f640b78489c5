//! Synthesizer trait and run context

use crate::classify::TypeClassifier;
use crate::error::SynthResult;
use crate::report::PassReport;
use beanweave_core::{CodeModel, SynthConfig};
use std::collections::BTreeSet;

/// State shared by all passes of one run.
pub struct SynthContext {
    /// The model being extended
    pub model: CodeModel,

    pub config: SynthConfig,

    /// Category cache scoped to this run
    pub classifier: TypeClassifier,

    active: BTreeSet<String>,
}

impl SynthContext {
    pub fn new(model: CodeModel, config: SynthConfig) -> Self {
        Self {
            model,
            config,
            classifier: TypeClassifier::new(),
            active: BTreeSet::new(),
        }
    }

    /// Mark the pass options taking part in this run.
    pub fn set_active<I, S>(&mut self, options: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.active = options.into_iter().map(Into::into).collect();
    }

    /// Whether the pass with this option takes part in the run.
    pub fn is_active(&self, option: &str) -> bool {
        self.active.contains(option)
    }

    /// Javadoc line for members created by `option`
    pub fn provenance(&self, option: &str) -> String {
        self.config.provenance(option)
    }

    pub fn into_model(self) -> CodeModel {
        self.model
    }
}

/// One synthesis pass over the class model.
///
/// # Example
///
/// ```ignore
/// use beanweave_synth::prelude::*;
///
/// struct Noop;
///
/// impl Synthesizer for Noop {
///     fn option_name(&self) -> &'static str {
///         "Xnoop"
///     }
///
///     fn usage(&self) -> &'static str {
///         "does nothing"
///     }
///
///     fn run(&self, _ctx: &mut SynthContext) -> SynthResult<PassReport> {
///         Ok(PassReport::new(self.option_name()))
///     }
/// }
/// ```
pub trait Synthesizer: Send + Sync {
    /// Command-line option that enables the pass, without the leading dash
    fn option_name(&self) -> &'static str;

    /// One-line description shown by `beanweave plugins`
    fn usage(&self) -> &'static str;

    /// Append members to the classes of `ctx.model`.
    ///
    /// Recoverable conditions are reported in the returned [`PassReport`];
    /// an error aborts the whole run.
    fn run(&self, ctx: &mut SynthContext) -> SynthResult<PassReport>;
}
