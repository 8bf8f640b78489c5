//! beanweave-synth - Method synthesis passes
//!
//! This crate extends a [`beanweave_core::CodeModel`] with generated members:
//! - [`TypeClassifier`] decides how each field is compared, hashed and copied
//! - [`ValueCarrierMap`] and [`Lineage`] answer inheritance questions
//! - [`passes`] holds one [`Synthesizer`] per feature
//! - [`Engine`] selects passes by option name and runs them in order
//! - [`RunReport`] collects what was added and what was skipped

mod ancestry;
mod classify;
mod engine;
mod error;
mod fields;
pub mod passes;
mod report;
mod synthesizer;

#[cfg(test)]
mod test_support;

pub use ancestry::{Lineage, VALUE_FIELD, ValueCarrierMap, value_field_type};
pub use classify::{TypeCategory, TypeClassifier, is_object};
pub use engine::Engine;
pub use error::{SynthError, SynthResult};
pub use fields::{InstanceField, all_instance_fields};
pub use report::{Outcome, PassReport, RunReport, SkipReason};
pub use synthesizer::{SynthContext, Synthesizer};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Engine, Outcome, PassReport, RunReport, SkipReason, SynthContext, SynthError,
        SynthResult, Synthesizer,
    };
    pub use beanweave_core::prelude::*;
}
