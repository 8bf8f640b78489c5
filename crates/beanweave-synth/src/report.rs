//! Per-member outcomes and per-pass diagnostics

use serde::Serialize;
use std::fmt;

/// Why a member or constraint was not synthesized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SkipReason {
    /// A member with the same name and arity already exists
    Collision { class: String, member: String },

    /// A schema construct the pass cannot express
    Unsupported {
        class: String,
        field: String,
        description: String,
    },

    /// An external ancestor could not be loaded
    ResolveFailed { class: String },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Collision { class, member } => {
                write!(f, "'{}' already exists in {}", member, class)
            }
            SkipReason::Unsupported {
                class,
                field,
                description,
            } => write!(f, "unsupported construct on {}.{}: {}", class, field, description),
            SkipReason::ResolveFailed { class } => write!(f, "failed to load {}", class),
        }
    }
}

/// Result of one synthesis attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Synthesized,
    Skipped(SkipReason),
}

/// Diagnostics of one pass over the model.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PassReport {
    /// Option name of the pass
    pub option: String,

    /// Number of classes that received at least one member or constraint
    pub classes_touched: usize,

    /// Members and constraints added, plus declarations changed in place
    pub members_added: usize,

    pub skipped: Vec<SkipReason>,
}

impl PassReport {
    pub fn new(option: impl Into<String>) -> Self {
        Self {
            option: option.into(),
            ..Self::default()
        }
    }

    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Synthesized => self.members_added += 1,
            Outcome::Skipped(reason) => self.skipped.push(reason),
        }
    }

    pub fn touch_class(&mut self) {
        self.classes_touched += 1;
    }
}

/// Diagnostics of a whole run, one entry per executed pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunReport {
    pub passes: Vec<PassReport>,
}

impl RunReport {
    pub fn members_added(&self) -> usize {
        self.passes.iter().map(|p| p.members_added).sum()
    }

    pub fn skipped(&self) -> impl Iterator<Item = &SkipReason> {
        self.passes.iter().flat_map(|p| p.skipped.iter())
    }

    pub fn pass(&self, option: &str) -> Option<&PassReport> {
        self.passes.iter().find(|p| p.option == option)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
