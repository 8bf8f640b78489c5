//! Synthesis configuration

use crate::error::{ModelError, ModelResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for one synthesis run, usually read from `beanweave.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthConfig {
    /// Name written into the provenance javadoc of synthesized members
    pub generator_name: String,

    /// Switch logging to DEBUG for the run
    pub debug: bool,

    /// Initial log level
    pub log_level: String,

    /// Pass options selected when none are given on the command line
    pub passes: Vec<String>,

    /// Interfaces the implements pass adds to every root class and enum
    pub implements: Vec<String>,

    pub validation: ValidationConfig,

    /// Helper classes referenced by synthesized bodies
    pub runtime: RuntimeClasses,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            generator_name: default_generator_name(),
            debug: false,
            log_level: default_log_level(),
            passes: Vec::new(),
            implements: Vec::new(),
            validation: ValidationConfig::default(),
            runtime: RuntimeClasses::default(),
        }
    }
}

fn default_generator_name() -> String {
    "ph-jaxb-plugin".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl SynthConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from TOML; empty input yields the defaults
    pub fn from_toml(content: &str) -> ModelResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        toml::from_str(content).map_err(|e| ModelError::Config(e.to_string()))
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> ModelResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml(&content)
    }

    /// Javadoc line stamped on members created by the pass `option`
    pub fn provenance(&self, option: &str) -> String {
        format!("Created by {} -{}", self.generator_name, option)
    }

    /// Package-level note for packages annotated by the pass `option`
    pub fn package_note(&self, option: &str) -> String {
        format!(
            "<p>This class was annotated by {} -{}</p>",
            self.generator_name, option
        )
    }

    /// Class-level note for classes touched by the pass `option`
    pub fn class_note(&self, option: &str) -> String {
        format!(
            "<p>This class contains methods created by {} -{}</p>",
            self.generator_name, option
        )
    }
}

/// Bean Validation release a validation pass targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationDialect {
    /// Bean Validation 1.0
    #[default]
    Jsr303,

    /// Bean Validation 1.1; supports `inclusive = false` on decimal bounds
    Jsr349,
}

impl ValidationDialect {
    pub fn supports_exclusive_bounds(&self) -> bool {
        matches!(self, ValidationDialect::Jsr349)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Package holding `Valid` and the `constraints` sub-package
    pub package: String,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            package: "jakarta.validation".to_string(),
        }
    }
}

impl ValidationConfig {
    /// Qualified name of a constraint annotation, e.g. `NotNull`
    pub fn constraint(&self, simple_name: &str) -> String {
        format!("{}.constraints.{}", self.package, simple_name)
    }

    /// Qualified name of the nested-validation marker
    pub fn valid(&self) -> String {
        format!("{}.Valid", self.package)
    }
}

/// Qualified names of the runtime helpers generated code calls into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeClasses {
    pub equals_helper: String,
    pub collection_equals_helper: String,
    pub hash_code_generator: String,
    pub hash_code_calculator: String,
    pub to_string_generator: String,
    pub jaxb_helper: String,
    pub array_helper: String,
    pub generic_reflection: String,
    pub cloneable_interface: String,
    pub dom_node: String,
    pub nullable: String,
    pub non_null: String,
    pub nonnegative: String,
    pub returns_mutable_copy: String,
    pub coding_styleguide_unaware: String,
    pub null_marked: String,
}

impl Default for RuntimeClasses {
    fn default() -> Self {
        Self {
            equals_helper: "com.helger.base.equals.EqualsHelper".to_string(),
            collection_equals_helper: "com.helger.collection.helper.CollectionEqualsHelper"
                .to_string(),
            hash_code_generator: "com.helger.base.hashcode.HashCodeGenerator".to_string(),
            hash_code_calculator: "com.helger.base.hashcode.HashCodeCalculator".to_string(),
            to_string_generator: "com.helger.base.tostring.ToStringGenerator".to_string(),
            jaxb_helper: "com.helger.jaxb.adapter.JAXBHelper".to_string(),
            array_helper: "com.helger.base.array.ArrayHelper".to_string(),
            generic_reflection: "com.helger.base.reflection.GenericReflection".to_string(),
            cloneable_interface: "com.helger.base.lang.IExplicitlyCloneable".to_string(),
            dom_node: "org.w3c.dom.Node".to_string(),
            nullable: "org.jspecify.annotations.Nullable".to_string(),
            non_null: "org.jspecify.annotations.NonNull".to_string(),
            nonnegative: "com.helger.annotation.Nonnegative".to_string(),
            returns_mutable_copy: "com.helger.annotation.style.ReturnsMutableCopy".to_string(),
            coding_styleguide_unaware: "com.helger.annotation.style.CodingStyleguideUnaware"
                .to_string(),
            null_marked: "org.jspecify.annotations.NullMarked".to_string(),
        }
    }
}
