//! Bean validation constraints inferred from schema facets.
//!
//! Works on fields rather than methods: every element, attribute and
//! simple-content property gets `NotNull`, `Size`, `Pattern`,
//! `DecimalMin`/`DecimalMax`, `Digits` and `Valid` annotations as its
//! occurrence and facet information allows. An annotation class already
//! present on a field is never added a second time, so re-running the pass
//! leaves the model unchanged.

use crate::error::{SynthError, SynthResult};
use crate::report::{Outcome, PassReport, SkipReason};
use crate::synthesizer::{SynthContext, Synthesizer};
use beanweave_core::schema::facet;
use beanweave_core::{
    Annotation, AnnotationValue, ClassKind, CodeModel, FieldNode, MaxOccurs, ParticleTerm,
    PropertyInfo, PropertyKind, SimpleTypeInfo, TypeRef, ValidationConfig, ValidationDialect,
};
use tracing::{debug, info, warn};

/// Literals some schema generators emit for "no bound"; never turned into constraints.
const SENTINEL_BOUNDS: &[&str] = &[
    "9223372036854775807",
    "2147483647",
    "-9223372036854775808",
    "-2147483648",
];

/// Pattern emitted by some WSDL tooling that matches everything.
const MATCH_ALL_PATTERN: &str = "\\c+";

/// Erasures whose elements are validated recursively.
const NESTED_CONTAINERS: &[&str] = &[
    "java.util.Collection",
    "java.util.Set",
    "java.util.List",
    "java.util.Map",
];

/// Annotates fields with bean validation constraints.
#[derive(Debug, Clone, Copy)]
pub struct BeanValidation {
    dialect: ValidationDialect,
}

impl BeanValidation {
    pub const OPTION_JSR303: &'static str = "Xph-bean-validation10";
    pub const OPTION_JSR349: &'static str = "Xph-bean-validation11";

    pub fn new(dialect: ValidationDialect) -> Self {
        Self { dialect }
    }

    /// Bean Validation 1.0
    pub fn jsr303() -> Self {
        Self::new(ValidationDialect::Jsr303)
    }

    /// Bean Validation 1.1
    pub fn jsr349() -> Self {
        Self::new(ValidationDialect::Jsr349)
    }

    pub fn dialect(&self) -> ValidationDialect {
        self.dialect
    }
}

impl Synthesizer for BeanValidation {
    fn option_name(&self) -> &'static str {
        match self.dialect {
            ValidationDialect::Jsr303 => Self::OPTION_JSR303,
            ValidationDialect::Jsr349 => Self::OPTION_JSR349,
        }
    }

    fn usage(&self) -> &'static str {
        match self.dialect {
            ValidationDialect::Jsr303 => "inject Bean validation 1.0 annotations (JSR 303)",
            ValidationDialect::Jsr349 => "inject Bean validation 1.1 annotations (JSR 349)",
        }
    }

    fn run(&self, ctx: &mut SynthContext) -> SynthResult<PassReport> {
        info!("Running -{}", self.option_name());
        let mut report = PassReport::new(self.option_name());
        let config = ctx.config.validation.clone();

        for index in 0..ctx.model.classes.len() {
            let class = &ctx.model.classes[index];
            if class.kind == ClassKind::Enum {
                continue;
            }

            let mut work = Vec::new();
            for property in &class.properties {
                if matches!(property.kind, PropertyKind::Reference) {
                    continue;
                }
                let Some(field) = class.field(&property.name) else {
                    return Err(SynthError::MissingField {
                        class: class.name.clone(),
                        field: property.name.clone(),
                    });
                };
                let facts = FieldFacts {
                    numeric: ctx.classifier.is_numeric(&ctx.model, &field.ty),
                    nested: needs_nested_validation(&ctx.model, &field.ty),
                };
                work.push((property.clone(), facts));
            }

            let class = &mut ctx.model.classes[index];
            let class_name = class.name.clone();
            let mut added = 0;
            for (property, facts) in work {
                let Some(field) = class.field_mut(&property.name) else {
                    continue;
                };
                let mut target = Target {
                    field,
                    config: &config,
                    dialect: self.dialect,
                    facts,
                    report: &mut report,
                    added: 0,
                };
                let unsupported = target.apply(&property);
                added += target.added;
                if let Some(description) = unsupported {
                    warn!("Unsupported particle term '{}'", description);
                    report.record(Outcome::Skipped(SkipReason::Unsupported {
                        class: class_name.clone(),
                        field: property.name.clone(),
                        description,
                    }));
                }
            }
            if added > 0 {
                debug!("{} constraints added to {}", added, class_name);
                report.touch_class();
            }
        }

        Ok(report)
    }
}

/// Field properties that need the whole model to decide.
#[derive(Debug, Clone, Copy)]
struct FieldFacts {
    numeric: bool,
    nested: bool,
}

fn needs_nested_validation(model: &CodeModel, ty: &TypeRef) -> bool {
    match ty {
        TypeRef::Array(_) => true,
        TypeRef::Class(class) => {
            NESTED_CONTAINERS.contains(&class.name.as_str()) || model.is_generated(&class.name)
        }
        _ => false,
    }
}

fn is_bound(literal: &str) -> bool {
    !SENTINEL_BOUNDS.contains(&literal)
}

/// One field receiving constraints.
struct Target<'a> {
    field: &'a mut FieldNode,
    config: &'a ValidationConfig,
    dialect: ValidationDialect,
    facts: FieldFacts,
    report: &'a mut PassReport,
    added: usize,
}

impl Target<'_> {
    fn constraint(&self, simple_name: &str) -> Annotation {
        Annotation::new(self.config.constraint(simple_name))
    }

    fn has(&self, simple_name: &str) -> bool {
        self.field.has_annotation(&self.config.constraint(simple_name))
    }

    fn add(&mut self, annotation: Annotation) {
        if self.field.has_annotation(&annotation.class.name) {
            return;
        }
        debug!("@{} on field '{}'", annotation.class.simple_name(), self.field.name);
        self.field.annotations.push(annotation);
        self.report.record(Outcome::Synthesized);
        self.added += 1;
    }

    /// Returns the description of an unsupported particle term.
    fn apply(&mut self, property: &PropertyInfo) -> Option<String> {
        match &property.kind {
            PropertyKind::Element {
                min_occurs,
                max_occurs,
                required,
                term,
            } => {
                if *min_occurs >= 1 && *required {
                    self.add(self.constraint("NotNull"));
                }
                match max_occurs {
                    MaxOccurs::Bounded(max) if *max > 1 => self.add(
                        self.constraint("Size")
                            .param("min", AnnotationValue::Int(i64::from(*min_occurs)))
                            .param("max", AnnotationValue::Int(i64::from(*max))),
                    ),
                    MaxOccurs::Unbounded if *min_occurs > 0 => self.add(
                        self.constraint("Size")
                            .param("min", AnnotationValue::Int(i64::from(*min_occurs))),
                    ),
                    _ => {}
                }
                if self.facts.nested {
                    self.add(Annotation::new(self.config.valid()));
                }
                match term {
                    ParticleTerm::Element { simple_type } => {
                        if let Some(simple_type) = simple_type {
                            self.apply_facets(simple_type);
                        }
                        None
                    }
                    ParticleTerm::ModelGroup => None,
                    ParticleTerm::Unsupported { description } => Some(description.clone()),
                }
            }
            PropertyKind::Attribute {
                required,
                simple_type,
            } => {
                if *required {
                    self.add(self.constraint("NotNull"));
                }
                if let Some(simple_type) = simple_type {
                    self.apply_facets(simple_type);
                }
                None
            }
            PropertyKind::Value { simple_type } => {
                if let Some(simple_type) = simple_type {
                    self.apply_facets(simple_type);
                }
                None
            }
            PropertyKind::Reference => None,
        }
    }

    fn apply_facets(&mut self, simple_type: &SimpleTypeInfo) {
        let textual = self.field.ty.erasure_name() == "String" || self.field.ty.is_array();
        if textual && !self.has("Size") {
            let min = simple_type.int_facet(facet::MIN_LENGTH);
            let max = simple_type.int_facet(facet::MAX_LENGTH);
            if min.is_some() || max.is_some() {
                let mut size = self.constraint("Size");
                if let Some(min) = min {
                    size = size.param("min", AnnotationValue::Int(i64::from(min)));
                }
                if let Some(max) = max {
                    size = size.param("max", AnnotationValue::Int(i64::from(max)));
                }
                self.add(size);
            }
        }

        if let Some(pattern) = simple_type.facet(facet::PATTERN) {
            if pattern != MATCH_ALL_PATTERN {
                self.add(
                    self.constraint("Pattern")
                        .param("regexp", AnnotationValue::Str(pattern.to_string())),
                );
            }
        }

        if self.facts.numeric {
            self.apply_bound(simple_type, facet::MAX_INCLUSIVE, "DecimalMax", false);
            self.apply_bound(simple_type, facet::MIN_INCLUSIVE, "DecimalMin", false);
            self.apply_bound(simple_type, facet::MAX_EXCLUSIVE, "DecimalMax", true);
            self.apply_bound(simple_type, facet::MIN_EXCLUSIVE, "DecimalMin", true);
        }

        if let Some(total) = simple_type.int_facet(facet::TOTAL_DIGITS) {
            let split = simple_type
                .int_facet(facet::FRACTION_DIGITS)
                .and_then(|fraction| Some((total.checked_sub(fraction)?, fraction)));
            let digits = match split {
                Some((integer, fraction)) => self
                    .constraint("Digits")
                    .param("integer", AnnotationValue::Int(i64::from(integer)))
                    .param("fraction", AnnotationValue::Int(i64::from(fraction))),
                None => self
                    .constraint("Digits")
                    .param("integer", AnnotationValue::Int(i64::from(total))),
            };
            self.add(digits);
        }
    }

    fn apply_bound(
        &mut self,
        simple_type: &SimpleTypeInfo,
        facet_name: &str,
        constraint: &str,
        exclusive: bool,
    ) {
        let Some(literal) = simple_type.facet(facet_name) else {
            return;
        };
        if !is_bound(literal) {
            debug!("Ignoring {} sentinel '{}' on '{}'", facet_name, literal, self.field.name);
            return;
        }
        let mut bound = self
            .constraint(constraint)
            .param("value", AnnotationValue::Str(literal.to_string()));
        if exclusive && self.dialect.supports_exclusive_bounds() {
            bound = bound.param("inclusive", AnnotationValue::Bool(false));
        }
        self.add(bound);
    }
}

#[cfg(test)]
#[path = "bean_validation/bean_validation_tests.rs"]
mod bean_validation_tests;
