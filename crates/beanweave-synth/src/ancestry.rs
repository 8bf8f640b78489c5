//! Superclass chains that reach outside the generated set.
//!
//! [`Lineage`] decides whether a synthesized method starts fresh or builds
//! on the superclass. [`ValueCarrierMap`] records which ancestors carry a
//! `value` field, so that [`value_field_type`] can find the closest one.

use crate::report::SkipReason;
use beanweave_core::{ClassNode, CodeModel, Parent, TypeRef, TypeResolver};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, warn};

/// Name of the field that makes a class a value carrier.
pub const VALUE_FIELD: &str = "value";

const CCTS_PACKAGE: &str = "com.helger.xsds.ccts.cct.schemamodule.";

/// Core component types whose `value` field is known without loading them.
const CCTS_VALUE_TYPES: &[(&str, &str)] = &[
    ("AmountType", "java.math.BigDecimal"),
    ("BinaryObjectType", "byte[]"),
    ("CodeType", "java.lang.String"),
    ("DateTimeType", "java.lang.String"),
    ("IdentifierType", "java.lang.String"),
    ("MeasureType", "java.math.BigDecimal"),
    ("NumericType", "java.math.BigDecimal"),
    ("QuantityType", "java.math.BigDecimal"),
    ("TextType", "java.lang.String"),
];

/// Whether a class starts its own hierarchy or extends another class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lineage {
    /// No superclass other than `java.lang.Object`
    Root,

    /// Extends a generated or external class
    Derived,
}

impl Lineage {
    pub fn of(model: &CodeModel, class: &ClassNode) -> Self {
        match model.parent_of(class) {
            Parent::Root => Lineage::Root,
            Parent::Generated(_) | Parent::External(_) => Lineage::Derived,
        }
    }

    pub fn is_root(&self) -> bool {
        matches!(self, Lineage::Root)
    }
}

/// Class name to the type of its `value` field, for ancestors of generated classes.
#[derive(Debug, Clone, Default)]
pub struct ValueCarrierMap {
    entries: BTreeMap<String, TypeRef>,
    skipped: Vec<SkipReason>,
}

impl ValueCarrierMap {
    /// Scan the ancestors of every generated class.
    ///
    /// `java.*` classes are never scanned. An external ancestor that cannot
    /// be loaded ends the walk for that chain and is reported as skipped.
    pub fn build(model: &CodeModel) -> Self {
        let mut map = Self::default();
        let mut handled = BTreeSet::new();

        for class in &model.classes {
            let mut next = class.parent.as_ref().map(|p| p.name.clone());
            while let Some(name) = next.take() {
                if name.starts_with("java.") || !handled.insert(name.clone()) {
                    break;
                }

                if let Some(generated) = model.class(&name) {
                    if let Some(field) = generated.field(VALUE_FIELD) {
                        map.entries.insert(name.clone(), field.ty.clone());
                    }
                    next = generated.parent.as_ref().map(|p| p.name.clone());
                    continue;
                }

                match model.external.resolve(&name) {
                    Some(external) => {
                        if let Some(ty) = external.fields.get(VALUE_FIELD) {
                            debug!("External class '{}' carries a value of type {}", name, ty);
                            map.entries.insert(name.clone(), ty.clone());
                        }
                        next = external.superclass.clone();
                    }
                    None => {
                        warn!("Failed to load super class '{}'", name);
                        map.skipped
                            .push(SkipReason::ResolveFailed { class: name.clone() });
                    }
                }
            }
        }

        for (simple, ty) in CCTS_VALUE_TYPES {
            let name = format!("{}{}", CCTS_PACKAGE, simple);
            if !map.entries.contains_key(&name) {
                if let Ok(ty) = TypeRef::parse(ty) {
                    map.entries.insert(name, ty);
                }
            }
        }

        map
    }

    pub fn get(&self, class_name: &str) -> Option<&TypeRef> {
        self.entries.get(class_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ancestors that could not be loaded while building the map.
    pub fn skipped(&self) -> &[SkipReason] {
        &self.skipped
    }
}

/// Type of the `value` field visible in `class`, own declaration first.
pub fn value_field_type(
    model: &CodeModel,
    carriers: &ValueCarrierMap,
    class: &ClassNode,
) -> Option<TypeRef> {
    if let Some(field) = class.field(VALUE_FIELD) {
        return Some(field.ty.clone());
    }

    let mut visited = BTreeSet::new();
    let mut next = class.parent.as_ref().map(|p| p.name.clone());
    while let Some(name) = next.take() {
        if !visited.insert(name.clone()) {
            break;
        }
        if let Some(ty) = carriers.get(&name) {
            return Some(ty.clone());
        }
        next = match model.class(&name) {
            Some(generated) => generated.parent.as_ref().map(|p| p.name.clone()),
            None => model
                .external
                .resolve(&name)
                .and_then(|external| external.superclass.clone()),
        };
    }
    None
}
