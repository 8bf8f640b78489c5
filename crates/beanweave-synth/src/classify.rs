//! Semantic categories of field types.
//!
//! Every pass decides how to compare, hash or copy a field by its
//! [`TypeCategory`]. Classification is mostly structural; the only
//! reflective step is the "is this external class an enum" lookup, which is
//! memoized per binary name for the lifetime of a [`TypeClassifier`].

use beanweave_core::{ClassKind, CodeModel, Primitive, TypeRef, TypeResolver};
use dashmap::DashMap;
use tracing::debug;

/// Simple names of external types whose instances are immutable values.
const IMMUTABLE_VALUE_TYPES: &[&str] = &[
    "BigDecimal",
    "BigInteger",
    "Boolean",
    "Byte",
    "Character",
    "DataHandler",
    "Double",
    "Duration",
    "Element",
    "Float",
    "Integer",
    "LocalDate",
    "LocalDateTime",
    "LocalTime",
    "Long",
    "OffsetDate",
    "OffsetDateTime",
    "OffsetTime",
    "Period",
    "PeriodDuration",
    "QName",
    "Serializable",
    "Short",
    "String",
    "W3CEndpointReference",
    "XMLOffsetDate",
    "XMLOffsetDateTime",
    "XMLOffsetTime",
    "ZonedDateTime",
];

/// Mutable external value type that supports a native `clone()`.
const EXTERNALLY_CLONEABLE_TYPE: &str = "XMLGregorianCalendar";

/// Simple names treated as numeric regardless of case.
const NUMERIC_SIMPLE_NAMES: &[&str] = &[
    "BigDecimal",
    "BigInteger",
    "String",
    "byte",
    "short",
    "int",
    "long",
];

/// JDK subclasses of `java.lang.Number` known without a resolver.
const JDK_NUMBER_TYPES: &[&str] = &[
    "java.lang.Byte",
    "java.lang.Short",
    "java.lang.Integer",
    "java.lang.Long",
    "java.lang.Float",
    "java.lang.Double",
    "java.math.BigDecimal",
    "java.math.BigInteger",
    "java.util.concurrent.atomic.AtomicInteger",
    "java.util.concurrent.atomic.AtomicLong",
    "java.util.concurrent.atomic.DoubleAccumulator",
    "java.util.concurrent.atomic.DoubleAdder",
    "java.util.concurrent.atomic.LongAccumulator",
    "java.util.concurrent.atomic.LongAdder",
];

/// How a field's value is compared, hashed and copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeCategory {
    Primitive,
    ImmutableValue,
    EnumValue,
    ArrayOfImmutable,
    ExternallyCloneable,
    WrappedUnionElement,
    CollectionOfWrappedUnionElement,
    CollectionOfAny,
    CollectionOfOther,
    GenericObject,
    NestedGeneratedOrExternal,
}

impl TypeCategory {
    /// Values of this category may be shared between an object and its copy.
    pub fn is_shareable(&self) -> bool {
        matches!(
            self,
            TypeCategory::Primitive
                | TypeCategory::ImmutableValue
                | TypeCategory::EnumValue
                | TypeCategory::GenericObject
        )
    }

    pub fn is_collection(&self) -> bool {
        matches!(
            self,
            TypeCategory::CollectionOfWrappedUnionElement
                | TypeCategory::CollectionOfAny
                | TypeCategory::CollectionOfOther
        )
    }
}

/// Whether `ty` is `java.lang.Object` (or unqualified `Object`).
pub fn is_object(ty: &TypeRef) -> bool {
    match ty {
        TypeRef::Class(class) => class.name == "java.lang.Object" || class.name == "Object",
        TypeRef::Wildcard(None) => true,
        _ => false,
    }
}

/// Classifies field types for one synthesis run.
#[derive(Debug, Default)]
pub struct TypeClassifier {
    enum_cache: DashMap<String, bool>,
}

impl TypeClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide the category of a declared type.
    pub fn classify(&self, model: &CodeModel, ty: &TypeRef) -> TypeCategory {
        match ty.unwrap_wildcard() {
            TypeRef::Primitive(_) => TypeCategory::Primitive,
            TypeRef::Array(elem) => {
                if self.classify(model, elem).is_shareable() {
                    TypeCategory::ArrayOfImmutable
                } else {
                    TypeCategory::NestedGeneratedOrExternal
                }
            }
            TypeRef::Wildcard(None) => TypeCategory::GenericObject,
            ty @ TypeRef::Class(class) => {
                if ty.is_erasure("List") {
                    return match ty.first_type_arg().map(TypeRef::unwrap_wildcard) {
                        Some(elem) if elem.is_erasure("JAXBElement") => {
                            TypeCategory::CollectionOfWrappedUnionElement
                        }
                        Some(elem) if is_object(elem) => TypeCategory::CollectionOfAny,
                        _ => TypeCategory::CollectionOfOther,
                    };
                }
                if ty.is_erasure("JAXBElement") {
                    return TypeCategory::WrappedUnionElement;
                }
                if is_object(ty) {
                    return TypeCategory::GenericObject;
                }
                if let Some(generated) = model.class(&class.name) {
                    return if generated.kind == ClassKind::Enum {
                        TypeCategory::EnumValue
                    } else {
                        TypeCategory::NestedGeneratedOrExternal
                    };
                }
                let simple = class.simple_name();
                if IMMUTABLE_VALUE_TYPES.contains(&simple) {
                    return TypeCategory::ImmutableValue;
                }
                if simple == EXTERNALLY_CLONEABLE_TYPE {
                    return TypeCategory::ExternallyCloneable;
                }
                if self.is_external_enum(&model.external, &class.name) {
                    return TypeCategory::EnumValue;
                }
                TypeCategory::NestedGeneratedOrExternal
            }
            TypeRef::Void | TypeRef::Wildcard(Some(_)) => TypeCategory::NestedGeneratedOrExternal,
        }
    }

    /// Look up an external class for enum-ness, memoizing the answer.
    ///
    /// A class that cannot be resolved is remembered as "not an enum".
    pub fn is_external_enum(&self, resolver: &dyn TypeResolver, binary_name: &str) -> bool {
        if let Some(cached) = self.enum_cache.get(binary_name) {
            return *cached;
        }
        let is_enum = match resolver.resolve(binary_name) {
            Some(class) => class.is_enum,
            None => {
                debug!("Failed to load class '{}', assuming it is not an enum", binary_name);
                false
            }
        };
        self.enum_cache.insert(binary_name.to_string(), is_enum);
        is_enum
    }

    /// Number of external names looked up so far.
    pub fn cached_len(&self) -> usize {
        self.enum_cache.len()
    }

    /// Whether numeric range facets apply to a field of this type.
    pub fn is_numeric(&self, model: &CodeModel, ty: &TypeRef) -> bool {
        match ty.unwrap_wildcard() {
            TypeRef::Primitive(p) => !matches!(p, Primitive::Boolean | Primitive::Char),
            TypeRef::Class(class) => {
                let simple = class.simple_name();
                NUMERIC_SIMPLE_NAMES
                    .iter()
                    .any(|n| n.eq_ignore_ascii_case(simple))
                    || JDK_NUMBER_TYPES.contains(&class.name.as_str())
                    || model
                        .external
                        .resolve(&class.name)
                        .is_some_and(|external| external.is_number)
            }
            _ => false,
        }
    }
}
