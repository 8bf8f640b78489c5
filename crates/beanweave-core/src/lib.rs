//! beanweave-core - Class model, bodies and rendering
//!
//! This crate provides the in-memory model that synthesis passes operate on:
//! - [`CodeModel`], [`ClassNode`] and [`FieldNode`] for generated classes
//! - [`TypeRef`] for declared types
//! - [`ast`] for synthesized method bodies
//! - [`PropertyInfo`] for the schema metadata view
//! - [`SynthConfig`] for run configuration
//! - [`java`] for rendering classes to Java source

pub mod ast;
mod config;
mod error;
pub mod java;
pub mod member;
mod model;
pub mod naming;
pub mod schema;
mod types;

pub use config::{RuntimeClasses, SynthConfig, ValidationConfig, ValidationDialect};
pub use error::{ModelError, ModelResult};
pub use member::{Annotation, AnnotationValue, ConstructorDef, Javadoc, MethodDef, Origin, Param};
pub use model::{
    ClassKind, ClassNode, CodeModel, ExternalClass, ExternalTypes, FieldNode, JAVA_OBJECT,
    OTHER_ATTRIBUTES_FIELD, PackageNode, Parent, TypeResolver, Visibility,
};
pub use schema::{MaxOccurs, ParticleTerm, PropertyInfo, PropertyKind, SimpleTypeInfo};
pub use types::{ClassRef, Primitive, TypeRef, simple_name_of};

/// Log levels
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Off = 5,
}

impl LogLevel {
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => LogLevel::Trace,
            1 => LogLevel::Debug,
            2 => LogLevel::Info,
            3 => LogLevel::Warn,
            4 => LogLevel::Error,
            _ => LogLevel::Off,
        }
    }

    /// Parse a level name case-insensitively; unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        Some(match name.trim().to_ascii_lowercase().as_str() {
            "trace" => LogLevel::Trace,
            "debug" => LogLevel::Debug,
            "info" => LogLevel::Info,
            "warn" | "warning" => LogLevel::Warn,
            "error" => LogLevel::Error,
            "off" => LogLevel::Off,
            _ => return None,
        })
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Off => write!(f, "OFF"),
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ast::{Block, Expr, Stmt};
    pub use crate::{
        Annotation, ClassNode, ClassRef, CodeModel, ConstructorDef, FieldNode, LogLevel,
        MethodDef, ModelError, ModelResult, Param, Parent, PropertyInfo, SynthConfig, TypeRef,
        TypeResolver,
    };
}
