//! Methods, constructors, annotations and javadoc of generated classes.

use crate::ast::Block;
use crate::types::{ClassRef, TypeRef};
use serde::{Deserialize, Serialize};

/// Who created a member.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    /// Produced by the schema compiler before synthesis.
    #[default]
    Schema,

    /// Appended by the synthesis pass with this option name.
    Synthesized(String),
}

impl Origin {
    pub fn is_synthesized(&self) -> bool {
        matches!(self, Origin::Synthesized(_))
    }
}

/// Java visibility and modifiers that matter for generated members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Modifiers {
    #[serde(default)]
    pub is_abstract: bool,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub is_private: bool,
}

/// Literal value of an annotation parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnnotationValue {
    Bool(bool),
    Int(i64),
    Str(String),
}

/// An applied annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub class: ClassRef,

    #[serde(default)]
    pub params: Vec<(String, AnnotationValue)>,
}

impl Annotation {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: ClassRef::new(class),
            params: Vec::new(),
        }
    }

    pub fn param(mut self, name: &str, value: AnnotationValue) -> Self {
        self.params.push((name.to_string(), value));
        self
    }

    /// Look up a parameter value by name.
    pub fn get(&self, name: &str) -> Option<&AnnotationValue> {
        self.params.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }
}

/// Structured javadoc.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Javadoc {
    #[serde(default)]
    pub lines: Vec<String>,
    #[serde(default)]
    pub params: Vec<(String, String)>,
    #[serde(default)]
    pub returns: Option<String>,
    #[serde(default)]
    pub throws: Vec<(String, String)>,
}

impl Javadoc {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
            && self.params.is_empty()
            && self.returns.is_none()
            && self.throws.is_empty()
    }

    pub fn line(&mut self, text: impl Into<String>) -> &mut Self {
        self.lines.push(text.into());
        self
    }

    pub fn param(&mut self, name: impl Into<String>, text: impl Into<String>) -> &mut Self {
        self.params.push((name.into(), text.into()));
        self
    }

    pub fn returns(&mut self, text: impl Into<String>) -> &mut Self {
        self.returns = Some(text.into());
        self
    }

    pub fn throws(&mut self, class: impl Into<String>, text: impl Into<String>) -> &mut Self {
        self.throws.push((class.into(), text.into()));
        self
    }
}

/// A method or constructor parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    pub ty: TypeRef,
    #[serde(default)]
    pub is_final: bool,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

impl Param {
    /// A `final` parameter.
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            is_final: true,
            annotations: Vec::new(),
        }
    }

    pub fn annotate(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }
}

/// A method of a generated class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodDef {
    pub name: String,
    pub return_type: TypeRef,
    #[serde(default)]
    pub params: Vec<Param>,
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    #[serde(default)]
    pub throws: Vec<ClassRef>,
    #[serde(default)]
    pub javadoc: Javadoc,

    /// `None` for abstract methods. Schema-compiler methods read from a model
    /// file carry an empty body.
    #[serde(default)]
    pub body: Option<Block>,

    #[serde(default)]
    pub origin: Origin,
}

impl MethodDef {
    /// A public method with an empty body.
    pub fn new(name: impl Into<String>, return_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            return_type,
            params: Vec::new(),
            modifiers: Modifiers::default(),
            annotations: Vec::new(),
            throws: Vec::new(),
            javadoc: Javadoc::default(),
            body: Some(Block::new()),
            origin: Origin::Schema,
        }
    }

    pub fn with_param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn with_body(mut self, body: Block) -> Self {
        self.body = Some(body);
        self
    }

    /// Turn this into an abstract declaration.
    pub fn into_abstract(mut self) -> Self {
        self.modifiers.is_abstract = true;
        self.body = None;
        self
    }

    pub fn annotate(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn synthesized_by(mut self, option: &str) -> Self {
        self.origin = Origin::Synthesized(option.to_string());
        self
    }

    /// Whether the parameter types equal `types` exactly.
    pub fn has_signature(&self, types: &[TypeRef]) -> bool {
        self.params.len() == types.len()
            && self.params.iter().zip(types).all(|(p, t)| &p.ty == t)
    }
}

/// A constructor of a generated class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstructorDef {
    #[serde(default)]
    pub params: Vec<Param>,
    #[serde(default)]
    pub javadoc: Javadoc,
    #[serde(default)]
    pub body: Block,
    #[serde(default)]
    pub origin: Origin,
}

impl ConstructorDef {
    pub fn new() -> Self {
        Self {
            params: Vec::new(),
            javadoc: Javadoc::default(),
            body: Block::new(),
            origin: Origin::Schema,
        }
    }

    pub fn with_param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn with_body(mut self, body: Block) -> Self {
        self.body = body;
        self
    }

    pub fn synthesized_by(mut self, option: &str) -> Self {
        self.origin = Origin::Synthesized(option.to_string());
        self
    }

    pub fn has_signature(&self, types: &[TypeRef]) -> bool {
        self.params.len() == types.len()
            && self.params.iter().zip(types).all(|(p, t)| &p.ty == t)
    }
}

impl Default for ConstructorDef {
    fn default() -> Self {
        Self::new()
    }
}
