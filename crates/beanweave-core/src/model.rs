//! The class model produced by the schema compiler.
//!
//! A [`CodeModel`] holds every generated [`ClassNode`] plus a table of
//! external classes that can be "loaded" by name. Synthesis passes read the
//! model and append members to its classes; nothing is ever removed.

use crate::error::{ModelError, ModelResult};
use crate::member::{Annotation, ConstructorDef, MethodDef};
use crate::schema::PropertyInfo;
use crate::types::{ClassRef, TypeRef};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Name of the synthetic field created for `xs:anyAttribute`.
pub const OTHER_ATTRIBUTES_FIELD: &str = "otherAttributes";

/// Qualified name of the implicit root of every Java class.
pub const JAVA_OBJECT: &str = "java.lang.Object";

/// Class or enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassKind {
    #[default]
    Class,
    Enum,
}

/// Access modifier of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Private,
    /// What the schema compiler emits for instance fields.
    #[default]
    Protected,
    Public,
}

impl Visibility {
    pub fn keyword(&self) -> &'static str {
        match self {
            Visibility::Private => "private",
            Visibility::Protected => "protected",
            Visibility::Public => "public",
        }
    }
}

/// One instance or static field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldNode {
    pub name: String,
    pub ty: TypeRef,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

impl FieldNode {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            is_static: false,
            visibility: Visibility::Protected,
            annotations: Vec::new(),
        }
    }

    /// Whether an annotation of the given qualified class is applied.
    pub fn has_annotation(&self, class: &str) -> bool {
        self.annotations.iter().any(|a| a.class.name == class)
    }
}

/// One generated data type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassNode {
    /// Fully qualified name.
    pub name: String,
    #[serde(default)]
    pub kind: ClassKind,
    #[serde(default)]
    pub parent: Option<ClassRef>,
    #[serde(default)]
    pub is_abstract: bool,
    #[serde(default)]
    pub interfaces: Vec<ClassRef>,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    #[serde(default)]
    pub fields: Vec<FieldNode>,
    #[serde(default)]
    pub properties: Vec<PropertyInfo>,
    #[serde(default)]
    pub constructors: Vec<ConstructorDef>,
    #[serde(default)]
    pub methods: Vec<MethodDef>,
    #[serde(default)]
    pub javadoc: Vec<String>,
    /// Enum constants, only for [`ClassKind::Enum`].
    #[serde(default)]
    pub constants: Vec<String>,
}

impl ClassNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ClassKind::Class,
            parent: None,
            is_abstract: false,
            interfaces: Vec::new(),
            annotations: Vec::new(),
            fields: Vec::new(),
            properties: Vec::new(),
            constructors: Vec::new(),
            methods: Vec::new(),
            javadoc: Vec::new(),
            constants: Vec::new(),
        }
    }

    pub fn simple_name(&self) -> &str {
        crate::types::simple_name_of(&self.name)
    }

    pub fn package(&self) -> &str {
        match self.name.rfind('.') {
            Some(idx) => &self.name[..idx],
            None => "",
        }
    }

    /// The type of this class as used in declarations.
    pub fn as_type(&self) -> TypeRef {
        TypeRef::class(self.name.clone())
    }

    pub fn field(&self, name: &str) -> Option<&FieldNode> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut FieldNode> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    pub fn property(&self, field_name: &str) -> Option<&PropertyInfo> {
        self.properties.iter().find(|p| p.name == field_name)
    }

    /// Whether a method with this name and exact parameter types exists.
    pub fn has_method(&self, name: &str, params: &[TypeRef]) -> bool {
        self.methods
            .iter()
            .any(|m| m.name == name && m.has_signature(params))
    }

    /// Whether a zero-argument method with this name exists.
    pub fn has_method_named_without_params(&self, name: &str) -> bool {
        self.has_method(name, &[])
    }

    pub fn has_annotation(&self, class: &str) -> bool {
        self.annotations.iter().any(|a| a.class.name == class)
    }

    pub fn implements(&self, interface: &str) -> bool {
        self.interfaces.iter().any(|i| i.name == interface)
    }

    pub fn has_constructor(&self, params: &[TypeRef]) -> bool {
        self.constructors.iter().any(|c| c.has_signature(params))
    }

    /// Add a class-level javadoc note once.
    pub fn add_javadoc_note(&mut self, note: String) {
        if !self.javadoc.contains(&note) {
            self.javadoc.push(note);
        }
    }
}

/// Package-level declarations, rendered as `package-info.java`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageNode {
    pub name: String,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    #[serde(default)]
    pub javadoc: Vec<String>,
}

impl PackageNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            annotations: Vec::new(),
            javadoc: Vec::new(),
        }
    }

    pub fn has_annotation(&self, class: &str) -> bool {
        self.annotations.iter().any(|a| a.class.name == class)
    }
}

/// Where a class's superclass lives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Parent<'a> {
    /// No superclass, or `java.lang.Object`.
    Root,

    /// A class generated in the same run.
    Generated(&'a ClassNode),

    /// A class outside the generated set, known only by name.
    External(&'a ClassRef),
}

/// A class outside the generated set, as reflection would see it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalClass {
    pub name: String,
    #[serde(default)]
    pub is_enum: bool,

    /// Whether the class is a `java.lang.Number`.
    #[serde(default)]
    pub is_number: bool,
    #[serde(default)]
    pub superclass: Option<String>,

    /// Public fields, name to type.
    #[serde(default)]
    pub fields: BTreeMap<String, TypeRef>,
}

impl ExternalClass {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_enum: false,
            is_number: false,
            superclass: None,
            fields: BTreeMap::new(),
        }
    }
}

/// Reflective lookup of classes outside the generated set.
///
/// `None` means the class could not be loaded; callers treat that as "not
/// found" and continue with the conservative interpretation.
pub trait TypeResolver {
    fn resolve(&self, binary_name: &str) -> Option<&ExternalClass>;
}

/// Table of external classes available to a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExternalTypes {
    classes: BTreeMap<String, ExternalClass>,
}

impl ExternalTypes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, class: ExternalClass) {
        self.classes.insert(class.name.clone(), class);
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl TypeResolver for ExternalTypes {
    fn resolve(&self, binary_name: &str) -> Option<&ExternalClass> {
        self.classes.get(binary_name)
    }
}

/// All generated classes of one compiler run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodeModel {
    #[serde(default)]
    pub classes: Vec<ClassNode>,

    /// Per-package element factories. Bean passes do not touch them.
    #[serde(default)]
    pub object_factories: Vec<ClassNode>,

    /// Packages carrying declarations of their own.
    #[serde(default)]
    pub packages: Vec<PackageNode>,

    #[serde(default)]
    pub external: ExternalTypes,
}

impl CodeModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_class(&mut self, class: ClassNode) -> &mut Self {
        self.classes.push(class);
        self
    }

    /// The declarations of package `name`, created on first use.
    pub fn package_mut(&mut self, name: &str) -> &mut PackageNode {
        let idx = match self.packages.iter().position(|p| p.name == name) {
            Some(idx) => idx,
            None => {
                self.packages.push(PackageNode::new(name));
                self.packages.len() - 1
            }
        };
        &mut self.packages[idx]
    }

    /// Load a model from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> ModelResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Parse a model from JSON.
    pub fn from_json(json: &str) -> ModelResult<Self> {
        let model: CodeModel = serde_json::from_str(json)?;
        model.validate()?;
        Ok(model)
    }

    /// Serialize the model, including synthesized members, to JSON.
    pub fn to_json(&self) -> ModelResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check structural invariants: unique class names and an acyclic parent chain.
    pub fn validate(&self) -> ModelResult<()> {
        let mut seen = std::collections::HashSet::new();
        for class in &self.classes {
            if !seen.insert(class.name.as_str()) {
                return Err(ModelError::DuplicateClass(class.name.clone()));
            }
        }
        for class in &self.classes {
            let mut steps = 0usize;
            let mut current = class;
            while let Parent::Generated(parent) = self.parent_of(current) {
                steps += 1;
                if steps > self.classes.len() {
                    return Err(ModelError::CyclicInheritance(class.name.clone()));
                }
                current = parent;
            }
        }
        Ok(())
    }

    /// Look up a generated class.
    pub fn class(&self, name: &str) -> Option<&ClassNode> {
        self.classes.iter().find(|c| c.name == name)
    }

    pub fn class_index(&self, name: &str) -> Option<usize> {
        self.classes.iter().position(|c| c.name == name)
    }

    /// Look up a generated class or fail.
    pub fn require_class(&self, name: &str) -> ModelResult<&ClassNode> {
        self.class(name)
            .ok_or_else(|| ModelError::UnknownClass(name.to_string()))
    }

    /// Whether `name` is a class generated in this run.
    pub fn is_generated(&self, name: &str) -> bool {
        self.class(name).is_some()
    }

    /// Whether `name` is an enum generated in this run.
    pub fn is_generated_enum(&self, name: &str) -> bool {
        self.class(name)
            .is_some_and(|c| c.kind == ClassKind::Enum)
    }

    /// Resolve the superclass of `class`.
    pub fn parent_of<'a>(&'a self, class: &'a ClassNode) -> Parent<'a> {
        match &class.parent {
            None => Parent::Root,
            Some(parent) if parent.name == JAVA_OBJECT => Parent::Root,
            Some(parent) => match self.class(&parent.name) {
                Some(generated) => Parent::Generated(generated),
                None => Parent::External(parent),
            },
        }
    }

    /// Generated classes whose direct superclass is `name`.
    pub fn subclasses_of<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a ClassNode> + 'a {
        self.classes
            .iter()
            .filter(move |c| c.parent.as_ref().is_some_and(|p| p.name == name))
    }
}
