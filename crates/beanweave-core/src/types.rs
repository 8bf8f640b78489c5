//! Type descriptors for the class model.
//!
//! A [`TypeRef`] is the declared type of a field, parameter or return value.
//! It is written in JSON models as a Java type string
//! (`java.util.List<com.example.ItemType>`, `byte[]`, `int`) and parsed with
//! [`TypeRef::parse`].

use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Java primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Primitive {
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
}

impl Primitive {
    /// Parse a primitive keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Some(match keyword {
            "boolean" => Primitive::Boolean,
            "byte" => Primitive::Byte,
            "char" => Primitive::Char,
            "short" => Primitive::Short,
            "int" => Primitive::Int,
            "long" => Primitive::Long,
            "float" => Primitive::Float,
            "double" => Primitive::Double,
            _ => return None,
        })
    }

    /// The Java keyword.
    pub fn keyword(&self) -> &'static str {
        match self {
            Primitive::Boolean => "boolean",
            Primitive::Byte => "byte",
            Primitive::Char => "char",
            Primitive::Short => "short",
            Primitive::Int => "int",
            Primitive::Long => "long",
            Primitive::Float => "float",
            Primitive::Double => "double",
        }
    }

    /// Fully qualified name of the wrapper class.
    pub fn boxed_name(&self) -> &'static str {
        match self {
            Primitive::Boolean => "java.lang.Boolean",
            Primitive::Byte => "java.lang.Byte",
            Primitive::Char => "java.lang.Character",
            Primitive::Short => "java.lang.Short",
            Primitive::Int => "java.lang.Integer",
            Primitive::Long => "java.lang.Long",
            Primitive::Float => "java.lang.Float",
            Primitive::Double => "java.lang.Double",
        }
    }
}

/// A reference to a named class, optionally parameterized.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClassRef {
    /// Fully qualified (binary) name, e.g. `java.util.List`.
    pub name: String,

    /// Type arguments, empty for raw or non-generic types.
    pub args: Vec<TypeRef>,
}

impl ClassRef {
    /// Create a non-parameterized class reference.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Create a parameterized class reference.
    pub fn generic(name: impl Into<String>, args: Vec<TypeRef>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    /// The unqualified name of the erasure (`List` for `java.util.List<X>`).
    pub fn simple_name(&self) -> &str {
        simple_name_of(&self.name)
    }

    /// The package part of the name, empty for the default package.
    pub fn package(&self) -> &str {
        match self.name.rfind('.') {
            Some(idx) => &self.name[..idx],
            None => "",
        }
    }
}

/// A declared type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TypeRef {
    /// `void`, only valid as a method return type.
    Void,

    /// A primitive scalar.
    Primitive(Primitive),

    /// A class, interface or enum type.
    Class(ClassRef),

    /// An array of the element type.
    Array(Box<TypeRef>),

    /// `?` or `? extends Bound`.
    Wildcard(Option<Box<TypeRef>>),
}

impl TypeRef {
    /// Shorthand for a non-parameterized class type.
    pub fn class(name: impl Into<String>) -> Self {
        TypeRef::Class(ClassRef::new(name))
    }

    /// Shorthand for a parameterized class type.
    pub fn generic(name: impl Into<String>, args: Vec<TypeRef>) -> Self {
        TypeRef::Class(ClassRef::generic(name, args))
    }

    /// `java.util.List<elem>`.
    pub fn list_of(elem: TypeRef) -> Self {
        TypeRef::generic("java.util.List", vec![elem])
    }

    /// Shorthand for an array type.
    pub fn array_of(elem: TypeRef) -> Self {
        TypeRef::Array(Box::new(elem))
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, TypeRef::Primitive(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, TypeRef::Array(_))
    }

    /// The class reference, if this is a class type.
    pub fn as_class(&self) -> Option<&ClassRef> {
        match self {
            TypeRef::Class(class) => Some(class),
            _ => None,
        }
    }

    /// Simple name of the erasure. Arrays and primitives use their Java spelling.
    pub fn erasure_name(&self) -> String {
        match self {
            TypeRef::Void => "void".to_string(),
            TypeRef::Primitive(p) => p.keyword().to_string(),
            TypeRef::Class(class) => class.simple_name().to_string(),
            TypeRef::Array(elem) => format!("{}[]", elem.erasure_name()),
            TypeRef::Wildcard(Some(bound)) => bound.erasure_name(),
            TypeRef::Wildcard(None) => "Object".to_string(),
        }
    }

    /// Whether the erasure's simple name equals `name`.
    pub fn is_erasure(&self, name: &str) -> bool {
        match self {
            TypeRef::Class(class) => class.simple_name() == name,
            TypeRef::Wildcard(Some(bound)) => bound.is_erasure(name),
            _ => false,
        }
    }

    /// First type argument of a parameterized class type.
    pub fn first_type_arg(&self) -> Option<&TypeRef> {
        self.as_class().and_then(|class| class.args.first())
    }

    /// Element type of a `List<T>`; `None` for anything else.
    pub fn list_element(&self) -> Option<&TypeRef> {
        if self.is_erasure("List") {
            self.first_type_arg()
        } else {
            None
        }
    }

    /// Element type of an array.
    pub fn array_element(&self) -> Option<&TypeRef> {
        match self {
            TypeRef::Array(elem) => Some(elem),
            _ => None,
        }
    }

    /// Upper bound of a wildcard, or the type itself.
    pub fn unwrap_wildcard(&self) -> &TypeRef {
        match self {
            TypeRef::Wildcard(Some(bound)) => bound,
            other => other,
        }
    }

    /// Primitive boolean or `java.lang.Boolean`.
    pub fn is_boolean_like(&self) -> bool {
        match self {
            TypeRef::Primitive(Primitive::Boolean) => true,
            TypeRef::Class(class) => class.name == "java.lang.Boolean" || class.name == "Boolean",
            _ => false,
        }
    }

    /// The boxed form of a primitive; other types are returned unchanged.
    pub fn boxed(&self) -> TypeRef {
        match self {
            TypeRef::Primitive(p) => TypeRef::class(p.boxed_name()),
            other => other.clone(),
        }
    }

    /// Parse a Java type string.
    pub fn parse(input: &str) -> Result<Self, ModelError> {
        let mut parser = TypeParser {
            src: input,
            pos: 0,
        };
        let ty = parser.parse_type()?;
        parser.skip_ws();
        if parser.pos != input.len() {
            return Err(parser.error("trailing characters"));
        }
        Ok(ty)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Void => write!(f, "void"),
            TypeRef::Primitive(p) => write!(f, "{}", p.keyword()),
            TypeRef::Class(class) => {
                write!(f, "{}", class.name)?;
                if !class.args.is_empty() {
                    write!(f, "<")?;
                    for (i, arg) in class.args.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{}", arg)?;
                    }
                    write!(f, ">")?;
                }
                Ok(())
            }
            TypeRef::Array(elem) => write!(f, "{}[]", elem),
            TypeRef::Wildcard(None) => write!(f, "?"),
            TypeRef::Wildcard(Some(bound)) => write!(f, "? extends {}", bound),
        }
    }
}

impl TryFrom<String> for TypeRef {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        TypeRef::parse(&value)
    }
}

impl From<TypeRef> for String {
    fn from(value: TypeRef) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for ClassRef {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match TypeRef::parse(&value)? {
            TypeRef::Class(class) => Ok(class),
            _ => Err(ModelError::InvalidType {
                input: value,
                reason: "expected a class type".to_string(),
            }),
        }
    }
}

impl From<ClassRef> for String {
    fn from(value: ClassRef) -> Self {
        TypeRef::Class(value).to_string()
    }
}

/// Unqualified part of a dotted name.
pub fn simple_name_of(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) => &name[idx + 1..],
        None => name,
    }
}

struct TypeParser<'a> {
    src: &'a str,
    pos: usize,
}

impl TypeParser<'_> {
    fn error(&self, reason: &str) -> ModelError {
        ModelError::InvalidType {
            input: self.src.to_string(),
            reason: format!("{} at offset {}", reason, self.pos),
        }
    }

    fn skip_ws(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.pos += c.len_utf8();
            } else {
                break;
            }
        }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn eat(&mut self, token: &str) -> bool {
        self.skip_ws();
        if self.src[self.pos..].starts_with(token) {
            self.pos += token.len();
            true
        } else {
            false
        }
    }

    fn parse_name(&mut self) -> Result<&str, ModelError> {
        self.skip_ws();
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || c == '_' || c == '$' || c == '.' {
                self.pos += c.len_utf8();
            } else {
                break;
            }
        }
        if start == self.pos {
            return Err(self.error("expected a type name"));
        }
        Ok(&self.src[start..self.pos])
    }

    fn parse_type(&mut self) -> Result<TypeRef, ModelError> {
        if self.eat("?") {
            if self.eat("extends ") {
                let bound = self.parse_type()?;
                return Ok(TypeRef::Wildcard(Some(Box::new(bound))));
            }
            return Ok(TypeRef::Wildcard(None));
        }

        let name = self.parse_name()?.to_string();
        let mut ty = if name == "void" {
            TypeRef::Void
        } else if let Some(p) = Primitive::from_keyword(&name) {
            TypeRef::Primitive(p)
        } else {
            let mut args = Vec::new();
            if self.eat("<") {
                loop {
                    args.push(self.parse_type()?);
                    if self.eat(",") {
                        continue;
                    }
                    if self.eat(">") {
                        break;
                    }
                    return Err(self.error("expected ',' or '>'"));
                }
            }
            TypeRef::Class(ClassRef { name, args })
        };

        while self.eat("[]") {
            ty = TypeRef::Array(Box::new(ty));
        }
        Ok(ty)
    }
}
