//! Statement and expression tree for synthesized method bodies.
//!
//! The tree covers the subset of Java that the synthesis passes emit and is
//! rendered by [`crate::java`]. Builder helpers keep pass code close to the
//! shape of the emitted Java.

use crate::types::{ClassRef, TypeRef};
use serde::{Deserialize, Serialize};

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinOp {
    Eq,
    Ne,
    Or,
    And,
    Minus,
}

impl BinOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinOp::Eq => "==",
            BinOp::Ne => "!=",
            BinOp::Or => "||",
            BinOp::And => "&&",
            BinOp::Minus => "-",
        }
    }
}

/// An expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Expr {
    This,
    Super,
    Null,
    Bool { value: bool },
    Int { value: i64 },
    Str { value: String },

    /// A local variable, parameter or unqualified field.
    Name { name: String },

    /// `target.field`
    Field { target: Box<Expr>, name: String },

    /// `[target.]method(args)`
    Invoke {
        target: Option<Box<Expr>>,
        method: String,
        args: Vec<Expr>,
    },

    /// `Class.method(args)`
    StaticInvoke {
        class: ClassRef,
        method: String,
        args: Vec<Expr>,
    },

    /// `Class.CONSTANT`
    StaticRef { class: ClassRef, name: String },

    /// `new Type(args)`
    New { ty: TypeRef, args: Vec<Expr> },

    Cast { ty: TypeRef, expr: Box<Expr> },
    Not { expr: Box<Expr> },
    Binary { op: BinOp, lhs: Box<Expr>, rhs: Box<Expr> },
    InstanceOf { expr: Box<Expr>, ty: TypeRef },

    /// `cond ? then : otherwise`
    Cond {
        cond: Box<Expr>,
        then: Box<Expr>,
        otherwise: Box<Expr>,
    },
}

impl Expr {
    pub fn name(name: impl Into<String>) -> Self {
        Expr::Name { name: name.into() }
    }

    pub fn lit_str(value: impl Into<String>) -> Self {
        Expr::Str {
            value: value.into(),
        }
    }

    pub fn lit_bool(value: bool) -> Self {
        Expr::Bool { value }
    }

    pub fn lit_int(value: i64) -> Self {
        Expr::Int { value }
    }

    /// Invoke a method on `this` without qualification.
    pub fn call(method: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::Invoke {
            target: None,
            method: method.into(),
            args,
        }
    }

    /// Invoke a static method.
    pub fn static_call(class: impl Into<String>, method: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::StaticInvoke {
            class: ClassRef::new(class),
            method: method.into(),
            args,
        }
    }

    pub fn new_instance(ty: TypeRef, args: Vec<Expr>) -> Self {
        Expr::New { ty, args }
    }

    /// Invoke a method on this expression.
    pub fn invoke(self, method: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::Invoke {
            target: Some(Box::new(self)),
            method: method.into(),
            args,
        }
    }

    /// Access a field of this expression.
    pub fn field(self, name: impl Into<String>) -> Self {
        Expr::Field {
            target: Box::new(self),
            name: name.into(),
        }
    }

    pub fn eq(self, rhs: Expr) -> Self {
        Expr::Binary {
            op: BinOp::Eq,
            lhs: Box::new(self),
            rhs: Box::new(rhs),
        }
    }

    pub fn ne(self, rhs: Expr) -> Self {
        Expr::Binary {
            op: BinOp::Ne,
            lhs: Box::new(self),
            rhs: Box::new(rhs),
        }
    }

    pub fn or(self, rhs: Expr) -> Self {
        Expr::Binary {
            op: BinOp::Or,
            lhs: Box::new(self),
            rhs: Box::new(rhs),
        }
    }

    pub fn and(self, rhs: Expr) -> Self {
        Expr::Binary {
            op: BinOp::And,
            lhs: Box::new(self),
            rhs: Box::new(rhs),
        }
    }

    pub fn minus(self, rhs: Expr) -> Self {
        Expr::Binary {
            op: BinOp::Minus,
            lhs: Box::new(self),
            rhs: Box::new(rhs),
        }
    }

    pub fn not(self) -> Self {
        Expr::Not {
            expr: Box::new(self),
        }
    }

    pub fn cast(self, ty: TypeRef) -> Self {
        Expr::Cast {
            ty,
            expr: Box::new(self),
        }
    }

    pub fn instance_of(self, ty: TypeRef) -> Self {
        Expr::InstanceOf {
            expr: Box::new(self),
            ty,
        }
    }

    pub fn is_null(self) -> Self {
        self.eq(Expr::Null)
    }

    /// `cond ? then : otherwise`
    pub fn cond(cond: Expr, then: Expr, otherwise: Expr) -> Self {
        Expr::Cond {
            cond: Box::new(cond),
            then: Box::new(then),
            otherwise: Box::new(otherwise),
        }
    }

    /// `expr == null ? null : then`
    pub fn null_or(expr: Expr, then: Expr) -> Self {
        Expr::cond(expr.is_null(), Expr::Null, then)
    }
}

/// A statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "stmt", rename_all = "snake_case")]
pub enum Stmt {
    Return { value: Option<Expr> },
    Expr { expr: Expr },

    /// `[final] Type name [= init];`
    Decl {
        is_final: bool,
        ty: TypeRef,
        name: String,
        init: Option<Expr>,
    },

    Assign { target: Expr, value: Expr },

    If {
        cond: Expr,
        then: Block,
        otherwise: Option<Block>,
    },

    /// `for (final Type var : iterable) body`
    ForEach {
        ty: TypeRef,
        var: String,
        iterable: Expr,
        body: Block,
    },
}

/// An ordered list of statements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Block {
    pub stmts: Vec<Stmt>,
}

impl Block {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.stmts.is_empty()
    }

    pub fn push(&mut self, stmt: Stmt) -> &mut Self {
        self.stmts.push(stmt);
        self
    }

    pub fn ret(&mut self, value: Expr) -> &mut Self {
        self.push(Stmt::Return { value: Some(value) })
    }

    pub fn expr(&mut self, expr: Expr) -> &mut Self {
        self.push(Stmt::Expr { expr })
    }

    pub fn assign(&mut self, target: Expr, value: Expr) -> &mut Self {
        self.push(Stmt::Assign { target, value })
    }

    /// Declare a `final` local.
    pub fn decl(&mut self, ty: TypeRef, name: impl Into<String>, init: Expr) -> &mut Self {
        self.push(Stmt::Decl {
            is_final: true,
            ty,
            name: name.into(),
            init: Some(init),
        })
    }

    /// Declare a mutable local.
    pub fn decl_var(&mut self, ty: TypeRef, name: impl Into<String>, init: Expr) -> &mut Self {
        self.push(Stmt::Decl {
            is_final: false,
            ty,
            name: name.into(),
            init: Some(init),
        })
    }

    /// `if (cond) return value;`
    pub fn if_return(&mut self, cond: Expr, value: Expr) -> &mut Self {
        let mut then = Block::new();
        then.ret(value);
        self.push(Stmt::If {
            cond,
            then,
            otherwise: None,
        })
    }

    pub fn if_else(&mut self, cond: Expr, then: Block, otherwise: Block) -> &mut Self {
        self.push(Stmt::If {
            cond,
            then,
            otherwise: Some(otherwise),
        })
    }

    pub fn for_each(
        &mut self,
        ty: TypeRef,
        var: impl Into<String>,
        iterable: Expr,
        body: Block,
    ) -> &mut Self {
        self.push(Stmt::ForEach {
            ty,
            var: var.into(),
            iterable,
            body,
        })
    }
}

impl From<Vec<Stmt>> for Block {
    fn from(stmts: Vec<Stmt>) -> Self {
        Self { stmts }
    }
}
