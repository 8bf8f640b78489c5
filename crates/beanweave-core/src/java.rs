//! Java source rendering for classes of the model.
//!
//! Renders a [`ClassNode`] with its schema members and all synthesized
//! members into one compilation unit. Qualified names are shortened to
//! simple names and imported unless two referenced classes share a simple
//! name, in which case the later ones stay qualified.

use crate::ast::{BinOp, Block, Expr, Stmt};
use crate::member::{Annotation, AnnotationValue, ConstructorDef, Javadoc, MethodDef, Param};
use crate::model::{ClassKind, ClassNode, FieldNode, PackageNode};
use crate::types::{ClassRef, TypeRef, simple_name_of};
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

const INDENT: &str = "    ";

/// Path of the `.java` file for `class`, relative to the output root.
pub fn source_path(class: &ClassNode) -> PathBuf {
    let mut path = PathBuf::new();
    for part in class.package().split('.').filter(|p| !p.is_empty()) {
        path.push(part);
    }
    path.push(format!("{}.java", class.simple_name()));
    path
}

/// Path of the `package-info.java` file for `package`.
pub fn package_info_path(package: &PackageNode) -> PathBuf {
    let mut path = PathBuf::new();
    for part in package.name.split('.').filter(|p| !p.is_empty()) {
        path.push(part);
    }
    path.push("package-info.java");
    path
}

/// Render package declarations. Annotations stay fully qualified since
/// imports cannot precede the package clause.
pub fn render_package_info(package: &PackageNode) -> String {
    let mut code = String::new();
    if !package.javadoc.is_empty() {
        code.push_str("/**\n");
        for line in &package.javadoc {
            code.push_str(&format!(" * {}\n", line));
        }
        code.push_str(" */\n");
    }
    for annotation in &package.annotations {
        code.push_str(&format!("@{}\n", annotation.class.name));
    }
    code.push_str(&format!("package {};\n", package.name));
    code
}

/// Render a class into Java source text.
pub fn render_class(class: &ClassNode) -> String {
    let names = NameTable::build(class);
    let mut code = String::new();

    if !class.package().is_empty() {
        code.push_str(&format!("package {};\n\n", class.package()));
    }

    if !names.imports.is_empty() {
        for import in &names.imports {
            code.push_str(&format!("import {};\n", import));
        }
        code.push('\n');
    }

    if !class.javadoc.is_empty() {
        code.push_str("/**\n");
        for line in &class.javadoc {
            code.push_str(&format!(" * {}\n", line));
        }
        code.push_str(" */\n");
    }

    for annotation in &class.annotations {
        code.push_str(&format!("{}\n", names.annotation(annotation)));
    }

    code.push_str("public ");
    match class.kind {
        ClassKind::Enum => code.push_str(&format!("enum {}", class.simple_name())),
        ClassKind::Class => {
            if class.is_abstract {
                code.push_str("abstract ");
            }
            code.push_str(&format!("class {}", class.simple_name()));
            if let Some(parent) = &class.parent {
                code.push_str(&format!(" extends {}", names.class_ref(parent)));
            }
        }
    }
    if !class.interfaces.is_empty() {
        let list: Vec<String> = class.interfaces.iter().map(|i| names.class_ref(i)).collect();
        code.push_str(&format!(" implements {}", list.join(", ")));
    }
    code.push_str(" {\n");

    if class.kind == ClassKind::Enum && !class.constants.is_empty() {
        code.push('\n');
        code.push_str(INDENT);
        code.push_str(&class.constants.join(",\n    "));
        code.push_str(";\n");
    }

    for field in &class.fields {
        code.push('\n');
        render_field(&mut code, field, &names);
    }

    for ctor in &class.constructors {
        code.push('\n');
        render_constructor(&mut code, class.simple_name(), ctor, &names);
    }

    for method in &class.methods {
        code.push('\n');
        render_method(&mut code, method, &names);
    }

    code.push_str("}\n");
    code
}

fn render_field(code: &mut String, field: &FieldNode, names: &NameTable) {
    for annotation in &field.annotations {
        code.push_str(&format!("{}{}\n", INDENT, names.annotation(annotation)));
    }
    let is_static = if field.is_static { "static " } else { "" };
    code.push_str(&format!(
        "{}{} {}{} {};\n",
        INDENT,
        field.visibility.keyword(),
        is_static,
        names.ty(&field.ty),
        field.name
    ));
}

fn render_constructor(code: &mut String, class_name: &str, ctor: &ConstructorDef, names: &NameTable) {
    render_javadoc(code, &ctor.javadoc);
    code.push_str(&format!(
        "{}public {}({}) {{\n",
        INDENT,
        class_name,
        render_params(&ctor.params, names)
    ));
    render_block(code, &ctor.body, 2, names);
    code.push_str(INDENT);
    code.push_str("}\n");
}

fn render_method(code: &mut String, method: &MethodDef, names: &NameTable) {
    render_javadoc(code, &method.javadoc);
    for annotation in &method.annotations {
        code.push_str(&format!("{}{}\n", INDENT, names.annotation(annotation)));
    }

    code.push_str(INDENT);
    code.push_str(if method.modifiers.is_private {
        "private "
    } else {
        "public "
    });
    if method.modifiers.is_static {
        code.push_str("static ");
    }
    let is_abstract = method.modifiers.is_abstract || method.body.is_none();
    if is_abstract {
        code.push_str("abstract ");
    }
    code.push_str(&format!(
        "{} {}({})",
        names.ty(&method.return_type),
        method.name,
        render_params(&method.params, names)
    ));
    if !method.throws.is_empty() {
        let list: Vec<String> = method.throws.iter().map(|t| names.class_ref(t)).collect();
        code.push_str(&format!(" throws {}", list.join(", ")));
    }

    match &method.body {
        Some(body) if !is_abstract => {
            code.push_str(" {\n");
            render_block(code, body, 2, names);
            code.push_str(INDENT);
            code.push_str("}\n");
        }
        _ => code.push_str(";\n"),
    }
}

fn render_javadoc(code: &mut String, doc: &Javadoc) {
    if doc.is_empty() {
        return;
    }
    code.push_str(&format!("{}/**\n", INDENT));
    for line in &doc.lines {
        code.push_str(&format!("{} * {}\n", INDENT, line));
    }
    let has_tags = !doc.params.is_empty() || doc.returns.is_some() || !doc.throws.is_empty();
    if has_tags && !doc.lines.is_empty() {
        code.push_str(&format!("{} *\n", INDENT));
    }
    for (name, text) in &doc.params {
        code.push_str(&format!("{} * @param {} {}\n", INDENT, name, text));
    }
    if let Some(text) = &doc.returns {
        code.push_str(&format!("{} * @return {}\n", INDENT, text));
    }
    for (class, text) in &doc.throws {
        code.push_str(&format!(
            "{} * @throws {} {}\n",
            INDENT,
            simple_name_of(class),
            text
        ));
    }
    code.push_str(&format!("{} */\n", INDENT));
}

fn render_params(params: &[Param], names: &NameTable) -> String {
    params
        .iter()
        .map(|p| {
            let mut s = String::new();
            for annotation in &p.annotations {
                s.push_str(&names.annotation(annotation));
                s.push(' ');
            }
            if p.is_final {
                s.push_str("final ");
            }
            s.push_str(&format!("{} {}", names.ty(&p.ty), p.name));
            s
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_block(code: &mut String, block: &Block, depth: usize, names: &NameTable) {
    for stmt in &block.stmts {
        render_stmt(code, stmt, depth, names);
    }
}

fn render_stmt(code: &mut String, stmt: &Stmt, depth: usize, names: &NameTable) {
    let pad = INDENT.repeat(depth);
    match stmt {
        Stmt::Return { value: Some(value) } => {
            code.push_str(&format!("{}return {};\n", pad, names.expr(value)));
        }
        Stmt::Return { value: None } => code.push_str(&format!("{}return;\n", pad)),
        Stmt::Expr { expr } => code.push_str(&format!("{}{};\n", pad, names.expr(expr))),
        Stmt::Decl {
            is_final,
            ty,
            name,
            init,
        } => {
            code.push_str(&pad);
            if *is_final {
                code.push_str("final ");
            }
            code.push_str(&format!("{} {}", names.ty(ty), name));
            if let Some(init) = init {
                code.push_str(&format!(" = {}", names.expr(init)));
            }
            code.push_str(";\n");
        }
        Stmt::Assign { target, value } => {
            code.push_str(&format!(
                "{}{} = {};\n",
                pad,
                names.expr(target),
                names.expr(value)
            ));
        }
        Stmt::If {
            cond,
            then,
            otherwise,
        } => {
            code.push_str(&format!("{}if ({}) {{\n", pad, names.expr(cond)));
            render_block(code, then, depth + 1, names);
            match otherwise {
                Some(otherwise) => {
                    code.push_str(&format!("{}}} else {{\n", pad));
                    render_block(code, otherwise, depth + 1, names);
                    code.push_str(&format!("{}}}\n", pad));
                }
                None => code.push_str(&format!("{}}}\n", pad)),
            }
        }
        Stmt::ForEach {
            ty,
            var,
            iterable,
            body,
        } => {
            code.push_str(&format!(
                "{}for (final {} {} : {}) {{\n",
                pad,
                names.ty(ty),
                var,
                names.expr(iterable)
            ));
            render_block(code, body, depth + 1, names);
            code.push_str(&format!("{}}}\n", pad));
        }
    }
}

/// Render a string as a Java string literal.
pub fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}

// Operator precedence, higher binds tighter.
const PREC_PRIMARY: u8 = 100;
const PREC_UNARY: u8 = 90;
const PREC_ADDITIVE: u8 = 70;
const PREC_INSTANCEOF: u8 = 60;
const PREC_EQUALITY: u8 = 50;
const PREC_AND: u8 = 40;
const PREC_OR: u8 = 30;
const PREC_COND: u8 = 10;

fn precedence(expr: &Expr) -> u8 {
    match expr {
        Expr::Cast { .. } | Expr::Not { .. } => PREC_UNARY,
        Expr::Binary { op, .. } => binary_precedence(*op),
        Expr::InstanceOf { .. } => PREC_INSTANCEOF,
        Expr::Cond { .. } => PREC_COND,
        _ => PREC_PRIMARY,
    }
}

fn binary_precedence(op: BinOp) -> u8 {
    match op {
        BinOp::Minus => PREC_ADDITIVE,
        BinOp::Eq | BinOp::Ne => PREC_EQUALITY,
        BinOp::And => PREC_AND,
        BinOp::Or => PREC_OR,
    }
}

/// Maps qualified names to the spelling used inside one compilation unit.
struct NameTable {
    short: BTreeMap<String, String>,
    imports: BTreeSet<String>,
}

impl NameTable {
    fn build(class: &ClassNode) -> Self {
        let mut used = BTreeSet::new();
        collect_class(class, &mut used);

        let own_simple = class.simple_name().to_string();
        let own_package = class.package().to_string();

        // simple name -> qualified names using it, sorted for determinism
        let mut by_simple: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for name in used {
            by_simple
                .entry(simple_name_of(&name).to_string())
                .or_default()
                .push(name);
        }

        let mut short = BTreeMap::new();
        let mut imports = BTreeSet::new();
        for (simple, qualified) in by_simple {
            for name in qualified {
                let is_self = name == class.name;
                let clashes = !is_self && simple == own_simple;
                let takes_simple = !clashes && !short.values().any(|s: &String| *s == simple);
                if !takes_simple {
                    continue;
                }
                let package = match name.rfind('.') {
                    Some(idx) => &name[..idx],
                    None => "",
                };
                if !is_self && !package.is_empty() && package != "java.lang" && package != own_package {
                    imports.insert(name.clone());
                }
                short.insert(name, simple.clone());
            }
        }

        Self { short, imports }
    }

    fn name<'a>(&'a self, qualified: &'a str) -> &'a str {
        self.short.get(qualified).map(String::as_str).unwrap_or(qualified)
    }

    fn class_ref(&self, class: &ClassRef) -> String {
        let mut out = self.name(&class.name).to_string();
        if !class.args.is_empty() {
            let args: Vec<String> = class.args.iter().map(|a| self.ty(a)).collect();
            out.push_str(&format!("<{}>", args.join(", ")));
        }
        out
    }

    fn ty(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Void => "void".to_string(),
            TypeRef::Primitive(p) => p.keyword().to_string(),
            TypeRef::Class(class) => self.class_ref(class),
            TypeRef::Array(elem) => format!("{}[]", self.ty(elem)),
            TypeRef::Wildcard(None) => "?".to_string(),
            TypeRef::Wildcard(Some(bound)) => format!("? extends {}", self.ty(bound)),
        }
    }

    fn annotation(&self, annotation: &Annotation) -> String {
        let mut out = format!("@{}", self.name(&annotation.class.name));
        if !annotation.params.is_empty() {
            let params: Vec<String> = annotation
                .params
                .iter()
                .map(|(name, value)| format!("{} = {}", name, annotation_value(value)))
                .collect();
            out.push_str(&format!("({})", params.join(", ")));
        }
        out
    }

    fn operand(&self, expr: &Expr, min_prec: u8) -> String {
        let rendered = self.expr(expr);
        if precedence(expr) < min_prec {
            format!("({})", rendered)
        } else {
            rendered
        }
    }

    fn args(&self, args: &[Expr]) -> String {
        args.iter()
            .map(|a| self.expr(a))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn expr(&self, expr: &Expr) -> String {
        match expr {
            Expr::This => "this".to_string(),
            Expr::Super => "super".to_string(),
            Expr::Null => "null".to_string(),
            Expr::Bool { value } => value.to_string(),
            Expr::Int { value } => value.to_string(),
            Expr::Str { value } => string_literal(value),
            Expr::Name { name } => name.clone(),
            Expr::Field { target, name } => {
                format!("{}.{}", self.operand(target, PREC_PRIMARY), name)
            }
            Expr::Invoke {
                target,
                method,
                args,
            } => match target {
                Some(target) => format!(
                    "{}.{}({})",
                    self.operand(target, PREC_PRIMARY),
                    method,
                    self.args(args)
                ),
                None => format!("{}({})", method, self.args(args)),
            },
            Expr::StaticInvoke {
                class,
                method,
                args,
            } => format!("{}.{}({})", self.name(&class.name), method, self.args(args)),
            Expr::StaticRef { class, name } => format!("{}.{}", self.name(&class.name), name),
            Expr::New { ty, args } => format!("new {}({})", self.ty(ty), self.args(args)),
            Expr::Cast { ty, expr } => {
                format!("({}) {}", self.ty(ty), self.operand(expr, PREC_UNARY))
            }
            Expr::Not { expr } => format!("!{}", self.operand(expr, PREC_UNARY)),
            Expr::Binary { op, lhs, rhs } => {
                let prec = binary_precedence(*op);
                format!(
                    "{} {} {}",
                    self.operand(lhs, prec),
                    op.symbol(),
                    self.operand(rhs, prec + 1)
                )
            }
            Expr::InstanceOf { expr, ty } => format!(
                "{} instanceof {}",
                self.operand(expr, PREC_INSTANCEOF),
                self.ty(ty)
            ),
            Expr::Cond {
                cond,
                then,
                otherwise,
            } => format!(
                "{} ? {} : {}",
                self.operand(cond, PREC_COND + 1),
                self.operand(then, PREC_COND + 1),
                self.operand(otherwise, PREC_COND)
            ),
        }
    }
}

fn annotation_value(value: &AnnotationValue) -> String {
    match value {
        AnnotationValue::Bool(b) => b.to_string(),
        AnnotationValue::Int(i) => i.to_string(),
        AnnotationValue::Str(s) => string_literal(s),
    }
}

fn collect_class(class: &ClassNode, used: &mut BTreeSet<String>) {
    used.insert(class.name.clone());
    if let Some(parent) = &class.parent {
        collect_class_ref(parent, used);
    }
    for iface in &class.interfaces {
        collect_class_ref(iface, used);
    }
    collect_annotations(&class.annotations, used);
    for field in &class.fields {
        collect_type(&field.ty, used);
        collect_annotations(&field.annotations, used);
    }
    for ctor in &class.constructors {
        collect_params(&ctor.params, used);
        collect_block(&ctor.body, used);
    }
    for method in &class.methods {
        collect_type(&method.return_type, used);
        collect_params(&method.params, used);
        collect_annotations(&method.annotations, used);
        for throws in &method.throws {
            collect_class_ref(throws, used);
        }
        if let Some(body) = &method.body {
            collect_block(body, used);
        }
    }
}

fn collect_class_ref(class: &ClassRef, used: &mut BTreeSet<String>) {
    used.insert(class.name.clone());
    for arg in &class.args {
        collect_type(arg, used);
    }
}

fn collect_type(ty: &TypeRef, used: &mut BTreeSet<String>) {
    match ty {
        TypeRef::Class(class) => collect_class_ref(class, used),
        TypeRef::Array(elem) => collect_type(elem, used),
        TypeRef::Wildcard(Some(bound)) => collect_type(bound, used),
        TypeRef::Void | TypeRef::Primitive(_) | TypeRef::Wildcard(None) => {}
    }
}

fn collect_annotations(annotations: &[Annotation], used: &mut BTreeSet<String>) {
    for annotation in annotations {
        used.insert(annotation.class.name.clone());
    }
}

fn collect_params(params: &[Param], used: &mut BTreeSet<String>) {
    for param in params {
        collect_type(&param.ty, used);
        collect_annotations(&param.annotations, used);
    }
}

fn collect_block(block: &Block, used: &mut BTreeSet<String>) {
    for stmt in &block.stmts {
        match stmt {
            Stmt::Return { value } => {
                if let Some(value) = value {
                    collect_expr(value, used);
                }
            }
            Stmt::Expr { expr } => collect_expr(expr, used),
            Stmt::Decl { ty, init, .. } => {
                collect_type(ty, used);
                if let Some(init) = init {
                    collect_expr(init, used);
                }
            }
            Stmt::Assign { target, value } => {
                collect_expr(target, used);
                collect_expr(value, used);
            }
            Stmt::If {
                cond,
                then,
                otherwise,
            } => {
                collect_expr(cond, used);
                collect_block(then, used);
                if let Some(otherwise) = otherwise {
                    collect_block(otherwise, used);
                }
            }
            Stmt::ForEach {
                ty, iterable, body, ..
            } => {
                collect_type(ty, used);
                collect_expr(iterable, used);
                collect_block(body, used);
            }
        }
    }
}

fn collect_expr(expr: &Expr, used: &mut BTreeSet<String>) {
    match expr {
        Expr::This
        | Expr::Super
        | Expr::Null
        | Expr::Bool { .. }
        | Expr::Int { .. }
        | Expr::Str { .. }
        | Expr::Name { .. } => {}
        Expr::Field { target, .. } => collect_expr(target, used),
        Expr::Invoke { target, args, .. } => {
            if let Some(target) = target {
                collect_expr(target, used);
            }
            args.iter().for_each(|a| collect_expr(a, used));
        }
        Expr::StaticInvoke { class, args, .. } => {
            collect_class_ref(class, used);
            args.iter().for_each(|a| collect_expr(a, used));
        }
        Expr::StaticRef { class, .. } => collect_class_ref(class, used),
        Expr::New { ty, args } => {
            collect_type(ty, used);
            args.iter().for_each(|a| collect_expr(a, used));
        }
        Expr::Cast { ty, expr } | Expr::InstanceOf { expr, ty } => {
            collect_type(ty, used);
            collect_expr(expr, used);
        }
        Expr::Not { expr } => collect_expr(expr, used),
        Expr::Binary { lhs, rhs, .. } => {
            collect_expr(lhs, used);
            collect_expr(rhs, used);
        }
        Expr::Cond {
            cond,
            then,
            otherwise,
        } => {
            collect_expr(cond, used);
            collect_expr(then, used);
            collect_expr(otherwise, used);
        }
    }
}

#[cfg(test)]
#[path = "java/java_tests.rs"]
mod java_tests;
