#![allow(non_snake_case)]

use super::*;
use crate::ast::Block;
use crate::member::{Annotation, AnnotationValue, MethodDef, Param};
use crate::model::{ClassNode, FieldNode};
use crate::types::{ClassRef, Primitive, TypeRef};
use test_case::test_case;

fn order_class() -> ClassNode {
    let mut class = ClassNode::new("com.example.OrderType");
    class.fields.push(FieldNode::new(
        "line",
        TypeRef::list_of(TypeRef::class("com.example.LineType")),
    ));
    class
        .fields
        .push(FieldNode::new("amount", TypeRef::class("java.math.BigDecimal")));
    class
}

#[test]
fn render_class___plain_class___emits_package_imports_and_fields() {
    let code = render_class(&order_class());

    assert!(code.starts_with("package com.example;\n\n"));
    assert!(code.contains("import java.math.BigDecimal;\n"));
    assert!(code.contains("import java.util.List;\n"));
    assert!(!code.contains("import com.example.LineType;"));
    assert!(code.contains("public class OrderType {\n"));
    assert!(code.contains("    protected List<LineType> line;\n"));
    assert!(code.contains("    protected BigDecimal amount;\n"));
    assert!(code.ends_with("}\n"));
}

#[test]
fn render_class___java_lang_types___are_not_imported() {
    let mut class = ClassNode::new("com.example.A");
    class
        .fields
        .push(FieldNode::new("name", TypeRef::class("java.lang.String")));

    let code = render_class(&class);

    assert!(!code.contains("import java.lang.String;"));
    assert!(code.contains("protected String name;"));
}

#[test]
fn render_class___clashing_simple_names___keeps_second_qualified() {
    let mut class = ClassNode::new("com.example.A");
    class
        .fields
        .push(FieldNode::new("a", TypeRef::class("com.acme.Node")));
    class
        .fields
        .push(FieldNode::new("b", TypeRef::class("org.w3c.dom.Node")));

    let code = render_class(&class);

    assert!(code.contains("import com.acme.Node;"));
    assert!(!code.contains("import org.w3c.dom.Node;"));
    assert!(code.contains("protected Node a;"));
    assert!(code.contains("protected org.w3c.dom.Node b;"));
}

#[test]
fn render_class___parent_interfaces_and_abstract___render_in_declaration() {
    let mut class = ClassNode::new("com.example.Derived");
    class.is_abstract = true;
    class.parent = Some(ClassRef::new("com.other.Base"));
    class
        .interfaces
        .push(ClassRef::new("com.helger.base.lang.IExplicitlyCloneable"));

    let code = render_class(&class);

    assert!(code.contains(
        "public abstract class Derived extends Base implements IExplicitlyCloneable {"
    ));
    assert!(code.contains("import com.other.Base;"));
}

#[test]
fn render_class___method_with_body___renders_statements() {
    let mut class = ClassNode::new("com.example.A");
    let mut body = Block::new();
    body.if_return(Expr::name("o").eq(Expr::This), Expr::lit_bool(true));
    body.if_return(
        Expr::name("o")
            .is_null()
            .or(Expr::call("getClass", vec![])
                .invoke("equals", vec![Expr::name("o").invoke("getClass", vec![])])
                .not()),
        Expr::lit_bool(false),
    );
    body.ret(Expr::lit_bool(true));
    class.methods.push(
        MethodDef::new("equals", TypeRef::Primitive(Primitive::Boolean))
            .with_param(Param::new("o", TypeRef::class("java.lang.Object")))
            .annotate(Annotation::new("java.lang.Override"))
            .with_body(body),
    );

    let code = render_class(&class);

    assert!(code.contains("    @Override\n    public boolean equals(final Object o) {\n"));
    assert!(code.contains("        if (o == this) {\n            return true;\n        }\n"));
    assert!(code.contains("if (o == null || !getClass().equals(o.getClass())) {"));
}

#[test]
fn render_class___abstract_method___renders_without_body() {
    let mut class = ClassNode::new("com.example.A");
    class.is_abstract = true;
    class.methods.push(
        MethodDef::new("clone", TypeRef::class("com.example.A")).into_abstract(),
    );

    let code = render_class(&class);

    assert!(code.contains("    public abstract A clone();\n"));
}

#[test]
fn render_class___annotated_field___renders_annotation_params() {
    let mut class = ClassNode::new("com.example.A");
    let mut field = FieldNode::new("code", TypeRef::class("java.lang.String"));
    field.annotations.push(
        Annotation::new("jakarta.validation.constraints.Size")
            .param("min", AnnotationValue::Int(1))
            .param("max", AnnotationValue::Int(20)),
    );
    field.annotations.push(
        Annotation::new("jakarta.validation.constraints.Pattern")
            .param("regexp", AnnotationValue::Str("[A-Z]\\d+".into())),
    );
    class.fields.push(field);

    let code = render_class(&class);

    assert!(code.contains("    @Size(min = 1, max = 20)\n"));
    assert!(code.contains("    @Pattern(regexp = \"[A-Z]\\\\d+\")\n"));
    assert!(code.contains("import jakarta.validation.constraints.Size;"));
}

#[test]
fn render_class___enum___renders_constants() {
    let mut class = ClassNode::new("com.example.Status");
    class.kind = crate::model::ClassKind::Enum;
    class.constants = vec!["OPEN".into(), "CLOSED".into()];

    let code = render_class(&class);

    assert!(code.contains("public enum Status {\n\n    OPEN,\n    CLOSED;\n"));
}

#[test]
fn render_class___method_javadoc___renders_lines_and_tags() {
    let mut class = ClassNode::new("com.example.A");
    let mut method = MethodDef::new("getLineCount", TypeRef::Primitive(Primitive::Int));
    method.javadoc.line("Created by ph-jaxb-plugin -Xph-list-extension");
    method.javadoc.returns("The number of contained Line");
    class.methods.push(method);

    let code = render_class(&class);

    assert!(code.contains(
        "    /**\n     * Created by ph-jaxb-plugin -Xph-list-extension\n     *\n     * @return The number of contained Line\n     */\n"
    ));
}

#[test_case(Expr::null_or(Expr::name("x"), Expr::name("x").invoke("clone", vec![])), "x == null ? null : x.clone()")]
#[test_case(Expr::name("x").invoke("clone", vec![]).cast(TypeRef::class("javax.xml.datatype.XMLGregorianCalendar")), "(XMLGregorianCalendar) x.clone()")]
#[test_case(Expr::name("a").minus(Expr::name("b").minus(Expr::name("c"))), "a - (b - c)")]
#[test_case(Expr::name("a").or(Expr::name("b")).not(), "!(a || b)")]
#[test_case(Expr::name("x").cast(TypeRef::class("org.w3c.dom.Node")).invoke("getNodeType", vec![]), "((Node) x).getNodeType()")]
#[test_case(Expr::lit_str("a\"b"), "\"a\\\"b\"")]
fn NameTable___expression___renders_with_minimal_parentheses(expr: Expr, expected: &str) {
    let mut class = ClassNode::new("com.example.A");
    let mut body = Block::new();
    body.ret(expr);
    class
        .methods
        .push(MethodDef::new("m", TypeRef::class("java.lang.Object")).with_body(body));

    let code = render_class(&class);

    assert!(
        code.contains(&format!("return {};", expected)),
        "expected `{}` in:\n{}",
        expected,
        code
    );
}

#[test]
fn source_path___nested_package___maps_to_directories() {
    let class = ClassNode::new("com.example.inner.OrderType");

    let path = source_path(&class);

    assert_eq!(
        path,
        std::path::PathBuf::from("com/example/inner/OrderType.java")
    );
}

#[test]
fn render_class___field_visibility___uses_declared_modifier() {
    let mut class = ClassNode::new("com.example.A");
    let mut name = FieldNode::new("name", TypeRef::class("java.lang.String"));
    name.visibility = crate::model::Visibility::Private;
    let mut qname = FieldNode::new("_A_QNAME", TypeRef::class("javax.xml.namespace.QName"));
    qname.is_static = true;
    qname.visibility = crate::model::Visibility::Public;
    class.fields.push(name);
    class.fields.push(qname);

    let code = render_class(&class);

    assert!(code.contains("    private String name;\n"));
    assert!(code.contains("    public static QName _A_QNAME;\n"));
}

#[test]
fn render_class___class_annotations___precede_declaration_and_import() {
    let mut class = ClassNode::new("com.example.A");
    class.javadoc.push("Doc".to_string());
    class
        .annotations
        .push(Annotation::new("com.helger.annotation.style.CodingStyleguideUnaware"));

    let code = render_class(&class);

    assert!(code.contains("import com.helger.annotation.style.CodingStyleguideUnaware;\n"));
    assert!(code.contains(" */\n@CodingStyleguideUnaware\npublic class A {"));
}

#[test]
fn render_package_info___annotations_are_qualified() {
    let mut package = crate::model::PackageNode::new("com.example");
    package.javadoc.push("<p>Annotated</p>".to_string());
    package
        .annotations
        .push(Annotation::new("org.jspecify.annotations.NullMarked"));

    let code = render_package_info(&package);

    assert_eq!(
        code,
        "/**\n * <p>Annotated</p>\n */\n@org.jspecify.annotations.NullMarked\npackage com.example;\n"
    );
    assert_eq!(
        package_info_path(&package),
        std::path::PathBuf::from("com/example/package-info.java")
    );
}
