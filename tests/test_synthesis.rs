use anyhow::Result;

use astgen::error::SynthError;
use astgen::gen::base::synthesize_base;
use astgen::gen::class::{synthesize_class, Context};
use astgen::gen::generator::synthesize;
use astgen::gen::parser::parse_document;
use astgen::gen::spec::{ClassSpec, DuplicatePolicy, Field};
use astgen::gen::visitor::synthesize_visitor;

fn binary() -> ClassSpec {
    ClassSpec {
        name: "Binary".to_string(),
        fields: vec![
            Field::new("left", "Expr"),
            Field::new("operator", "Token"),
            Field::new("right", "Expr"),
        ],
    }
}

fn context(package: &'static str, imports: &'static str) -> Context<'static> {
    Context {
        base_name: "Expr",
        package,
        imports,
        visitor_name: Some("ExprVisitor"),
    }
}

#[test]
fn synthesis_base_class() {
    let text = synthesize_base("Expr", "ExprVisitor", "");

    assert_eq!(
        text,
        "public abstract class Expr {\n\
         \tpublic abstract <R> R accept(ExprVisitor<R> visitor);\n\
         }\n"
    );
}

#[test]
fn synthesis_base_class_with_package() {
    let text =
        synthesize_base("Expr", "ExprVisitor", "package com.jlox.expression;");

    assert!(text.starts_with("package com.jlox.expression;\n\n"));
}

#[test]
fn synthesis_class_preserves_field_order() -> Result<()> {
    let text = synthesize_class(&context("", ""), &binary())?;

    let declarations = [
        "\tpublic final Expr left;",
        "\tpublic final Token operator;",
        "\tpublic final Expr right;",
    ];
    let assignments = [
        "\t\tthis.left = left;",
        "\t\tthis.operator = operator;",
        "\t\tthis.right = right;",
    ];

    let mut last = 0;
    for line in declarations.iter().chain(assignments.iter()) {
        let position = text.find(line).expect(line);
        assert!(position > last, "{} out of order", line);
        last = position;
    }

    assert!(text.contains("public Binary(Expr left, Token operator, Expr right) {"));

    Ok(())
}

#[test]
fn synthesis_class_dispatch_method() -> Result<()> {
    let text = synthesize_class(&context("", ""), &binary())?;

    assert!(text.contains("public class Binary extends Expr {"));
    assert!(text.contains("\tpublic <R> R accept(ExprVisitor<R> visitor) {"));
    assert!(text.contains("\t\treturn visitor.visitBinary(this);"));

    Ok(())
}

#[test]
fn synthesis_class_omits_empty_imports() -> Result<()> {
    let with_imports = synthesize_class(
        &context("package com.jlox;", "import com.jlox.scanner.Token;"),
        &binary(),
    )?;
    let without_imports =
        synthesize_class(&context("package com.jlox;", ""), &binary())?;

    assert!(with_imports
        .starts_with("package com.jlox;\n\nimport com.jlox.scanner.Token;\n\n"));

    // No import section at all, not even a blank one.
    assert!(!without_imports.contains("import"));
    assert!(without_imports.starts_with("package com.jlox;\n\npublic class"));

    Ok(())
}

#[test]
fn synthesis_class_without_visitor_context() {
    let context = Context {
        base_name: "Expr",
        package: "",
        imports: "",
        visitor_name: None,
    };

    let result = synthesize_class(&context, &binary());

    match result {
        Err(SynthError::MissingVisitor(name)) => assert_eq!(name, "Binary"),
        other => panic!("Expected MissingVisitor, got {:?}", other),
    }
}

#[test]
fn synthesis_class_without_fields() -> Result<()> {
    let class = ClassSpec {
        name: "BreakStatement".to_string(),
        fields: Vec::new(),
    };
    let context = Context {
        base_name: "Statement",
        package: "",
        imports: "",
        visitor_name: Some("StatementVisitor"),
    };

    let text = synthesize_class(&context, &class)?;

    assert!(text.contains("\tpublic BreakStatement() {"));
    assert!(text.contains("\t\treturn visitor.visitBreakStatement(this);"));
    assert!(!text.contains("public final"));

    Ok(())
}

#[test]
fn synthesis_visitor_interface() {
    let text = synthesize_visitor("", "ExprVisitor", &["Unary", "Binary"]);

    assert_eq!(
        text,
        "public interface ExprVisitor<R> {\n\
         \tpublic R visitUnary(Unary unary);\n\
         \tpublic R visitBinary(Binary binary);\n\
         }\n"
    );
}

#[test]
fn synthesis_visitor_interface_without_classes() {
    let text = synthesize_visitor("", "ExprVisitor", &[]);

    assert_eq!(text, "public interface ExprVisitor<R> {\n}\n");
}

#[test]
fn synthesis_is_idempotent() -> Result<()> {
    let context = context("package com.jlox;", "import java.util.List;");

    assert_eq!(
        synthesize_class(&context, &binary())?,
        synthesize_class(&context, &binary())?
    );
    assert_eq!(
        synthesize_base("Expr", "ExprVisitor", "package com.jlox;"),
        synthesize_base("Expr", "ExprVisitor", "package com.jlox;")
    );
    assert_eq!(
        synthesize_visitor("", "ExprVisitor", &["Unary", "Binary"]),
        synthesize_visitor("", "ExprVisitor", &["Unary", "Binary"])
    );

    Ok(())
}

#[test]
fn synthesis_document_end_to_end() -> Result<()> {
    let text = "Expr\nBinary Expr left Token operator Expr right\n";

    let document = parse_document(text, DuplicatePolicy::LastWins)?;
    let artifacts = synthesize(&document)?;

    let names: Vec<&str> =
        artifacts.iter().map(|a| a.type_name.as_str()).collect();
    assert_eq!(names, vec!["Expr", "Binary", "ExprVisitor"]);

    assert!(artifacts[0].text.contains("public abstract class Expr {"));
    assert!(artifacts[1].text.contains("return visitor.visitBinary(this);"));
    assert!(artifacts[2].text.contains("\tpublic R visitBinary(Binary binary);"));

    assert_eq!(artifacts[1].file_name(), "Binary.java");

    Ok(())
}

#[test]
fn synthesis_visitor_tracks_document_order() -> Result<()> {
    let text = "Expr\n\
                Unary Token operator Expr operand\n\
                Binary Expr left Token operator Expr right\n";

    let document = parse_document(text, DuplicatePolicy::LastWins)?;
    let artifacts = synthesize(&document)?;

    let interface = &artifacts.last().unwrap().text;
    let unary = interface.find("visitUnary").unwrap();
    let binary = interface.find("visitBinary").unwrap();

    assert!(unary < binary);

    Ok(())
}
