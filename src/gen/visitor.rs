//! Synthesizes the visitor interface of the hierarchy.

/// Synthesize the visitor interface.
///
/// One method per class name, in the given order, which must be the
/// first-seen order of the document so the interface cannot drift from the
/// synthesized classes. Zero class names is legal and yields an interface
/// with an empty body.
pub fn synthesize_visitor(
    package: &str,
    visitor_name: &str,
    class_names: &[&str],
) -> String {
    let mut lines: Vec<String> = Vec::new();

    if !package.is_empty() {
        lines.push(package.to_string());
        lines.push(String::new());
    }

    lines.push(format!("public interface {}<R> {{", visitor_name));

    for name in class_names {
        lines.push(format!(
            "\tpublic R visit{0}({0} {1});",
            name,
            name.to_lowercase()
        ));
    }

    lines.push("}".to_string());

    let mut text = lines.join("\n");
    text.push('\n');
    text
}
