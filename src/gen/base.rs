//! Synthesizes the abstract base class of the hierarchy.

/// Synthesize the abstract base class.
///
/// The base class declares nothing but the single abstract dispatch method:
/// generic over the visitor's result type, accepting the document's visitor
/// type. Pure; identical inputs yield byte-identical output.
pub fn synthesize_base(
    base_name: &str,
    visitor_name: &str,
    package: &str,
) -> String {
    let mut lines: Vec<String> = Vec::new();

    if !package.is_empty() {
        lines.push(package.to_string());
        lines.push(String::new());
    }

    lines.push(format!("public abstract class {} {{", base_name));
    lines.push(format!(
        "\tpublic abstract <R> R accept({}<R> visitor);",
        visitor_name
    ));
    lines.push("}".to_string());

    let mut text = lines.join("\n");
    text.push('\n');
    text
}
