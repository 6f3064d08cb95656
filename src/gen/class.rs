//! Synthesizes one concrete AST node class.

use crate::error::SynthError;
use crate::gen::spec::ClassSpec;

/// Document-wide inputs shared by every class synthesized for one spec.
#[derive(Clone, Copy, Debug)]
pub struct Context<'a> {
    /// Name of the abstract base class this class extends.
    pub base_name: &'a str,
    /// Package-declaration text, possibly empty.
    pub package: &'a str,
    /// Import text, possibly empty.
    pub imports: &'a str,
    /// Visitor type name. `None` means the caller cannot ask for a dispatch
    /// method, which every class here needs.
    pub visitor_name: Option<&'a str>,
}

/// Synthesize the full source text of one concrete class.
///
/// Emits the package and import blocks (each omitted entirely when empty),
/// the class header extending the base class, one `public final` field per
/// spec field, a constructor assigning every parameter to its field, and the
/// dispatch method calling `visitor.visit<ClassName>(this)`. Field order is
/// preserved everywhere.
pub fn synthesize_class(
    context: &Context,
    class: &ClassSpec,
) -> Result<String, SynthError> {
    let visitor_name = context
        .visitor_name
        .ok_or_else(|| SynthError::MissingVisitor(class.name.clone()))?;

    let mut lines: Vec<String> = Vec::new();

    if !context.package.is_empty() {
        lines.push(context.package.to_string());
        lines.push(String::new());
    }

    if !context.imports.is_empty() {
        lines.push(context.imports.to_string());
        lines.push(String::new());
    }

    lines.push(format!(
        "public class {} extends {} {{",
        class.name, context.base_name
    ));

    for field in &class.fields {
        lines.push(format!("\tpublic final {} {};", field.ftype, field.name));
    }

    lines.push(String::new());
    lines.extend(constructor(class));
    lines.push(String::new());
    lines.extend(dispatch_method(&class.name, visitor_name));
    lines.push("}".to_string());

    let mut text = lines.join("\n");
    text.push('\n');
    Ok(text)
}

fn constructor(class: &ClassSpec) -> Vec<String> {
    let parameters: Vec<String> = class
        .fields
        .iter()
        .map(|f| format!("{} {}", f.ftype, f.name))
        .collect();

    let mut lines =
        vec![format!("\tpublic {}({}) {{", class.name, parameters.join(", "))];

    for field in &class.fields {
        lines.push(format!("\t\tthis.{0} = {0};", field.name));
    }

    lines.push("\t}".to_string());

    lines
}

fn dispatch_method(class_name: &str, visitor_name: &str) -> Vec<String> {
    vec![
        format!("\tpublic <R> R accept({}<R> visitor) {{", visitor_name),
        format!("\t\treturn visitor.visit{}(this);", class_name),
        "\t}".to_string(),
    ]
}
