use crate::error::ParseError;
use crate::gen::spec::{ClassSpec, DocumentSpec, DuplicatePolicy, Field};
use crate::helpers;

/// Marker prefixing package-declaration lines.
pub const PACKAGE_MARKER: char = '$';
/// Marker prefixing import lines.
pub const IMPORT_MARKER: char = '*';

/// Parse a single class-definition line.
///
/// The first token is the class name; the rest must come in `(type, name)`
/// pairs. `line_no` is only used for error reporting.
pub fn parse_line(line: &str, line_no: usize) -> Result<ClassSpec, ParseError> {
    let mut tokens = line.trim().split(' ');

    let name = match tokens.next() {
        Some(name) if !name.is_empty() => name,
        _ => {
            return Err(ParseError::MalformedLine {
                line_no,
                line: line.trim().to_string(),
            })
        }
    };

    let rest: Vec<&str> = tokens.collect();

    if rest.len() % 2 != 0 {
        return Err(ParseError::MalformedLine {
            line_no,
            line: line.trim().to_string(),
        });
    }

    let fields = rest
        .chunks(2)
        .map(|pair| Field::new(pair[1].trim(), pair[0].trim()))
        .collect();

    Ok(ClassSpec {
        name: name.to_string(),
        fields,
    })
}

/// Parse a whole spec file into a [`DocumentSpec`].
///
/// Line 1 is the base-class name. Contiguous [`PACKAGE_MARKER`] lines follow,
/// then contiguous [`IMPORT_MARKER`] lines; both blocks stop at the first
/// line without their marker, no lookahead. Everything after is one class
/// definition per line. Blank lines between class definitions are skipped.
pub fn parse_document(
    text: &str,
    policy: DuplicatePolicy,
) -> Result<DocumentSpec, ParseError> {
    let text = helpers::normalize_newlines(&text);
    let mut lines = text.lines().enumerate();

    let base_name = match lines.next() {
        Some((_, line)) if !line.trim().is_empty() => line.trim(),
        _ => return Err(ParseError::EmptySpec),
    };

    let mut package: Vec<&str> = Vec::new();
    let mut imports: Vec<&str> = Vec::new();
    let mut class_lines: Vec<(usize, &str)> = Vec::new();

    enum Block {
        Package,
        Imports,
        Classes,
    }

    let mut block = Block::Package;

    for (i, line) in lines {
        if matches!(block, Block::Package) {
            if let Some(stripped) = line.strip_prefix(PACKAGE_MARKER) {
                package.push(stripped);
                continue;
            }
            block = Block::Imports;
        }

        if matches!(block, Block::Imports) {
            if let Some(stripped) = line.strip_prefix(IMPORT_MARKER) {
                imports.push(stripped);
                continue;
            }
            block = Block::Classes;
        }

        if !line.trim().is_empty() {
            class_lines.push((i, line));
        }
    }

    let mut document =
        DocumentSpec::new(base_name, &package.join("\n"), &imports.join("\n"));

    for (i, line) in class_lines {
        let line_no = i + 1;
        let class = parse_line(line, line_no)?;
        document.insert(class, line_no, policy)?;
    }

    Ok(document)
}
