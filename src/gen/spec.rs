use crate::error::ParseError;

/// One field of a generated class: a name and a free-form type string.
///
/// Order matters. The position of a field in its [`ClassSpec`] fixes the
/// declaration order, the constructor parameter order and the constructor
/// body order of the synthesized class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    /// Field name, taken verbatim from the spec.
    pub name: String,
    /// Field type, taken verbatim from the spec.
    pub ftype: String,
}

impl Field {
    /// Create a new [Field].
    pub fn new(name: &str, ftype: &str) -> Field {
        Field {
            name: name.to_string(),
            ftype: ftype.to_string(),
        }
    }
}

/// Parsed representation of one concrete subtype: name plus ordered fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassSpec {
    /// Class name.
    pub name: String,
    /// Fields in declaration order.
    pub fields: Vec<Field>,
}

/// What to do when a spec defines the same class name twice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Replace the fields of the earlier definition, keeping its position.
    LastWins,
    /// Reject the document with [`ParseError::DuplicateClass`].
    Error,
}

impl Default for DuplicatePolicy {
    fn default() -> DuplicatePolicy {
        DuplicatePolicy::LastWins
    }
}

/// Parsed representation of one whole spec file.
///
/// Immutable after parsing. Classes keep the first-seen order of their names,
/// which also fixes the method order of the synthesized visitor interface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentSpec {
    /// Name of the abstract base class.
    pub base_name: String,
    /// Package-declaration text, possibly empty.
    pub package: String,
    /// Import text, possibly empty.
    pub imports: String,
    classes: Vec<ClassSpec>,
}

impl DocumentSpec {
    /// Create a new, classless [`DocumentSpec`].
    pub fn new(base_name: &str, package: &str, imports: &str) -> DocumentSpec {
        DocumentSpec {
            base_name: base_name.to_string(),
            package: package.to_string(),
            imports: imports.to_string(),
            classes: Vec::new(),
        }
    }

    /// The visitor type name for this document, `<BaseName><suffix>`.
    pub fn visitor_name(&self, suffix: &str) -> String {
        format!("{}{}", self.base_name, suffix)
    }

    /// Classes in first-seen order.
    pub fn classes(&self) -> &[ClassSpec] {
        &self.classes
    }

    /// Class names in first-seen order.
    pub fn class_names(&self) -> Vec<&str> {
        self.classes.iter().map(|c| c.name.as_str()).collect()
    }

    pub(crate) fn insert(
        &mut self,
        class: ClassSpec,
        line_no: usize,
        policy: DuplicatePolicy,
    ) -> Result<(), ParseError> {
        if let Some(existing) =
            self.classes.iter_mut().find(|c| c.name == class.name)
        {
            match policy {
                DuplicatePolicy::LastWins => {
                    existing.fields = class.fields;
                    Ok(())
                }
                DuplicatePolicy::Error => Err(ParseError::DuplicateClass {
                    name: class.name,
                    line_no,
                }),
            }
        } else {
            self.classes.push(class);
            Ok(())
        }
    }
}
