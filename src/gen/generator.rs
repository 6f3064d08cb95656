//! Drives parsing and synthesis for whole spec files and writes the results.

use crate::error::{GeneratorError, SynthError};
use crate::gen::class::{self, Context};
use crate::gen::spec::{DocumentSpec, DuplicatePolicy};
use crate::gen::{base, parser, visitor, VISITOR_SUFFIX};

use log::{debug, info};

use std::fs;
use std::path::{Path, PathBuf};

/// Extension of the generated source files.
pub const SOURCE_EXTENSION: &str = "java";

/// One generated source file: the declared type name and its full text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifact {
    /// Name of the declared type, which also names the output file.
    pub type_name: String,
    /// Full source text.
    pub text: String,
}

impl Artifact {
    fn new(type_name: &str, text: String) -> Artifact {
        Artifact {
            type_name: type_name.to_string(),
            text,
        }
    }

    /// File name this artifact is persisted under.
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.type_name, SOURCE_EXTENSION)
    }
}

/// Synthesize every artifact for one parsed document.
///
/// Returns the base class first, then one artifact per class in first-seen
/// order, then the visitor interface. Classes and interface are synthesized
/// from the same class-name list, so their method sets cannot drift apart.
pub fn synthesize(
    document: &DocumentSpec,
) -> Result<Vec<Artifact>, SynthError> {
    let visitor_name = document.visitor_name(VISITOR_SUFFIX);

    let context = Context {
        base_name: &document.base_name,
        package: &document.package,
        imports: &document.imports,
        visitor_name: Some(&visitor_name),
    };

    let mut artifacts = vec![Artifact::new(
        &document.base_name,
        base::synthesize_base(
            &document.base_name,
            &visitor_name,
            &document.package,
        ),
    )];

    for class in document.classes() {
        artifacts.push(Artifact::new(
            &class.name,
            class::synthesize_class(&context, class)?,
        ));
    }

    artifacts.push(Artifact::new(
        &visitor_name,
        visitor::synthesize_visitor(
            &document.package,
            &visitor_name,
            &document.class_names(),
        ),
    ));

    Ok(artifacts)
}

/// Turns spec files into generated source trees under a fixed root.
pub struct Generator {
    root: PathBuf,
    policy: DuplicatePolicy,
}

impl Generator {
    /// Create a new [Generator] writing below `root`.
    pub fn new<P: Into<PathBuf>>(root: P) -> Generator {
        Generator {
            root: root.into(),
            policy: DuplicatePolicy::default(),
        }
    }

    /// Set the duplicate-class policy.
    #[must_use]
    pub fn with_policy(mut self, policy: DuplicatePolicy) -> Generator {
        Generator { policy, ..self }
    }

    /// Output directory for a document, `<root>/<base_name lowercased>`.
    pub fn output_dir(&self, document: &DocumentSpec) -> PathBuf {
        self.root.join(document.base_name.to_lowercase())
    }

    /// Process a single spec file. Returns the directory written to.
    pub fn process_file(
        &self,
        path: &Path,
    ) -> Result<PathBuf, GeneratorError> {
        let document = self.parse_file(path)?;
        self.write_document(&document)
    }

    /// Process a batch of spec files.
    ///
    /// Every file is parsed before anything is written, so a malformed spec
    /// or an output-directory collision between two documents aborts the
    /// whole batch without leaving partial output behind.
    pub fn process_all(
        &self,
        paths: &[PathBuf],
    ) -> Result<Vec<PathBuf>, GeneratorError> {
        let mut documents: Vec<(&PathBuf, DocumentSpec)> = Vec::new();

        for path in paths {
            documents.push((path, self.parse_file(path)?));
        }

        for (i, (path, document)) in documents.iter().enumerate() {
            let dir = self.output_dir(document);

            if let Some((first, _)) = documents[..i]
                .iter()
                .find(|(_, other)| self.output_dir(other) == dir)
            {
                return Err(GeneratorError::OutputCollision {
                    dir,
                    first: (*first).clone(),
                    second: (*path).clone(),
                });
            }
        }

        let mut written = Vec::new();

        for (_, document) in &documents {
            written.push(self.write_document(document)?);
        }

        Ok(written)
    }

    fn parse_file(
        &self,
        path: &Path,
    ) -> Result<DocumentSpec, GeneratorError> {
        debug!("Reading spec file {:?}", path);

        let text = fs::read_to_string(path)?;
        let document = parser::parse_document(&text, self.policy)?;

        info!(
            "Parsed {:?}: base class {} with {} classes.",
            path,
            document.base_name,
            document.classes().len()
        );

        Ok(document)
    }

    fn write_document(
        &self,
        document: &DocumentSpec,
    ) -> Result<PathBuf, GeneratorError> {
        let artifacts = synthesize(document)?;

        let dir = self.output_dir(document);
        fs::create_dir_all(&dir)?;

        for artifact in &artifacts {
            let path = dir.join(artifact.file_name());
            debug!("Writing {:?}", path);
            fs::write(path, &artifact.text)?;
        }

        info!("Wrote {} files to {:?}.", artifacts.len(), dir);

        Ok(dir)
    }
}
