use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
/// Error from the [parser](crate::gen::parser) module.
pub enum ParseError {
    /// Spec has no base-class line.
    #[error("Spec is empty, expected a base class name on the first line!")]
    EmptySpec,

    /// Class-definition line with an unpaired type/name token.
    #[error("Malformed class definition on line {line_no}: \"{line}\"")]
    MalformedLine {
        /// 1-based line number in the spec file.
        line_no: usize,
        /// The offending line, trimmed.
        line: String,
    },

    /// Same class defined twice under the error policy.
    #[error("Class {name} on line {line_no} is already defined!")]
    DuplicateClass {
        /// Name of the redefined class.
        name: String,
        /// 1-based line number of the redefinition.
        line_no: usize,
    },
}

#[derive(Error, Debug)]
/// Error from the synthesis modules.
pub enum SynthError {
    /// Dispatch method requested without a visitor type name.
    #[error("No visitor type to dispatch to for class {0}!")]
    MissingVisitor(String),
}

#[derive(Error, Debug)]
/// Error from the [generator](crate::gen::generator) module.
pub enum GeneratorError {
    /// Two documents resolve to the same output directory.
    #[error("Output directory {dir:?} for {second:?} is already claimed by {first:?}!")]
    OutputCollision {
        /// The contested directory.
        dir: PathBuf,
        /// Spec file that claimed the directory first.
        first: PathBuf,
        /// Spec file whose output would clobber it.
        second: PathBuf,
    },

    /// Represents std::io::Error
    #[error("I/O error: {0}")]
    IO(#[from] std::io::Error),

    #[error("")]
    /// Wrapper for ParseError.
    Parse {
        #[from]
        /// PLACEHOLDER
        source: ParseError,
    },

    #[error("")]
    /// Wrapper for SynthError.
    Synth {
        #[from]
        /// PLACEHOLDER
        source: SynthError,
    },
}
