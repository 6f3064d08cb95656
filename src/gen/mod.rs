/// Base class synthesis
pub mod base;
/// AST node class synthesis
pub mod class;
/// Orchestrator & artifacts
pub mod generator;
/// Spec line & document parsing
pub mod parser;
/// Parsed spec data model
pub mod spec;
/// Visitor interface synthesis
pub mod visitor;

/// Suffix appended to the base-class name to form the visitor type name.
pub const VISITOR_SUFFIX: &str = "Visitor";
