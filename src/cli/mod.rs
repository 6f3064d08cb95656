/// Argument Parsing
pub mod args;
/// Main astgen code.
pub mod astgen;
/// Logging setup
pub mod logging;
