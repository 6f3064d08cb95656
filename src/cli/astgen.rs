use super::args::{self, Args};
use super::logging;
use crate::gen::generator::Generator;
use crate::gen::spec::DuplicatePolicy;
use crate::helpers;

use anyhow::{bail, Result};
use log::info;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Conventional subdirectory searched for spec files when none is given.
pub const SPEC_DIR: &str = "specs";
/// Extension of spec files.
pub const SPEC_EXTENSION: &str = "txt";

/// Main astgen entrypoint.
pub fn main() -> Result<()> {
    let args = args::parse_args();

    logging::setup_logger(args.verbose.try_into()?, "astgen")?;
    info!("Parsed arguments:\n{:#?}", &args);

    AstGen { args }.main()
}

struct AstGen {
    args: Args,
}

impl AstGen {
    fn main(&self) -> Result<()> {
        let root = match &self.args.output {
            Some(path) => path.clone(),
            None => std::env::current_dir()?,
        };

        let policy = if self.args.strict {
            DuplicatePolicy::Error
        } else {
            DuplicatePolicy::LastWins
        };

        let specs = match &self.args.spec {
            Some(path) => vec![path.clone()],
            None => AstGen::discover_specs(&root),
        };

        if specs.is_empty() {
            bail!("No spec files found in {:?}!", root.join(SPEC_DIR));
        }

        let generator = Generator::new(&root).with_policy(policy);

        let written = generator.process_all(&specs)?;

        for dir in written {
            println!("Generated {}", dir.display());
        }

        Ok(())
    }

    fn discover_specs(root: &Path) -> Vec<PathBuf> {
        helpers::search_path(
            &root.join(SPEC_DIR),
            |path| path.extension() == Some(OsStr::new(SPEC_EXTENSION)),
            1,
        )
    }
}
