use anyhow::Result;
use astgen::cli::astgen;

fn main() -> Result<()> {
    astgen::main()
}
