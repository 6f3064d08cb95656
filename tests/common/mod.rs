use anyhow::Result;
use std::fs;
use std::path::PathBuf;

#[allow(dead_code)]
pub fn spec_path(filename: &str) -> PathBuf {
    let mut path = PathBuf::from(file!());
    path.pop();
    path.pop();
    path.pop();
    path.push("testdata");
    path.push("spec");
    path.push(filename);
    path
}

#[allow(dead_code)]
pub fn get_spec(filename: &str) -> Result<String> {
    Ok(fs::read_to_string(spec_path(filename))?)
}
