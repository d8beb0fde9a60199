//! Common test utilities for integration tests

#![allow(dead_code)]

use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A scratch directory holding one input file and a destination for output
pub struct TestFiles {
    pub dir: TempDir,
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Create a scratch directory with `input.json` containing `content` verbatim
pub fn setup_raw_input(content: &str) -> TestFiles {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.json");
    let output = dir.path().join("output.json");
    fs::write(&input, content).unwrap();
    TestFiles { dir, input, output }
}

/// Create a scratch directory with `input.json` holding `data` as JSON
pub fn setup_input(data: &Value) -> TestFiles {
    setup_raw_input(&serde_json::to_string(data).unwrap())
}

/// Read and parse the output file
pub fn read_output(files: &TestFiles) -> Value {
    let content = fs::read_to_string(&files.output).unwrap();
    serde_json::from_str(&content).unwrap()
}
