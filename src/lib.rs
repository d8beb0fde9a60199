//! Task Processor Library
//!
//! This library validates JSON documents containing task items and turns them
//! into processed records. A document must be an array of objects, each with
//! an integer `id`, a non-blank string `name` and a numeric `value`; ids must
//! be unique across the array.
//!
//! # Architecture
//!
//! Processing is a single pipeline:
//! - **Storage**: `storage` module - reads the input file and parses JSON, writes the output
//! - **Validator**: `validation` module - checks the parsed document, fail-fast
//! - **Transformer**: `transform` module - appends `processed` and `name_length`
//!
//! `TaskProcessor` drives the pipeline and either writes the whole output or
//! nothing at all.
//!
//! # Example
//!
//! ```no_run
//! use task_processor::{ProcessConfig, TaskProcessor};
//!
//! let processor = TaskProcessor::new(ProcessConfig::default());
//! let exit_code = processor.run("tasks.json", "processed.json");
//! assert_eq!(exit_code, 0);
//! ```

pub mod config;
pub mod error;
pub mod storage;
pub mod task;
pub mod transform;
pub mod validation;

use serde_json::Value;
use std::path::Path;
use tracing::{debug, error, info};

// Re-export commonly used types
pub use config::{ProcessConfig, Verbosity};
pub use error::{EXIT_FAILURE, EXIT_SUCCESS, ProcessError, ValidationError};
pub use storage::Storage;
pub use task::{ProcessedTask, TaskItem};
pub use transform::process_items;
pub use validation::validate_input;

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessSummary {
    /// Number of records written to the output file
    pub item_count: usize,
}

/// Drives the read, validate, transform, write pipeline
///
/// The processor holds only configuration. Each call works on its own
/// transient data, so one instance can process any number of files in turn.
pub struct TaskProcessor {
    config: ProcessConfig,
}

impl TaskProcessor {
    /// Create a new processor
    ///
    /// # Arguments
    /// * `config` - Run configuration (verbosity)
    pub fn new(config: ProcessConfig) -> Self {
        Self { config }
    }

    /// Validate and transform an already-parsed document
    ///
    /// # Arguments
    /// * `data` - The parsed JSON document
    ///
    /// # Returns
    /// One output record per input item, in input order, or the first
    /// validation failure
    pub fn process_value(&self, data: &Value) -> Result<Vec<ProcessedTask>, ValidationError> {
        let items = validate_input(data)?;
        let processed = process_items(items);
        info!("Successfully processed {} items", processed.len());
        Ok(processed)
    }

    /// Process one input file into one output file
    ///
    /// The output file is only touched once validation has succeeded for the
    /// entire input.
    ///
    /// # Arguments
    /// * `input` - Path to the input JSON file
    /// * `output` - Path to the output JSON file
    pub fn process_file(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Result<ProcessSummary, ProcessError> {
        let storage = Storage::new(input, output);
        debug!(
            input = %storage.input_path().display(),
            output = %storage.output_path().display(),
            verbose = self.config.is_verbose(),
            "Starting processing run"
        );

        let data = storage.load()?;
        let processed = self.process_value(&data)?;
        storage.save(&processed)?;

        Ok(ProcessSummary {
            item_count: processed.len(),
        })
    }

    /// Run `process_file` and reduce the outcome to a process exit code
    ///
    /// Failures are logged at error level before the code is returned;
    /// validation failures on a single item also carry its index.
    pub fn run(&self, input: impl AsRef<Path>, output: impl AsRef<Path>) -> u8 {
        match self.process_file(input, output) {
            Ok(_) => EXIT_SUCCESS,
            Err(e) => {
                let index = match &e {
                    ProcessError::Validation(v) => v.index(),
                    _ => None,
                };
                match index {
                    Some(index) => error!(index, "{}", e),
                    None => error!("{}", e),
                }
                e.exit_code()
            }
        }
    }
}

impl Default for TaskProcessor {
    fn default() -> Self {
        Self::new(ProcessConfig::default())
    }
}
