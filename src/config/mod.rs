pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_distinct_paths, validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_INPUT_PATH: &str = "third-mapping-table.txt";
pub const DEFAULT_OUTPUT_PATH: &str = "third-mapping.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "third-mapping"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Convert the pasted third-place table into a slot mapping JSON file")
)]
pub struct CliConfig {
    /// Pasted table, relative to the working directory
    #[cfg_attr(feature = "cli", arg(long, default_value = DEFAULT_INPUT_PATH))]
    pub input: String,

    /// Mapping file to write, relative to the working directory
    #[cfg_attr(feature = "cli", arg(long, default_value = DEFAULT_OUTPUT_PATH))]
    pub output: String,

    /// Parse and report without writing the mapping file
    #[cfg_attr(feature = "cli", arg(long))]
    pub dry_run: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    pub verbose: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            input: DEFAULT_INPUT_PATH.to_string(),
            output: DEFAULT_OUTPUT_PATH.to_string(),
            dry_run: false,
            verbose: false,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> &str {
        &self.output
    }

    fn dry_run(&self) -> bool {
        self.dry_run
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;
        validate_path("output", &self.output)?;
        validate_distinct_paths("output", &self.input, &self.output)
    }
}
