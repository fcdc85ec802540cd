pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig};
pub use crate::core::{etl::EtlEngine, parser::LineParser, pipeline::MappingPipeline};
pub use domain::model::{
    Assignment, Group, Row, RunSummary, ThirdMapping, EXPECTED_COMBINATIONS, SLOTS,
};
pub use utils::error::{EtlError, Result};
