pub mod etl;
pub mod parser;
pub mod pipeline;

pub use crate::domain::model::{RunSummary, ThirdMapping, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
