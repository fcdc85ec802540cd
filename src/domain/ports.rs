use crate::domain::model::TransformResult;
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn dry_run(&self) -> bool;
}

pub trait Pipeline {
    /// Raw lines of the source table.
    fn extract(&self) -> Result<Vec<String>>;
    fn transform(&self, lines: Vec<String>) -> Result<TransformResult>;
    /// Persists the mapping and returns where it went.
    fn load(&self, result: &TransformResult) -> Result<String>;

    /// False when `load` only reports where output would go.
    fn writes_output(&self) -> bool {
        true
    }
}
