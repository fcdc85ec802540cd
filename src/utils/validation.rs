use crate::utils::error::{EtlError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Rejects an output path that would overwrite the input table.
pub fn validate_distinct_paths(field_name: &str, input: &str, output: &str) -> Result<()> {
    if Path::new(input) == Path::new(output) {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: output.to_string(),
            reason: "Output path must differ from the input path".to_string(),
        });
    }
    Ok(())
}
