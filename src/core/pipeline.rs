use crate::core::parser::LineParser;
use crate::core::{ConfigProvider, Pipeline, Storage, ThirdMapping, TransformResult};
use crate::utils::error::{EtlError, Result};
use std::io::ErrorKind;

/// Reads the pasted table, folds its rows into one mapping and writes it as JSON.
pub struct MappingPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    parser: LineParser,
}

impl<S: Storage, C: ConfigProvider> MappingPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Result<Self> {
        Ok(Self {
            storage,
            config,
            parser: LineParser::new()?,
        })
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for MappingPipeline<S, C> {
    fn extract(&self) -> Result<Vec<String>> {
        let input_path = self.config.input_path();
        tracing::debug!("Reading table from: {}", input_path);

        let data = self.storage.read_file(input_path).map_err(|e| match e {
            EtlError::IoError(io) if io.kind() == ErrorKind::NotFound => {
                EtlError::MissingInputError {
                    path: input_path.to_string(),
                }
            }
            other => other,
        })?;

        let text = String::from_utf8_lossy(&data);
        Ok(text.lines().map(str::to_string).collect())
    }

    fn transform(&self, lines: Vec<String>) -> Result<TransformResult> {
        let mut mapping = ThirdMapping::new();
        let mut parsed_lines = 0;
        let mut skipped_lines = 0;

        for (index, line) in lines.iter().enumerate() {
            let row = match self.parser.parse_line(line) {
                Ok(Some(row)) => row,
                Ok(None) => {
                    skipped_lines += 1;
                    continue;
                }
                Err(e) => {
                    tracing::error!("Line {} could not be resolved: {}", index + 1, e);
                    return Err(e);
                }
            };

            parsed_lines += 1;
            if mapping.insert(row).is_some() {
                tracing::debug!("Line {} overwrote an earlier row with the same groups", index + 1);
            }
        }

        tracing::debug!(
            "Parsed {} lines, skipped {} non-data lines",
            parsed_lines,
            skipped_lines
        );

        Ok(TransformResult {
            mapping,
            parsed_lines,
            skipped_lines,
        })
    }

    fn load(&self, result: &TransformResult) -> Result<String> {
        let output_path = self.config.output_path().to_string();

        if self.config.dry_run() {
            tracing::info!("Dry run, not writing {}", output_path);
            return Ok(output_path);
        }

        let json = serde_json::to_string_pretty(&result.mapping)?;
        tracing::debug!("Writing {} bytes to {}", json.len(), output_path);
        self.storage.write_file(&output_path, json.as_bytes())?;

        Ok(output_path)
    }

    fn writes_output(&self) -> bool {
        !self.config.dry_run()
    }
}
