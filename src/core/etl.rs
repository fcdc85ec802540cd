use crate::core::{Pipeline, RunSummary};
use crate::domain::model::EXPECTED_COMBINATIONS;
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    expected_keys: usize,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            expected_keys: EXPECTED_COMBINATIONS,
        }
    }

    pub fn run(&self) -> Result<RunSummary> {
        tracing::info!("Reading third-place table...");
        let lines = self.pipeline.extract()?;
        tracing::debug!("Read {} lines", lines.len());

        let result = self.pipeline.transform(lines)?;
        tracing::info!(
            "Parsed {} rows into {} combinations",
            result.parsed_lines,
            result.mapping.len()
        );

        // Nothing is written unless every line parsed.
        let output_path = self.pipeline.load(&result)?;

        let summary = RunSummary {
            output_path,
            parsed_lines: result.parsed_lines,
            unique_keys: result.mapping.len(),
            expected_keys: self.expected_keys,
            written: self.pipeline.writes_output(),
        };

        if let Some(warning) = summary.mismatch_warning() {
            tracing::warn!("{}", warning);
        }

        Ok(summary)
    }
}

/// Console report printed after a successful run.
pub fn print_summary(summary: &RunSummary) {
    if summary.written {
        println!("Wrote {}", summary.output_path);
    } else {
        println!("Dry run: {} was not written", summary.output_path);
    }
    println!("Parsed lines: {}", summary.parsed_lines);
    println!("Unique combinations: {}", summary.unique_keys);

    if let Some(warning) = summary.mismatch_warning() {
        eprintln!("{}", warning);
    }
}
