use clap::Parser;
use third_mapping::core::etl::print_summary;
use third_mapping::utils::{logger, validation::Validate};
use third_mapping::{CliConfig, EtlEngine, EtlError, LocalStorage, MappingPipeline};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting third-mapping");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        fail(e);
    }

    let storage = match std::env::current_dir() {
        Ok(dir) => LocalStorage::new(dir),
        Err(e) => fail(EtlError::from(e)),
    };

    let pipeline = match MappingPipeline::new(storage, config) {
        Ok(pipeline) => pipeline,
        Err(e) => fail(e),
    };

    match EtlEngine::new(pipeline).run() {
        Ok(summary) => print_summary(&summary),
        Err(e) => {
            tracing::error!(
                "Run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            fail(e);
        }
    }
}

fn fail(e: EtlError) -> ! {
    eprintln!("{}", e.user_friendly_message());
    eprintln!("Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
