pub mod analyze;
pub mod bridges;

use crate::config::models::AppConfig;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use metaromatic::core::io::{pdb::PdbFile, traits::StructureFile};
use metaromatic::engine::progress::ProgressReporter;
use metaromatic::workflows::analyze::{self as workflow, AnalysisResult};
use tracing::info;

/// Reads the input structure and runs the analysis workflow on it.
pub(crate) fn load_and_analyze(config: &AppConfig, show_progress: bool) -> Result<AnalysisResult> {
    info!("Loading input structure from {:?}", &config.input_path);
    let records =
        PdbFile::read_from_path(&config.input_path).map_err(|e| CliError::FileParsing {
            path: config.input_path.clone(),
            source: e.into(),
        })?;
    info!("Read {} ATOM records.", records.len());

    let progress_handler = if show_progress {
        CliProgressHandler::new()
    } else {
        CliProgressHandler::hidden()
    };
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!(
        "Invoking the analysis workflow on chain {} ({} model).",
        config.core_config.chain_id, config.core_config.lone_pair_model
    );
    let result = workflow::run(&records, &config.core_config, &reporter);
    info!(
        "Workflow finished with status {} in {:.3}s.",
        result.status.code(),
        result.elapsed_seconds
    );
    Ok(result)
}
