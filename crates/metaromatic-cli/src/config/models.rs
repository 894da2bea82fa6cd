use metaromatic::engine::config::AnalysisConfig;
use std::path::PathBuf;

pub struct AppConfig {
    pub input_path: PathBuf,
    pub core_config: AnalysisConfig,
    pub min_bridge_size: usize,
}
