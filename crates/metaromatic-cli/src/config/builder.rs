use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::InputArgs;
use crate::error::{CliError, Result};
use metaromatic::engine::config::{self as core_config, LonePairModel};
use std::str::FromStr;

pub fn build_config(args: &InputArgs, cli_min_bridge_size: Option<usize>) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let chain_id = args
        .chain
        .clone()
        .or(file_config.chain.take())
        .unwrap_or(defaults.chain_id);

    let cutoffs_file = file_config.cutoffs.take().unwrap_or_default();
    let distance_cutoff = args
        .distance_cutoff
        .or(cutoffs_file.distance)
        .unwrap_or(defaults.distance_cutoff);
    let angle_cutoff = args
        .angle_cutoff
        .or(cutoffs_file.angle)
        .unwrap_or(defaults.angle_cutoff);

    let lone_pairs_file = file_config.lone_pairs.take().unwrap_or_default();
    let lone_pair_model = match (args.model, lone_pairs_file.model.as_deref()) {
        (Some(model), _) => model,
        (None, Some(name)) => parse_model(name)?,
        (None, None) => defaults.lone_pair_model,
    };

    let min_bridge_size = cli_min_bridge_size
        .or(file_config.bridges.take().unwrap_or_default().min_size)
        .unwrap_or(defaults.min_bridge_size);
    let min_bridge_size = core_config::validate_min_bridge_size(min_bridge_size)
        .map_err(|e| CliError::Config(e.to_string()))?;

    let core_config = core_config::AnalysisConfigBuilder::new()
        .chain_id(chain_id)
        .distance_cutoff(distance_cutoff)
        .angle_cutoff(angle_cutoff)
        .lone_pair_model(lone_pair_model)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(AppConfig {
        input_path: args.input.clone(),
        core_config,
        min_bridge_size,
    })
}

fn parse_model(name: &str) -> Result<LonePairModel> {
    LonePairModel::from_str(name).map_err(|e| CliError::Config(e.to_string()))
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };

        match key.trim() {
            "chain" => {
                config.chain = Some(value_str.to_string());
            }
            "cutoffs.distance" => {
                config.cutoffs.get_or_insert_with(Default::default).distance =
                    Some(value_str.parse().map_err(|_| {
                        CliError::Config(format!("Invalid float value for {}: {}", key, value_str))
                    })?);
            }
            "cutoffs.angle" => {
                config.cutoffs.get_or_insert_with(Default::default).angle =
                    Some(value_str.parse().map_err(|_| {
                        CliError::Config(format!("Invalid float value for {}: {}", key, value_str))
                    })?);
            }
            "lone-pairs.model" => {
                parse_model(value_str)?;
                config.lone_pairs.get_or_insert_with(Default::default).model =
                    Some(value_str.to_string());
            }
            "bridges.min-size" => {
                config.bridges.get_or_insert_with(Default::default).min_size =
                    Some(value_str.parse().map_err(|_| {
                        CliError::Config(format!(
                            "Invalid integer value for {}: {}",
                            key, value_str
                        ))
                    })?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
