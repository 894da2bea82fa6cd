use crate::cli::BridgesArgs;
use crate::config::builder::build_config;
use crate::error::Result;
use metaromatic::engine::tasks::bridging::Bridge;
use std::io::{self, Write};
use tracing::{info, warn};

pub fn run(args: BridgesArgs, show_progress: bool) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let config = build_config(&args.input, args.min_size)?;

    let result = super::load_and_analyze(&config, show_progress)?;
    if !result.is_success() {
        warn!("{} (status {}).", result.status, result.status.code());
        println!("{} (status {}).", result.status, result.status.code());
        return Ok(());
    }

    let bridges = result.bridges(config.min_bridge_size);
    info!(
        "Found {} bridge(s) with at least {} aromatic partner(s).",
        bridges.len(),
        config.min_bridge_size
    );

    if bridges.is_empty() {
        println!(
            "No methionine interacts with {} or more aromatic residues.",
            config.min_bridge_size
        );
        return Ok(());
    }

    write_bridges(&bridges, io::stdout().lock())?;
    Ok(())
}

pub fn write_bridges<W: Write>(bridges: &[Bridge], mut writer: W) -> io::Result<()> {
    for bridge in bridges {
        let partners: Vec<String> = bridge
            .aromatics
            .iter()
            .map(|partner| format!("{}{}", partner.kind, partner.residue_number))
            .collect();
        writeln!(
            writer,
            "MET{} -> {}",
            bridge.methionine_residue,
            partners.join(", ")
        )?;
    }
    writer.flush()
}
