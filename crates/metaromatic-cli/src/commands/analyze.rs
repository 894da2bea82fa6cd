use crate::cli::{AnalyzeArgs, OutputFormat};
use crate::config::builder::build_config;
use crate::error::Result;
use metaromatic::core::io::report::write_candidates_csv;
use metaromatic::core::models::interaction::InteractionCandidate;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use tracing::{info, warn};

pub fn run(args: AnalyzeArgs, show_progress: bool) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let config = build_config(&args.input, None)?;

    let result = super::load_and_analyze(&config, show_progress)?;

    if !result.is_success() {
        warn!("{} (status {}).", result.status, result.status.code());
        println!("{} (status {}).", result.status, result.status.code());
        return Ok(());
    }

    let writer: Box<dyn Write> = match &args.output {
        Some(path) => {
            info!("Writing {} candidate(s) to {:?}", result.candidates.len(), path);
            Box::new(BufWriter::new(File::create(path)?))
        }
        None => Box::new(io::stdout().lock()),
    };

    match args.format {
        OutputFormat::Table => write_candidates_table(&result.candidates, writer)?,
        OutputFormat::Csv => write_candidates_csv(&result.candidates, writer)?,
    }

    if let Some(path) = &args.output {
        println!(
            "✓ {} interaction(s) written to: {}",
            result.candidates.len(),
            path.display()
        );
    }
    Ok(())
}

pub fn write_candidates_table<W: Write>(
    candidates: &[InteractionCandidate],
    mut writer: W,
) -> io::Result<()> {
    writeln!(
        writer,
        "{:<8} {:<4} {:>8} {:>10} {:>10} {:>10}",
        "MET", "ARO", "ARO-POS", "NORM", "MET-THETA", "MET-PHI"
    )?;
    for candidate in candidates {
        writeln!(
            writer,
            "{:<8} {:<4} {:>8} {:>10.3} {:>10.3} {:>10.3}",
            candidate.methionine_residue,
            candidate.aromatic_kind,
            candidate.aromatic_residue,
            candidate.distance,
            candidate.theta,
            candidate.phi
        )?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{AnalyzeArgs, InputArgs};
    use metaromatic::core::models::residue::ResidueKind;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    // MET 10 and PHE 20 on chain A, laid out so that exactly one ring midpoint
    // lies 3 A from SD along lone pair `a`.
    const STRUCTURE: &str = "\
ATOM      2  CG  MET A  10       0.000   0.000   0.000  1.00  0.00           C
ATOM      3  SD  MET A  10       1.000   0.000   0.000  1.00  0.00           S
ATOM      4  CE  MET A  10       1.000   1.000   0.000  1.00  0.00           C
ATOM      6  CG  PHE A  20       2.500  -1.500  17.879  1.00  0.00           C
ATOM      7  CD2 PHE A  20       2.500  -1.500 -22.121  1.00  0.00           C
ATOM      8  CE2 PHE A  20     100.000   0.000   0.000  1.00  0.00           C
ATOM      9  CZ  PHE A  20     100.000  10.000   0.000  1.00  0.00           C
ATOM     10  CE1 PHE A  20     100.000  20.000   0.000  1.00  0.00           C
ATOM     11  CD1 PHE A  20     100.000  30.000   0.000  1.00  0.00           C
";

    fn analyze_args(input: PathBuf, format: OutputFormat, output: Option<PathBuf>) -> AnalyzeArgs {
        AnalyzeArgs {
            input: InputArgs {
                input,
                config: None,
                chain: None,
                distance_cutoff: None,
                angle_cutoff: None,
                model: None,
                set_values: vec![],
            },
            format,
            output,
        }
    }

    #[test]
    fn table_has_header_and_aligned_rows() {
        let candidates = vec![InteractionCandidate {
            methionine_residue: 18,
            aromatic_residue: 54,
            aromatic_kind: ResidueKind::Tyrosine,
            distance: 4.21,
            theta: 47.5,
            phi: 120.125,
        }];
        let mut buffer = Vec::new();
        write_candidates_table(&candidates, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("MET"));
        let fields: Vec<&str> = lines[1].split_whitespace().collect();
        assert_eq!(fields, vec!["18", "TYR", "54", "4.210", "47.500", "120.125"]);
    }

    #[test]
    fn csv_output_is_written_to_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input.pdb");
        let output = dir.path().join("hits.csv");
        fs::write(&input, STRUCTURE).unwrap();

        run(
            analyze_args(input, OutputFormat::Csv, Some(output.clone())),
            false,
        )
        .unwrap();

        let text = fs::read_to_string(output).unwrap();
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with("methionine-residue,"));
        assert!(rows[1].starts_with("10,20,PHE,"));
    }

    #[test]
    fn structure_without_relevant_residues_is_not_an_error() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input.pdb");
        let output = dir.path().join("hits.txt");
        fs::write(&input, "HEADER    EMPTY\nEND\n").unwrap();

        run(
            analyze_args(input, OutputFormat::Table, Some(output.clone())),
            false,
        )
        .unwrap();
        assert!(!output.exists());
    }

    #[test]
    fn unreadable_structure_is_a_file_parsing_error() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("broken.pdb");
        fs::write(&input, "ATOM      1  SD  MET A  10   abc   0.0   0.0\n").unwrap();

        let result = run(analyze_args(input, OutputFormat::Table, None), false);
        assert!(matches!(
            result,
            Err(crate::error::CliError::FileParsing { .. })
        ));
    }
}
