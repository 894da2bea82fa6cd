use clap::{Args, Parser, Subcommand, ValueEnum};
use metaromatic::engine::config::LonePairModel;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "David S. Weber",
    version,
    about = "Met-aromatic CLI - Detects methionine-aromatic interactions in protein structures from sulfur lone-pair geometry.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for the interaction scan.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find Met-aromatic interactions in one chain of a PDB structure.
    Analyze(AnalyzeArgs),
    /// Find methionines that interact with several aromatic residues at once.
    Bridges(BridgesArgs),
}

/// Input structure and analysis settings shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Path to the input structure file in PDB format.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Chain to analyze, overriding the config file.
    #[arg(long, value_name = "ID")]
    pub chain: Option<String>,

    /// Maximum SD to ring-midpoint distance in Angstroms, overriding the config file.
    #[arg(short = 'd', long, value_name = "FLOAT")]
    pub distance_cutoff: Option<f64>,

    /// Maximum theta/phi angle in degrees, overriding the config file.
    #[arg(short = 'a', long, value_name = "FLOAT")]
    pub angle_cutoff: Option<f64>,

    /// Lone-pair model: 'rodrigues' (rm) or 'cross-product' (cp).
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<LonePairModel>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S cutoffs.distance=4.9
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Aligned, human-readable columns.
    #[default]
    Table,
    /// Comma-separated values with a header row.
    Csv,
}

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format for the interaction list.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Write results to this file instead of standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `bridges` subcommand.
#[derive(Args, Debug, Clone)]
pub struct BridgesArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Minimum number of distinct aromatic partners, overriding the config file.
    #[arg(short = 'n', long, value_name = "INT")]
    pub min_size: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_analyze_with_overrides() {
        let cli = Cli::parse_from([
            "met-aromatic",
            "-vv",
            "analyze",
            "-i",
            "1rcy.pdb",
            "--chain",
            "B",
            "-d",
            "4.9",
            "--model",
            "cp",
            "--format",
            "csv",
            "-S",
            "cutoffs.angle=60",
        ]);

        assert_eq!(cli.verbose, 2);
        let Commands::Analyze(args) = cli.command else {
            panic!("Expected 'analyze' subcommand");
        };
        assert_eq!(args.input.input, PathBuf::from("1rcy.pdb"));
        assert_eq!(args.input.chain.as_deref(), Some("B"));
        assert_eq!(args.input.distance_cutoff, Some(4.9));
        assert_eq!(args.input.model, Some(LonePairModel::CrossProduct));
        assert_eq!(args.input.set_values, vec!["cutoffs.angle=60".to_string()]);
        assert_eq!(args.format, OutputFormat::Csv);
        assert!(args.output.is_none());
    }

    #[test]
    fn analyze_defaults_to_table_output() {
        let cli = Cli::parse_from(["met-aromatic", "analyze", "--input", "x.pdb"]);
        let Commands::Analyze(args) = cli.command else {
            panic!("Expected 'analyze' subcommand");
        };
        assert_eq!(args.format, OutputFormat::Table);
        assert!(args.input.model.is_none());
    }

    #[test]
    fn parses_bridges_with_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "met-aromatic",
            "bridges",
            "-i",
            "x.pdb",
            "--min-size",
            "3",
            "-j",
            "4",
            "-q",
        ]);
        assert_eq!(cli.threads, Some(4));
        assert!(cli.quiet);
        let Commands::Bridges(args) = cli.command else {
            panic!("Expected 'bridges' subcommand");
        };
        assert_eq!(args.min_size, Some(3));
    }

    #[test]
    fn unknown_model_is_rejected() {
        let result = Cli::try_parse_from(["met-aromatic", "analyze", "-i", "x.pdb", "-m", "euler"]);
        assert!(result.is_err());
    }

    #[test]
    fn input_is_required() {
        assert!(Cli::try_parse_from(["met-aromatic", "analyze"]).is_err());
    }
}
