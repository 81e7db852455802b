use clap::{Args, Parser, Subcommand};
use ligsketch::core::io::format::StructureFormat;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "ligsketch - deterministic ligand sketching, descriptor estimation and receptor affinity scoring from formula text.",
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

    /// Set the number of threads for parallel computation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S relaxation.iterations=200
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", global = true)]
    pub set_values: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Synthesize a relaxed 3D structure from a formula and write it as PDB or PDBQT.
    Build(BuildArgs),
    /// Print the physicochemical descriptors of a formula as JSON.
    Describe(DescribeArgs),
    /// Estimate the binding affinity of a formula against a receptor.
    Score(ScoreArgs),
    /// Structure text, descriptors and affinity of one formula as a single JSON document.
    Profile(ScoreArgs),
    /// Classify geometric contacts between a ligand and a receptor structure.
    Analyze(AnalyzeArgs),
    /// Rank a CSV library of formulas by affinity against one receptor.
    Screen(ScreenArgs),
}

/// Receptor selection shared by the scoring commands.
#[derive(Args, Debug, Clone, Default)]
pub struct ReceptorArgs {
    /// Receptor key (il-6, tnf-alpha, il-1beta, cox-2). Unknown keys use the generic model.
    #[arg(short, long, value_name = "KEY")]
    pub receptor: Option<String>,

    /// Path to a protein sequence (raw or single-header FASTA) used when the key is unknown.
    #[arg(long, value_name = "PATH")]
    pub sequence: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Ligand formula, e.g. "CC(=O)Oc1ccccc1C(=O)O".
    #[arg(short, long, value_name = "FORMULA")]
    pub formula: String,

    /// Output format. Defaults to the output file extension, then to the config file.
    #[arg(long, value_name = "pdb|pdbqt")]
    pub format: Option<StructureFormat>,

    /// Output file. Prints to stdout when omitted.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct DescribeArgs {
    /// Ligand formula.
    #[arg(short, long, value_name = "FORMULA")]
    pub formula: String,
}

#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Ligand formula.
    #[arg(short, long, value_name = "FORMULA")]
    pub formula: String,

    #[command(flatten)]
    pub receptor: ReceptorArgs,
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Ligand structure file (PDB or PDBQT).
    #[arg(short, long, value_name = "PATH")]
    pub ligand: Option<PathBuf>,

    /// Ligand formula, synthesized when no usable ligand structure is given.
    #[arg(short, long, value_name = "FORMULA")]
    pub formula: Option<String>,

    /// Receptor structure file (PDB or PDBQT).
    #[arg(short = 'r', long, required = true, value_name = "PATH")]
    pub receptor_structure: PathBuf,

    /// Override the contact cutoff in Angstroms.
    #[arg(long, value_name = "FLOAT")]
    pub cutoff: Option<f64>,

    /// Override the number of interactions reported.
    #[arg(short = 'n', long, value_name = "INT")]
    pub max_interactions: Option<usize>,
}

#[derive(Args, Debug)]
pub struct ScreenArgs {
    /// CSV file with `name` and `formula` columns.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Output CSV of ranked hits.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    #[command(flatten)]
    pub receptor: ReceptorArgs,
}
