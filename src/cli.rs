use clap::{Args as ClapArgs, Parser, Subcommand};
use dep_impact::application::dto::OutputFormat;
use std::path::PathBuf;

/// Analyze the impact of vulnerable dependencies on a build graph
#[derive(Parser, Debug)]
#[command(name = "dep-impact")]
#[command(version)]
#[command(
    about = "Analyze the impact of vulnerable dependencies on a build graph",
    long_about = "Reads a dependency scanner's JSON report and, optionally, a build tool's \
                  dependency tree, then summarizes findings, links every component to its \
                  dependents and simulates upgrades for vulnerable components."
)]
pub struct Args {
    /// Path to a config file (defaults to ./dep-impact.config.yml when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output (warnings are still printed)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Summarize a scan report and list the dependency graph edges
    Analyze(AnalyzeArgs),
    /// Simulate upgrading one vulnerable dependency and list its direct dependents
    Impact(ImpactArgs),
    /// Trace every component transitively reachable from a vulnerable one
    Connectivity(ConnectivityArgs),
}

/// Options shared by every subcommand that renders output
#[derive(ClapArgs, Debug)]
pub struct OutputArgs {
    /// Output format: json or markdown (defaults to json)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct AnalyzeArgs {
    /// Scanner JSON report (e.g. dependency-check-report.json)
    #[arg(short, long, value_name = "FILE")]
    pub report: PathBuf,

    /// Build tool dependency tree in DOT form
    #[arg(short, long, value_name = "FILE")]
    pub graph: Option<PathBuf>,

    /// Exit with code 1 when the report lists vulnerable dependencies
    #[arg(long)]
    pub fail_on_vulnerable: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(ClapArgs, Debug)]
pub struct ImpactArgs {
    /// Scanner JSON report (e.g. dependency-check-report.json)
    #[arg(short, long, value_name = "FILE")]
    pub report: PathBuf,

    /// fileName of the vulnerable dependency as listed in the report
    #[arg(short, long, value_name = "FILE_NAME")]
    pub dependency: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(ClapArgs, Debug)]
pub struct ConnectivityArgs {
    /// Scanner JSON report (e.g. dependency-check-report.json)
    #[arg(short, long, value_name = "FILE")]
    pub report: PathBuf,

    /// Build tool dependency tree in DOT form
    #[arg(short, long, value_name = "FILE")]
    pub graph: PathBuf,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl Command {
    pub fn output_args(&self) -> &OutputArgs {
        match self {
            Command::Analyze(args) => &args.output,
            Command::Impact(args) => &args.output,
            Command::Connectivity(args) => &args.output,
        }
    }
}
