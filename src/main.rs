mod cli;
mod config;

use cli::{Args, Command};
use config::{discover_config, load_config_from_path, resolve_settings, ResolvedSettings};
use dep_impact::adapters::outbound::console::{SilentProgressReporter, StderrProgressReporter};
use dep_impact::adapters::outbound::filesystem::FileSystemReader;
use dep_impact::application::dto::{AnalysisRequest, ConnectivityRequest, ImpactRequest};
use dep_impact::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use dep_impact::application::use_cases::{
    AnalyzeReportUseCase, SimulateImpactUseCase, TraceConnectivityUseCase,
};
use dep_impact::ports::outbound::ProgressReporter;
use dep_impact::shared::error::ExitCode;
use dep_impact::shared::Result;
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    match run() {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\n{} {}", "Caused by:".yellow(), cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn run() -> Result<ExitCode> {
    // Clap exits with code 2 on invalid arguments
    let args = Args::parse_args();

    let config = match args.config.as_deref() {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(Path::new("."))?,
    };
    let config_warnings = config
        .as_ref()
        .map(|config| config.unknown_field_warnings())
        .unwrap_or_default();

    let cli_fail_on_vulnerable = match &args.command {
        Command::Analyze(analyze) => analyze.fail_on_vulnerable,
        _ => false,
    };
    let settings = resolve_settings(
        config.as_ref(),
        args.command.output_args().format,
        cli_fail_on_vulnerable,
        args.quiet,
    )?;

    if settings.quiet {
        execute(args.command, settings, &config_warnings, &SilentProgressReporter::new())
    } else {
        execute(args.command, settings, &config_warnings, &StderrProgressReporter::new())
    }
}

fn execute<PR: ProgressReporter>(
    command: Command,
    settings: ResolvedSettings,
    config_warnings: &[String],
    reporter: &PR,
) -> Result<ExitCode> {
    for warning in config_warnings {
        reporter.report_error(warning);
    }

    let formatter = FormatterFactory::create(settings.format);

    match command {
        Command::Analyze(analyze) => {
            let use_case =
                AnalyzeReportUseCase::new(FileSystemReader::new(), FileSystemReader::new(), reporter);
            let response = use_case.execute(AnalysisRequest::new(analyze.report, analyze.graph))?;

            reporter.report(FormatterFactory::progress_message(settings.format));
            let content = formatter.format_analysis(&response)?;
            present(analyze.output.output, &content)?;

            if settings.fail_on_vulnerable && response.summary.has_vulnerabilities() {
                reporter.report_error(&format!(
                    "⚠️  {} vulnerable dependenc{} found (--fail-on-vulnerable)",
                    response.summary.vulnerable_count,
                    if response.summary.vulnerable_count == 1 {
                        "y"
                    } else {
                        "ies"
                    }
                ));
                return Ok(ExitCode::VulnerabilitiesDetected);
            }
        }
        Command::Impact(impact) => {
            let use_case = SimulateImpactUseCase::new(FileSystemReader::new(), reporter);
            let response =
                use_case.execute(ImpactRequest::new(impact.report, impact.dependency))?;

            reporter.report(FormatterFactory::progress_message(settings.format));
            let content = formatter.format_impact(&response)?;
            present(impact.output.output, &content)?;
        }
        Command::Connectivity(connectivity) => {
            let use_case = TraceConnectivityUseCase::new(
                FileSystemReader::new(),
                FileSystemReader::new(),
                reporter,
            );
            let response = use_case.execute(ConnectivityRequest::new(
                connectivity.report,
                connectivity.graph,
            ))?;

            reporter.report(FormatterFactory::progress_message(settings.format));
            let content = formatter.format_connectivity(&response)?;
            present(connectivity.output.output, &content)?;
        }
    }

    Ok(ExitCode::Success)
}

fn present(output: Option<PathBuf>, content: &str) -> Result<()> {
    PresenterFactory::create(PresenterType::from_output(output)).present(content)
}
