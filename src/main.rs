mod cli;

use cli::Args;
use owo_colors::OwoColorize;
use swift_dependency_submission::application::factories::{OutputTarget, PresenterFactory};
use swift_dependency_submission::config::{load_config_from_path, SubmissionConfig};
use swift_dependency_submission::prelude::*;
use swift_dependency_submission::shared::error::ExitCode;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    let args = Args::parse_args();

    if let Err(e) = run(args) {
        eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\n{} {}", "Caused by:".yellow(), err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    // Configuration is resolved before any input is consumed
    let config_file = args
        .config
        .as_deref()
        .map(|path| load_config_from_path(Path::new(path)))
        .transpose()?;
    let config = SubmissionConfig::from_env(config_file.as_ref())?;

    let input = args
        .input
        .map_or(InputSource::Stdin, |path| InputSource::File(PathBuf::from(path)));
    let mut request = ConversionRequest::new(input, config);
    if let Some(scanned_at) = args.scanned_at {
        request = request.with_scanned_at(scanned_at);
    }

    let response = if args.quiet {
        convert(SilentProgressReporter::new(), request)?
    } else {
        convert(StderrProgressReporter::new(), request)?
    };

    let formatter = if args.pretty {
        GithubSnapshotFormatter::pretty()
    } else {
        GithubSnapshotFormatter::new()
    };
    let formatted_output = formatter.format(&response.snapshot)?;

    let output_path = args.output.map(PathBuf::from);
    PresenterFactory::create(OutputTarget::from(output_path.clone())).present(&formatted_output)?;

    if let (Some(path), false) = (output_path, args.quiet) {
        eprintln!("✅ Output complete: {}", path.display());
    }

    Ok(())
}

fn convert<PR: ProgressReporter>(
    progress_reporter: PR,
    request: ConversionRequest,
) -> Result<ConversionResponse> {
    ConvertDependencyGraphUseCase::new(FileSystemReader::new(), progress_reporter).execute(request)
}
