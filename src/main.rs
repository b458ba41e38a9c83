use clap::Parser;
use scangrid::cli::{setup_logging, Cli};
use scangrid::output::print_error;
use scangrid::{CliError, ReportError};
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    let Some(input) = cli.input_file.as_deref() else {
        println!("{}", Cli::usage());
        return ExitCode::from(1);
    };

    // A missing input is reported before any configuration problem.
    let result = if input.exists() {
        cli.load_settings()
            .map_err(CliError::from)
            .and_then(|settings| cli.execute(input, &settings))
    } else {
        Err(ReportError::InputNotFound(input.to_path_buf()).into())
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "conversion failed");
            print_error(&describe(&e));
            ExitCode::from(e.exit_code())
        }
    }
}

/// Error message followed by its chain of causes.
fn describe(err: &CliError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
