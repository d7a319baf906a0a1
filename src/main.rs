use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use actual_cli::cli::{dispatch, COMMAND_NAMES};
use actual_cli::client::HttpBudgetClient;
use actual_cli::config::{ActualPaths, Settings};
use actual_cli::display::{render_error, render_success};
use actual_cli::ActualError;

const LOG_ENV: &str = "ACTUAL_CLI_LOG";

#[derive(Parser, Debug)]
#[command(
    name = "actual-cli",
    version,
    about = "Query and update an Actual Budget file from the command line",
    long_about = "Runs one command against an Actual Budget server and prints the \
                  result as JSON. Connection settings come from ACTUAL_SERVER_URL, \
                  ACTUAL_PASSWORD, ACTUAL_SYNC_ID, ACTUAL_DATA_DIR and \
                  ACTUAL_ENCRYPTION_PASSWORD, or from ~/.config/actual-budget/.env.",
    override_usage = "actual-cli <COMMAND> [FLAGS]...",
    after_help = after_help()
)]
struct Cli {
    /// Command to run, followed by its flags, e.g.
    /// add-transaction --account Checking --amount -12.50
    ///
    /// Everything after the command is passed through untouched, including
    /// --help and --version.
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    tokens: Vec<String>,
}

impl Cli {
    fn command(&self) -> Option<&str> {
        self.tokens.first().map(String::as_str)
    }

    fn args(&self) -> &[String] {
        self.tokens.get(1..).unwrap_or_default()
    }
}

fn after_help() -> String {
    format!("Commands: {}", COMMAND_NAMES.join(", "))
}

#[tokio::main]
async fn main() -> ExitCode {
    setup_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            eprintln!("{}", render_error(&usage_error(&err)));
            return ExitCode::from(1);
        }
    };

    let result = dispatch(
        cli.command(),
        cli.args(),
        HttpBudgetClient::new(),
        || Settings::load(&ActualPaths::new()?),
    )
    .await;

    match result {
        Ok(value) => {
            println!("{}", render_success(&value));
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(kind = ?err.kind(), "command failed");
            eprintln!("{}", render_error(&err));
            ExitCode::from(1)
        }
    }
}

/// First line of a clap error, without its `error: ` prefix
fn usage_error(err: &clap::Error) -> ActualError {
    let rendered = err.to_string();
    let line = rendered.lines().next().unwrap_or_default();
    ActualError::Validation(line.trim_start_matches("error: ").to_string())
}

/// Log to stderr so stdout carries only the JSON result
fn setup_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        <Cli as CommandFactory>::command().debug_assert();
    }

    #[test]
    fn test_flags_after_command_are_captured_raw() {
        let cli = Cli::try_parse_from([
            "actual-cli",
            "add-transaction",
            "--account",
            "Checking",
            "--amount",
            "-12.50",
        ])
        .unwrap();

        assert_eq!(cli.command(), Some("add-transaction"));
        assert_eq!(cli.args(), ["--account", "Checking", "--amount", "-12.50"]);
    }

    #[test]
    fn test_hyphenated_command_reaches_dispatch() {
        let cli = Cli::try_parse_from(["actual-cli", "--bogus"]).unwrap();
        assert_eq!(cli.command(), Some("--bogus"));
        assert!(cli.args().is_empty());

        let cli = Cli::try_parse_from(["actual-cli", "-x", "list-accounts"]).unwrap();
        assert_eq!(cli.command(), Some("-x"));
        assert_eq!(cli.args(), ["list-accounts"]);
    }

    #[test]
    fn test_help_after_command_is_a_flag() {
        let cli = Cli::try_parse_from(["actual-cli", "get-budget", "--help"]).unwrap();
        assert_eq!(cli.command(), Some("get-budget"));
        assert_eq!(cli.args(), ["--help"]);

        let cli = Cli::try_parse_from(["actual-cli", "list-payees", "--version"]).unwrap();
        assert_eq!(cli.args(), ["--version"]);
    }

    #[test]
    fn test_top_level_help_still_works() {
        let err = Cli::try_parse_from(["actual-cli", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_no_tokens_means_no_command() {
        let cli = Cli::try_parse_from(["actual-cli"]).unwrap();
        assert_eq!(cli.command(), None);
        assert!(cli.args().is_empty());
    }
}
