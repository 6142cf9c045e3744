//! Command-line interface.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::error::ErrorKind;
use clap::Parser;

use crate::input::{Target, TargetSource};

#[derive(Parser, Debug)]
#[command(name = "header-auditor")]
#[command(version)]
#[command(about = "Print response headers and check HSTS and Secure cookies", long_about = None)]
pub struct Cli {
    /// URL to check
    #[arg(short = 'u', long = "url", value_name = "URL")]
    pub url: Option<String>,

    /// File with one URL per line
    #[arg(
        short = 'l',
        long = "list",
        value_name = "PATH",
        value_parser = OsStringValueParser::new().map(PathBuf::from)
    )]
    pub list: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Do not emit ANSI color codes
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Resolve the mutually exclusive `-u` / `-l` pair.
    ///
    /// A blank `-u` or empty `-l` counts as not supplied. Returns a clap
    /// error so callers handle parse and resolve failures identically.
    pub fn target_source(&self) -> Result<TargetSource, clap::Error> {
        let url = self.url.as_deref().and_then(Target::new);
        let list = self
            .list
            .as_ref()
            .filter(|path| !path.as_os_str().is_empty());

        match (url, list) {
            (Some(target), None) => Ok(TargetSource::Single(target)),
            (None, Some(path)) => Ok(TargetSource::List(path.clone())),
            (Some(_), Some(_)) => Err(usage_error(
                ErrorKind::ArgumentConflict,
                "multiple options cannot be specified at the same time",
            )),
            (None, None) => Err(usage_error(
                ErrorKind::MissingRequiredArgument,
                "one of --url or --list is required",
            )),
        }
    }
}

fn usage_error(kind: ErrorKind, message: &str) -> clap::Error {
    use clap::CommandFactory;
    Cli::command().error(kind, message)
}

/// Exit code for a parse failure: 0 for `--help`/`--version`, 1 otherwise.
pub fn exit_code(err: &clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
        _ => ExitCode::from(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("header-auditor").chain(args.iter().copied()))
    }

    #[test]
    fn test_single_url() {
        let cli = parse(&["-u", "https://example.com"]).unwrap();
        assert_eq!(
            cli.target_source().unwrap(),
            TargetSource::Single(Target::new("https://example.com").unwrap())
        );
        assert!(!cli.no_color);
    }

    #[test]
    fn test_list_path() {
        let cli = parse(&["-l", "urls.txt", "--no-color"]).unwrap();
        assert_eq!(
            cli.target_source().unwrap(),
            TargetSource::List(PathBuf::from("urls.txt"))
        );
        assert!(cli.no_color);
    }

    #[test]
    fn test_both_flags_conflict() {
        let cli = parse(&["-u", "https://example.com", "-l", "urls.txt"]).unwrap();
        let err = cli.target_source().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
        assert_eq!(exit_code(&err), ExitCode::from(1));
    }

    #[test]
    fn test_neither_flag_is_missing_argument() {
        let cli = parse(&[]).unwrap();
        let err = cli.target_source().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert!(err.to_string().contains("Usage"));
        assert_eq!(exit_code(&err), ExitCode::from(1));
    }

    #[test]
    fn test_stray_positional_rejected() {
        let err = parse(&["-u", "https://example.com", "extra"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
        assert_eq!(exit_code(&err), ExitCode::from(1));
    }

    #[test]
    fn test_empty_url_with_list_runs_list() {
        let cli = parse(&["-u", "", "-l", "urls.txt"]).unwrap();
        assert_eq!(
            cli.target_source().unwrap(),
            TargetSource::List(PathBuf::from("urls.txt"))
        );
    }

    #[test]
    fn test_empty_list_with_url_runs_url() {
        let cli = parse(&["-u", "https://example.com", "-l", ""]).unwrap();
        assert_eq!(
            cli.target_source().unwrap(),
            TargetSource::Single(Target::new("https://example.com").unwrap())
        );
    }

    #[test]
    fn test_blank_url_alone_is_missing_argument() {
        for blank in ["", "   "] {
            let cli = parse(&["-u", blank]).unwrap();
            let err = cli.target_source().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        }
    }

    #[test]
    fn test_help_exits_zero() {
        let err = parse(&["--help"]).unwrap_err();
        assert_eq!(exit_code(&err), ExitCode::SUCCESS);
    }
}
