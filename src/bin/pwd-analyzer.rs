//! Command-line password strength analyzer.

use clap::{CommandFactory, Parser};
use pwd_analyzer::{AnalysisRequest, ZxcvbnEstimator, analyze_and_report, logging};
use secrecy::SecretString;

#[derive(Parser, Debug)]
#[command(name = "pwd-analyzer")]
#[command(about = "A defensive tool to analyze password strength.", long_about = None)]
#[command(after_help = "Example: pwd-analyzer \"Fluffy1990\" -i Fluffy 1990")]
struct Args {
    /// The password you want to analyze.
    password: String,

    /// A list of personal words to check against (e.g., name, pet, year).
    #[arg(short, long, num_args = 1..)]
    inputs: Vec<String>,
}

/// Personal words come from `-i/--inputs` only.
fn build_request(args: Args) -> AnalysisRequest {
    AnalysisRequest::new(SecretString::new(args.password.into())).with_context_words(args.inputs)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init_stderr_logging();

    if args.password.is_empty() {
        Args::command().print_help()?;
        return Ok(());
    }

    let request = build_request(args);
    let report = analyze_and_report(&ZxcvbnEstimator, &request)?;
    println!("{}", report);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use serial_test::serial;

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_inputs_default_empty() {
        let args = Args::try_parse_from(["pwd-analyzer", "hunter2"]).unwrap();
        assert_eq!(args.password, "hunter2");
        assert!(args.inputs.is_empty());
    }

    #[test]
    fn test_inputs_take_several_words() {
        let args =
            Args::try_parse_from(["pwd-analyzer", "Fluffy1990", "-i", "Fluffy", "1990"]).unwrap();
        assert_eq!(args.inputs, vec!["Fluffy", "1990"]);

        let args = Args::try_parse_from(["pwd-analyzer", "--inputs", "rex", "--", "pw"]).unwrap();
        assert_eq!(args.password, "pw");
        assert_eq!(args.inputs, vec!["rex"]);
    }

    #[test]
    fn test_version_flag_is_not_accepted() {
        let err = Args::try_parse_from(["pwd-analyzer", "-V"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);

        let err = Args::try_parse_from(["pwd-analyzer", "pw", "--version"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    #[serial]
    fn test_request_ignores_environment_words_file() {
        // SAFETY: only called from #[serial] tests
        unsafe { std::env::set_var("PWD_CONTEXT_PATH", "/nonexistent/words.txt"); }

        let args =
            Args::try_parse_from(["pwd-analyzer", "Fluffy1990", "-i", "Fluffy", "1990"]).unwrap();
        let request = build_request(args);
        assert_eq!(request.context_words(), ["Fluffy".to_string(), "1990".to_string()]);

        let report = analyze_and_report(&ZxcvbnEstimator, &request).unwrap();
        assert!(report.contains("🚨 Type: Personal Information"));

        // SAFETY: only called from #[serial] tests
        unsafe { std::env::remove_var("PWD_CONTEXT_PATH"); }
    }

    #[test]
    fn test_missing_password_is_an_error() {
        assert!(Args::try_parse_from(["pwd-analyzer"]).is_err());
        assert!(Args::try_parse_from(["pwd-analyzer", "pw", "-i"]).is_err());
    }
}
