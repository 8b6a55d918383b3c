use clap::error::ErrorKind;
use clap::{ArgAction, Parser, ValueEnum};
use tracing::{Level, info, warn};

mod error;
mod integrand;
mod quadrature;

use error::CliError;
use integrand::{SqrtOnePlusExp, describe};
use quadrature::{ParallelConfig, RemainderPolicy, run_parallel_integral};

// --- Command Line Arguments ---

#[derive(Parser, Debug)]
#[command(name = "ptrapz")]
#[command(about = "ptrapz - parallel trapezoidal integration of sqrt(1 + e^x)")]
#[command(version)]
#[command(allow_negative_numbers = true)]
struct Args {
    /// Left end of the interval
    a: i64,
    /// Right end of the interval
    b: i64,
    /// Number of trapezoids across the whole interval
    n: i64,
    /// Number of worker threads
    tn: i64,

    /// What to do when N is not a multiple of TN
    #[arg(long, value_enum, default_value = "distribute")]
    remainder: CliRemainder,
    /// Log progress to stderr (-v for a summary, -vv for every worker)
    #[arg(long, short, action = ArgAction::Count)]
    verbose: u8,
}

/// CLI remainder policy selection
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum CliRemainder {
    /// Spread the extra segments over the first workers
    Distribute,
    /// Fail unless N divides evenly
    Reject,
    /// Drop the extra segments
    Truncate,
}

impl From<CliRemainder> for RemainderPolicy {
    fn from(cli: CliRemainder) -> Self {
        match cli {
            CliRemainder::Distribute => RemainderPolicy::Distribute,
            CliRemainder::Reject => RemainderPolicy::Reject,
            CliRemainder::Truncate => RemainderPolicy::Truncate,
        }
    }
}

/// Parse arguments, sorting clap failures into invocation and parse errors.
/// Help and version requests print and exit here.
fn parse_args_from<I, T>(args: I) -> Result<Args, CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Args::try_parse_from(args).map_err(|e| match e.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => e.exit(),
        ErrorKind::ValueValidation | ErrorKind::InvalidValue => CliError::Parse(clap_message(&e)),
        _ => CliError::Invocation(clap_message(&e)),
    })
}

/// First line of a clap error without its `error: ` prefix
fn clap_message(e: &clap::Error) -> String {
    let rendered = e.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.trim_start_matches("error: ").to_string()
}

// --- Logging ---

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };

    // stdout carries only the result line
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

// --- Integration ---

/// Non-positive counts mean "nothing to compute"
fn count(value: i64) -> usize {
    usize::try_from(value).unwrap_or(0)
}

fn format_value(value: f64) -> String {
    format!("{:.4}", value)
}

fn run(args: &Args) -> Result<f64, CliError> {
    let (a, b) = (args.a as f64, args.b as f64);
    let segments = count(args.n);
    let threads = count(args.tn);

    if a > b {
        warn!(a, b, "interval is reversed; the estimate will be negative");
    }
    if !(0.0..=50.0).contains(&a) || !(0.0..=50.0).contains(&b) {
        warn!(a, b, "interval lies outside [0, 50]");
    }

    let config = ParallelConfig::default()
        .with_threads(threads)
        .with_remainder(args.remainder.into());

    info!(
        integrand = %describe(&SqrtOnePlusExp),
        a, b, segments, threads, "integrating"
    );

    let result = run_parallel_integral(&SqrtOnePlusExp, a, b, segments, &config)?;

    let stats = &result.statistics;
    info!(
        workers = stats.thread_count(),
        slowest_worker_us = stats.slowest_worker().as_micros() as u64,
        total_us = stats.elapsed_time.as_micros() as u64,
        "workers joined"
    );

    Ok(result.value)
}

fn main() {
    let args = match parse_args_from(std::env::args_os()) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    };

    init_logging(args.verbose);

    match run(&args) {
        Ok(value) => println!("{}", format_value(value)),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<Args, CliError> {
        parse_args_from(std::iter::once("ptrapz").chain(args.iter().copied()))
    }

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_positional_integers() {
        let args = parse(&["0", "1", "1000", "4"]).unwrap();
        assert_eq!((args.a, args.b, args.n, args.tn), (0, 1, 1000, 4));
        assert_eq!(args.remainder, CliRemainder::Distribute);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_parse_options() {
        let args = parse(&["--remainder", "reject", "-vv", "0", "2", "100", "2"]).unwrap();
        assert_eq!(args.remainder, CliRemainder::Reject);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_negative_counts_are_accepted() {
        let args = parse(&["0", "1", "10", "-3"]).unwrap();
        assert_eq!(args.tn, -3);
        assert_eq!(count(args.tn), 0);
    }

    #[test]
    fn test_wrong_argument_count() {
        assert!(matches!(parse(&["0", "1", "10"]), Err(CliError::Invocation(_))));
        assert!(matches!(
            parse(&["0", "1", "10", "2", "5"]),
            Err(CliError::Invocation(_))
        ));
        assert!(matches!(parse(&[]), Err(CliError::Invocation(_))));
    }

    #[test]
    fn test_non_integer_argument() {
        assert!(matches!(parse(&["0", "1.5", "10", "2"]), Err(CliError::Parse(_))));
        assert!(matches!(parse(&["0", "1", "ten", "2"]), Err(CliError::Parse(_))));
        assert!(matches!(
            parse(&["--remainder", "round-robin", "0", "1", "10", "2"]),
            Err(CliError::Parse(_))
        ));
    }

    #[test]
    fn test_clap_message_strips_prefix() {
        let err = parse(&["0", "1", "ten", "2"]).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("invalid argument value: "), "{}", message);
        assert!(!message.contains("error: "), "{}", message);
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(0.0), "0.0000");
        assert_eq!(format_value(1.64205580955), "1.6421");
        assert_eq!(format_value(4.007024956918338), "4.0070");
    }

    #[test]
    fn test_run_scenarios() {
        fn run_with(a: &[&str]) -> String {
            format_value(run(&parse(a).unwrap()).unwrap())
        }

        assert_eq!(run_with(&["0", "1", "1000", "4"]), "1.6421");
        assert_eq!(run_with(&["0", "0", "10", "1"]), "0.0000");
        assert_eq!(run_with(&["0", "1", "10", "0"]), "0.0000");
        assert_eq!(run_with(&["0", "1", "0", "4"]), "0.0000");
        assert_eq!(run_with(&["0", "2", "100", "2"]), run_with(&["0", "2", "100", "1"]));
    }

    #[test]
    fn test_run_reject_uneven() {
        let args = parse(&["--remainder", "reject", "0", "1", "10", "3"]).unwrap();
        let err = run(&args).unwrap_err();
        assert!(matches!(err, CliError::Integration(_)));
        assert_eq!(err.exit_code(), 1);
    }
}
