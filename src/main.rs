use std::{fs, path::PathBuf, process::ExitCode};

use calmat::{
    config::{
        DEFAULT_EIGEN_TOLERANCE, DEFAULT_MAX_EIGEN_ITERATIONS, DEFAULT_MAX_ELEMENTS, DEFAULT_MAX_LABELS,
        DEFAULT_MAX_LOOP_DEPTH, Limits,
    },
    run_with_limits,
};
use clap::Parser;
use env_logger::Env;

/// calmat runs matrix computation scripts: matrix arithmetic, Boolean
/// matrix algebra, eigendecomposition and correspondence analysis.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The script to run.
    script: PathBuf,

    /// Parameters substituted for `%1`..`%9` in the script. `%0` is the
    /// script path.
    params: Vec<String>,

    /// Largest number of elements of a loaded or constructed matrix.
    #[arg(long, default_value_t = DEFAULT_MAX_ELEMENTS)]
    max_elements: usize,

    /// Largest number of labels in the script.
    #[arg(long, default_value_t = DEFAULT_MAX_LABELS)]
    max_labels: usize,

    /// Deepest nesting of `while` loops.
    #[arg(long, default_value_t = DEFAULT_MAX_LOOP_DEPTH)]
    max_loop_depth: usize,

    /// Iteration cap per eigenvalue in `tridiag`.
    #[arg(long, default_value_t = DEFAULT_MAX_EIGEN_ITERATIONS)]
    max_iterations: usize,

    /// Relative convergence tolerance of `tridiag`.
    #[arg(long, default_value_t = DEFAULT_EIGEN_TOLERANCE)]
    tolerance: f64,

    /// Raises the log level: `-v` for info, `-vv` for debug.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    let Ok(source) = fs::read_to_string(&args.script) else {
        eprintln!("Failed to read the script '{}'. Perhaps this file does not exist?",
                  args.script.display());
        return ExitCode::from(3);
    };

    let limits = Limits::default().with_max_elements(args.max_elements)
                                  .with_max_labels(args.max_labels)
                                  .with_max_loop_depth(args.max_loop_depth)
                                  .with_max_eigen_iterations(args.max_iterations)
                                  .with_eigen_tolerance(args.tolerance);

    let mut params = vec![args.script.display().to_string()];
    params.extend(args.params);

    match run_with_limits(&source, &params, limits) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
