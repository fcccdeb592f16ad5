use catlang::{
    config::{ErrorPolicy, RunConfig},
    interpreter::runner::Runner,
    source::{program_lines, read_program},
};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// catlang evaluates a program of integer arithmetic lines and assignments,
/// printing each line's value followed by the final variables.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the argument as program text instead of a file path.
    #[arg(short, long)]
    expr: bool,

    /// Whether a failing line stops the run or is reported and skipped.
    #[arg(long, value_enum, env = "CATLANG_ON_ERROR", default_value_t = ErrorPolicy::Abort)]
    on_error: ErrorPolicy,

    /// Only print the final variables.
    #[arg(short, long)]
    quiet: bool,

    contents: String,
}

/// Installs a stderr subscriber when `RUST_LOG` is set, e.g.
/// `RUST_LOG=catlang=trace`.
fn init_tracing() {
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)
                                                        .with_target(true)
                                                        .with_level(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

fn main() {
    let args = Args::parse();
    init_tracing();

    let lines = if args.expr {
        program_lines(&args.contents)
    } else {
        read_program(&args.contents).unwrap_or_else(|e| {
                                        eprintln!("{e}");
                                        std::process::exit(1);
                                    })
    };

    let mut runner = Runner::new(RunConfig { on_error: args.on_error });
    for line in &lines {
        match runner.step(line) {
            Ok(Some(report)) if !args.quiet => println!("{report}"),
            Ok(Some(_)) => {},
            Ok(None) => {
                if let Some(e) = runner.failures().last() {
                    eprintln!("{e}");
                }
            },
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
    }

    let report = runner.finish();
    println!("Variables:");
    print!("{}", report.environment);

    if !report.is_clean() {
        std::process::exit(1);
    }
}
