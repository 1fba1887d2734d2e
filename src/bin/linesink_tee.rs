use std::error::Error;
use std::io::{self, BufRead};
use std::sync::Arc;

use linesink::cli::SinkArgs;
use linesink::{ErrorPolicy, FileWriterRegistry, LogWriter, SinkBuilder};
use sarge::prelude::*;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    eprintln!("Usage:");
    eprintln!(
        "  linesink_tee [--sink <token> ...] [--default <path>] [--policy fast_fail|accumulate]"
    );
    eprintln!();
    eprintln!("Reads stdin and writes every line to each sink.");
    eprintln!();
    eprintln!("Sink tokens:");
    eprintln!("  - | stdout | console   Write to the console");
    eprintln!("  @<path>                Force treating value as a file path");
    eprintln!("  <path>                 Truncate <path> once, then append every line");
    eprintln!();
    eprintln!("Without --sink, lines go to the default path (output.log).");
}

struct Options {
    sinks: SinkArgs,
    default_path: Option<String>,
    policy: ErrorPolicy,
}

fn parse_policy(value: Option<&str>) -> Result<ErrorPolicy, Box<dyn Error>> {
    match value {
        Some(s) => Ok(ErrorPolicy::from_str(s).ok_or_else(|| format!("unknown policy: {s}"))?),
        None => Ok(ErrorPolicy::FastFail),
    }
}

fn parse_options() -> Result<Options, Box<dyn Error>> {
    let mut reader = ArgumentReader::new();

    let sink_ref = reader.add::<SinkArgs>(tag::both('s', "sink"));
    let default_ref = reader.add::<String>(tag::both('d', "default"));
    let policy_ref = reader.add::<String>(tag::both('p', "policy"));

    let args = reader.parse()?;

    let sinks = match sink_ref.get(&args) {
        Some(Ok(v)) => v,
        Some(Err(_)) => unreachable!("SinkArgs parsing is infallible"),
        None => SinkArgs::default(),
    };

    let policy = parse_policy(policy_ref.get(&args).and_then(Result::ok).as_deref())?;

    Ok(Options {
        sinks,
        default_path: default_ref.get(&args).and_then(Result::ok),
        policy,
    })
}

fn run(options: Options) -> Result<(), Box<dyn Error>> {
    let registry = Arc::new(FileWriterRegistry::with_std_backend());
    if let Some(path) = options.default_path {
        registry.set_default_path(path);
    }

    let mut builder = SinkBuilder::new(Arc::clone(&registry)).with_policy(options.policy);
    builder = if options.sinks.is_empty() {
        builder.add_default_file("default")
    } else {
        builder.with_sink_args(&options.sinks)
    };
    let fanout = builder.build()?;

    tracing::debug!(sinks = ?fanout.sink_ids(), "writing stdin");

    for line in io::stdin().lock().lines() {
        fanout.write_message(&line?)?;
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let options = match parse_options() {
        Ok(options) => options,
        Err(e) => {
            eprintln!("linesink_tee error: {e}");
            print_usage();
            std::process::exit(2);
        }
    };

    if let Err(e) = run(options) {
        eprintln!("linesink_tee error: {e}");
        std::process::exit(1);
    }
}
