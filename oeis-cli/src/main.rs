//! oeis
//!
//! Prints terms of an OEIS sequence:
//!
//!   oeis --seq A000045 --seqlen 20 [--time] [--format json]
//!   oeis --list [CATEGORY]
//!   oeis --info A000045

mod cli;
mod render;

use clap::Parser;
use cli::{Args, Format};
use oeis_core::SeqError;
use oeis_plugin::SequenceRegistry;
use oeis_sequence::load_sequence_library;
use std::env;
use std::process::ExitCode;
use std::time::Instant;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let directives = env::var("OEIS_LOG")
        .or_else(|_| env::var("RUST_LOG"))
        .unwrap_or_else(|_| default.to_string());
    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let registry = load_sequence_library(SequenceRegistry::new());
    match run(&args, &registry) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args, registry: &SequenceRegistry) -> Result<String, SeqError> {
    if let Some(category) = &args.list {
        let filter = (!category.is_empty()).then_some(category.as_str());
        let metas = registry.list(filter);
        if metas.is_empty() {
            return Err(SeqError::invalid_argument(format!("no sequences in category '{}'", category))
                .with_suggestion(format!("Categories: {}", registry.categories().join(", "))));
        }
        return Ok(render::listing(&metas));
    }

    if let Some(id) = &args.info {
        let plugin = registry
            .get(id.trim())
            .ok_or_else(|| SeqError::unknown_sequence(id))?;
        return Ok(render::info(&plugin.meta()));
    }

    let (Some(id), Some(count)) = (args.seq.as_deref(), args.seqlen) else {
        return Err(SeqError::invalid_argument("--seq and --seqlen are both required"));
    };
    if count <= 0 {
        return Err(SeqError::positive_required("--seqlen"));
    }

    let start = Instant::now();
    let result = registry.compute(id, count)?;
    let elapsed = start.elapsed();

    for w in &result.warnings {
        warn!(code = %w.code, "{}", w.message);
    }

    let mut output = match args.format {
        Format::Table => render::table(&result),
        Format::Json => render::json(&result)? + "\n",
    };
    if args.time {
        info!(sequence = %id, terms = count, elapsed_ms = elapsed.as_millis() as u64, "calculation finished");
        output.push_str(&format!("Calculation took {:.3?}\n", elapsed));
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use oeis_core::codes;

    fn library() -> SequenceRegistry {
        load_sequence_library(SequenceRegistry::new())
    }

    fn run_with(argv: &[&str]) -> Result<String, SeqError> {
        let mut full = vec!["oeis"];
        full.extend_from_slice(argv);
        run(&Args::try_parse_from(full).unwrap(), &library())
    }

    #[test]
    fn test_table_output() {
        let out = run_with(&["--seq", "A000045", "--seqlen", "5"]).unwrap();
        assert_eq!(out, "n\ta(n)\n0\t0\n1\t1\n2\t1\n3\t2\n4\t3\n");
    }

    #[test]
    fn test_json_output() {
        let out = run_with(&["--seq", "a000040", "--seqlen", "3", "--format", "json"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["offset"], 1);
        assert_eq!(value["terms"]["values"], serde_json::json!([2, 3, 5]));
    }

    #[test]
    fn test_non_positive_length() {
        let err = run_with(&["--seq", "A000045", "--seqlen", "0"]).unwrap_err();
        assert_eq!(err.code, codes::POSITIVE_REQUIRED);
        let err = run_with(&["--seq", "A000045", "--seqlen", "-2"]).unwrap_err();
        assert_eq!(err.code, codes::POSITIVE_REQUIRED);
    }

    #[test]
    fn test_unknown_sequence() {
        let err = run_with(&["--seq", "A999999", "--seqlen", "3"]).unwrap_err();
        assert_eq!(err.code, codes::UNKNOWN_SEQUENCE);
        let err = run_with(&["--info", "A999999"]).unwrap_err();
        assert_eq!(err.code, codes::UNKNOWN_SEQUENCE);
    }

    #[test]
    fn test_time_line() {
        let out = run_with(&["--seq", "A000012", "--seqlen", "2", "--time"]).unwrap();
        assert!(out.lines().last().unwrap().starts_with("Calculation took "));
    }

    #[test]
    fn test_list_and_info() {
        let out = run_with(&["--list", "primes"]).unwrap();
        assert!(out.lines().all(|l| l.contains("\tprimes\t")));
        assert!(out.contains("A000040"));
        assert!(run_with(&["--list"]).unwrap().lines().count() > 50);
        assert_eq!(run_with(&["--list", "nope"]).unwrap_err().code, codes::INVALID_ARGUMENT);

        let out = run_with(&["--info", "a000108"]).unwrap();
        assert!(out.starts_with("A000108: "));
    }
}
