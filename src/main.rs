use clap::Parser;
use json_value_equal::{options::CompareOptions, Comparator};
use serde_json::Value;

/// Simple runner: pass two JSON documents via CLI and print whether they are
/// structurally equal.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// First JSON document (string). You can also pipe a file using shell quoting.
    left: String,
    /// Second JSON document (string)
    right: String,
    /// Compare scalar values exactly instead of case-insensitively (optional flag)
    #[arg(long)]
    case_sensitive: bool,
    /// Require matched sequence elements to share the same primitive type (optional flag)
    #[arg(long)]
    type_sensitive: bool,
    /// Require sequence elements to match at the same position (optional flag)
    #[arg(long)]
    index_sensitive: bool,
    /// Emit trace-level logs for the comparison
    #[arg(long)]
    verbose: bool,
}

fn main() {
    // Parse CLI arguments.
    let args = Args::parse();

    let level = if args.verbose {
        tracing::Level::TRACE
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    // Parse both input documents.
    let left: Value = match serde_json::from_str(&args.left) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Invalid JSON (left): {e}");
            std::process::exit(1);
        }
    };
    let right: Value = match serde_json::from_str(&args.right) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Invalid JSON (right): {e}");
            std::process::exit(1);
        }
    };

    // Build options.
    let opts = CompareOptions::new()
        .case_sensitive(args.case_sensitive)
        .type_sensitive(args.type_sensitive)
        .index_sensitive(args.index_sensitive);
    let cmp = Comparator::new(opts);

    // Dispatch by argument kind: records and sequences have separate entry
    // points with their own preconditions.
    let outcome = match (&left, &right) {
        (Value::Object(_), Value::Object(_)) => cmp.records(&left, &right),
        (Value::Array(_), Value::Array(_)) => cmp.sequences(&left, &right),
        _ => {
            eprintln!("Arguments must both be records or both be sequences");
            std::process::exit(1);
        }
    };

    // Output result.
    match outcome {
        Ok(equal) => println!("{equal}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
