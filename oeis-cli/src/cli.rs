use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "oeis")]
#[command(version, about = "Compute terms of OEIS integer sequences")]
pub struct Args {
    /// Sequence identifier, e.g. A000045 (case-insensitive)
    #[arg(long, required_unless_present_any = ["list", "info"])]
    pub seq: Option<String>,

    /// Number of terms to compute
    #[arg(long, required_unless_present_any = ["list", "info"], allow_negative_numbers = true)]
    pub seqlen: Option<i64>,

    /// Report how long the calculation took
    #[arg(long)]
    pub time: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Table, env = "OEIS_FORMAT")]
    pub format: Format,

    /// List the available sequences, optionally only one category
    #[arg(long, value_name = "CATEGORY", num_args = 0..=1, default_missing_value = "")]
    pub list: Option<String>,

    /// Show the description of one sequence
    #[arg(long, value_name = "ID")]
    pub info: Option<String>,

    /// Log at debug level unless OEIS_LOG or RUST_LOG says otherwise
    #[arg(long, short)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Table,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sequence_request() {
        let args = Args::try_parse_from(["oeis", "--seq", "a000045", "--seqlen", "10", "--time"]).unwrap();
        assert_eq!(args.seq.as_deref(), Some("a000045"));
        assert_eq!(args.seqlen, Some(10));
        assert!(args.time);
        assert_eq!(args.format, Format::Table);
    }

    #[test]
    fn test_list_without_category() {
        let args = Args::try_parse_from(["oeis", "--list"]).unwrap();
        assert_eq!(args.list.as_deref(), Some(""));
        let args = Args::try_parse_from(["oeis", "--list", "primes"]).unwrap();
        assert_eq!(args.list.as_deref(), Some("primes"));
    }

    #[test]
    fn test_sequence_required_without_list() {
        assert!(Args::try_parse_from(["oeis", "--seqlen", "4"]).is_err());
        assert!(Args::try_parse_from(["oeis", "--info", "A000045"]).is_ok());
    }

    #[test]
    fn test_negative_length_reaches_validation() {
        let args = Args::try_parse_from(["oeis", "--seq", "A000045", "--seqlen", "-3"]).unwrap();
        assert_eq!(args.seqlen, Some(-3));
    }

    #[test]
    fn test_json_format() {
        let args = Args::try_parse_from(["oeis", "--seq", "A000045", "--seqlen", "3", "--format", "json"]).unwrap();
        assert_eq!(args.format, Format::Json);
    }
}
