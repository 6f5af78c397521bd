use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;

use crate::report::PairSpec;

/// Pearson correlation reports over delimited player-stat tables.
#[derive(Debug, Parser)]
#[command(name = "statline", version, about)]
pub struct Cli {
    /// Path to the stat table (.csv, .tsv, or records-oriented .json)
    pub input: PathBuf,

    /// Extra column pair to correlate, written as "COLA,COLB" (repeatable)
    #[arg(long = "pair", value_name = "A,B")]
    pub pairs: Vec<String>,

    /// Emit the report as JSON instead of plain text
    #[arg(long)]
    pub json: bool,
}

/// Parse a `--pair` value into a [`PairSpec`] labeled `"A and B"`.
pub fn parse_pair(spec: &str) -> Result<PairSpec> {
    let parts: Vec<&str> = spec.split(',').map(str::trim).collect();
    match parts.as_slice() {
        [a, b] if !a.is_empty() && !b.is_empty() => {
            Ok(PairSpec::new(a, b, &format!("{a} and {b}")))
        }
        _ => bail!("Invalid --pair '{spec}': expected two column names as \"A,B\""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_spec_builds_label() {
        let pair = parse_pair("AST,TO").unwrap();
        assert_eq!(pair.col_a, "AST");
        assert_eq!(pair.col_b, "TO");
        assert_eq!(pair.label, "AST and TO");
    }

    #[test]
    fn pair_spec_trims_whitespace() {
        let pair = parse_pair(" 3P% , PPG ").unwrap();
        assert_eq!(pair.col_a, "3P%");
        assert_eq!(pair.col_b, "PPG");
    }

    #[test]
    fn pair_spec_rejects_wrong_arity() {
        assert!(parse_pair("AST").is_err());
        assert!(parse_pair("A,B,C").is_err());
        assert!(parse_pair("A,").is_err());
    }

    #[test]
    fn cli_parses_flags() {
        let cli = Cli::parse_from(["statline", "stats.csv", "--pair", "AST,TO", "--json"]);
        assert_eq!(cli.input, PathBuf::from("stats.csv"));
        assert_eq!(cli.pairs, vec!["AST,TO"]);
        assert!(cli.json);
    }
}
