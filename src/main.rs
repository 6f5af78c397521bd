use anyhow::Result;
use clap::Parser;

use statline::cli::{Cli, parse_pair};
use statline::data::loader;
use statline::report::{self, default_pairs};
use statline::stats::pearson;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let dataset = loader::load_file(&cli.input)?;
    log::info!(
        "loaded {} rows from {}",
        dataset.len(),
        cli.input.display()
    );

    println!("Data loaded: {} entries", dataset.len());
    if dataset.is_empty() {
        println!("No data found!");
        return Ok(());
    }
    println!("Column Names: {}", dataset.column_names.join(", "));

    let mut pairs = default_pairs();
    for spec in &cli.pairs {
        pairs.push(parse_pair(spec)?);
    }

    let reports = report::evaluate_pairs(&dataset, &pairs);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    for rep in &reports {
        println!("{}", rep.render());
    }

    // Known-answer checks so a report can be trusted at a glance.
    println!();
    println!("--- Correlation Function Testing ---");
    println!(
        "Test 1 (Perfect Positive): {:.4}",
        pearson(&[1.0, 2.0, 3.0, 4.0], &[10.0, 20.0, 30.0, 40.0])
    );
    println!(
        "Test 2 (Perfect Negative): {:.4}",
        pearson(&[1.0, 2.0, 3.0, 4.0], &[40.0, 30.0, 20.0, 10.0])
    );

    println!();
    println!("Analysis complete!");
    Ok(())
}
