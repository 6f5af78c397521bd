//! End-to-end: load a table from disk, evaluate pairs, render the report.

use std::io::Write;
use std::path::PathBuf;

use statline::data::loader::load_file;
use statline::report::{PairSpec, default_pairs, evaluate_pairs};

fn write_fixture(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
fn csv_report_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(
        &dir,
        "players.csv",
        "PLAYER,AGE,MPG,PPG\n\
         A. Guard,22,30.0,15.0\n\
         B. Wing,26,26.0,13.0\n\
         C. Big,30,22.0,11.0\n\
         D. Hurt,34,DNP,\n\
         E. Vet,34,18.0,9.0\n",
    );

    let dataset = load_file(&path).unwrap();
    assert_eq!(dataset.len(), 5);
    assert_eq!(dataset.column_names, vec!["AGE", "MPG", "PPG"]);

    let pairs = vec![
        PairSpec::new("AGE", "MPG", "Age and MPG"),
        PairSpec::new("MPG", "PPG", "MPG and PPG"),
        PairSpec::new("AGE", "3P%", "Age and 3P%"),
    ];
    let reports = evaluate_pairs(&dataset, &pairs);

    // Minutes fall off linearly with age in the fixture; the DNP row drops out.
    assert_eq!(reports[0].samples, 4);
    assert_eq!(reports[0].render(), "Correlation between Age and MPG: -1.0000");

    assert_eq!(reports[1].render(), "Correlation between MPG and PPG: 1.0000");

    // No 3P% column anywhere: empty extraction, calculator never consulted.
    assert_eq!(reports[2].samples, 0);
    assert_eq!(
        reports[2].render(),
        "Not enough data for Age and 3P% correlation."
    );
}

#[test]
fn default_pairs_against_sparse_table_degrade_gracefully() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(
        &dir,
        "players.csv",
        "PLAYER,AGE,MPG\nA. Guard,22,30.0\nB. Wing,26,26.0\n",
    );

    let dataset = load_file(&path).unwrap();
    let reports = evaluate_pairs(&dataset, &default_pairs());

    assert_eq!(reports.len(), 3);
    // Only the Age/MPG pair has data; the shooting pairs report the fallback.
    assert!(reports[0].coefficient.is_none());
    assert!(reports[1].coefficient.is_some());
    assert!(reports[2].coefficient.is_none());
}

#[test]
fn json_table_feeds_the_same_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(
        &dir,
        "players.json",
        r#"[
            {"PLAYER": "A. Guard", "FTA": 2.0, "FT%": 0.90},
            {"PLAYER": "B. Wing",  "FTA": 5.0, "FT%": 0.80},
            {"PLAYER": "C. Big",   "FTA": 8.0, "FT%": 0.70},
            {"PLAYER": "D. Hurt",  "FTA": null, "FT%": 0.75}
        ]"#,
    );

    let dataset = load_file(&path).unwrap();
    let reports = evaluate_pairs(
        &dataset,
        &[PairSpec::new("FTA", "FT%", "FTA and FT%")],
    );

    assert_eq!(reports[0].samples, 3);
    assert_eq!(
        reports[0].render(),
        "Correlation between FTA and FT%: -1.0000"
    );
}
