use std::fs;
use std::path::Path;

use serde_json::json;
use tempfile::TempDir;
use unsig_classifiers::config::JobConfig;
use unsig_classifiers::error::ClassifyError;
use unsig_classifiers::job::{run_monochromes, run_noliners};

fn write_catalog(dir: &Path, catalog: &serde_json::Value) {
    fs::write(dir.join("unsigs.json"), catalog.to_string()).unwrap();
}

fn sample_catalog() -> serde_json::Value {
    json!({
        "00010": { "index": 10, "num_props": 2, "properties": {
            "colors": ["Red", "Green"], "distributions": ["Normal", "Normal"],
            "multipliers": ["0.5", "0.5"], "rotations": ["0", "0"]
        }},
        "3": { "index": 3, "num_props": 4, "properties": {
            "colors": ["Red", "Green", "Red", "Green"],
            "distributions": ["CDF", "CDF", "CDF", "CDF"],
            "multipliers": ["1", "1", "2", "2"], "rotations": ["90", "90", "0", "0"]
        }},
        "7": { "index": 7, "num_props": 2, "properties": {
            "colors": ["Blue", "Blue"], "distributions": ["Normal", "CDF"],
            "multipliers": ["0.25", "0.25"], "rotations": ["0", "180"]
        }},
        "1": { "index": 1, "num_props": 2, "properties": {
            "colors": ["Red", "Red"], "distributions": ["Normal", "Normal"],
            "multipliers": ["0.6", "0.6"], "rotations": ["0", "90"]
        }},
        "2": { "index": 2 }
    })
}

fn config(dir: &TempDir) -> JobConfig {
    JobConfig::new(dir.path()).without_inspection()
}

#[test]
fn monochrome_job_writes_sorted_ids() {
    let dir = TempDir::new().unwrap();
    write_catalog(dir.path(), &sample_catalog());

    let summary = run_monochromes(&config(&dir)).unwrap();

    assert_eq!(summary.scanned, 5);
    assert_eq!(summary.matched, 2);
    assert_eq!(summary.output, dir.path().join("monochromes.json"));
    assert_eq!(fs::read_to_string(&summary.output).unwrap(), "[3, 10]");
}

#[test]
fn noliner_job_keeps_catalog_order() {
    let dir = TempDir::new().unwrap();
    write_catalog(dir.path(), &sample_catalog());

    let summary = run_noliners(&config(&dir)).unwrap();

    assert_eq!(summary.matched, 2);
    assert_eq!(
        fs::read_to_string(dir.path().join("noliners.json")).unwrap(),
        "[10, 7]"
    );
}

#[test]
fn reruns_are_byte_identical() {
    let dir = TempDir::new().unwrap();
    write_catalog(dir.path(), &sample_catalog());
    let config = config(&dir);

    run_monochromes(&config).unwrap();
    run_noliners(&config).unwrap();
    let mono = fs::read(dir.path().join("monochromes.json")).unwrap();
    let noliners = fs::read(dir.path().join("noliners.json")).unwrap();

    run_monochromes(&config).unwrap();
    run_noliners(&config).unwrap();
    assert_eq!(fs::read(dir.path().join("monochromes.json")).unwrap(), mono);
    assert_eq!(fs::read(dir.path().join("noliners.json")).unwrap(), noliners);
}

#[test]
fn inspection_does_not_change_output() {
    let dir = TempDir::new().unwrap();
    let mut catalog = sample_catalog();
    catalog["27754"] = json!({ "properties": {
        "colors": ["Green"], "distributions": ["Normal"],
        "multipliers": ["1"], "rotations": ["0"]
    }});
    write_catalog(dir.path(), &catalog);

    let summary = run_monochromes(&JobConfig::new(dir.path())).unwrap();
    assert_eq!(fs::read_to_string(summary.output).unwrap(), "[3, 10, 27754]");
}

#[test]
fn missing_catalog_fails_without_output() {
    let dir = TempDir::new().unwrap();

    let err = run_monochromes(&config(&dir)).unwrap_err();
    assert!(format!("{err:#}").contains("unsigs.json"));
    assert!(!dir.path().join("monochromes.json").exists());

    assert!(run_noliners(&config(&dir)).is_err());
    assert!(!dir.path().join("noliners.json").exists());
}

#[test]
fn invalid_catalog_json_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("unsigs.json"), "{ not json").unwrap();

    assert!(run_monochromes(&config(&dir)).is_err());
    assert!(!dir.path().join("monochromes.json").exists());
}

#[test]
fn malformed_multiplier_aborts_noliner_job() {
    let dir = TempDir::new().unwrap();
    let mut catalog = sample_catalog();
    catalog["99"] = json!({ "properties": {
        "colors": ["Red"], "distributions": ["Normal"],
        "multipliers": ["heavy"], "rotations": ["0"]
    }});
    write_catalog(dir.path(), &catalog);

    let err = run_noliners(&config(&dir)).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ClassifyError>(),
        Some(ClassifyError::MalformedMultiplier { .. })
    ));
    assert!(!dir.path().join("noliners.json").exists());

    // The monochrome pass never parses multipliers.
    let summary = run_monochromes(&config(&dir)).unwrap();
    assert_eq!(fs::read_to_string(summary.output).unwrap(), "[3, 10, 99]");
}
