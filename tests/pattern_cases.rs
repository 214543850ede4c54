use std::fs;
use std::path::{Path, PathBuf};

use format_pattern::change_decimals;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct TestCase {
    pattern: String,
    change_by: i32,
    delta: bool,
    expected: String,
}

#[derive(Debug, Deserialize)]
struct TestCases {
    cases: Vec<TestCase>,
}

#[test]
fn change_decimals_case_table() {
    let toml_path: PathBuf = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("pattern-edit-cases.toml");

    let toml_content = fs::read_to_string(&toml_path)
        .unwrap_or_else(|e| panic!("Failed to read TOML file {}: {}", toml_path.display(), e));

    let test_suite: TestCases = toml::from_str(&toml_content)
        .unwrap_or_else(|e| panic!("Failed to parse TOML file {}: {}", toml_path.display(), e));

    let mut failures = Vec::new();
    for (i, case) in test_suite.cases.iter().enumerate() {
        let result = change_decimals(&case.pattern, case.change_by, case.delta);
        if result != case.expected {
            failures.push(format!(
                "[Case {}] pattern {:?} change_by {} delta {}: expected {:?}, got {:?}",
                i + 1,
                case.pattern,
                case.change_by,
                case.delta,
                case.expected,
                result
            ));
        }
    }

    assert!(
        failures.is_empty(),
        "{} of {} cases failed:\n{}",
        failures.len(),
        test_suite.cases.len(),
        failures.join("\n")
    );
}
