//! End-to-end tests for the `yieldrank` binary.

use std::io::Write;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

const AS_OF: &str = "2025-01-02";

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn yieldrank() -> Command {
    let mut cmd = Command::cargo_bin("yieldrank").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("YIELDRANK_TABLES")
        .args(["--as-of", AS_OF]);
    cmd
}

fn temp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn atytw_treasury_minimal() {
    yieldrank()
        .args(["--format", "minimal", "atytw"])
        .arg("--bond")
        .arg(fixture("treasury.json"))
        .arg("--profile")
        .arg(fixture("profile_ca_niit.json"))
        .assert()
        .success()
        .stdout("3.249\n");
}

#[test]
fn atytw_json_carries_explanation() {
    let output = yieldrank()
        .args(["--format", "json", "atytw"])
        .arg("--bond")
        .arg(fixture("treasury.json"))
        .arg("--profile")
        .arg(fixture("profile_ca_niit.json"))
        .args(["--taxable-rate", "0.37"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["cusip"], "91282CKQ3");
    assert_eq!(json["as_of"], AS_OF);
    assert_eq!(json["tax_breakdown"]["state"], 0.0);
    assert!(json.get("oid_adjustment").is_none());
    assert!(json["tax_equivalent_yield"].as_f64().unwrap() > 5.0);
    let explanation: Vec<&str> = json["explanation"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|v| v.as_str())
        .collect();
    assert_eq!(explanation.last(), Some(&"After-tax YTW: 3.249%"));
}

#[test]
fn atytw_table_shows_breakdown() {
    yieldrank()
        .arg("atytw")
        .arg("--bond")
        .arg(fixture("treasury.json"))
        .arg("--profile")
        .arg(fixture("profile_ca_niit.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Effective tax rate"))
        .stdout(predicate::str::contains("27.80%"))
        .stdout(predicate::str::contains("Treasury: Federal taxable, state/local exempt"));
}

#[test]
fn compare_reports_advantage() {
    let candidates = std::fs::read_to_string(fixture("candidates.json")).unwrap();
    let candidates: serde_json::Value = serde_json::from_str(&candidates).unwrap();
    let muni = temp_file(&candidates[0]["bond"].to_string());
    let corp = temp_file(&candidates[1]["bond"].to_string());

    yieldrank()
        .args(["--format", "minimal", "compare"])
        .arg("--left")
        .arg(muni.path())
        .arg("--right")
        .arg(corp.path())
        .arg("--profile")
        .arg(fixture("profile_ca.json"))
        .assert()
        .success()
        .stdout("46.5\n");

    yieldrank()
        .arg("compare")
        .arg("--left")
        .arg(corp.path())
        .arg("--right")
        .arg(muni.path())
        .arg("--profile")
        .arg(fixture("profile_ca.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("13063DAA6 yields 46.5 bps more after tax"));
}

#[test]
fn rank_orders_by_after_tax_yield() {
    yieldrank()
        .args(["--format", "minimal", "rank"])
        .arg("--candidates")
        .arg(fixture("candidates.json"))
        .arg("--profile")
        .arg(fixture("profile_ca.json"))
        .assert()
        .success()
        .stdout("1 13063DAA6 3.400\n2 46625HJE1 2.935\n3 91282CLB2 2.924\n4 64966QXJ4 2.721\n");
}

#[test]
fn rank_applies_screening_and_top() {
    yieldrank()
        .args(["--format", "minimal", "rank"])
        .arg("--candidates")
        .arg(fixture("candidates.json"))
        .arg("--profile")
        .arg(fixture("profile_ca.json"))
        .args(["--rating-floor", "A", "--top", "2"])
        .assert()
        .success()
        .stdout("1 13063DAA6 3.400\n2 46625HJE1 2.935\n");

    yieldrank()
        .args(["--format", "minimal", "rank"])
        .arg("--candidates")
        .arg(fixture("candidates.json"))
        .arg("--profile")
        .arg(fixture("profile_ca.json"))
        .args(["--max-duration", "5.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("13063DAA6").not())
        .stdout(predicate::str::contains("1 46625HJE1"));
}

#[test]
fn rank_json_has_contiguous_ranks() {
    let output = yieldrank()
        .args(["--format", "json", "--parallel", "rank"])
        .arg("--candidates")
        .arg(fixture("candidates.json"))
        .arg("--profile")
        .arg(fixture("profile_ca.json"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let ranked: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    let ranks: Vec<u64> = ranked.iter().filter_map(|b| b["rank"].as_u64()).collect();
    assert_eq!(ranks, vec![1, 2, 3, 4]);
    assert!(ranked[0]["liquidity_factors"].as_array().is_some_and(|f| !f.is_empty()));
}

#[test]
fn rank_csv_has_header() {
    yieldrank()
        .args(["--format", "csv", "rank"])
        .arg("--candidates")
        .arg(fixture("candidates.json"))
        .arg("--profile")
        .arg(fixture("profile_ca.json"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "rank,cusip,issuer,bond_type,rating,pre_tax_ytw,atytw,stability,liquidity,duration",
        ));
}

#[test]
fn explain_screened_out_bond_is_unranked() {
    yieldrank()
        .args(["--format", "minimal", "explain"])
        .arg("--candidates")
        .arg(fixture("candidates.json"))
        .arg("--profile")
        .arg(fixture("profile_ca.json"))
        .args(["--rating-floor", "A", "--cusip", "64966QXJ4"])
        .assert()
        .success()
        .stdout("Unranked: Buffalo City 3.5% 2032\n");
}

#[test]
fn explain_lists_bullets_and_factors() {
    yieldrank()
        .arg("explain")
        .arg("--candidates")
        .arg(fixture("candidates.json"))
        .arg("--profile")
        .arg(fixture("profile_ca.json"))
        .args(["--cusip", "13063DAA6", "--factors"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rank #1: Santa Clara County 4% 2031"))
        .stdout(predicate::str::contains("After-tax yield 3.40% (pre-tax 3.40%)"))
        .stdout(predicate::str::contains("Last traded 3d ago"))
        .stdout(predicate::str::contains("Stability factors"));
}

#[test]
fn explain_unknown_cusip_fails() {
    yieldrank()
        .arg("explain")
        .arg("--candidates")
        .arg(fixture("candidates.json"))
        .arg("--profile")
        .arg(fixture("profile_ca.json"))
        .args(["--cusip", "000000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No candidate with CUSIP 000000000"));
}

#[test]
fn tables_validate_accepts_and_rejects() {
    let good = temp_file("unknown_state = 0.65\n\n[states]\nCA = 0.9\n");
    yieldrank()
        .args(["tables", "validate"])
        .arg(good.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("is valid"));

    let bad = temp_file("[states]\nCA = 1.5\n");
    yieldrank()
        .args(["tables", "validate"])
        .arg(bad.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Score tables"));
}

#[test]
fn tables_override_flows_into_show() {
    let overrides = temp_file("[states]\nCA = 0.42\n");
    yieldrank()
        .arg("--tables")
        .arg(overrides.path())
        .args(["--format", "minimal", "tables", "show", "--table", "states"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CA 0.42\n"));
}

#[test]
fn tables_export_is_toml() {
    yieldrank()
        .args(["tables", "export"])
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown_sector"))
        .stdout(predicate::str::contains("[ratings]"));
}

#[test]
fn rejects_bad_date_and_rating() {
    Command::cargo_bin("yieldrank")
        .unwrap()
        .args(["--as-of", "01/02/2025", "tables", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));

    yieldrank()
        .arg("rank")
        .arg("--candidates")
        .arg(fixture("candidates.json"))
        .arg("--profile")
        .arg(fixture("profile_ca.json"))
        .args(["--rating-floor", "excellent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid rating"));
}
