/// End-to-end tests of the seqcheck binary
use assert_cmd::assert::OutputAssertExt;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::{body_string_contains, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;
use common::*;

#[test]
fn test_help_lists_commands() {
    seqcheck_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("classify"))
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("submit"));
}

#[test]
fn test_classify_stdin_json() {
    seqcheck_cmd()
        .args(["classify", "--format", "json"])
        .write_stdin(RNA_SCENARIO)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"sequence_type\": \"rna\""))
        .stdout(predicate::str::contains("\"record_count\": 1"));
}

#[test]
fn test_classify_file_csv() {
    let temp_dir = TempDir::new().unwrap();
    let path = create_test_fasta(temp_dir.path(), "mixed.fasta", &create_mixed_fasta()).unwrap();

    seqcheck_cmd()
        .args(["classify", "--format", "csv"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("id,length,type"))
        .stdout(predicate::str::contains("\"dna_record\",18,dna"))
        .stdout(predicate::str::contains("\"protein_record\",25,protein"));
}

#[test]
fn test_classify_threshold_override() {
    seqcheck_cmd()
        .args(["classify", "--format", "json", "--threshold", "0.99"])
        .write_stdin("ACGTACGTACGTACGTACG-")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"sequence_type\": \"unknown\""));
}

#[test]
fn test_classify_rejects_bad_threshold() {
    seqcheck_cmd()
        .args(["classify", "--threshold", "1.5"])
        .write_stdin(DNA_SCENARIO)
        .assert()
        .code(2);
}

#[test]
fn test_classify_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    seqcheck_cmd()
        .arg("classify")
        .arg(temp_dir.path().join("missing.fasta"))
        .assert()
        .code(3);
}

#[test]
fn test_validate_accepts_example() {
    seqcheck_cmd()
        .args(["validate", "-V", "length_cluster", "--format", "json"])
        .write_stdin(create_dna_fasta(3))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"valid\": true"))
        .stdout(predicate::str::contains("\"sequence_type\": \"dna\""));
}

#[test]
fn test_validate_mixed_input_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = create_test_fasta(temp_dir.path(), "mixed.fasta", &create_mixed_fasta()).unwrap();

    seqcheck_cmd()
        .args(["validate", "-V", "length_cluster", "--format", "json"])
        .arg(&path)
        .assert()
        .code(6)
        .stdout(predicate::str::contains("\"valid\": false"))
        .stdout(predicate::str::contains("must be either DNA or protein"));
}

#[test]
fn test_validate_requires_method() {
    seqcheck_cmd()
        .args(["validate", "--format", "text"])
        .write_stdin(PROTEIN_SCENARIO)
        .assert()
        .code(6);
}

#[test]
fn test_example_output() {
    seqcheck_cmd()
        .args(["example", "dna"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(">Insulin\nATGGCTCTCTGG"));

    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("protein.fasta");
    seqcheck_cmd()
        .args(["example", "protein", "--output"])
        .arg(&path)
        .assert()
        .success();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with(">Methylmalonyl-CoA carboxyltransferase 12S"));
}

#[test]
fn test_example_round_trips_through_validate() {
    let example = seqcheck_cmd().args(["example", "protein"]).output().unwrap();
    assert!(example.status.success());

    seqcheck_cmd()
        .args(["validate", "-V", "duplication", "--format", "json"])
        .write_stdin(example.stdout)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"sequence_type\": \"protein\""));
}

#[test]
fn test_config_init_and_show() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("seqcheck.toml");

    seqcheck_cmd()
        .args(["config", "init"])
        .arg(&path)
        .assert()
        .success();
    assert!(path.exists());

    // refuses to overwrite without --force
    seqcheck_cmd()
        .args(["config", "init"])
        .arg(&path)
        .assert()
        .code(2);

    std::fs::write(&path, "[classifier]\nthreshold = 0.75\n").unwrap();
    seqcheck_cmd()
        .arg("--config")
        .arg(&path)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("threshold = 0.75"))
        .stdout(predicate::str::contains("min_length = 5"));
}

#[test]
fn test_invalid_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bad.toml");
    std::fs::write(&path, "[classifier]\nthreshold = 0.0\n").unwrap();

    seqcheck_cmd()
        .env("SEQCHECK_CONFIG", &path)
        .args(["config", "show"])
        .assert()
        .code(2);
}

#[test]
fn test_submit_without_url() {
    seqcheck_cmd()
        .args(["submit", "-V", "length_cluster"])
        .write_stdin(DNA_SCENARIO)
        .assert()
        .code(2);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_submit_prints_results() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("validations%5B%5D=length_cluster"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<div>results</div>"))
        .expect(1)
        .mount(&server)
        .await;

    let url = server.uri();
    let output = tokio::task::spawn_blocking(move || {
        seqcheck_cmd()
            .args(["submit", "--url", url.as_str(), "-V", "length_cluster"])
            .write_stdin(DNA_SCENARIO)
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    output
        .assert()
        .success()
        .stdout(predicate::str::contains("<div>results</div>"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_submit_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<p>failed</p>"))
        .mount(&server)
        .await;

    let url = server.uri();
    let output = tokio::task::spawn_blocking(move || {
        seqcheck_cmd()
            .args(["submit", "--url", url.as_str(), "-V", "length_cluster"])
            .write_stdin(DNA_SCENARIO)
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    output.assert().code(5).stdout(predicate::str::contains("<p>failed</p>"));
}

#[test]
fn test_submit_invalid_input_not_sent() {
    seqcheck_cmd()
        .args(["submit", "--url", "http://127.0.0.1:9/", "-V", "length_cluster"])
        .write_stdin(create_mixed_fasta())
        .assert()
        .code(6);
}

#[test]
fn test_non_utf8_input_is_parse_error_for_every_command() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("binary.fasta");
    std::fs::write(&path, b">seq\n\xff\xfeACGT\n").unwrap();

    seqcheck_cmd().arg("classify").arg(&path).assert().code(4);

    seqcheck_cmd()
        .args(["validate", "-V", "length_cluster"])
        .arg(&path)
        .assert()
        .code(4);

    seqcheck_cmd()
        .args(["validate", "-V", "length_cluster"])
        .write_stdin(b"\xff\xfeACGT".to_vec())
        .assert()
        .code(4);
}
