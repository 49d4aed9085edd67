use assert_cmd::Command;
use predicates::prelude::*;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sf_layouts() -> Command {
    let mut cmd = Command::cargo_bin("sf-layouts").unwrap();
    for var in [
        "SF_INSTANCE_URL",
        "SALESFORCE_INSTANCE_URL",
        "SF_ACCESS_TOKEN",
        "SALESFORCE_ACCESS_TOKEN",
        "SF_API_VERSION",
        "SALESFORCE_API_VERSION",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_missing_sobject_prints_usage() {
    sf_layouts()
        .arg("--target-org")
        .arg("my-org")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--sobject"));
}

#[test]
fn test_help_lists_options() {
    sf_layouts()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--target-org"))
        .stdout(predicate::str::contains("--output-dir"));
}

#[test]
fn test_no_session_fails_before_network() {
    let dir = tempfile::tempdir().unwrap();

    sf_layouts()
        .current_dir(dir.path())
        .args(["--sobject", "Account"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("SF_INSTANCE_URL"));

    assert!(!dir.path().join("layouts").exists());
}

#[test]
fn test_invalid_sobject_is_rejected() {
    let dir = tempfile::tempdir().unwrap();

    sf_layouts()
        .current_dir(dir.path())
        .env("SF_INSTANCE_URL", "http://127.0.0.1:9")
        .env("SF_ACCESS_TOKEN", "token")
        .args(["--sobject", "Account/../limits"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input"));

    assert!(!dir.path().join("layouts").exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_each_written_file_is_reported_once() {
    let server = MockServer::start().await;
    let describe = "/services/data/v50.0/sobjects/Account/describe/layouts";

    Mock::given(method("GET"))
        .and(path(describe))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "recordTypeMappings": [{
                "developerName": "Master",
                "urls": {"layout": format!("{describe}/012000000000000AAA")}
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{describe}/012000000000000AAA")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "detailLayoutSections": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let uri = server.uri();
    let cwd = dir.path().to_path_buf();

    let output = tokio::task::spawn_blocking(move || {
        sf_layouts()
            .current_dir(&cwd)
            .env("SF_INSTANCE_URL", uri)
            .env("SF_ACCESS_TOKEN", "token")
            .env("RUST_LOG", "info")
            .args(["--sobject", "Account"])
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "stderr: {stderr}");
    assert!(stdout.contains("1 layout file(s) written for Account"));
    assert!(!stdout.contains("Excel file has been created"));
    assert_eq!(stderr.matches("Excel file has been created").count(), 1);
    assert!(dir.path().join("layouts/Account/Master.xlsx").is_file());
}
