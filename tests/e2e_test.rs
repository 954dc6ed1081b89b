/// End-to-end tests for the CLI
///
/// Runs the compiled binary against a one-shot local HTTP stub standing in
/// for the assessment service.
use assert_cmd::cargo::cargo_bin_cmd;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use predicates::prelude::*;
use serde_json::{json, Value};
use std::fs;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::path::Path;
use std::thread::{self, JoinHandle};
use tempfile::TempDir;

/// Serves exactly one request and hands back the request body
fn stub_service(status: u16, body: Value) -> (String, JoinHandle<Value>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());

        let mut content_length = 0usize;
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).unwrap();
            if line == "\r\n" || line.is_empty() {
                break;
            }
            if let Some((name, value)) = line.split_once(':') {
                if name.eq_ignore_ascii_case("content-length") {
                    content_length = value.trim().parse().unwrap();
                }
            }
        }
        let mut request_body = vec![0u8; content_length];
        reader.read_exact(&mut request_body).unwrap();

        let payload = body.to_string();
        let mut stream = stream;
        write!(
            stream,
            "HTTP/1.1 {} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            payload.len(),
            payload
        )
        .unwrap();
        stream.flush().unwrap();

        serde_json::from_slice(&request_body).unwrap()
    });

    (url, handle)
}

fn write_state(dir: &Path) -> std::path::PathBuf {
    let state = json!({
        "version": 4,
        "resources": [
            {"type": "aws_instance", "name": "web", "provider": "aws",
             "instances": [{"attributes": {"id": "i-0abc", "instance_type": "t3.micro"}}]},
            {"type": "aws_db_instance", "name": "main", "provider": "aws",
             "instances": [{"attributes": {"engine": "postgres", "storage_encrypted": true}}]}
        ]
    });
    let path = dir.join("terraform.tfstate.b64");
    fs::write(&path, format!("{}\n", BASE64.encode(state.to_string()))).unwrap();
    path
}

fn assessment() -> Value {
    json!({
        "id": "asm-e2e",
        "status": "completed",
        "created_at": "2025-04-01T00:00:00Z",
        "assessment": {"nist_800_53": {
            "version": "rev5",
            "summary": {"total_controls": 2, "satisfied": 1, "not_satisfied": 1},
            "controls": [
                {"control_id": "CM-8", "title": "System Component Inventory", "status": "satisfied"},
                {"control_id": "SC-28", "title": "Protection at Rest", "status": "not-satisfied",
                 "findings": ["EBS volume unencrypted"]}
            ]
        }},
        "artifacts": [{"filename": "diagram", "diagram": "graph LR; web-->db"}]
    })
}

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("tfstate-ssp")
            .arg("--help")
            .assert()
            .code(0)
            .stdout(predicate::str::contains("--state"));
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("tfstate-ssp").arg("--version").assert().code(0);
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("tfstate-ssp")
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    /// Exit code 2: --state is required
    #[test]
    fn test_exit_code_missing_state_argument() {
        cargo_bin_cmd!("tfstate-ssp").assert().code(2);
    }

    /// Exit code 2: Invalid format value
    #[test]
    fn test_exit_code_invalid_format() {
        cargo_bin_cmd!("tfstate-ssp")
            .args(["--state", "state.b64", "--format", "pdf"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Invalid format"));
    }

    /// Exit code 3: customer key not set
    #[test]
    fn test_exit_code_missing_api_key() {
        let dir = TempDir::new().unwrap();
        let state = write_state(dir.path());

        cargo_bin_cmd!("tfstate-ssp")
            .current_dir(dir.path())
            .env_remove("NABLA_CUSTOMER_KEY")
            .args(["--state", state.to_str().unwrap()])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("NABLA_CUSTOMER_KEY environment variable not set"));
    }

    /// Exit code 3: state file does not exist
    #[test]
    fn test_exit_code_missing_state_file() {
        let dir = TempDir::new().unwrap();

        cargo_bin_cmd!("tfstate-ssp")
            .current_dir(dir.path())
            .env("NABLA_CUSTOMER_KEY", "test-key")
            .args(["--state", "/nonexistent/terraform.tfstate.b64"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Terraform state file not found"));
    }
}

#[test]
fn test_e2e_csv_report() {
    let dir = TempDir::new().unwrap();
    let state = write_state(dir.path());
    let output_dir = dir.path().join("reports");
    let (url, handle) = stub_service(200, assessment());

    cargo_bin_cmd!("tfstate-ssp")
        .current_dir(dir.path())
        .env("NABLA_CUSTOMER_KEY", "test-key")
        .env_remove("NABLA_API_URL")
        .args([
            "--state",
            state.to_str().unwrap(),
            "--output-dir",
            output_dir.to_str().unwrap(),
            "--format",
            "csv",
            "--api-url",
            &url,
        ])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Compliance Assessment Summary"))
        .stdout(predicate::str::contains("asm-e2e"))
        .stdout(predicate::str::contains("SC-28"));

    let request = handle.join().unwrap();
    assert_eq!(request["format"], "json");
    assert_eq!(request["include_diagram"], false);
    assert_eq!(request["name"], "compliance-assessment");

    for file in ["controls.csv", "findings.csv", "assets.csv", "summary.csv"] {
        assert!(output_dir.join(file).is_file(), "missing {}", file);
    }
    assert!(!output_dir.join("diagram.mmd").exists());

    let assets = fs::read_to_string(output_dir.join("assets.csv")).unwrap();
    assert!(assets.contains("EC2 Instance"));
    assert!(assets.contains("RDS Database"));
}

#[test]
fn test_e2e_json_report_with_diagram() {
    let dir = TempDir::new().unwrap();
    let state = write_state(dir.path());
    let output_dir = dir.path().join("ssp");
    let (url, handle) = stub_service(200, assessment());

    cargo_bin_cmd!("tfstate-ssp")
        .current_dir(dir.path())
        .env("NABLA_CUSTOMER_KEY", "test-key")
        .env("NABLA_API_URL", &url)
        .args([
            "--state",
            state.to_str().unwrap(),
            "--output-dir",
            output_dir.to_str().unwrap(),
            "--name",
            "prod-ssp",
        ])
        .assert()
        .code(0);

    let request = handle.join().unwrap();
    assert_eq!(request["format"], "json");
    assert_eq!(request["include_diagram"], true);
    assert_eq!(request["name"], "prod-ssp");

    let ssp: Value =
        serde_json::from_str(&fs::read_to_string(output_dir.join("fedramp-ssp.json")).unwrap())
            .unwrap();
    assert_eq!(
        ssp["system_security_plan"]["asset_inventory"]["total_assets"],
        2
    );
    assert!(output_dir.join("asset-inventory.json").is_file());
    assert!(output_dir.join("raw-assessment.json").is_file());
    assert_eq!(
        fs::read_to_string(output_dir.join("diagram.mmd")).unwrap(),
        "graph LR; web-->db"
    );
}

#[test]
fn test_e2e_service_error_exit_code() {
    let dir = TempDir::new().unwrap();
    let state = write_state(dir.path());
    let output_dir = dir.path().join("out");
    let (url, handle) = stub_service(401, json!({"error": "invalid customer key"}));

    cargo_bin_cmd!("tfstate-ssp")
        .current_dir(dir.path())
        .env("NABLA_CUSTOMER_KEY", "wrong-key")
        .args([
            "--state",
            state.to_str().unwrap(),
            "--output-dir",
            output_dir.to_str().unwrap(),
            "--api-url",
            &url,
        ])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("API Error (401)"))
        .stderr(predicate::str::contains("invalid customer key"));

    handle.join().unwrap();
    assert!(!output_dir.join("fedramp-ssp.json").exists());
}
