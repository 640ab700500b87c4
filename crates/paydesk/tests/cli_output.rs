//! Integration tests for CLI output behavior
//!
//! The default behavior is quiet (errors only). Use -v/--verbose to enable logs.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::process::{Command, Output};
use std::thread::{self, JoinHandle};

use tempfile::TempDir;

/// Serve a single HTTP response on a local port and return the request line.
fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind test server");
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("Failed to accept connection");
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            let n = stream.read(&mut buf).expect("Failed to read request");
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
            if request_complete(&request) {
                break;
            }
        }

        let response = format!(
            "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        stream
            .write_all(response.as_bytes())
            .expect("Failed to write response");

        String::from_utf8_lossy(&request)
            .lines()
            .next()
            .unwrap_or_default()
            .to_string()
    });

    (base_url, handle)
}

/// True once the headers and the `content-length` body have arrived.
fn request_complete(request: &[u8]) -> bool {
    let Some(header_end) = request.windows(4).position(|w| w == b"\r\n\r\n") else {
        return false;
    };
    let headers = String::from_utf8_lossy(&request[..header_end]).to_lowercase();
    let content_length = headers
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|value| value.trim().parse::<usize>().ok())
        .unwrap_or(0);
    request.len() >= header_end + 4 + content_length
}

/// Run paydesk with an isolated HOME and working directory so no local
/// config files are picked up.
fn run_paydesk(args: &[&str]) -> Output {
    let home = TempDir::new().expect("Failed to create temp dir");

    Command::new(env!("CARGO_BIN_EXE_paydesk"))
        .args(args)
        .env("HOME", home.path())
        .env_remove("PAYDESK_BASE_URL")
        .env_remove("RUST_LOG")
        .current_dir(home.path())
        .output()
        .expect("Failed to execute paydesk")
}

fn assert_no_json_logs(stdout: &str) {
    assert!(
        !stdout.contains(r#""event":"#),
        "stdout should not contain JSON logs, got: {}",
        stdout
    );
}

#[test]
fn test_help_lists_subcommands() {
    let output = run_paydesk(&["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("list"));
    assert!(stdout.contains("create"));
    assert!(stdout.contains("toggle"));
}

#[test]
fn test_list_prints_table_and_is_pipeable() {
    let (base_url, server) = serve_once(
        "200 OK",
        r#"[{"id":"1","name":"Acme","isPaid":false},{"id":2,"name":"Globex","isPaid":true}]"#,
    );

    let output = run_paydesk(&["--base-url", &base_url, "list"]);
    let request_line = server.join().unwrap();

    assert!(
        output.status.success(),
        "paydesk list failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(request_line.starts_with("GET /companies "));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_no_json_logs(&stdout);
    let acme = stdout.lines().position(|l| l.contains("Acme")).unwrap();
    let globex = stdout.lines().position(|l| l.contains("Globex")).unwrap();
    assert!(acme < globex);
    assert!(stdout.contains("Unpaid"));

    // Quiet by default: no INFO logs on stderr
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        !stderr.contains(r#""level":"INFO""#),
        "Default mode should not emit INFO logs, got: {}",
        stderr
    );
}

#[test]
fn test_list_json_output_parses() {
    let (base_url, server) = serve_once("200 OK", r#"[{"id":"1","name":"Acme","isPaid":true}]"#);

    let output = run_paydesk(&["list", "--json", "--base-url", &base_url]);
    server.join().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("stdout should be valid JSON");
    assert_eq!(parsed[0]["name"], "Acme");
    assert_eq!(parsed[0]["isPaid"], true);
}

#[test]
fn test_list_empty_prints_placeholder() {
    let (base_url, server) = serve_once("200 OK", "[]");

    let output = run_paydesk(&["--base-url", &base_url, "list"]);
    server.join().unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("No companies found."));
}

#[test]
fn test_list_server_error_exits_non_zero_with_message() {
    let (base_url, server) = serve_once("500 Internal Server Error", r#"{"error":"boom"}"#);

    let output = run_paydesk(&["--base-url", &base_url, "list"]);
    server.join().unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Failed to load companies. Please try again."),
        "stderr: {}",
        stderr
    );
    assert_no_json_logs(&String::from_utf8_lossy(&output.stdout));
}

#[test]
fn test_list_unreachable_server_fails() {
    // Grab a free port, then close it so nothing is listening there.
    let port = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let base_url = format!("http://127.0.0.1:{}", port);

    let output = run_paydesk(&["--base-url", &base_url, "list"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to load companies"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_invalid_base_url_is_rejected() {
    let output = run_paydesk(&["--base-url", "not a url", "list"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid API base URL"));
}

#[test]
fn test_create_blank_name_is_rejected_before_request() {
    // Nothing listens here; a request would fail with a different message.
    let output = run_paydesk(&["--base-url", "http://127.0.0.1:9", "create", "   "]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Company name cannot be empty"));
}

#[test]
fn test_create_prints_new_id() {
    let (base_url, server) = serve_once("201 Created", r#"{"id":"42","name":"Acme","isPaid":false}"#);

    let output = run_paydesk(&["--base-url", &base_url, "create", "Acme"]);
    let request_line = server.join().unwrap();

    assert!(output.status.success());
    assert!(request_line.starts_with("POST /companies "));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Company created successfully!"));
    assert!(stdout.contains("42"));
}
