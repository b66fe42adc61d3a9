//! Integration tests driving the tabula binary end to end.

use std::io::Write;
use std::process::{Command, Stdio};

fn run_with_input(args: &[&str], input: &str) -> (String, String, i32) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_tabula"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn tabula");

    child
        .stdin
        .as_mut()
        .expect("stdin not piped")
        .write_all(input.as_bytes())
        .expect("Failed to write stdin");

    let output = child.wait_with_output().expect("Failed to wait for tabula");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

#[test]
fn test_set_and_out_csv() {
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("table.csv");

    let input = format!(
        "SETN A1 3\nSETN B2 4\nSETE C1 A1+B2\nOUT {}\nEXIT\n",
        out_path.display()
    );
    let (_, stderr, code) = run_with_input(
        &["--rows", "2", "--cols", "3", "--format", "csv"],
        &input,
    );

    assert_eq!(code, 0, "stderr: {}", stderr);
    let contents = std::fs::read_to_string(&out_path).unwrap();
    assert_eq!(contents, "\"3\",\"\",\"7\"\n\"\",\"4\",\"\"\n");
}

#[test]
fn test_save_then_render_noninteractively() {
    let dir = tempfile::tempdir().unwrap();
    let tbl_path = dir.path().join("sheet.tbl");
    let out_path = dir.path().join("sheet.html");

    let input = format!("SETN A1 5\nSETE B1 A1*2\nSAVE {}\nEXIT\n", tbl_path.display());
    let (_, stderr, code) = run_with_input(&["--rows", "1", "--cols", "2"], &input);
    assert_eq!(code, 0, "stderr: {}", stderr);

    let (stdout, stderr, code) = run_with_input(
        &[
            "--format",
            "html",
            "-o",
            out_path.to_str().unwrap(),
            tbl_path.to_str().unwrap(),
        ],
        "",
    );
    assert_eq!(code, 0, "stderr: {}", stderr);
    assert!(stdout.contains("Rendered to"));

    let html = std::fs::read_to_string(&out_path).unwrap();
    assert!(html.starts_with("<table border='1' cellpadding='10'>"));
    assert!(html.contains("<td>5</td>"));
    assert!(html.contains("<td>10</td>"));
}

#[test]
fn test_errors_keep_the_loop_running() {
    let (stdout, stderr, code) = run_with_input(
        &["--rows", "2", "--cols", "2"],
        "SETD A1 not-a-date\nFROB\nSETN A1 9\nSHOW\nEXIT\n",
    );
    assert_eq!(code, 0);
    assert!(stderr.contains("invalid date"));
    assert!(stderr.contains("Unknown command: FROB"));
    assert!(stdout.contains("| 9 "));
}

#[test]
fn test_cycle_renders_marker_not_hang() {
    let (stdout, _, code) = run_with_input(
        &["--rows", "2", "--cols", "2"],
        "SETE A1 B1+1\nSETE B1 A1+1\nSHOW\nEXIT\n",
    );
    assert_eq!(code, 0);
    assert!(stdout.contains("#CYCLE!"));
}

#[test]
fn test_unknown_format_is_rejected() {
    let (_, stderr, code) = run_with_input(&["--format", "xlsx"], "");
    assert_eq!(code, 1);
    assert!(stderr.contains("Unknown format"));
}
