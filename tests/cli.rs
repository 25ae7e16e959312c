//! Runs the binary end to end over stdin.

use std::{
    io::Write,
    process::{Command, Output, Stdio},
};

fn run(stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_sched_sim"))
        .env_remove("SCHED_SIM_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn sched_sim");
    child
        .stdin
        .take()
        .expect("piped stdin")
        .write_all(stdin.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait for sched_sim")
}

#[test]
fn prints_trace_for_valid_input() {
    let output = run("2\nFIFO\nA:1:3:0\nB:2:2:1\n");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("1:A:B(2),:\n"));
    assert!(stdout.ends_with("Average Response Time: 3.50\n"));
}

#[test]
fn unknown_policy_reports_and_exits_cleanly() {
    let output = run("1\nLOTTERY\nA:1:1:0\n");
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error: unknown POLICY"));
}

#[test]
fn malformed_record_fails_with_status_one() {
    let output = run("1\nRR\nA:1:1\n");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Expecting token arrival time"));
}

#[test]
fn extra_field_fails_with_status_one() {
    let output = run("1\nSJF\nA:1:1:0:7\n");
    assert_eq!(output.status.code(), Some(1));
}
