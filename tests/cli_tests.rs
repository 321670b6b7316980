use std::io::Write;
use std::process::{Command, Output, Stdio};

fn inclang(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_inclang"))
        .args(args)
        .output()
        .expect("failed to run inclang")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn valid_program_exits_zero() {
    let output = inclang(&["x=10;print(inc(x));print(inc(15));"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "Output: 11\nOutput: 16\n");
}

#[test]
fn rejected_program_exits_one() {
    let output = inclang(&["print(x);"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("semantic error: variable 'x' is undeclared"));
}

#[test]
fn syntax_error_exits_one() {
    let output = inclang(&["print(inc());"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("syntax error: expected expression (found ')') at line 1"));
}

#[test]
fn no_check_leaves_the_interpreter_to_fail() {
    let output = inclang(&["--no-check", "a=1;print(a);print(b);"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "Output: 1\n");
    assert!(stderr(&output).contains("runtime error: variable 'b' used before assignment"));
}

#[test]
fn demo_continues_past_failures() {
    let output = inclang(&["--demo"]);
    assert_eq!(output.status.code(), Some(0));

    let out = stdout(&output);
    assert!(out.contains("Output: 11\nOutput: 16\n"));
    assert!(out.contains("== undeclared variable"));
    assert!(out.contains("== syntax error"));

    let err = stderr(&output);
    assert!(err.contains("variable 'y' is undeclared"));
    assert!(err.contains("expected expression"));
}

#[test]
fn source_from_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_inclang"))
        .arg("-")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to run inclang");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"x = 5;\nx = 7;\nprint(x);\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "Output: 7\n");
}

#[test]
fn missing_source_is_a_usage_error() {
    let output = inclang(&[]);
    assert_eq!(output.status.code(), Some(2));
}
