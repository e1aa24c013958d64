use std::{
    io::Write,
    process::{Command, Output, Stdio},
};

fn plank(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_plank")).args(args)
                                             .stdin(Stdio::null())
                                             .output()
                                             .expect("failed to start plank")
}

fn plank_with_stdin(source: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_plank")).stdin(Stdio::piped())
                                                             .stdout(Stdio::piped())
                                                             .spawn()
                                                             .expect("failed to start plank");
    child.stdin
         .take()
         .expect("stdin should be piped")
         .write_all(source.as_bytes())
         .expect("failed to write the program");
    child.wait_with_output().expect("failed to wait for plank")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("output should be UTF-8")
}

#[test]
fn runs_a_file() {
    let output = plank(&["tests/programs/greeting.pk"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "abab!");
}

#[test]
fn reads_the_program_from_stdin() {
    let output = plank_with_stdin("set x 5\nprint x * \"ab\"\n");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "ababababab");
}

#[test]
fn more_than_one_file_is_refused() {
    let output = plank(&["tests/programs/greeting.pk", "tests/programs/counter.pk"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "TOO MANY FILENAMES\n");
}

#[test]
fn unreadable_files_are_reported() {
    let output = plank(&["tests/programs/no_such_program.pk"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "COULD NOT OPEN tests/programs/no_such_program.pk\n");
}

#[test]
fn arguments_starting_with_a_hyphen_are_file_names() {
    let output = plank(&["-h"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "COULD NOT OPEN -h\n");
}

#[test]
fn runtime_errors_exit_with_failure() {
    let output = plank(&["tests/programs/undefined_symbol.pk"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "aRUNTIME ERROR Symbol missing not defined\n");

    let output = plank_with_stdin("print \"a\" * 9000000000000000000");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "RUNTIME ERROR Repeated string is too large\n");
}

#[test]
fn rejected_programs_exit_successfully() {
    let output = plank(&["tests/programs/diagnostics.pk"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output),
               "1: Missing expression after operator\n2: Missing ID after set\n5: Missing END \
                after statement list\n");
}
