use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_repl_reads_piped_lines() {
    let mut cmd = Command::cargo_bin("abacus").unwrap();
    cmd.arg("repl").write_stdin("3+4\nsqrt(81)\n:history\n:quit\n1+1\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("3+4 = 7"))
        .stdout(predicate::str::contains("sqrt(81) = 9"))
        .stdout(predicate::str::contains("Expression"))
        .stdout(predicate::str::contains("1+1 = 2").not());
}

#[test]
fn test_repl_continues_after_error() {
    let mut cmd = Command::cargo_bin("abacus").unwrap();
    cmd.arg("repl").write_stdin("fact(-1)\n2^10\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("2^10 = 1024"))
        .stderr(predicate::str::contains("negative"));
}
