use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

fn cmd() -> Command {
    let mut cmd = cargo_bin_cmd!("pancheck");
    cmd.env_remove("PANCHECK_DEBUG");
    cmd
}

#[test]
fn exact_token_prints_ok() {
    cmd().arg("panca").assert().code(0).stdout("OK\n");
}

#[test]
fn same_length_mismatch_exits_2() {
    cmd().arg("panda").assert().code(2).stdout("NOPE\n");
}

#[test]
fn short_input_exits_1() {
    cmd().arg("pan").assert().code(1).stdout("NOPE\n");
}

#[test]
fn no_argument_is_empty_input() {
    cmd().assert().code(1).stdout("NOPE\n");
}

#[test]
fn long_input_exits_1() {
    cmd().arg("pancakes").assert().code(1).stdout("NOPE\n");
}

#[test]
fn case_is_significant() {
    cmd().arg("PANCA").assert().code(2).stdout("NOPE\n");
}

#[test]
fn extra_arguments_are_ignored() {
    cmd().args(["panca", "panda"]).assert().code(0).stdout("OK\n");
    cmd().args(["panda", "panca"]).assert().code(2).stdout("NOPE\n");
}

#[test]
fn separator_is_plain_input() {
    cmd().args(["--", "panca"]).assert().code(1).stdout("NOPE\n");
    cmd().arg("--").assert().code(1).stdout("NOPE\n");
    cmd().args(["panca", "--"]).assert().code(0).stdout("OK\n");
}

#[test]
fn flag_lookalikes_are_plain_input() {
    cmd()
        .arg("--help")
        .assert()
        .code(1)
        .stdout("NOPE\n")
        .stderr(predicate::str::is_empty());
    cmd().arg("-abcd").assert().code(2).stdout("NOPE\n");
}

#[test]
fn quiet_stderr_by_default() {
    cmd()
        .arg("panca")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn debug_diagnostics_stay_on_stderr() {
    cmd()
        .env("PANCHECK_DEBUG", "1")
        .arg("panda")
        .assert()
        .code(2)
        .stdout("NOPE\n")
        .stderr(predicate::str::contains("[debug] classify:"))
        .stderr(predicate::str::contains(r#""outcome":"mismatch""#));
}

#[test]
fn debug_zero_is_off() {
    cmd()
        .env("PANCHECK_DEBUG", "0")
        .arg("panca")
        .assert()
        .code(0)
        .stderr(predicate::str::is_empty());
}

#[cfg(unix)]
#[test]
fn non_utf8_argument_is_compared_bytewise() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    cmd()
        .arg(OsStr::from_bytes(&[0xff, b'a', b'n', b'c', b'a']))
        .assert()
        .code(2)
        .stdout("NOPE\n");
    cmd()
        .arg(OsStr::from_bytes(&[0xff]))
        .assert()
        .code(1)
        .stdout("NOPE\n");
}
