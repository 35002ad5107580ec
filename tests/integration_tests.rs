use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::{contains, diff};

fn disasm86() -> Command {
    let mut cmd = Command::cargo_bin("disasm86").unwrap();
    cmd.env_remove("DISASM86_QUIET");
    cmd
}

#[test]
fn runs_without_arguments() {
    disasm86().assert().success().stdout(contains("disasm86"));
}

#[test]
fn disassembles_single_register_mov() {
    disasm86()
        .arg("tests/files/listing_0037_single_register_mov")
        .assert()
        .success()
        .stdout(diff("mov cx, bx\n"));
}

#[test]
fn disassembles_many_register_mov() {
    disasm86()
        .arg("disasm")
        .arg("tests/files/listing_0038_many_register_mov")
        .assert()
        .success()
        .stdout(diff(include_str!("expected/listing_0038").replace("\r\n", "\n")))
        .stderr(contains("Finished").and(contains("11 instructions")));
}

#[test]
fn header_makes_listing_reassemblable() {
    disasm86()
        .arg("disasm")
        .arg("--header")
        .arg("tests/files/listing_0037_single_register_mov")
        .assert()
        .success()
        .stdout(diff("bits 16\n\nmov cx, bx\n"));
}

#[test]
fn direction_bit_is_honoured_unless_ignored() {
    disasm86()
        .arg("disasm")
        .arg("tests/files/direction_set")
        .assert()
        .success()
        .stdout(diff("mov cx, bx\n"));

    disasm86()
        .arg("disasm")
        .arg("--ignore-direction")
        .arg("tests/files/direction_set")
        .assert()
        .success()
        .stdout(diff("mov bx, cx\n"));
}

#[test]
fn quiet_suppresses_status() {
    disasm86()
        .arg("--quiet")
        .arg("check")
        .arg("tests/files/listing_0038_many_register_mov")
        .assert()
        .success()
        .stdout(diff(""))
        .stderr(diff(""));

    disasm86()
        .env("DISASM86_QUIET", "1")
        .arg("check")
        .arg("tests/files/listing_0038_many_register_mov")
        .assert()
        .success()
        .stderr(diff(""));
}

#[test]
fn check_reports_success() {
    disasm86()
        .arg("check")
        .arg("tests/files/listing_0038_many_register_mov")
        .assert()
        .success()
        .stdout(diff(""))
        .stderr(contains("no errors found!"));
}

#[test]
fn prints_fields() {
    disasm86()
        .arg("fields")
        .arg("tests/files/listing_0037_single_register_mov")
        .assert()
        .success()
        .stdout(contains("100010 0 1 11  011 001"));
}

#[test]
fn rejects_odd_length() {
    disasm86()
        .arg("tests/files/odd_length")
        .assert()
        .failure()
        .stdout(diff(""))
        .stderr(contains("decode::malformed_length"))
        .stderr(contains("Stream of 3 bytes"));
}

#[test]
fn rejects_unknown_opcode() {
    disasm86()
        .arg("tests/files/unknown_opcode")
        .assert()
        .failure()
        .stdout(diff(""))
        .stderr(contains("decode::unknown_opcode"))
        .stderr(contains("Unknown opcode 0b000000"));
}

#[test]
fn rejects_memory_operand() {
    disasm86()
        .arg("tests/files/memory_operand")
        .assert()
        .failure()
        .stderr(contains("decode::unsupported_mode"));
}

#[test]
fn missing_file_fails() {
    disasm86()
        .arg("check")
        .arg("tests/files/does_not_exist")
        .assert()
        .failure();
}

#[test]
fn writes_listing_to_dest() {
    let dest = std::env::temp_dir().join(format!("disasm86-{}.asm", std::process::id()));
    disasm86()
        .arg("disasm")
        .arg("tests/files/listing_0038_many_register_mov")
        .arg(&dest)
        .assert()
        .success()
        .stdout(diff(""))
        .stderr(contains("Saved"));

    let written = std::fs::read_to_string(&dest).unwrap();
    let _ = std::fs::remove_file(&dest);
    assert_eq!(
        written,
        include_str!("expected/listing_0038").replace("\r\n", "\n")
    );
}
