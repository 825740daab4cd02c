//! CLI integration tests for classic-cipher
//!
//! Tests the binary as a user would interact with it.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn classic_cipher() -> Command {
    Command::cargo_bin("classic-cipher").unwrap()
}

/// Command running in an empty directory, away from any local ciphers.toml.
fn in_dir(dir: &TempDir) -> Command {
    let mut cmd = classic_cipher();
    cmd.current_dir(dir.path());
    cmd
}

// ============================================================================
// Basic Commands
// ============================================================================

#[test]
fn test_help() {
    classic_cipher()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("classical ciphers"));
}

#[test]
fn test_version() {
    classic_cipher()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("classic-cipher"));
}

#[test]
fn test_config_list() {
    classic_cipher()
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("caesar"))
        .stdout(predicate::str::contains("Playfair Cipher"));
}

#[test]
fn test_config_list_json() {
    let output = classic_cipher()
        .args(["config", "list", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["algorithms"].as_array().unwrap().len(), 5);
    assert!(
        value["ciphers"]
            .as_array()
            .unwrap()
            .iter()
            .any(|c| c["name"] == "hill")
    );
}

#[test]
fn test_config_show() {
    classic_cipher()
        .args(["config", "show", "hill"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Algorithm: Hill Cipher"))
        .stdout(predicate::str::contains("Key: d*d letters"));
}

// ============================================================================
// Encrypt/Decrypt
// ============================================================================

#[test]
fn test_encrypt_caesar() {
    classic_cipher()
        .args(["encrypt", "caesar", "-k", "3"])
        .write_stdin("Attack at Dawn!\n")
        .assert()
        .success()
        .stdout("Dwwdfn dw Gdzq!\n");
}

#[test]
fn test_decrypt_by_algorithm_name() {
    classic_cipher()
        .args(["decrypt", "Caesar Cipher", "--key", "3"])
        .write_stdin("Dwwdfn dw Gdzq!")
        .assert()
        .success()
        .stdout("Attack at Dawn!\n");
}

#[test]
fn test_roundtrip_rail_fence() {
    let encrypted = classic_cipher()
        .args(["encrypt", "railfence", "-k", "3"])
        .write_stdin("WEAREDISCOVEREDFLEEATONCE")
        .assert()
        .success()
        .stdout("WECRLTEERDSOEEFEAOCAIVDEN\n")
        .get_output()
        .stdout
        .clone();

    classic_cipher()
        .args(["decrypt", "railfence", "-k", "3"])
        .write_stdin(encrypted)
        .assert()
        .success()
        .stdout("WEAREDISCOVEREDFLEEATONCE\n");
}

#[test]
fn test_roundtrip_mono_alphabetic() {
    classic_cipher()
        .args(["encrypt", "mono", "-k", "qwertyuiopasdfghjklzxcvbnm"])
        .write_stdin("Hello, World")
        .assert()
        .success()
        .stdout("Itssg, Vgksr\n");

    classic_cipher()
        .args(["decrypt", "mono", "-k", "qwertyuiopasdfghjklzxcvbnm"])
        .write_stdin("Itssg, Vgksr")
        .assert()
        .success()
        .stdout("Hello, World\n");
}

#[test]
fn test_hill_known_vector() {
    classic_cipher()
        .args(["encrypt", "hill", "-k", "gybnqkurp"])
        .write_stdin("act")
        .assert()
        .success()
        .stdout("poh\n");
}

#[test]
fn test_playfair_padding_notice() {
    classic_cipher()
        .args(["encrypt", "playfair", "-k", "monarchy"])
        .write_stdin("hello")
        .assert()
        .success()
        .stdout("cfppav\n")
        .stderr(predicate::str::contains("padded with 'x'"));

    classic_cipher()
        .args(["--quiet", "encrypt", "playfair", "-k", "monarchy"])
        .write_stdin("hello")
        .assert()
        .success()
        .stderr("");
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_unknown_cipher_suggests() {
    classic_cipher()
        .args(["encrypt", "playfiar", "-k", "monarchy"])
        .write_stdin("hello")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported algorithm 'playfiar'"))
        .stderr(predicate::str::contains("did you mean 'playfair'?"));
}

#[test]
fn test_missing_key() {
    let dir = TempDir::new().unwrap();
    in_dir(&dir)
        .args(["encrypt", "caesar"])
        .write_stdin("hello")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No key provided"));
}

#[test]
fn test_invalid_rail_count() {
    classic_cipher()
        .args(["encrypt", "railfence", "-k", "1"])
        .write_stdin("hello")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid key for Rail Fence Cipher"));
}

#[test]
fn test_non_numeric_shift() {
    classic_cipher()
        .args(["encrypt", "caesar", "-k", "three"])
        .write_stdin("hello")
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected an integer"));
}

#[test]
fn test_hill_non_invertible_key() {
    classic_cipher()
        .args(["decrypt", "hill", "-k", "abcd"])
        .write_stdin("hi")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not invertible modulo 26"));
}

#[test]
fn test_hill_length_mismatch() {
    classic_cipher()
        .args(["encrypt", "hill", "-k", "gybnqkurp"])
        .write_stdin("acts")
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected a multiple of 3"));
}

#[test]
fn test_playfair_odd_ciphertext() {
    classic_cipher()
        .args(["decrypt", "playfair", "-k", "monarchy"])
        .write_stdin("gat")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid text length"));
}

#[test]
fn test_max_size() {
    classic_cipher()
        .args(["--max-size", "4", "encrypt", "caesar", "-k", "1"])
        .write_stdin("too long")
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds maximum"));
}

// ============================================================================
// Files and configuration
// ============================================================================

#[test]
fn test_key_file() {
    let dir = TempDir::new().unwrap();
    let key_path = dir.path().join("key.txt");
    fs::write(&key_path, "monarchy\n").unwrap();

    in_dir(&dir)
        .args(["encrypt", "playfair", "--key-file"])
        .arg(&key_path)
        .write_stdin("instrumentsx")
        .assert()
        .success()
        .stdout("gatlmzclrqxa\n");
}

#[test]
fn test_output_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("plain.txt");
    let output = dir.path().join("cipher.txt");
    fs::write(&input, "Attack at Dawn!\n").unwrap();

    in_dir(&dir)
        .args(["encrypt", "caesar", "-k", "3"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout("");

    assert_eq!(fs::read_to_string(&output).unwrap(), "Dwwdfn dw Gdzq!");
}

#[test]
fn test_in_place_roundtrip() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("notes.txt");
    fs::write(&file, "meet me at noon\n").unwrap();

    in_dir(&dir)
        .args(["encrypt", "railfence", "-k", "4", "--in-place"])
        .arg(&file)
        .assert()
        .success();
    let encrypted = fs::read_to_string(&file).unwrap();
    assert_ne!(encrypted, "meet me at noon");

    in_dir(&dir)
        .args(["decrypt", "railfence", "-k", "4", "-i"])
        .arg(&file)
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&file).unwrap(), "meet me at noon");
}

#[test]
fn test_in_place_requires_file() {
    classic_cipher()
        .args(["encrypt", "caesar", "-k", "3", "--in-place"])
        .write_stdin("hello")
        .assert()
        .failure();
}

#[test]
fn test_local_config_stores_key() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("ciphers.toml"),
        r#"
[ciphers.rot13]
algorithm = "Caesar Cipher"
key = "13"
"#,
    )
    .unwrap();

    in_dir(&dir)
        .args(["encrypt", "rot13"])
        .write_stdin("Hello")
        .assert()
        .success()
        .stdout("Uryyb\n");
}
