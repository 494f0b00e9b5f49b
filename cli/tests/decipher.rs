use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

fn project_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .to_path_buf()
}

fn testdata(name: &str) -> String {
    project_root()
        .join("testdata")
        .join(name)
        .to_string_lossy()
        .to_string()
}

fn mitate() -> Command {
    let mut cmd = Command::cargo_bin("mitate").unwrap();
    cmd.current_dir(project_root());
    cmd
}

#[test]
fn test_describe_file_text() {
    let path = testdata("der/rsa-512.pub");
    mitate()
        .arg(&path)
        .assert()
        .success()
        .stdout(format!(
            "{}: PKIX public key\n  Algorithm: RSA\n  Size: 512 bits\n",
            path
        ));
}

#[test]
fn test_describe_certificate_with_child() {
    mitate()
        .arg(testdata("der/github.com.cer"))
        .assert()
        .success()
        .stdout(predicate::str::contains(": x.509v3 end-entity certificate\n"))
        .stdout(predicate::str::contains("  Serial: cd0a8bec632cfe645eca0a9b084fb1c\n"))
        .stdout(predicate::str::contains(
            "  Public key\n    Algorithm: ECDSA\n    Curve: P-256 (secp256r1, prime256v1)\n",
        ));
}

#[test]
fn test_describe_stdin_has_no_prefix() {
    mitate()
        .write_stdin("f81d4fae-7dec-11d0-a765-00a0c91e6bf6\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("UUID\n  Version: 1 (time-based)\n"));
}

#[test]
fn test_dash_reads_stdin() {
    mitate()
        .arg("-")
        .write_stdin("not a key")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("unrecognized data\n  Size: 9 bytes\n"));
}

#[test]
fn test_multiple_files_in_order() {
    let jwt = testdata("token.jwt");
    let uuid = testdata("uuid-v1.txt");
    mitate()
        .args([&jwt, &uuid])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"(?s)token\.jwt: JSON Web Token\n.*uuid-v1\.txt: UUID\n").unwrap());
}

#[test]
fn test_json_output() {
    mitate()
        .args(["-o", "json", &testdata("b64/ed25519.pub.b64url")])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#""description":{"description":"PKIX public key","attributes":[{"name":"Algorithm","value":"EdDSA"},{"name":"Curve","value":"Ed25519"}]}}"#,
        ))
        .stdout(predicate::str::contains(r#"{"path":""#));
}

#[test]
fn test_directory_without_recursive_fails() {
    mitate()
        .arg(testdata("b64"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("is a directory"));
}

#[test]
fn test_recursive_walk_is_sorted() {
    mitate()
        .args(["-r", &testdata("b64")])
        .assert()
        .success()
        .stdout(
            predicate::str::is_match(
                r"(?s)ed25519\.pub\.b64url: PKIX public key\n.*github\.com\.pem: x\.509v3 end-entity certificate\n.*prime256v1\.key\.b64: PKCS#8 private key\n.*rsa-512\.pub\.b64: PKIX public key\n",
            )
            .unwrap(),
        );
}

#[test]
fn test_missing_file_is_skipped() {
    mitate()
        .args([&testdata("does-not-exist"), &testdata("uuid-v1.txt")])
        .assert()
        .success()
        .stdout(predicate::str::contains("uuid-v1.txt: UUID\n"))
        .stderr(predicate::str::contains("failed to inspect file"));
}

#[test]
fn test_version() {
    mitate()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("mitate "));
}
