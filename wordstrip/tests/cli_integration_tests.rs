// wordstrip/tests/cli_integration_tests.rs
//! End-to-end tests for the `wordstrip` binary.
//!
//! Each test works inside its own temporary directory so the default export
//! file name can be checked without touching the repository.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

fn wordstrip(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo_bin!("wordstrip"));
    cmd.current_dir(dir);
    cmd.env_remove("WORDSTRIP_CONFIG");
    cmd.env("RUST_LOG", "info");
    cmd
}

fn fixture() -> Result<TempDir> {
    let dir = tempfile::tempdir()?;
    let mut forbidden = BOM.to_vec();
    forbidden.extend_from_slice("금지어\n테스트\n샘플\n 테스트 \n".as_bytes());
    fs::write(dir.path().join("금지어.csv"), forbidden)?;
    fs::write(
        dir.path().join("delete_product_name.csv"),
        "상품코드,*상품명,키워드\nA1,테스트 상품 샘플입니다,신발\nA2,깨끗한 상품,모자\n,,\n",
    )?;
    Ok(dir)
}

#[test]
fn process_writes_default_export_file() -> Result<()> {
    let dir = fixture()?;
    wordstrip(dir.path())
        .args(["process", "-f", "금지어.csv", "-p", "delete_product_name.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("상품 입니다"))
        .stderr(predicate::str::contains("Loaded 2 forbidden terms and 2 product rows."))
        .stderr(predicate::str::contains("[INFO wordstrip::commands::process] Starting process operation."))
        .stderr(predicate::str::contains("1 of 2 rows changed, 2 occurrences removed."));

    let bytes = fs::read(dir.path().join("processed_delete_product_name.csv"))?;
    assert!(bytes.starts_with(BOM));
    let text = String::from_utf8(bytes[BOM.len()..].to_vec())?;
    assert_eq!(
        text,
        "상품코드,*상품명,키워드,금지어가 제거된 상품명\n\
         A1,테스트 상품 샘플입니다,신발,상품 입니다\n\
         A2,깨끗한 상품,모자,깨끗한 상품\n"
    );
    Ok(())
}

#[test]
fn process_to_stdout_emits_csv_only() -> Result<()> {
    let dir = fixture()?;
    let assert = wordstrip(dir.path())
        .args(["-q", "process", "-f", "금지어.csv", "-p", "delete_product_name.csv", "-o", "-"])
        .assert()
        .success();
    let stdout = &assert.get_output().stdout;
    assert!(stdout.starts_with(BOM));
    let text = String::from_utf8_lossy(&stdout[BOM.len()..]);
    assert!(text.starts_with("상품코드,*상품명,키워드,금지어가 제거된 상품명\n"));
    assert!(!dir.path().join("processed_delete_product_name.csv").exists());
    Ok(())
}

#[test]
fn empty_forbidden_list_fails_with_validation_message() -> Result<()> {
    let dir = fixture()?;
    fs::write(dir.path().join("empty.csv"), "금지어\n")?;
    wordstrip(dir.path())
        .args(["process", "-f", "empty.csv", "-p", "delete_product_name.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Processing failed"))
        .stderr(predicate::str::contains("The forbidden-word list is empty"));
    assert!(!dir.path().join("processed_delete_product_name.csv").exists());
    Ok(())
}

#[test]
fn missing_input_file_is_reported() -> Result<()> {
    let dir = fixture()?;
    wordstrip(dir.path())
        .args(["process", "-f", "nope.csv", "-p", "delete_product_name.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load forbidden words from nope.csv"));
    Ok(())
}

#[test]
fn terms_prints_deduplicated_list() -> Result<()> {
    let dir = fixture()?;
    wordstrip(dir.path())
        .args(["terms", "-f", "금지어.csv"])
        .assert()
        .success()
        .stdout("샘플\n테스트\n")
        .stderr(predicate::str::contains("2 unique forbidden terms."));
    Ok(())
}

#[test]
fn config_file_sets_delimiter() -> Result<()> {
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("words.csv"), "w\nsale\n")?;
    fs::write(dir.path().join("items.csv"), "code;*상품명\n1;SALE shoes, red\n")?;
    fs::write(dir.path().join("wordstrip.yaml"), "codec:\n  delimiter: \";\"\npreview:\n  rows: 0\n")?;

    wordstrip(dir.path())
        .args([
            "--config",
            "wordstrip.yaml",
            "process",
            "-f",
            "words.csv",
            "-p",
            "items.csv",
            "-o",
            "out.csv",
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let bytes = fs::read(dir.path().join("out.csv"))?;
    let text = String::from_utf8(bytes[BOM.len()..].to_vec())?;
    assert_eq!(text, "code;*상품명;금지어가 제거된 상품명\n1;SALE shoes, red;shoes, red\n");
    Ok(())
}
