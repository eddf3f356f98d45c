// wordstrip-core/tests/session_integration_tests.rs
use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use wordstrip_core::{
    DERIVED_FIELD, SOURCE_FIELD, Session, UTF8_BOM, WordstripError, decode_csv, CodecOptions,
    Dataset, EngineOptions, Record, WordstripConfig,
};

/// Writes `content` into `dir/name` and returns the path.
fn write_file(dir: &TempDir, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.path().join(name);
    fs::write(&path, content)?;
    Ok(path)
}

fn loaded_session(dir: &TempDir) -> Result<Session> {
    let forbidden = write_file(dir, "금지어.csv", "금지어\n테스트\n샘플\n")?;
    let products = write_file(
        dir,
        "delete_product_name.csv",
        &format!("상품코드,{SOURCE_FIELD},키워드\nA1,테스트 상품 샘플입니다,신발\n"),
    )?;
    let mut session = Session::new();
    session.load_forbidden_file(&forbidden)?;
    session.load_product_file(&products)?;
    Ok(session)
}

#[test_log::test]
fn process_and_export_end_to_end() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut session = loaded_session(&dir)?;

    let summary = session.process()?;
    assert_eq!(summary.rows, 1);
    assert_eq!(summary.rows_changed, 1);
    assert_eq!(summary.removals, 2);

    let processed = session.processed().expect("processed dataset");
    assert_eq!(processed.records[0].get(DERIVED_FIELD), Some("상품 입니다"));

    let artifact = session.export()?;
    assert_eq!(artifact.file_name, "processed_delete_product_name.csv");
    assert!(artifact.bytes.starts_with(UTF8_BOM));

    let reread = decode_csv(&artifact.bytes, &CodecOptions::default())?;
    assert_eq!(
        reread.fields,
        vec!["상품코드", SOURCE_FIELD, "키워드", DERIVED_FIELD]
    );
    assert_eq!(reread.records[0].get("키워드"), Some("신발"));
    assert_eq!(session.last_error(), None);
    Ok(())
}

#[test]
fn process_without_inputs_lists_every_failed_precondition() {
    let mut session = Session::new();
    let err = session.process().unwrap_err();
    match &err {
        WordstripError::Validation(failures) => assert_eq!(failures.len(), 2),
        other => panic!("expected validation error, got {other:?}"),
    }
    assert!(session.last_error().is_some());
    assert!(session.processed().is_none());
}

#[test]
fn loading_new_products_discards_processed_result() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut session = loaded_session(&dir)?;
    session.process()?;
    assert!(session.processed().is_some());

    // Only a header: zero rows, which is valid to load but not to process.
    let empty = write_file(&dir, "empty.csv", &format!("{SOURCE_FIELD}\n"))?;
    session.load_product_file(&empty)?;
    assert!(session.processed().is_none());

    let err = session.process().unwrap_err();
    assert!(matches!(err, WordstripError::Validation(ref f) if f.len() == 1));
    assert!(session.processed().is_none());

    let export_err = session.export().unwrap_err();
    assert!(export_err.is_user_error());
    Ok(())
}

#[test]
fn failed_process_leaves_last_result_visible() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut session = loaded_session(&dir)?;
    session.process()?;
    let first = session.processed().expect("processed dataset");

    // A word list with only blank values yields an empty term set.
    session.set_forbidden_source(decode_csv("금지어\n \n".as_bytes(), &CodecOptions::default())?);
    assert!(session.terms().is_empty());
    assert!(session.process().is_err());
    let kept = session.processed().expect("previous result is still visible");
    assert_eq!(kept, first);

    let forbidden = write_file(&dir, "again.csv", "words\n샘플\n")?;
    session.load_forbidden_file(&forbidden)?;
    session.process()?;
    let second = session.processed().expect("processed dataset");
    assert_eq!(second.records[0].get(DERIVED_FIELD), Some("테스트 상품 입니다"));
    assert_eq!(first.records[0].get(DERIVED_FIELD), Some("상품 입니다"));
    Ok(())
}

#[test]
fn oversized_matcher_fails_process_and_keeps_last_result() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let config = WordstripConfig {
        engine: EngineOptions { size_limit: 10_000 },
        ..WordstripConfig::default()
    };
    let mut session = Session::with_config(config);
    session.load_forbidden_file(&write_file(&dir, "small.csv", "금지어\n테스트\n")?)?;
    session.load_product_file(&write_file(
        &dir,
        "products.csv",
        &format!("{SOURCE_FIELD}\n테스트 상품\n"),
    )?)?;
    session.process()?;
    let first = session.processed().expect("processed dataset");

    let words: Vec<Record> = (0..2000)
        .map(|i| [("금지어", format!("term{i}"))].into_iter().collect())
        .collect();
    session.set_forbidden_source(Dataset::from_records(words));
    assert_eq!(session.terms().len(), 2000);

    let err = session.process().unwrap_err();
    assert!(matches!(err, WordstripError::Compile(2000, _)));
    assert!(!err.is_user_error());
    assert_eq!(session.last_error(), Some(err.to_string().as_str()));
    assert_eq!(session.processed().expect("previous result is still visible"), first);
    assert!(session.export().is_ok());
    Ok(())
}

#[test]
fn undecodable_file_does_not_disturb_other_input() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut session = loaded_session(&dir)?;
    let bad = dir.path().join("bad.csv");
    fs::write(&bad, [b'h', b'\n', 0xFF, 0xFE, b'\n'])?;

    let err = session.load_product_file(&bad).unwrap_err();
    assert!(matches!(err, WordstripError::Decode(_)));
    assert!(session.last_error().unwrap().contains("bad.csv"));
    assert_eq!(session.terms().len(), 2);
    assert_eq!(session.products().map(|p| p.len()), Some(1));

    // The next operation clears the error slot.
    session.process()?;
    assert_eq!(session.last_error(), None);
    Ok(())
}

#[test]
fn preview_shows_source_until_processed() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut session = loaded_session(&dir)?;

    let initial = session.preview(10);
    assert_eq!(initial.len(), 1);
    assert_eq!(initial[0].original, initial[0].cleaned);

    session.process()?;
    let after = session.preview(10);
    assert_eq!(after[0].original, "테스트 상품 샘플입니다");
    assert_eq!(after[0].cleaned, "상품 입니다");
    Ok(())
}
