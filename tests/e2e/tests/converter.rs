//! E2E тесты для CLI инструмента `bai2-converter`.
//!
//! Тестируем:
//! - конвертацию полной выписки в три CSV-таблицы
//! - выходную директорию по умолчанию и из stdin
//! - поведение на некорректной сумме (abort и --skip-malformed)

use std::fs;

use assert_cmd::Command;
use e2e_tests::fixture;
use predicates::prelude::*;
use tempfile::tempdir;

/// Создать команду для запуска bai2-converter.
///
/// `cargo_bin` deprecated из-за edge case с custom build directories,
/// но это единственный способ для кросс-крейтовых бинарников.
#[expect(deprecated)]
fn converter() -> Command {
    Command::cargo_bin("bai2-converter").unwrap()
}

const TRANSACTIONS_HEADER: &str =
    "record_code,type_code,amount,funds_type,bank_ref,customer_ref,text";

// ============================================================================
// Полная выписка
// ============================================================================

#[test]
fn test_statement_to_tables() {
    let dir = tempdir().unwrap();

    converter()
        .args([
            "--input",
            fixture("statement.bai2").to_str().unwrap(),
            "--output-dir",
            dir.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Headers      : 1 row(s)"))
        .stderr(predicate::str::contains("Accounts     : 2 row(s)"))
        .stderr(predicate::str::contains("Transactions : 4 row(s)"))
        .stderr(predicate::str::contains("Conversion complete"));

    let header = fs::read_to_string(dir.path().join("file_header.csv")).unwrap();
    assert_eq!(
        header,
        "record_code,sender_id,receiver_id,creation_date,creation_time,file_id,version,\
         physical_record_length\n\
         01,BANKID01,CUSTID01,250314,0800,001,80,2\n"
    );

    let accounts = fs::read_to_string(dir.path().join("accounts.csv")).unwrap();
    assert_eq!(
        accounts,
        "record_code,account_number,currency,type_code_summary\n\
         03,0123456789,USD,010\n\
         03,9876543210,EUR,010\n"
    );

    let transactions = fs::read_to_string(dir.path().join("transactions.csv")).unwrap();
    let expected = [
        TRANSACTIONS_HEADER,
        "16,409,123.45,,REF1,CUST1,desc",
        "16,475,-5.00,Z,REF2,,bank fee",
        "16,195,2500.00,0,REF3,INV-77,incoming wire",
        "16,699,1.00,,REF4,,",
    ];
    assert_eq!(transactions.lines().collect::<Vec<_>>(), expected);

    // Заголовки групп по умолчанию не пишутся
    assert!(!dir.path().join("groups.csv").exists());
}

#[test]
fn test_include_groups() {
    let dir = tempdir().unwrap();

    converter()
        .args([
            "-i",
            fixture("statement.bai2").to_str().unwrap(),
            "-o",
            dir.path().to_str().unwrap(),
            "--include-groups",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Groups       : 1 row(s)"));

    let groups = fs::read_to_string(dir.path().join("groups.csv")).unwrap();
    assert!(groups.starts_with("record_code,file_id,group_id,creation_date,creation_time,currency\n"));
    assert_eq!(groups.lines().count(), 2);
}

#[test]
fn test_default_output_dir_next_to_input() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("march.bai2");
    fs::copy(fixture("statement.bai2"), &input).unwrap();

    converter().args(["--input", input.to_str().unwrap()]).assert().success();

    let out = dir.path().join("march");
    assert!(out.join("file_header.csv").is_file());
    assert!(out.join("accounts.csv").is_file());
    assert!(out.join("transactions.csv").is_file());
}

#[test]
fn test_creates_nested_output_dir() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("a").join("b");

    converter()
        .args([
            "--input",
            fixture("statement.bai2").to_str().unwrap(),
            "--output-dir",
            out.to_str().unwrap(),
        ])
        .assert()
        .success();

    assert!(out.join("transactions.csv").is_file());
}

// ============================================================================
// stdin
// ============================================================================

#[test]
fn test_stdin_input() {
    let dir = tempdir().unwrap();

    converter()
        .args(["--output-dir", dir.path().to_str().unwrap()])
        .write_stdin("16,409,12345,,REF1,CUST1,desc/\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Transactions : 1 row(s)"));

    let transactions = fs::read_to_string(dir.path().join("transactions.csv")).unwrap();
    assert!(transactions.contains("16,409,123.45,,REF1,CUST1,desc"));
}

#[test]
fn test_stdin_requires_output_dir() {
    converter()
        .write_stdin("01,A,B/\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--output-dir is required"));
}

#[test]
fn test_empty_input_writes_header_only_tables() {
    let dir = tempdir().unwrap();

    converter()
        .args(["--output-dir", dir.path().to_str().unwrap()])
        .write_stdin("\n\n")
        .assert()
        .success();

    let transactions = fs::read_to_string(dir.path().join("transactions.csv")).unwrap();
    assert_eq!(transactions.trim_end(), TRANSACTIONS_HEADER);
}

// ============================================================================
// Некорректные суммы
// ============================================================================

#[test]
fn test_malformed_amount_aborts() {
    let dir = tempdir().unwrap();

    converter()
        .args([
            "--input",
            fixture("malformed.bai2").to_str().unwrap(),
            "--output-dir",
            dir.path().to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed amount '12X45' at line 4"));

    // Строки до ошибки остаются в выходе
    let transactions = fs::read_to_string(dir.path().join("transactions.csv")).unwrap();
    assert_eq!(transactions.lines().collect::<Vec<_>>(), [
        TRANSACTIONS_HEADER,
        "16,409,123.45,,REF1,CUST1,first",
    ]);
}

#[test]
fn test_skip_malformed() {
    let dir = tempdir().unwrap();

    converter()
        .args([
            "--input",
            fixture("malformed.bai2").to_str().unwrap(),
            "--output-dir",
            dir.path().to_str().unwrap(),
            "--skip-malformed",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Skipped      : 1 malformed record(s)"))
        .stderr(predicate::str::contains("Transactions : 2 row(s)"));

    let transactions = fs::read_to_string(dir.path().join("transactions.csv")).unwrap();
    assert!(transactions.contains("16,409,2.00,,REF3,CUST3,third"));
    assert!(!transactions.contains("broken"));
}

// ============================================================================
// Ошибки источника
// ============================================================================

#[test]
fn test_missing_input_file() {
    let dir = tempdir().unwrap();

    converter()
        .args([
            "--input",
            dir.path().join("nope.bai2").to_str().unwrap(),
            "--output-dir",
            dir.path().to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open input file"));
}
