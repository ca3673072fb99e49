use assert_cmd::Command;
use booktools_test_support::BookFixture;
use predicates::prelude::*;

fn checktoc(book: &BookFixture) -> Command {
    let mut cmd = Command::cargo_bin("checktoc").expect("binary");
    cmd.current_dir(book.path());
    cmd
}

#[test]
fn reports_missing_chapter_file() {
    let book = BookFixture::new();
    book.write_config(&["a", "b"], &[], &[]);

    checktoc(&book)
        .args(["_config.yml", "dir/a.md", "dir/index.md"])
        .assert()
        .success()
        .stdout("in configuration but no file\nb\n");
}

#[test]
fn prints_nothing_when_consistent() {
    let book = BookFixture::new();
    book.write_config(&["intro"], &["/bib/"], &["gloss"]);

    checktoc(&book)
        .args(["_config.yml", "src/intro.md", "src/bib.md"])
        .args(["src/gloss.md", "src/index.md"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn missing_block_precedes_undeclared_block() {
    let book = BookFixture::new();
    book.write_config(&["a", "c"], &[], &[]);

    checktoc(&book)
        .args(["_config.yml", "src/b.md", "src/a.md"])
        .assert()
        .success()
        .stdout("in configuration but no file\nc\nfile but not in configuration\nb\n");
}

#[test]
fn strict_mode_fails_on_differences() {
    let book = BookFixture::new();
    book.write_config(&["a"], &[], &[]);

    checktoc(&book)
        .args(["--strict", "_config.yml", "src/a.md", "src/b.md"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("file but not in configuration"));

    checktoc(&book)
        .args(["--strict", "_config.yml", "src/a.md"])
        .assert()
        .success();
}

#[test]
fn json_format_lists_both_sides() {
    let book = BookFixture::new();
    book.write_config(&["a", "b"], &[], &[]);

    let output = checktoc(&book)
        .args(["--format", "json", "_config.yml", "src/a.md", "src/z.md"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).expect("json output");
    assert_eq!(report["in_config_not_files"], serde_json::json!(["b"]));
    assert_eq!(report["in_files_not_config"], serde_json::json!(["z"]));
}

#[test]
fn too_few_arguments_is_a_usage_error() {
    let book = BookFixture::new();
    book.write_config(&["a"], &[], &[]);

    checktoc(&book)
        .arg("_config.yml")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Usage"));

    checktoc(&book)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn missing_toc_group_is_reported() {
    let book = BookFixture::new();
    book.write("_config.yml", "toc:\n  lessons: [a]\n");

    checktoc(&book)
        .args(["_config.yml", "src/a.md"])
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("toc.bib, toc.extras"));
}

#[test]
fn path_without_directory_is_rejected() {
    let book = BookFixture::new();
    book.write_config(&["a"], &[], &[]);

    checktoc(&book)
        .args(["_config.yml", "a.md"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("has no directory component"));
}
