use std::io::Write;
use std::process::Stdio;

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;

#[test]
fn rewrites_citation_groups_from_stdin() {
    let mut cmd = Command::cargo_bin("cites").expect("binary");
    cmd.write_stdin("see \\hyperlink{BIB}{foo, bar}\nno citation here\n")
        .assert()
        .success()
        .stdout("see [\\hyperlink{b:foo}{foo},\\hyperlink{b:bar}{bar}]\nno citation here\n");
}

#[test]
fn passes_text_without_citations_through_verbatim() {
    let input = "line one\r\n\\hyperlink{b:x}{x}\n\nlast";

    let mut cmd = Command::cargo_bin("cites").expect("binary");
    cmd.write_stdin(input).assert().success().stdout(input);
}

#[test]
fn empty_input_gives_empty_output() {
    let mut cmd = Command::cargo_bin("cites").expect("binary");
    cmd.write_stdin("").assert().success().stdout("");
}

#[test]
fn exits_successfully_when_downstream_pipe_closes() -> Result<(), Box<dyn std::error::Error>> {
    let input: String = (0..5000)
        .map(|i| format!("see \\hyperlink{{BIB}}{{key{i}, other{i}}}\n"))
        .collect();

    let mut cmd = std::process::Command::new(cargo_bin("cites"));
    cmd.env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = cmd.spawn()?;
    drop(child.stdout.take());

    if let Some(mut stdin) = child.stdin.take() {
        // The child may exit before consuming everything.
        let _ = stdin.write_all(input.as_bytes());
    }

    let output = child.wait_with_output()?;
    assert!(
        output.status.success(),
        "expected success, got status: {status:?}",
        status = output.status
    );
    assert!(
        output.stderr.is_empty(),
        "expected stderr to be empty, got: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    Ok(())
}
