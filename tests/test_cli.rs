//! Runs the binary the way a shell would.

mod common;

use std::process::Command;

use common::*;

fn inktrace() -> Command {
    Command::new(env!("CARGO_BIN_EXE_inktrace"))
}

#[test]
fn test_prints_paths_for_image_argument() -> anyhow::Result<()> {
    let file = save_temp_png(&two_blob_image());
    let output = inktrace().arg(file.path()).output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|l| parse_path_element(l).is_some()));
    Ok(())
}

#[test]
fn test_blank_image_prints_nothing() -> anyhow::Result<()> {
    let file = save_temp_png(&blank_canvas(16, 16));
    let output = inktrace().arg(file.path()).output()?;

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    Ok(())
}

#[test]
fn test_default_input_is_read_from_working_directory() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let file = save_temp_png(&single_rect_image());
    std::fs::copy(file.path(), dir.path().join("esp32.png"))?;

    let output = inktrace().current_dir(dir.path()).output()?;
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?.lines().count(), 1);
    Ok(())
}

#[test]
fn test_missing_input_fails_without_stdout() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let output = inktrace().current_dir(dir.path()).output()?;

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
    Ok(())
}

#[test]
fn test_verbose_keeps_stdout_clean() -> anyhow::Result<()> {
    let file = save_temp_png(&single_rect_image());
    let output = inktrace().arg("--verbose").arg(file.path()).output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(stdout.lines().count(), 1);
    assert!(parse_path_element(stdout.trim_end()).is_some());
    assert!(!output.stderr.is_empty());
    Ok(())
}

#[test]
fn test_document_flag_wraps_paths() -> anyhow::Result<()> {
    let file = save_temp_png(&single_rect_image());
    let output = inktrace().arg("--document").arg(file.path()).output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.starts_with("<svg "));
    assert!(stdout.contains(r#"viewBox="0 0 10 10""#));
    assert!(stdout.contains("<path d=\"M 2,3 L "));
    assert!(stdout.trim_end().ends_with("</svg>"));
    Ok(())
}
