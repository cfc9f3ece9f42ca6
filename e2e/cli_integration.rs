//! Black-box tests of the `makocode` binary via `std::process::Command`.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

fn makocode_bin() -> PathBuf {
    if let Ok(p) = std::env::var("CARGO_BIN_EXE_makocode") {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop();
    if p.ends_with("deps") {
        p.pop();
    }
    p.push("makocode");
    p
}

#[test]
fn encode_then_decode_round_trips_a_file() {
    let dir = TempDir::new().unwrap();
    let input_path = dir.path().join("input.bin");
    let content = b"the quick brown fox jumps over the lazy dog\n".repeat(20);
    fs::write(&input_path, &content).unwrap();

    let prefix = dir.path().join("page");
    let status = Command::new(makocode_bin())
        .args([
            "encode",
            input_path.to_str().unwrap(),
            "--output",
            prefix.to_str().unwrap(),
            "--mode",
            "rgb",
            "--width",
            "64",
            "--height",
            "64",
        ])
        .status()
        .expect("failed to run makocode encode");
    assert!(status.success());

    let mut page_paths: Vec<PathBuf> = fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.extension().map(|ext| ext == "ppm").unwrap_or(false))
        .collect();
    page_paths.sort();
    assert!(!page_paths.is_empty(), "expected at least one page file");

    let output_path = dir.path().join("decoded.bin");
    let mut decode_args = vec!["decode".to_string()];
    for p in &page_paths {
        decode_args.push(p.to_str().unwrap().to_string());
    }
    decode_args.push("--output".to_string());
    decode_args.push(output_path.to_str().unwrap().to_string());

    let status = Command::new(makocode_bin()).args(&decode_args).status().expect("failed to run makocode decode");
    assert!(status.success());

    let decoded = fs::read(&output_path).unwrap();
    assert_eq!(decoded, content);
}

#[test]
fn test_subcommand_exits_zero() {
    let status = Command::new(makocode_bin())
        .args(["test", "--mode", "gray"])
        .status()
        .expect("failed to run makocode test");
    assert!(status.success());
}

#[test]
fn decode_rejects_a_missing_file() {
    let output = Command::new(makocode_bin())
        .args(["decode", "/nonexistent/path/page.1.ppm"])
        .output()
        .expect("failed to run makocode decode");
    assert!(!output.status.success());
}
