//! Source invariant tests for the client-ip library.
//!
//! These scan the library's production sources on every
//! `cargo test --workspace` run so that later changes keep the silent
//! `None`/`false` contract, the single header priority list and the injected
//! ambient header source.

use regex::Regex;
use std::path::Path;
use walkdir::WalkDir;

/// Read all .rs files under the library's `src/` directory.
fn production_source_files() -> Vec<(String, String)> {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("client-ip")
        .join("src");

    let mut files = Vec::new();

    for entry in WalkDir::new(&root).into_iter().filter_map(|e| e.ok()) {
        let path = entry.path();

        if path.extension().and_then(|e| e.to_str()) != Some("rs") {
            continue;
        }

        if let Ok(content) = std::fs::read_to_string(path) {
            files.push((path.to_str().unwrap_or("").to_string(), content));
        }
    }

    assert!(!files.is_empty(), "no sources found under {}", root.display());
    files
}

/// Lines outside of `#[cfg(test)]` modules, with comment lines dropped.
/// Heuristic: everything after `#[cfg(test)]` in a file is test code.
fn production_lines(content: &str) -> Vec<(usize, &str)> {
    let mut result = Vec::new();

    for (i, line) in content.lines().enumerate() {
        if line.contains("#[cfg(test)]") || line.trim().starts_with("mod tests") {
            break;
        }
        if line.trim_start().starts_with("//") {
            continue;
        }
        result.push((i + 1, line));
    }

    result
}

fn file_name(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(path)
}

#[test]
fn no_panicking_calls_in_production_code() {
    let panicking = Regex::new(r"\.unwrap\(\)|\.expect\(|panic!|unreachable!|todo!|unimplemented!")
        .unwrap();

    for (path, content) in &production_source_files() {
        for (line_num, line) in production_lines(content) {
            assert!(
                !panicking.is_match(line),
                "Panicking call at {}:{}: {}. Invalid input must degrade to None/false.",
                path,
                line_num,
                line.trim()
            );
        }
    }
}

#[test]
fn header_priority_list_defined_once() {
    // Names that only the priority list itself has any reason to spell out.
    let list_only = [
        "\"HTTP_X_FORWARDED\"",
        "\"HTTP_X_CLUSTER_CLIENT_IP\"",
        "\"HTTP_FORWARDED_FOR\"",
        "\"X-REAL-IP\"",
        "\"VIA\"",
    ];

    for (path, content) in &production_source_files() {
        if file_name(path) == "constants.rs" {
            continue;
        }
        for (line_num, line) in production_lines(content) {
            for name in &list_only {
                assert!(
                    !line.contains(name),
                    "Header name {} spelled outside constants.rs at {}:{}. \
                     Use RECOGNIZED_HEADERS instead of a second list.",
                    name,
                    path,
                    line_num
                );
            }
        }
    }
}

#[test]
fn environment_read_only_by_ambient_source() {
    let env_access = Regex::new(r"env::var|env::vars").unwrap();

    for (path, content) in &production_source_files() {
        if file_name(path) == "source.rs" {
            continue;
        }
        for (line_num, line) in production_lines(content) {
            assert!(
                !env_access.is_match(line),
                "Process environment read at {}:{}. Ambient headers must come through \
                 an injected AmbientHeaders implementation.",
                path,
                line_num
            );
        }
    }
}

#[test]
fn library_logs_through_tracing() {
    let stdio = Regex::new(r"\b(e?println!|e?print!|dbg!)").unwrap();

    for (path, content) in &production_source_files() {
        for (line_num, line) in production_lines(content) {
            assert!(
                !stdio.is_match(line),
                "Direct stdio output at {}:{}: {}. Use tracing macros.",
                path,
                line_num,
                line.trim()
            );
        }
    }
}
