//! Hygiene: source and manifest rules for the client crate.
//!
//! The client is only compiled for the browser behind the `csr` feature, so
//! these checks catch mistakes a native `cargo test` would otherwise miss.

use std::fs;
use std::path::{Path, PathBuf};

struct SourceFile {
    path: String,
    content: String,
}

fn collect_rs_files(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            out.push(path);
        }
    }
}

fn source_files() -> Vec<SourceFile> {
    let mut paths = Vec::new();
    collect_rs_files(Path::new("src"), &mut paths);
    paths.sort();
    paths
        .into_iter()
        .filter(|p| !p.to_string_lossy().ends_with("_test.rs"))
        .filter_map(|p| {
            let content = fs::read_to_string(&p).ok()?;
            Some(SourceFile { path: p.display().to_string(), content })
        })
        .collect()
}

fn manifest() -> String {
    fs::read_to_string("Cargo.toml").unwrap_or_default()
}

#[test]
fn browser_build_renders_client_side() {
    let manifest = manifest();
    assert!(manifest.contains("\"leptos/csr\""), "csr feature must enable leptos/csr");
    assert!(!manifest.contains("leptos/hydrate"), "no server markup exists to hydrate");
    assert!(!manifest.contains("leptos/ssr"), "no server renders this crate");

    let lib = fs::read_to_string("src/lib.rs").unwrap_or_default();
    assert!(lib.contains("mount_to_body("), "entry point must mount the app");
    assert!(!lib.contains("hydrate_body("), "entry point must not hydrate");
}

#[test]
fn browser_code_is_gated_on_csr() {
    let stale: Vec<String> = source_files()
        .into_iter()
        .filter(|f| f.content.contains("feature = \"hydrate\"") || f.content.contains("feature = \"ssr\""))
        .map(|f| f.path)
        .collect();
    assert!(stale.is_empty(), "gated on a feature the manifest doesn't define: {stale:?}");
}

#[test]
fn element_styles_go_through_web_sys() {
    // leptos::prelude adds a `style(value)` builder that shadows
    // `HtmlElement::style()` on node refs.
    let offenders: Vec<String> = source_files()
        .into_iter()
        .filter(|f| f.content.contains("use leptos::prelude::*;"))
        .filter(|f| f.content.contains(".style().set_property("))
        .map(|f| f.path)
        .collect();
    assert!(offenders.is_empty(), "use web_sys::HtmlElement::style(&el) in: {offenders:?}");
}

#[test]
fn cursor_update_errors_are_logged() {
    let Some(host) = source_files().into_iter().find(|f| f.path.ends_with("depth_chart_field.rs")) else {
        panic!("depth_chart_field.rs missing");
    };
    assert!(host.content.contains("web_sys::HtmlElement::style(&canvas)"));
    assert!(!host.content.contains("let _ = web_sys::HtmlElement::style"));
    assert!(host.content.contains("cursor update failed"));
}

#[test]
fn native_build_consumes_field_props() {
    let Some(host) = source_files().into_iter().find(|f| f.path.ends_with("depth_chart_field.rs")) else {
        panic!("depth_chart_field.rs missing");
    };
    let Some(start) = host.content.find("#[cfg(not(feature = \"csr\"))]\n    {\n        let _ = (") else {
        panic!("native build must consume the props the canvas effects read");
    };
    let block = &host.content[start..];
    for prop in ["positions", "assigned_players", "selected_position", "on_position_click"] {
        assert!(block.lines().take(5).any(|l| l.contains(prop)), "{prop} unused without csr");
    }
}
