//! Library loading and component extraction
//!
//! A library file (`.wl`) holds component blocks:
//!
//! ```text
//! component Greeting {
//!     <p>Hello, {{name}}!</p>
//! }
//! ```
//!
//! The loader extracts every block by tracking brace depth and
//! registers the joined, trimmed body under the component's name.
//! Anything outside a block is ignored, so libraries can carry
//! comments or prose between components.

use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::weave::context::Context;
use crate::weave::error::CompileError;

static COMPONENT_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^component\s+(\w+)\s*\{").expect("component header pattern"));

/// Resolve, read and register a library into the context.
///
/// The name is recorded in `imported_libraries` only after the file
/// loads, so a missing library never leaves a trace.
pub fn import_library(name: &str, ctx: &mut Context) -> Result<(), CompileError> {
    let path = resolve_library(name, &ctx.library_dirs).ok_or_else(|| {
        CompileError::LibraryNotFound {
            name: name.to_string(),
        }
    })?;
    let source = fs::read_to_string(&path).map_err(|err| CompileError::Io {
        path: path.display().to_string(),
        message: err.to_string(),
    })?;
    register_components(&source, ctx);
    ctx.imported_libraries.push(name.to_string());
    Ok(())
}

/// Locate `<name>.wl`: configured search directories first, then the
/// `libraries/` directory, then the current directory.
fn resolve_library(name: &str, search_dirs: &[PathBuf]) -> Option<PathBuf> {
    let file_name = format!("{}.wl", name);
    for dir in search_dirs {
        let candidate = dir.join(&file_name);
        if candidate.exists() {
            return Some(candidate);
        }
    }
    let bundled = Path::new("libraries").join(&file_name);
    if bundled.exists() {
        return Some(bundled);
    }
    let local = PathBuf::from(file_name);
    if local.exists() {
        return Some(local);
    }
    None
}

/// Extract every component block from library source and register it,
/// overwriting any prior definition of the same name.
pub fn register_components(source: &str, ctx: &mut Context) {
    let lines: Vec<&str> = source.split('\n').collect();
    let mut i = 0;
    while i < lines.len() {
        let line = lines[i].trim();
        let Some(caps) = COMPONENT_HEADER.captures(line) else {
            i += 1;
            continue;
        };
        let name = caps[1].to_string();
        let header_end = caps.get(0).map(|m| m.end()).unwrap_or(line.len());
        let mut body: Vec<String> = Vec::new();
        let mut depth = 1i32;
        // The opening line's trailing content counts toward depth and,
        // for one-line components, is the whole body.
        let mut closed = consume_block_line(&line[header_end..], &mut depth, &mut body);
        i += 1;
        while !closed && i < lines.len() {
            closed = consume_block_line(lines[i], &mut depth, &mut body);
            i += 1;
        }
        ctx.define_component(name, body.join("\n").trim().to_string());
    }
}

/// Fold one line into the block being captured. Returns true once the
/// block has closed.
fn consume_block_line(line: &str, depth: &mut i32, body: &mut Vec<String>) -> bool {
    for ch in line.chars() {
        match ch {
            '{' => *depth += 1,
            '}' => *depth -= 1,
            _ => {}
        }
    }
    if *depth > 0 {
        body.push(line.to_string());
        return false;
    }
    // A line of just "}" is dropped; otherwise the closing braces are
    // stripped from the end and the rest kept. A line that overshoots
    // (more closers than the block owes) is dropped entirely.
    if *depth == 0 && line.trim() != "}" {
        body.push(line.trim_end_matches('}').to_string());
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(source: &str) -> Context {
        let mut ctx = Context::new();
        register_components(source, &mut ctx);
        ctx
    }

    #[test]
    fn test_extracts_simple_component() {
        let ctx = load("component Greeting {\n    <p>Hello, {{name}}!</p>\n}\n");
        assert_eq!(ctx.component("Greeting"), Some("<p>Hello, {{name}}!</p>"));
    }

    #[test]
    fn test_one_line_component() {
        let ctx = load("component Rule { <hr> }");
        assert_eq!(ctx.component("Rule"), Some("<hr>"));
    }

    #[test]
    fn test_body_keeps_interior_lines_raw() {
        let ctx = load("component Card {\n<div>\n  <p>x</p>\n</div>\n}");
        assert_eq!(ctx.component("Card"), Some("<div>\n  <p>x</p>\n</div>"));
    }

    #[test]
    fn test_nested_braces_stay_in_body() {
        let ctx = load("component Styled {\n<style>p { color: red; }</style>\n}");
        assert_eq!(
            ctx.component("Styled"),
            Some("<style>p { color: red; }</style>")
        );
    }

    #[test]
    fn test_closing_line_with_content_keeps_content() {
        let ctx = load("component Tight {\n<p>done</p>}\n");
        assert_eq!(ctx.component("Tight"), Some("<p>done</p>"));
    }

    #[test]
    fn test_back_to_back_components() {
        let ctx = load("component A {\n<i>a</i>\n}\ncomponent B {\n<b>b</b>\n}\n");
        assert_eq!(ctx.component("A"), Some("<i>a</i>"));
        assert_eq!(ctx.component("B"), Some("<b>b</b>"));
    }

    #[test]
    fn test_component_on_line_after_closer_is_found() {
        // No gap line between the closer and the next header.
        let ctx = load("component A { <i>a</i> }\ncomponent B { <b>b</b> }");
        assert_eq!(ctx.component("A"), Some("<i>a</i>"));
        assert_eq!(ctx.component("B"), Some("<b>b</b>"));
    }

    #[test]
    fn test_text_outside_blocks_ignored() {
        let ctx = load("just some notes\ncomponent A { <i>a</i> }\nmore notes\n");
        assert_eq!(ctx.component("A"), Some("<i>a</i>"));
        assert_eq!(ctx.components.len(), 1);
    }

    #[test]
    fn test_duplicate_name_overwrites() {
        let ctx = load("component A { <i>old</i> }\ncomponent A { <i>new</i> }");
        assert_eq!(ctx.component("A"), Some("<i>new</i>"));
    }

    #[test]
    fn test_unterminated_block_registered_at_eof() {
        let ctx = load("component A {\n<p>partial</p>\n");
        assert_eq!(ctx.component("A"), Some("<p>partial</p>"));
    }

    #[test]
    fn test_overshooting_closer_line_dropped() {
        let ctx = load("component A {\n<p>x</p>\n}}\n");
        assert_eq!(ctx.component("A"), Some("<p>x</p>"));
    }

    #[test]
    fn test_import_missing_library_not_found() {
        let mut ctx = Context::new();
        let err = import_library("nope_really_missing", &mut ctx).unwrap_err();
        assert_eq!(err.kind(), "LibraryNotFound");
        assert!(ctx.imported_libraries.is_empty());
        assert!(ctx.components.is_empty());
    }

    #[test]
    fn test_import_from_search_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("ui.wl"),
            "component Chip {\n<span>{{label}}</span>\n}\n",
        )
        .unwrap();
        let mut ctx = Context::with_library_dirs(vec![dir.path().to_path_buf()]);
        import_library("ui", &mut ctx).unwrap();
        assert_eq!(ctx.component("Chip"), Some("<span>{{label}}</span>"));
        assert_eq!(ctx.imported_libraries, vec!["ui"]);
    }
}
